//! The layout matcher.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::error::Result;
use crate::layout::{GenerateRequest, GeneratedLayout};
use crate::template::TemplateTable;

/// Default simulated generation delay.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(2000);

/// Produces a layout for a generation request.
#[async_trait]
pub trait LayoutGenerator: Send + Sync {
    async fn generate(&self, request: &GenerateRequest) -> Result<GeneratedLayout>;
}

/// Substring classifier over a [`TemplateTable`].
///
/// Idempotent for identical requests against the same table. The returned
/// title is always the request's title.
#[derive(Debug, Clone)]
pub struct TemplateMatcher {
    table: Arc<TemplateTable>,
    latency: Duration,
}

impl TemplateMatcher {
    pub fn new(table: TemplateTable) -> Self {
        Self {
            table: Arc::new(table),
            latency: DEFAULT_LATENCY,
        }
    }

    /// Matcher over the built-in templates.
    pub fn builtin() -> Result<Self> {
        Ok(Self::new(TemplateTable::builtin()?))
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    pub fn table(&self) -> &TemplateTable {
        &self.table
    }

    /// Select and instantiate without waiting.
    pub fn match_request(&self, request: &GenerateRequest) -> GeneratedLayout {
        let template = self.table.select(request.requirements());
        let fallback = !template.matches(request.requirements());
        debug!(template = %template.name, fallback, "template selected");
        template.instantiate(request.title())
    }
}

#[async_trait]
impl LayoutGenerator for TemplateMatcher {
    async fn generate(&self, request: &GenerateRequest) -> Result<GeneratedLayout> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        Ok(self.match_request(request))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher() -> TemplateMatcher {
        TemplateMatcher::builtin().unwrap().with_latency(Duration::ZERO)
    }

    #[test]
    fn product_trigger_selects_product_template() {
        let req = GenerateRequest::new("在庫画面", "新しい商品を追加したい").unwrap();
        let layout = matcher().match_request(&req);
        assert_eq!(layout.title, "在庫画面");
        assert!(layout.field_ids().any(|id| id == "price"));
    }

    #[test]
    fn unmatched_text_falls_back_to_default() {
        let req = GenerateRequest::new("設定", "通知設定を変更する").unwrap();
        let layout = matcher().match_request(&req);
        assert_eq!(
            layout.field_ids().collect::<Vec<_>>(),
            vec!["user_name", "email", "password", "birth_date"]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn generate_waits_for_latency() {
        let matcher = TemplateMatcher::builtin().unwrap();
        assert_eq!(matcher.latency(), DEFAULT_LATENCY);
        let req = GenerateRequest::new("商品登録", "商品").unwrap();
        let start = tokio::time::Instant::now();
        let layout = matcher.generate(&req).await.unwrap();
        assert!(start.elapsed() >= DEFAULT_LATENCY);
        assert_eq!(layout.title, "商品登録");
    }

    #[tokio::test]
    async fn generate_is_idempotent() {
        let matcher = matcher();
        let req = GenerateRequest::new("ユーザー", "ユーザー登録").unwrap();
        let a = matcher.generate(&req).await.unwrap();
        let b = matcher.generate(&req).await.unwrap();
        assert_eq!(a, b);
    }
}
