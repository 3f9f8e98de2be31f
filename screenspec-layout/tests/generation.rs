//! Template matching and latest-only generation.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use screenspec_layout::{
    GenerateRequest, GeneratedLayout, GenerationSession, LayoutGenerator, Result,
    TemplateMatcher,
};

fn matcher() -> TemplateMatcher {
    TemplateMatcher::builtin()
        .unwrap()
        .with_latency(Duration::ZERO)
}

/// Matcher whose latency depends on the requested title.
struct DelayedMatcher {
    inner: TemplateMatcher,
    delays: HashMap<String, Duration>,
}

impl DelayedMatcher {
    fn new(delays: &[(&str, u64)]) -> Self {
        Self {
            inner: matcher(),
            delays: delays
                .iter()
                .map(|(title, ms)| (title.to_string(), Duration::from_millis(*ms)))
                .collect(),
        }
    }
}

#[async_trait]
impl LayoutGenerator for DelayedMatcher {
    async fn generate(&self, request: &GenerateRequest) -> Result<GeneratedLayout> {
        let delay = self
            .delays
            .get(request.title())
            .copied()
            .unwrap_or_default();
        tokio::time::sleep(delay).await;
        self.inner.generate(request).await
    }
}

#[test_log::test(tokio::test)]
async fn product_trigger_yields_product_fields_and_caller_title() {
    let request = GenerateRequest::new("商品登録", "ECサイトで商品を登録する画面").unwrap();
    let layout = matcher().generate(&request).await.unwrap();

    assert_eq!(layout.title, "商品登録");
    assert_eq!(
        layout.field_ids().collect::<Vec<_>>(),
        vec!["product_name", "price", "category", "description", "image"]
    );
    assert_eq!(layout.description, "ECサイトでの商品情報を登録するための画面です。");
    layout.check_consistency("product_registration").unwrap();
}

#[test_log::test(tokio::test)]
async fn unrecognised_text_falls_back_to_user_registration() {
    let request = GenerateRequest::new("新規ユーザー", "ログイン機能が欲しい").unwrap();
    let matcher = matcher();
    let first = matcher.generate(&request).await.unwrap();
    let second = matcher.generate(&request).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(first.title, "新規ユーザー");
    assert_eq!(
        first.field_ids().collect::<Vec<_>>(),
        vec!["user_name", "email", "password", "birth_date"]
    );
}

#[test_log::test(tokio::test(start_paused = true))]
async fn newer_request_wins_when_it_resolves_first() {
    let session = GenerationSession::new(DelayedMatcher::new(&[("商品", 100), ("ユーザー", 10)]));
    let slow = GenerateRequest::new("商品", "商品登録").unwrap();
    let fast = GenerateRequest::new("ユーザー", "ユーザー登録").unwrap();

    let (stale, fresh) = tokio::join!(session.generate(&slow), session.generate(&fast));

    assert!(stale.is_none());
    assert_eq!(fresh.unwrap().title, "ユーザー");
    assert_eq!(session.current().await.unwrap().title, "ユーザー");
    assert!(!session.is_generating().await);
}

#[test_log::test(tokio::test(start_paused = true))]
async fn older_request_resolving_first_is_still_dropped() {
    let session = GenerationSession::new(DelayedMatcher::new(&[("商品", 10), ("ユーザー", 100)]));
    let first = GenerateRequest::new("商品", "商品登録").unwrap();
    let second = GenerateRequest::new("ユーザー", "ユーザー登録").unwrap();

    let (stale, fresh) = tokio::join!(session.generate(&first), session.generate(&second));

    assert!(stale.is_none());
    assert_eq!(fresh.unwrap().title, "ユーザー");
    assert_eq!(session.current().await.unwrap().title, "ユーザー");
}

#[test_log::test(tokio::test(start_paused = true))]
async fn loading_state_tracks_latest_request() {
    let session = GenerationSession::new(DelayedMatcher::new(&[("商品", 50)]));
    let request = GenerateRequest::new("商品", "商品").unwrap();

    let check = async {
        tokio::time::sleep(Duration::from_millis(10)).await;
        session.is_generating().await
    };
    let (layout, in_flight) = tokio::join!(session.generate(&request), check);

    assert!(in_flight);
    assert!(layout.is_some());
    assert!(!session.is_generating().await);
}
