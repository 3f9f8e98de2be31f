//! Designer configuration using Figment.

use std::path::{Path, PathBuf};
use std::time::Duration;

use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::matcher::{TemplateMatcher, DEFAULT_LATENCY};
use crate::template::TemplateTable;

/// Prefix for environment overrides, e.g. `SCREENSPEC_GENERATION_LATENCY_MS`.
pub const ENV_PREFIX: &str = "SCREENSPEC_";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignerConfig {
    /// Simulated matcher latency in milliseconds.
    pub generation_latency_ms: u64,
    /// YAML template table replacing the built-in one.
    pub template_file: Option<PathBuf>,
    /// Overrides the table's fallback template.
    pub default_template: Option<String>,
}

impl Default for DesignerConfig {
    fn default() -> Self {
        Self {
            generation_latency_ms: DEFAULT_LATENCY.as_millis() as u64,
            template_file: None,
            default_template: None,
        }
    }
}

impl DesignerConfig {
    /// Load configuration in precedence order (later sources override earlier ones):
    /// 1. Default values
    /// 2. The YAML file, if given and present
    /// 3. Environment variables with the `SCREENSPEC_` prefix
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let config: Self = Self::figment(config_file).extract()?;
        debug!(?config, "designer configuration loaded");
        Ok(config)
    }

    pub fn figment(config_file: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));
        if let Some(path) = config_file {
            figment = figment.merge(Yaml::file(path));
        }
        figment.merge(Env::prefixed(ENV_PREFIX).map(|key| key.as_str().to_lowercase().into()))
    }

    pub fn generation_latency(&self) -> Duration {
        Duration::from_millis(self.generation_latency_ms)
    }

    /// The template table this configuration selects.
    pub fn template_table(&self) -> Result<TemplateTable> {
        let table = match &self.template_file {
            Some(path) => TemplateTable::from_file(path)?,
            None => TemplateTable::builtin()?,
        };
        match &self.default_template {
            Some(name) => table.with_default(name),
            None => Ok(table),
        }
    }

    pub fn build_matcher(&self) -> Result<TemplateMatcher> {
        Ok(TemplateMatcher::new(self.template_table()?).with_latency(self.generation_latency()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = DesignerConfig::default();
        assert_eq!(config.generation_latency(), Duration::from_secs(2));
        assert!(config.template_file.is_none());
        let matcher = config.build_matcher().unwrap();
        assert_eq!(matcher.table().default_template().name, "user_registration");
    }

    #[test]
    fn unknown_default_template_is_an_error() {
        let config = DesignerConfig {
            default_template: Some("missing".into()),
            ..Default::default()
        };
        assert!(config.build_matcher().is_err());
    }
}
