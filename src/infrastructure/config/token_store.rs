use std::collections::HashMap;

use super::config_store::HeimdallConfig;

/// Prefix marking a token value as an environment variable reference
pub const ENV_VARIABLE_PREFIX: &str = "env.";

/// Hostname-keyed credential lookup
pub trait TokenProvider: Send + Sync {
    /// Token for `hostname`; empty when nothing is configured
    fn token(&self, hostname: &str) -> String;
}

/// Tokens declared in the `platforms` section of the configuration
#[derive(Debug, Clone, Default)]
pub struct ConfiguredTokens {
    tokens: HashMap<String, String>,
}

impl ConfiguredTokens {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &HeimdallConfig) -> Self {
        config
            .platforms
            .iter()
            .filter_map(|entry| entry.token.as_ref().map(|token| (&entry.hostname, token)))
            .fold(Self::new(), |tokens, (hostname, token)| {
                tokens.with_token(hostname, token)
            })
    }

    pub fn with_token(mut self, hostname: impl AsRef<str>, token: impl Into<String>) -> Self {
        self.tokens
            .insert(hostname.as_ref().to_lowercase(), token.into());
        self
    }

    fn resolve(raw: &str) -> String {
        match raw.strip_prefix(ENV_VARIABLE_PREFIX) {
            Some(variable) => std::env::var(variable).unwrap_or_else(|_| {
                tracing::debug!("Environment variable {} is not set", variable);
                String::new()
            }),
            None => raw.to_string(),
        }
    }
}

impl TokenProvider for ConfiguredTokens {
    fn token(&self, hostname: &str) -> String {
        self.tokens
            .get(&hostname.to_lowercase())
            .map(|raw| Self::resolve(raw))
            .unwrap_or_default()
    }
}
