//! Store credentials read from the environment.
use std::env;
use std::fmt;

use reqwest::Url;

use crate::domain::ConfigError;

pub const URL_VAR: &str = "SUPABASE_URL";
pub const KEY_VAR: &str = "SUPABASE_KEY";

/// Where the hosted store lives and the key used to reach it.
#[derive(Clone, PartialEq, Eq)]
pub struct StoreConfig {
    url: Url,
    key: String,
}

impl fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreConfig")
            .field("url", &self.url.as_str())
            .field("key", &"<redacted>")
            .finish()
    }
}

impl StoreConfig {
    /// Reads `SUPABASE_URL` and `SUPABASE_KEY` from the process environment. Call
    /// `dotenv::dotenv()` beforehand to pick up a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = required(&lookup, URL_VAR)?;
        let key = required(&lookup, KEY_VAR)?;

        let url = Url::parse(&url).map_err(|e| ConfigError::Invalid {
            name: URL_VAR,
            reason: e.to_string(),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::Invalid {
                name: URL_VAR,
                reason: format!("unsupported scheme {}", url.scheme()),
            });
        }
        if !key.bytes().all(|b| b.is_ascii_graphic()) {
            return Err(ConfigError::Invalid {
                name: KEY_VAR,
                reason: "key must be printable ASCII without spaces".to_string(),
            });
        }

        Ok(StoreConfig { url, key })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

fn required<F>(lookup: &F, name: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
        _ => Err(ConfigError::Missing(name)),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_from_lookup_ok() {
        let config = StoreConfig::from_lookup(lookup(&[
            (URL_VAR, "https://abc.supabase.co"),
            (KEY_VAR, "secret-key"),
        ]))
        .unwrap();

        assert_eq!(config.url().as_str(), "https://abc.supabase.co/");
        assert_eq!(config.key(), "secret-key");
    }

    #[test]
    fn test_missing_url() {
        let result = StoreConfig::from_lookup(lookup(&[(KEY_VAR, "secret-key")]));
        assert_eq!(result, Err(ConfigError::Missing(URL_VAR)));
    }

    #[test]
    fn test_blank_key_is_missing() {
        let result = StoreConfig::from_lookup(lookup(&[
            (URL_VAR, "https://abc.supabase.co"),
            (KEY_VAR, "   "),
        ]));
        assert_eq!(result, Err(ConfigError::Missing(KEY_VAR)));
    }

    #[test]
    fn test_invalid_url() {
        let result = StoreConfig::from_lookup(lookup(&[
            (URL_VAR, "not a url"),
            (KEY_VAR, "secret-key"),
        ]));
        assert!(matches!(
            result,
            Err(ConfigError::Invalid { name: URL_VAR, .. })
        ));

        let result = StoreConfig::from_lookup(lookup(&[
            (URL_VAR, "ftp://abc.supabase.co"),
            (KEY_VAR, "secret-key"),
        ]));
        assert!(matches!(
            result,
            Err(ConfigError::Invalid { name: URL_VAR, .. })
        ));
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = StoreConfig::from_lookup(lookup(&[
            (URL_VAR, "https://abc.supabase.co"),
            (KEY_VAR, "secret-key"),
        ]))
        .unwrap();

        let printed = format!("{:?}", config);
        assert!(!printed.contains("secret-key"));
        assert!(printed.contains("abc.supabase.co"));
    }
}
