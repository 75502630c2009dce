use crate::errors::GrowthError;
use crate::models::ViewMode;
use std::env;

const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub default_mode: ViewMode,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, GrowthError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// `PORT` falls back to 8080 when missing or unparsable. A set but
    /// unknown `GROWTH_VIEW_MODE` is an error.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, GrowthError> {
        let port = lookup("PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let default_mode = match lookup("GROWTH_VIEW_MODE") {
            Some(value) => value.parse::<ViewMode>()?,
            None => ViewMode::default(),
        };

        Ok(Self { port, default_mode })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_without_env() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.default_mode, ViewMode::Weekly);
    }

    #[test]
    fn reads_port_and_mode() {
        let config =
            ServerConfig::from_lookup(lookup(&[("PORT", "3000"), ("GROWTH_VIEW_MODE", "daily")]))
                .unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.default_mode, ViewMode::Daily);
    }

    #[test]
    fn bad_port_falls_back() {
        let config = ServerConfig::from_lookup(lookup(&[("PORT", "http")])).unwrap();
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn bad_mode_is_rejected() {
        let err = ServerConfig::from_lookup(lookup(&[("GROWTH_VIEW_MODE", "hourly")])).unwrap_err();
        assert_eq!(err, GrowthError::UnknownMode("hourly".into()));
    }
}
