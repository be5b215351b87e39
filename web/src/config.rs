use std::sync::OnceLock;
use std::time::Duration;

const DEFAULT_STUDIO_NAME: &str = "Inkwell Studio";
const DEFAULT_MOCK_LATENCY_MS: u64 = 400;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub studio_name: String,
    /// Delay applied to every server function to mimic a real backend.
    pub mock_latency: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            studio_name: DEFAULT_STUDIO_NAME.to_string(),
            mock_latency: Duration::from_millis(DEFAULT_MOCK_LATENCY_MS),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let studio_name = lookup("INKWELL_STUDIO_NAME")
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| DEFAULT_STUDIO_NAME.to_string());

        let latency_ms = match lookup("INKWELL_MOCK_LATENCY_MS") {
            Some(raw) => raw.trim().parse::<u64>().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "Invalid INKWELL_MOCK_LATENCY_MS, using default");
                DEFAULT_MOCK_LATENCY_MS
            }),
            None => DEFAULT_MOCK_LATENCY_MS,
        };

        Self {
            studio_name,
            mock_latency: Duration::from_millis(latency_ms),
        }
    }
}

/// Stores the configuration for the rest of the process. Later calls are ignored.
pub fn init_config(config: AppConfig) -> &'static AppConfig {
    CONFIG.get_or_init(|| config)
}

pub fn get_config() -> &'static AppConfig {
    CONFIG.get_or_init(AppConfig::default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(AppConfig::from_lookup(lookup_from(&[])), AppConfig::default());
    }

    #[test]
    fn test_reads_values() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("INKWELL_STUDIO_NAME", "Black Lotus"),
            ("INKWELL_MOCK_LATENCY_MS", "0"),
        ]));
        assert_eq!(config.studio_name, "Black Lotus");
        assert_eq!(config.mock_latency, Duration::ZERO);
    }

    #[test]
    fn test_invalid_latency_falls_back() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("INKWELL_STUDIO_NAME", "   "),
            ("INKWELL_MOCK_LATENCY_MS", "soon"),
        ]));
        assert_eq!(config.studio_name, DEFAULT_STUDIO_NAME);
        assert_eq!(config.mock_latency, Duration::from_millis(DEFAULT_MOCK_LATENCY_MS));
    }
}
