//! Configuration module

use std::env;

use wildfire_core::ArtifactConfig;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,

    /// Environment (development, production)
    pub environment: String,

    /// Origins allowed cross-origin access in production
    pub allowed_origins: Vec<String>,

    /// Where the model and scaler are loaded from
    pub artifacts: ArtifactConfig,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),

            environment: env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string()),

            allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .map(|v| parse_origins(&v))
                .unwrap_or_default(),

            artifacts: ArtifactConfig::from_env(),
        }
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            environment: "development".to_string(),
            allowed_origins: Vec::new(),
            artifacts: ArtifactConfig::default(),
        }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins() {
        assert_eq!(
            parse_origins(" https://ops.example.org , ,https://fire.example.org"),
            vec!["https://ops.example.org", "https://fire.example.org"]
        );
        assert!(parse_origins("").is_empty());
    }
}
