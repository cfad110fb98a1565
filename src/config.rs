#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub seed_demo_data: bool,
    pub max_body_bytes: usize,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            listen_addr: std::env::var("LISTEN_ADDR")
                .unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
            seed_demo_data: std::env::var("SEED_DEMO_DATA")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(true),
            // 1 MiB default; the largest legal payload (a 1500-char
            // description plus metadata) is far below this.
            max_body_bytes: std::env::var("MAX_BODY_BYTES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(1024 * 1024),
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.listen_addr.is_empty() {
            return Err("LISTEN_ADDR cannot be empty".to_string());
        }

        if self.max_body_bytes < 4096 {
            return Err("MAX_BODY_BYTES must be at least 4096".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> Config {
        Config {
            listen_addr: "127.0.0.1:0".to_string(),
            seed_demo_data: false,
            max_body_bytes: 1024 * 1024,
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn test_empty_listen_addr_rejected() {
        let mut config = base_config();
        config.listen_addr = String::new();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_tiny_body_limit_rejected() {
        let mut config = base_config();
        config.max_body_bytes = 100;

        assert!(config.validate().is_err());
    }
}
