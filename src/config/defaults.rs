//! Default configuration values
//!
//! Provides default configuration instances and helper functions.

use super::schema::Config;

/// Get the default configuration
pub fn default_config() -> Config {
    Config::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = default_config();
        assert_eq!(config.default_object_type, "queue");
        assert!(config.snapshot_path.is_none());
    }
}
