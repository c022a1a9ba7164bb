//! Database configuration (MongoDB connection)

use serde::Deserialize;

use super::error::ValidationError;

/// MongoDB configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// MongoDB connection URL
    pub url: String,

    /// Database name
    #[serde(default = "default_db_name")]
    pub name: String,
}

impl DatabaseConfig {
    /// Validate database configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.url.starts_with("mongodb://") && !self.url.starts_with("mongodb+srv://") {
            return Err(ValidationError::InvalidDatabaseUrl);
        }
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyDatabaseName);
        }
        Ok(())
    }
}

fn default_db_name() -> String {
    "lifeplan".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_mongodb_url() {
        let config = DatabaseConfig {
            url: "mongodb://localhost:27017".to_string(),
            name: "lifeplan".to_string(),
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_valid_srv_url() {
        let config = DatabaseConfig {
            url: "mongodb+srv://cluster.example.net".to_string(),
            name: "lifeplan".to_string(),
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_non_mongodb_url() {
        let config = DatabaseConfig {
            url: "postgresql://localhost/test".to_string(),
            name: "lifeplan".to_string(),
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_empty_database_name() {
        let config = DatabaseConfig {
            url: "mongodb://localhost:27017".to_string(),
            name: "  ".to_string(),
        };
        assert!(config.validate().is_err());
    }
}
