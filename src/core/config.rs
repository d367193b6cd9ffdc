use std::env;
use std::str::FromStr;

use crate::shared::constants::{
    DEFAULT_IDENTITY_HEADER, DEFAULT_LEDGER_OPENING_BALANCE, DEFAULT_MAX_AFFECTED_POPULATION,
    DEFAULT_MAX_REPORTS, DEFAULT_SUBMISSION_FEE,
};

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub registry: RegistryConfig,
    pub swagger: SwaggerConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    /// Header carrying the caller identity forwarded by the gateway
    pub identity_header: String,
}

/// Registry limits, fixed for the lifetime of the process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    pub max_reports: u64,
    pub submission_fee: u64,
    pub max_affected_population: u64,
    /// Balance granted to first-time payers by the in-memory ledger
    pub ledger_opening_balance: u64,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub username: Option<String>,
    pub password: Option<String>,
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            app: AppConfig::from_env()?,
            registry: RegistryConfig::from_env()?,
            swagger: SwaggerConfig::from_env()?,
        })
    }
}

/// Parse `raw` as `T`, falling back to `default` when the variable is unset
fn parse_or_default<T: FromStr>(name: &str, raw: Option<String>, default: T) -> Result<T, String> {
    match raw {
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| format!("{} must be a valid number", name)),
        None => Ok(default),
    }
}

fn env_number<T: FromStr>(name: &str, default: T) -> Result<T, String> {
    parse_or_default(name, env::var(name).ok(), default)
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env_number::<u16>("PORT", 3000)?;

        // Parse CORS allowed origins from comma-separated string
        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let identity_header = env::var("IDENTITY_HEADER")
            .ok()
            .map(|s| s.trim().to_ascii_lowercase())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_IDENTITY_HEADER.to_string());

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
            identity_header,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            max_reports: DEFAULT_MAX_REPORTS,
            submission_fee: DEFAULT_SUBMISSION_FEE,
            max_affected_population: DEFAULT_MAX_AFFECTED_POPULATION,
            ledger_opening_balance: DEFAULT_LEDGER_OPENING_BALANCE,
        }
    }
}

impl RegistryConfig {
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            max_reports: env_number("REGISTRY_MAX_REPORTS", DEFAULT_MAX_REPORTS)?,
            submission_fee: env_number("REGISTRY_SUBMISSION_FEE", DEFAULT_SUBMISSION_FEE)?,
            max_affected_population: env_number(
                "REGISTRY_MAX_AFFECTED_POPULATION",
                DEFAULT_MAX_AFFECTED_POPULATION,
            )?,
            ledger_opening_balance: env_number(
                "LEDGER_OPENING_BALANCE",
                DEFAULT_LEDGER_OPENING_BALANCE,
            )?,
        })
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Result<Self, String> {
        // Only use credentials if they are non-empty
        let username = env::var("SWAGGER_USERNAME").ok().filter(|s| !s.is_empty());
        let password = env::var("SWAGGER_PASSWORD").ok().filter(|s| !s.is_empty());
        let title =
            env::var("SWAGGER_TITLE").unwrap_or_else(|_| "Crisis Registry API".to_string());
        let version = env::var("SWAGGER_VERSION").unwrap_or_else(|_| "0.1.0".to_string());
        let description = env::var("SWAGGER_DESCRIPTION")
            .unwrap_or_else(|_| "API documentation for the crisis report registry".to_string());

        Ok(Self {
            username,
            password,
            title,
            version,
            description,
        })
    }

    /// Returns credentials in "username:password" format if auth is enabled
    pub fn credentials(&self) -> Option<String> {
        match (&self.username, &self.password) {
            (Some(user), Some(pass)) => Some(format!("{}:{}", user, pass)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_or_default_uses_default_when_unset() {
        assert_eq!(parse_or_default::<u64>("X", None, 42), Ok(42));
    }

    #[test]
    fn test_parse_or_default_parses_and_trims() {
        assert_eq!(
            parse_or_default::<u64>("X", Some(" 250 ".to_string()), 42),
            Ok(250)
        );
    }

    #[test]
    fn test_parse_or_default_rejects_garbage() {
        let err = parse_or_default::<u64>("REGISTRY_MAX_REPORTS", Some("-5".to_string()), 1)
            .unwrap_err();
        assert_eq!(err, "REGISTRY_MAX_REPORTS must be a valid number");
    }

    #[test]
    fn test_registry_defaults() {
        let config = RegistryConfig::default();
        assert_eq!(config.max_reports, 10_000);
        assert_eq!(config.submission_fee, 500);
        assert_eq!(config.max_affected_population, 10_000_000);
    }

    #[test]
    fn test_swagger_credentials_require_both_parts() {
        let mut swagger = SwaggerConfig {
            username: Some("admin".to_string()),
            password: None,
            title: String::new(),
            version: String::new(),
            description: String::new(),
        };
        assert_eq!(swagger.credentials(), None);

        swagger.password = Some("secret".to_string());
        assert_eq!(swagger.credentials(), Some("admin:secret".to_string()));
    }
}
