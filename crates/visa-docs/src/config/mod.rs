use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use crate::documents::PlaceholderPolicy;

const DEFAULT_FONT_DIR: &str = "/usr/share/fonts/truetype/dejavu";
const DEFAULT_FONT_REGULAR: &str = "DejaVuSans.ttf";
const DEFAULT_FONT_BOLD: &str = "DejaVuSans-Bold.ttf";
const DEFAULT_CONTACT_EMAIL: &str = "contact@workersunited.eu";

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub fonts: FontConfig,
    pub documents: DocumentConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let fonts = FontConfig {
            dir: PathBuf::from(
                env::var("DOCGEN_FONT_DIR").unwrap_or_else(|_| DEFAULT_FONT_DIR.to_string()),
            ),
            regular: env::var("DOCGEN_FONT_REGULAR")
                .unwrap_or_else(|_| DEFAULT_FONT_REGULAR.to_string()),
            bold: env::var("DOCGEN_FONT_BOLD").unwrap_or_else(|_| DEFAULT_FONT_BOLD.to_string()),
        };

        let issuer_noise_threshold = match env::var("DOCGEN_ISSUER_NOISE_THRESHOLD") {
            Ok(raw) => raw
                .trim()
                .parse::<usize>()
                .map_err(|_| ConfigError::InvalidIssuerThreshold)?,
            Err(_) => PlaceholderPolicy::default().issuer_noise_threshold,
        };
        // Set but blank disables the fallback.
        let fallback_contact_email = env::var("DOCGEN_CONTACT_EMAIL")
            .unwrap_or_else(|_| DEFAULT_CONTACT_EMAIL.to_string())
            .trim()
            .to_string();
        let fallback_contact_email =
            Some(fallback_contact_email).filter(|value| !value.is_empty());

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            fonts,
            documents: DocumentConfig {
                issuer_noise_threshold,
                fallback_contact_email,
            },
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing and metrics controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Where the regular and bold document faces live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontConfig {
    pub dir: PathBuf,
    pub regular: String,
    pub bold: String,
}

impl FontConfig {
    pub fn regular_path(&self) -> PathBuf {
        self.dir.join(&self.regular)
    }

    pub fn bold_path(&self) -> PathBuf {
        self.dir.join(&self.bold)
    }
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_FONT_DIR),
            regular: DEFAULT_FONT_REGULAR.to_string(),
            bold: DEFAULT_FONT_BOLD.to_string(),
        }
    }
}

/// Placeholder defaults applied while building documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentConfig {
    pub issuer_noise_threshold: usize,
    pub fallback_contact_email: Option<String>,
}

impl DocumentConfig {
    pub fn policy(&self) -> PlaceholderPolicy {
        PlaceholderPolicy {
            issuer_noise_threshold: self.issuer_noise_threshold,
            fallback_contact_email: self.fallback_contact_email.clone(),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidIssuerThreshold,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidIssuerThreshold => write!(
                f,
                "DOCGEN_ISSUER_NOISE_THRESHOLD must be a non-negative integer"
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort | ConfigError::InvalidIssuerThreshold => None,
            ConfigError::InvalidHost { source } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        for key in [
            "APP_ENV",
            "APP_HOST",
            "APP_PORT",
            "APP_LOG_LEVEL",
            "DOCGEN_FONT_DIR",
            "DOCGEN_FONT_REGULAR",
            "DOCGEN_FONT_BOLD",
            "DOCGEN_ISSUER_NOISE_THRESHOLD",
            "DOCGEN_CONTACT_EMAIL",
        ] {
            env::remove_var(key);
        }
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.fonts, FontConfig::default());
        let policy = config.documents.policy();
        assert_eq!(
            policy.issuer_noise_threshold,
            PlaceholderPolicy::default().issuer_noise_threshold
        );
        assert_eq!(
            policy.fallback_contact_email.as_deref(),
            Some("contact@workersunited.eu")
        );
    }

    #[test]
    fn blank_contact_email_disables_the_fallback() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("DOCGEN_CONTACT_EMAIL", "   ");

        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.documents.fallback_contact_email, None);
        reset_env();
    }

    #[test]
    fn accepts_localhost_host() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_HOST", "localhost");
        let config = AppConfig::load().expect("config loads");
        let addr = config.server.socket_addr().expect("localhost resolves");
        assert_eq!(addr, SocketAddr::new(IpAddr::from([127, 0, 0, 1]), 3000));
        reset_env();
    }

    #[test]
    fn reads_document_overrides() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("DOCGEN_FONT_DIR", "/opt/fonts");
        env::set_var("DOCGEN_FONT_BOLD", "NotoSans-Bold.ttf");
        env::set_var("DOCGEN_ISSUER_NOISE_THRESHOLD", "5");
        env::set_var("DOCGEN_CONTACT_EMAIL", " office@example.rs ");

        let config = AppConfig::load().expect("config loads");
        assert_eq!(
            config.fonts.bold_path(),
            PathBuf::from("/opt/fonts/NotoSans-Bold.ttf")
        );
        assert_eq!(
            config.fonts.regular_path(),
            PathBuf::from("/opt/fonts/DejaVuSans.ttf")
        );
        let policy = config.documents.policy();
        assert_eq!(policy.issuer_noise_threshold, 5);
        assert_eq!(
            policy.fallback_contact_email.as_deref(),
            Some("office@example.rs")
        );
        reset_env();
    }

    #[test]
    fn rejects_invalid_issuer_threshold() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("DOCGEN_ISSUER_NOISE_THRESHOLD", "three");

        let err = AppConfig::load().expect_err("threshold must be numeric");
        assert!(matches!(err, ConfigError::InvalidIssuerThreshold));
        reset_env();
    }
}
