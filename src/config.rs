//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and `CLINIC_*` environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::booking::MAX_WEEKEND_DATES;
use crate::notify::{EmailJsConfig, Recipient};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub email: EmailConfig,

    #[serde(default)]
    pub booking: BookingConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,

    /// Directory with the built web UI, served at `/` when set
    pub static_dir: Option<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8082
}

fn default_cors_origins() -> Vec<String> {
    vec![
        "http://localhost:8084".to_string(),
        "http://127.0.0.1:8084".to_string(),
    ]
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: default_cors_origins(),
            static_dir: None,
        }
    }
}

/// Outbound email configuration
#[derive(Debug, Clone, Deserialize)]
pub struct EmailConfig {
    /// When false, emails are only logged
    #[serde(default)]
    pub enabled: bool,

    #[serde(default = "default_email_base_url")]
    pub base_url: String,

    #[serde(default)]
    pub service_id: String,

    #[serde(default)]
    pub template_id: String,

    #[serde(default)]
    pub public_key: String,

    pub access_token: Option<String>,

    /// The two practitioner inboxes, in send order
    #[serde(default = "default_practitioner_recipients")]
    pub practitioner_recipients: Vec<String>,

    #[serde(default = "default_practitioner_name")]
    pub practitioner_name: String,

    #[serde(default = "default_sender_name")]
    pub sender_name: String,

    #[serde(default = "default_email_timeout")]
    pub request_timeout_ms: u64,
}

fn default_email_base_url() -> String {
    "https://api.emailjs.com".to_string()
}

fn default_practitioner_recipients() -> Vec<String> {
    vec![
        "senarijitronaldo7@gmail.com".to_string(),
        "clinic-desk@example.com".to_string(),
    ]
}

fn default_practitioner_name() -> String {
    "Dr. Arijit Sen".to_string()
}

fn default_sender_name() -> String {
    "Dr. Arijit Sen Clinic".to_string()
}

fn default_email_timeout() -> u64 {
    10_000 // 10 seconds
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            base_url: default_email_base_url(),
            service_id: String::new(),
            template_id: String::new(),
            public_key: String::new(),
            access_token: None,
            practitioner_recipients: default_practitioner_recipients(),
            practitioner_name: default_practitioner_name(),
            sender_name: default_sender_name(),
            request_timeout_ms: default_email_timeout(),
        }
    }
}

impl EmailConfig {
    /// Client settings for the email service
    pub fn client_config(&self) -> EmailJsConfig {
        EmailJsConfig {
            base_url: self.base_url.clone(),
            service_id: self.service_id.clone(),
            template_id: self.template_id.clone(),
            public_key: self.public_key.clone(),
            access_token: self.access_token.clone().filter(|t| !t.is_empty()),
            sender_name: self.sender_name.clone(),
            request_timeout_ms: self.request_timeout_ms,
        }
    }

    /// Exactly two practitioner inboxes are required
    pub fn practitioners(&self) -> Result<[Recipient; 2], ConfigError> {
        match self.practitioner_recipients.as_slice() {
            [first, second] if !first.trim().is_empty() && !second.trim().is_empty() => Ok([
                Recipient::new(&self.practitioner_name, first.trim()),
                Recipient::new(&self.practitioner_name, second.trim()),
            ]),
            other => Err(ConfigError::Invalid(format!(
                "email.practitioner_recipients needs two addresses, got {}",
                other.len()
            ))),
        }
    }

    /// Credentials needed before real sends are possible
    pub fn missing_credentials(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.service_id.is_empty() {
            missing.push("service_id");
        }
        if self.template_id.is_empty() {
            missing.push("template_id");
        }
        if self.public_key.is_empty() {
            missing.push("public_key");
        }
        missing
    }
}

/// Booking form behaviour
#[derive(Debug, Clone, Deserialize)]
pub struct BookingConfig {
    /// Weekend dates offered by the form
    #[serde(default = "default_weekend_dates")]
    pub weekend_dates: usize,

    /// How long the confirmation stays visible (seconds)
    #[serde(default = "default_confirmation_display")]
    pub confirmation_display_secs: u64,
}

fn default_weekend_dates() -> usize {
    crate::booking::WEEKEND_DATE_COUNT
}

fn default_confirmation_display() -> u64 {
    crate::booking::form::DEFAULT_CONFIRMATION_SECS
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            weekend_dates: default_weekend_dates(),
            confirmation_display_secs: default_confirmation_display(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,

    pub file: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("clinic").join("config.toml")),
            Some(PathBuf::from("/etc/clinic/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from any key lookup
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        // Server
        if let Some(host) = lookup("CLINIC_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("CLINIC_PORT").and_then(|p| p.parse().ok()) {
            self.server.port = port;
        }
        if let Some(dir) = lookup("CLINIC_STATIC_DIR") {
            self.server.static_dir = Some(dir);
        }

        // Email
        if let Some(enabled) = lookup("CLINIC_EMAIL_ENABLED") {
            self.email.enabled = matches!(enabled.to_lowercase().as_str(), "1" | "true" | "yes");
        }
        if let Some(url) = lookup("CLINIC_EMAIL_BASE_URL") {
            self.email.base_url = url;
        }
        if let Some(id) = lookup("CLINIC_EMAIL_SERVICE_ID") {
            self.email.service_id = id;
        }
        if let Some(id) = lookup("CLINIC_EMAIL_TEMPLATE_ID") {
            self.email.template_id = id;
        }
        if let Some(key) = lookup("CLINIC_EMAIL_PUBLIC_KEY") {
            self.email.public_key = key;
        }
        if let Some(token) = lookup("CLINIC_EMAIL_ACCESS_TOKEN") {
            self.email.access_token = Some(token);
        }
        if let Some(list) = lookup("CLINIC_PRACTITIONER_EMAILS") {
            self.email.practitioner_recipients = list
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }

        // Logging
        if let Some(level) = lookup("CLINIC_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("CLINIC_LOG_FORMAT") {
            self.logging.format = format;
        }
    }

    /// Check settings that serde cannot
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.email.practitioners()?;
        if self.booking.weekend_dates == 0 || self.booking.weekend_dates > MAX_WEEKEND_DATES {
            return Err(ConfigError::Invalid(format!(
                "booking.weekend_dates must be between 1 and {}",
                MAX_WEEKEND_DATES
            )));
        }
        match self.logging.format.as_str() {
            "pretty" | "json" => Ok(()),
            other => Err(ConfigError::Invalid(format!(
                "logging.format must be \"pretty\" or \"json\", got {:?}",
                other
            ))),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Clinic Website Configuration
#
# Environment variables override these settings:
# - CLINIC_HOST
# - CLINIC_PORT
# - CLINIC_STATIC_DIR
# - CLINIC_EMAIL_ENABLED
# - CLINIC_EMAIL_BASE_URL
# - CLINIC_EMAIL_SERVICE_ID
# - CLINIC_EMAIL_TEMPLATE_ID
# - CLINIC_EMAIL_PUBLIC_KEY
# - CLINIC_EMAIL_ACCESS_TOKEN
# - CLINIC_PRACTITIONER_EMAILS (comma separated)
# - CLINIC_LOG_LEVEL
# - CLINIC_LOG_FORMAT

[server]
# API server host
host = "0.0.0.0"

# API server port
port = 8082

# Allowed CORS origins
cors_origins = ["http://localhost:8084", "http://127.0.0.1:8084"]

# Serve the built web UI from this directory
# static_dir = "./clinic-ui/dist"

[email]
# Send real emails (false = log only)
enabled = false

# Email service endpoint
base_url = "https://api.emailjs.com"

# Service, template and public key from the email service dashboard
service_id = ""
template_id = ""
public_key = ""

# Optional private key for server-side sends
# access_token = ""

# Practitioner inboxes, notified in this order before the patient
practitioner_recipients = ["senarijitronaldo7@gmail.com", "clinic-desk@example.com"]

practitioner_name = "Dr. Arijit Sen"
sender_name = "Dr. Arijit Sen Clinic"

# Per-request timeout (ms)
request_timeout_ms = 10000

[booking]
# Number of upcoming weekend dates offered
weekend_dates = 8

# Seconds the confirmation stays visible after a successful booking
confirmation_display_secs = 7

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"

# Optional log file path
# file = "/var/log/clinic/clinic.log"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.port, 8082);
        assert!(!config.email.enabled);
        assert_eq!(config.booking.weekend_dates, 8);
        assert_eq!(config.booking.confirmation_display_secs, 7);
        assert_eq!(config.logging.format, "pretty");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        let defaults = Config::default();
        assert_eq!(config.server.port, defaults.server.port);
        assert_eq!(config.server.cors_origins, defaults.server.cors_origins);
        assert_eq!(
            config.email.practitioner_recipients,
            defaults.email.practitioner_recipients
        );
        assert_eq!(config.email.request_timeout_ms, 10_000);
        assert!(config.server.static_dir.is_none());
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[server]\nport = 9000\n\n[email]\nenabled = true\nservice_id = \"svc\""
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert!(config.email.enabled);
        assert_eq!(config.email.service_id, "svc");
        assert_eq!(
            config.email.missing_credentials(),
            vec!["template_id", "public_key"]
        );
    }

    #[test]
    fn test_load_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(matches!(
            Config::load(&missing),
            Err(ConfigError::Io { .. })
        ));

        let bad = dir.path().join("bad.toml");
        std::fs::write(&bad, "[server\nport = ").unwrap();
        assert!(matches!(Config::load(&bad), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("CLINIC_PORT", "9100"),
            ("CLINIC_EMAIL_ENABLED", "true"),
            ("CLINIC_PRACTITIONER_EMAILS", "a@x.org, b@x.org"),
            ("CLINIC_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|k| vars.get(k).map(|v| v.to_string()));

        assert_eq!(config.server.port, 9100);
        assert!(config.email.enabled);
        assert_eq!(config.email.practitioner_recipients, ["a@x.org", "b@x.org"]);
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_bad_port_override_ignored() {
        let mut config = Config::default();
        config.apply_overrides(|k| (k == "CLINIC_PORT").then(|| "not-a-port".to_string()));
        assert_eq!(config.server.port, 8082);
    }

    #[test]
    fn test_practitioners_need_two() {
        let mut email = EmailConfig::default();
        let [first, second] = email.practitioners().unwrap();
        assert_eq!(first.email, "senarijitronaldo7@gmail.com");
        assert_eq!(second.name, "Dr. Arijit Sen");

        email.practitioner_recipients = vec!["only@one.org".to_string()];
        assert!(matches!(email.practitioners(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_validate_log_format() {
        let mut config = Config::default();
        config.logging.format = "xml".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_weekend_dates_range() {
        let mut config = Config::default();
        config.booking.weekend_dates = MAX_WEEKEND_DATES;
        assert!(config.validate().is_ok());

        config.booking.weekend_dates = MAX_WEEKEND_DATES + 1;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        config.booking.weekend_dates = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_client_config_drops_empty_token() {
        let mut email = EmailConfig::default();
        email.access_token = Some(String::new());
        assert!(email.client_config().access_token.is_none());
    }
}
