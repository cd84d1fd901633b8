use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

const MIB: usize = 1024 * 1024;

/// Room for protobuf framing and the non-payload upload fields.
const MESSAGE_HEADROOM_MB: usize = 16;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Env(#[from] envy::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Console,
}

/// Process configuration, read from the environment (and `.env` when present).
///
/// Field names map to upper-case variables, e.g. `grpc_port` <- `GRPC_PORT`.
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub ik_private_key: String,
    pub ik_public_key: String,
    pub ik_url_endpoint: String,
    #[serde(default = "default_api_base_url")]
    pub ik_api_base_url: String,
    #[serde(default = "default_upload_base_url")]
    pub ik_upload_base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub ik_timeout_secs: u64,

    #[serde(default = "default_grpc_host")]
    pub grpc_host: String,
    #[serde(default = "default_grpc_port")]
    pub grpc_port: u16,
    #[serde(default = "default_max_workers")]
    pub max_workers: usize,

    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_log_format")]
    pub log_format: LogFormat,

    #[serde(default = "default_app_name")]
    pub app_name: String,
    #[serde(default = "default_environment")]
    pub environment: String,
    #[serde(default)]
    pub metrics_enabled: Option<bool>,

    #[serde(default = "default_max_file_size_mb")]
    pub max_file_size_mb: u64,
    #[serde(default = "default_batch_limit")]
    pub max_files_per_batch_delete: usize,
    #[serde(default = "default_max_message_size_mb")]
    pub max_message_size_mb: usize,
    #[serde(default = "default_shutdown_grace_secs")]
    pub shutdown_grace_secs: u64,
}

fn default_api_base_url() -> String {
    "https://api.imagekit.io".to_string()
}

fn default_upload_base_url() -> String {
    "https://upload.imagekit.io".to_string()
}

fn default_timeout_secs() -> u64 {
    60
}

fn default_grpc_host() -> String {
    "0.0.0.0".to_string()
}

fn default_grpc_port() -> u16 {
    50056
}

fn default_max_workers() -> usize {
    10
}

fn default_log_level() -> String {
    "INFO".to_string()
}

fn default_log_format() -> LogFormat {
    LogFormat::Json
}

fn default_app_name() -> String {
    "media-service".to_string()
}

fn default_environment() -> String {
    "development".to_string()
}

fn default_max_file_size_mb() -> u64 {
    100
}

fn default_batch_limit() -> usize {
    100
}

fn default_max_message_size_mb() -> usize {
    256
}

fn default_shutdown_grace_secs() -> u64 {
    30
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter::<_, Settings>(vars)?.validated()
    }

    fn validated(self) -> Result<Self, ConfigError> {
        for (name, value) in [
            ("IK_PRIVATE_KEY", &self.ik_private_key),
            ("IK_PUBLIC_KEY", &self.ik_public_key),
            ("IK_URL_ENDPOINT", &self.ik_url_endpoint),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::Invalid(format!("{} must not be empty", name)));
            }
        }
        if self.max_workers == 0 {
            return Err(ConfigError::Invalid(
                "MAX_WORKERS must be at least 1".to_string(),
            ));
        }
        Ok(self)
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.grpc_host, self.grpc_port)
    }

    /// Metrics are on in production unless explicitly switched off.
    pub fn metrics_enabled(&self) -> bool {
        self.metrics_enabled
            .unwrap_or_else(|| self.environment.eq_ignore_ascii_case("production"))
    }

    pub fn reflection_enabled(&self) -> bool {
        self.environment.eq_ignore_ascii_case("development")
    }

    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.ik_timeout_secs)
    }

    pub fn shutdown_grace(&self) -> Duration {
        Duration::from_secs(self.shutdown_grace_secs)
    }

    /// Transport limit for one gRPC message. Never below the upload ceiling
    /// plus headroom, so oversized uploads reach the size check instead of
    /// being cut off by the codec.
    pub fn max_message_size_bytes(&self) -> usize {
        let ceiling_mb = usize::try_from(self.max_file_size_mb).unwrap_or(usize::MAX);
        let floor_mb = ceiling_mb.saturating_add(MESSAGE_HEADROOM_MB);
        self.max_message_size_mb
            .max(floor_mb)
            .saturating_mul(MIB)
    }
}

#[cfg(test)]
pub(crate) fn test_settings() -> Settings {
    Settings::from_vars(vec![
        ("IK_PRIVATE_KEY".to_string(), "private_test".to_string()),
        ("IK_PUBLIC_KEY".to_string(), "public_test".to_string()),
        (
            "IK_URL_ENDPOINT".to_string(),
            "https://ik.imagekit.io/demo".to_string(),
        ),
    ])
    .expect("test settings")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn defaults_apply_when_only_credentials_are_set() {
        let settings = test_settings();
        assert_eq!(settings.listen_addr(), "0.0.0.0:50056");
        assert_eq!(settings.max_workers, 10);
        assert_eq!(settings.max_file_size_mb, 100);
        assert_eq!(settings.max_files_per_batch_delete, 100);
        assert_eq!(settings.log_format, LogFormat::Json);
        assert_eq!(settings.environment, "development");
        assert!(!settings.metrics_enabled());
        assert_eq!(settings.shutdown_grace(), Duration::from_secs(30));
    }

    #[test]
    fn overrides_are_parsed() {
        let settings = Settings::from_vars(vars(&[
            ("IK_PRIVATE_KEY", "k"),
            ("IK_PUBLIC_KEY", "p"),
            ("IK_URL_ENDPOINT", "https://ik.imagekit.io/x"),
            ("GRPC_PORT", "6000"),
            ("MAX_WORKERS", "4"),
            ("LOG_FORMAT", "console"),
            ("MAX_FILE_SIZE_MB", "5"),
            ("ENVIRONMENT", "production"),
        ]))
        .unwrap();
        assert_eq!(settings.grpc_port, 6000);
        assert_eq!(settings.max_workers, 4);
        assert_eq!(settings.log_format, LogFormat::Console);
        assert_eq!(settings.max_file_size_mb, 5);
        assert!(settings.metrics_enabled());
    }

    #[test]
    fn explicit_metrics_flag_wins_over_environment() {
        let settings = Settings::from_vars(vars(&[
            ("IK_PRIVATE_KEY", "k"),
            ("IK_PUBLIC_KEY", "p"),
            ("IK_URL_ENDPOINT", "e"),
            ("ENVIRONMENT", "production"),
            ("METRICS_ENABLED", "false"),
        ]))
        .unwrap();
        assert!(!settings.metrics_enabled());
    }

    #[test]
    fn missing_credentials_fail() {
        let err = Settings::from_vars(vars(&[("IK_PUBLIC_KEY", "p")])).unwrap_err();
        assert!(matches!(err, ConfigError::Env(_)));

        let err = Settings::from_vars(vars(&[
            ("IK_PRIVATE_KEY", " "),
            ("IK_PUBLIC_KEY", "p"),
            ("IK_URL_ENDPOINT", "e"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("IK_PRIVATE_KEY"));
    }

    #[test]
    fn message_limit_leaves_room_above_the_upload_ceiling() {
        let settings = test_settings();
        assert_eq!(settings.max_message_size_bytes(), 256 * MIB);
        // a 150 MB upload must get past the codec to be rejected by size
        assert!(settings.max_message_size_bytes() > 150 * MIB + MIB);

        let settings = Settings::from_vars(vars(&[
            ("IK_PRIVATE_KEY", "k"),
            ("IK_PUBLIC_KEY", "p"),
            ("IK_URL_ENDPOINT", "e"),
            ("MAX_FILE_SIZE_MB", "500"),
            ("MAX_MESSAGE_SIZE_MB", "100"),
        ]))
        .unwrap();
        assert_eq!(
            settings.max_message_size_bytes(),
            (500 + MESSAGE_HEADROOM_MB) * MIB
        );
    }
}
