use std::collections::HashMap;
use std::env;

use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use jetfuel_contact::RelaySettings;
use jetfuel_notification::SmtpConfig;
use serde::Deserialize;

/// Legacy variable names used by existing deployments, mapped to config keys
const LEGACY_VARS: [(&str, &str); 5] = [
    ("GMAIL_USER", "email.username"),
    ("GMAIL_PASS", "email.password"),
    ("CONTACT_TO", "email.contact_to"),
    ("CONTACT_FROM", "email.contact_from"),
    ("API_KEY", "assistant.api_key"),
];

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub email: EmailConfig,
    pub assistant: AssistantConfig,
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EmailConfig {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub contact_to: Option<String>,
    #[serde(default)]
    pub contact_from: Option<String>,
    pub smtp: SmtpConfig,
}

impl EmailConfig {
    pub fn relay_settings(&self) -> RelaySettings {
        RelaySettings {
            username: self.username.clone(),
            password: self.password.clone(),
            contact_to: self.contact_to.clone(),
            contact_from: self.contact_from.clone(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct AssistantConfig {
    #[serde(default)]
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    pub log_level: String,
    pub format: String,
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Legacy environment variables (GMAIL_USER, GMAIL_PASS, CONTACT_TO, CONTACT_FROM, API_KEY)
    /// 2. Environment variables (JETFUEL__EMAIL__SMTP__PORT, etc.)
    /// 3. Config file specified by path
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        Self::load_with(config_path, env::vars().collect())
    }

    /// Same as [`Config::load`] with an explicit environment
    pub fn load_with(
        config_path: Option<String>,
        vars: HashMap<String, String>,
    ) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("server.static_dir", "dist")?
            .set_default("email.smtp.host", "smtp.gmail.com")?
            .set_default("email.smtp.port", 465)?
            .set_default("email.smtp.tls", true)?
            .set_default("email.smtp.timeout_secs", 30)?
            .set_default("assistant.model", "gemini-3-flash-preview")?
            .set_default(
                "assistant.base_url",
                "https://generativelanguage.googleapis.com",
            )?
            .set_default("assistant.timeout_secs", 30)?
            .set_default("observability.log_level", "info")?
            .set_default("observability.format", "pretty")?;

        let config_file_path = config_path
            .or_else(|| vars.get("CONFIG_PATH").cloned())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Config file is optional
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("JETFUEL")
                .separator("__")
                .try_parsing(true)
                .source(Some(vars.clone())),
        );

        for (var, key) in LEGACY_VARS {
            if let Some(value) = vars.get(var) {
                builder = builder.set_override(key, value.as_str())?;
            }
        }

        let config: Self = builder.build()?.try_deserialize()?;

        Ok(config.normalized())
    }

    /// Empty strings count as unset
    fn normalized(mut self) -> Self {
        fn non_empty(value: Option<String>) -> Option<String> {
            value.filter(|v| !v.is_empty())
        }

        self.email.username = non_empty(self.email.username);
        self.email.password = non_empty(self.email.password);
        self.email.contact_to = non_empty(self.email.contact_to);
        self.email.contact_from = non_empty(self.email.contact_from);
        self.assistant.api_key = non_empty(self.assistant.api_key);
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.email.smtp.port == 0 {
            return Err("SMTP port must be greater than 0".to_string());
        }
        if !matches!(self.observability.format.as_str(), "pretty" | "json") {
            return Err(format!(
                "Unknown log format {:?}, expected \"pretty\" or \"json\"",
                self.observability.format
            ));
        }
        Ok(())
    }
}
