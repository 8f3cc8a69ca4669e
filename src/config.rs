use serde::{Deserialize, Serialize};

use std::{env, fs, path::Path, path::PathBuf};

const DEFAULT_PORT: u16 = 3001;
const DEFAULT_SMTP_RELAY: &str = "smtp.gmail.com";
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";
const DEFAULT_MEETING_LINK: &str = "https://meet.google.com/new";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Operator mailbox: sender of both messages and recipient of the booking notice.
    pub sender: String,
    pub smtp_username: String,
    pub smtp_pass: String,
    #[serde(default = "default_smtp_relay")]
    pub smtp_relay: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_cors_origin")]
    pub cors_origin: String,
    #[serde(default)]
    pub static_dir: Option<PathBuf>,
    #[serde(default = "default_meeting_link")]
    pub meeting_link: String,
    pub provider: Provider,
}

/// Who the client is booking with, as shown in the confirmation email.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Provider {
    pub name: String,
    #[serde(default)]
    pub phones: Vec<String>,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_smtp_relay() -> String {
    DEFAULT_SMTP_RELAY.to_string()
}

fn default_cors_origin() -> String {
    DEFAULT_CORS_ORIGIN.to_string()
}

fn default_meeting_link() -> String {
    DEFAULT_MEETING_LINK.to_string()
}

fn load_from_lookup<F>(lookup: F) -> Result<Config, Box<dyn std::error::Error>>
where
    F: Fn(&str) -> Option<String>,
{
    let sender = lookup("EMAIL_USER").ok_or("EMAIL_USER environment variable is required")?;
    let smtp_pass = lookup("EMAIL_PASS").ok_or("EMAIL_PASS environment variable is required")?;

    let port = match lookup("PORT") {
        Some(raw) => raw
            .parse::<u16>()
            .map_err(|e| format!("Failed to parse PORT: {e}"))?,
        None => DEFAULT_PORT,
    };

    let phones = lookup("PROVIDER_PHONES")
        .map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default();

    Ok(Config {
        smtp_username: lookup("SMTP_USERNAME").unwrap_or_else(|| sender.clone()),
        smtp_relay: lookup("SMTP_RELAY").unwrap_or_else(default_smtp_relay),
        cors_origin: lookup("FRONTEND_URL").unwrap_or_else(default_cors_origin),
        static_dir: lookup("STATIC_DIR").map(PathBuf::from),
        meeting_link: lookup("MEETING_LINK").unwrap_or_else(default_meeting_link),
        provider: Provider {
            name: lookup("PROVIDER_NAME")
                .ok_or("PROVIDER_NAME environment variable is required")?,
            phones,
        },
        sender,
        smtp_pass,
        port,
    })
}

fn load_from_file(path: &Path) -> Result<Config, Box<dyn std::error::Error>> {
    let contents = fs::read_to_string(path)?;
    serde_yaml::from_str(&contents).map_err(Into::into)
}

pub fn load_config() -> Result<Config, Box<dyn std::error::Error>> {
    // Retrieve env variable
    let config_path =
        env::var("BOOKING_NOTIFIER_CONFIG").unwrap_or_else(|_| "config.yaml".to_string());

    // Try env path
    if Path::new(&config_path).exists() {
        return load_from_file(Path::new(&config_path));
    }

    // Fallback to config.yaml
    if Path::new("config.yaml").exists() {
        tracing::warn!(
            "Config file '{}' not found, falling back to 'config.yaml'",
            config_path
        );
        return load_from_file(Path::new("config.yaml"));
    }

    // Fallback to config.example.yaml
    if Path::new("config.example.yaml").exists() {
        tracing::warn!(
            "Config file '{}' and 'config.yaml' not found, falling back to 'config.example.yaml'\
             \n This file should not be used and should be replaced with actual data",
            config_path
        );
        return load_from_file(Path::new("config.example.yaml"));
    }

    // Fallback to environment variables
    tracing::info!(
        "No config file found, attempting to load configuration from environment variables"
    );
    match load_from_lookup(|key| env::var(key).ok()) {
        Ok(config) => {
            tracing::info!("Successfully loaded configuration from environment variables");
            Ok(config)
        }
        Err(e) => Err(format!(
            "Config file not found and environment variables are incomplete. \
             Tried: '{config_path}', 'config.yaml', 'config.example.yaml', and environment variables. \
             Error: {e}"
        )
        .into()),
    }
}
