use crate::utils::get_data_dir;
use serde::{Deserialize, Serialize};

/// Complete application configuration: theme, last open tool, and sticky
/// generator preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub theme_choice: crate::theme::ThemeChoice,
    /// Tool id to reopen on the next launch, `None` for the home screen.
    #[serde(default)]
    pub last_tool: Option<String>,
    #[serde(default = "default_password_length")]
    pub password_length: u8,
    #[serde(default = "default_true")]
    pub password_uppercase: bool,
    #[serde(default = "default_true")]
    pub password_lowercase: bool,
    #[serde(default = "default_true")]
    pub password_digits: bool,
    #[serde(default)]
    pub password_symbols: bool,
    #[serde(default = "default_email_domain")]
    pub email_domain: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme_choice: crate::theme::ThemeChoice::default(),
            last_tool: None,
            password_length: default_password_length(),
            password_uppercase: true,
            password_lowercase: true,
            password_digits: true,
            password_symbols: false,
            email_domain: default_email_domain(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_password_length() -> u8 {
    crate::core::generate::DEFAULT_PASSWORD_LENGTH
}

fn default_email_domain() -> String {
    crate::core::generate::EMAIL_DOMAINS[0].to_string()
}

/// Saves the complete app config to disk using an atomic write pattern.
/// 1. Writes to a temporary file.
/// 2. Sets restrictive permissions (0o600).
/// 3. Atomically renames to the target path.
///
/// # Async
/// Uses `tokio::fs` for non-blocking I/O to avoid blocking the event loop.
pub async fn save_config(config: &AppConfig) -> std::io::Result<()> {
    if let Some(mut path) = get_data_dir() {
        let json = serde_json::to_string_pretty(config)?;

        let mut temp_path = path.clone();
        temp_path.push("config.json.tmp");

        path.push("config.json");

        // Create file with restrictive permissions from the start to prevent
        // a window where the file is briefly world-readable
        #[cfg(unix)]
        {
            use tokio::fs::OpenOptions;
            use tokio::io::AsyncWriteExt;

            let mut file = OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true)
                .mode(0o600)
                .open(&temp_path)
                .await?;

            file.write_all(json.as_bytes()).await?;
            file.sync_all().await?;
        }

        #[cfg(not(unix))]
        {
            use tokio::io::AsyncWriteExt;

            let mut file = tokio::fs::File::create(&temp_path).await?;
            file.write_all(json.as_bytes()).await?;
            file.sync_all().await?;
        }

        // Atomic rename
        tokio::fs::rename(temp_path, path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::StorageFull {
                std::io::Error::new(
                    std::io::ErrorKind::StorageFull,
                    "Disk full: cannot save configuration. Free up space and try again.",
                )
            } else {
                e
            }
        })?;
    }
    Ok(())
}

/// Loads the app config from disk, or returns default if not found.
///
/// # Async
/// Uses `tokio::fs` for non-blocking I/O to avoid blocking the event loop.
pub async fn load_config() -> AppConfig {
    if let Some(mut path) = get_data_dir() {
        path.push("config.json");
        if let Ok(json) = tokio::fs::read_to_string(&path).await
            && let Ok(config) = serde_json::from_str::<AppConfig>(&json)
        {
            return config;
        }
    }
    AppConfig::default()
}

/// Synchronous wrapper for `load_config()` for use during startup initialization.
///
/// This blocks the current thread and should only be used in `State::new()` where
/// async initialization isn't possible. Everywhere else should use async `load_config()`.
pub fn load_config_blocking() -> AppConfig {
    if let Ok(handle) = tokio::runtime::Handle::try_current() {
        handle.block_on(load_config())
    } else {
        // Fallback: create temporary runtime (shouldn't happen in practice)
        tokio::runtime::Runtime::new()
            .map(|rt| rt.block_on(load_config()))
            .unwrap_or_default()
    }
}
