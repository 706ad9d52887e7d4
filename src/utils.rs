//! Utility functions for directory management
//!
//! Helper functions following the XDG Base Directory specification for
//! portable configuration and data storage across Linux distributions.
//!
//! # Directory Structure
//!
//! - Data: `~/.local/share/handy/` - Application data (config)
//! - State: `~/.local/state/handy/` - Runtime state (logs)

use directories::ProjectDirs;
use std::path::PathBuf;

pub fn get_data_dir() -> Option<PathBuf> {
    ProjectDirs::from("com", "handy", "handy").map(|pd| pd.data_dir().to_path_buf())
}

pub fn get_state_dir() -> Option<PathBuf> {
    ProjectDirs::from("com", "handy", "handy")
        .and_then(|pd| pd.state_dir().map(std::path::Path::to_path_buf))
}

pub fn ensure_dirs() -> std::io::Result<()> {
    #[cfg(unix)]
    {
        use std::fs::DirBuilder;
        use std::os::unix::fs::DirBuilderExt;

        let mut builder = DirBuilder::new();
        builder.mode(0o700); // User read/write/execute only
        builder.recursive(true);

        if let Some(dir) = get_data_dir() {
            builder.create(dir)?;
        }
        if let Some(dir) = get_state_dir() {
            builder.create(dir)?;
        }
    }

    #[cfg(not(unix))]
    {
        if let Some(dir) = get_data_dir() {
            std::fs::create_dir_all(dir)?;
        }
        if let Some(dir) = get_state_dir() {
            std::fs::create_dir_all(dir)?;
        }
    }

    Ok(())
}
