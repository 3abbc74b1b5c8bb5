// Logging module - request logging for backend calls
pub mod request_logger;

use anyhow::{Context, Result};
use std::path::PathBuf;

// Re-export request logging functions
pub use request_logger::{log_request, log_request_to_file};

/// Safely truncate a string to a maximum number of characters
pub fn safe_truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else if max_chars < 3 {
        // No room for the "..." suffix; hard cut
        s.chars().take(max_chars).collect()
    } else {
        // Reserve space for "..." suffix
        format!("{}...", s.chars().take(max_chars - 3).collect::<String>())
    }
}

/// Get or create the base llamachat directory (~/.llamachat)
pub fn get_llamachat_dir() -> Result<PathBuf> {
    let home_dir = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .context("Failed to get home directory")?;

    let llamachat_dir = PathBuf::from(home_dir).join(".llamachat");

    if !llamachat_dir.exists() {
        std::fs::create_dir_all(&llamachat_dir)
            .context("Failed to create llamachat directory")?;
    }

    Ok(llamachat_dir)
}

/// Get or create the logs directory (~/.llamachat/logs)
pub fn get_logs_dir() -> Result<PathBuf> {
    let logs_dir = get_llamachat_dir()?.join("logs");

    if !logs_dir.exists() {
        std::fs::create_dir_all(&logs_dir).context("Failed to create logs directory")?;
    }

    Ok(logs_dir)
}
