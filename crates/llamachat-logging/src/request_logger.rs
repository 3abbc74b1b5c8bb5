use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use std::fs;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::{get_logs_dir, safe_truncate};

fn masked_key(api_key: Option<&str>) -> String {
    match api_key {
        // A prefix is only safe to show when it is a small part of the key
        Some(key) if key.chars().count() >= 16 => {
            format!("Bearer {}***", key.chars().take(10).collect::<String>())
        }
        Some(_) => "Bearer ***".to_string(),
        None => "(none)".to_string(),
    }
}

fn url_breakdown(url: &str) -> String {
    let mut out = String::new();
    if let Ok(parsed_url) = reqwest::Url::parse(url) {
        out.push_str(&format!("URL: {}\n", url));
        out.push_str(&format!(
            "Host: {}\n",
            parsed_url.host_str().unwrap_or("unknown")
        ));
        out.push_str(&format!(
            "Port: {}\n",
            parsed_url.port().map(|p| p.to_string()).unwrap_or_else(|| {
                if parsed_url.scheme() == "https" {
                    "443 (default)".to_string()
                } else {
                    "80 (default)".to_string()
                }
            })
        ));
        out.push_str(&format!("Scheme: {}\n\n", parsed_url.scheme()));
    } else {
        out.push_str(&format!("URL: {}\n\n", url));
    }
    out
}

/// Log HTTP request details for debugging (console output)
pub fn log_request<T: Serialize>(url: &str, request: &T, api_key: Option<&str>, verbose: bool) {
    if !verbose {
        return;
    }

    println!("\n{}", "═".repeat(80).bright_cyan());
    println!("{}", "🔍 HTTP REQUEST DEBUG".bright_cyan().bold());
    println!("{}", "═".repeat(80).bright_cyan());

    print!("{}", url_breakdown(url));

    println!("{}", "Headers:".bright_yellow());
    println!("  Content-Type: application/json");
    println!("  Authorization: {}", masked_key(api_key));

    println!("\n{}", "Request Body:".bright_yellow());
    match serde_json::to_string_pretty(request) {
        Ok(json) => {
            // Truncate very long requests for readability
            if json.chars().count() > 5000 {
                println!("{}", safe_truncate(&json, 5000));
                println!(
                    "\n{}",
                    format!("... (truncated, total {} bytes)", json.len()).bright_black()
                );
            } else {
                println!("{}", json);
            }
        }
        Err(e) => println!("{}", format!("Error serializing request: {}", e).red()),
    }

    println!("{}", "═".repeat(80).bright_cyan());
    println!();
}

/// Log HTTP request to file for persistent debugging
pub fn log_request_to_file<T: Serialize>(
    url: &str,
    request: &T,
    model_name: &str,
    api_key: Option<&str>,
) -> Result<()> {
    let logs_dir = get_logs_dir()?;

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    // Create filename with timestamp and model name
    let model_name = model_name.replace('/', "-");
    let filename = format!("req-{}-{}.txt", timestamp, model_name);
    let file_path = logs_dir.join(&filename);

    let mut log_content = String::new();
    log_content.push_str("HTTP REQUEST LOG\n");
    log_content.push_str("================\n\n");
    log_content.push_str(&format!("Timestamp: {}\n", timestamp));
    log_content.push_str(&format!("Model: {}\n\n", model_name));

    log_content.push_str(&url_breakdown(url));

    log_content.push_str("Headers:\n");
    log_content.push_str("  Content-Type: application/json\n");
    log_content.push_str(&format!("  Authorization: {}\n\n", masked_key(api_key)));

    log_content.push_str("Request Body:\n");
    match serde_json::to_string_pretty(request) {
        Ok(json) => {
            log_content.push_str(&json);
            log_content.push('\n');
        }
        Err(e) => {
            log_content.push_str(&format!("Error serializing request: {}\n", e));
        }
    }

    fs::write(&file_path, log_content)
        .with_context(|| format!("Failed to write request log to {}", file_path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use serial_test::serial;

    #[test]
    fn test_masked_key_never_leaks_full_key() {
        let masked = masked_key(Some("sk-secret-api-key-1234567890"));
        assert!(masked.starts_with("Bearer sk-secret-a"));
        assert!(masked.ends_with("***"));
        assert!(!masked.contains("1234567890"));
        assert_eq!(masked_key(None), "(none)");
    }

    #[test]
    fn test_masked_key_hides_short_keys_entirely() {
        // A 10-char prefix of a short key would be the whole key
        for key in ["short", "exactly10c", "fifteen-chars15"] {
            let masked = masked_key(Some(key));
            assert_eq!(masked, "Bearer ***");
            assert!(!masked.contains(key));
        }
    }

    #[test]
    #[serial]
    fn test_log_request_to_file_writes_under_home() {
        let tmp = tempfile::tempdir().unwrap();
        let old_home = std::env::var("HOME").ok();
        std::env::set_var("HOME", tmp.path());

        let request = json!({"model": "llama3.1", "messages": []});
        log_request_to_file("http://localhost:11434/api/chat", &request, "llama3.1", None)
            .unwrap();

        let logs_dir = tmp.path().join(".llamachat").join("logs");
        let entries: Vec<_> = std::fs::read_dir(&logs_dir).unwrap().collect();
        assert_eq!(entries.len(), 1);
        let content =
            std::fs::read_to_string(entries[0].as_ref().unwrap().path()).unwrap();
        assert!(content.contains("Host: localhost"));
        assert!(content.contains("Port: 11434"));
        assert!(content.contains("llama3.1"));

        match old_home {
            Some(home) => std::env::set_var("HOME", home),
            None => std::env::remove_var("HOME"),
        }
    }
}
