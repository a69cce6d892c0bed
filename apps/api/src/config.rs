use anyhow::{bail, Context, Result};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Number of questions drawn per session. `None` serves the full bank for the role.
    pub questions_per_session: Option<usize>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            questions_per_session: optional_env("QUESTIONS_PER_SESSION")
                .map(|raw| parse_questions_per_session(&raw))
                .transpose()?,
        })
    }
}

#[cfg(test)]
impl Default for Config {
    fn default() -> Self {
        Self {
            port: 5000,
            rust_log: "info".to_string(),
            questions_per_session: None,
        }
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_questions_per_session(raw: &str) -> Result<usize> {
    let count = raw
        .trim()
        .parse::<usize>()
        .with_context(|| format!("QUESTIONS_PER_SESSION must be a positive integer, got '{raw}'"))?;
    if count == 0 {
        bail!("QUESTIONS_PER_SESSION must be greater than zero");
    }
    Ok(count)
}
