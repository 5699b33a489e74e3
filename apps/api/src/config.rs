use anyhow::{bail, Context, Result};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_MAX_UPLOAD_MB: usize = 10;
const DEFAULT_MAX_RESUME_CHARS: usize = 20_000;
const BYTES_PER_MB: usize = 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub port: u16,
    pub rust_log: String,
    /// Upper bound on the uploaded resume, in megabytes.
    pub max_upload_mb: usize,
    /// Extracted resume text is cut to this many chars before prompting.
    pub max_resume_chars: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let gemini_api_key = require_env("GEMINI_API_KEY")?;
        if gemini_api_key.trim().is_empty() {
            bail!("Required environment variable 'GEMINI_API_KEY' is empty");
        }

        let max_upload_mb = parse_env("MAX_UPLOAD_MB", DEFAULT_MAX_UPLOAD_MB)
            .context("MAX_UPLOAD_MB must be a whole number of megabytes")?;
        upload_limit_bytes(max_upload_mb)?;

        let max_resume_chars = parse_env("MAX_RESUME_CHARS", DEFAULT_MAX_RESUME_CHARS)
            .and_then(|n| require_positive("MAX_RESUME_CHARS", n))
            .context("MAX_RESUME_CHARS must be a positive integer")?;

        Ok(Config {
            gemini_api_key,
            port: parse_env("PORT", DEFAULT_PORT)
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            max_upload_mb,
            max_resume_chars,
        })
    }

    /// Saturates rather than wraps; `from_env` already rejects sizes that overflow.
    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_mb.saturating_mul(BYTES_PER_MB)
    }
}

/// Megabytes to bytes, rejecting zero and sizes that do not fit in `usize`.
fn upload_limit_bytes(mb: usize) -> Result<usize> {
    let mb = require_positive("MAX_UPLOAD_MB", mb)?;
    mb.checked_mul(BYTES_PER_MB)
        .with_context(|| format!("MAX_UPLOAD_MB={mb} overflows the upload size in bytes"))
}

fn require_positive(key: &str, value: usize) -> Result<usize> {
    if value == 0 {
        bail!("{key} must be greater than zero");
    }
    Ok(value)
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("invalid value '{raw}' for {key}")),
        Err(_) => Ok(default),
    }
}
