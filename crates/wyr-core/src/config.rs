use std::{env, fs, path::Path};

use crate::{errors::Error, Result};

/// Typed configuration, loaded once at startup and passed by reference into
/// the handlers.
#[derive(Clone, Debug)]
pub struct Config {
    /// Gateway/HTTP authentication token.
    pub discord_token: String,
    /// Application id used for command registration.
    pub application_id: u64,
}

impl Config {
    pub fn load() -> Result<Self> {
        load_dotenv_if_present(Path::new(".env"));

        let discord_token = env_str("DISCORD_TOKEN").and_then(non_empty).ok_or_else(|| {
            Error::Config("DISCORD_TOKEN environment variable is required".to_string())
        })?;

        let application_id = env_str("APPLICATION_ID")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|id| *id != 0)
            .ok_or_else(|| {
                Error::Config(
                    "APPLICATION_ID environment variable is required and must be a numeric snowflake"
                        .to_string(),
                )
            })?;

        Ok(Self {
            discord_token,
            application_id,
        })
    }
}

fn env_str(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}

fn load_dotenv_if_present(path: &Path) {
    let Ok(contents) = fs::read_to_string(path) else {
        return;
    };

    for raw in contents.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((k, v)) = line.split_once('=') else {
            continue;
        };

        let key = k.trim();
        if key.is_empty() {
            continue;
        }
        if env::var_os(key).is_some() {
            continue; // do not override existing env
        }

        env::set_var(key, strip_quotes(v.trim()));
    }
}

fn strip_quotes(v: &str) -> String {
    if v.len() >= 2
        && ((v.starts_with('"') && v.ends_with('"'))
            || (v.starts_with('\'') && v.ends_with('\'')))
    {
        return v[1..v.len() - 1].to_string();
    }
    v.to_string()
}
