//! CLI configuration: remote endpoint from the environment, cache slot path
//! resolution.

use std::env;
use std::path::PathBuf;

/// Remote endpoint configuration for the Supabase gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteSettings {
    pub url: String,
    pub anon_key: String,
}

/// Read remote settings from `MOODLOG_SUPABASE_URL` and
/// `MOODLOG_SUPABASE_ANON_KEY`. Returns `None` when either is missing or
/// blank; the store then runs local-only.
pub fn remote_settings_from_env() -> Option<RemoteSettings> {
    let url = normalize(env::var("MOODLOG_SUPABASE_URL").ok()?)?;
    let anon_key = normalize(env::var("MOODLOG_SUPABASE_ANON_KEY").ok()?)?;
    Some(RemoteSettings { url, anon_key })
}

/// Resolve the cache slot path: CLI flag, then `MOODLOG_CACHE_PATH`, then
/// the platform data directory.
pub fn resolve_cache_path(cli_cache_path: Option<PathBuf>) -> PathBuf {
    cli_cache_path
        .or_else(|| env::var_os("MOODLOG_CACHE_PATH").map(PathBuf::from))
        .unwrap_or_else(default_cache_path)
}

fn default_cache_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("moodlog")
        .join("diary.json")
}

fn normalize(value: String) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
