/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use std::env;
use std::str::FromStr;
use tracing::warn;

// Unset variables are silent; unparsable ones are logged and treated as unset.
fn parse_env<T: FromStr>(name: &str) -> Option<T> {
    let raw = env::var(name).ok()?;
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring {}={:?}: not a valid value", name, raw);
            None
        }
    }
}

/// Reads a `SALT_*` setting, falling back to `default` when it is unset or invalid
///
/// Used for settings that always have a value, such as `SALT_API_URL`
/// or `SALT_SKIP_VERIFY`.
pub fn get_env_or_default<T: FromStr>(name: &str, default: T) -> T {
    parse_env(name).unwrap_or(default)
}

/// Reads an optional setting such as `SALT_REST_TIMEOUT`
pub fn get_env_or_none<T: FromStr>(name: &str) -> Option<T> {
    parse_env(name)
}
