//! Environment variable names and a snapshot of the process environment.
//!
//! The library never calls `std::env` directly; `main` captures the process
//! environment once and everything downstream reads from the snapshot.

use std::collections::HashMap;

/// Deployment-environment tag (`production` selects the `PROD` prefix).
pub const ENV: &str = "ENV";

/// Listen address for the HTTP server, read without a prefix.
pub const PORT: &str = "PORT";

// Prefixed suffixes, combined as `<PREFIX>_<SUFFIX>`
pub const DB_HOST: &str = "DB_HOST";
pub const DB_NAME: &str = "DB_NAME";
pub const DB_USER: &str = "DB_USER";
pub const DB_PASSWORD: &str = "DB_PASSWORD";
pub const REDIS_HOST: &str = "REDIS_HOST";
pub const ZENDESK_AUTH_TOKEN: &str = "ZENDESK_AUTH_TOKEN";
pub const DATADOG_ENV: &str = "DATADOG_ENV";

/// Immutable view of environment variables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    vars: HashMap<String, String>,
}

impl EnvSnapshot {
    /// Capture the current process environment.
    ///
    /// Variables whose name or value is not valid Unicode are skipped and
    /// therefore read as unset.
    pub fn from_process() -> Self {
        let vars = std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect();
        Self { vars }
    }

    /// Build a snapshot from explicit pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }
}
