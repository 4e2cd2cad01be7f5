//! Deployment environment resolution.

use crate::vars::{self, EnvSnapshot};
use serde::Serialize;

/// The two supported deployment environments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeployEnv {
    Production,
    /// Anything that is not exactly `production`, including an unset `ENV`
    Staging,
}

impl DeployEnv {
    /// Resolve a tag. Only the exact string `production` selects production.
    pub fn resolve(tag: Option<&str>) -> Self {
        match tag {
            Some("production") => DeployEnv::Production,
            _ => DeployEnv::Staging,
        }
    }

    /// Resolve from the `ENV` variable.
    pub fn from_env(env: &EnvSnapshot) -> Self {
        Self::resolve(env.get(vars::ENV))
    }

    /// Prefix for the environment-specific variables.
    pub fn prefix(self) -> &'static str {
        match self {
            DeployEnv::Production => "PROD",
            DeployEnv::Staging => "STAGING",
        }
    }

    /// Full variable name for a suffix, e.g. `PROD_DB_HOST`.
    pub fn var_name(self, suffix: &str) -> String {
        format!("{}_{}", self.prefix(), suffix)
    }

    /// Human-readable mode line logged before the document is touched.
    pub fn describe(self) -> String {
        match self {
            DeployEnv::Production => {
                format!("deploy_env is production, using {} variables", self.prefix())
            }
            DeployEnv::Staging => {
                format!("deploy_env is not production, using {} variables", self.prefix())
            }
        }
    }
}

impl std::fmt::Display for DeployEnv {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeployEnv::Production => write!(f, "production"),
            DeployEnv::Staging => write!(f, "staging"),
        }
    }
}
