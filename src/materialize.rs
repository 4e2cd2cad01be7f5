//! Read, rewrite and persist the configuration document.

use crate::deploy::DeployEnv;
use crate::document::ConfigDocument;
use crate::error::Result;
use crate::targets::Targets;
use crate::vars::EnvSnapshot;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Default document path, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "env.yml";

/// Outcome of a materializer run.
#[derive(Debug, Clone, Serialize)]
pub struct MaterializeReport {
    pub deploy_env: DeployEnv,
    pub path: PathBuf,
    /// Dotted paths whose variable was set
    pub set_fields: Vec<String>,
    /// Dotted paths written as null
    pub unset_fields: Vec<String>,
    /// The document as written (or as it would be written on a dry run)
    #[serde(skip)]
    pub rendered: String,
    pub written: bool,
}

/// Configured materializer run.
#[derive(Debug, Clone)]
pub struct Materializer {
    path: PathBuf,
    dry_run: bool,
}

impl Materializer {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            dry_run: false,
        }
    }

    /// Render without writing the file.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Run the whole pipeline.
    ///
    /// Every mutation happens in memory before the file is opened for
    /// writing, so a read, parse or schema error leaves the file untouched.
    pub fn run(&self, env: &EnvSnapshot) -> Result<MaterializeReport> {
        let deploy_env = DeployEnv::from_env(env);
        info!("{}", deploy_env.describe());

        let mut document = ConfigDocument::load(&self.path)?;
        let targets = Targets::from_env(env, deploy_env);

        let mut set_fields = Vec::new();
        let mut unset_fields = Vec::new();
        for (field, value) in targets.entries() {
            let var = field.source.var_name(deploy_env);
            if value.is_some() {
                debug!(field = %field.path(), var = %var, "Setting from environment");
                set_fields.push(field.path());
            } else {
                debug!(field = %field.path(), var = %var, "Variable unset, writing null");
                unset_fields.push(field.path());
            }
        }

        document.apply(&targets);

        let rendered = if self.dry_run {
            document.render()?
        } else {
            document.save(&self.path)?
        };

        if self.dry_run {
            info!("{} dry run completed, file not written", self.path.display());
        } else {
            info!("{} setup completed", self.path.display());
        }

        Ok(MaterializeReport {
            deploy_env,
            path: self.path.clone(),
            set_fields,
            unset_fields,
            rendered,
            written: !self.dry_run,
        })
    }
}

/// Materialize the document at `path` in place.
pub fn materialize<P: AsRef<Path>>(path: P, env: &EnvSnapshot) -> Result<MaterializeReport> {
    Materializer::new(path.as_ref()).run(env)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MaterializeError;
    use tempfile::TempDir;

    const TEMPLATE: &str = "\
http:
  listen_addr: ':8080'
database:
  host: localhost
  db_name: zen
  user: root
  password: secret
cache:
  host: 127.0.0.1
zendesk:
  auth_token: abc
datadog:
  env: development
";

    #[test]
    fn test_run_writes_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("env.yml");
        std::fs::write(&path, TEMPLATE).unwrap();

        let env = EnvSnapshot::from_pairs([("PORT", "8080"), ("STAGING_DB_HOST", "db1")]);
        let report = materialize(&path, &env).unwrap();

        assert_eq!(report.deploy_env, DeployEnv::Staging);
        assert!(report.written);
        assert_eq!(report.set_fields, vec!["http.listen_addr", "database.host"]);
        assert_eq!(report.unset_fields.len(), 6);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), report.rendered);
    }

    #[test]
    fn test_dry_run_leaves_file_alone() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("env.yml");
        std::fs::write(&path, TEMPLATE).unwrap();

        let env = EnvSnapshot::from_pairs([("ENV", "production"), ("PROD_DB_HOST", "dbprod")]);
        let report = Materializer::new(&path).with_dry_run(true).run(&env).unwrap();

        assert!(!report.written);
        assert!(report.rendered.contains("host: dbprod"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), TEMPLATE);
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("env.yml");
        let err = materialize(&path, &EnvSnapshot::default()).unwrap_err();
        assert!(matches!(err, MaterializeError::Read { .. }));
        assert!(!path.exists());
    }
}
