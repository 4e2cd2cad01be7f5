//! The eight target fields and the typed record holding their values.

use crate::deploy::DeployEnv;
use crate::vars::{self, EnvSnapshot};

/// Top-level sections that must exist (as mappings) in every document.
pub const REQUIRED_SECTIONS: [&str; 5] = ["http", "database", "cache", "zendesk", "datadog"];

/// Where a target field takes its value from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarSource {
    /// A variable read as-is, regardless of deployment environment
    Fixed(&'static str),
    /// A suffix combined with the deployment prefix
    Prefixed(&'static str),
}

impl VarSource {
    pub fn var_name(self, deploy_env: DeployEnv) -> String {
        match self {
            VarSource::Fixed(name) => name.to_string(),
            VarSource::Prefixed(suffix) => deploy_env.var_name(suffix),
        }
    }
}

/// One overwritten leaf: `section.key` fed by `source`, stored in
/// [`Targets`] through its two accessors.
#[derive(Clone, Copy)]
pub struct TargetField {
    pub section: &'static str,
    pub key: &'static str,
    pub source: VarSource,
    slot: fn(&Targets) -> &Option<String>,
    slot_mut: fn(&mut Targets) -> &mut Option<String>,
}

impl TargetField {
    const fn new(
        section: &'static str,
        key: &'static str,
        source: VarSource,
        slot: fn(&Targets) -> &Option<String>,
        slot_mut: fn(&mut Targets) -> &mut Option<String>,
    ) -> Self {
        Self {
            section,
            key,
            source,
            slot,
            slot_mut,
        }
    }

    /// Dotted path, e.g. `database.host`.
    pub fn path(&self) -> String {
        format!("{}.{}", self.section, self.key)
    }
}

/// All target fields in the order they are applied.
pub static TARGET_FIELDS: [TargetField; 8] = [
    TargetField::new(
        "http",
        "listen_addr",
        VarSource::Fixed(vars::PORT),
        |t| &t.http.listen_addr,
        |t| &mut t.http.listen_addr,
    ),
    TargetField::new(
        "database",
        "host",
        VarSource::Prefixed(vars::DB_HOST),
        |t| &t.database.host,
        |t| &mut t.database.host,
    ),
    TargetField::new(
        "database",
        "db_name",
        VarSource::Prefixed(vars::DB_NAME),
        |t| &t.database.db_name,
        |t| &mut t.database.db_name,
    ),
    TargetField::new(
        "database",
        "user",
        VarSource::Prefixed(vars::DB_USER),
        |t| &t.database.user,
        |t| &mut t.database.user,
    ),
    TargetField::new(
        "database",
        "password",
        VarSource::Prefixed(vars::DB_PASSWORD),
        |t| &t.database.password,
        |t| &mut t.database.password,
    ),
    TargetField::new(
        "cache",
        "host",
        VarSource::Prefixed(vars::REDIS_HOST),
        |t| &t.cache.host,
        |t| &mut t.cache.host,
    ),
    TargetField::new(
        "zendesk",
        "auth_token",
        VarSource::Prefixed(vars::ZENDESK_AUTH_TOKEN),
        |t| &t.zendesk.auth_token,
        |t| &mut t.zendesk.auth_token,
    ),
    TargetField::new(
        "datadog",
        "env",
        VarSource::Prefixed(vars::DATADOG_ENV),
        |t| &t.datadog.env,
        |t| &mut t.datadog.env,
    ),
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpTargets {
    pub listen_addr: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatabaseTargets {
    pub host: Option<String>,
    pub db_name: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheTargets {
    pub host: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ZendeskTargets {
    pub auth_token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatadogTargets {
    pub env: Option<String>,
}

/// Values for every target field. `None` is written to the document as null.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Targets {
    pub http: HttpTargets,
    pub database: DatabaseTargets,
    pub cache: CacheTargets,
    pub zendesk: ZendeskTargets,
    pub datadog: DatadogTargets,
}

impl Targets {
    /// Read every target value for the given deployment environment.
    pub fn from_env(env: &EnvSnapshot, deploy_env: DeployEnv) -> Self {
        let mut targets = Targets::default();
        for field in &TARGET_FIELDS {
            *(field.slot_mut)(&mut targets) =
                env.get(&field.source.var_name(deploy_env)).map(str::to_owned);
        }
        targets
    }

    /// Value for `section.key`, or `None` if that is not a target field.
    pub fn get(&self, section: &str, key: &str) -> Option<&Option<String>> {
        TARGET_FIELDS
            .iter()
            .find(|f| f.section == section && f.key == key)
            .map(|f| (f.slot)(self))
    }

    /// Every target field paired with its value, in table order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static TargetField, Option<&str>)> + '_ {
        TARGET_FIELDS
            .iter()
            .map(move |field| (field, (field.slot)(self).as_deref()))
    }
}
