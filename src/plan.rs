//! Read-only preview of which variables feed which target fields.

use crate::deploy::DeployEnv;
use crate::targets::TARGET_FIELDS;
use crate::vars::EnvSnapshot;
use serde::Serialize;

/// One row of the plan. Values are never included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanEntry {
    pub field: String,
    pub var: String,
    pub set: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Plan {
    pub deploy_env: DeployEnv,
    pub prefix: &'static str,
    pub entries: Vec<PlanEntry>,
}

impl Plan {
    pub fn unset_count(&self) -> usize {
        self.entries.iter().filter(|e| !e.set).count()
    }
}

/// Build the plan for the given environment without touching the document.
pub fn plan(env: &EnvSnapshot) -> Plan {
    let deploy_env = DeployEnv::from_env(env);
    let entries = TARGET_FIELDS
        .iter()
        .map(|field| {
            let var = field.source.var_name(deploy_env);
            PlanEntry {
                field: field.path(),
                set: env.is_set(&var),
                var,
            }
        })
        .collect();

    Plan {
        deploy_env,
        prefix: deploy_env.prefix(),
        entries,
    }
}
