//! setup-env library
//!
//! This module exports the materializer components for testing and integration.

pub mod cli;
pub mod deploy;
pub mod document;
pub mod error;
pub mod format;
pub mod materialize;
pub mod plan;
pub mod targets;
pub mod vars;

pub use deploy::DeployEnv;
pub use document::ConfigDocument;
pub use error::{ErrorKind, MaterializeError};
pub use materialize::{MaterializeReport, Materializer, materialize};
pub use targets::Targets;
pub use vars::EnvSnapshot;
