//! The configuration document rewritten in place.
//!
//! A [`ConfigDocument`] can only be built from YAML whose root is a mapping
//! containing every section in [`REQUIRED_SECTIONS`] as a mapping. Shape
//! errors therefore surface at load time and [`ConfigDocument::apply`] never
//! fails. Everything outside the target leaves is kept as parsed, including
//! key order.

use crate::error::{MaterializeError, Result};
use crate::targets::{REQUIRED_SECTIONS, Targets};
use serde_yaml::{Mapping, Value};
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub struct ConfigDocument {
    root: Mapping,
}

impl ConfigDocument {
    /// Parse and validate a YAML document.
    pub fn parse(content: &str) -> Result<Self> {
        let value: Value = serde_yaml::from_str(content).map_err(MaterializeError::Parse)?;
        let Value::Mapping(root) = value else {
            return Err(MaterializeError::NotAMapping);
        };

        for section in REQUIRED_SECTIONS {
            match root.get(section) {
                Some(Value::Mapping(_)) => {}
                Some(_) => return Err(MaterializeError::SectionNotMapping(section)),
                None => return Err(MaterializeError::MissingSection(section)),
            }
        }

        Ok(Self { root })
    }

    /// Read and validate the document at `path`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| MaterializeError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = content.len(), "Loaded document");
        Self::parse(&content)
    }

    /// Overwrite every target leaf. Unset values become null; missing leaf
    /// keys are appended to their section.
    pub fn apply(&mut self, targets: &Targets) {
        for (field, value) in targets.entries() {
            let value = value.map_or(Value::Null, |v| Value::String(v.to_owned()));
            // Sections were validated in `parse`
            if let Some(Value::Mapping(section)) = self.root.get_mut(field.section) {
                section.insert(Value::String(field.key.to_owned()), value);
            }
        }
    }

    /// Serialize to block-style YAML.
    pub fn render(&self) -> Result<String> {
        serde_yaml::to_string(&self.root).map_err(MaterializeError::Serialize)
    }

    /// Render the whole document, then replace the file at `path`.
    ///
    /// Not atomic: the file is truncated and rewritten in one call.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<String> {
        let path = path.as_ref();
        let rendered = self.render()?;
        std::fs::write(path, &rendered).map_err(|source| MaterializeError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = rendered.len(), "Wrote document");
        Ok(rendered)
    }

    /// Leaf value at `section.key`.
    pub fn get(&self, section: &str, key: &str) -> Option<&Value> {
        self.root.get(section)?.as_mapping()?.get(key)
    }
}
