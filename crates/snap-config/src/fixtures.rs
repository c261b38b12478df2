//! Extra domain fixture entries declared in config.

use serde::{Deserialize, Serialize};
use snap_core::DomainFixture;

/// One `[[fixtures]]` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FixtureEntry {
    pub type_name: String,
    pub identifier: String,
    pub path: String,
}

impl From<&FixtureEntry> for DomainFixture {
    fn from(entry: &FixtureEntry) -> Self {
        Self::new(&entry.type_name, &entry.identifier, &entry.path)
    }
}
