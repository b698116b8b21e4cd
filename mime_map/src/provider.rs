use std::path::PathBuf;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::apache::load_mime_types_file;
use crate::builtin::BuiltinTable;
use crate::table::MappingTable;

/// Supplies a complete mapping table. The shared default table calls its
/// provider at most once per process, so implementations may be slow or do I/O.
#[cfg_attr(test, mockall::automock)]
pub trait TableProvider {
    fn load(&self) -> anyhow::Result<MappingTable>;
}

/// Where a mapping table comes from.
///
/// Deserializes from e.g. `{"type": "apache", "path": "/etc/mime.types"}`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TableSource {
    /// The dataset compiled into this crate.
    #[default]
    Builtin,
    /// A JSON document with `extensions` and `mimes` members.
    Json { path: PathBuf },
    /// An Apache / nginx style `mime.types` file.
    Apache { path: PathBuf },
}

impl TableProvider for TableSource {
    fn load(&self) -> anyhow::Result<MappingTable> {
        debug!("Loading MIME mapping table from {:?}", self);
        match self {
            TableSource::Builtin => BuiltinTable.load(),
            TableSource::Json { path } => MappingTable::from_json_file(path)
                .with_context(|| format!("reading JSON mapping table {path:?}")),
            TableSource::Apache { path } => load_mime_types_file(path)
                .with_context(|| format!("reading mime.types file {path:?}")),
        }
    }
}
