use std::{collections::HashMap, sync::Arc};

use crate::error::Result;
use crate::provider::TableProvider;
use crate::shared::{builtin_table, SharedTable};
use crate::table::{normalize, MappingTable};

/// Conversion between file extensions and MIME types.
///
/// Queries are trimmed and lowercased before lookup. Where several answers
/// exist, the single-value queries return the first one in table order.
pub trait MimeLookup {
    /// The preferred MIME type for `extension` (without the leading dot).
    fn get_mime_type(&self, extension: &str) -> Option<&str>;

    /// The preferred extension for `mime_type`.
    fn get_extension(&self, mime_type: &str) -> Option<&str>;

    /// All MIME types for `extension`, preferred first. Empty if unknown.
    fn get_all_mime_types(&self, extension: &str) -> &[String];

    /// All extensions for `mime_type`, preferred first. Empty if unknown.
    fn get_all_extensions(&self, mime_type: &str) -> &[String];
}

/// Read-only lookups over a [`MappingTable`].
///
/// Cloning is cheap; clones and every instance built with [`MimeTypes::new`]
/// share one table.
#[derive(Clone, Debug)]
pub struct MimeTypes {
    mapping: Arc<MappingTable>,
}

impl MimeTypes {
    /// Uses the built-in table, loading it if this is the first use in the process.
    pub fn new() -> Result<Self> {
        Ok(Self {
            mapping: builtin_table()?,
        })
    }

    /// Uses the given table as is. Keys that are not already trimmed and
    /// lowercase will never match.
    pub fn with_table(mapping: MappingTable) -> Self {
        Self {
            mapping: Arc::new(mapping),
        }
    }

    /// Like [`MimeTypes::with_table`], but rejects tables with unreachable keys.
    pub fn with_checked_table(mapping: MappingTable) -> Result<Self> {
        mapping.validate()?;
        Ok(Self::with_table(mapping))
    }

    /// Uses the table held by `shared`, loading it from `provider` if it is not loaded yet.
    pub fn from_shared(shared: &SharedTable, provider: &dyn TableProvider) -> Result<Self> {
        Ok(Self {
            mapping: shared.get_or_load(provider)?,
        })
    }

    pub fn table(&self) -> &MappingTable {
        &self.mapping
    }

    fn lookup<'a>(map: &'a HashMap<String, Vec<String>>, key: &str) -> &'a [String] {
        map.get(&normalize(key)).map(Vec::as_slice).unwrap_or_default()
    }
}

impl From<MappingTable> for MimeTypes {
    fn from(mapping: MappingTable) -> Self {
        Self::with_table(mapping)
    }
}

impl MimeLookup for MimeTypes {
    fn get_mime_type(&self, extension: &str) -> Option<&str> {
        self.get_all_mime_types(extension).first().map(String::as_str)
    }

    fn get_extension(&self, mime_type: &str) -> Option<&str> {
        self.get_all_extensions(mime_type).first().map(String::as_str)
    }

    fn get_all_mime_types(&self, extension: &str) -> &[String] {
        Self::lookup(self.mapping.mimes(), extension)
    }

    fn get_all_extensions(&self, mime_type: &str) -> &[String] {
        Self::lookup(self.mapping.extensions(), mime_type)
    }
}
