use std::{collections::HashMap, fs::File, io::BufReader, io::Read, path::Path};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{MimeError, Result};

/// The two independently authored halves of an extension <-> MIME type mapping.
///
/// `mimes` maps an extension (no leading dot) to its MIME types and
/// `extensions` maps a MIME type to its extensions. In both, the first entry of
/// a list is the preferred answer. Neither map is derived from the other.
///
/// Keys are stored as given; lookups normalize the query, not the table.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct MappingTable {
    #[serde(default)]
    extensions: HashMap<String, Vec<String>>,
    #[serde(default)]
    mimes: HashMap<String, Vec<String>>,
}

impl MappingTable {
    pub fn new(
        mimes: HashMap<String, Vec<String>>,
        extensions: HashMap<String, Vec<String>>,
    ) -> Self {
        Self { extensions, mimes }
    }

    /// Parses a table from its JSON form:
    /// `{"extensions": {"image/jpeg": ["jpeg", "jpg"]}, "mimes": {"jpg": ["image/jpeg"]}}`.
    /// Either member may be omitted.
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_reader(reader: impl Read) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        debug!("Reading MIME mapping table from {:?}", path.as_ref());
        let file = File::open(&path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Extension -> MIME types.
    pub fn mimes(&self) -> &HashMap<String, Vec<String>> {
        &self.mimes
    }

    /// MIME type -> extensions.
    pub fn extensions(&self) -> &HashMap<String, Vec<String>> {
        &self.extensions
    }

    pub fn is_empty(&self) -> bool {
        self.mimes.is_empty() && self.extensions.is_empty()
    }

    /// Checks that every key could be reached by a normalized query.
    /// A key that is empty, not lowercase, or padded with whitespace is an error.
    pub fn validate(&self) -> Result<()> {
        for key in self.mimes.keys().chain(self.extensions.keys()) {
            if key.is_empty() || normalize(key) != *key {
                return Err(MimeError::UnreachableKey(key.clone()));
            }
        }
        Ok(())
    }
}

/// Query normalization: surrounding padding is trimmed and ASCII letters are lowercased.
///
/// Padding is space, tab, newline, carriage return, NUL and vertical tab.
pub fn normalize(input: &str) -> String {
    input.trim_matches(is_padding).to_ascii_lowercase()
}

fn is_padding(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\0' | '\x0b')
}

#[cfg(test)]
mod tests {
    use super::{normalize, MappingTable};
    use crate::error::{MimeError, Result};

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(" JSON "), "json");
        assert_eq!(normalize("\tImage/JPEG\n"), "image/jpeg");
        assert_eq!(normalize("json"), "json");
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize("json\0"), "json");
        assert_eq!(normalize("\x0b\r\nJSON\0 "), "json");
        // other unicode spaces are kept
        assert_eq!(normalize("\u{a0}json"), "\u{a0}json");
    }

    #[test]
    fn test_parse_json_table() -> Result<()> {
        let table = MappingTable::from_json_str(
            r#"{
                "extensions": {"image/jpeg": ["jpeg", "jpg"]},
                "mimes": {"jpg": ["image/jpeg"], "jpeg": ["image/jpeg"]}
            }"#,
        )?;

        assert_eq!(table.extensions()["image/jpeg"], vec!["jpeg", "jpg"]);
        assert_eq!(table.mimes()["jpg"], vec!["image/jpeg"]);
        assert_eq!(table.mimes().len(), 2);
        Ok(())
    }

    #[test]
    fn test_missing_members_are_empty() -> Result<()> {
        let table = MappingTable::from_json_str(r#"{"mimes": {"txt": ["text/plain"]}}"#)?;
        assert!(table.extensions().is_empty());
        assert!(!table.is_empty());

        let table = MappingTable::from_json_str("{}")?;
        assert!(table.is_empty());
        Ok(())
    }

    #[test]
    fn test_malformed_json() {
        let res = MappingTable::from_json_str(r#"{"mimes": ["json"]}"#);
        assert!(matches!(res, Err(MimeError::JsonParse(_))));
    }

    #[test]
    fn test_validate() -> Result<()> {
        let table = MappingTable::from_json_str(r#"{"mimes": {"json": ["application/json"]}}"#)?;
        table.validate()?;

        let table = MappingTable::from_json_str(r#"{"mimes": {"JSON": ["application/json"]}}"#)?;
        assert!(matches!(table.validate(), Err(MimeError::UnreachableKey(k)) if k == "JSON"));

        let table = MappingTable::from_json_str(r#"{"extensions": {" text/plain": ["txt"]}}"#)?;
        assert!(table.validate().is_err());

        let table = MappingTable::from_json_str(r#"{"extensions": {"": ["txt"]}}"#)?;
        assert!(table.validate().is_err());
        Ok(())
    }
}
