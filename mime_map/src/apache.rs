use std::{
    collections::HashMap,
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use tracing::{debug, warn};

use crate::error::Result;
use crate::table::{normalize, MappingTable};

/// Builds a mapping table from the Apache `mime.types` format:
///
/// ```text
/// # comment
/// image/jpeg    jpeg jpg jpe
/// ```
///
/// Both directions are filled in file order, so the first extension listed on
/// a line becomes that type's preferred extension and the first line naming an
/// extension decides its preferred type.
pub fn parse_mime_types(reader: &mut impl BufRead) -> Result<MappingTable> {
    let mut mimes: HashMap<String, Vec<String>> = HashMap::new();
    let mut extensions: HashMap<String, Vec<String>> = HashMap::new();

    for (line_no, line) in reader.lines().enumerate() {
        let line_content = line?;
        let line_content = match line_content.split_once('#') {
            Some((before, _)) => before,
            None => &line_content,
        };

        let mut tokens = line_content.split_whitespace();
        let Some(mime_type) = tokens.next() else {
            continue;
        };
        let mime_type = normalize(mime_type);
        if !mime_type.contains('/') {
            warn!(
                "Skipping line {}: {mime_type:?} is not a MIME type",
                line_no + 1
            );
            continue;
        }

        for ext in tokens {
            let ext = normalize(ext.trim_start_matches('.'));
            if ext.is_empty() {
                continue;
            }
            push_unique(extensions.entry(mime_type.clone()).or_default(), &ext);
            push_unique(mimes.entry(ext).or_default(), &mime_type);
        }
    }

    debug!(
        "Parsed mime.types: {} extensions, {} MIME types",
        mimes.len(),
        extensions.len()
    );
    Ok(MappingTable::new(mimes, extensions))
}

pub fn load_mime_types_file(path: impl AsRef<Path>) -> Result<MappingTable> {
    let file = File::open(&path)?;
    let mut reader = BufReader::new(file);

    parse_mime_types(&mut reader)
}

fn push_unique(list: &mut Vec<String>, value: &str) {
    if !list.iter().any(|v| v == value) {
        list.push(value.to_owned());
    }
}
