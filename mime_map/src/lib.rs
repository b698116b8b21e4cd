#![cfg_attr(feature = "strict", deny(warnings))]

//! Bidirectional lookup between file extensions and MIME types.
//!
//! ```ignore
//! use mime_map::{MimeLookup, MimeTypes};
//!
//! let mime = MimeTypes::new()?;
//! assert_eq!(mime.get_mime_type("JPG"), Some("image/jpeg"));
//! assert_eq!(mime.get_extension("image/jpeg"), Some("jpeg"));
//! ```

mod apache;
mod builtin;
mod error;
mod mime_types;
mod provider;
mod shared;
mod table;

pub use apache::{load_mime_types_file, parse_mime_types};
pub use builtin::BuiltinTable;
pub use error::{MimeError, Result};
pub use mime_types::{MimeLookup, MimeTypes};
pub use provider::{TableProvider, TableSource};
pub use shared::{builtin_table, SharedTable};
pub use table::{normalize, MappingTable};
