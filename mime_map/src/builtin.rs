use std::collections::HashMap;

use phf::phf_map;
use tracing::debug;

use crate::provider::TableProvider;
use crate::table::MappingTable;

// Values are whitespace separated, preferred entry first.

static BUILTIN_MIMES: phf::Map<&'static str, &'static str> = phf_map! {
    "7z" => "application/x-7z-compressed",
    "aac" => "audio/aac audio/x-aac",
    "avi" => "video/x-msvideo",
    "avif" => "image/avif",
    "bin" => "application/octet-stream",
    "bmp" => "image/bmp image/x-ms-bmp",
    "bz2" => "application/x-bzip2",
    "c" => "text/x-c",
    "conf" => "text/plain",
    "css" => "text/css",
    "csv" => "text/csv text/x-comma-separated-values",
    "doc" => "application/msword",
    "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "eot" => "application/vnd.ms-fontobject",
    "epub" => "application/epub+zip",
    "exe" => "application/x-msdownload application/octet-stream",
    "flac" => "audio/flac audio/x-flac",
    "gif" => "image/gif",
    "gz" => "application/gzip application/x-gzip",
    "heic" => "image/heic",
    "htm" => "text/html",
    "html" => "text/html",
    "ico" => "image/vnd.microsoft.icon image/x-icon",
    "ics" => "text/calendar",
    "jar" => "application/java-archive",
    "java" => "text/x-java-source",
    "jpe" => "image/jpeg",
    "jpeg" => "image/jpeg image/pjpeg",
    "jpg" => "image/jpeg image/pjpeg",
    "js" => "application/javascript text/javascript",
    "json" => "application/json",
    "jsonld" => "application/ld+json",
    "log" => "text/plain",
    "m4a" => "audio/mp4 audio/x-m4a",
    "md" => "text/markdown text/x-markdown",
    "mid" => "audio/midi audio/x-midi",
    "midi" => "audio/midi audio/x-midi",
    "mjs" => "text/javascript application/javascript",
    "mkv" => "video/x-matroska",
    "mov" => "video/quicktime",
    "mp3" => "audio/mpeg audio/mp3",
    "mp4" => "video/mp4 application/mp4",
    "mpeg" => "video/mpeg",
    "mpg" => "video/mpeg",
    "odt" => "application/vnd.oasis.opendocument.text",
    "oga" => "audio/ogg",
    "ogg" => "audio/ogg application/ogg",
    "ogv" => "video/ogg",
    "otf" => "font/otf application/x-font-opentype",
    "pdf" => "application/pdf application/x-pdf",
    "php" => "application/x-httpd-php text/x-php",
    "png" => "image/png",
    "ppt" => "application/vnd.ms-powerpoint",
    "pptx" => "application/vnd.openxmlformats-officedocument.presentationml.presentation",
    "py" => "text/x-python",
    "rar" => "application/vnd.rar application/x-rar-compressed",
    "rtf" => "application/rtf text/rtf",
    "sh" => "application/x-sh",
    "svg" => "image/svg+xml",
    "svgz" => "image/svg+xml",
    "tar" => "application/x-tar",
    "text" => "text/plain",
    "tif" => "image/tiff",
    "tiff" => "image/tiff",
    "toml" => "application/toml",
    "ttf" => "font/ttf application/x-font-ttf",
    "txt" => "text/plain",
    "wasm" => "application/wasm",
    "wav" => "audio/x-wav audio/wav audio/wave",
    "weba" => "audio/webm",
    "webm" => "video/webm",
    "webp" => "image/webp",
    "woff" => "font/woff application/font-woff",
    "woff2" => "font/woff2",
    "xhtml" => "application/xhtml+xml",
    "xls" => "application/vnd.ms-excel",
    "xlsx" => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    "xml" => "application/xml text/xml",
    "yaml" => "application/yaml text/yaml",
    "yml" => "application/yaml text/yaml",
    "zip" => "application/zip application/x-zip-compressed",
};

static BUILTIN_EXTENSIONS: phf::Map<&'static str, &'static str> = phf_map! {
    "application/epub+zip" => "epub",
    "application/font-woff" => "woff",
    "application/gzip" => "gz",
    "application/java-archive" => "jar",
    "application/javascript" => "js mjs",
    "application/json" => "json",
    "application/ld+json" => "jsonld",
    "application/mp4" => "mp4",
    "application/msword" => "doc",
    "application/octet-stream" => "bin exe",
    "application/ogg" => "ogg",
    "application/pdf" => "pdf",
    "application/rtf" => "rtf",
    "application/toml" => "toml",
    "application/vnd.ms-excel" => "xls",
    "application/vnd.ms-fontobject" => "eot",
    "application/vnd.ms-powerpoint" => "ppt",
    "application/vnd.oasis.opendocument.text" => "odt",
    "application/vnd.openxmlformats-officedocument.presentationml.presentation" => "pptx",
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet" => "xlsx",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document" => "docx",
    "application/vnd.rar" => "rar",
    "application/wasm" => "wasm",
    "application/x-7z-compressed" => "7z",
    "application/x-bzip2" => "bz2",
    "application/x-font-opentype" => "otf",
    "application/x-font-ttf" => "ttf",
    "application/x-gzip" => "gz",
    "application/x-httpd-php" => "php",
    "application/x-msdownload" => "exe",
    "application/x-pdf" => "pdf",
    "application/x-rar-compressed" => "rar",
    "application/x-sh" => "sh",
    "application/x-tar" => "tar",
    "application/x-zip-compressed" => "zip",
    "application/xhtml+xml" => "xhtml",
    "application/xml" => "xml",
    "application/yaml" => "yaml yml",
    "application/zip" => "zip",
    "audio/aac" => "aac",
    "audio/flac" => "flac",
    "audio/midi" => "mid midi",
    "audio/mp3" => "mp3",
    "audio/mp4" => "m4a",
    "audio/mpeg" => "mp3",
    "audio/ogg" => "oga ogg",
    "audio/wav" => "wav",
    "audio/wave" => "wav",
    "audio/webm" => "weba",
    "audio/x-aac" => "aac",
    "audio/x-flac" => "flac",
    "audio/x-m4a" => "m4a",
    "audio/x-midi" => "mid midi",
    "audio/x-wav" => "wav",
    "font/otf" => "otf",
    "font/ttf" => "ttf",
    "font/woff" => "woff",
    "font/woff2" => "woff2",
    "image/avif" => "avif",
    "image/bmp" => "bmp",
    "image/gif" => "gif",
    "image/heic" => "heic",
    "image/jpeg" => "jpeg jpg jpe",
    "image/pjpeg" => "jpg jpeg",
    "image/png" => "png",
    "image/svg+xml" => "svg svgz",
    "image/tiff" => "tiff tif",
    "image/vnd.microsoft.icon" => "ico",
    "image/webp" => "webp",
    "image/x-icon" => "ico",
    "image/x-ms-bmp" => "bmp",
    "text/calendar" => "ics",
    "text/css" => "css",
    "text/csv" => "csv",
    "text/html" => "html htm",
    "text/javascript" => "js mjs",
    "text/markdown" => "md",
    "text/plain" => "txt text conf log",
    "text/rtf" => "rtf",
    "text/x-c" => "c",
    "text/x-comma-separated-values" => "csv",
    "text/x-java-source" => "java",
    "text/x-markdown" => "md",
    "text/x-php" => "php",
    "text/x-python" => "py",
    "text/xml" => "xml",
    "text/yaml" => "yaml yml",
    "video/mp4" => "mp4",
    "video/mpeg" => "mpeg mpg",
    "video/ogg" => "ogv",
    "video/quicktime" => "mov",
    "video/webm" => "webm",
    "video/x-matroska" => "mkv",
    "video/x-msvideo" => "avi",
};

/// Provider for the dataset compiled into this crate.
#[derive(Clone, Copy, Debug, Default)]
pub struct BuiltinTable;

impl TableProvider for BuiltinTable {
    fn load(&self) -> anyhow::Result<MappingTable> {
        debug!(
            "Expanding built-in MIME table: {} extensions, {} MIME types",
            BUILTIN_MIMES.len(),
            BUILTIN_EXTENSIONS.len()
        );
        Ok(MappingTable::new(
            expand(&BUILTIN_MIMES),
            expand(&BUILTIN_EXTENSIONS),
        ))
    }
}

fn expand(map: &phf::Map<&'static str, &'static str>) -> HashMap<String, Vec<String>> {
    map.entries()
        .map(|(k, v)| {
            (
                (*k).to_owned(),
                v.split_whitespace().map(str::to_owned).collect(),
            )
        })
        .collect()
}
