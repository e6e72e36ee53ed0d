//! Content types for skill scripts, inferred from the file extension.

use std::path::Path;

pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

const CONTENT_TYPES: &[(&str, &str)] = &[
    ("sh", "application/x-sh"),
    ("bash", "application/x-sh"),
    ("py", "text/x-python"),
    ("js", "text/javascript"),
    ("mjs", "text/javascript"),
    ("ts", "application/typescript"),
    ("rb", "text/x-ruby"),
    ("pl", "text/x-perl"),
    ("ps1", "text/plain"),
    ("json", "application/json"),
    ("yaml", "application/yaml"),
    ("yml", "application/yaml"),
    ("toml", "application/toml"),
    ("md", "text/markdown"),
    ("txt", "text/plain"),
    ("html", "text/html"),
    ("csv", "text/csv"),
];

/// Content type for a file name; unknown or missing extensions map to octet-stream.
pub fn content_type_for(file_name: &str) -> &'static str {
    let Some(ext) = Path::new(file_name).extension().and_then(|ext| ext.to_str()) else {
        return DEFAULT_CONTENT_TYPE;
    };
    CONTENT_TYPES
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(ext))
        .map(|(_, content_type)| *content_type)
        .unwrap_or(DEFAULT_CONTENT_TYPE)
}
