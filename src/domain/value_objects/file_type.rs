//! File types the build tool expects on file references

use std::path::Path;

/// Type of the `.appex` bundle an extension target produces
pub const APP_EXTENSION_FILE_TYPE: &str = "wrapper.app-extension";

/// `lastKnownFileType` for a file name, from its extension
pub fn last_known_file_type(file_name: &str) -> &'static str {
    let extension = Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("");
    match extension {
        "swift" => "sourcecode.swift",
        "plist" => "text.plist.xml",
        "entitlements" => "text.plist.entitlements",
        "js" => "sourcecode.javascript",
        "json" => "text.json",
        _ => "file",
    }
}

/// Files the sources phase compiles
pub fn is_source_file(file_name: &str) -> bool {
    last_known_file_type(file_name) == "sourcecode.swift"
}
