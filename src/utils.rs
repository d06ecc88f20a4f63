use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Appends `.ext` to `path` unconditionally, keeping any existing extension.
///
/// ```text
/// out      -> out.smv
/// out.spec -> out.spec.smv
/// ```
pub fn append_extension(path: &Path, ext: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".");
    name.push(ext);
    PathBuf::from(name)
}

/// Appends `.ext` to `path` unless its file name already ends with `.ext`.
///
/// ```text
/// out      -> out.ltl
/// out.ltl  -> out.ltl
/// dir/.ltl -> dir/.ltl
/// ```
pub fn ensure_extension(path: &Path, ext: &str) -> PathBuf {
    let suffix = format!(".{}", ext);
    if path.file_name().is_some_and(|name| name.to_string_lossy().ends_with(&suffix)) {
        path.to_path_buf()
    } else {
        append_extension(path, ext)
    }
}
