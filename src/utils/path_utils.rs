//! Output path helpers

use std::path::{Path, PathBuf};

/// Insert `_index` before the extension: `out.png` -> `out_3.png`
pub fn numbered_path(path: &str, index: usize) -> PathBuf {
    suffixed_path(path, &index.to_string())
}

/// Insert `_suffix` before the extension
pub fn suffixed_path(path: &str, suffix: &str) -> PathBuf {
    let path = Path::new(path);
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();

    let file_name = match path.extension() {
        Some(ext) => format!("{}_{}.{}", stem, suffix, ext.to_string_lossy()),
        None => format!("{}_{}", stem, suffix),
    };

    path.with_file_name(file_name)
}
