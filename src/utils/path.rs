//! Path utilities: expand ~ and probe user supplied file references.

use std::path::PathBuf;

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// `Some(path)` when `reference` (optionally `file://`-prefixed) names an existing file.
pub fn existing_file(reference: &str) -> Option<PathBuf> {
    let raw = reference.trim().trim_start_matches("file://");
    if raw.is_empty() {
        return None;
    }
    let p = expand_tilde(raw);
    p.is_file().then_some(p)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn existing_file_probe() {
        let f = tempfile::NamedTempFile::new().unwrap();
        let path = f.path().to_string_lossy().to_string();

        assert_eq!(existing_file(&path), Some(f.path().to_path_buf()));
        assert_eq!(existing_file(&format!("file://{path}")), Some(f.path().to_path_buf()));
        assert_eq!(existing_file("Sunrise"), None);
        assert_eq!(existing_file(""), None);
    }
}
