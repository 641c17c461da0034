use std::fs;
use std::path::{Path, PathBuf};

use crate::results::CaptureResult;

/// Filename for the rendered HTML artifact
pub const HTML_FILENAME: &str = "page_content.html";

/// Filename for the full-page screenshot artifact
pub const SCREENSHOT_FILENAME: &str = "screenshot.png";

/// Filename for the newline-separated link list artifact
pub const LINKS_FILENAME: &str = "links.txt";

/// Maps a hostname to a nested output directory under `base`.
///
/// The two rightmost dot-separated labels become the `domain` segment
/// (hyphen-joined); any remaining leading labels become a `subdomain`
/// segment. A host with fewer than two labels (e.g. `localhost`)
/// collapses to a single directory. Any `:port` suffix is stripped
/// first.
///
/// Pure string transformation, no filesystem access.
pub fn derive_output_dir(base: &Path, hostname: &str) -> PathBuf {
    let host = hostname.split(':').next().unwrap_or(hostname);

    let labels: Vec<&str> = host.split('.').collect();
    if labels.len() < 2 {
        return base.join(host);
    }

    let domain = format!("{}-{}", labels[labels.len() - 2], labels[labels.len() - 1]);
    if labels.len() > 2 {
        let subdomain = labels[..labels.len() - 2].join("-");
        base.join(domain).join(subdomain)
    } else {
        base.join(domain)
    }
}

/// Returns the first path in `dir` for `filename` that does not exist
/// yet, probing `filename`, `2-filename`, `3-filename`, ...
///
/// Only checks existence; the file itself is not created.
pub fn next_available(dir: &Path, filename: &str) -> PathBuf {
    let path = dir.join(filename);
    if !path.exists() {
        return path;
    }

    let mut version = 2u32;
    loop {
        let path = dir.join(format!("{}-{}", version, filename));
        if !path.exists() {
            return path;
        }
        version += 1;
    }
}

/// Writes the three capture artifacts into `dir`, each under a
/// versioned filename.
///
/// Artifact writes are independent: a failure is logged as a warning
/// and the remaining artifacts are still attempted.
pub fn save_artifacts(result: &CaptureResult, dir: &Path) {
    ::log::info!("Saving artifacts to {}", dir.display());

    let html_path = next_available(dir, HTML_FILENAME);
    match fs::write(&html_path, result.html.as_bytes()) {
        Ok(()) => println!("Saved HTML content: {}", html_path.display()),
        Err(e) => ::log::warn!("Failed to save HTML content: {}", e),
    }

    let screenshot_path = next_available(dir, SCREENSHOT_FILENAME);
    match fs::write(&screenshot_path, &result.screenshot) {
        Ok(()) => println!("Saved screenshot: {}", screenshot_path.display()),
        Err(e) => ::log::warn!("Failed to save screenshot: {}", e),
    }

    let links_path = next_available(dir, LINKS_FILENAME);
    match fs::write(&links_path, result.links.join("\n")) {
        Ok(()) => println!("Saved link list: {}", links_path.display()),
        Err(e) => ::log::warn!("Failed to save link list: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fresh scratch directory under the system temp dir
    fn scratch_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("page-capture-{}-{}", tag, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_derive_with_subdomain() {
        let dir = derive_output_dir(Path::new("output"), "www.example.com");
        assert_eq!(dir, Path::new("output").join("example-com").join("www"));
    }

    #[test]
    fn test_derive_without_subdomain() {
        let dir = derive_output_dir(Path::new("output"), "example.com");
        assert_eq!(dir, Path::new("output").join("example-com"));
    }

    #[test]
    fn test_derive_single_label_host() {
        let dir = derive_output_dir(Path::new("output"), "localhost");
        assert_eq!(dir, Path::new("output").join("localhost"));
    }

    #[test]
    fn test_derive_strips_port() {
        let dir = derive_output_dir(Path::new("output"), "localhost:8080");
        assert_eq!(dir, Path::new("output").join("localhost"));

        let dir = derive_output_dir(Path::new("output"), "www.example.com:443");
        assert_eq!(dir, Path::new("output").join("example-com").join("www"));
    }

    #[test]
    fn test_derive_multi_label_subdomain() {
        // Two-rightmost-labels rule: co.uk is treated as the domain
        let dir = derive_output_dir(Path::new("output"), "blog.example.co.uk");
        assert_eq!(dir, Path::new("output").join("co-uk").join("blog-example"));
    }

    #[test]
    fn test_derive_is_deterministic() {
        let a = derive_output_dir(Path::new("base"), "a.b.c.example.org");
        let b = derive_output_dir(Path::new("base"), "a.b.c.example.org");
        assert_eq!(a, b);
        assert_eq!(a, Path::new("base").join("example-org").join("a-b-c"));
    }

    #[test]
    fn test_next_available_versions_upward() {
        let dir = scratch_dir("versioning");

        let first = next_available(&dir, "f.txt");
        assert_eq!(first, dir.join("f.txt"));
        fs::write(&first, "one").unwrap();

        let second = next_available(&dir, "f.txt");
        assert_eq!(second, dir.join("2-f.txt"));
        fs::write(&second, "two").unwrap();

        let third = next_available(&dir, "f.txt");
        assert_eq!(third, dir.join("3-f.txt"));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_next_available_does_not_create() {
        let dir = scratch_dir("no-create");
        let path = next_available(&dir, "f.txt");
        assert!(!path.exists());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_save_artifacts_writes_all_three() {
        let dir = scratch_dir("save-all");
        let result = CaptureResult::new(
            "https://example.com/".to_string(),
            "<html></html>".to_string(),
            vec![0x89, 0x50, 0x4e, 0x47],
            vec![
                "https://example.com/a".to_string(),
                "https://example.com/b".to_string(),
            ],
        );

        save_artifacts(&result, &dir);

        assert_eq!(
            fs::read_to_string(dir.join(HTML_FILENAME)).unwrap(),
            "<html></html>"
        );
        assert_eq!(
            fs::read(dir.join(SCREENSHOT_FILENAME)).unwrap(),
            vec![0x89, 0x50, 0x4e, 0x47]
        );
        assert_eq!(
            fs::read_to_string(dir.join(LINKS_FILENAME)).unwrap(),
            "https://example.com/a\nhttps://example.com/b"
        );

        // A second run into the same directory versions every artifact
        save_artifacts(&result, &dir);
        assert!(dir.join(format!("2-{}", HTML_FILENAME)).exists());
        assert!(dir.join(format!("2-{}", SCREENSHOT_FILENAME)).exists());
        assert!(dir.join(format!("2-{}", LINKS_FILENAME)).exists());

        let _ = fs::remove_dir_all(&dir);
    }
}
