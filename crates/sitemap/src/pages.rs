use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result};
use vitrine_core::sitemap::PageFilter;
use walkdir::WalkDir;

/// Publishable pages under `root`, relative to it, sorted.
pub fn collect_pages(root: &Path, filter: &PageFilter) -> Result<Vec<PathBuf>> {
    let mut pages = Vec::new();
    let walker = WalkDir::new(root).into_iter().filter_entry(|entry| {
        // Prune excluded directories instead of walking into them.
        !(entry.depth() > 0
            && entry.file_type().is_dir()
            && entry
                .file_name()
                .to_str()
                .is_some_and(|name| filter.exclude_dirs.iter().any(|d| d == name)))
    });
    for entry in walker {
        let entry = entry.with_context(|| format!("walking {}", root.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let rel = entry
            .path()
            .strip_prefix(root)
            .with_context(|| format!("{} is outside {}", entry.path().display(), root.display()))?;
        if filter.is_page(rel) {
            pages.push(rel.to_path_buf());
        }
    }
    pages.sort();
    Ok(pages)
}

/// `a/b/index.html` with `/` separators whatever the platform.
pub fn url_path(rel: &Path) -> String {
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// ISO 8601 committer date of the last commit touching `rel`.
///
/// `None` when git is unavailable, the file is untracked, or the directory
/// is not a repository.
pub fn last_commit_date(root: &Path, rel: &Path) -> Option<String> {
    let output = Command::new("git")
        .arg("-C")
        .arg(root)
        .args(["log", "-1", "--format=%cI", "--"])
        .arg(rel)
        .output()
        .ok()?;
    if !output.status.success() {
        tracing::debug!(path = %rel.display(), "git log failed");
        return None;
    }
    let date = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if date.is_empty() { None } else { Some(date) }
}
