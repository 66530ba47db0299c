//! `sitemap.xml` generation for the static site.
//!
//! Which files count as pages, how a page path becomes its canonical URL,
//! and the XML itself. Discovering files and asking git for dates is left to
//! the `vitrine-sitemap` binary.

use std::path::{Component, Path};

use crate::archive::page::escape_html;

/// Selects the publishable pages of the site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageFilter {
    pub extensions: Vec<String>,
    /// Any path component equal to one of these excludes the file.
    pub exclude_dirs: Vec<String>,
    pub exclude_files: Vec<String>,
}

impl Default for PageFilter {
    fn default() -> Self {
        let strings = |items: &[&str]| items.iter().map(|s| (*s).to_string()).collect();
        Self {
            extensions: strings(&["html"]),
            exclude_dirs: strings(&[
                "node_modules",
                ".git",
                ".github",
                "assets",
                "static",
                "images",
                "img",
                "css",
                "js",
            ]),
            // The 404 page is not meant to be indexed.
            exclude_files: strings(&["404.html"]),
        }
    }
}

impl PageFilter {
    /// `rel` is relative to the site root.
    pub fn is_page(&self, rel: &Path) -> bool {
        let Some(ext) = rel.extension().and_then(|e| e.to_str()) else {
            return false;
        };
        if !self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)) {
            return false;
        }
        let excluded_dir = rel.components().any(|c| match c {
            Component::Normal(part) => part
                .to_str()
                .is_some_and(|p| self.exclude_dirs.iter().any(|d| d == p)),
            _ => false,
        });
        if excluded_dir {
            return false;
        }
        let name = rel.file_name().and_then(|n| n.to_str()).unwrap_or_default();
        !self.exclude_files.iter().any(|f| f == name)
    }
}

/// Canonical URL of a page: `dir/index.html` is served as `dir/`.
///
/// `rel` uses `/` separators, relative to the site root.
pub fn page_url(base: &str, rel: &str) -> String {
    let base = base.trim_end_matches('/');
    let rel = rel.trim_start_matches("./").trim_start_matches('/');
    if rel == "index.html" {
        format!("{base}/")
    } else if let Some(dir) = rel.strip_suffix("/index.html") {
        format!("{base}/{dir}/")
    } else {
        format!("{base}/{rel}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapEntry {
    pub loc: String,
    /// ISO 8601 date or date-time.
    pub lastmod: String,
}

pub fn render_sitemap(entries: &[SitemapEntry]) -> String {
    let mut xml = String::with_capacity(entries.len() * 120 + 128);
    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n");
    let items: Vec<String> = entries
        .iter()
        .map(|e| {
            format!(
                "  <url>\n    <loc>{}</loc>\n    <lastmod>{}</lastmod>\n  </url>",
                escape_html(&e.loc),
                escape_html(&e.lastmod)
            )
        })
        .collect();
    xml.push_str(&items.join("\n"));
    xml.push_str("\n</urlset>\n");
    xml
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://bertrandcausse.com";

    #[test]
    fn index_pages_map_to_directories() {
        assert_eq!(page_url(BASE, "index.html"), "https://bertrandcausse.com/");
        assert_eq!(page_url(BASE, "expos/index.html"), "https://bertrandcausse.com/expos/");
        assert_eq!(page_url(BASE, "bio.html"), "https://bertrandcausse.com/bio.html");
    }

    #[test]
    fn base_trailing_slash_and_dot_prefix() {
        assert_eq!(page_url("https://a.org/", "./bio.html"), "https://a.org/bio.html");
        assert_eq!(page_url("https://a.org", "myindex.html"), "https://a.org/myindex.html");
    }

    #[test]
    fn filter_matches_pages_only() {
        let filter = PageFilter::default();
        assert!(filter.is_page(Path::new("index.html")));
        assert!(filter.is_page(Path::new("expos/2024.HTML")));
        assert!(!filter.is_page(Path::new("404.html")));
        assert!(!filter.is_page(Path::new("style.css")));
        assert!(!filter.is_page(Path::new("assets/demo.html")));
        assert!(!filter.is_page(Path::new("node_modules/pkg/readme.html")));
        assert!(!filter.is_page(Path::new("README")));
    }

    #[test]
    fn renders_urlset_with_escaping() {
        let xml = render_sitemap(&[
            SitemapEntry {
                loc: "https://a.org/".into(),
                lastmod: "2025-02-01T10:00:00+01:00".into(),
            },
            SitemapEntry {
                loc: "https://a.org/q?a=1&b=2".into(),
                lastmod: "2025-02-02".into(),
            },
        ]);
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset"));
        assert!(xml.contains("    <loc>https://a.org/</loc>\n    <lastmod>2025-02-01T10:00:00+01:00</lastmod>"));
        assert!(xml.contains("<loc>https://a.org/q?a=1&amp;b=2</loc>"));
        assert!(xml.ends_with("  </url>\n</urlset>\n"));
        assert_eq!(xml.matches("<url>").count(), 2);
    }
}
