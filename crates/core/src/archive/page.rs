//! Standalone HTML document listing archived agenda entries.

/// Everything needed to render the archive page.
///
/// All URLs must already be absolute: the page is served from a `blob:`
/// address where relative references would not resolve.
#[derive(Debug, Clone, PartialEq)]
pub struct ArchivePage {
    pub title: String,
    pub stylesheet_url: String,
    pub background_url: String,
    /// Address of the page the entries came from.
    pub return_url: String,
    pub return_label: String,
    /// Outer HTML of each archived entry, embedded verbatim.
    pub entries: Vec<String>,
}

impl ArchivePage {
    pub fn render(&self) -> String {
        let entries_len: usize = self.entries.iter().map(String::len).sum();
        let mut html = String::with_capacity(entries_len + 1024);
        let title = escape_html(&self.title);
        let return_url = escape_html(&self.return_url);

        html.push_str("<!DOCTYPE html>\n<html lang=\"fr\">\n<head>\n");
        html.push_str("<meta charset=\"utf-8\">\n");
        html.push_str(
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
        );
        html.push_str(&format!("<title>{title}</title>\n"));
        // Relative links inside the embedded entries resolve against the origin page.
        html.push_str(&format!("<base href=\"{return_url}\">\n"));
        html.push_str(&format!(
            "<link rel=\"stylesheet\" href=\"{}\">\n",
            escape_html(&self.stylesheet_url)
        ));
        html.push_str("</head>\n");

        let background = format!("background-image:url('{}')", css_escape(&self.background_url));
        html.push_str(&format!(
            "<body class=\"archive-page\" style=\"{}\">\n",
            escape_html(&background)
        ));
        html.push_str("<main class=\"archive\">\n");
        html.push_str(&format!("<h1>{title}</h1>\n"));
        html.push_str("<div class=\"agenda archive-list\">\n");
        for entry in &self.entries {
            html.push_str(entry);
            html.push('\n');
        }
        html.push_str("</div>\n");
        html.push_str(&format!(
            "<p><a class=\"archive-return\" href=\"{return_url}\">{}</a></p>\n",
            escape_html(&self.return_label)
        ));
        html.push_str("</main>\n</body>\n</html>\n");
        html
    }
}

pub(crate) fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn css_escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('\'', "\\'")
}
