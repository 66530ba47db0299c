//! One scroll tick: title bar first, then sections, flattened into
//! [`StyleCommand`]s for the DOM adapter.

use vitrine_protocol::{
    BarOffset, Rect, SectionStyle, StyleCommand, StyleProperty, StyleTarget, Viewport,
};

use crate::parallax::Parallax;
use crate::title_bar::TitleBar;

/// Outputs of one tick.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollFrame {
    /// `None` when the page has no title bar.
    pub bar: Option<BarOffset>,
    pub sections: Vec<SectionStyle>,
}

impl ScrollFrame {
    /// `rects` are the sections' bounding rects in discovery order, all read
    /// from the same layout snapshot as `viewport`.
    pub fn compute(
        bar: Option<&TitleBar>,
        engine: &Parallax,
        viewport: &Viewport,
        rects: &[Rect],
    ) -> Self {
        let bar = bar.map(|b| b.offset(viewport.scroll_y));
        let sections = engine.update_all(rects, viewport);
        tracing::trace!(scroll_y = viewport.scroll_y, sections = sections.len(), "frame");
        Self { bar, sections }
    }

    pub fn commands(&self) -> Vec<StyleCommand> {
        let mut commands = Vec::with_capacity(self.sections.len() * 2 + 1);
        if let Some(bar) = self.bar {
            commands.push(StyleCommand::SetTransform {
                target: StyleTarget::TitleBar,
                value: bar.to_transform(),
            });
        }
        for (i, style) in self.sections.iter().enumerate() {
            commands.push(StyleCommand::SetProperty {
                target: StyleTarget::Section(i),
                property: StyleProperty::Shift,
                value: format_px(style.shift),
            });
            commands.push(StyleCommand::SetProperty {
                target: StyleTarget::Section(i),
                property: StyleProperty::Alpha,
                value: format_number(style.alpha),
            });
        }
        commands
    }
}

/// `--bg` commands for every section that declares a background image.
pub fn background_commands(urls: &[Option<String>]) -> Vec<StyleCommand> {
    urls.iter()
        .enumerate()
        .filter_map(|(i, url)| {
            url.as_deref().map(|url| StyleCommand::SetProperty {
                target: StyleTarget::Section(i),
                property: StyleProperty::Background,
                value: css_url(url),
            })
        })
        .collect()
}

pub fn format_px(value: f64) -> String {
    format!("{}px", format_number(value))
}

/// Shortest decimal form, with negative zero printed as `0`.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

fn css_url(url: &str) -> String {
    format!("url(\"{}\")", url.replace('\\', "\\\\").replace('"', "\\\""))
}
