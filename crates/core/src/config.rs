//! Page configuration.
//!
//! The page may embed a JSON block (`<script type="application/json"
//! id="vitrine-config">`) overriding any subset of these values. Missing keys
//! take the defaults documented on each field.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{field} out of range: {value}")]
    OutOfRange { field: &'static str, value: f64 },
}

/// Which parallax formula drives section backgrounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParallaxMode {
    /// Shift bounded by how far the card overflows the viewport.
    #[default]
    SizeAware,
    /// Fixed ±`classic_amplitude` pixel slide across the section's visibility.
    Classic,
}

/// Tunables of the scroll engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Margin kept around a section card, in pixels. Default 10.
    pub gap: f64,
    /// Title bar speed relative to the page, `0 < k <= 1`. Default 0.5.
    pub bar_speed: f64,
    /// Largest bar translation as a fraction of its height. Default 0.5.
    pub bar_cap_fraction: f64,
    /// Progress at which a section starts fading out. Default 0.9.
    pub fade_start: f64,
    pub mode: ParallaxMode,
    /// Half-range of the classic slide, in pixels. Default 10.
    pub classic_amplitude: f64,
    /// Re-run the geometry pass on viewport resize. Default off.
    pub recompute_on_resize: bool,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            gap: 10.0,
            bar_speed: 0.5,
            bar_cap_fraction: 0.5,
            fade_start: 0.9,
            mode: ParallaxMode::SizeAware,
            classic_amplitude: 10.0,
            recompute_on_resize: false,
        }
    }
}

/// Work a viewport resize triggers before the next painted frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizePass {
    /// Recompute outputs against the cached geometry.
    Update,
    /// Re-run the geometry pass, then recompute outputs.
    MeasureThenUpdate,
}

impl ScrollConfig {
    pub fn resize_pass(&self) -> ResizePass {
        if self.recompute_on_resize {
            ResizePass::MeasureThenUpdate
        } else {
            ResizePass::Update
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check("gap", self.gap, |v| v >= 0.0)?;
        check("bar_speed", self.bar_speed, |v| v > 0.0 && v <= 1.0)?;
        check("bar_cap_fraction", self.bar_cap_fraction, |v| {
            (0.0..=1.0).contains(&v)
        })?;
        check("fade_start", self.fade_start, |v| (0.0..1.0).contains(&v))?;
        check("classic_amplitude", self.classic_amplitude, |v| v >= 0.0)?;
        Ok(())
    }
}

fn check(field: &'static str, value: f64, ok: impl Fn(f64) -> bool) -> Result<(), ConfigError> {
    if value.is_finite() && ok(value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange { field, value })
    }
}

/// DOM selectors the adapter queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub title_bar: String,
    pub sections: String,
    pub card: String,
    /// Attribute on each section holding its background image URL.
    pub background_attr: String,
    pub agenda: String,
    pub agenda_item: String,
    pub agenda_date: String,
    pub burger: String,
    pub nav: String,
    pub contact_form: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            title_bar: "#top-bar".into(),
            sections: ".chapter".into(),
            card: ".chapter-card".into(),
            background_attr: "data-bg".into(),
            agenda: "#agenda".into(),
            agenda_item: ".agenda-item".into(),
            agenda_date: ".agenda-date".into(),
            burger: "#burger".into(),
            nav: "#main-nav".into(),
            contact_form: "#contact-form".into(),
        }
    }
}

/// Texts and resources of the generated archive page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArchiveConfig {
    pub link_label: String,
    pub page_title: String,
    pub return_label: String,
    /// Stylesheet, relative to the host page.
    pub stylesheet: String,
    /// Background image, relative to the host page.
    pub background: String,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            link_label: "Événements passés".into(),
            page_title: "Archives de l'agenda".into(),
            return_label: "Retour au site".into(),
            stylesheet: "style.css".into(),
            background: "images/fond.jpg".into(),
        }
    }
}

/// User-facing messages of the contact form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactMessages {
    pub sent: String,
    /// Shown when the server rejects the message without an explanation.
    pub rejected: String,
    pub network: String,
}

impl Default for ContactMessages {
    fn default() -> Self {
        Self {
            sent: "Merci pour votre message !".into(),
            rejected: "L'envoi a échoué, merci de réessayer.".into(),
            network: "Impossible de contacter le serveur. Vérifiez votre connexion.".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Class toggled on the nav element while the menu is open.
    pub open_class: String,
    /// Viewport width (px) from which the burger menu is hidden by CSS.
    pub breakpoint: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            open_class: "open".into(),
            breakpoint: 768.0,
        }
    }
}

/// Everything the page adapter needs, with defaults for a bare page.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub scroll: ScrollConfig,
    pub selectors: Selectors,
    pub archive: ArchiveConfig,
    pub contact: ContactMessages,
    pub nav: NavConfig,
}

impl PageConfig {
    /// Parse and validate a (possibly partial) JSON configuration.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: PageConfig = serde_json::from_str(text)?;
        config.scroll.validate()?;
        Ok(config)
    }
}
