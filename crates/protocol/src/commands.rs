use serde::{Deserialize, Serialize};

/// Which element a style command addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StyleTarget {
    /// The fixed title bar.
    TitleBar,
    /// A content section, by discovery order.
    Section(usize),
}

/// CSS custom properties written on sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StyleProperty {
    /// Background image offset, `--shift`.
    Shift,
    /// Section opacity, `--alpha`.
    Alpha,
    /// Background image, `--bg`. Written once at load.
    Background,
}

impl StyleProperty {
    pub fn css_name(self) -> &'static str {
        match self {
            StyleProperty::Shift => "--shift",
            StyleProperty::Alpha => "--alpha",
            StyleProperty::Background => "--bg",
        }
    }
}

/// A single, stateless styling instruction.
///
/// The core emits a `Vec<StyleCommand>` per scroll tick. The DOM adapter
/// applies them in order and performs no other document mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StyleCommand {
    /// Set a CSS custom property to an already formatted value.
    SetProperty {
        target: StyleTarget,
        property: StyleProperty,
        value: String,
    },

    /// Replace the element's `transform`.
    SetTransform { target: StyleTarget, value: String },
}

impl StyleCommand {
    pub fn target(&self) -> StyleTarget {
        match self {
            StyleCommand::SetProperty { target, .. } | StyleCommand::SetTransform { target, .. } => {
                *target
            }
        }
    }
}
