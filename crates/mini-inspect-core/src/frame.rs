#![forbid(unsafe_code)]

//! One pointer-move update, computed before anything touches the DOM.

use crate::config::LabelOffset;
use crate::geometry::{ClientRect, PointerPosition};
use crate::markup::opening_tag;
use crate::style::{Display, StyleProp, px};

/// Overlay and label state for a single hit.
#[derive(Debug, Clone, PartialEq)]
pub struct InspectFrame {
    /// Bounding box of the hovered element; copied onto the overlay.
    pub overlay: ClientRect,
    /// Top-left corner of the label.
    pub label_at: PointerPosition,
    /// Opening tag of the hovered element.
    pub label_text: String,
}

impl InspectFrame {
    #[must_use]
    pub fn compute(
        rect: ClientRect,
        pointer: PointerPosition,
        outer_markup: &str,
        offset: LabelOffset,
    ) -> Self {
        Self {
            overlay: rect,
            label_at: pointer.translate(offset.x, offset.y),
            label_text: opening_tag(outer_markup).to_string(),
        }
    }

    /// Overlay style writes, in application order.
    #[must_use]
    pub fn overlay_styles(&self) -> [(StyleProp, String); 5] {
        [
            (StyleProp::Width, px(self.overlay.width)),
            (StyleProp::Height, px(self.overlay.height)),
            (StyleProp::Top, px(self.overlay.top)),
            (StyleProp::Left, px(self.overlay.left)),
            (StyleProp::Display, Display::Block.css_value().to_string()),
        ]
    }

    /// Label style writes, in application order.
    #[must_use]
    pub fn label_styles(&self) -> [(StyleProp, String); 3] {
        [
            (StyleProp::Display, Display::InlineBlock.css_value().to_string()),
            (StyleProp::Top, px(self.label_at.y)),
            (StyleProp::Left, px(self.label_at.x)),
        ]
    }
}
