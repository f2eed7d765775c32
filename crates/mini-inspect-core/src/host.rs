#![forbid(unsafe_code)]

//! The DOM primitives the inspector consumes.

use crate::error::InspectError;
use crate::geometry::ClientRect;
use crate::style::StyleProp;

/// Upper bound on hover descent steps.
///
/// Real documents never nest this deep; the bound only matters for a host
/// whose `:hover` query cycles.
pub const MAX_HOVER_DEPTH: usize = 4096;

/// Document access needed by [`Inspector`](crate::Inspector).
///
/// The host owns the pointer-move subscription. While subscribed it is
/// expected to call [`Inspector::pointer_moved`](crate::Inspector::pointer_moved)
/// once per event, in delivery order.
pub trait InspectHost {
    /// Element handle. Cloning must be cheap and must not copy the element.
    type Node: Clone;

    /// `document.getElementById(id)`.
    fn element_by_id(&self, id: &str) -> Option<Self::Node>;

    /// First element in the document matching `:hover`.
    fn hovered_in_document(&self) -> Option<Self::Node>;

    /// First descendant of `node` matching `:hover`.
    fn hovered_child(&self, node: &Self::Node) -> Option<Self::Node>;

    fn bounding_rect(&self, node: &Self::Node) -> ClientRect;

    /// Serialized markup of `node` including its own tag.
    fn outer_markup(&self, node: &Self::Node) -> String;

    fn set_style(&mut self, node: &Self::Node, prop: StyleProp, value: &str);

    fn set_text(&mut self, node: &Self::Node, text: &str);

    /// Attach the pointer-move listener.
    ///
    /// Called only while no listener is attached.
    fn listen_pointer_move(&mut self) -> Result<(), InspectError>;

    /// Detach the pointer-move listener. No-op when none is attached.
    fn unlisten_pointer_move(&mut self);
}

/// Resolve the innermost element under the pointer.
///
/// Starts from the first hovered element in the document and keeps asking the
/// current candidate for a hovered descendant until none matches. Returns
/// `None` when nothing in the document is hovered.
pub fn innermost_hovered<H: InspectHost + ?Sized>(host: &H) -> Option<H::Node> {
    let mut best = host.hovered_in_document()?;
    for _ in 0..MAX_HOVER_DEPTH {
        match host.hovered_child(&best) {
            Some(next) => best = next,
            None => return Some(best),
        }
    }
    crate::warn!(max_depth = MAX_HOVER_DEPTH, "hover descent hit depth limit");
    Some(best)
}
