#![forbid(unsafe_code)]

//! In-memory document for driving the inspector without a browser.
//!
//! Nodes form a tree of boxes. Hit testing walks from the roots and, at each
//! level, picks the last child whose box contains the pointer (later siblings
//! paint on top). The resulting path is the `:hover` chain. A child that lies
//! outside its parent's box is never hit.
//!
//! The host also records inline style and text writes and counts attached
//! pointer-move listeners, which is what tests assert on.

use std::collections::BTreeMap;

use crate::error::InspectError;
use crate::geometry::{ClientRect, PointerPosition};
use crate::host::InspectHost;
use crate::style::{Display, StyleProp};

/// Handle to a node in a [`HeadlessDom`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
struct HeadlessNode {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    id: Option<String>,
    markup: String,
    rect: ClientRect,
    style: BTreeMap<StyleProp, String>,
    text: String,
}

#[derive(Debug, Clone, Default)]
pub struct HeadlessDom {
    nodes: Vec<HeadlessNode>,
    roots: Vec<NodeId>,
    hover_chain: Vec<NodeId>,
    listeners: usize,
    refuse_listen: Option<String>,
    writes: usize,
}

impl HeadlessDom {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a node under `parent` (or as a new root).
    pub fn append(&mut self, parent: Option<NodeId>, markup: &str, rect: ClientRect) -> NodeId {
        let node = NodeId(self.nodes.len());
        self.nodes.push(HeadlessNode {
            parent,
            children: Vec::new(),
            id: None,
            markup: markup.to_string(),
            rect,
            style: BTreeMap::new(),
            text: String::new(),
        });
        match parent {
            Some(p) => self.nodes[p.0].children.push(node),
            None => self.roots.push(node),
        }
        node
    }

    /// Append a node reachable through `getElementById(id)`.
    pub fn append_with_id(
        &mut self,
        parent: Option<NodeId>,
        id: &str,
        markup: &str,
        rect: ClientRect,
    ) -> NodeId {
        let node = self.append(parent, markup, rect);
        self.nodes[node.0].id = Some(id.to_string());
        node
    }

    /// Append the stock label and overlay nodes, both hidden and never hit.
    ///
    /// Returns `(label, overlay)`.
    pub fn append_inspector_nodes(
        &mut self,
        label_id: &str,
        overlay_id: &str,
    ) -> (NodeId, NodeId) {
        let label = self.append_with_id(
            None,
            label_id,
            &format!("<span id=\"{label_id}\"></span>"),
            ClientRect::default(),
        );
        let overlay = self.append_with_id(
            None,
            overlay_id,
            &format!("<div id=\"{overlay_id}\"></div>"),
            ClientRect::default(),
        );
        for node in [label, overlay] {
            self.nodes[node.0]
                .style
                .insert(StyleProp::Display, Display::None.css_value().to_string());
        }
        (label, overlay)
    }

    /// Move the pointer to `pos` and recompute the hover chain.
    pub fn hover_at(&mut self, pos: PointerPosition) {
        let mut chain = Vec::new();
        let mut candidates = &self.roots;
        while let Some(hit) = candidates
            .iter()
            .rev()
            .copied()
            .find(|n| self.nodes[n.0].rect.contains(pos))
        {
            chain.push(hit);
            candidates = &self.nodes[hit.0].children;
        }
        self.hover_chain = chain;
    }

    /// Mark `node` and all its ancestors as hovered, or clear hover with `None`.
    pub fn set_hovered(&mut self, node: Option<NodeId>) {
        let mut chain = Vec::new();
        let mut cursor = node;
        while let Some(n) = cursor {
            chain.push(n);
            cursor = self.nodes[n.0].parent;
        }
        chain.reverse();
        self.hover_chain = chain;
    }

    #[must_use]
    pub fn style(&self, node: NodeId, prop: StyleProp) -> Option<&str> {
        self.nodes[node.0].style.get(&prop).map(String::as_str)
    }

    /// Current `display` value, if it is one the inspector writes.
    #[must_use]
    pub fn display(&self, node: NodeId) -> Option<Display> {
        self.style(node, StyleProp::Display)
            .and_then(Display::from_css_value)
    }

    #[must_use]
    pub fn text(&self, node: NodeId) -> &str {
        &self.nodes[node.0].text
    }

    /// Number of pointer-move listeners currently attached.
    #[must_use]
    pub const fn listener_count(&self) -> usize {
        self.listeners
    }

    /// Total style and text writes so far.
    #[must_use]
    pub const fn write_count(&self) -> usize {
        self.writes
    }

    /// Make subsequent listener attachment fail with `reason`, or succeed again with `None`.
    pub fn refuse_listeners(&mut self, reason: Option<&str>) {
        self.refuse_listen = reason.map(str::to_string);
    }
}

impl InspectHost for HeadlessDom {
    type Node = NodeId;

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|n| n.id.as_deref() == Some(id))
            .map(NodeId)
    }

    fn hovered_in_document(&self) -> Option<NodeId> {
        self.hover_chain.first().copied()
    }

    fn hovered_child(&self, node: &NodeId) -> Option<NodeId> {
        let at = self.hover_chain.iter().position(|n| n == node)?;
        self.hover_chain.get(at + 1).copied()
    }

    fn bounding_rect(&self, node: &NodeId) -> ClientRect {
        self.nodes[node.0].rect
    }

    fn outer_markup(&self, node: &NodeId) -> String {
        self.nodes[node.0].markup.clone()
    }

    fn set_style(&mut self, node: &NodeId, prop: StyleProp, value: &str) {
        self.writes += 1;
        self.nodes[node.0].style.insert(prop, value.to_string());
    }

    fn set_text(&mut self, node: &NodeId, text: &str) {
        self.writes += 1;
        self.nodes[node.0].text = text.to_string();
    }

    fn listen_pointer_move(&mut self) -> Result<(), InspectError> {
        if let Some(reason) = &self.refuse_listen {
            return Err(InspectError::Subscribe(reason.clone()));
        }
        self.listeners += 1;
        Ok(())
    }

    fn unlisten_pointer_move(&mut self) {
        self.listeners = self.listeners.saturating_sub(1);
    }
}
