#![forbid(unsafe_code)]

//! The toggle controller.
//!
//! # State machine
//!
//! ```text
//!            enable / toggle
//!   Idle  ───────────────────▶  Tracking
//!         ◀───────────────────
//!            disable / toggle
//! ```
//!
//! `Tracking` holds exactly one pointer-move listener on the host; `Idle`
//! holds none. Every pointer move delivered while `Tracking` resolves the
//! innermost hovered element and rewrites the overlay and label.

use crate::config::{InspectorConfig, MissPolicy};
use crate::error::{InspectError, NodeRole};
use crate::frame::InspectFrame;
use crate::geometry::PointerPosition;
use crate::host::{InspectHost, innermost_hovered};
use crate::style::{Display, StyleProp};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackingState {
    #[default]
    Idle,
    Tracking,
}

/// Hover inspector bound to one label node and one overlay node.
pub struct Inspector<H: InspectHost> {
    host: H,
    label: H::Node,
    overlay: H::Node,
    config: InspectorConfig,
    state: TrackingState,
    last_frame: Option<InspectFrame>,
}

impl<H: InspectHost> core::fmt::Debug for Inspector<H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Inspector")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("last_frame", &self.last_frame)
            .finish_non_exhaustive()
    }
}

impl<H: InspectHost> Inspector<H> {
    /// Look up the label and overlay nodes and start `Idle`.
    ///
    /// The nodes are not modified. Fails with [`InspectError::MissingNode`]
    /// if either id does not resolve.
    pub fn new(host: H, config: InspectorConfig) -> Result<Self, InspectError> {
        let label = host
            .element_by_id(&config.label_id)
            .ok_or_else(|| InspectError::MissingNode {
                role: NodeRole::Label,
                id: config.label_id.clone(),
            })?;
        let overlay = host
            .element_by_id(&config.overlay_id)
            .ok_or_else(|| InspectError::MissingNode {
                role: NodeRole::Overlay,
                id: config.overlay_id.clone(),
            })?;
        Ok(Self {
            host,
            label,
            overlay,
            config,
            state: TrackingState::Idle,
            last_frame: None,
        })
    }

    #[must_use]
    pub const fn state(&self) -> TrackingState {
        self.state
    }

    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.state == TrackingState::Tracking
    }

    #[must_use]
    pub const fn config(&self) -> &InspectorConfig {
        &self.config
    }

    /// The frame applied by the most recent hit, if any.
    #[must_use]
    pub const fn last_frame(&self) -> Option<&InspectFrame> {
        self.last_frame.as_ref()
    }

    #[must_use]
    pub const fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Start tracking the pointer.
    ///
    /// If a listener is already attached it is replaced, so exactly one is
    /// attached afterwards. On failure the inspector is left `Idle`.
    pub fn enable(&mut self) -> Result<(), InspectError> {
        if self.state == TrackingState::Tracking {
            self.host.unlisten_pointer_move();
            self.state = TrackingState::Idle;
        }
        if let Err(err) = self.host.listen_pointer_move() {
            crate::warn!(error = %err, "inspector enable failed");
            return Err(err);
        }
        self.state = TrackingState::Tracking;
        crate::info!("inspector enabled");
        Ok(())
    }

    /// Hide both nodes and stop tracking.
    pub fn disable(&mut self) {
        self.hide();
        if self.state == TrackingState::Tracking {
            self.host.unlisten_pointer_move();
        }
        self.state = TrackingState::Idle;
        crate::info!("inspector disabled");
    }

    /// Flip between `Idle` and `Tracking`.
    pub fn toggle(&mut self) -> Result<(), InspectError> {
        match self.state {
            TrackingState::Tracking => {
                self.disable();
                Ok(())
            }
            TrackingState::Idle => self.enable(),
        }
    }

    /// Pointer-move handler body. Ignored while `Idle`.
    pub fn pointer_moved(&mut self, pointer: PointerPosition) {
        if self.state != TrackingState::Tracking {
            return;
        }

        let Some(target) = innermost_hovered(&self.host) else {
            crate::trace!(x = pointer.x, y = pointer.y, "no hovered element");
            if self.config.on_miss == MissPolicy::Hide {
                self.hide();
            }
            return;
        };

        let rect = self.host.bounding_rect(&target);
        let outer = self.host.outer_markup(&target);
        let frame = InspectFrame::compute(rect, pointer, &outer, self.config.label_offset);
        self.apply(&frame);
        crate::debug!(
            x = pointer.x,
            y = pointer.y,
            tag = %frame.label_text,
            "inspector frame applied"
        );
        self.last_frame = Some(frame);
    }

    fn apply(&mut self, frame: &InspectFrame) {
        for (prop, value) in frame.overlay_styles() {
            self.host.set_style(&self.overlay, prop, &value);
        }
        self.host.set_text(&self.label, &frame.label_text);
        for (prop, value) in frame.label_styles() {
            self.host.set_style(&self.label, prop, &value);
        }
    }

    fn hide(&mut self) {
        let none = Display::None.css_value();
        self.host.set_style(&self.overlay, StyleProp::Display, none);
        self.host.set_style(&self.label, StyleProp::Display, none);
    }
}
