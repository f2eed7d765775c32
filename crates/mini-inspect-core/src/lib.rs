#![forbid(unsafe_code)]

//! Core: the hover inspector controller, independent of any browser binding.
//!
//! The controller highlights whatever element sits under the pointer with two
//! externally owned nodes: an overlay rectangle and a label showing the
//! element's opening tag. All DOM access goes through [`InspectHost`], so the
//! same state machine drives `web-sys` in `mini-inspect-web` and the in-memory
//! [`HeadlessDom`] in tests.

pub mod config;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod headless;
pub mod host;
pub mod inspector;
pub mod logging;
pub mod markup;
pub mod style;

pub use config::{InspectorConfig, LabelOffset, MissPolicy};
pub use error::{InspectError, NodeRole};
pub use frame::InspectFrame;
pub use geometry::{ClientRect, PointerPosition};
pub use headless::{HeadlessDom, NodeId};
pub use host::{InspectHost, MAX_HOVER_DEPTH, innermost_hovered};
pub use inspector::{Inspector, TrackingState};
pub use markup::opening_tag;
pub use style::{Display, StyleProp, px};

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, info, trace, warn};
