#![forbid(unsafe_code)]

//! WASM frontend for the mini inspector.
//!
//! Exposes a `wasm-bindgen` class, `MiniInspect`, with three operations meant
//! for page wiring (`enable`, `disable`, `toggle`). The class binds the
//! host-agnostic [`Inspector`] to the live document through `web-sys`:
//! `mousemove` on `document` drives updates, `:hover` queries resolve the
//! innermost hovered element, and inline styles move the overlay and label.
//!
//! ```js
//! import init, { MiniInspect } from "./mini_inspect_web.js";
//! await init();
//! const inspector = new MiniInspect();
//! button.addEventListener("click", () => inspector.toggle());
//! ```

use mini_inspect_core::{InspectError, InspectorConfig};

#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::{DomHost, MiniInspect};

/// Parse the options object passed to the constructor, already serialized as
/// JSON. Absent, `undefined` and `null` options all mean defaults.
pub fn config_from_json(json: Option<&str>) -> Result<InspectorConfig, InspectError> {
    match json.map(str::trim) {
        None | Some("" | "undefined" | "null") => Ok(InspectorConfig::default()),
        Some(json) => InspectorConfig::from_json_str(json),
    }
}

/// Native builds have no document; they drive the same controller over a
/// headless one so the exported surface stays checkable off-browser.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug)]
pub struct MiniInspect {
    inspector: Option<mini_inspect_core::Inspector<mini_inspect_core::HeadlessDom>>,
}

#[cfg(not(target_arch = "wasm32"))]
impl MiniInspect {
    pub fn new(options: Option<&str>) -> Result<Self, InspectError> {
        use mini_inspect_core::{HeadlessDom, Inspector};

        let config = config_from_json(options)?;
        let mut dom = HeadlessDom::new();
        dom.append_inspector_nodes(&config.label_id, &config.overlay_id);
        Ok(Self {
            inspector: Some(Inspector::new(dom, config)?),
        })
    }

    pub fn enable(&mut self) -> Result<(), InspectError> {
        match &mut self.inspector {
            Some(inspector) => inspector.enable(),
            None => Ok(()),
        }
    }

    pub fn disable(&mut self) {
        if let Some(inspector) = &mut self.inspector {
            inspector.disable();
        }
    }

    pub fn toggle(&mut self) -> Result<(), InspectError> {
        match &mut self.inspector {
            Some(inspector) => inspector.toggle(),
            None => Ok(()),
        }
    }

    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.inspector.as_ref().is_some_and(|i| i.is_tracking())
    }

    /// Stop tracking and release the controller.
    pub fn destroy(&mut self) {
        if let Some(mut inspector) = self.inspector.take() {
            inspector.disable();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mini_inspect_core::MissPolicy;

    #[test]
    fn missing_options_are_defaults() {
        for raw in [None, Some(""), Some("undefined"), Some(" null ")] {
            assert_eq!(config_from_json(raw).expect("defaults"), InspectorConfig::default());
        }
    }

    #[test]
    fn options_object_is_parsed() {
        let cfg = config_from_json(Some(r#"{"on_miss":"hide"}"#)).expect("parse");
        assert_eq!(cfg.on_miss, MissPolicy::Hide);
    }

    #[test]
    fn non_object_options_are_rejected() {
        assert!(matches!(
            config_from_json(Some("42")),
            Err(InspectError::Config(_))
        ));
    }
}
