#![forbid(unsafe_code)]

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use mini_inspect_core::{
    ClientRect, InspectError, InspectHost, Inspector, InspectorConfig, PointerPosition, StyleProp,
};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, MouseEvent};

const POINTER_MOVE: &str = "mousemove";
const HOVER_SELECTOR: &str = ":hover";

type SharedInspector = Rc<RefCell<Inspector<DomHost>>>;

/// [`InspectHost`] over the live `document`.
///
/// Holds at most one `mousemove` closure. The closure only keeps a weak
/// reference to the inspector, so dropping the exported object releases
/// everything; `Drop` detaches the closure before it is freed.
pub struct DomHost {
    document: Document,
    inspector: Weak<RefCell<Inspector<DomHost>>>,
    listener: Option<Closure<dyn FnMut(MouseEvent)>>,
}

impl DomHost {
    fn new(document: Document) -> Self {
        Self {
            document,
            inspector: Weak::new(),
            listener: None,
        }
    }

    fn bind(&mut self, inspector: Weak<RefCell<Inspector<DomHost>>>) {
        self.inspector = inspector;
    }
}

impl InspectHost for DomHost {
    type Node = Element;

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn hovered_in_document(&self) -> Option<Element> {
        self.document.query_selector(HOVER_SELECTOR).ok().flatten()
    }

    fn hovered_child(&self, node: &Element) -> Option<Element> {
        node.query_selector(HOVER_SELECTOR).ok().flatten()
    }

    fn bounding_rect(&self, node: &Element) -> ClientRect {
        let rect = node.get_bounding_client_rect();
        ClientRect::new(rect.left(), rect.top(), rect.width(), rect.height())
    }

    fn outer_markup(&self, node: &Element) -> String {
        node.outer_html()
    }

    fn set_style(&mut self, node: &Element, prop: StyleProp, value: &str) {
        let Some(html) = node.dyn_ref::<HtmlElement>() else {
            return;
        };
        if let Err(err) = html.style().set_property(prop.css_name(), value) {
            mini_inspect_core::warn!(
                property = prop.css_name(),
                error = %describe(&err),
                "style write rejected"
            );
        }
    }

    fn set_text(&mut self, node: &Element, text: &str) {
        match node.dyn_ref::<HtmlElement>() {
            Some(html) => html.set_inner_text(text),
            None => node.set_text_content(Some(text)),
        }
    }

    fn listen_pointer_move(&mut self) -> Result<(), InspectError> {
        let target = self.inspector.clone();
        let closure = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            let Some(shared) = target.upgrade() else {
                return;
            };
            let Ok(mut inspector) = shared.try_borrow_mut() else {
                return;
            };
            inspector.pointer_moved(PointerPosition::new(
                f64::from(event.client_x()),
                f64::from(event.client_y()),
            ));
        });
        self.document
            .add_event_listener_with_callback(POINTER_MOVE, closure.as_ref().unchecked_ref())
            .map_err(|err| InspectError::Subscribe(describe(&err)))?;
        self.listener = Some(closure);
        Ok(())
    }

    fn unlisten_pointer_move(&mut self) {
        if let Some(closure) = self.listener.take() {
            let _ = self.document.remove_event_listener_with_callback(
                POINTER_MOVE,
                closure.as_ref().unchecked_ref(),
            );
        }
    }
}

impl Drop for DomHost {
    fn drop(&mut self) {
        self.unlisten_pointer_move();
    }
}

/// Hover inspector bound to the current page.
#[wasm_bindgen]
pub struct MiniInspect {
    inner: Option<SharedInspector>,
}

#[wasm_bindgen]
impl MiniInspect {
    /// Look up the label and overlay nodes and start idle.
    ///
    /// `options` is an optional plain object, e.g.
    /// `{ overlay_id: "hl", on_miss: "hide" }`. Throws if either node is
    /// missing or the options are invalid.
    #[wasm_bindgen(constructor)]
    pub fn new(options: Option<JsValue>) -> Result<MiniInspect, JsValue> {
        let config = config_from_js(options)?;
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| JsValue::from_str("no document available"))?;
        let inspector = Inspector::new(DomHost::new(document), config).map_err(to_js)?;
        let shared = Rc::new(RefCell::new(inspector));
        shared.borrow_mut().host_mut().bind(Rc::downgrade(&shared));
        Ok(Self {
            inner: Some(shared),
        })
    }

    pub fn enable(&self) -> Result<(), JsValue> {
        self.with_inspector(Inspector::enable)?.map_err(to_js)
    }

    pub fn disable(&self) -> Result<(), JsValue> {
        self.with_inspector(Inspector::disable)
    }

    pub fn toggle(&self) -> Result<(), JsValue> {
        self.with_inspector(Inspector::toggle)?.map_err(to_js)
    }

    #[wasm_bindgen(getter, js_name = isTracking)]
    pub fn is_tracking(&self) -> bool {
        self.inner
            .as_ref()
            .and_then(|shared| shared.try_borrow().ok().map(|i| i.is_tracking()))
            .unwrap_or(false)
    }

    /// Explicit teardown for JS callers. Hides the nodes and detaches the
    /// listener; later calls to `enable`/`toggle` throw.
    pub fn destroy(&mut self) {
        if let Some(shared) = self.inner.take()
            && let Ok(mut inspector) = shared.try_borrow_mut()
        {
            inspector.disable();
        }
    }
}

impl MiniInspect {
    fn with_inspector<R>(
        &self,
        f: impl FnOnce(&mut Inspector<DomHost>) -> R,
    ) -> Result<R, JsValue> {
        let shared = self
            .inner
            .as_ref()
            .ok_or_else(|| JsValue::from_str("inspector destroyed"))?;
        let mut inspector = shared
            .try_borrow_mut()
            .map_err(|_| JsValue::from_str("inspector busy"))?;
        Ok(f(&mut *inspector))
    }
}

fn config_from_js(options: Option<JsValue>) -> Result<InspectorConfig, JsValue> {
    let json = match options {
        Some(value) if !value.is_undefined() && !value.is_null() => {
            Some(String::from(js_sys::JSON::stringify(&value)?))
        }
        _ => None,
    };
    crate::config_from_json(json.as_deref()).map_err(to_js)
}

fn to_js(err: InspectError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
