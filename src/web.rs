//! Browser implementations of the capability traits
//!
//! `WebEnvironment` maps [`Environment`] onto `web-sys`. `FrameAnimator`
//! drives translate offsets from `requestAnimationFrame`, one shared frame loop
//! per animator that runs only while some tween is in flight.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, MouseEvent};

use crate::env::{Animator, Environment, ListenerId, PointerEvent, PointerHandler, TweenSpec};
use crate::error::{FxError, Result};
use crate::follower::{self, Follower};
use crate::magnet::{self, Magnet, MagnetOptions};
use crate::primitives::{Point, Rect, Size};
use crate::tween::TweenSet;

const POINTER_MOVE: &str = "mousemove";

/// Install the panic hook and route `log` output to the browser console.
/// Later calls keep the first logger.
pub fn init_logging(level: log::Level) {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(level);
}

/// The live document
pub struct WebEnvironment {
    document: Document,
    listeners: RefCell<HashMap<ListenerId, Closure<dyn FnMut(MouseEvent)>>>,
    next_id: Cell<u64>,
}

impl WebEnvironment {
    pub fn new() -> Result<Self> {
        let window = web_sys::window().ok_or(FxError::NoWindow)?;
        let document = window.document().ok_or(FxError::NoDocument)?;
        Ok(Self {
            document,
            listeners: RefCell::new(HashMap::new()),
            next_id: Cell::new(0),
        })
    }
}

impl Drop for WebEnvironment {
    // Handles may be dropped while their effect keeps running; the document
    // still references these callbacks.
    fn drop(&mut self) {
        for (_, closure) in self.listeners.get_mut().drain() {
            closure.forget();
        }
    }
}

impl Environment for WebEnvironment {
    type Node = HtmlElement;

    fn body(&self) -> Result<HtmlElement> {
        self.document.body().ok_or(FxError::NoBody)
    }

    fn create_element(&self, tag: &str) -> Result<HtmlElement> {
        self.document
            .create_element(tag)
            .map_err(|e| FxError::dom("createElement", &e))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| FxError::NotAnElement)
    }

    fn append_child(&self, parent: &HtmlElement, child: &HtmlElement) -> Result<()> {
        parent
            .append_child(child)
            .map(|_| ())
            .map_err(|e| FxError::dom("appendChild", &e))
    }

    fn remove_child(&self, parent: &HtmlElement, child: &HtmlElement) -> Result<()> {
        parent
            .remove_child(child)
            .map(|_| ())
            .map_err(|e| FxError::dom("removeChild", &e))
    }

    fn parent_of(&self, node: &HtmlElement) -> Option<HtmlElement> {
        node.parent_node().and_then(|p| p.dyn_into::<HtmlElement>().ok())
    }

    fn query_selector_all(&self, selector: &str) -> Vec<HtmlElement> {
        let list = match self.document.query_selector_all(selector) {
            Ok(list) => list,
            Err(e) => {
                warn!("selector {selector:?} rejected: {}", FxError::dom("querySelectorAll", &e));
                return Vec::new();
            }
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|n| n.dyn_into::<HtmlElement>().ok())
            .collect()
    }

    fn bounding_rect(&self, node: &HtmlElement) -> Rect {
        let r = node.get_bounding_client_rect();
        Rect::new(r.x(), r.y(), r.width(), r.height())
    }

    fn offset_size(&self, node: &HtmlElement) -> Size {
        Size::new(f64::from(node.offset_width()), f64::from(node.offset_height()))
    }

    fn set_css_text(&self, node: &HtmlElement, css: &str) -> Result<()> {
        node.style().set_css_text(css);
        Ok(())
    }

    fn set_style(&self, node: &HtmlElement, property: &str, value: &str) -> Result<()> {
        node.style()
            .set_property(property, value)
            .map_err(|e| FxError::dom("style.setProperty", &e))
    }

    fn listen_pointer_move(&self, mut handler: PointerHandler) -> Result<ListenerId> {
        let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
            handler(&PointerEvent::new(
                Point::new(f64::from(event.page_x()), f64::from(event.page_y())),
                Point::new(f64::from(event.client_x()), f64::from(event.client_y())),
            ));
        }) as Box<dyn FnMut(MouseEvent)>);

        self.document
            .add_event_listener_with_callback(POINTER_MOVE, closure.as_ref().unchecked_ref())
            .map_err(|e| FxError::dom("addEventListener", &e))?;

        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.listeners.borrow_mut().insert(id, closure);
        Ok(id)
    }

    fn unlisten_pointer_move(&self, id: ListenerId) -> Result<()> {
        let Some(closure) = self.listeners.borrow_mut().remove(&id) else {
            return Ok(());
        };
        self.document
            .remove_event_listener_with_callback(POINTER_MOVE, closure.as_ref().unchecked_ref())
            .map_err(|e| FxError::dom("removeEventListener", &e))
    }
}

#[derive(Default)]
struct FrameState {
    tweens: RefCell<TweenSet<HtmlElement>>,
    frame_pending: Cell<bool>,
}

impl FrameState {
    /// Advance every running tween; true while any is still moving
    fn step(&self, now_ms: f64) -> bool {
        self.tweens.borrow_mut().step(now_ms, |node, css| {
            if let Err(e) = node.style().set_property("transform", css) {
                warn!("tween frame dropped: {}", FxError::dom("style.setProperty", &e));
            }
        })
    }
}

fn request_frame(state: &Rc<FrameState>) {
    if state.frame_pending.replace(true) {
        return;
    }
    let Some(window) = web_sys::window() else {
        state.frame_pending.set(false);
        return;
    };
    let state_cb = Rc::clone(state);
    let cb = Closure::once_into_js(move |now_ms: f64| {
        state_cb.frame_pending.set(false);
        if state_cb.step(now_ms) {
            request_frame(&state_cb);
        }
    });
    if let Err(e) = window.request_animation_frame(cb.unchecked_ref()) {
        state.frame_pending.set(false);
        warn!("animation frame refused: {}", FxError::dom("requestAnimationFrame", &e));
    }
}

/// `requestAnimationFrame` tweening of element translate offsets.
///
/// A new request for an element replaces the one in flight and starts from
/// wherever the element currently is. Elements that leave the document are
/// dropped on the next request.
#[derive(Default)]
pub struct FrameAnimator {
    state: Rc<FrameState>,
}

impl FrameAnimator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Animator<HtmlElement> for FrameAnimator {
    fn animate(&self, node: &HtmlElement, spec: TweenSpec) {
        {
            let mut tweens = self.state.tweens.borrow_mut();
            tweens.retain(|n| n.parent_node().is_some());
            tweens.start(node, spec, || {
                let base = node.style().get_property_value("transform").unwrap_or_default();
                debug!("tracking element, base transform {base:?}");
                base
            });
        }
        request_frame(&self.state);
    }
}

fn live() -> Result<(Rc<WebEnvironment>, Rc<FrameAnimator>)> {
    Ok((Rc::new(WebEnvironment::new()?), Rc::new(FrameAnimator::new())))
}

/// Follower on the live document. See [`follower::mouse_follower`].
pub fn mouse_follower(
    parent: Option<HtmlElement>,
    custom_element: Option<HtmlElement>,
) -> Result<Follower<WebEnvironment>> {
    let (env, animator) = live()?;
    follower::mouse_follower(&env, &animator, parent, custom_element)
}

/// Direct-style magnet on the live document. See [`magnet::make_magnet`].
pub fn make_magnet(
    selector: &str,
    options: MagnetOptions,
    custom_element: Option<HtmlElement>,
) -> Result<Magnet<WebEnvironment>> {
    let env = Rc::new(WebEnvironment::new()?);
    magnet::make_magnet(&env, selector, options, custom_element)
}

/// Smoothed magnet on the live document. See [`magnet::make_magnet_smoothed`].
pub fn make_magnet_smoothed(
    selector: &str,
    options: MagnetOptions,
    custom_element: Option<HtmlElement>,
) -> Result<Magnet<WebEnvironment>> {
    let (env, animator) = live()?;
    magnet::make_magnet_smoothed(&env, &animator, selector, options, custom_element)
}
