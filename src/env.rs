//! Capability interfaces consumed by the effects.
//!
//! Controllers never touch the browser directly. They talk to an
//! [`Environment`] for element geometry, styling and the pointer-move stream,
//! and to an [`Animator`] for smoothed motion. The browser implementations live
//! in [`crate::web`]; tests use in-memory fakes.

use crate::error::Result;
use crate::primitives::{Ease, Offset, Point, Rect, Size};

/// One pointer-move notification, carrying both coordinate conventions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerEvent {
    /// Document-relative position (`pageX`/`pageY`).
    pub page: Point,
    /// Viewport-relative position (`clientX`/`clientY`).
    pub client: Point,
}

impl PointerEvent {
    pub const fn new(page: Point, client: Point) -> Self {
        Self { page, client }
    }

    /// Event whose page and client positions coincide (page not scrolled).
    pub const fn unscrolled(at: Point) -> Self {
        Self { page: at, client: at }
    }

    pub fn point(&self, space: CoordinateSpace) -> Point {
        match space {
            CoordinateSpace::Page => self.page,
            CoordinateSpace::Client => self.client,
        }
    }
}

/// Which coordinate convention a controller reads from pointer events.
///
/// It must match the geometry the controller positions against, or offsets
/// drift once the page scrolls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateSpace {
    /// Document coordinates; pairs with absolute `left`/`top` placement.
    Page,
    /// Viewport coordinates; pairs with bounding-box queries.
    Client,
}

/// Handle for a registered pointer-move listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub u64);

pub type PointerHandler = Box<dyn FnMut(&PointerEvent)>;

/// DOM-like host: element tree, geometry, inline style, pointer events.
pub trait Environment {
    type Node: Clone + PartialEq + 'static;

    fn body(&self) -> Result<Self::Node>;
    fn create_element(&self, tag: &str) -> Result<Self::Node>;
    fn append_child(&self, parent: &Self::Node, child: &Self::Node) -> Result<()>;
    fn remove_child(&self, parent: &Self::Node, child: &Self::Node) -> Result<()>;
    fn parent_of(&self, node: &Self::Node) -> Option<Self::Node>;

    /// Elements matching `selector`, in document order. A selector the host
    /// cannot parse matches nothing.
    fn query_selector_all(&self, selector: &str) -> Vec<Self::Node>;

    /// Live bounding box, viewport-relative, including transforms.
    fn bounding_rect(&self, node: &Self::Node) -> Rect;
    /// Layout size, ignoring transforms.
    fn offset_size(&self, node: &Self::Node) -> Size;

    fn set_css_text(&self, node: &Self::Node, css: &str) -> Result<()>;
    /// Write one inline style property; an empty value clears it.
    fn set_style(&self, node: &Self::Node, property: &str, value: &str) -> Result<()>;

    fn listen_pointer_move(&self, handler: PointerHandler) -> Result<ListenerId>;
    fn unlisten_pointer_move(&self, id: ListenerId) -> Result<()>;
}

/// Destination of one smoothed move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenSpec {
    pub to: Offset,
    pub duration_secs: f64,
    pub ease: Ease,
}

impl TweenSpec {
    pub const fn new(to: Offset, duration_secs: f64, ease: Ease) -> Self {
        Self { to, duration_secs, ease }
    }
}

/// Interpolates a node's translate offset toward a destination over time.
///
/// Fire-and-forget: no completion is reported back.
pub trait Animator<N> {
    fn animate(&self, node: &N, spec: TweenSpec);
}
