//! In-memory environment and animator for unit tests

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

use crate::env::{Animator, Environment, ListenerId, PointerEvent, PointerHandler, TweenSpec};
use crate::error::{FxError, Result};
use crate::primitives::{Point, Rect, Size};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FakeNode(pub usize);

#[derive(Debug, Default)]
struct FakeElement {
    tag: String,
    classes: Vec<String>,
    parent: Option<FakeNode>,
    rect: Rect,
    size: Size,
    css_text: String,
    style: BTreeMap<String, String>,
}

/// Element tree with fixed geometry and a manually driven pointer stream
#[derive(Default)]
pub struct FakeEnvironment {
    elements: RefCell<Vec<FakeElement>>,
    listeners: RefCell<BTreeMap<ListenerId, Option<PointerHandler>>>,
    next_listener: Cell<u64>,
    style_writes: Cell<usize>,
    fail_styles: Cell<bool>,
    fail_detach: Cell<bool>,
}

impl FakeEnvironment {
    pub fn new() -> Self {
        let env = Self::default();
        env.elements.borrow_mut().push(FakeElement {
            tag: "body".into(),
            ..Default::default()
        });
        env
    }

    /// Attach a `div` with `class` to the body. Its box sits centered on `center`.
    pub fn add_target(&self, class: &str, center: Point, size: Size) -> FakeNode {
        let mut elements = self.elements.borrow_mut();
        elements.push(FakeElement {
            tag: "div".into(),
            classes: vec![class.to_string()],
            parent: Some(FakeNode(0)),
            rect: Rect::new(
                center.x - size.width / 2.0,
                center.y - size.height / 2.0,
                size.width,
                size.height,
            ),
            size,
            ..Default::default()
        });
        FakeNode(elements.len() - 1)
    }

    pub fn move_pointer(&self, event: PointerEvent) {
        let ids: Vec<ListenerId> = self.listeners.borrow().keys().copied().collect();
        for id in ids {
            let handler = self.listeners.borrow_mut().get_mut(&id).and_then(Option::take);
            if let Some(mut handler) = handler {
                handler(&event);
                if let Some(slot) = self.listeners.borrow_mut().get_mut(&id) {
                    *slot = Some(handler);
                }
            }
        }
    }

    pub fn move_to(&self, x: f64, y: f64) {
        self.move_pointer(PointerEvent::unscrolled(Point::new(x, y)));
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    pub fn style(&self, node: FakeNode, property: &str) -> Option<String> {
        self.elements.borrow()[node.0].style.get(property).cloned()
    }

    pub fn css_text(&self, node: FakeNode) -> String {
        self.elements.borrow()[node.0].css_text.clone()
    }

    pub fn tag(&self, node: FakeNode) -> String {
        self.elements.borrow()[node.0].tag.clone()
    }

    pub fn style_writes(&self) -> usize {
        self.style_writes.get()
    }

    pub fn set_fail_styles(&self, fail: bool) {
        self.fail_styles.set(fail);
    }

    /// Make `remove_child` and `unlisten_pointer_move` fail
    pub fn set_fail_detach(&self, fail: bool) {
        self.fail_detach.set(fail);
    }

    /// Remove a node behind the controllers' backs
    pub fn detach(&self, node: FakeNode) {
        self.elements.borrow_mut()[node.0].parent = None;
    }

    pub fn create_orphan(&self) -> FakeNode {
        let mut elements = self.elements.borrow_mut();
        elements.push(FakeElement {
            tag: "div".into(),
            ..Default::default()
        });
        FakeNode(elements.len() - 1)
    }
}

impl Environment for FakeEnvironment {
    type Node = FakeNode;

    fn body(&self) -> Result<FakeNode> {
        Ok(FakeNode(0))
    }

    fn create_element(&self, tag: &str) -> Result<FakeNode> {
        let mut elements = self.elements.borrow_mut();
        elements.push(FakeElement {
            tag: tag.to_string(),
            ..Default::default()
        });
        Ok(FakeNode(elements.len() - 1))
    }

    fn append_child(&self, parent: &FakeNode, child: &FakeNode) -> Result<()> {
        self.elements.borrow_mut()[child.0].parent = Some(*parent);
        Ok(())
    }

    fn remove_child(&self, parent: &FakeNode, child: &FakeNode) -> Result<()> {
        if self.fail_detach.get() {
            return Err(FxError::Dom {
                op: "removeChild",
                message: "removal refused".into(),
            });
        }
        let mut elements = self.elements.borrow_mut();
        if elements[child.0].parent != Some(*parent) {
            return Err(FxError::Dom {
                op: "removeChild",
                message: "The node to be removed is not a child of this node.".into(),
            });
        }
        elements[child.0].parent = None;
        Ok(())
    }

    fn parent_of(&self, node: &FakeNode) -> Option<FakeNode> {
        self.elements.borrow()[node.0].parent
    }

    fn query_selector_all(&self, selector: &str) -> Vec<FakeNode> {
        let Some(class) = selector.strip_prefix('.') else {
            return Vec::new();
        };
        self.elements
            .borrow()
            .iter()
            .enumerate()
            .filter(|(_, el)| el.parent.is_some() && el.classes.iter().any(|c| c == class))
            .map(|(i, _)| FakeNode(i))
            .collect()
    }

    fn bounding_rect(&self, node: &FakeNode) -> Rect {
        self.elements.borrow()[node.0].rect
    }

    fn offset_size(&self, node: &FakeNode) -> Size {
        self.elements.borrow()[node.0].size
    }

    fn set_css_text(&self, node: &FakeNode, css: &str) -> Result<()> {
        self.elements.borrow_mut()[node.0].css_text = css.to_string();
        Ok(())
    }

    fn set_style(&self, node: &FakeNode, property: &str, value: &str) -> Result<()> {
        if self.fail_styles.get() {
            return Err(FxError::Dom {
                op: "setProperty",
                message: "style is read-only".into(),
            });
        }
        self.style_writes.set(self.style_writes.get() + 1);
        self.elements.borrow_mut()[node.0]
            .style
            .insert(property.to_string(), value.to_string());
        Ok(())
    }

    fn listen_pointer_move(&self, handler: PointerHandler) -> Result<ListenerId> {
        let id = ListenerId(self.next_listener.get());
        self.next_listener.set(id.0 + 1);
        self.listeners.borrow_mut().insert(id, Some(handler));
        Ok(id)
    }

    fn unlisten_pointer_move(&self, id: ListenerId) -> Result<()> {
        if self.fail_detach.get() {
            return Err(FxError::Dom {
                op: "removeEventListener",
                message: "removal refused".into(),
            });
        }
        self.listeners.borrow_mut().remove(&id);
        Ok(())
    }
}

/// Animator that records every request instead of moving anything
#[derive(Default)]
pub struct RecordingAnimator {
    calls: RefCell<Vec<(FakeNode, TweenSpec)>>,
}

impl RecordingAnimator {
    pub fn calls(&self) -> Vec<(FakeNode, TweenSpec)> {
        self.calls.borrow().clone()
    }

    pub fn last_for(&self, node: FakeNode) -> Option<TweenSpec> {
        self.calls
            .borrow()
            .iter()
            .rev()
            .find(|(n, _)| *n == node)
            .map(|(_, spec)| *spec)
    }

    pub fn clear(&self) {
        self.calls.borrow_mut().clear();
    }
}

impl Animator<FakeNode> for RecordingAnimator {
    fn animate(&self, node: &FakeNode, spec: TweenSpec) {
        self.calls.borrow_mut().push((*node, spec));
    }
}
