//! Follower - an element that trails the pointer
//!
//! The follower is placed at the document origin and moved by translate
//! offsets, so it reads page coordinates. Repeated samples at the same spot
//! are dropped before they reach the animator.

use std::cell::Cell;
use std::rc::Rc;

use log::debug;

use crate::env::{Animator, CoordinateSpace, Environment, TweenSpec};
use crate::error::Result;
use crate::primitives::{Ease, Point};
use crate::tracker::{self, Subscription};

/// Inline style given to a follower the caller did not supply
pub const DEFAULT_STYLE: &str = "position: absolute; left: 0; top: 0; z-index: 999999; \
    width: 20px; height: 20px; background-color: black; border-radius: 50%; \
    pointer-events: none; transform: translate(-50%, -50%);";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FollowerOptions {
    pub duration_secs: f64,
    pub ease: Ease,
}

impl Default for FollowerOptions {
    fn default() -> Self {
        Self {
            duration_secs: 0.5,
            ease: Ease::Power3Out,
        }
    }
}

impl FollowerOptions {
    pub fn with_duration(mut self, duration_secs: f64) -> Self {
        self.duration_secs = duration_secs;
        self
    }

    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }
}

/// A running follower. Dropping the handle leaves it running; call [`stop`](Self::stop).
pub struct Follower<E: Environment> {
    env: Rc<E>,
    parent: E::Node,
    element: E::Node,
    subscription: Subscription<E>,
    stopped: Cell<bool>,
}

impl<E: Environment> Follower<E> {
    pub fn element(&self) -> &E::Node {
        &self.element
    }

    /// True once [`stop`](Self::stop) has completed without error
    pub fn is_stopped(&self) -> bool {
        self.stopped.get()
    }

    /// Detach from pointer events and remove the element from its parent.
    ///
    /// A second call does nothing, and an element that was already taken out
    /// of its parent elsewhere is left alone. If either step fails the
    /// follower is not marked stopped and the call can be retried.
    pub fn stop(&self) -> Result<()> {
        if self.is_stopped() {
            return Ok(());
        }
        self.subscription.cancel()?;
        if self.env.parent_of(&self.element).as_ref() == Some(&self.parent) {
            self.env.remove_child(&self.parent, &self.element)?;
        }
        self.stopped.set(true);
        debug!("follower stopped");
        Ok(())
    }
}

/// Start a follower with default timing. See [`mouse_follower_with`].
pub fn mouse_follower<E, A>(
    env: &Rc<E>,
    animator: &Rc<A>,
    parent: Option<E::Node>,
    custom_element: Option<E::Node>,
) -> Result<Follower<E>>
where
    E: Environment + 'static,
    A: Animator<E::Node> + 'static,
{
    mouse_follower_with(env, animator, parent, custom_element, FollowerOptions::default())
}

/// Start a follower under `parent` (the body when `None`).
///
/// A supplied `custom_element` is adopted without restyling; otherwise a
/// `div` with [`DEFAULT_STYLE`] is created. The element is appended right away.
pub fn mouse_follower_with<E, A>(
    env: &Rc<E>,
    animator: &Rc<A>,
    parent: Option<E::Node>,
    custom_element: Option<E::Node>,
    options: FollowerOptions,
) -> Result<Follower<E>>
where
    E: Environment + 'static,
    A: Animator<E::Node> + 'static,
{
    let parent = match parent {
        Some(p) => p,
        None => env.body()?,
    };
    let element = match custom_element {
        Some(el) => el,
        None => {
            let el = env.create_element("div")?;
            env.set_css_text(&el, DEFAULT_STYLE)?;
            el
        }
    };
    env.append_child(&parent, &element)?;

    let prev = Cell::new(Point::ORIGIN);
    let target = element.clone();
    let animator = Rc::clone(animator);
    let subscription = tracker::track(env, CoordinateSpace::Page, move |at| {
        if at == prev.get() {
            return;
        }
        animator.animate(
            &target,
            TweenSpec::new(at.as_offset(), options.duration_secs, options.ease),
        );
        prev.set(at);
    })?;

    debug!("follower started ({}s {})", options.duration_secs, options.ease.name());
    Ok(Follower {
        env: Rc::clone(env),
        parent,
        element,
        subscription,
        stopped: Cell::new(false),
    })
}
