//! Magnet - elements that lean toward a nearby pointer
//!
//! Each event, every target's center is measured against the pointer. Inside
//! the threshold the target is offset by `displacement * strength`; outside it
//! rests at zero offset. The decision is remade from scratch every event, with
//! no hysteresis, so a pointer sitting on the boundary flips the target back
//! and forth.
//!
//! Two response policies share the measuring loop:
//! - [`make_magnet`] writes the transform straight into the inline style and
//!   leans on a CSS transition for smoothing.
//! - [`make_magnet_smoothed`] hands every move to an [`Animator`].
//!
//! Targets are resolved once at setup. Call [`Magnet::refresh`] to pick up
//! elements added later.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{debug, trace, warn};
use serde::Deserialize;

use crate::env::{Animator, CoordinateSpace, Environment, TweenSpec};
use crate::error::{FxError, Result};
use crate::primitives::{Ease, Offset, Point};
use crate::tracker::{self, Subscription};

/// CSS timing function for the direct variant's ambient transition
pub const TRANSITION_TIMING: &str = "ease-out";
/// Curve used by the smoothed variant for every move
pub const SMOOTHED_EASE: Ease = Ease::Power2Out;

/// Threshold and response tuning, fixed for the lifetime of a magnet
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MagnetOptions {
    /// Pointer-to-center distance below which the target engages.
    pub distance: f64,
    /// Fraction of the displacement applied as offset.
    pub strength: f64,
    /// Seconds per move (transition length or tween duration).
    pub animation_duration: f64,
}

impl Default for MagnetOptions {
    fn default() -> Self {
        Self {
            distance: 200.0,
            strength: 0.2,
            animation_duration: 0.2,
        }
    }
}

impl MagnetOptions {
    /// Defaults for the smoothed variant, which pulls more gently
    pub fn smoothed() -> Self {
        Self {
            strength: 0.12,
            ..Self::default()
        }
    }

    pub fn with_distance(mut self, distance: f64) -> Self {
        self.distance = distance;
        self
    }

    pub fn with_strength(mut self, strength: f64) -> Self {
        self.strength = strength;
        self
    }

    pub fn with_animation_duration(mut self, secs: f64) -> Self {
        self.animation_duration = secs;
        self
    }

    /// Parse a JSON options object, filling absent fields from `base`
    pub fn from_json_over(json: &str, base: Self) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        if !value.is_object() {
            return Err(FxError::OptionsShape(json_kind(&value).to_string()));
        }
        let overrides: MagnetOverrides = serde_json::from_value(value)?;
        Ok(overrides.apply_to(base))
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct MagnetOverrides {
    distance: Option<f64>,
    strength: Option<f64>,
    animation_duration: Option<f64>,
}

impl MagnetOverrides {
    fn apply_to(self, base: MagnetOptions) -> MagnetOptions {
        MagnetOptions {
            distance: self.distance.unwrap_or(base.distance),
            strength: self.strength.unwrap_or(base.strength),
            animation_duration: self.animation_duration.unwrap_or(base.animation_duration),
        }
    }
}

/// State of one target for one pointer sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Attraction {
    /// Within the threshold, pulled by this offset.
    Engaged(Offset),
    /// Outside the threshold, at rest.
    Resting,
}

impl Attraction {
    pub fn offset(&self) -> Offset {
        match self {
            Self::Engaged(offset) => *offset,
            Self::Resting => Offset::ZERO,
        }
    }

    pub fn is_engaged(&self) -> bool {
        matches!(self, Self::Engaged(_))
    }
}

/// Linear attraction of a target centered at `center` toward `pointer`
pub fn attract(pointer: Point, center: Point, options: &MagnetOptions) -> Attraction {
    let delta = pointer.delta_from(&center);
    if delta.length() < options.distance {
        Attraction::Engaged(delta.scale(options.strength))
    } else {
        Attraction::Resting
    }
}

/// How a magnet turns an [`Attraction`] into a visual change
trait Response<E: Environment> {
    /// Run once per freshly resolved target set.
    fn prepare(&self, env: &E, targets: &[E::Node]) -> Result<()>;
    fn respond(&self, env: &E, node: &E::Node, attraction: Attraction) -> Result<()>;
}

struct DirectStyle {
    transition: String,
}

impl<E: Environment> Response<E> for DirectStyle {
    fn prepare(&self, env: &E, targets: &[E::Node]) -> Result<()> {
        for node in targets {
            env.set_style(node, "transition", &self.transition)?;
        }
        Ok(())
    }

    fn respond(&self, env: &E, node: &E::Node, attraction: Attraction) -> Result<()> {
        match attraction {
            Attraction::Engaged(offset) => env.set_style(node, "transform", &offset.to_css()),
            Attraction::Resting => env.set_style(node, "transform", ""),
        }
    }
}

struct Smoothed<A> {
    animator: Rc<A>,
    duration_secs: f64,
}

impl<E: Environment, A: Animator<E::Node>> Response<E> for Smoothed<A> {
    fn prepare(&self, _env: &E, _targets: &[E::Node]) -> Result<()> {
        Ok(())
    }

    fn respond(&self, _env: &E, node: &E::Node, attraction: Attraction) -> Result<()> {
        self.animator.animate(
            node,
            TweenSpec::new(attraction.offset(), self.duration_secs, SMOOTHED_EASE),
        );
        Ok(())
    }
}

enum TargetSource<N> {
    Selector(String),
    Element(N),
}

impl<N: Clone> TargetSource<N> {
    fn resolve<E: Environment<Node = N>>(&self, env: &E) -> Vec<N> {
        match self {
            Self::Selector(selector) => env.query_selector_all(selector),
            Self::Element(node) => vec![node.clone()],
        }
    }
}

/// A running magnet over a resolved set of targets
pub struct Magnet<E: Environment + 'static> {
    env: Rc<E>,
    source: TargetSource<E::Node>,
    targets: Rc<RefCell<Vec<E::Node>>>,
    response: Rc<dyn Response<E>>,
    subscription: Subscription<E>,
    stopped: Cell<bool>,
}

impl<E: Environment + 'static> Magnet<E> {
    pub fn len(&self) -> usize {
        self.targets.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.borrow().is_empty()
    }

    /// Snapshot of the current target set
    pub fn targets(&self) -> Vec<E::Node> {
        self.targets.borrow().clone()
    }

    /// True once [`stop`](Self::stop) has completed without error
    pub fn is_stopped(&self) -> bool {
        self.stopped.get()
    }

    /// Re-run target resolution and return the new target count.
    ///
    /// Targets that drop out of the set keep whatever offset they had.
    pub fn refresh(&self) -> Result<usize> {
        let fresh = self.source.resolve(&*self.env);
        self.response.prepare(&*self.env, &fresh)?;
        let count = fresh.len();
        *self.targets.borrow_mut() = fresh;
        debug!("magnet refreshed: {count} targets");
        Ok(count)
    }

    /// Detach from pointer events and return every target to rest.
    ///
    /// Every target is released even if one fails; the first error is
    /// returned and the magnet stays unstopped so the call can be retried.
    /// Safe to call repeatedly.
    pub fn stop(&self) -> Result<()> {
        if self.is_stopped() {
            return Ok(());
        }
        self.subscription.cancel()?;
        let mut first_err = None;
        for node in self.targets.borrow().iter() {
            if let Err(err) = self.response.respond(&*self.env, node, Attraction::Resting) {
                first_err.get_or_insert(err);
            }
        }
        if let Some(err) = first_err {
            return Err(err);
        }
        self.stopped.set(true);
        debug!("magnet stopped");
        Ok(())
    }
}

/// Magnet that writes offsets straight into the inline `transform`.
///
/// A `transition: transform <duration>s ease-out` is set on every target so
/// both the pull and the snap back animate. `custom_element`, when given, is
/// the only target and `selector` is ignored.
pub fn make_magnet<E>(
    env: &Rc<E>,
    selector: &str,
    options: MagnetOptions,
    custom_element: Option<E::Node>,
) -> Result<Magnet<E>>
where
    E: Environment + 'static,
{
    let response = DirectStyle {
        transition: format!("transform {}s {TRANSITION_TIMING}", options.animation_duration),
    };
    bind(env, selector, options, custom_element, Rc::new(response))
}

/// Magnet that routes every offset change, engaged or resting, through `animator`
/// with the configured duration and a `power2.out` curve.
pub fn make_magnet_smoothed<E, A>(
    env: &Rc<E>,
    animator: &Rc<A>,
    selector: &str,
    options: MagnetOptions,
    custom_element: Option<E::Node>,
) -> Result<Magnet<E>>
where
    E: Environment + 'static,
    A: Animator<E::Node> + 'static,
{
    let response = Smoothed {
        animator: Rc::clone(animator),
        duration_secs: options.animation_duration,
    };
    bind(env, selector, options, custom_element, Rc::new(response))
}

fn bind<E>(
    env: &Rc<E>,
    selector: &str,
    options: MagnetOptions,
    custom_element: Option<E::Node>,
    response: Rc<dyn Response<E>>,
) -> Result<Magnet<E>>
where
    E: Environment + 'static,
{
    let source = match custom_element {
        Some(node) => TargetSource::Element(node),
        None => TargetSource::Selector(selector.to_string()),
    };
    let resolved = source.resolve(&**env);
    response.prepare(env, &resolved)?;
    debug!(
        "magnet bound to {} targets (distance {}, strength {})",
        resolved.len(),
        options.distance,
        options.strength
    );
    let targets = Rc::new(RefCell::new(resolved));

    let handler_env = Rc::clone(env);
    let handler_targets = Rc::clone(&targets);
    let handler_response = Rc::clone(&response);
    let subscription = tracker::track(env, CoordinateSpace::Client, move |pointer| {
        let targets = handler_targets.borrow();
        if let Err(err) = update(&*handler_env, &targets, pointer, &options, &*handler_response) {
            warn!("magnet update skipped: {err}");
        }
    })?;

    Ok(Magnet {
        env: Rc::clone(env),
        source,
        targets,
        response,
        subscription,
        stopped: Cell::new(false),
    })
}

fn update<E: Environment>(
    env: &E,
    targets: &[E::Node],
    pointer: Point,
    options: &MagnetOptions,
    response: &dyn Response<E>,
) -> Result<()> {
    for node in targets {
        let center = env.bounding_rect(node).center_with(env.offset_size(node));
        let attraction = attract(pointer, center, options);
        if let Attraction::Engaged(offset) = attraction {
            trace!("engaged at {:.1}px, offset {offset:?}", pointer.distance(&center));
        }
        response.respond(env, node, attraction)?;
    }
    Ok(())
}
