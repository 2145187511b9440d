//! Pointer tracker - push-based delivery of the latest pointer sample
//!
//! There is no shared tracker object. Each controller calls [`track`] with the
//! coordinate space it positions against and gets its own [`Subscription`].
//! Samples are delivered once per underlying event, in order, unbuffered.

use std::cell::Cell;
use std::rc::Rc;

use crate::env::{CoordinateSpace, Environment, ListenerId};
use crate::error::Result;
use crate::primitives::Point;

/// Live registration on the pointer-move stream
pub struct Subscription<E: Environment> {
    env: Rc<E>,
    id: ListenerId,
    active: Rc<Cell<bool>>,
}

impl<E: Environment> Subscription<E> {
    pub fn is_active(&self) -> bool {
        self.active.get()
    }

    /// Detach from the event source. Safe to call repeatedly.
    ///
    /// The subscription stays active if the host refuses to remove the
    /// listener, so a later call can retry.
    pub fn cancel(&self) -> Result<()> {
        if !self.active.get() {
            return Ok(());
        }
        self.env.unlisten_pointer_move(self.id)?;
        self.active.set(false);
        Ok(())
    }
}

/// Subscribe `on_sample` to pointer moves, reading coordinates from `space`.
///
/// The handler stops receiving samples as soon as the subscription is
/// cancelled, even if the host still delivers an event already in flight.
pub fn track<E, F>(env: &Rc<E>, space: CoordinateSpace, mut on_sample: F) -> Result<Subscription<E>>
where
    E: Environment,
    F: FnMut(Point) + 'static,
{
    let active = Rc::new(Cell::new(true));
    let gate = Rc::clone(&active);
    let id = env.listen_pointer_move(Box::new(move |event| {
        if gate.get() {
            on_sample(event.point(space));
        }
    }))?;

    Ok(Subscription {
        env: Rc::clone(env),
        id,
        active,
    })
}
