//! Tween - time-driven interpolation of a translate offset
//!
//! Pure bookkeeping: the caller feeds frame timestamps (milliseconds) and
//! writes the sampled offset wherever it belongs. The clock starts on the
//! first sample so a tween queued between frames does not skip ahead.
//!
//! [`TweenSet`] keeps one tween per node on top of that: a new request for a
//! node replaces the one in flight and starts from its last sampled offset.

use crate::env::TweenSpec;
use crate::primitives::{Ease, Offset};

#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    from: Offset,
    to: Offset,
    duration_ms: f64,
    ease: Ease,
    started_at: Option<f64>,
}

impl Tween {
    pub fn new(from: Offset, spec: TweenSpec) -> Self {
        Self {
            from,
            to: spec.to,
            duration_ms: (spec.duration_secs * 1000.0).max(0.0),
            ease: spec.ease,
            started_at: None,
        }
    }

    /// Offset at `now_ms` and whether the tween has reached its destination
    pub fn sample(&mut self, now_ms: f64) -> (Offset, bool) {
        let start = *self.started_at.get_or_insert(now_ms);
        if self.duration_ms <= 0.0 {
            return (self.to, true);
        }
        let t = ((now_ms - start) / self.duration_ms).clamp(0.0, 1.0);
        if t >= 1.0 {
            return (self.to, true);
        }
        (self.from.lerp(&self.to, self.ease.apply(t)), false)
    }
}

struct Track<N> {
    node: N,
    /// Inline transform found on first contact, kept in front of the offset.
    base: String,
    current: Offset,
    tween: Option<Tween>,
}

/// Per-node tween bookkeeping for a frame loop.
///
/// A node is forgotten once it settles back at zero offset; its transform is
/// then restored to the base it had on first contact.
pub struct TweenSet<N> {
    tracks: Vec<Track<N>>,
}

impl<N> Default for TweenSet<N> {
    fn default() -> Self {
        Self { tracks: Vec::new() }
    }
}

impl<N: Clone + PartialEq> TweenSet<N> {
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Point `node` at a new destination. `base` reads the node's current
    /// inline transform and is only called for a node not yet tracked.
    pub fn start(&mut self, node: &N, spec: TweenSpec, base: impl FnOnce() -> String) {
        match self.tracks.iter_mut().find(|t| &t.node == node) {
            Some(track) => track.tween = Some(Tween::new(track.current, spec)),
            None => self.tracks.push(Track {
                node: node.clone(),
                base: base(),
                current: Offset::ZERO,
                tween: Some(Tween::new(Offset::ZERO, spec)),
            }),
        }
    }

    /// Drop nodes that no longer satisfy `keep`, without touching their style
    pub fn retain(&mut self, mut keep: impl FnMut(&N) -> bool) {
        self.tracks.retain(|t| keep(&t.node));
    }

    /// Advance every tween to `now_ms`, handing each node its new transform
    /// value. Returns true while any tween is still moving.
    pub fn step(&mut self, now_ms: f64, mut write: impl FnMut(&N, &str)) -> bool {
        let mut running = false;
        self.tracks.retain_mut(|track| {
            let Some(tween) = track.tween.as_mut() else {
                return true;
            };
            let (offset, done) = tween.sample(now_ms);
            track.current = offset;
            if done && offset.is_zero() {
                write(&track.node, &track.base);
                return false;
            }
            write(&track.node, &offset.to_css_with_base(&track.base));
            if done {
                track.tween = None;
            } else {
                running = true;
            }
            true
        });
        running
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(to: Offset, secs: f64) -> TweenSpec {
        TweenSpec::new(to, secs, Ease::Linear)
    }

    #[test]
    fn first_sample_starts_the_clock() {
        let mut tw = Tween::new(Offset::ZERO, spec(Offset::new(100.0, 0.0), 1.0));
        assert_eq!(tw.sample(5_000.0), (Offset::ZERO, false));
        assert_eq!(tw.sample(5_500.0), (Offset::new(50.0, 0.0), false));
        assert_eq!(tw.sample(6_000.0), (Offset::new(100.0, 0.0), true));
    }

    #[test]
    fn overshooting_time_lands_on_target() {
        let mut tw = Tween::new(Offset::new(10.0, 10.0), spec(Offset::ZERO, 0.2));
        tw.sample(0.0);
        assert_eq!(tw.sample(10_000.0), (Offset::ZERO, true));
    }

    #[test]
    fn zero_duration_finishes_immediately() {
        let mut tw = Tween::new(Offset::ZERO, spec(Offset::new(3.0, 4.0), 0.0));
        assert_eq!(tw.sample(1.0), (Offset::new(3.0, 4.0), true));
    }

    #[test]
    fn eased_progress_is_applied() {
        let to = Offset::new(8.0, 0.0);
        let mut tw = Tween::new(Offset::ZERO, TweenSpec::new(to, 1.0, Ease::Power2Out));
        tw.sample(0.0);
        let (mid, done) = tw.sample(500.0);
        assert!(!done);
        assert_eq!(mid, Offset::new(7.0, 0.0));
    }

    // =============================================================
    // TweenSet
    // =============================================================

    const CENTERED: &str = "translate(-50%, -50%)";

    fn run(set: &mut TweenSet<u8>, now_ms: f64) -> (Vec<(u8, String)>, bool) {
        let mut writes = Vec::new();
        let running = set.step(now_ms, |node, css| writes.push((*node, css.to_string())));
        (writes, running)
    }

    #[test]
    fn base_transform_is_kept_in_front() {
        let mut set = TweenSet::default();
        set.start(&1, spec(Offset::new(40.0, 0.0), 1.0), || CENTERED.to_string());

        run(&mut set, 0.0);
        let (writes, running) = run(&mut set, 500.0);

        assert!(running);
        assert_eq!(writes, vec![(1, format!("{CENTERED} translate(20px, 0px)"))]);
    }

    #[test]
    fn base_is_read_on_first_contact_only() {
        let mut set = TweenSet::default();
        set.start(&1, spec(Offset::new(10.0, 0.0), 1.0), || CENTERED.to_string());
        set.start(&1, spec(Offset::new(20.0, 0.0), 1.0), || panic!("base read twice"));

        let (writes, _) = run(&mut set, 0.0);
        assert_eq!(writes, vec![(1, format!("{CENTERED} translate(0px, 0px)"))]);
    }

    #[test]
    fn new_request_replaces_tween_and_starts_from_sampled_offset() {
        let mut set = TweenSet::default();
        set.start(&1, spec(Offset::new(100.0, 0.0), 1.0), String::new);
        run(&mut set, 0.0);
        run(&mut set, 500.0);

        set.start(&1, spec(Offset::new(50.0, 100.0), 1.0), String::new);
        assert_eq!(set.len(), 1);

        let (writes, _) = run(&mut set, 600.0);
        assert_eq!(writes, vec![(1, "translate(50px, 0px)".to_string())]);
        let (writes, _) = run(&mut set, 1_100.0);
        assert_eq!(writes, vec![(1, "translate(50px, 50px)".to_string())]);
    }

    #[test]
    fn finished_away_from_rest_stays_tracked() {
        let mut set = TweenSet::default();
        set.start(&1, spec(Offset::new(5.0, 5.0), 0.2), String::new);
        run(&mut set, 0.0);

        let (writes, running) = run(&mut set, 200.0);
        assert!(!running);
        assert_eq!(writes, vec![(1, "translate(5px, 5px)".to_string())]);
        assert_eq!(set.len(), 1);

        let (writes, running) = run(&mut set, 300.0);
        assert!(!running);
        assert!(writes.is_empty());
    }

    #[test]
    fn settling_at_rest_restores_base_and_forgets_node() {
        let mut set = TweenSet::default();
        set.start(&1, spec(Offset::new(30.0, 0.0), 0.2), || CENTERED.to_string());
        run(&mut set, 0.0);
        run(&mut set, 100.0);

        set.start(&1, spec(Offset::ZERO, 0.2), || panic!("still tracked"));
        run(&mut set, 200.0);
        let (writes, running) = run(&mut set, 400.0);

        assert!(!running);
        assert_eq!(writes, vec![(1, CENTERED.to_string())]);
        assert!(set.is_empty());
    }

    #[test]
    fn nodes_are_independent() {
        let mut set = TweenSet::default();
        set.start(&1, spec(Offset::new(10.0, 0.0), 1.0), String::new);
        set.start(&2, spec(Offset::new(0.0, 10.0), 0.0), String::new);

        let (writes, running) = run(&mut set, 0.0);

        assert!(running);
        assert_eq!(
            writes,
            vec![
                (1, "translate(0px, 0px)".to_string()),
                (2, "translate(0px, 10px)".to_string()),
            ]
        );
    }

    #[test]
    fn retain_drops_detached_nodes() {
        let mut set = TweenSet::default();
        set.start(&1, spec(Offset::new(10.0, 0.0), 1.0), String::new);
        set.start(&2, spec(Offset::new(10.0, 0.0), 1.0), String::new);

        set.retain(|node| *node != 1);

        let (writes, _) = run(&mut set, 0.0);
        assert_eq!(set.len(), 1);
        assert_eq!(writes[0].0, 2);
    }
}
