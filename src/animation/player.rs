use std::collections::BTreeMap;
use std::time::Duration;

use crate::{
    animation::anim::{AnimationTiming, CompletionToken, Lerp, PoseAnimation},
    foundation::core::{ChildId, Pose},
};

#[derive(Clone, Copy, Debug)]
struct Transition {
    from: Pose,
    to: Pose,
    started: Duration,
    timing: AnimationTiming,
    token: Option<CompletionToken>,
}

impl Transition {
    fn sample(&self, now: Duration) -> Pose {
        let elapsed = now.saturating_sub(self.started);
        Pose::lerp(&self.from, &self.to, self.timing.progress(elapsed))
    }
}

/// Reference playback of [`PoseAnimation`] requests on a host-supplied clock.
///
/// Starting an animation on a child replaces the one in flight, continuing from the
/// currently sampled pose. A replaced transition never reports its completion token.
#[derive(Clone, Debug, Default)]
pub struct PosePlayer {
    settled: BTreeMap<ChildId, Pose>,
    active: BTreeMap<ChildId, Transition>,
}

impl PosePlayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, anim: PoseAnimation, now: Duration) {
        let mut from = self.pose_at(anim.child, now);
        from.z_order = anim.target.z_order;
        from.visible = anim.target.visible;
        from.hit_test_visible = anim.target.hit_test_visible;

        let replaced = self.active.insert(
            anim.child,
            Transition {
                from,
                to: anim.target,
                started: now,
                timing: anim.timing,
                token: anim.on_rotation_complete,
            },
        );
        if let Some(old) = replaced.and_then(|t| t.token) {
            tracing::trace!(child = %old.child, pass = old.pass, "superseded rotation animation");
        }
    }

    /// Pose of `child` at `now`; identity for unknown children.
    pub fn pose_at(&self, child: ChildId, now: Duration) -> Pose {
        if let Some(t) = self.active.get(&child) {
            return t.sample(now);
        }
        self.settled.get(&child).copied().unwrap_or_default()
    }

    /// Settle every transition that has finished by `now` and return their completion
    /// tokens in child order.
    pub fn advance(&mut self, now: Duration) -> Vec<CompletionToken> {
        let finished: Vec<ChildId> = self
            .active
            .iter()
            .filter(|(_, t)| t.timing.is_finished(now.saturating_sub(t.started)))
            .map(|(id, _)| *id)
            .collect();

        let mut tokens = Vec::new();
        for id in finished {
            if let Some(t) = self.active.remove(&id) {
                self.settled.insert(id, t.to);
                tokens.extend(t.token);
            }
        }
        tokens
    }

    pub fn remove(&mut self, child: ChildId) {
        self.active.remove(&child);
        self.settled.remove(&child);
    }

    pub fn is_idle(&self) -> bool {
        self.active.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/player.rs"]
mod tests;
