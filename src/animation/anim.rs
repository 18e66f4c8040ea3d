use std::time::Duration;

use crate::{
    animation::ease::Ease,
    foundation::core::{ChildId, Pose, Vec2},
    foundation::error::{FanError, FanResult},
};

pub trait Lerp: Sized {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Vec2 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Vec2::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }
}

impl Lerp for Pose {
    // z-order and the visibility flags are not animated; they take the target value.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            rotation_deg: <f64 as Lerp>::lerp(&a.rotation_deg, &b.rotation_deg, t),
            translate: <Vec2 as Lerp>::lerp(&a.translate, &b.translate, t),
            scale: <Vec2 as Lerp>::lerp(&a.scale, &b.scale, t),
            z_order: b.z_order,
            visible: b.visible,
            hit_test_visible: b.hit_test_visible,
        }
    }
}

/// Duration and curve shared by every channel of a pose transition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationTiming {
    pub duration: Duration,
    pub ease: Ease,
}

impl AnimationTiming {
    pub fn new(duration: Duration, ease: Ease) -> FanResult<Self> {
        if duration.is_zero() {
            return Err(FanError::animation("animation duration must be > 0"));
        }
        ease.validate()?;
        Ok(Self { duration, ease })
    }

    /// Eased progress in `[0, 1]` after `elapsed`.
    pub fn progress(self, elapsed: Duration) -> f64 {
        if elapsed >= self.duration {
            return 1.0;
        }
        let t = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        self.ease.apply(t)
    }

    pub fn is_finished(self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }
}

/// Identifies one rotation animation so its completion can be routed back to the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CompletionToken {
    pub child: ChildId,
    pub pass: u64, // arrangement pass that issued it
}

/// Independently animated pose properties.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PoseChannel {
    Rotation,
    TranslateX,
    TranslateY,
    ScaleX,
    ScaleY,
}

impl PoseChannel {
    pub const ALL: [Self; 5] = [
        Self::Rotation,
        Self::TranslateX,
        Self::TranslateY,
        Self::ScaleX,
        Self::ScaleY,
    ];

    pub fn read(self, pose: &Pose) -> f64 {
        match self {
            Self::Rotation => pose.rotation_deg,
            Self::TranslateX => pose.translate.x,
            Self::TranslateY => pose.translate.y,
            Self::ScaleX => pose.scale.x,
            Self::ScaleY => pose.scale.y,
        }
    }
}

/// Request from the engine to the host: move `child` to `target` over `timing`.
///
/// z-order and visibility apply immediately. Only the rotation channel reports completion.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PoseAnimation {
    pub child: ChildId,
    pub target: Pose,
    pub timing: AnimationTiming,
    pub on_rotation_complete: Option<CompletionToken>,
}

impl PoseAnimation {
    /// Per-channel targets, for hosts that animate properties one by one.
    pub fn channels(
        &self,
    ) -> impl Iterator<Item = (PoseChannel, f64, Option<CompletionToken>)> + '_ {
        PoseChannel::ALL.into_iter().map(move |ch| {
            let token = match ch {
                PoseChannel::Rotation => self.on_rotation_complete,
                _ => None,
            };
            (ch, ch.read(&self.target), token)
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/anim.rs"]
mod tests;
