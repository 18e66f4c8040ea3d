//! Engine configuration.
//!
//! Every field has a default, so a partial JSON document is a valid configuration.

use std::time::Duration;

use crate::{
    animation::anim::AnimationTiming,
    animation::ease::Ease,
    foundation::core::Size,
    foundation::error::{FanError, FanResult},
};

/// Which arrangement the panel uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum LayoutMode {
    /// Rotated stack, scattered while hovered.
    #[default]
    Fan,
    /// Flow layout, left to right and top to bottom.
    Wrap,
}

/// When a rotation animation gets a completion token.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum CompletionPolicy {
    /// Every pass restarts every rotation and reports its completion.
    #[default]
    Always,
    /// Skip the token when the child's rotation target did not change since the last pass.
    OnRotationChange,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub animation_ms: u64,
    pub mode: LayoutMode,
    pub ease: Ease,
    pub fallback_size: Size, // returned by measure for unbounded input
    pub fit_fraction: f64,   // of the smaller region dimension
    pub rotation_step_deg: f64,
    pub max_rotation_deg: f64,
    pub explode_buckets: u32,
    pub seed: u64,
    pub completion_policy: CompletionPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            animation_ms: 1250,
            mode: LayoutMode::Fan,
            ease: Ease::default(),
            fallback_size: Size::new(600.0, 600.0),
            fit_fraction: 0.4,
            rotation_step_deg: 15.0,
            max_rotation_deg: 90.0,
            explode_buckets: 16,
            seed: 0,
            completion_policy: CompletionPolicy::Always,
        }
    }
}

impl EngineConfig {
    pub fn from_json(s: &str) -> FanResult<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> FanResult<()> {
        if self.animation_ms == 0 {
            return Err(FanError::validation("animation_ms must be > 0"));
        }
        self.ease.validate()?;

        let Size { width, height } = self.fallback_size;
        if !(width.is_finite() && height.is_finite() && width >= 0.0 && height >= 0.0) {
            return Err(FanError::validation(
                "fallback_size must be finite and non-negative",
            ));
        }
        if !(self.fit_fraction > 0.0 && self.fit_fraction <= 1.0) {
            return Err(FanError::validation("fit_fraction must be in (0, 1]"));
        }
        if !(self.rotation_step_deg.is_finite() && self.rotation_step_deg > 0.0) {
            return Err(FanError::validation("rotation_step_deg must be > 0"));
        }
        if !(self.max_rotation_deg.is_finite() && self.max_rotation_deg >= 0.0) {
            return Err(FanError::validation("max_rotation_deg must be >= 0"));
        }
        if self.explode_buckets == 0 {
            return Err(FanError::validation("explode_buckets must be > 0"));
        }
        Ok(())
    }

    pub fn timing(&self) -> FanResult<AnimationTiming> {
        AnimationTiming::new(Duration::from_millis(self.animation_ms), self.ease)
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
