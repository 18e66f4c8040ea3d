use crate::foundation::error::{FanError, FanResult};

/// Progress curve for a pose transition.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    Linear,
    InOutQuad,
    InOutCubic,
    /// Constant acceleration for the first `accel` fraction of the duration, constant
    /// deceleration for the last `decel` fraction, cruising in between.
    AccelDecel { accel: f64, decel: f64 },
}

impl Default for Ease {
    fn default() -> Self {
        Self::AccelDecel {
            accel: 0.2,
            decel: 0.7,
        }
    }
}

impl Ease {
    pub fn validate(self) -> FanResult<()> {
        if let Self::AccelDecel { accel, decel } = self {
            if !(0.0..=1.0).contains(&accel) || !(0.0..=1.0).contains(&decel) {
                return Err(FanError::animation(
                    "acceleration and deceleration ratios must be in [0, 1]",
                ));
            }
            if accel + decel > 1.0 {
                return Err(FanError::animation(
                    "acceleration + deceleration ratios must not exceed 1",
                ));
            }
        }
        Ok(())
    }

    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::AccelDecel { accel, decel } => accel_decel(t, accel, decel),
        }
    }
}

fn accel_decel(t: f64, accel: f64, decel: f64) -> f64 {
    if accel <= 0.0 && decel <= 0.0 {
        return t;
    }
    // Peak velocity such that the area under the trapezoid is 1.
    let v = 1.0 / (1.0 - accel * 0.5 - decel * 0.5);
    if t < accel {
        v * t * t / (2.0 * accel)
    } else if t <= 1.0 - decel {
        v * (t - accel * 0.5)
    } else {
        let rem = 1.0 - t;
        1.0 - v * rem * rem / (2.0 * decel)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
