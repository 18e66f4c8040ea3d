pub use kurbo::{Affine, Point, Rect, Size, Vec2};

/// Host-assigned handle for one child visual.
///
/// The engine never constructs or destroys the visual behind the id.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct ChildId(pub u64);

impl std::fmt::Display for ChildId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "child#{}", self.0)
    }
}

/// Rendered placement of a child relative to its layout slot.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Pose {
    pub rotation_deg: f64,
    pub translate: Vec2,
    pub scale: Vec2, // default (1,1)
    pub z_order: i32,
    pub visible: bool,
    pub hit_test_visible: bool,
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            rotation_deg: 0.0,
            translate: Vec2::ZERO,
            scale: Vec2::new(1.0, 1.0),
            z_order: 0,
            visible: true,
            hit_test_visible: true,
        }
    }
}

impl Pose {
    /// Pose with the given rotation, offset and uniform scale; flags keep their defaults.
    pub fn placed(rotation_deg: f64, translate: Vec2, scale: f64) -> Self {
        Self {
            rotation_deg,
            translate,
            scale: Vec2::new(scale, scale),
            ..Self::default()
        }
    }

    /// Transform of a child of `size` whose render origin sits at its center.
    pub fn to_affine(self, size: Size) -> Affine {
        let center = Vec2::new(size.width * 0.5, size.height * 0.5);
        let t_center = Affine::translate(center);
        let t_uncenter = Affine::translate(-center);
        let t_rotate = Affine::rotate(self.rotation_deg.to_radians());
        let t_translate = Affine::translate(self.translate);
        let t_scale = Affine::scale_non_uniform(self.scale.x, self.scale.y);

        // Scale, then translate, then rotate, all about the center:
        // T(center) * R(rot) * T(translate) * S(scale) * T(-center)
        t_center * t_rotate * t_translate * t_scale * t_uncenter
    }
}

/// `true` when either dimension is unbounded.
pub fn is_unbounded(size: Size) -> bool {
    size.width.is_infinite() || size.height.is_infinite()
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
