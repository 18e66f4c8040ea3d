//! Fanpanel is a host-agnostic layout engine for a "fan" panel.
//!
//! Children are arranged in one of two modes and every change is animated:
//!
//! - **Fan** (default): a stack of overlapping cards, each rotated along a zig-zag of
//!   15° steps. While the pointer is over the panel the stack *explodes*: children are
//!   scattered at random offsets, unrotated.
//! - **Wrap**: a flow layout, left to right and top to bottom, at natural size.
//!
//! # Driving the engine
//!
//! 1. Report the child set with [`FanLayoutEngine::sync_children`].
//! 2. Forward pointer enter/leave and mode toggles; each returns an [`Invalidation`].
//! 3. When asked to, run [`FanLayoutEngine::measure`] and [`FanLayoutEngine::arrange`]. The
//!    engine calls back into your [`LayoutHost`] with one [`PoseAnimation`] per child.
//! 4. When a rotation animation finishes, hand its [`CompletionToken`] to
//!    [`FanLayoutEngine::on_rotation_completed`] to raise
//!    [`Notification::AnimationCompleted`].
//!
//! Hosts without their own animation system can play requests with [`PosePlayer`].
#![forbid(unsafe_code)]

mod animation;
mod config;
mod engine;
mod foundation;
mod layout;

pub use animation::anim::{
    AnimationTiming, CompletionToken, Lerp, PoseAnimation, PoseChannel,
};
pub use animation::ease::Ease;
pub use animation::player::PosePlayer;
pub use config::{CompletionPolicy, EngineConfig, LayoutMode};
pub use engine::host::{LayoutHost, Notification};
pub use engine::panel::FanLayoutEngine;
pub use engine::state::{FanState, Invalidation, PanelState};
pub use foundation::core::{Affine, ChildId, Point, Pose, Rect, Size, Vec2, is_unbounded};
pub use foundation::error::{FanError, FanResult};
pub use foundation::rng::{RandomSource, Rng64};
pub use layout::fan::{Scatter, exploded_scatter, stacked_rotations};
pub use layout::measure::{resolve_measure, scale_factor};
pub use layout::wrap::{WrapPlacement, wrap_placements};
