//! Contract between the engine and the UI host that owns the child visuals.

use crate::{
    animation::anim::PoseAnimation,
    foundation::core::{ChildId, Rect, Size},
};

/// Signals the engine raises for the host's listeners.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Notification {
    /// Raised at the start of every arrangement pass; the child count may have changed.
    Refresh,
    /// The rotation animation of this child finished.
    AnimationCompleted(ChildId),
}

/// Implemented by the UI layer that hosts the panel.
///
/// All calls arrive on the host's UI thread, from inside an engine operation.
pub trait LayoutHost {
    /// Desired size of `child` when offered `available`.
    fn measure_child(&mut self, child: ChildId, available: Size) -> Size;

    /// Place `child` at its layout slot; the render origin is the slot's center.
    fn arrange_child(&mut self, child: ChildId, slot: Rect);

    /// Start moving `child` to the requested pose, replacing any animation in flight on it.
    ///
    /// When the rotation channel finishes, hand `request.on_rotation_complete` back through
    /// [`FanLayoutEngine::on_rotation_completed`](crate::FanLayoutEngine::on_rotation_completed).
    fn request_pose_animation(&mut self, request: PoseAnimation);

    fn notify(&mut self, notification: Notification);
}
