use std::time::Duration;

use crate::{
    animation::anim::{AnimationTiming, CompletionToken, PoseAnimation},
    config::{CompletionPolicy, EngineConfig, LayoutMode},
    engine::host::{LayoutHost, Notification},
    engine::state::{FanState, Invalidation, PanelState},
    foundation::core::{ChildId, Point, Pose, Rect, Size, Vec2},
    foundation::error::{FanError, FanResult},
    foundation::rng::{RandomSource, Rng64},
    layout::{
        fan::{exploded_scatter, stacked_rotations},
        measure::{resolve_measure, scale_factor},
        wrap::wrap_placements,
    },
};

/// Engine-side bookkeeping for one host child.
#[derive(Clone, Copy, Debug)]
struct ChildRecord {
    id: ChildId,
    desired: Size,
    has_pose_state: bool,
    target: Pose, // last requested pose
    pending_rotation: Option<CompletionToken>,
}

impl ChildRecord {
    fn new(id: ChildId) -> Self {
        Self {
            id,
            desired: Size::ZERO,
            has_pose_state: false,
            target: Pose::default(),
            pending_rotation: None,
        }
    }
}

/// Fan/wrap layout engine for one panel.
///
/// The host drives it: report the child set with [`sync_children`](Self::sync_children),
/// forward pointer and mode signals, and run [`measure`](Self::measure) /
/// [`arrange`](Self::arrange) whenever a signal returns [`Invalidation::Arrange`].
/// Every pass recomputes all poses from current state and requests one animation per child.
pub struct FanLayoutEngine {
    config: EngineConfig,
    timing: AnimationTiming,
    panel: PanelState,
    region: Size,
    scale_factor: f64,
    children: Vec<ChildRecord>,
    children_dirty: bool,
    pass: u64,
    rng: Box<dyn RandomSource>,
}

impl std::fmt::Debug for FanLayoutEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FanLayoutEngine")
            .field("state", &self.panel.state())
            .field("region", &self.region)
            .field("scale_factor", &self.scale_factor)
            .field("children", &self.children.len())
            .field("children_dirty", &self.children_dirty)
            .field("pass", &self.pass)
            .finish_non_exhaustive()
    }
}

impl FanLayoutEngine {
    /// Engine seeded from `config.seed`.
    pub fn new(config: EngineConfig) -> FanResult<Self> {
        let rng = Box::new(Rng64::new(config.seed));
        Self::with_random_source(config, rng)
    }

    /// Engine whose exploded scatter draws from `rng`.
    pub fn with_random_source(
        config: EngineConfig,
        rng: Box<dyn RandomSource>,
    ) -> FanResult<Self> {
        config.validate()?;
        let timing = config.timing()?;
        Ok(Self {
            panel: PanelState::new(config.mode),
            config,
            timing,
            region: Size::ZERO,
            scale_factor: 1.0,
            children: Vec::new(),
            children_dirty: false,
            pass: 0,
            rng,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn state(&self) -> FanState {
        self.panel.state()
    }

    pub fn mode(&self) -> LayoutMode {
        self.panel.mode()
    }

    pub fn is_hovered(&self) -> bool {
        self.panel.is_hovered()
    }

    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    /// Region of the last arrangement pass.
    pub fn region(&self) -> Size {
        self.region
    }

    pub fn animation_duration(&self) -> Duration {
        self.timing.duration
    }

    pub fn children_dirty(&self) -> bool {
        self.children_dirty
    }

    pub fn children(&self) -> impl Iterator<Item = ChildId> + '_ {
        self.children.iter().map(|c| c.id)
    }

    /// Last pose requested for `child`, once it has been through an arrangement pass.
    pub fn target_pose(&self, child: ChildId) -> Option<Pose> {
        self.record(child)
            .filter(|c| c.has_pose_state)
            .map(|c| c.target)
    }

    fn record(&self, child: ChildId) -> Option<&ChildRecord> {
        self.children.iter().find(|c| c.id == child)
    }

    /// Replace the child sequence with `ids`, in order.
    ///
    /// Known children keep their measured size, z-order and pending completion; new ones
    /// get pose state on the next pass. Repeated ids after the first are ignored.
    pub fn sync_children(&mut self, ids: &[ChildId]) -> Invalidation {
        let mut next = Vec::with_capacity(ids.len());
        for &id in ids {
            if next.iter().any(|c: &ChildRecord| c.id == id) {
                tracing::debug!(child = %id, "duplicate child ignored");
                continue;
            }
            let record = self
                .children
                .iter()
                .find(|c| c.id == id)
                .copied()
                .unwrap_or_else(|| ChildRecord::new(id));
            next.push(record);
        }

        let changed = next.len() != self.children.len()
            || next.iter().zip(&self.children).any(|(a, b)| a.id != b.id);
        self.children = next;
        if !changed {
            return Invalidation::None;
        }
        tracing::debug!(count = self.children.len(), "children changed");
        self.children_dirty = true;
        Invalidation::Arrange
    }

    pub fn on_pointer_enter(&mut self) -> Invalidation {
        self.panel.pointer_enter()
    }

    pub fn on_pointer_leave(&mut self) -> Invalidation {
        self.panel.pointer_leave()
    }

    pub fn set_mode(&mut self, mode: LayoutMode) -> Invalidation {
        self.config.mode = mode;
        self.panel.set_mode(mode)
    }

    /// Duration for animations requested by later passes. In-flight animations keep theirs.
    pub fn set_animation_duration(&mut self, millis: u64) -> FanResult<()> {
        if millis == 0 {
            return Err(FanError::validation("animation duration must be > 0 ms"));
        }
        self.timing = AnimationTiming::new(Duration::from_millis(millis), self.timing.ease)?;
        self.config.animation_ms = millis;
        Ok(())
    }

    /// Swap in a new configuration; a seed change does not reseed the current source.
    pub fn apply_config(&mut self, config: EngineConfig) -> FanResult<Invalidation> {
        config.validate()?;
        let timing = config.timing()?;
        let mode = config.mode;
        let layout_changed = config.fit_fraction != self.config.fit_fraction
            || config.rotation_step_deg != self.config.rotation_step_deg
            || config.max_rotation_deg != self.config.max_rotation_deg
            || config.explode_buckets != self.config.explode_buckets;

        self.config = config;
        self.timing = timing;
        let relayout = if layout_changed {
            Invalidation::Arrange
        } else {
            Invalidation::None
        };
        Ok(self.panel.set_mode(mode).or(relayout))
    }

    /// Ask every child for its desired size under an unbounded offer, then resolve the
    /// panel's own size.
    #[tracing::instrument(skip(self, host))]
    pub fn measure<H: LayoutHost + ?Sized>(&mut self, available: Size, host: &mut H) -> Size {
        let unbounded = Size::new(f64::INFINITY, f64::INFINITY);
        for child in &mut self.children {
            child.desired = host.measure_child(child.id, unbounded);
        }
        resolve_measure(available, self.config.fallback_size)
    }

    /// Recompute every child's pose for `final_size` and request the transitions.
    #[tracing::instrument(
        skip(self, host),
        fields(state = ?self.panel.state(), children = self.children.len())
    )]
    pub fn arrange<H: LayoutHost + ?Sized>(&mut self, final_size: Size, host: &mut H) -> Size {
        host.notify(Notification::Refresh);
        if self.children.is_empty() {
            self.children_dirty = false;
            return final_size;
        }

        // an unbounded final size is laid out like an unbounded measure
        self.region = resolve_measure(final_size, self.config.fallback_size);
        self.pass += 1;

        let mut found_new = false;
        for child in &mut self.children {
            if !child.has_pose_state {
                child.has_pose_state = true;
                child.target = Pose::default();
                found_new = true;
            }
            host.arrange_child(child.id, Rect::from_origin_size(Point::ORIGIN, child.desired));
        }

        self.scale_factor = scale_factor(
            self.region,
            self.children.iter().map(|c| c.desired),
            self.config.fit_fraction,
        );

        let targets = self.compute_targets(found_new);
        tracing::debug!(
            pass = self.pass,
            found_new,
            scale = self.scale_factor,
            "dispatching poses"
        );

        let pass = self.pass;
        let policy = self.config.completion_policy;
        for (child, target) in self.children.iter_mut().zip(targets) {
            let rotation_unchanged = child.target.rotation_deg == target.rotation_deg;
            // this request replaces any in-flight animation, so it inherits its token
            let token = match policy {
                CompletionPolicy::OnRotationChange if rotation_unchanged => {
                    child.pending_rotation
                }
                _ => Some(CompletionToken {
                    child: child.id,
                    pass,
                }),
            };
            child.target = target;
            child.pending_rotation = token;
            host.request_pose_animation(PoseAnimation {
                child: child.id,
                target,
                timing: self.timing,
                on_rotation_complete: token,
            });
        }

        self.children_dirty = false;
        final_size
    }

    /// Target pose per child for the current state.
    ///
    /// Stacked and exploded poses are always visible, so a child hidden by the grid shows
    /// again once the panel collapses. Older fan panels left such children hidden; this one
    /// deliberately does not.
    fn compute_targets(&mut self, found_new: bool) -> Vec<Pose> {
        let count = self.children.len();
        let hit_test_visible = self.panel.mode() == LayoutMode::Wrap;
        let sf = self.scale_factor;

        match self.panel.state() {
            FanState::Stacked => {
                let rotations = stacked_rotations(
                    count,
                    self.config.rotation_step_deg,
                    self.config.max_rotation_deg,
                );
                self.children
                    .iter()
                    .zip(rotations)
                    .map(|(child, r)| Pose {
                        z_order: if found_new { 0 } else { child.target.z_order },
                        hit_test_visible,
                        ..Pose::placed(r, Vec2::ZERO, sf)
                    })
                    .collect()
            }
            FanState::Exploded => exploded_scatter(
                count,
                self.region,
                self.config.explode_buckets,
                &mut *self.rng,
            )
            .into_iter()
            .map(|s| Pose {
                z_order: s.z_order,
                hit_test_visible,
                ..Pose::placed(0.0, s.offset, sf)
            })
            .collect(),
            FanState::Wrapped => {
                let sizes: Vec<Size> = self.children.iter().map(|c| c.desired).collect();
                self.children
                    .iter()
                    .zip(wrap_placements(self.region, &sizes))
                    .map(|(child, w)| Pose {
                        z_order: child.target.z_order,
                        visible: w.visible,
                        hit_test_visible,
                        ..Pose::placed(0.0, w.offset, 1.0)
                    })
                    .collect()
            }
        }
    }

    /// Route a finished rotation animation back to the host's listeners.
    ///
    /// Returns `false` and raises nothing for tokens that were superseded by a later pass,
    /// already reported, or belong to a removed child.
    pub fn on_rotation_completed<H: LayoutHost + ?Sized>(
        &mut self,
        token: CompletionToken,
        host: &mut H,
    ) -> bool {
        let Some(child) = self.children.iter_mut().find(|c| c.id == token.child) else {
            tracing::debug!(child = %token.child, "completion for removed child");
            return false;
        };
        if child.pending_rotation != Some(token) {
            tracing::debug!(child = %token.child, pass = token.pass, "stale completion ignored");
            return false;
        }
        child.pending_rotation = None;
        host.notify(Notification::AnimationCompleted(token.child));
        true
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/panel.rs"]
mod tests;
