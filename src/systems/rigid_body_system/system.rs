use tracing::{debug, warn};

use crate::error::{KernelError, KernelResult};
use crate::grid::Grid;
use crate::rigid_body::{
    Arena, BodyCenter, BodyVertex, CenterHandle, GravityField, Polygon, Translation, Vec2,
    VertexHandle,
};

use super::integrate::{tick_body, BodyState, TickOutcome};
use super::settings::RigidBodySettings;

/// Manages all rigid bodies in the simulation
pub struct RigidBodySystem {
    pub(super) centers: Arena<BodyCenter>,
    pub(super) vertices: Arena<BodyVertex>,
    pub(super) settings: RigidBodySettings,
    pub(super) next_seq: u64,
    // Reused every tick
    scratch: BodyState,
    order: Vec<CenterHandle>,
}

/// Totals for one `update` call
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepReport {
    pub ticked: u32,
    pub inert: u32,
    pub contacts: u32,
    pub resolve_steps: u32,
    pub destroyed: u32,
    pub unresolved: u32,
}

impl RigidBodySystem {
    pub fn new() -> Self {
        Self::with_settings(RigidBodySettings::default())
    }

    pub fn with_settings(settings: RigidBodySettings) -> Self {
        Self {
            centers: Arena::new(),
            vertices: Arena::new(),
            settings,
            next_seq: 0,
            scratch: BodyState::default(),
            order: Vec::new(),
        }
    }

    pub fn settings(&self) -> &RigidBodySettings {
        &self.settings
    }

    pub fn set_settings(&mut self, settings: RigidBodySettings) -> KernelResult<()> {
        settings.validate()?;
        self.settings = settings;
        Ok(())
    }

    pub fn body_count(&self) -> usize {
        self.centers.len()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn center(&self, handle: CenterHandle) -> Option<&BodyCenter> {
        self.centers.get(handle)
    }

    pub fn vertex(&self, handle: VertexHandle) -> Option<&BodyVertex> {
        self.vertices.get(handle)
    }

    /// Live centers in creation order.
    pub fn center_handles(&self) -> Vec<CenterHandle> {
        let mut handles: Vec<(u64, CenterHandle)> =
            self.centers.iter().map(|(h, c)| (c.seq, h)).collect();
        handles.sort_unstable_by_key(|&(seq, _)| seq);
        handles.into_iter().map(|(_, h)| h).collect()
    }

    /// Absolute vertex positions of a body, in ring order.
    pub fn vertex_positions(&self, handle: CenterHandle) -> KernelResult<Vec<Vec2>> {
        let center = self.centers.get(handle).ok_or(KernelError::StaleHandle)?;
        Ok(center
            .ring
            .traverse()
            .filter_map(|vh| self.vertices.get(vh).map(|v| v.pos))
            .collect())
    }

    // === Geometric queries by handle ===

    pub fn contains(&self, handle: CenterHandle, point: Vec2) -> KernelResult<bool> {
        let (center, vertices) = self.shape(handle)?;
        Ok(Polygon::new(center, &vertices).contains(point))
    }

    pub fn closest_edge(&self, handle: CenterHandle, point: Vec2) -> KernelResult<Option<usize>> {
        let (center, vertices) = self.shape(handle)?;
        Ok(Polygon::new(center, &vertices).closest_edge(point))
    }

    pub fn minimum_translation(&self, handle: CenterHandle, point: Vec2) -> KernelResult<Translation> {
        let (center, vertices) = self.shape(handle)?;
        Ok(Polygon::new(center, &vertices).minimum_translation(point))
    }

    fn shape(&self, handle: CenterHandle) -> KernelResult<(Vec2, Vec<Vec2>)> {
        let vertices = self.vertex_positions(handle)?;
        let center = self.centers.get(handle).ok_or(KernelError::StaleHandle)?;
        Ok((center.pos, vertices))
    }

    /// Remove a body with all of its vertices and marker cells.
    /// Returns the number of vertices removed.
    pub fn remove_body(&mut self, handle: CenterHandle, grid: &mut Grid) -> KernelResult<usize> {
        let center = self.centers.remove(handle).ok_or(KernelError::StaleHandle)?;
        self.clear_markers(&center, grid);
        let mut removed = 0;
        for vh in center.ring.traverse() {
            if self.vertices.remove(vh).is_some() {
                removed += 1;
            }
        }
        Ok(removed)
    }

    /// Remove all bodies (used by World::clear()).
    pub fn clear(&mut self, grid: &mut Grid) {
        for handle in self.centers.handles() {
            // Handles come straight from the arena
            let _ = self.remove_body(handle, grid);
        }
        self.centers.clear();
        self.vertices.clear();
        self.next_seq = 0;
    }

    /// Tick every body once, in creation order.
    pub fn update(&mut self, grid: &mut Grid, gravity: &impl GravityField) -> StepReport {
        let mut report = StepReport::default();
        let mut order = std::mem::take(&mut self.order);
        order.clear();
        order.extend(self.center_handles());

        for &handle in order.iter() {
            if !self.load_state(handle) {
                continue;
            }
            let outcome = tick_body(&mut self.scratch, &self.settings, &*grid, gravity);
            match outcome {
                TickOutcome::Inert => {
                    report.inert += 1;
                    continue;
                }
                TickOutcome::Moved { contacts, resolve_steps } => {
                    report.contacts += contacts;
                    report.resolve_steps += resolve_steps;
                    if contacts > 0 || resolve_steps > 0 {
                        debug!(body = ?handle, contacts, resolve_steps, "body contact");
                    }
                    self.store_state(handle);
                    self.commit_markers(handle, grid);
                }
                TickOutcome::Destroyed { at } => {
                    warn!(body = ?handle, x = at.x, y = at.y, "body left the world, destroying");
                    report.destroyed += 1;
                    // Still live: loaded above
                    let _ = self.remove_body(handle, grid);
                }
                TickOutcome::UnresolvedCollision { contacts, resolve_steps } => {
                    warn!(body = ?handle, resolve_steps, "overlap not resolved within step cap");
                    report.contacts += contacts;
                    report.resolve_steps += resolve_steps;
                    report.unresolved += 1;
                    self.store_state(handle);
                    self.commit_markers(handle, grid);
                }
            }
            report.ticked += 1;
        }

        self.order = order;
        report
    }

    /// Copy a body into the scratch state. False if the handle is stale.
    fn load_state(&mut self, handle: CenterHandle) -> bool {
        let Some(center) = self.centers.get(handle) else {
            return false;
        };
        let s = &mut self.scratch;
        s.pos = center.pos;
        s.angle = center.angle;
        s.velocity = center.velocity;
        s.angular_vel = center.angular_vel;
        s.anchors.clear();
        s.vertices.clear();
        for vh in center.ring.traverse() {
            if let Some(v) = self.vertices.get(vh) {
                s.anchors.push(v.anchor);
                s.vertices.push(v.pos);
            }
        }
        s.inertia = center
            .ring
            .head()
            .and_then(|vh| self.vertices.get(vh))
            .map_or(0, |v| v.rotational_inertia);
        true
    }

    fn store_state(&mut self, handle: CenterHandle) {
        let Some(center) = self.centers.get_mut(handle) else {
            return;
        };
        let s = &self.scratch;
        center.pos = s.pos;
        center.angle = s.angle;
        center.velocity = s.velocity;
        center.angular_vel = s.angular_vel;
        for (vh, &pos) in center.ring.traverse().zip(s.vertices.iter()) {
            if let Some(v) = self.vertices.get_mut(vh) {
                v.pos = pos;
            }
        }
    }
}

impl Default for RigidBodySystem {
    fn default() -> Self {
        Self::new()
    }
}
