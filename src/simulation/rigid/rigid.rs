use crate::error::KernelResult;
use crate::rigid_body::{CenterHandle, VertexHandle};

use super::WorldCore;

pub(super) fn place_body_center(world: &mut WorldCore, x: u32, y: u32) -> KernelResult<CenterHandle> {
    world.bodies.place_center(&mut world.grid, x, y)
}

pub(super) fn place_body_vertex(world: &mut WorldCore, x: u32, y: u32) -> KernelResult<VertexHandle> {
    world.bodies.place_vertex(&mut world.grid, x, y)
}

pub(super) fn remove_body(world: &mut WorldCore, body: CenterHandle) -> KernelResult<usize> {
    world.bodies.remove_body(body, &mut world.grid)
}
