use crate::elements::{is_foreign_material, props};

use super::WorldCore;

pub(super) fn add_particle(world: &mut WorldCore, x: u32, y: u32, element: u8) -> bool {
    if x >= world.grid.width() || y >= world.grid.height() {
        return false;
    }

    // Body markers only come from place_body_*
    if !is_foreign_material(element) {
        return false;
    }

    if !world.grid.is_empty(x as i32, y as i32) {
        return false;
    }

    let Some(props) = props(element) else {
        return false;
    };

    world.grid.set_particle(x, y, element, props.color);
    world.particle_count += 1;
    true
}

pub(super) fn add_particles_in_radius(world: &mut WorldCore, cx: i32, cy: i32, radius: i32, element: u8) {
    let r2 = radius * radius;
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy <= r2 {
                let x = cx + dx;
                let y = cy + dy;
                if x >= 0 && y >= 0 {
                    add_particle(world, x as u32, y as u32, element);
                }
            }
        }
    }
}

pub(super) fn remove_particle(world: &mut WorldCore, x: u32, y: u32) -> bool {
    if x >= world.grid.width() || y >= world.grid.height() {
        return false;
    }

    if !is_foreign_material(world.grid.get_type(x as i32, y as i32)) {
        return false;
    }

    world.grid.clear_cell(x, y);
    world.particle_count = world.particle_count.saturating_sub(1);
    true
}

pub(super) fn clear(world: &mut WorldCore) {
    world.bodies.clear(&mut world.grid);
    world.grid.clear();
    world.particle_count = 0;
    world.frame = 0;
}
