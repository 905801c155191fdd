//! Push-out after integration
//!
//! The body is nudged one cell at a time along the quantized sum of contact
//! directions until no foreign cell sits inside it.

use crate::rigid_body::{CellOccupancy, Vec2};

use super::contacts::{is_penetrated, push_direction};
use super::integrate::BodyState;
use super::settings::RigidBodySettings;

#[derive(Clone, Copy, Debug, PartialEq)]
pub(super) enum Resolution {
    Clear { steps: u32 },
    Destroyed { at: Vec2 },
    Unresolved { steps: u32 },
}

/// -1, 0 or +1. Both zeros map to 0.
#[inline]
fn unit_sign(v: f32) -> f32 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Single-cell step for a summed push direction; straight up when it cancels out.
pub fn quantize_step(sum: Vec2) -> Vec2 {
    let step = Vec2::new(unit_sign(sum.x), unit_sign(sum.y));
    if step.x == 0.0 && step.y == 0.0 {
        Vec2::new(0.0, -1.0)
    } else {
        step
    }
}

pub(super) fn resolve_penetration(
    state: &mut BodyState,
    settings: &RigidBodySettings,
    grid: &impl CellOccupancy,
) -> Resolution {
    let Some(sum) = push_direction(&state.polygon(), grid) else {
        return Resolution::Clear { steps: 0 };
    };
    let step = quantize_step(sum);
    let (width, height) = grid.dimensions();

    for steps in 1..=settings.max_resolve_steps {
        state.translate(step);
        if let Some(at) = state.first_outside(width, height, settings.boundary_margin) {
            return Resolution::Destroyed { at };
        }
        if !is_penetrated(&state.polygon(), grid) {
            return Resolution::Clear { steps };
        }
    }
    Resolution::Unresolved { steps: settings.max_resolve_steps }
}
