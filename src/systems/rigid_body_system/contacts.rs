//! Foreign-material scans over a body's bounding box

use crate::rigid_body::{CellBounds, CellOccupancy, Polygon, Translation, Vec2};

/// Cells of `polygon`'s bounding box, clipped to the grid.
fn scan_area(polygon: &Polygon, grid: &impl CellOccupancy) -> Option<CellBounds> {
    let (w, h) = grid.dimensions();
    Some(polygon.bounds()?.clamp(w, h))
}

/// Visit every foreign cell whose minimum translation is non-zero, in scan order.
pub(super) fn for_each_contact(
    polygon: &Polygon,
    grid: &impl CellOccupancy,
    mut visit: impl FnMut(Translation),
) -> u32 {
    let Some(area) = scan_area(polygon, grid) else {
        return 0;
    };
    let mut contacts = 0;
    for (x, y) in area.cells() {
        if !grid.occupant(x, y).is_foreign() {
            continue;
        }
        let t = polygon.minimum_translation(Vec2::new(x as f32, y as f32));
        if t.is_zero() {
            continue;
        }
        contacts += 1;
        visit(t);
    }
    contacts
}

/// Sum of unit push directions over all contacts, or `None` without contacts.
pub(super) fn push_direction(polygon: &Polygon, grid: &impl CellOccupancy) -> Option<Vec2> {
    let mut sum = Vec2::zero();
    let contacts = for_each_contact(polygon, grid, |t| sum += t.offset.normalize());
    (contacts > 0).then_some(sum)
}

/// True if any foreign cell in the bounding box lies inside the polygon.
pub(super) fn is_penetrated(polygon: &Polygon, grid: &impl CellOccupancy) -> bool {
    let Some(area) = scan_area(polygon, grid) else {
        return false;
    };
    area.cells().any(|(x, y)| {
        grid.occupant(x, y).is_foreign() && polygon.contains(Vec2::new(x as f32, y as f32))
    })
}
