//! Element Definitions - materials that can occupy a grid cell
//!
//! Body centers and body vertices are materials too: they occupy one cell each
//! so the host can draw them, but they never count as obstacles for a body.

pub type ElementId = u8;
pub type CategoryId = u8;

pub const EL_EMPTY: ElementId = 0;
pub const EL_STONE: ElementId = 1;
pub const EL_SAND: ElementId = 2;
pub const EL_WOOD: ElementId = 3;
pub const EL_METAL: ElementId = 4;
pub const EL_WATER: ElementId = 5;
pub const EL_BODY_CENTER: ElementId = 6;
pub const EL_BODY_VERTEX: ElementId = 7;

pub const CAT_SOLID: CategoryId = 0;
pub const CAT_POWDER: CategoryId = 1;
pub const CAT_LIQUID: CategoryId = 2;
pub const CAT_RIGID: CategoryId = 3;

#[derive(Clone, Copy, Debug)]
pub struct ElementProps {
    pub name: &'static str,
    /// ABGR packed color
    pub color: u32,
    pub category: CategoryId,
    pub description: &'static str,
}

pub const ELEMENT_COUNT: usize = 8;

// ABGR: 0xAABBGGRR
pub const ELEMENT_DATA: [ElementProps; ELEMENT_COUNT] = [
    ElementProps { name: "EMPTY", color: 0xFF0A0A0A, category: CAT_SOLID, description: "Nothing." },
    ElementProps { name: "STONE", color: 0xFF808080, category: CAT_SOLID, description: "Immovable stone." },
    ElementProps { name: "SAND", color: 0xFF6EC8E6, category: CAT_POWDER, description: "Sand grains." },
    ElementProps { name: "WOOD", color: 0xFF2A4A8B, category: CAT_SOLID, description: "Solid wood." },
    ElementProps { name: "METAL", color: 0xFFB4AAA0, category: CAT_SOLID, description: "Solid metal." },
    ElementProps { name: "WATER", color: 0xFFD2781E, category: CAT_LIQUID, description: "Water." },
    ElementProps {
        name: "BODY_CENTER",
        color: 0xFF0000FF,
        category: CAT_RIGID,
        description: "Center of a rigid body. Place it first, then add vertices around it.",
    },
    ElementProps {
        name: "BODY_VERTEX",
        color: 0xFFEEAFCA,
        category: CAT_RIGID,
        description: "Corner of a rigid body. Joins the newest nearby body center.",
    },
];

#[inline]
pub fn is_valid_element_id(id: ElementId) -> bool {
    (id as usize) < ELEMENT_COUNT
}

#[inline]
pub fn is_particle(id: ElementId) -> bool {
    id != EL_EMPTY && is_valid_element_id(id)
}

#[inline]
pub fn category_of(id: ElementId) -> Option<CategoryId> {
    if is_valid_element_id(id) {
        Some(ELEMENT_DATA[id as usize].category)
    } else {
        None
    }
}

#[inline]
pub fn props(id: ElementId) -> Option<&'static ElementProps> {
    ELEMENT_DATA.get(id as usize)
}

/// Center/vertex marker cells
#[inline]
pub fn is_body_marker(id: ElementId) -> bool {
    category_of(id) == Some(CAT_RIGID)
}

/// Material a rigid body reacts to: anything that is not empty and not a body marker.
#[inline]
pub fn is_foreign_material(id: ElementId) -> bool {
    is_particle(id) && !is_body_marker(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markers_are_not_foreign() {
        assert!(is_body_marker(EL_BODY_CENTER));
        assert!(is_body_marker(EL_BODY_VERTEX));
        assert!(!is_foreign_material(EL_BODY_CENTER));
        assert!(!is_foreign_material(EL_BODY_VERTEX));
        assert!(!is_foreign_material(EL_EMPTY));
        assert!(is_foreign_material(EL_STONE));
        assert!(is_foreign_material(EL_WATER));
    }

    #[test]
    fn unknown_ids_are_rejected() {
        assert!(!is_valid_element_id(ELEMENT_COUNT as ElementId));
        assert!(!is_particle(200));
        assert_eq!(category_of(200), None);
    }
}
