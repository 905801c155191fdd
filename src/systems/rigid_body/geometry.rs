//! Geometric queries against one polygon
//!
//! All queries read the absolute vertex positions in ring order plus the
//! center position. Cell coordinates are sampled at their integer corner
//! (`(x, y)` as floats), matching how the grid addresses cells.

use super::ring::MIN_POLYGON_VERTICES;
use super::vec2::Vec2;

/// Squared length below which an offset has no direction (matches `Vec2::normalize`)
const MIN_OFFSET_SQ: f32 = 1e-8;

/// Read-only view of one body's current shape
#[derive(Clone, Copy, Debug)]
pub struct Polygon<'a> {
    pub center: Vec2,
    pub vertices: &'a [Vec2],
    /// +1 when the ring runs with decreasing screen angle, -1 otherwise
    winding: f32,
}

/// Push-out response for one contact point
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Translation {
    /// From the point to its projection on the closest edge
    pub offset: Vec2,
    /// Component of `offset` orthogonal to the radius, signed by `offset × radius`
    pub torque: f32,
}

impl Translation {
    pub const NONE: Translation = Translation {
        offset: Vec2 { x: 0.0, y: 0.0 },
        torque: 0.0,
    };

    /// An offset too short to give a push direction means "no usable collision".
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.offset.length_squared() < MIN_OFFSET_SQ
    }
}

#[derive(Clone, Copy, Debug)]
struct EdgeHit {
    index: usize,
    /// point - projection
    lin: Vec2,
}

/// Integer cell rectangle `[min, max)` on both axes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellBounds {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl CellBounds {
    /// Bounding box of a point set, truncated to whole cells.
    pub fn around(points: &[Vec2]) -> Option<Self> {
        let first = points.first()?;
        let (mut lx, mut ly, mut mx, mut my) = (first.x, first.y, first.x, first.y);
        for p in &points[1..] {
            lx = lx.min(p.x);
            ly = ly.min(p.y);
            mx = mx.max(p.x);
            my = my.max(p.y);
        }
        Some(Self {
            min_x: lx.floor() as i32,
            min_y: ly.floor() as i32,
            max_x: mx.floor() as i32,
            max_y: my.floor() as i32,
        })
    }

    /// Clip to a `width` x `height` grid.
    pub fn clamp(&self, width: u32, height: u32) -> Self {
        let w = width as i32;
        let h = height as i32;
        Self {
            min_x: self.min_x.clamp(0, w),
            min_y: self.min_y.clamp(0, h),
            max_x: self.max_x.clamp(0, w),
            max_y: self.max_y.clamp(0, h),
        }
    }

    pub fn width(&self) -> u32 {
        (self.max_x - self.min_x).max(0) as u32
    }

    pub fn height(&self) -> u32 {
        (self.max_y - self.min_y).max(0) as u32
    }

    /// Cells in scan order: x outer, y inner.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> {
        let (min_y, max_y) = (self.min_y, self.max_y);
        (self.min_x..self.max_x).flat_map(move |x| (min_y..max_y).map(move |y| (x, y)))
    }
}

impl<'a> Polygon<'a> {
    pub fn new(center: Vec2, vertices: &'a [Vec2]) -> Self {
        let winding = if signed_area(vertices) > 0.0 { -1.0 } else { 1.0 };
        Self { center, vertices, winding }
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.vertices.len() >= MIN_POLYGON_VERTICES
    }

    /// (start, end) of every edge, closing tail -> head.
    fn edges(&self) -> impl Iterator<Item = (Vec2, Vec2)> + 'a {
        let vs = self.vertices;
        let n = vs.len();
        (0..n).map(move |i| (vs[i], vs[(i + 1) % n]))
    }

    pub fn bounds(&self) -> Option<CellBounds> {
        CellBounds::around(self.vertices)
    }

    /// Point-in-polygon test.
    ///
    /// For each edge, `(point - start) × (end - start)` must not have the
    /// sign opposite to the ring's winding. Either placement order works;
    /// a zero-area ring is treated as decreasing screen angle.
    pub fn contains(&self, point: Vec2) -> bool {
        if !self.is_valid() {
            return false;
        }
        for (start, end) in self.edges() {
            let u = point - start;
            let e = end - start;
            if u.cross(e) * self.winding < 0.0 {
                return false;
            }
        }
        true
    }

    /// Index of the edge closest to `point`, if any edge's perpendicular foot
    /// lands on the segment itself. Edges whose closest point would be an
    /// endpoint are skipped, not clamped. First minimum wins.
    pub fn closest_edge(&self, point: Vec2) -> Option<usize> {
        self.nearest_edge(point).map(|hit| hit.index)
    }

    /// Minimum translation vector and torque for a contact at `point`.
    ///
    /// Returns [`Translation::NONE`] for fewer than three vertices or when no
    /// edge qualifies.
    pub fn minimum_translation(&self, point: Vec2) -> Translation {
        let Some(hit) = self.nearest_edge(point) else {
            return Translation::NONE;
        };
        let offset = -hit.lin;
        let radius = point - self.center;
        let r2 = radius.length_squared();
        let torque = if r2 > 0.0 { offset.cross(radius) / r2.sqrt() } else { 0.0 };
        Translation { offset, torque }
    }

    fn nearest_edge(&self, point: Vec2) -> Option<EdgeHit> {
        if !self.is_valid() {
            return None;
        }
        let mut best: Option<(f32, EdgeHit)> = None;
        for (index, (start, end)) in self.edges().enumerate() {
            let u = point - start;
            let e = end - start;
            let e2 = e.length_squared();
            if e2 == 0.0 {
                continue;
            }
            let ratio = u.dot(e) / e2;
            if !(0.0..=1.0).contains(&ratio) {
                continue;
            }
            let lin = u - e * ratio;
            let dist = lin.length_squared();
            match best {
                Some((min, _)) if dist >= min => {}
                _ => best = Some((dist, EdgeHit { index, lin })),
            }
        }
        best.map(|(_, hit)| hit)
    }
}

/// Twice the shoelace area: positive for increasing screen angle.
fn signed_area(vertices: &[Vec2]) -> f32 {
    let n = vertices.len();
    (0..n).map(|i| vertices[i].cross(vertices[(i + 1) % n])).sum()
}
