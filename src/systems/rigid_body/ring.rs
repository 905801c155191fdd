//! Vertex ring - the ordered corners of one polygon
//!
//! Ring order is polygon winding: edge `i` runs from vertex `i` to vertex
//! `i + 1`, and the last vertex closes back onto the head. The ring owns its
//! handle sequence, so it always terminates and can never form a cycle.

use super::body::VertexHandle;

/// Fewer reachable vertices than this and the body is inert.
pub const MIN_POLYGON_VERTICES: usize = 3;

#[derive(Clone, Debug, Default)]
pub struct VertexRing {
    vertices: Vec<VertexHandle>,
}

impl VertexRing {
    pub fn new() -> Self {
        Self { vertices: Vec::new() }
    }

    /// Link `vertex` after the current tail.
    pub fn append(&mut self, vertex: VertexHandle) {
        self.vertices.push(vertex);
    }

    /// Every vertex from head to tail. Restartable: each call begins at the head.
    pub fn traverse(&self) -> impl Iterator<Item = VertexHandle> + '_ {
        self.vertices.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// True once the ring describes an actual polygon.
    pub fn is_polygon(&self) -> bool {
        self.vertices.len() >= MIN_POLYGON_VERTICES
    }

    pub fn head(&self) -> Option<VertexHandle> {
        self.vertices.first().copied()
    }

    pub fn tail(&self) -> Option<VertexHandle> {
        self.vertices.last().copied()
    }

    /// Successor of `vertex`; `None` for the tail or a vertex not in this ring.
    pub fn next(&self, vertex: VertexHandle) -> Option<VertexHandle> {
        let pos = self.vertices.iter().position(|&v| v == vertex)?;
        self.vertices.get(pos + 1).copied()
    }

    pub fn contains(&self, vertex: VertexHandle) -> bool {
        self.vertices.contains(&vertex)
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
    }
}
