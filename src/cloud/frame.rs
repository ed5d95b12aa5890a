//! Per-time-step point positions.

use std::fmt;

use glam::Vec3;

/// Positions of every point at one time step, in point order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Frame {
    positions: Vec<Vec3>,
}

impl Frame {
    /// Create a frame from positions given in point order.
    pub fn new(positions: Vec<Vec3>) -> Self {
        Self { positions }
    }

    /// Create a frame from `[x, y, z]` triples.
    pub fn from_arrays(positions: &[[f32; 3]]) -> Self {
        positions.iter().copied().map(Vec3::from_array).collect()
    }

    /// Positions in point order.
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Number of positions (equals the owning container's point count).
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// True when the frame holds no positions.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub(crate) fn positions_mut(&mut self) -> &mut [Vec3] {
        &mut self.positions
    }

    pub(crate) fn push(&mut self, position: Vec3) {
        self.positions.push(position);
    }
}

impl From<Vec<Vec3>> for Frame {
    fn from(positions: Vec<Vec3>) -> Self {
        Self::new(positions)
    }
}

impl FromIterator<Vec3> for Frame {
    fn from_iter<I: IntoIterator<Item = Vec3>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Frame(#positions={})", self.positions.len())
    }
}
