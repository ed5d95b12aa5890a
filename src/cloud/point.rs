//! Colored point identity.

use std::fmt;

/// A single point of the cloud. Only its color is stored here; its position
/// lives in each [`Frame`](super::Frame) at the point's index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    color: (u8, u8, u8),
}

impl Point {
    /// Create a point with the given RGB color.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { color: (r, g, b) }
    }

    /// RGB color of the point.
    pub const fn color(&self) -> (u8, u8, u8) {
        self.color
    }

    pub(crate) fn to_bytes(self) -> [u8; 3] {
        let (r, g, b) = self.color;
        [r, g, b]
    }
}

impl From<[u8; 3]> for Point {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (r, g, b) = self.color;
        write!(f, "Point(color=({}, {}, {}))", r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_color() {
        let point = Point::new(255, 0, 0);
        assert_eq!(point.color(), (255, 0, 0));
        assert_eq!(Point::from([255, 0, 0]), point);
    }

    #[test]
    fn test_point_display() {
        assert_eq!(Point::new(255, 0, 0).to_string(), "Point(color=(255, 0, 0))");
    }
}
