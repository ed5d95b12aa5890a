//! Axis permutation applied to stored positions on load.

use std::fmt;
use std::str::FromStr;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// How the three floats stored per position map onto semantic x, y and z.
///
/// The order is written as a permutation of the letters `x`, `y`, `z`: the
/// letter at index `i` names the semantic axis stored at file slot `i`. With
/// `"zyx"`, a stored triple `(a, b, c)` loads as `x = c, y = b, z = a`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CoordinateOrder {
    /// Lowercase axis letters, one per file slot.
    axes: [u8; 3],
    /// File slot holding semantic x, y and z respectively.
    source: [usize; 3],
}

impl CoordinateOrder {
    /// Identity order: file slots are x, y, z.
    pub const XYZ: Self = Self {
        axes: *b"xyz",
        source: [0, 1, 2],
    };

    /// File slot that holds the given semantic axis (0 = x, 1 = y, 2 = z).
    pub(crate) fn source_index(&self, axis: usize) -> usize {
        self.source[axis]
    }

    /// Map a stored triple onto semantic (x, y, z).
    #[inline]
    pub fn reorder(&self, stored: [f32; 3]) -> Vec3 {
        Vec3::new(
            stored[self.source[0]],
            stored[self.source[1]],
            stored[self.source[2]],
        )
    }

    /// True for the `xyz` order, which leaves stored triples unchanged.
    pub fn is_identity(&self) -> bool {
        *self == Self::XYZ
    }
}

impl Default for CoordinateOrder {
    fn default() -> Self {
        Self::XYZ
    }
}

impl FromStr for CoordinateOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || {
            Error::invalid_argument(format!(
                "coordinate order must be a 3-letter string containing 'x', 'y' and 'z', got {:?}",
                s
            ))
        };

        let lower = s.to_ascii_lowercase();
        let axes: [u8; 3] = lower.as_bytes().try_into().map_err(|_| invalid())?;

        let mut source = [usize::MAX; 3];
        for (slot, letter) in axes.iter().enumerate() {
            let axis = match letter {
                b'x' => 0,
                b'y' => 1,
                b'z' => 2,
                _ => return Err(invalid()),
            };
            if source[axis] != usize::MAX {
                return Err(invalid());
            }
            source[axis] = slot;
        }

        Ok(Self { axes, source })
    }
}

impl TryFrom<String> for CoordinateOrder {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CoordinateOrder> for String {
    fn from(order: CoordinateOrder) -> Self {
        order.to_string()
    }
}

impl fmt::Display for CoordinateOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &axis in &self.axes {
            write!(f, "{}", axis as char)?;
        }
        Ok(())
    }
}
