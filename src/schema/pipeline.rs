//! Configuration types for load-and-transform pipelines.

use serde::{Deserialize, Serialize};

use crate::cloud::PointFrames;
use crate::format::CoordinateOrder;

/// A coordinate order for loading plus transforms applied in sequence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pipeline {
    /// How stored axes map onto x, y, z when loading.
    #[serde(default)]
    pub coordinate_order: CoordinateOrder,
    /// Transforms applied in order after loading.
    #[serde(default)]
    pub transforms: Vec<Transform>,
}

/// One geometric transform over every frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Transform {
    /// Translate by (x, y, z).
    Offset { x: f32, y: f32, z: f32 },
    /// Rotate by x, then y, then z degrees.
    Rotation { x: f32, y: f32, z: f32 },
    /// Scale each axis.
    Scale { x: f32, y: f32, z: f32 },
}

impl Transform {
    fn components(&self) -> [f32; 3] {
        match *self {
            Transform::Offset { x, y, z }
            | Transform::Rotation { x, y, z }
            | Transform::Scale { x, y, z } => [x, y, z],
        }
    }
}

impl Pipeline {
    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (i, transform) in self.transforms.iter().enumerate() {
            if transform.components().iter().any(|v| !v.is_finite()) {
                return Err(ConfigError::NonFiniteParameter { transform: i });
            }
        }
        Ok(())
    }

    /// Apply every transform in order.
    pub fn apply<'a>(&self, pf: &'a mut PointFrames) -> &'a mut PointFrames {
        for transform in &self.transforms {
            pf.apply(transform);
        }
        pf
    }
}

impl PointFrames {
    /// Apply a single pipeline transform.
    pub fn apply(&mut self, transform: &Transform) -> &mut Self {
        match *transform {
            Transform::Offset { x, y, z } => self.apply_offset(x, y, z),
            Transform::Rotation { x, y, z } => self.apply_rotation(x, y, z),
            Transform::Scale { x, y, z } => self.apply_scale(x, y, z),
        }
    }
}

/// Pipeline validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Transform {transform} has a non-finite parameter")]
    NonFiniteParameter { transform: usize },
}
