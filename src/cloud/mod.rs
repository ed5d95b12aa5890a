//! In-memory model of an animated point cloud.
//!
//! A [`PointFrames`] owns an ordered list of colored [`Point`]s and an ordered
//! list of [`Frame`]s. Frame `f` holds the position of every point at time step
//! `f`, so the position of point `p` in frame `f` is
//! `frames[f].positions()[p]`. Every mutation keeps each frame's position count
//! equal to the point count.

mod frame;
mod point;
mod point_frames;
mod transform;

pub use frame::*;
pub use point::*;
pub use point_frames::*;
pub use transform::rotation_matrix;
