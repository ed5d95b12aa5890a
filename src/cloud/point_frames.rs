//! The point/frame container and its structural invariant.

use std::fmt;

use glam::Vec3;

use super::{Frame, Point};
use crate::error::{Error, Result};

/// An animated point cloud: ordered points times ordered frames.
///
/// Every frame always holds exactly one position per point. Points can be
/// added after frames exist as long as a position is supplied for each
/// existing frame; frames can only be added once at least one point exists.
///
/// ```
/// use cpf3d::{Frame, Point, PointFrames};
/// use glam::Vec3;
///
/// let mut pf = PointFrames::new();
/// pf.add_point(Point::new(255, 0, 0), None)?;
/// pf.add_frame(Frame::from_arrays(&[[1.0, 2.0, 3.0]]))?;
/// pf.add_frame(Frame::from_arrays(&[[4.0, 5.0, 6.0]]))?;
///
/// // A later point needs one position per existing frame.
/// pf.add_point(Point::new(0, 255, 0), Some(&[Vec3::ZERO, Vec3::ONE]))?;
/// assert_eq!(pf.get_position(1, 1)?, Vec3::ONE);
/// # Ok::<(), cpf3d::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PointFrames {
    points: Vec<Point>,
    frames: Vec<Frame>,
}

impl PointFrames {
    /// Create an empty container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assemble a container from parts that already satisfy the invariant.
    pub(crate) fn from_parts(points: Vec<Point>, frames: Vec<Frame>) -> Self {
        debug_assert!(frames.iter().all(|f| f.len() == points.len()));
        Self { points, frames }
    }

    /// Append a point.
    ///
    /// When frames already exist, `positions` must hold exactly one position
    /// per frame (in frame order); each is appended to its frame. When there
    /// are no frames yet, `positions` is ignored.
    pub fn add_point(&mut self, point: Point, positions: Option<&[Vec3]>) -> Result<()> {
        if self.frames.is_empty() {
            self.points.push(point);
            return Ok(());
        }

        let positions = match positions {
            Some(positions) if positions.len() == self.frames.len() => positions,
            Some(positions) => {
                return Err(Error::invalid_argument(format!(
                    "new point needs one position per existing frame: got {}, expected {}",
                    positions.len(),
                    self.frames.len()
                )));
            }
            None => {
                return Err(Error::invalid_argument(format!(
                    "new point needs a positions array when {} frames already exist",
                    self.frames.len()
                )));
            }
        };

        self.points.push(point);
        for (frame, &position) in self.frames.iter_mut().zip(positions) {
            frame.push(position);
        }
        Ok(())
    }

    /// Append a frame holding one position per existing point.
    pub fn add_frame(&mut self, frame: Frame) -> Result<()> {
        if self.points.is_empty() {
            return Err(Error::InvalidState(
                "cannot add frames to a container with no points".into(),
            ));
        }
        if frame.len() != self.points.len() {
            return Err(Error::invalid_argument(format!(
                "frame must contain 1 position for each point: got {}, expected {}",
                frame.len(),
                self.points.len()
            )));
        }
        self.frames.push(frame);
        Ok(())
    }

    /// Position of `point_index` in `frame_index`.
    pub fn get_position(&self, point_index: usize, frame_index: usize) -> Result<Vec3> {
        let positions = self.get_positions(frame_index)?;
        positions
            .get(point_index)
            .copied()
            .ok_or(Error::IndexOutOfRange {
                axis: "point",
                index: point_index,
                len: positions.len(),
            })
    }

    /// All positions of `frame_index`, in point order.
    pub fn get_positions(&self, frame_index: usize) -> Result<&[Vec3]> {
        self.frames
            .get(frame_index)
            .map(Frame::positions)
            .ok_or(Error::IndexOutOfRange {
                axis: "frame",
                index: frame_index,
                len: self.frames.len(),
            })
    }

    /// Points in order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Frames in order.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Number of points.
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Number of frames.
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// True when the container holds no points (and therefore no frames).
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub(crate) fn frames_mut(&mut self) -> &mut [Frame] {
        &mut self.frames
    }
}

impl fmt::Display for PointFrames {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PointFrames(#points={}, #frames={})",
            self.points.len(),
            self.frames.len()
        )
    }
}
