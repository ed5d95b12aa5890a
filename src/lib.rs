//! cpf3d - Reading, writing and transforming 3CPF animated point clouds.
//!
//! A 3CPF file stores a fixed set of colored points together with the
//! position of every point at every frame of an animation. Each payload is
//! protected by a CRC-32 checksum.
//!
//! # Architecture
//!
//! - `cloud`: The in-memory model ([`Point`], [`Frame`], [`PointFrames`]) and
//!   its geometric transforms
//! - `format`: The binary codec (header, checksum, payload layout)
//! - `schema`: Serde configuration for load-and-transform pipelines
//!
//! # Example
//!
//! ```rust,no_run
//! use cpf3d::{Frame, Point, PointFrames};
//!
//! let mut pf = PointFrames::new();
//! pf.add_point(Point::new(255, 0, 0), None)?;
//! pf.add_frame(Frame::from_arrays(&[[1.0, 2.0, 3.0]]))?;
//!
//! pf.apply_rotation(0.0, 90.0, 0.0).apply_scale(2.0, 2.0, 2.0);
//! pf.save("red_point.3cpf")?;
//!
//! // Reinterpret a file authored with z-up axes.
//! let loaded = cpf3d::load("red_point.3cpf", "xzy")?;
//! println!("{}", loaded);
//! # Ok::<(), cpf3d::Error>(())
//! ```

pub mod cloud;
pub mod error;
pub mod format;
pub mod schema;

// Re-export commonly used types
pub use cloud::{Frame, Point, PointFrames};
pub use error::{Error, Result};
pub use format::{CoordinateOrder, decode, load, load_from_bytes, load_with_order};
pub use schema::{Pipeline, Transform};
