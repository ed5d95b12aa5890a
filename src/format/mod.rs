//! Binary codec for `.3cpf` (3D Colored Point Frames) files.
//!
//! # File Format
//!
//! All integers and floats are little-endian.
//!
//! ```text
//! Header (20 bytes):
//!   Magic: "3CPF" (4 bytes)
//!   Version: u32
//!   Checksum: u32 (CRC-32 of the payload)
//!   Point count: u32
//!   Frame count: u32
//!
//! Payload:
//!   Point colors (point_count * 3 bytes):
//!     r, g, b: u8 per point, in point order
//!   Frame positions (frame_count * point_count * 12 bytes):
//!     x, y, z: f32 per point, in point order, frame after frame
//! ```
//!
//! There is no padding, alignment or compression.

mod coordinate_order;
mod header;
mod reader;
mod writer;

pub use coordinate_order::CoordinateOrder;
pub use header::{FORMAT_MAGIC, FORMAT_VERSION, FileHeader};
pub use reader::{decode, load, load_from_bytes, load_with_order, read_from};
