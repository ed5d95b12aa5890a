//! Decoding 3CPF bytes into a [`PointFrames`].

use std::fs;
use std::io::{Cursor, Read};
use std::path::Path;

use log::{debug, warn};

use super::coordinate_order::CoordinateOrder;
use super::header::{FORMAT_MAGIC, FORMAT_VERSION, FileHeader};
use crate::cloud::{Frame, Point, PointFrames};
use crate::error::{Error, Result};

/// Decode a complete 3CPF file image.
///
/// Checks, in order: magic bytes, header, version, payload checksum and
/// payload length. Positions are permuted through `order` as they are read.
pub fn decode(bytes: &[u8], order: CoordinateOrder) -> Result<PointFrames> {
    if bytes.len() < FORMAT_MAGIC.len() || &bytes[..FORMAT_MAGIC.len()] != FORMAT_MAGIC {
        return Err(Error::invalid_format("missing 3CPF magic bytes"));
    }

    let mut cursor = Cursor::new(&bytes[FORMAT_MAGIC.len()..]);
    let header = FileHeader::read_fields(&mut cursor)?;
    if header.version != FORMAT_VERSION {
        return Err(Error::UnsupportedVersion(header.version));
    }

    let payload = &bytes[FileHeader::SIZE..];
    let actual = crc32fast::hash(payload);
    if actual != header.checksum {
        return Err(Error::DataCorruption {
            expected: header.checksum,
            actual,
        });
    }

    let expected_len = header.payload_size().ok_or_else(|| {
        Error::invalid_format(format!(
            "{} points x {} frames exceed the addressable payload size",
            header.point_count, header.frame_count
        ))
    })?;
    if (payload.len() as u64) < expected_len {
        return Err(Error::invalid_format(format!(
            "payload holds {} bytes but {} points x {} frames need {}",
            payload.len(),
            header.point_count,
            header.frame_count,
            expected_len
        )));
    }
    if payload.len() as u64 > expected_len {
        warn!(
            "ignoring {} trailing payload bytes",
            payload.len() as u64 - expected_len
        );
    }

    // Frames can only exist once points do.
    if header.point_count == 0 && header.frame_count > 0 {
        return Err(Error::invalid_format(format!(
            "{} frames declared without any points",
            header.frame_count
        )));
    }

    let point_count = header.point_count as usize;
    let frame_count = header.frame_count as usize;
    let (colors, positions) = payload.split_at(point_count * FileHeader::COLOR_SIZE);

    let points = colors
        .chunks_exact(FileHeader::COLOR_SIZE)
        .map(|c| Point::new(c[0], c[1], c[2]))
        .collect();

    let mut frames = Vec::with_capacity(frame_count);
    if frame_count > 0 {
        let frame_size = point_count * FileHeader::POSITION_SIZE;
        for chunk in positions.chunks_exact(frame_size).take(frame_count) {
            frames.push(decode_frame(chunk, order));
        }
    }

    let pf = PointFrames::from_parts(points, frames);
    debug!("decoded {} with coordinate order {}", pf, order);
    Ok(pf)
}

fn decode_frame(bytes: &[u8], order: CoordinateOrder) -> Frame {
    bytes
        .chunks_exact(FileHeader::POSITION_SIZE)
        .map(|b| {
            let stored = [
                f32::from_le_bytes([b[0], b[1], b[2], b[3]]),
                f32::from_le_bytes([b[4], b[5], b[6], b[7]]),
                f32::from_le_bytes([b[8], b[9], b[10], b[11]]),
            ];
            order.reorder(stored)
        })
        .collect()
}

/// Decode bytes, parsing `coordinate_order` (e.g. `"xyz"`, `"zyx"`) first.
pub fn load_from_bytes(bytes: &[u8], coordinate_order: &str) -> Result<PointFrames> {
    let order = coordinate_order.parse()?;
    decode(bytes, order)
}

/// Read a whole 3CPF stream and decode it.
pub fn read_from<R: Read>(r: &mut R, order: CoordinateOrder) -> Result<PointFrames> {
    let mut bytes = Vec::new();
    r.read_to_end(&mut bytes)?;
    decode(&bytes, order)
}

/// Load a 3CPF file, interpreting stored axes through `coordinate_order`.
///
/// ```no_run
/// let pf = cpf3d::load("animation.3cpf", "xzy")?;
/// println!("{}", pf);
/// # Ok::<(), cpf3d::Error>(())
/// ```
pub fn load<P: AsRef<Path>>(path: P, coordinate_order: &str) -> Result<PointFrames> {
    let order = coordinate_order.parse()?;
    load_with_order(path, order)
}

/// Load a 3CPF file with an already parsed coordinate order.
pub fn load_with_order<P: AsRef<Path>>(path: P, order: CoordinateOrder) -> Result<PointFrames> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    debug!("read {} ({} bytes)", path.display(), bytes.len());
    decode(&bytes, order)
}

impl PointFrames {
    /// Load a 3CPF file using the default `xyz` coordinate order.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        load_with_order(path, CoordinateOrder::default())
    }
}
