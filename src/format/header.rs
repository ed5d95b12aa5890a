//! Fixed-size file header.

use std::io::{self, Read, Write};

/// Magic bytes identifying a 3CPF file.
pub const FORMAT_MAGIC: &[u8; 4] = b"3CPF";

/// Current (and only) format version.
pub const FORMAT_VERSION: u32 = 1;

/// Header fields following the magic bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileHeader {
    /// Format version.
    pub version: u32,
    /// CRC-32 of the payload.
    pub checksum: u32,
    /// Number of points.
    pub point_count: u32,
    /// Number of frames.
    pub frame_count: u32,
}

impl FileHeader {
    /// Size of header in bytes, magic included.
    /// Magic(4) + Version(4) + Checksum(4) + PointCount(4) + FrameCount(4) = 20
    pub const SIZE: usize = 20;

    /// Byte offset of the checksum field from the start of the file.
    pub const CHECKSUM_OFFSET: usize = 8;

    /// Size of one encoded point color.
    pub const COLOR_SIZE: usize = 3;

    /// Size of one encoded position (three f32).
    pub const POSITION_SIZE: usize = 12;

    /// Payload length implied by the point and frame counts, or `None` when
    /// the counts describe more bytes than fit in a `u64`.
    pub fn payload_size(&self) -> Option<u64> {
        let points = u64::from(self.point_count);
        let frames = u64::from(self.frame_count);
        let colors = points.checked_mul(Self::COLOR_SIZE as u64)?;
        let positions = frames
            .checked_mul(points)?
            .checked_mul(Self::POSITION_SIZE as u64)?;
        colors.checked_add(positions)
    }

    /// Write magic and header fields.
    pub fn write_to<W: Write>(&self, w: &mut W) -> io::Result<()> {
        w.write_all(FORMAT_MAGIC)?;
        w.write_all(&self.version.to_le_bytes())?;
        w.write_all(&self.checksum.to_le_bytes())?;
        w.write_all(&self.point_count.to_le_bytes())?;
        w.write_all(&self.frame_count.to_le_bytes())?;
        Ok(())
    }

    /// Read the four header fields that follow the magic bytes.
    ///
    /// The magic itself is checked by the caller so that a wrong magic can be
    /// reported separately from a truncated header.
    pub fn read_fields<R: Read>(r: &mut R) -> io::Result<Self> {
        let mut buf4 = [0u8; 4];

        r.read_exact(&mut buf4)?;
        let version = u32::from_le_bytes(buf4);

        r.read_exact(&mut buf4)?;
        let checksum = u32::from_le_bytes(buf4);

        r.read_exact(&mut buf4)?;
        let point_count = u32::from_le_bytes(buf4);

        r.read_exact(&mut buf4)?;
        let frame_count = u32::from_le_bytes(buf4);

        Ok(Self {
            version,
            checksum,
            point_count,
            frame_count,
        })
    }
}
