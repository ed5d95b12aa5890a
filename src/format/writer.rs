//! Encoding a [`PointFrames`] into a 3CPF file.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::debug;

use super::header::{FORMAT_VERSION, FileHeader};
use crate::cloud::PointFrames;
use crate::error::{Error, Result};

/// Encode point colors followed by every frame's positions.
pub(crate) fn encode_payload(pf: &PointFrames) -> Vec<u8> {
    let color_bytes = pf.point_count() * FileHeader::COLOR_SIZE;
    let position_bytes = pf.frame_count() * pf.point_count() * FileHeader::POSITION_SIZE;
    let mut payload = Vec::with_capacity(color_bytes + position_bytes);

    for point in pf.points() {
        payload.extend_from_slice(&point.to_bytes());
    }
    for frame in pf.frames() {
        for position in frame.positions() {
            payload.extend_from_slice(&position.x.to_le_bytes());
            payload.extend_from_slice(&position.y.to_le_bytes());
            payload.extend_from_slice(&position.z.to_le_bytes());
        }
    }
    payload
}

fn count_field(count: usize, what: &str) -> Result<u32> {
    u32::try_from(count).map_err(|_| {
        Error::invalid_argument(format!("{} {} exceeds the u32 header field", what, count))
    })
}

impl PointFrames {
    /// Header describing this container, with the checksum of `payload`.
    fn header_for(&self, payload: &[u8]) -> Result<FileHeader> {
        Ok(FileHeader {
            version: FORMAT_VERSION,
            checksum: crc32fast::hash(payload),
            point_count: count_field(self.point_count(), "point count")?,
            frame_count: count_field(self.frame_count(), "frame count")?,
        })
    }

    /// Encode the complete file image.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let payload = encode_payload(self);
        let header = self.header_for(&payload)?;

        let mut bytes = Vec::with_capacity(FileHeader::SIZE + payload.len());
        header.write_to(&mut bytes)?;
        bytes.extend_from_slice(&payload);
        Ok(bytes)
    }

    /// Write the complete file image to `w`.
    ///
    /// The checksum is computed over the in-memory payload before anything is
    /// written, so the header is written once and never patched.
    pub fn write_to<W: Write>(&self, w: &mut W) -> Result<()> {
        let payload = encode_payload(self);
        let header = self.header_for(&payload)?;

        header.write_to(w)?;
        w.write_all(&payload)?;

        debug!(
            "encoded {} points x {} frames ({} payload bytes, crc {:#010x})",
            header.point_count,
            header.frame_count,
            payload.len(),
            header.checksum
        );
        Ok(())
    }

    /// Save to a file, creating or truncating it.
    ///
    /// The payload and checksum are encoded by [`write_to`](Self::write_to)
    /// before the first byte reaches the file. An I/O error while writing may
    /// still leave a partially written file behind.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);
        self.write_to(&mut writer)?;
        writer.flush()?;

        debug!("saved {} ({})", path.display(), self);
        Ok(())
    }
}
