//! Binary STL decoding.
//!
//! ```text
//! UINT8[80]    – Header (opaque, kept verbatim)
//! UINT32       – Number of triangles
//! foreach triangle
//!     REAL32[3] – Normal vector
//!     REAL32[3] – Vertex 1
//!     REAL32[3] – Vertex 2
//!     REAL32[3] – Vertex 3
//!     UINT16    – Attribute byte count (skipped)
//! end
//! ```
//!
//! All values are little-endian. Reading is binary-exact: every declared triangle
//! is read in full, or the whole read fails.

use crate::errors::{StlError, StlResult};
use crate::point::Point;
use crate::triangle::Triangle;
use std::io::{ErrorKind, Read};

/// Size of the opaque header in bytes.
pub const HEADER_SIZE: usize = 80;

/// Header plus the `u32` triangle count.
pub const PREAMBLE_SIZE: usize = HEADER_SIZE + 4;

/// Size of one triangle record (normal + 3 vertices + attribute).
pub const TRIANGLE_SIZE: usize = 50;

/// Upper bound on triangles reserved up front. The count comes from the file and
/// is not trusted until the records actually arrive.
pub const MAX_PREALLOCATED_TRIANGLES: usize = 1 << 20;

/// Raw contents of a binary STL stream.
#[derive(Debug)]
pub struct BinaryStl {
    pub header: [u8; HEADER_SIZE],
    pub triangles: Vec<Triangle>,
}

/// Decode a binary STL from `reader`.
///
/// # Errors
/// - [`StlError::TruncatedHeader`] if fewer than 84 bytes are available
/// - [`StlError::Truncated`] if the stream ends before the declared triangle count is met
/// - [`StlError::Io`] for any other read failure
pub fn read_binary_stl<R: Read>(mut reader: R) -> StlResult<BinaryStl> {
    let mut preamble = [0u8; PREAMBLE_SIZE];
    let got = read_full(&mut reader, &mut preamble)?;
    if got < PREAMBLE_SIZE {
        return Err(StlError::TruncatedHeader { got });
    }

    let mut header = [0u8; HEADER_SIZE];
    header.copy_from_slice(&preamble[..HEADER_SIZE]);
    let expected = u32::from_le_bytes([
        preamble[HEADER_SIZE],
        preamble[HEADER_SIZE + 1],
        preamble[HEADER_SIZE + 2],
        preamble[HEADER_SIZE + 3],
    ]);

    let mut triangles = Vec::with_capacity((expected as usize).min(MAX_PREALLOCATED_TRIANGLES));
    let mut record = [0u8; TRIANGLE_SIZE];
    for read in 0..expected {
        if read_full(&mut reader, &mut record)? < TRIANGLE_SIZE {
            return Err(StlError::Truncated { expected, read });
        }
        triangles.push(decode_triangle(&record));
    }

    log::debug!("read {expected} triangles from binary STL");
    Ok(BinaryStl { header, triangles })
}

/// Decode one 50-byte record; the trailing attribute bytes are ignored.
pub fn decode_triangle(record: &[u8; TRIANGLE_SIZE]) -> Triangle {
    let block = |i: usize| -> Point {
        let bytes: [u8; 12] = std::array::from_fn(|k| record[i * 12 + k]);
        Point::from_le_bytes(&bytes)
    };
    Triangle::new(block(0), block(1), block(2), block(3))
}

/// Fill `buf` from `reader`, stopping early only at end of stream.
/// Returns how many bytes were written.
fn read_full<R: Read>(reader: &mut R, buf: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
