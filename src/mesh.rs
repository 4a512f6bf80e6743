//! `StlMesh`, the in-memory form of a binary STL file.

use crate::errors::{StlError, StlResult};
use crate::float_types::Real;
use crate::io::stl::{BinaryStl, HEADER_SIZE, read_binary_stl};
use crate::plane::Plane;
use crate::segment::Segment;
use crate::slice::slice_at_plane;
use crate::triangle::Triangle;
use std::borrow::Cow;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// A triangle soup loaded from binary STL: the opaque 80-byte header plus every
/// facet in file order.
///
/// A mesh is populated once, by reading, and never changes afterwards. It is
/// deliberately not `Clone`: triangle lists get large, so hand it around by
/// reference or move it.
#[derive(Debug)]
pub struct StlMesh {
    header: [u8; HEADER_SIZE],
    triangles: Vec<Triangle>,
    valid: bool,
}

impl Default for StlMesh {
    /// An invalid, empty mesh. This is what a failed open looks like under
    /// [`StlMesh::open_or_invalid`].
    fn default() -> Self {
        StlMesh {
            header: [0; HEADER_SIZE],
            triangles: Vec::new(),
            valid: false,
        }
    }
}

impl From<BinaryStl> for StlMesh {
    fn from(stl: BinaryStl) -> Self {
        StlMesh {
            header: stl.header,
            triangles: stl.triangles,
            valid: true,
        }
    }
}

impl StlMesh {
    /// Read the binary STL at `path`.
    ///
    /// # Errors
    /// [`StlError::Open`] if the file cannot be opened, otherwise whatever
    /// [`read_binary_stl`] reports. A truncated body never yields a mesh.
    ///
    /// ```no_run
    /// # use stlslice::StlMesh;
    /// let mesh = StlMesh::open("scan.stl")?;
    /// println!("{} triangles", mesh.len());
    /// # Ok::<(), stlslice::errors::StlError>(())
    /// ```
    pub fn open<P: AsRef<Path>>(path: P) -> StlResult<StlMesh> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| StlError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        StlMesh::from_reader(BufReader::new(file))
    }

    /// Like [`StlMesh::open`], but a file that cannot be opened is not an error:
    /// it is logged and an invalid, empty mesh is returned instead. Check
    /// [`StlMesh::is_valid`] before using the result.
    ///
    /// # Errors
    /// Anything past opening, such as a truncated body, is still an error.
    pub fn open_or_invalid<P: AsRef<Path>>(path: P) -> StlResult<StlMesh> {
        match StlMesh::open(path) {
            Err(err) if err.is_open_failure() => {
                log::warn!("{err}");
                Ok(StlMesh::default())
            },
            other => other,
        }
    }

    /// Read a binary STL from any byte source.
    pub fn from_reader<R: Read>(reader: R) -> StlResult<StlMesh> {
        read_binary_stl(reader).map(StlMesh::from)
    }

    /// Read a binary STL held in memory.
    pub fn from_bytes(bytes: &[u8]) -> StlResult<StlMesh> {
        StlMesh::from_reader(bytes)
    }

    /// `true` if this mesh was fully read from a byte source.
    pub const fn is_valid(&self) -> bool {
        self.valid
    }

    /// The 80 header bytes, verbatim.
    pub const fn header(&self) -> &[u8; HEADER_SIZE] {
        &self.header
    }

    /// The header shown as text, by convention only: invalid UTF-8 is replaced and
    /// trailing NUL padding and whitespace are dropped.
    pub fn header_text(&self) -> Cow<'_, str> {
        let end = self
            .header
            .iter()
            .rposition(|&b| b != 0 && !b.is_ascii_whitespace())
            .map_or(0, |i| i + 1);
        String::from_utf8_lossy(&self.header[..end])
    }

    /// Triangles in file order.
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Triangle> {
        self.triangles.iter()
    }

    pub const fn len(&self) -> usize {
        self.triangles.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Give up the header and keep only the triangles.
    pub fn into_triangles(self) -> Vec<Triangle> {
        self.triangles
    }

    /// Cross-section of this mesh with `plane`. See [`slice_at_plane`].
    pub fn slice(&self, plane: &Plane) -> Vec<Segment> {
        slice_at_plane(&self.triangles, plane)
    }

    /// Cross-section at height `z`, the usual floor-plan cut.
    pub fn slice_at_z(&self, z: Real) -> Vec<Segment> {
        self.slice(&Plane::z(z))
    }
}

impl<'a> IntoIterator for &'a StlMesh {
    type Item = &'a Triangle;
    type IntoIter = std::slice::Iter<'a, Triangle>;

    fn into_iter(self) -> Self::IntoIter {
        self.triangles.iter()
    }
}

impl IntoIterator for StlMesh {
    type Item = Triangle;
    type IntoIter = std::vec::IntoIter<Triangle>;

    fn into_iter(self) -> Self::IntoIter {
        self.triangles.into_iter()
    }
}
