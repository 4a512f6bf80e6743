//! Errors raised while loading STL data

use std::path::PathBuf;

/// Result type for STL loading.
pub type StlResult<T> = Result<T, StlError>;

/// Everything that can go wrong between a path and a populated [`StlMesh`](crate::StlMesh).
///
/// [`StlError::Open`] is the only recoverable kind: nothing was read yet, so
/// [`StlMesh::open_or_invalid`](crate::StlMesh::open_or_invalid) turns it into
/// an invalid mesh. Every other variant means the byte source lied about its
/// contents and no mesh is produced at all.
#[derive(Debug, thiserror::Error)]
pub enum StlError {
    /// (Open) The file could not be opened for reading
    #[error("cannot open file `{}`: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// (TruncatedHeader) The source ended inside the 80-byte header or the triangle count
    #[error("STL header is truncated: expected {expected} bytes, got {got}", expected = crate::io::stl::PREAMBLE_SIZE)]
    TruncatedHeader { got: usize },
    /// (Truncated) The source ended before every declared triangle was read
    #[error("STL body is truncated: header declares {expected} triangles, only {read} are complete")]
    Truncated { expected: u32, read: u32 },
    /// Any other I/O failure while reading
    #[error("I/O error while reading STL data: {0}")]
    Io(#[from] std::io::Error),
}

impl StlError {
    /// `true` when the byte source could not be opened at all.
    pub const fn is_open_failure(&self) -> bool {
        matches!(self, StlError::Open { .. })
    }
}
