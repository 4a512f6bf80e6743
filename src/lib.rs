//! Load **binary STL** triangle soups and cut them with planes.
//!
//! [`StlMesh`] reads the fixed binary layout verbatim (80-byte header, `u32` count,
//! 50-byte facets). The [`slice`] functions turn any triangle slice into the ordered
//! [`Segment`]s where a plane `a·x + b·y + c·z + d = 0` crosses it, e.g. a floor-plan
//! cut of a 3D scan:
//!
//! ```no_run
//! use stlslice::{StlMesh, slice_at_z};
//!
//! let mesh = StlMesh::open("scan.stl")?;
//! let floor_plan = slice_at_z(mesh.triangles(), 0.3);
//! # Ok::<(), stlslice::errors::StlError>(())
//! ```
//!
//! Coordinates stay `f32`, the precision STL stores.
//!
//! # Features
//! #### Default
//! - [**stl-io**](https://crates.io/crates/stl_io): conversions between [`Triangle`] and `stl_io::Triangle`
//! - [**geo-io**](https://crates.io/crates/geo): project slices onto an axis plane as `geo` lines, see [`contour`]

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod errors;
pub mod float_types;
pub mod io;
pub mod mesh;
pub mod plane;
pub mod point;
pub mod segment;
pub mod slice;
pub mod triangle;

#[cfg(feature = "geo-io")]
pub mod contour;

pub use errors::{StlError, StlResult};
pub use mesh::StlMesh;
pub use plane::{Axis, Plane};
pub use point::Point;
pub use segment::Segment;
pub use slice::{slice_at, slice_at_axis, slice_at_plane, slice_at_x, slice_at_y, slice_at_z};
pub use triangle::Triangle;
