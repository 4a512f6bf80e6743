//! File formats. Only binary STL is read; see [`stl`].

pub mod stl;
