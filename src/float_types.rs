// STL stores every coordinate as an IEEE-754 single; keep that precision end to end.
pub type Real = f32;

use std::sync::OnceLock;

/// Lazily-initialized tolerance used by the `approx` comparisons of this crate.
/// Slicing itself is exact and never consults it.
/// Override with [`set_tolerance`] once before the first comparison.
static TOLERANCE_CELL: OnceLock<Real> = OnceLock::new();

#[inline]
const fn default_tolerance() -> Real {
    1e-5
}

/// Returns the current tolerance.
pub fn tolerance() -> Real {
    *TOLERANCE_CELL.get_or_init(default_tolerance)
}

/// Set the tolerance programmatically once (subsequent calls are ignored).
/// Call near program start: `stlslice::float_types::set_tolerance(1e-4);`
pub fn set_tolerance(value: Real) {
    let _ = TOLERANCE_CELL.set(value.max(Real::EPSILON));
}
