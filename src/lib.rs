//! *Conversion from British National Grid coordinates to latitude and longitude
//! on the OSGB36 datum*.
//!
//! The National Grid is a transverse Mercator projection of the Airy 1830
//! ellipsoid, with its true origin at 49°N 2°W. Going from grid to geographic
//! coordinates is done in two steps: An iterative solve for the *footpoint
//! latitude*, i.e. the latitude at which the meridional arc from the true
//! origin matches the northing, followed by
//! [Redfearn's](crate::Bibliography::Red48) series in powers of the easting
//! offset, as given in the [Ordnance Survey guide](crate::Bibliography::Os20).
//!
//! ```
//! # fn main() -> Result<(), natgrid::Error> {
//! // The worked example from the Ordnance Survey guide
//! let (lat, lon) = natgrid::grid_to_geographic(313_177.270, 651_409.903)?;
//! assert!((lat - 52.657_570).abs() < 1e-6);
//! assert!((lon - 1.717_922).abs() < 1e-6);
//! # Ok(())
//! # }
//! ```
//!
//! The result is OSGB36, not WGS84: Datum transformation is left to the caller.

pub mod ellipsoid;
pub mod grid;
pub mod math;

pub use ellipsoid::Ellipsoid;
pub use ellipsoid::AIRY_1830;
pub use grid::redfearn::RedfearnTerms;
pub use grid::Footpoint;
pub use grid::NationalGrid;

use once_cell::sync::Lazy;
use thiserror::Error;

/// The things most users need
pub mod prelude {
    pub use crate::grid_to_geographic;
    pub use crate::Ellipsoid;
    pub use crate::Error;
    pub use crate::Footpoint;
    pub use crate::NationalGrid;
    pub use crate::AIRY_1830;
}

/// The errors of the grid to geographic conversion
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The footpoint iteration hit its cap without reaching the tolerance
    #[error("footpoint latitude for northing {northing} did not converge in {iterations} iterations (residual {residual} m)")]
    NoConvergence {
        northing: f64,
        iterations: usize,
        residual: f64,
    },
}

// Precomputed once, at first use
static NATIONAL_GRID: Lazy<NationalGrid> = Lazy::new(NationalGrid::new);

/// Convert a National Grid `(northing, easting)`, in metres, to OSGB36
/// `(latitude, longitude)` in decimal degrees.
///
/// Non-finite input leads to non-finite output. The only error is
/// [`Error::NoConvergence`], for input so far outside of the grid that
/// the footpoint latitude cannot be determined.
pub fn grid_to_geographic(northing: f64, easting: f64) -> Result<(f64, f64), Error> {
    NATIONAL_GRID.to_geographic(northing, easting)
}

/// Literature, that has been useful in designing and implementing this library.
pub enum Bibliography {
    /// Ordnance Survey (2020): *A guide to coordinate systems in Great Britain*.
    /// Version 3.6, Annexes B and C.
    /// [pdf](https://www.ordnancesurvey.co.uk/documents/resources/guide-coordinate-systems-great-britain.pdf)
    Os20,

    /// J.C.B. Redfearn (1948): *Transverse Mercator formulae*.
    /// Empire Survey Review, 9(69), pp.318-322,
    /// [DOI](https://doi.org/10.1179/sre.1948.9.69.318)
    Red48,
}

// ----- Tests ---------------------------------------------------------------------
