//! The British National Grid: A transverse Mercator projection of the
//! Airy 1830 ellipsoid, here inverted following the
//! [Ordnance Survey guide](crate::Bibliography::Os20), Annex C.
pub mod redfearn;

use crate::ellipsoid::{Ellipsoid, AIRY_1830};
use crate::Error;
use log::{debug, error, trace};
use redfearn::RedfearnTerms;

/// Scale factor on the central meridian
pub const SCALE_FACTOR: f64 = 0.999_601_271_7;
/// Latitude of the true origin, in degrees
pub const ORIGIN_LATITUDE: f64 = 49.;
/// Longitude of the true origin, in degrees
pub const ORIGIN_LONGITUDE: f64 = -2.;
/// Northing of the true origin, in metres
pub const FALSE_NORTHING: f64 = -100_000.;
/// Easting of the true origin, in metres
pub const FALSE_EASTING: f64 = 400_000.;

/// The footpoint iteration stops when the meridional arc residual
/// drops below this value in magnitude (metres, i.e. 0.01 mm).
pub const TOLERANCE: f64 = 1e-5;

/// Default cap on the number of footpoint iterations. Grid coordinates
/// covering Great Britain need at most 4.
pub const MAX_ITERATIONS: usize = 100;

/// The result of the footpoint latitude iteration
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Footpoint {
    /// Latitude at which the meridional arc from the true origin
    /// matches the northing, in radians
    pub latitude: f64,
    /// Number of iterations spent getting there
    pub iterations: usize,
}

/// The National Grid projection, with the derived ellipsoidal
/// quantities precomputed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NationalGrid {
    ellps: Ellipsoid,
    k_0: f64,
    lat_0: f64,
    lon_0: f64,
    x_0: f64,
    y_0: f64,
    arc: [f64; 4],
    max_iterations: usize,
}

impl Default for NationalGrid {
    fn default() -> NationalGrid {
        NationalGrid::new()
    }
}

impl NationalGrid {
    #[must_use]
    pub fn new() -> NationalGrid {
        let ellps = AIRY_1830;
        let arc = ellps.meridional_arc_factors();
        debug!(
            "National Grid: e² = {}, n = {}, arc factors = {:?}",
            ellps.eccentricity_squared(),
            ellps.third_flattening(),
            arc
        );

        NationalGrid {
            ellps,
            k_0: SCALE_FACTOR,
            lat_0: ORIGIN_LATITUDE.to_radians(),
            lon_0: ORIGIN_LONGITUDE.to_radians(),
            x_0: FALSE_EASTING,
            y_0: FALSE_NORTHING,
            arc,
            max_iterations: MAX_ITERATIONS,
        }
    }

    /// The same projection, but giving up on the footpoint
    /// iteration after `max_iterations` steps.
    #[must_use]
    pub fn with_max_iterations(self, max_iterations: usize) -> NationalGrid {
        NationalGrid {
            max_iterations,
            ..self
        }
    }

    #[must_use]
    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    #[must_use]
    pub fn ellipsoid(&self) -> Ellipsoid {
        self.ellps
    }

    /// Scaled meridional arc from the true origin to `latitude` (radians)
    #[must_use]
    pub fn meridional_arc(&self, latitude: f64) -> f64 {
        self.k_0 * self.ellps.meridional_arc(latitude, self.lat_0, &self.arc)
    }

    /// The footpoint latitude of `northing`, by fixed point iteration
    /// starting at the latitude of the true origin.
    ///
    /// The iteration stops when the absolute residual is below [`TOLERANCE`],
    /// so overshooting steps (north of the latitude where the meridian radius
    /// exceeds the semimajor axis) and northings south of the true origin are
    /// corrected as well. A non-finite northing gives a `NaN` latitude.
    pub fn footpoint_latitude(&self, northing: f64) -> Result<Footpoint, Error> {
        if !northing.is_finite() {
            trace!("footpoint: non-finite northing {northing}");
            return Ok(Footpoint {
                latitude: f64::NAN,
                iterations: 0,
            });
        }

        let scaled_a = self.ellps.semimajor_axis() * self.k_0;
        let mut lat = self.lat_0;
        let mut m = 0.;
        let mut iterations = 0;

        while (northing - self.y_0 - m).abs() >= TOLERANCE {
            if iterations == self.max_iterations {
                let residual = northing - self.y_0 - m;
                error!("footpoint: no convergence for northing {northing} (residual {residual} m)");
                return Err(Error::NoConvergence {
                    northing,
                    iterations,
                    residual,
                });
            }
            lat += (northing - self.y_0 - m) / scaled_a;
            m = self.meridional_arc(lat);
            iterations += 1;
            trace!(
                "footpoint: iteration {iterations}, lat = {lat}, residual = {}",
                northing - self.y_0 - m
            );
        }

        Ok(Footpoint {
            latitude: lat,
            iterations,
        })
    }

    /// Grid `(northing, easting)` in metres to `(latitude, longitude)` in degrees
    pub fn to_geographic(&self, northing: f64, easting: f64) -> Result<(f64, f64), Error> {
        let lat = self.footpoint_latitude(northing)?.latitude;

        // Radii of curvature, scaled to the central meridian
        let nu = self.k_0 * self.ellps.prime_vertical_radius_of_curvature(lat);
        let rho = self.k_0 * self.ellps.meridian_radius_of_curvature(lat);
        let terms = RedfearnTerms::new(lat, nu, rho);

        let de = easting - self.x_0;
        let lat = lat + terms.latitude_offset(de);
        let lon = self.lon_0 + terms.longitude_offset(de);
        Ok((lat.to_degrees(), lon.to_degrees()))
    }
}

// ----- Tests ---------------------------------------------------------------------
