//! Redfearn's series for the inverse transverse Mercator, i.e. the terms
//! VII through XIIA of the [OS guide](crate::Bibliography::Os20), eq. (C7)-(C8),
//! originally from [Redfearn (1948)](crate::Bibliography::Red48).

/// The coefficients of the latitude and longitude series in powers of the
/// easting offset, for a given footpoint latitude.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RedfearnTerms {
    pub vii: f64,
    pub viii: f64,
    pub ix: f64,
    pub x: f64,
    pub xi: f64,
    pub xii: f64,
    pub xiia: f64,
}

impl RedfearnTerms {
    /// Compute the terms at the footpoint `latitude` (radians), given the
    /// scaled radii of curvature in the prime vertical, `nu`, and along
    /// the meridian, `rho`, at that latitude.
    #[must_use]
    pub fn new(latitude: f64, nu: f64, rho: f64) -> RedfearnTerms {
        let eta2 = nu / rho - 1.;

        let tan = latitude.tan();
        let tan2 = tan * tan;
        let tan4 = tan2 * tan2;
        let tan6 = tan4 * tan2;
        let sec = 1. / latitude.cos();

        let nu3 = nu * nu * nu;
        let nu5 = nu3 * nu * nu;
        let nu7 = nu5 * nu * nu;

        RedfearnTerms {
            vii: tan / (2. * rho * nu),
            viii: tan / (24. * rho * nu3) * (5. + 3. * tan2 + eta2 - 9. * tan2 * eta2),
            ix: tan / (720. * rho * nu5) * (61. + 90. * tan2 + 45. * tan4),
            x: sec / nu,
            xi: sec / (6. * nu3) * (nu / rho + 2. * tan2),
            xii: sec / (120. * nu5) * (5. + 28. * tan2 + 24. * tan4),
            xiia: sec / (5040. * nu7) * (61. + 662. * tan2 + 1320. * tan4 + 720. * tan6),
        }
    }

    /// Correction to the footpoint latitude, in radians, at the easting offset `de` (metres)
    #[must_use]
    pub fn latitude_offset(&self, de: f64) -> f64 {
        let de2 = de * de;
        let de4 = de2 * de2;
        let de6 = de4 * de2;
        -self.vii * de2 + self.viii * de4 - self.ix * de6
    }

    /// Longitude relative to the central meridian, in radians, at the easting offset `de` (metres)
    #[must_use]
    pub fn longitude_offset(&self, de: f64) -> f64 {
        let de2 = de * de;
        let de3 = de2 * de;
        let de5 = de3 * de2;
        let de7 = de5 * de2;
        self.x * de - self.xi * de3 + self.xii * de5 - self.xiia * de7
    }
}

// ----- Tests ---------------------------------------------------------------------
