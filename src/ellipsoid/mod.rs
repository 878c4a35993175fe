mod meridians;

pub use meridians::MERIDIONAL_ARC_COEFFICIENTS;

/// Representation of a biaxial ellipsoid, by its semimajor and semiminor axes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipsoid {
    a: f64,
    b: f64,
}

/// The Airy 1830 ellipsoid, underlying the OSGB36 datum
pub const AIRY_1830: Ellipsoid = Ellipsoid::new(6_377_563.396, 6_356_256.909);

/// Airy 1830 is the default ellipsoid.
impl Default for Ellipsoid {
    fn default() -> Ellipsoid {
        AIRY_1830
    }
}

impl Ellipsoid {
    /// User defined ellipsoid
    #[must_use]
    pub const fn new(semimajor_axis: f64, semiminor_axis: f64) -> Ellipsoid {
        Ellipsoid {
            a: semimajor_axis,
            b: semiminor_axis,
        }
    }

    /// The semimajor axis, *a*
    #[must_use]
    pub fn semimajor_axis(&self) -> f64 {
        self.a
    }

    /// The semiminor axis, *b*
    #[must_use]
    pub fn semiminor_axis(&self) -> f64 {
        self.b
    }

    // ----- Eccentricities --------------------------------------------------------

    /// The squared eccentricity *e² = (a² - b²) / a²*.
    #[must_use]
    pub fn eccentricity_squared(&self) -> f64 {
        1.0 - (self.b * self.b) / (self.a * self.a)
    }

    /// The eccentricity *e*
    #[must_use]
    pub fn eccentricity(&self) -> f64 {
        self.eccentricity_squared().sqrt()
    }

    // ----- Flattenings -----------------------------------------------------------

    /// The flattening, *f = (a - b)/a*
    #[must_use]
    pub fn flattening(&self) -> f64 {
        (self.a - self.b) / self.a
    }

    /// The third flattening, *n = (a - b) / (a + b)*
    #[must_use]
    pub fn third_flattening(&self) -> f64 {
        (self.a - self.b) / (self.a + self.b)
    }

    // ----- Curvatures ------------------------------------------------------------

    /// The radius of curvature in the prime vertical, *N* (the OS guide's *ν*)
    #[must_use]
    pub fn prime_vertical_radius_of_curvature(&self, latitude: f64) -> f64 {
        let es = self.eccentricity_squared();
        self.a / (1.0 - es * latitude.sin().powi(2)).sqrt()
    }

    /// The meridian radius of curvature, *M* (the OS guide's *ρ*)
    #[must_use]
    pub fn meridian_radius_of_curvature(&self, latitude: f64) -> f64 {
        let es = self.eccentricity_squared();
        let num = self.a * (1.0 - es);
        let denom = (1.0 - es * latitude.sin().powi(2)).powf(1.5);
        num / denom
    }
}

// ----- Tests ---------------------------------------------------------------------
