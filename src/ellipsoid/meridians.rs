use super::*;
use crate::math::taylor::horner;

/// Coefficients of the meridional arc series, one row per term, each row
/// giving the coefficients of *1, n, n², n³*, where *n* is the third
/// flattening. [OS guide](crate::Bibliography::Os20) eq. (C3).
#[rustfmt::skip]
pub const MERIDIONAL_ARC_COEFFICIENTS: [[f64; 4]; 4] = [
    [1., 1.,  5. / 4.,  5. / 4.],
    [0., 3.,  3.,      21. / 8.],
    [0., 0., 15. / 8., 15. / 8.],
    [0., 0.,  0.,      35. / 24.],
];

// ----- Meridian geometry -----------------------------------------------------
impl Ellipsoid {
    /// The four factors of the meridional arc series, evaluated for the third
    /// flattening of this ellipsoid. Worth precomputing, since they are
    /// needed for every step of the footpoint iteration.
    #[must_use]
    pub fn meridional_arc_factors(&self) -> [f64; 4] {
        let n = self.third_flattening();
        MERIDIONAL_ARC_COEFFICIENTS.map(|row| horner(n, &row))
    }

    /// The meridional arc, *M*, from the latitude `origin` to `latitude`,
    /// both in radians. Negative south of `origin`.
    ///
    /// `factors` must come from [`meridional_arc_factors`](Ellipsoid::meridional_arc_factors)
    /// for the same ellipsoid.
    #[must_use]
    pub fn meridional_arc(&self, latitude: f64, origin: f64, factors: &[f64; 4]) -> f64 {
        let dif = latitude - origin;
        let sum = latitude + origin;
        let ma = factors[0] * dif;
        let mb = factors[1] * dif.sin() * sum.cos();
        let mc = factors[2] * (2. * dif).sin() * (2. * sum).cos();
        let md = factors[3] * (3. * dif).sin() * (3. * sum).cos();
        self.b * (ma - mb + mc - md)
    }
}

// ----- Tests ---------------------------------------------------------------------
#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;

    #[test]
    fn rational_coefficients() {
        // These must be true ratios: integer division would give 1, 2, 1, 1
        let c = MERIDIONAL_ARC_COEFFICIENTS;
        assert_eq!(c[0][2], 1.25);
        assert_eq!(c[0][3], 1.25);
        assert_eq!(c[1][3], 2.625);
        assert_eq!(c[2][2], 1.875);
        assert_eq!(c[2][3], 1.875);
        assert_float_eq!(c[3][3], 1.458_333_333_333_333_3, ulps <= 1);
        assert_eq!(c[3][3] * 24., 35.);

        // Powers of n not contributing to a term are zero
        assert_eq!(c[1][0], 0.);
        assert_eq!(c[2][..2], [0., 0.]);
        assert_eq!(c[3][..3], [0., 0., 0.]);
    }

    #[test]
    fn arc_factors() {
        let n = AIRY_1830.third_flattening();
        let f = AIRY_1830.meridional_arc_factors();

        // Compare with the series written out in full
        let n2 = n * n;
        let n3 = n2 * n;
        assert_float_eq!(f[0], 1. + n + 1.25 * n2 + 1.25 * n3, r2nd <= 1e-15);
        assert_float_eq!(f[1], 3. * n + 3. * n2 + 2.625 * n3, r2nd <= 1e-15);
        assert_float_eq!(f[2], 1.875 * n2 + 1.875 * n3, r2nd <= 1e-15);
        assert_float_eq!(f[3], 35. / 24. * n3, r2nd <= 1e-15);

        assert!((f[0] - 1.001_676_725_767_397_3).abs() < 1e-15);
        assert!((f[1] - 5.028_072_282_474_098e-3).abs() < 1e-17);
    }

    #[test]
    fn meridional_arc() {
        let ellps = AIRY_1830;
        let f = ellps.meridional_arc_factors();
        let origin = 49_f64.to_radians();

        // No distance from the origin to itself
        assert_eq!(ellps.meridional_arc(origin, origin, &f), 0.);

        // One degree north and south of the origin
        let north = ellps.meridional_arc(50_f64.to_radians(), origin, &f);
        let south = ellps.meridional_arc(48_f64.to_radians(), origin, &f);
        assert!((north - 111_209.767_833).abs() < 1e-5);
        assert!((south + 111_190.466_083).abs() < 1e-5);

        // A degree of meridian grows longer towards the pole
        assert!(north > -south);

        // Locally, the arc length is the meridian radius of curvature times the angle
        let dphi = 1e-6;
        let arc = ellps.meridional_arc(origin + dphi, origin, &f);
        let rho = ellps.meridian_radius_of_curvature(origin + dphi / 2.);
        assert!((arc - rho * dphi).abs() < 1e-6);
    }
}
