// --- Taylor series polynomium evaluation ----

pub mod taylor {
    /// Evaluate Σ cᵢ · xⁱ using Horner's scheme
    pub fn horner(arg: f64, coefficients: &[f64]) -> f64 {
        let mut coefficients = coefficients.iter().rev();
        let Some(last) = coefficients.next() else {
            return 0.;
        };
        let mut value = *last;
        for c in coefficients {
            value = value.mul_add(arg, *c);
        }
        value
    }
}

// ----- Tests ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::taylor::*;

    #[test]
    fn test_horner() {
        // Coefficients for 3x² + 2x + 1
        let coefficients = [1_f64, 2., 3.];
        assert_eq!(horner(1., &coefficients), 6.);
        assert_eq!(horner(2., &coefficients), 17.);
        assert_eq!(horner(-2., &coefficients), 9.);

        assert_eq!(horner(-2., &[1_f64]), 1.);
        assert_eq!(horner(-2., &[3_f64]), 3.);

        assert_eq!(horner(-2., &[]), 0.);

        // The leading factor of the Airy 1830 meridional arc series
        let n = crate::AIRY_1830.third_flattening();
        let result = horner(n, &[1., 1., 5. / 4., 5. / 4.]);
        let expected = 1.001_676_725_767_397_3;
        assert!((result - expected).abs() < 1e-15);
    }
}
