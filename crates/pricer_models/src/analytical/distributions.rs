//! Standard normal distribution functions.
//!
//! This module provides:
//! - `norm_cdf`: Cumulative distribution function Φ
//! - `norm_pdf`: Probability density function φ
//!
//! Both are generic over `T: Float` so that the same code serves `f64`
//! pricing and `f32` tests.

use num_traits::Float;

/// 1 / sqrt(2π)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Abramowitz and Stegun 7.1.26 coefficients, lowest order first.
const ERFC_COEFFS: [f64; 5] = [
    0.254_829_592,
    -0.284_496_736,
    1.421_413_741,
    -1.453_152_027,
    1.061_405_429,
];

/// Abramowitz and Stegun 7.1.26 scale parameter.
const ERFC_P: f64 = 0.327_591_1;

/// Converts an `f64` constant into `T`.
///
/// Every `Float` implementor can represent these literals; a failed
/// conversion propagates as NaN rather than panicking.
#[inline]
pub(crate) fn lit<T: Float>(value: f64) -> T {
    T::from(value).unwrap_or_else(T::nan)
}

/// Complementary error function, maximum absolute error 1.5e-7.
///
/// Evaluated on `|x|` and reflected with `erfc(−x) = 2 − erfc(x)`, so
/// `Φ(x) + Φ(−x) = 1` holds to rounding for every non-zero `x`.
#[inline]
fn erfc<T: Float>(x: T) -> T {
    let abs_x = x.abs();
    let t = T::one() / (T::one() + lit::<T>(ERFC_P) * abs_x);

    let poly = ERFC_COEFFS
        .iter()
        .rev()
        .fold(T::zero(), |acc, &a| acc * t + lit(a));
    let tail = t * poly * (-abs_x * abs_x).exp();

    if x < T::zero() {
        lit::<T>(2.0) - tail
    } else {
        tail
    }
}

/// Standard normal cumulative distribution function.
///
/// Φ(x) = ½·erfc(−x/√2), accurate to about 1e-7.
///
/// # Examples
/// ```
/// use pricer_models::analytical::distributions::norm_cdf;
///
/// assert!((norm_cdf(0.0_f64) - 0.5).abs() < 1e-7);
/// assert!((norm_cdf(1.0_f64) + norm_cdf(-1.0_f64) - 1.0).abs() < 1e-12);
/// ```
#[inline]
pub fn norm_cdf<T: Float>(x: T) -> T {
    lit::<T>(0.5) * erfc(-x / lit(std::f64::consts::SQRT_2))
}

/// Standard normal probability density function.
///
/// φ(x) = exp(−x²/2) / √(2π)
///
/// # Examples
/// ```
/// use pricer_models::analytical::distributions::norm_pdf;
///
/// assert!((norm_pdf(0.0_f64) - 0.3989422804).abs() < 1e-9);
/// assert!((norm_pdf(1.0_f64) - 0.2419707245).abs() < 1e-9);
/// ```
#[inline]
pub fn norm_pdf<T: Float>(x: T) -> T {
    lit::<T>(FRAC_1_SQRT_2PI) * (lit::<T>(-0.5) * x * x).exp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // ==========================================================
    // norm_cdf tests
    // ==========================================================

    #[test]
    fn test_norm_cdf_reference_values() {
        let table = [
            (-2.0, 0.022750131948179195),
            (-1.0, 0.15865525393145707),
            (0.0, 0.5),
            (0.15, 0.5596176923702425),
            (0.35, 0.6368306511756191),
            (1.0, 0.8413447460685429),
            (2.0, 0.9772498680518208),
            (3.0, 0.9986501019683699),
        ];
        for (x, expected) in table {
            assert_relative_eq!(norm_cdf(x), expected, epsilon = 1e-7);
        }
    }

    #[test]
    fn test_norm_cdf_symmetry() {
        for i in -80..=80 {
            let x = i as f64 * 0.1;
            assert_relative_eq!(norm_cdf(x) + norm_cdf(-x), 1.0, epsilon = 1e-8);
        }
    }

    #[test]
    fn test_norm_cdf_monotonic_and_bounded() {
        let values: Vec<f64> = (-50..=50).map(|i| i as f64 * 0.1).collect();
        for pair in values.windows(2) {
            let (a, b) = (norm_cdf(pair[0]), norm_cdf(pair[1]));
            assert!(b > a, "CDF not monotonic at x = {}", pair[0]);
            assert!((0.0..=1.0).contains(&a));
        }
        assert!(norm_cdf(-10.0_f64) >= 0.0);
        assert!(norm_cdf(10.0_f64) <= 1.0);
    }

    #[test]
    fn test_norm_cdf_f32_compatibility() {
        assert!((norm_cdf(0.0_f32) - 0.5).abs() < 1e-5);
    }

    // ==========================================================
    // norm_pdf tests
    // ==========================================================

    #[test]
    fn test_norm_pdf_reference_values() {
        assert_relative_eq!(norm_pdf(0.0_f64), FRAC_1_SQRT_2PI, epsilon = 1e-15);
        assert_relative_eq!(norm_pdf(0.35_f64), 0.37524034691693792, epsilon = 1e-12);
        assert_relative_eq!(norm_pdf(2.0_f64), 0.05399096651318806, epsilon = 1e-12);
        assert!(norm_pdf(8.0_f64) < 1e-12);
    }

    #[test]
    fn test_norm_pdf_symmetric() {
        for x in [0.5, 1.0, 2.5] {
            assert_eq!(norm_pdf(x), norm_pdf(-x));
        }
    }

    #[test]
    fn test_cdf_derivative_matches_pdf() {
        let h = 1e-4;
        for x in [-2.0, -1.0, 0.0, 1.0, 2.0] {
            let numerical = (norm_cdf(x + h) - norm_cdf(x - h)) / (2.0 * h);
            assert_relative_eq!(numerical, norm_pdf(x), epsilon = 1e-4);
        }
    }

    #[test]
    fn test_lit_conversion() {
        assert_eq!(lit::<f64>(0.25), 0.25);
        assert_eq!(lit::<f32>(0.5), 0.5_f32);
    }
}
