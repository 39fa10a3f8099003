//! Evenly spaced sample points.

use num_traits::Float;

/// Returns `count` evenly spaced points from `min` to `max` inclusive.
///
/// The first point is exactly `min` and the last exactly `max`, so no
/// rounding drift accumulates at the upper end. `count == 1` yields `[min]`
/// and `count == 0` an empty vector; callers validate ranges beforehand.
///
/// # Examples
/// ```
/// use pricer_core::math::grid::linspace;
///
/// assert_eq!(linspace(90.0, 110.0, 3), vec![90.0, 100.0, 110.0]);
/// let vols = linspace(0.1_f64, 0.3, 5);
/// assert_eq!(*vols.last().unwrap(), 0.3);
/// ```
pub fn linspace<T: Float>(min: T, max: T, count: usize) -> Vec<T> {
    match count {
        0 => Vec::new(),
        1 => vec![min],
        _ => {
            let Some(intervals) = T::from(count - 1) else {
                return Vec::new();
            };
            let step = (max - min) / intervals;
            (0..count)
                .map(|i| {
                    if i == count - 1 {
                        max
                    } else {
                        T::from(i).map_or(max, |k| min + step * k)
                    }
                })
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_endpoints_exact() {
        let points = linspace(0.1_f64, 0.7, 7);
        assert_eq!(points.len(), 7);
        assert_eq!(points[0], 0.1);
        assert_eq!(points[6], 0.7);
        assert_relative_eq!(points[3], 0.4, epsilon = 1e-15);
    }

    #[test]
    fn test_degenerate_counts() {
        assert!(linspace(1.0_f64, 2.0, 0).is_empty());
        assert_eq!(linspace(1.0_f64, 2.0, 1), vec![1.0]);
        assert_eq!(linspace(1.0_f64, 2.0, 2), vec![1.0, 2.0]);
    }

    #[test]
    fn test_f32_support() {
        let points = linspace(0.0_f32, 1.0, 5);
        assert_eq!(points, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn test_strictly_increasing(
            min in -1000.0f64..1000.0,
            width in 1e-3f64..1000.0,
            count in 2usize..200,
        ) {
            let max = min + width;
            let points = linspace(min, max, count);
            prop_assert_eq!(points.len(), count);
            prop_assert_eq!(points[0], min);
            prop_assert_eq!(points[count - 1], max);
            for pair in points.windows(2) {
                prop_assert!(pair[1] > pair[0]);
            }
        }
    }
}
