use crate::error::{NumError, NumResult};
use crate::fit::fitresult::{UnweightedFit, WeightedFit};
use crate::fit::strided::{ensure_same_len, Strided};
use crate::provider::{default_provider, NumericProvider};

/// Ordinary least squares fit of `y = intercept + slope * x`.
///
/// `stride_x` and `stride_y` pick every n-th element of their slices; the
/// two strided views must have the same logical length. The covariance of
/// the parameters is estimated from the scatter of the points around the
/// fitted line.
pub fn fit_linear(
    x: &[f64],
    y: &[f64],
    stride_x: usize,
    stride_y: usize,
) -> NumResult<UnweightedFit> {
    fit_linear_with(default_provider(), x, y, stride_x, stride_y)
}

pub fn fit_linear_with(
    provider: &dyn NumericProvider,
    x: &[f64],
    y: &[f64],
    stride_x: usize,
    stride_y: usize,
) -> NumResult<UnweightedFit> {
    let xs = Strided::new("x", x, stride_x)?;
    let ys = Strided::new("y", y, stride_y)?;
    ensure_same_len(("x", &xs), ("y", &ys))?;

    let (line, sum_sq) =
        provider.fit_linear(xs, ys).map_err(|code| NumError::from_status(provider, code))?;
    tracing::debug!(n = xs.len(), sum_sq, "linear fit");

    Ok(UnweightedFit { line, sum_sq })
}

/// Weighted least squares fit of `y = intercept + slope * x`.
///
/// `w` holds the weight of each point, the reciprocal of its variance.
/// Points with a non-positive weight do not contribute. All three strided
/// views must have the same logical length.
pub fn fit_weighted_linear(
    x: &[f64],
    y: &[f64],
    w: &[f64],
    stride_x: usize,
    stride_y: usize,
    stride_w: usize,
) -> NumResult<WeightedFit> {
    fit_weighted_linear_with(default_provider(), x, y, w, stride_x, stride_y, stride_w)
}

pub fn fit_weighted_linear_with(
    provider: &dyn NumericProvider,
    x: &[f64],
    y: &[f64],
    w: &[f64],
    stride_x: usize,
    stride_y: usize,
    stride_w: usize,
) -> NumResult<WeightedFit> {
    let xs = Strided::new("x", x, stride_x)?;
    let ys = Strided::new("y", y, stride_y)?;
    let ws = Strided::new("w", w, stride_w)?;
    ensure_same_len(("x", &xs), ("y", &ys))?;
    ensure_same_len(("x", &xs), ("w", &ws))?;

    let (line, chi_sq) =
        provider.fit_wlinear(xs, ys, ws).map_err(|code| NumError::from_status(provider, code))?;
    tracing::debug!(n = xs.len(), chi_sq, "weighted linear fit");

    Ok(WeightedFit { line, chi_sq })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InvalidArgument;
    use crate::fit::{Estimate, LineModel, LinearFit};
    use crate::provider::{Native, ProviderResult, Status};

    use approx::assert_relative_eq;

    fn line_data(n: usize, slope: f64, intercept: f64) -> (Vec<f64>, Vec<f64>) {
        let x: Vec<f64> = (0..n).map(|i| i as f64).collect();
        let y: Vec<f64> = x.iter().map(|&xi| slope * xi + intercept).collect();
        (x, y)
    }

    /// Delegates to the native provider but fails every fit and estimate.
    /// The optional message replaces the native wording for every code.
    struct Failing(i32, Option<&'static str>);

    impl NumericProvider for Failing {
        fn strerror(&self, code: i32) -> &'static str {
            self.1.unwrap_or_else(|| Native.strerror(code))
        }
        fn fit_linear(&self, _: Strided<'_>, _: Strided<'_>) -> ProviderResult<(LinearFit, f64)> {
            Err(self.0)
        }
        fn fit_wlinear(
            &self,
            _: Strided<'_>,
            _: Strided<'_>,
            _: Strided<'_>,
        ) -> ProviderResult<(LinearFit, f64)> {
            Err(self.0)
        }
        fn fit_linear_est(&self, _: f64, _: &LinearFit) -> ProviderResult<Estimate> {
            Err(self.0)
        }
        fn bessel_j0(&self, x: f64) -> f64 {
            Native.bessel_j0(x)
        }
        fn bessel_j1(&self, x: f64) -> f64 {
            Native.bessel_j1(x)
        }
        fn bessel_jn(&self, n: i32, x: f64) -> f64 {
            Native.bessel_jn(n, x)
        }
        fn bessel_jn_array(&self, _: i32, _: i32, _: f64, _: &mut [f64]) -> ProviderResult<()> {
            Err(self.0)
        }
    }

    #[test]
    fn test_linear_fit() {
        let (x, y) = line_data(10, 2.0, 4.0);
        let fit = fit_linear(&x, &y, 1, 1).unwrap();

        assert_relative_eq!(fit.slope(), 2.0, max_relative = 1e-3);
        assert_relative_eq!(fit.intercept(), 4.0, max_relative = 1e-3);
        assert!(fit.sum_sq >= 0.0);
    }

    #[test]
    fn test_linear_fit_two_points() {
        let (x, y) = line_data(2, -3.0, 7.0);
        let fit = fit_linear(&x, &y, 1, 1).unwrap();

        assert_relative_eq!(fit.slope(), -3.0, max_relative = 1e-3);
        assert_relative_eq!(fit.intercept(), 7.0, max_relative = 1e-3);
    }

    #[test]
    fn test_linear_fit_random_integer_lines() {
        for _ in 0..50 {
            let slope = rand::random_range(-20..=20) as f64;
            let intercept = rand::random_range(-100..=100) as f64;
            let n = rand::random_range(2..40);
            let (x, y) = line_data(n, slope, intercept);

            let fit = fit_linear(&x, &y, 1, 1).unwrap();
            assert_relative_eq!(fit.slope(), slope, epsilon = 1e-9, max_relative = 1e-3);
            assert_relative_eq!(fit.intercept(), intercept, epsilon = 1e-9, max_relative = 1e-3);
        }
    }

    #[test]
    fn test_weighted_fit() {
        let (x, y) = line_data(10, 2.0, 4.0);
        let w = vec![0.2; 10];
        let fit = fit_weighted_linear(&x, &y, &w, 1, 1, 1).unwrap();

        assert_relative_eq!(fit.slope(), 2.0, max_relative = 1e-3);
        assert_relative_eq!(fit.intercept(), 4.0, max_relative = 1e-3);
        assert!(fit.chi_sq >= 0.0);
    }

    #[test]
    fn test_weighted_matches_unweighted_for_uniform_weights() {
        let x = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [0.3, 1.9, 4.2, 5.8, 8.1, 10.2];
        let w = [3.0; 6];

        let ols = fit_linear(&x, &y, 1, 1).unwrap();
        let wls = fit_weighted_linear(&x, &y, &w, 1, 1, 1).unwrap();

        assert_relative_eq!(ols.slope(), wls.slope(), max_relative = 1e-9);
        assert_relative_eq!(ols.intercept(), wls.intercept(), epsilon = 1e-12, max_relative = 1e-9);
        // chi-square is the sum of squares scaled by the common weight
        assert_relative_eq!(wls.chi_sq, 3.0 * ols.sum_sq, max_relative = 1e-9);
    }

    #[test]
    fn test_value_at_extrapolation() {
        let (x, y) = line_data(10, 2.0, 4.0);
        let fit = fit_linear(&x, &y, 1, 1).unwrap();

        for at in [-50.0, 0.0, 4.5, 35.0, 1000.0] {
            let est = fit.value_at(at).unwrap();
            let expected = 2.0 * at + 4.0;
            assert!(
                (est.y - expected).abs() <= est.y_err + 1e-9 * expected.abs().max(1.0),
                "at {at}: {est} vs {expected}"
            );
        }
    }

    #[test]
    fn test_value_at_error_grows_away_from_data() {
        let x = [0.0, 1.0, 2.0, 3.0, 4.0];
        let y = [0.1, 0.9, 2.2, 2.8, 4.1];
        let fit = fit_linear(&x, &y, 1, 1).unwrap();

        let inside = fit.value_at(2.0).unwrap();
        let outside = fit.value_at(40.0).unwrap();
        assert!(inside.y_err > 0.0);
        assert!(outside.y_err > inside.y_err);
    }

    #[test]
    fn test_strided_fit_uses_selected_elements() {
        // x interleaved with junk, y packed
        let x = [0.0, 99.0, 1.0, 99.0, 2.0, 99.0, 3.0];
        let y = [5.0, 8.0, 11.0, 14.0];
        let fit = fit_linear(&x, &y, 2, 1).unwrap();

        assert_relative_eq!(fit.slope(), 3.0, max_relative = 1e-9);
        assert_relative_eq!(fit.intercept(), 5.0, max_relative = 1e-9);
    }

    #[test]
    fn test_strided_weighted_fit() {
        let x = [0.0, 1.0, 2.0, 3.0];
        let y = [1.0, -1.0, 2.0, -1.0, 3.0, -1.0, 4.0, -1.0];
        let w = [1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0];
        let fit = fit_weighted_linear(&x, &y, &w, 1, 2, 3).unwrap();

        assert_relative_eq!(fit.slope(), 1.0, max_relative = 1e-9);
        assert_relative_eq!(fit.intercept(), 1.0, max_relative = 1e-9);
    }

    #[test]
    fn test_empty_input_is_invalid_argument() {
        let err = fit_linear(&[], &[], 1, 1).unwrap_err();
        assert_eq!(err, NumError::InvalidArgument(InvalidArgument::Empty { name: "x" }));

        let err = fit_linear(&[1.0, 2.0], &[], 1, 1).unwrap_err();
        assert_eq!(err, NumError::InvalidArgument(InvalidArgument::Empty { name: "y" }));
    }

    #[test]
    fn test_mismatched_input_is_invalid_argument() {
        let err = fit_linear(&[1.0, 2.0, 3.0], &[1.0, 2.0], 1, 1).unwrap_err();
        assert!(err.is_invalid_argument());

        let err = fit_weighted_linear(&[1.0, 2.0], &[1.0, 2.0], &[1.0], 1, 1, 1).unwrap_err();
        assert_eq!(
            err,
            NumError::InvalidArgument(InvalidArgument::LengthMismatch {
                a: "x",
                b: "w",
                len_a: 2,
                len_b: 1
            })
        );
    }

    #[test]
    fn test_zero_stride_is_invalid_argument() {
        let err = fit_linear(&[1.0, 2.0], &[1.0, 2.0], 1, 0).unwrap_err();
        assert_eq!(err, NumError::InvalidArgument(InvalidArgument::ZeroStride { name: "y" }));
    }

    #[test]
    fn test_degenerate_x_is_library_error() {
        let err = fit_linear(&[2.0, 2.0, 2.0], &[1.0, 2.0, 3.0], 1, 1).unwrap_err();
        assert_eq!(err.code(), Some(Status::EZERODIV));

        let err = fit_linear(&[1.0], &[1.0], 1, 1).unwrap_err();
        assert_eq!(err.code(), Some(Status::EZERODIV));
    }

    #[test]
    fn test_provider_failure_is_propagated() {
        let (x, y) = line_data(5, 1.0, 0.0);
        let failing = Failing(Status::ELOSS, None);

        let err = fit_linear_with(&failing, &x, &y, 1, 1).unwrap_err();
        assert_eq!(err.code(), Some(Status::ELOSS));
        assert_eq!(err.to_string(), "library error 17: loss of accuracy");

        let w = vec![1.0; 5];
        let err = fit_weighted_linear_with(&failing, &x, &y, &w, 1, 1, 1).unwrap_err();
        assert_eq!(err.code(), Some(Status::ELOSS));

        let fit = fit_linear(&x, &y, 1, 1).unwrap();
        let err = fit.value_at_with(&failing, 3.0).unwrap_err();
        assert_eq!(err, NumError::from_status(&failing, Status::ELOSS));
    }

    #[test]
    fn test_failure_is_described_by_raising_provider() {
        let (x, y) = line_data(5, 1.0, 0.0);
        let vendor = Failing(77, Some("vendor says no"));

        let err = fit_linear_with(&vendor, &x, &y, 1, 1).unwrap_err();
        assert_eq!(err.code(), Some(77));
        assert_eq!(err.to_string(), "library error 77: vendor says no");

        let w = vec![1.0; 5];
        let err = fit_weighted_linear_with(&vendor, &x, &y, &w, 1, 1, 1).unwrap_err();
        assert_eq!(err.to_string(), "library error 77: vendor says no");

        let fit = fit_linear(&x, &y, 1, 1).unwrap();
        let err = fit.value_at_with(&vendor, 3.0).unwrap_err();
        assert_eq!(err.to_string(), "library error 77: vendor says no");

        let mut out = [0.0; 3];
        let err = crate::sf::bessel_jn_array_with(&vendor, 0, 2, 1.0, &mut out).unwrap_err();
        assert_eq!(err.to_string(), "library error 77: vendor says no");
    }

    #[test]
    fn test_validation_happens_before_provider() {
        let failing = Failing(Status::EFAILED, None);
        let err = fit_linear_with(&failing, &[], &[1.0], 1, 1).unwrap_err();
        assert!(err.is_invalid_argument());
    }
}
