//! The numerical provider behind the facades.
//!
//! Every facade call ends in one of the methods below. Failures come back as
//! raw status codes (see [`Status`]) and are wrapped by the facade.

pub mod native;
pub mod status;

pub use native::Native;
pub use status::{strerror, Status};

use crate::fit::{Estimate, LinearFit, Strided};

pub type ProviderResult<T> = Result<T, i32>;

pub trait NumericProvider: Send + Sync {
    /// Canonical message for a status code
    fn strerror(&self, code: i32) -> &'static str;

    /// Ordinary least squares over two views of equal logical length.
    /// Returns the fitted line and the residual sum of squares.
    fn fit_linear(&self, x: Strided<'_>, y: Strided<'_>) -> ProviderResult<(LinearFit, f64)>;

    /// Weighted least squares; `w` holds reciprocal variances.
    /// Returns the fitted line and chi-square.
    fn fit_wlinear(
        &self,
        x: Strided<'_>,
        y: Strided<'_>,
        w: Strided<'_>,
    ) -> ProviderResult<(LinearFit, f64)>;

    fn fit_linear_est(&self, x: f64, line: &LinearFit) -> ProviderResult<Estimate>;

    fn bessel_j0(&self, x: f64) -> f64;
    fn bessel_j1(&self, x: f64) -> f64;
    fn bessel_jn(&self, n: i32, x: f64) -> f64;

    /// Fill `out[0..=nmax-nmin]` with J_nmin(x) ..= J_nmax(x)
    fn bessel_jn_array(&self, nmin: i32, nmax: i32, x: f64, out: &mut [f64])
        -> ProviderResult<()>;
}

static DEFAULT_PROVIDER: Native = Native;

pub fn default_provider() -> &'static dyn NumericProvider {
    &DEFAULT_PROVIDER
}
