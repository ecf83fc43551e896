//! Bessel functions of the first kind, J0, J1 and Jn.

use crate::error::{InvalidArgument, NumError, NumResult};
use crate::provider::{default_provider, NumericProvider, Status};

/// Most orders [`bessel_jn_vec`] allocates for. Wider ranges fail with the
/// provider's out-of-memory status.
pub const MAX_VEC_ORDERS: usize = 1 << 20;

/// J0(x)
pub fn bessel_j0(x: f64) -> f64 {
    bessel_j0_with(default_provider(), x)
}

pub fn bessel_j0_with(provider: &dyn NumericProvider, x: f64) -> f64 {
    provider.bessel_j0(x)
}

/// J1(x)
pub fn bessel_j1(x: f64) -> f64 {
    bessel_j1_with(default_provider(), x)
}

pub fn bessel_j1_with(provider: &dyn NumericProvider, x: f64) -> f64 {
    provider.bessel_j1(x)
}

/// Jn(x) for any integer order, negative orders included
pub fn bessel_jn(order: i32, x: f64) -> f64 {
    bessel_jn_with(default_provider(), order, x)
}

pub fn bessel_jn_with(provider: &dyn NumericProvider, order: i32, x: f64) -> f64 {
    provider.bessel_jn(order, x)
}

/// Number of values in `nmin..=nmax`, `None` for a range the provider rejects
fn order_count(nmin: i32, nmax: i32) -> Option<usize> {
    (nmin >= 0 && nmax >= nmin).then(|| (i64::from(nmax) - i64::from(nmin) + 1) as usize)
}

/// Fill `out` with J_nmin(x), J_nmin+1(x), ..., J_nmax(x).
///
/// `out` needs room for `nmax - nmin + 1` values; anything past that is left
/// as it was. A negative `nmin`, `nmax < nmin` or a NaN `x` is reported by
/// the provider as an input domain error.
pub fn bessel_jn_array(nmin: i32, nmax: i32, x: f64, out: &mut [f64]) -> NumResult<()> {
    bessel_jn_array_with(default_provider(), nmin, nmax, x, out)
}

pub fn bessel_jn_array_with(
    provider: &dyn NumericProvider,
    nmin: i32,
    nmax: i32,
    x: f64,
    out: &mut [f64],
) -> NumResult<()> {
    if let Some(needed) = order_count(nmin, nmax) {
        if out.len() < needed {
            return Err(InvalidArgument::BufferTooSmall { len: out.len(), needed }.into());
        }
    }
    provider
        .bessel_jn_array(nmin, nmax, x, out)
        .map_err(|code| NumError::from_status(provider, code))
}

/// Allocating form of [`bessel_jn_array`], limited to [`MAX_VEC_ORDERS`]
/// values
pub fn bessel_jn_vec(nmin: i32, nmax: i32, x: f64) -> NumResult<Vec<f64>> {
    bessel_jn_vec_with(default_provider(), nmin, nmax, x)
}

pub fn bessel_jn_vec_with(
    provider: &dyn NumericProvider,
    nmin: i32,
    nmax: i32,
    x: f64,
) -> NumResult<Vec<f64>> {
    let needed = order_count(nmin, nmax).unwrap_or(0);
    let no_mem = || NumError::from_status(provider, Status::ENOMEM);
    if needed > MAX_VEC_ORDERS {
        return Err(no_mem());
    }

    let mut out = Vec::new();
    out.try_reserve_exact(needed).map_err(|_| no_mem())?;
    out.resize(needed, 0.0);
    bessel_jn_array_with(provider, nmin, nmax, x, &mut out)?;
    Ok(out)
}
