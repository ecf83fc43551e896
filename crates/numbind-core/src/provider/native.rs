use crate::fit::{Covariance, Estimate, LinearFit, Strided};
use crate::provider::status::{self, Status};
use crate::provider::{NumericProvider, ProviderResult};

use nalgebra::{Matrix2, Vector2};

/// Pure Rust provider. Fits use running means the way the C routines do,
/// Bessel values come from `libm`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Native;

impl NumericProvider for Native {
    fn strerror(&self, code: i32) -> &'static str {
        status::strerror(code)
    }

    fn fit_linear(&self, x: Strided<'_>, y: Strided<'_>) -> ProviderResult<(LinearFit, f64)> {
        let mut n = 0usize;
        let (mut m_x, mut m_y) = (0.0, 0.0);
        for (xi, yi) in x.iter().zip(y.iter()) {
            n += 1;
            let k = n as f64;
            m_x += (xi - m_x) / k;
            m_y += (yi - m_y) / k;
        }

        let (mut m_dx2, mut m_dxdy) = (0.0, 0.0);
        for (i, (xi, yi)) in x.iter().zip(y.iter()).enumerate() {
            let k = (i + 1) as f64;
            let dx = xi - m_x;
            let dy = yi - m_y;
            m_dx2 += (dx * dx - m_dx2) / k;
            m_dxdy += (dx * dy - m_dxdy) / k;
        }

        // no spread in x, slope undefined
        if n == 0 || !m_dx2.is_finite() || m_dx2 == 0.0 {
            return Err(Status::EZERODIV);
        }

        let slope = m_dxdy / m_dx2;
        let intercept = m_y - m_x * slope;

        let sum_sq: f64 = x
            .iter()
            .zip(y.iter())
            .map(|(xi, yi)| {
                let d = (yi - m_y) - slope * (xi - m_x);
                d * d
            })
            .sum();

        let n = n as f64;
        let s2 = sum_sq / (n - 2.0);
        let cov = Covariance {
            c00: s2 * (1.0 / n) * (1.0 + m_x * m_x / m_dx2),
            c01: s2 * (-m_x) / (n * m_dx2),
            c11: s2 * 1.0 / (n * m_dx2),
        };

        Ok((LinearFit::from_val(intercept, slope, cov), sum_sq))
    }

    fn fit_wlinear(
        &self,
        x: Strided<'_>,
        y: Strided<'_>,
        w: Strided<'_>,
    ) -> ProviderResult<(LinearFit, f64)> {
        // only strictly positive weights take part
        let points = || {
            x.iter().zip(y.iter()).zip(w.iter()).filter(|&(_, wi)| wi > 0.0).map(|((xi, yi), wi)| {
                (xi, yi, wi)
            })
        };

        let mut big_w = 0.0;
        let (mut wm_x, mut wm_y) = (0.0, 0.0);
        for (xi, yi, wi) in points() {
            big_w += wi;
            wm_x += (xi - wm_x) * (wi / big_w);
            wm_y += (yi - wm_y) * (wi / big_w);
        }

        if big_w == 0.0 || !big_w.is_finite() {
            return Err(Status::EZERODIV);
        }

        big_w = 0.0;
        let (mut wm_dx2, mut wm_dxdy) = (0.0, 0.0);
        for (xi, yi, wi) in points() {
            let dx = xi - wm_x;
            let dy = yi - wm_y;
            big_w += wi;
            wm_dx2 += (dx * dx - wm_dx2) * (wi / big_w);
            wm_dxdy += (dx * dy - wm_dxdy) * (wi / big_w);
        }

        if !wm_dx2.is_finite() || wm_dx2 == 0.0 {
            return Err(Status::EZERODIV);
        }

        let slope = wm_dxdy / wm_dx2;
        let intercept = wm_y - wm_x * slope;

        let cov = Covariance {
            c00: (1.0 / big_w) * (1.0 + wm_x * wm_x / wm_dx2),
            c01: -wm_x / (big_w * wm_dx2),
            c11: 1.0 / (big_w * wm_dx2),
        };

        let chi_sq: f64 = points()
            .map(|(xi, yi, wi)| {
                let d = (yi - wm_y) - slope * (xi - wm_x);
                wi * d * d
            })
            .sum();

        Ok((LinearFit::from_val(intercept, slope, cov), chi_sq))
    }

    fn fit_linear_est(&self, x: f64, line: &LinearFit) -> ProviderResult<Estimate> {
        let cov = Matrix2::new(line.cov.c00, line.cov.c01, line.cov.c01, line.cov.c11);
        let grad = Vector2::new(1.0, x);
        let variance = grad.dot(&(cov * grad));

        Ok(Estimate { y: line.calculate(x), y_err: variance.sqrt() })
    }

    fn bessel_j0(&self, x: f64) -> f64 {
        libm::j0(x)
    }

    fn bessel_j1(&self, x: f64) -> f64 {
        libm::j1(x)
    }

    fn bessel_jn(&self, n: i32, x: f64) -> f64 {
        libm::jn(n, x)
    }

    fn bessel_jn_array(
        &self,
        nmin: i32,
        nmax: i32,
        x: f64,
        out: &mut [f64],
    ) -> ProviderResult<()> {
        if nmin < 0 || nmax < nmin || x.is_nan() {
            return Err(Status::EDOM);
        }

        let count = (i64::from(nmax) - i64::from(nmin) + 1) as usize;
        let Some(slots) = out.get_mut(..count) else {
            return Err(Status::EBADLEN);
        };

        for (slot, n) in slots.iter_mut().zip(nmin..=nmax) {
            *slot = libm::jn(n, x);
        }
        Ok(())
    }
}
