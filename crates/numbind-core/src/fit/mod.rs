pub mod fitresult;
pub mod linear;
pub mod strided;

pub use fitresult::{Covariance, Estimate, LineModel, LinearFit, UnweightedFit, WeightedFit};
pub use linear::{fit_linear, fit_linear_with, fit_weighted_linear, fit_weighted_linear_with};
pub use strided::Strided;
