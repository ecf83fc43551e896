//! Typed facades over a numerical provider: library status codes, simple
//! linear regression and Bessel functions of the first kind.
//!
//! ```
//! use numbind_core::fit::{fit_linear, LineModel};
//!
//! let x = [0.0, 1.0, 2.0, 3.0];
//! let y = [4.0, 6.0, 8.0, 10.0];
//! let fit = fit_linear(&x, &y, 1, 1).unwrap();
//! let est = fit.value_at(35.0).unwrap();
//! assert!((est.y - 74.0).abs() < 1e-9);
//! ```

pub mod error;
pub mod errorcode;
pub mod fit;
pub mod provider;
pub mod sf;

pub use error::{InvalidArgument, NumError, NumResult};
pub use errorcode::LibError;
pub use provider::{default_provider, NumericProvider, Status};
