pub mod bessel;

pub use bessel::{
    bessel_j0, bessel_j0_with, bessel_j1, bessel_j1_with, bessel_jn, bessel_jn_array,
    bessel_jn_array_with, bessel_jn_vec, bessel_jn_vec_with, bessel_jn_with, MAX_VEC_ORDERS,
};
