//! Decompositions and linear-system solving.
//!
//! [`Lu`] factors a square matrix with partially-pivoted Gaussian
//! elimination and backs `solve`, `inverse`, and `det`. [`Qr`] factors a
//! tall or square matrix with Householder reflections and backs
//! least-squares solving. Both leave the input matrix untouched and hand
//! out independently owned factor matrices.

pub(crate) mod lu;
pub(crate) mod qr;

pub use lu::Lu;
pub use qr::Qr;
