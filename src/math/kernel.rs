//! The smoothing kernel.
//!
//! Both estimators weight samples with the Gaussian
//!
//! ```text
//! K(d; h) = exp(-d^2 / (2 h^2))
//! ```
//!
//! where `d` is a signed offset (1-D) or a Euclidean distance (2-D) and `h` is
//! the bandwidth. The normalizing constant is omitted: it cancels in the
//! Nadaraya-Watson ratio.

/// Evaluate the Gaussian kernel at separation `d` for bandwidth `h`.
///
/// Symmetric in `d`, equal to 1 at `d = 0` and decreasing in `|d|`. For
/// `|d| >> h` the value underflows to exactly `0.0`.
///
/// `h` must be strictly positive; the estimators guarantee this. The offset is
/// scaled by `h` before squaring so a tiny bandwidth cannot turn `2 h^2` into 0.
#[inline]
pub fn gaussian(d: f64, h: f64) -> f64 {
    let u = d / h;
    (-0.5 * u * u).exp()
}
