//! Starting-point samplers shared by the problem variants.

use ndarray::{Array1, ArrayView1};
use rand::{Rng, distr::StandardUniform};
use rand_distr::{Distribution, StandardNormal};

/// Draws `dim` standard normal components, each clipped to `[lo, hi]`.
pub fn clipped_normal<R>(rng: &mut R, dim: usize, lo: f64, hi: f64) -> Array1<f64>
where
    R: Rng + ?Sized,
{
    Array1::from_shape_fn(dim, |_| {
        let z: f64 = StandardNormal.sample(rng);
        z.clamp(lo, hi)
    })
}

/// Draws `u · (b - a) + a` with `u ~ U[0, 1)` per component.
///
/// `b` may be below `a` in any component; the draw then runs from `a` down
/// toward `b`. Components where `a == b` are fixed.
///
/// # Panics
///
/// Panics if `a` and `b` have different lengths.
pub fn scaled_uniform<R: Rng + ?Sized>(
    rng: &mut R,
    a: ArrayView1<'_, f64>,
    b: ArrayView1<'_, f64>,
) -> Array1<f64> {
    assert_eq!(a.len(), b.len(), "sampling bounds must have equal length");
    Array1::from_shape_fn(a.len(), |i| {
        let u: f64 = StandardUniform.sample(rng);
        u * (b[i] - a[i]) + a[i]
    })
}
