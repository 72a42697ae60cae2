//! Central finite differences for checking analytic gradients.

use ndarray::{Array1, ArrayView1};

/// Default step used by [`gradient`].
pub const DEFAULT_STEP: f64 = 1e-5;

/// Approximates the gradient of `f` at `x` with central differences.
///
/// Each component is `(f(x + h·eᵢ) - f(x - h·eᵢ)) / 2h`.
pub fn gradient<F>(f: F, x: ArrayView1<'_, f64>, h: f64) -> Array1<f64>
where
    F: Fn(ArrayView1<'_, f64>) -> f64,
{
    let mut probe = x.to_owned();
    Array1::from_shape_fn(x.len(), |i| {
        let xi = probe[i];
        probe[i] = xi + h;
        let forward = f(probe.view());
        probe[i] = xi - h;
        let backward = f(probe.view());
        probe[i] = xi;
        (forward - backward) / (2.0 * h)
    })
}

/// Returns the largest component-wise mismatch between `analytic` and `approx`.
///
/// Each mismatch is `|a - b| / max(1, |a|)`, so it reads as an absolute error
/// near zero and a relative error elsewhere.
#[must_use]
pub fn max_scaled_error(analytic: ArrayView1<'_, f64>, approx: ArrayView1<'_, f64>) -> f64 {
    analytic
        .iter()
        .zip(approx.iter())
        .map(|(a, b)| (a - b).abs() / a.abs().max(1.0))
        .fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn matches_quadratic_gradient() {
        let f = |x: ArrayView1<'_, f64>| x[0] * x[0] + 3.0 * x[0] * x[1];
        let x = array![1.5, -2.0];

        let fd = gradient(f, x.view(), DEFAULT_STEP);

        assert_relative_eq!(fd[0], 2.0 * 1.5 + 3.0 * -2.0, epsilon = 1e-6);
        assert_relative_eq!(fd[1], 3.0 * 1.5, epsilon = 1e-6);
    }

    #[test]
    fn leaves_point_untouched() {
        let f = |x: ArrayView1<'_, f64>| x.sum();
        let x = array![0.1, 0.2, 0.3];

        let fd = gradient(f, x.view(), 1e-3);

        assert_eq!(x, array![0.1, 0.2, 0.3]);
        for d in &fd {
            assert_relative_eq!(*d, 1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn scaled_error_is_relative_for_large_components() {
        let a = array![1000.0, 0.5];
        let b = array![1001.0, 0.5];
        assert_relative_eq!(max_scaled_error(a.view(), b.view()), 1e-3);
    }

    #[test]
    fn scaled_error_is_absolute_near_zero() {
        let a = array![0.0, 0.25];
        let b = array![1e-4, 0.25];
        assert_relative_eq!(max_scaled_error(a.view(), b.view()), 1e-4);
    }
}
