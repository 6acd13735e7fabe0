use nalgebra::Matrix4;

/// Standard Denavit-Hartenberg transform from link frame `i - 1` to link frame `i`.
///
/// Only `theta` is expected to vary between calls. The result is finite for any
/// finite input.
pub fn dh_transform(theta: f64, d: f64, a: f64, alpha: f64) -> Matrix4<f64> {
    let (sin_theta, cos_theta) = theta.sin_cos();
    let (sin_alpha, cos_alpha) = alpha.sin_cos();

    #[rustfmt::skip]
    let transform = Matrix4::new(
        cos_theta, -sin_theta * cos_alpha,  sin_theta * sin_alpha, a * cos_theta,
        sin_theta,  cos_theta * cos_alpha, -cos_theta * sin_alpha, a * sin_theta,
        0.0,        sin_alpha,              cos_alpha,             d,
        0.0,        0.0,                    0.0,                   1.0,
    );

    transform
}
