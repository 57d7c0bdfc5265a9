use num_complex::Complex;

use rand::distributions::{Distribution, Uniform};
use rand::{rngs::StdRng, SeedableRng};

/// The seed for the random number generator used to generate
/// random signals. It's defined here so that we have deterministic
/// tests
const RNG_SEED: [u8; 32] = [
    1, 9, 1, 0, 1, 1, 4, 3, 1, 4, 9, 8, 4, 1, 4, 8, 2, 8, 1, 2, 2, 2, 6, 1, 2, 3, 4, 5, 6, 7, 8, 9,
];

pub fn random_signal(length: usize) -> Vec<Complex<f32>> {
    let mut sig = Vec::with_capacity(length);
    let dist = Uniform::new(-10.0f32, 10.0);
    let mut rng = StdRng::from_seed(RNG_SEED);
    for _ in 0..length {
        sig.push(Complex {
            re: dist.sample(&mut rng),
            im: dist.sample(&mut rng),
        });
    }
    sig
}

/// Asserts that `actual` is within `tolerance` of `expected`, relative to the magnitude of `expected` (or absolute, below 1)
pub fn assert_complex_close(actual: Complex<f32>, expected: Complex<f32>, tolerance: f32) {
    let scale = expected.norm().max(1.0);
    let error = (actual - expected).norm();
    assert!(
        error <= tolerance * scale,
        "expected {}, got {} (error {})",
        expected,
        actual,
        error
    );
}
