//! Packed single-precision complex arithmetic, for generic linear algebra kernels.
//!
//! A packet holds several `Complex<f32>` in one value, and exposes the fixed operation set of the [`Packet`](crate::Packet) trait:
//! loads and stores, elementwise arithmetic, horizontal reductions and realignment.
//! Kernels are written once, generic over `Packet`, and instantiated with the widest packet available.
//!
//! On x86_64, [`PackedComplex2`](crate::PackedComplex2) holds two complex numbers in one SSE register. Complex multiplication and
//! division are done entirely with lane shuffles and a sign-bit XOR, without ever extracting a scalar lane.
//! A plain `Complex<f32>` is also a `Packet` of one element, for buffer remainders and non-SIMD targets.
//!
//! ### Usage
//!
//! ```rust
//! use complex_packet::num_complex::Complex;
//! use complex_packet::{ConjHelper, ConjMul, Packet};
//!
//! // Computes the sum of conj(a[i]) * b[i], with whichever packet type the caller picks
//! fn dot_conj<P: Packet<Scalar = Complex<f32>>>(a: &[Complex<f32>], b: &[Complex<f32>]) -> Complex<f32> {
//!     let helper = ConjHelper::<true, false>;
//!     let mut acc = P::splat(&Complex::new(0.0, 0.0));
//!
//!     let chunks = a.len() / P::SIZE;
//!     for i in 0..chunks {
//!         let (x, y) = unsafe {
//!             (
//!                 P::load_unaligned(a.as_ptr().add(i * P::SIZE)),
//!                 P::load_unaligned(b.as_ptr().add(i * P::SIZE)),
//!             )
//!         };
//!         acc = helper.pmadd(x, y, acc);
//!     }
//!     let mut sum = acc.reduce_sum();
//!     for i in chunks * P::SIZE..a.len() {
//!         sum = sum + a[i].conj() * b[i];
//!     }
//!     sum
//! }
//!
//! let a = vec![Complex::new(1.0f32, 2.0); 5];
//! let b = vec![Complex::new(3.0f32, 4.0); 5];
//! let scalar = dot_conj::<Complex<f32>>(&a, &b);
//! assert_eq!(scalar, Complex::new(55.0, -10.0));
//!
//! #[cfg(all(target_arch = "x86_64", feature = "sse"))]
//! {
//!     let packed = dot_conj::<complex_packet::PackedComplex2>(&a, &b);
//!     assert_eq!(packed, scalar);
//! }
//! ```
//!
//! ### Caller contracts
//!
//! Nothing in this crate returns an error. Memory operations are `unsafe fn`s: the caller guarantees that pointers are valid,
//! and that pointers passed to the aligned variants are aligned to [`Packet::ALIGNMENT`](crate::Packet::ALIGNMENT).
//! These are checked with `debug_assert!` in debug builds only. Special floating point values propagate as IEEE-754 says:
//! dividing by a zero complex number produces infinite or NaN lanes.
//!
//! ### Feature Flags
//!
//! * `sse` (Enabled by default)
//!
//!     On x86_64, this feature enables compilation of [`PackedComplex2`](crate::PackedComplex2).
//!     SSE2 is part of the x86_64 baseline, so there is no runtime detection.
//!     On every other platform this feature does nothing, and only the scalar packet is available.

/// Re-export of `num_complex`, which provides the element type of every packet
pub use num_complex;
pub use num_traits;

mod array_utils;
mod common;
mod conj_helper;
pub mod layout;
mod scalar;

#[cfg(all(target_arch = "x86_64", feature = "sse"))]
mod sse;

#[cfg(test)]
mod test_utils;

pub use crate::array_utils::{PacketArray, PacketArrayMut};
pub use crate::common::{Packet, PacketCaps, COMPLEX_PACKET_CAPS};
pub use crate::conj_helper::{ConjHelper, ConjMul};

#[cfg(all(target_arch = "x86_64", feature = "sse"))]
pub use crate::sse::PackedComplex2;
