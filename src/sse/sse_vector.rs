use core::arch::x86_64::*;
use num_complex::Complex;
use num_traits::Zero;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::common::{AlignOffset, Packet, PacketCaps, COMPLEX_PACKET_CAPS};
use crate::layout::PACKET_ALIGNMENT;

use super::sse_utils::*;

// Scratch space for moving a register through memory
#[repr(C, align(16))]
struct Aligned16<T>(T);

/// Two `Complex<f32>` held in one SSE register, laid out as `[a.re, a.im, b.re, b.im]`.
///
/// Every operation keeps that layout on output. SSE2 is part of the x86_64 baseline, so nothing here needs runtime detection.
#[derive(Copy, Clone, Debug)]
#[repr(transparent)]
pub struct PackedComplex2(__m128);

impl PackedComplex2 {
    #[inline(always)]
    pub fn new(first: Complex<f32>, second: Complex<f32>) -> Self {
        Self(unsafe { _mm_setr_ps(first.re, first.im, second.re, second.im) })
    }

    #[inline(always)]
    pub fn from_array(values: [Complex<f32>; 2]) -> Self {
        unsafe { Self::load_unaligned(values.as_ptr()) }
    }

    #[inline(always)]
    pub fn to_array(self) -> [Complex<f32>; 2] {
        let mut result = Aligned16([Complex::zero(); 2]);
        unsafe { Self::store_aligned(result.0.as_mut_ptr(), self) };
        result.0
    }

    /// Builds a packet from the raw bits of its four lanes.
    #[inline(always)]
    pub fn from_bits(bits: [u32; 4]) -> Self {
        Self(unsafe { _mm_castsi128_ps(_mm_loadu_si128(bits.as_ptr() as *const __m128i)) })
    }

    /// The raw bits of the four lanes, in lane order.
    #[inline(always)]
    pub fn to_bits(self) -> [u32; 4] {
        let mut result = Aligned16([0u32; 4]);
        unsafe {
            _mm_store_si128(
                result.0.as_mut_ptr() as *mut __m128i,
                _mm_castps_si128(self.0),
            )
        };
        result.0
    }

    #[inline(always)]
    pub fn from_raw(values: __m128) -> Self {
        Self(values)
    }

    #[inline(always)]
    pub fn into_raw(self) -> __m128 {
        self.0
    }
}

impl Packet for PackedComplex2 {
    type Scalar = Complex<f32>;

    const SIZE: usize = 2;
    const ALIGNMENT: usize = PACKET_ALIGNMENT;
    const CAPS: PacketCaps = COMPLEX_PACKET_CAPS;

    #[inline(always)]
    fn splat(value: &Complex<f32>) -> Self {
        unsafe { Self::broadcast(value) }
    }

    /// A complex f32 is only 8 bytes, so it can start in either half of a 16-byte block.
    /// Aligned addresses go through the low half of the register, everything else through the high half.
    /// Neither path touches memory outside the value itself.
    #[inline(always)]
    unsafe fn broadcast(ptr: *const Complex<f32>) -> Self {
        if (ptr as usize) % PACKET_ALIGNMENT == 0 {
            let low = _mm_castsi128_ps(_mm_loadl_epi64(ptr as *const __m128i));
            Self(duplicate_lo_f32(low))
        } else {
            let bits = (ptr as *const i64).read_unaligned();
            let high = _mm_castsi128_ps(_mm_set_epi64x(bits, 0));
            Self(duplicate_hi_f32(high))
        }
    }

    #[inline(always)]
    unsafe fn load_aligned(ptr: *const Complex<f32>) -> Self {
        debug_assert_eq!(
            ptr as usize % PACKET_ALIGNMENT,
            0,
            "aligned load from a misaligned address"
        );
        Self(_mm_load_ps(ptr as *const f32))
    }

    #[inline(always)]
    unsafe fn load_unaligned(ptr: *const Complex<f32>) -> Self {
        Self(_mm_loadu_ps(ptr as *const f32))
    }

    #[inline(always)]
    unsafe fn store_aligned(ptr: *mut Complex<f32>, packet: Self) {
        debug_assert_eq!(
            ptr as usize % PACKET_ALIGNMENT,
            0,
            "aligned store to a misaligned address"
        );
        _mm_store_ps(ptr as *mut f32, packet.0);
    }

    #[inline(always)]
    unsafe fn store_unaligned(ptr: *mut Complex<f32>, packet: Self) {
        _mm_storeu_ps(ptr as *mut f32, packet.0);
    }

    #[inline(always)]
    fn prefetch(ptr: *const Complex<f32>) {
        unsafe { _mm_prefetch::<_MM_HINT_T0>(ptr as *const i8) }
    }

    #[inline(always)]
    fn first(self) -> Complex<f32> {
        let mut result = Aligned16([Complex::zero(); 2]);
        unsafe { _mm_store_ps(result.0.as_mut_ptr() as *mut f32, self.0) };
        result.0[0]
    }

    #[inline(always)]
    fn add(a: Self, b: Self) -> Self {
        Self(unsafe { _mm_add_ps(a.0, b.0) })
    }
    #[inline(always)]
    fn sub(a: Self, b: Self) -> Self {
        Self(unsafe { _mm_sub_ps(a.0, b.0) })
    }
    #[inline(always)]
    fn negate(a: Self) -> Self {
        Self(unsafe { _mm_sub_ps(_mm_setzero_ps(), a.0) })
    }
    #[inline(always)]
    fn conjugate(a: Self) -> Self {
        Self(unsafe { conjugate_f32(a.0) })
    }
    #[inline(always)]
    fn mul(a: Self, b: Self) -> Self {
        Self(unsafe { mul_complex_f32(a.0, b.0) })
    }
    #[inline(always)]
    fn div(a: Self, b: Self) -> Self {
        Self(unsafe { div_complex_f32(a.0, b.0) })
    }

    #[inline(always)]
    fn and(a: Self, b: Self) -> Self {
        Self(unsafe { _mm_and_ps(a.0, b.0) })
    }
    #[inline(always)]
    fn or(a: Self, b: Self) -> Self {
        Self(unsafe { _mm_or_ps(a.0, b.0) })
    }
    #[inline(always)]
    fn xor(a: Self, b: Self) -> Self {
        Self(unsafe { _mm_xor_ps(a.0, b.0) })
    }
    #[inline(always)]
    fn andnot(a: Self, b: Self) -> Self {
        // _mm_andnot_ps negates its first argument
        Self(unsafe { _mm_andnot_ps(b.0, a.0) })
    }

    #[inline(always)]
    fn reverse(self) -> Self {
        Self(unsafe { reverse_complex_elements_f32(self.0) })
    }

    #[inline(always)]
    fn reduce_sum(self) -> Complex<f32> {
        Packet::add(self, self.reverse()).first()
    }

    #[inline(always)]
    fn reduce_product(self) -> Complex<f32> {
        Packet::mul(self, self.reverse()).first()
    }

    #[inline(always)]
    fn reduce_sum_pair(p0: Self, p1: Self) -> Self {
        // [p0.e1, p1.e0] + [p0.e0, p1.e1]
        // --> element 0 holds the sum of p0, element 1 holds the sum of p1
        unsafe {
            let odd = extract_hi_lo_f32(p0.0, p1.0);
            let even = extract_lo_hi_f32(p0.0, p1.0);
            Self(_mm_add_ps(odd, even))
        }
    }

    #[inline(always)]
    fn align<const OFFSET: usize>(first: &mut Self, second: Self) {
        let () = AlignOffset::<OFFSET, 2>::VALID;
        if OFFSET == 1 {
            first.0 = unsafe { extract_hi_lo_f32(first.0, second.0) };
        }
    }
}

impl Add for PackedComplex2 {
    type Output = Self;
    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Packet::add(self, rhs)
    }
}
impl Sub for PackedComplex2 {
    type Output = Self;
    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Packet::sub(self, rhs)
    }
}
impl Mul for PackedComplex2 {
    type Output = Self;
    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        Packet::mul(self, rhs)
    }
}
impl Div for PackedComplex2 {
    type Output = Self;
    #[inline(always)]
    fn div(self, rhs: Self) -> Self {
        Packet::div(self, rhs)
    }
}
impl Neg for PackedComplex2 {
    type Output = Self;
    #[inline(always)]
    fn neg(self) -> Self {
        Packet::negate(self)
    }
}
impl AddAssign for PackedComplex2 {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Self) {
        *self = Packet::add(*self, rhs);
    }
}
impl SubAssign for PackedComplex2 {
    #[inline(always)]
    fn sub_assign(&mut self, rhs: Self) {
        *self = Packet::sub(*self, rhs);
    }
}
impl MulAssign for PackedComplex2 {
    #[inline(always)]
    fn mul_assign(&mut self, rhs: Self) {
        *self = Packet::mul(*self, rhs);
    }
}
impl DivAssign for PackedComplex2 {
    #[inline(always)]
    fn div_assign(&mut self, rhs: Self) {
        *self = Packet::div(*self, rhs);
    }
}
