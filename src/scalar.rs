use num_complex::Complex;

use crate::common::{AlignOffset, Packet, PacketCaps, COMPLEX_PACKET_CAPS};

// Applies a bit operation to the raw bits of both parts
#[inline(always)]
fn map_bits(a: Complex<f32>, b: Complex<f32>, f: impl Fn(u32, u32) -> u32) -> Complex<f32> {
    Complex::new(
        f32::from_bits(f(a.re.to_bits(), b.re.to_bits())),
        f32::from_bits(f(a.im.to_bits(), b.im.to_bits())),
    )
}

/// A single `Complex<f32>` is a packet of one element.
///
/// This is what generic kernels fall back to for the remainder of a buffer, and for operations a wider packet doesn't support.
/// It computes exactly what `PackedComplex2` computes, one element at a time.
impl Packet for Complex<f32> {
    type Scalar = Complex<f32>;

    const SIZE: usize = 1;
    const ALIGNMENT: usize = std::mem::align_of::<Complex<f32>>();
    const CAPS: PacketCaps = PacketCaps {
        vectorizable: false,
        ..COMPLEX_PACKET_CAPS
    };

    #[inline(always)]
    fn splat(value: &Complex<f32>) -> Self {
        *value
    }

    #[inline(always)]
    unsafe fn broadcast(ptr: *const Complex<f32>) -> Self {
        ptr.read_unaligned()
    }

    #[inline(always)]
    unsafe fn load_aligned(ptr: *const Complex<f32>) -> Self {
        ptr.read()
    }
    #[inline(always)]
    unsafe fn load_unaligned(ptr: *const Complex<f32>) -> Self {
        ptr.read_unaligned()
    }
    #[inline(always)]
    unsafe fn store_aligned(ptr: *mut Complex<f32>, packet: Self) {
        ptr.write(packet)
    }
    #[inline(always)]
    unsafe fn store_unaligned(ptr: *mut Complex<f32>, packet: Self) {
        ptr.write_unaligned(packet)
    }

    #[inline(always)]
    fn prefetch(_ptr: *const Complex<f32>) {}

    #[inline(always)]
    fn first(self) -> Complex<f32> {
        self
    }

    #[inline(always)]
    fn add(a: Self, b: Self) -> Self {
        a + b
    }
    #[inline(always)]
    fn sub(a: Self, b: Self) -> Self {
        a - b
    }
    #[inline(always)]
    fn negate(a: Self) -> Self {
        // 0 - a rather than -a, to match the sign of zero produced by the SIMD packets
        Complex::new(0.0 - a.re, 0.0 - a.im)
    }
    #[inline(always)]
    fn conjugate(a: Self) -> Self {
        a.conj()
    }
    #[inline(always)]
    fn mul(a: Self, b: Self) -> Self {
        a * b
    }
    #[inline(always)]
    fn div(a: Self, b: Self) -> Self {
        a / b
    }

    #[inline(always)]
    fn and(a: Self, b: Self) -> Self {
        map_bits(a, b, |x, y| x & y)
    }
    #[inline(always)]
    fn or(a: Self, b: Self) -> Self {
        map_bits(a, b, |x, y| x | y)
    }
    #[inline(always)]
    fn xor(a: Self, b: Self) -> Self {
        map_bits(a, b, |x, y| x ^ y)
    }
    #[inline(always)]
    fn andnot(a: Self, b: Self) -> Self {
        map_bits(a, b, |x, y| x & !y)
    }

    #[inline(always)]
    fn reverse(self) -> Self {
        self
    }

    #[inline(always)]
    fn reduce_sum(self) -> Complex<f32> {
        self
    }
    #[inline(always)]
    fn reduce_product(self) -> Complex<f32> {
        self
    }

    // There's only one element to hold the result, so both accumulators are folded into it
    #[inline(always)]
    fn reduce_sum_pair(p0: Self, p1: Self) -> Self {
        p0 + p1
    }

    #[inline(always)]
    fn align<const OFFSET: usize>(_first: &mut Self, _second: Self) {
        let () = AlignOffset::<OFFSET, 1>::VALID;
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_examples() {
        let x = Complex::new(1.0f32, 2.0);
        let y = Complex::new(3.0f32, 4.0);

        assert_eq!(Packet::mul(x, y), Complex::new(-5.0, 10.0));
        assert_eq!(Packet::div(x, y), Complex::new(11.0, 2.0) / 25.0);
        assert_eq!(Packet::conjugate(x), Complex::new(1.0, -2.0));
        assert_eq!(Packet::negate(x), Complex::new(-1.0, -2.0));
        assert_eq!(Packet::reduce_sum_pair(x, y), Complex::new(4.0, 6.0));
    }

    #[test]
    fn test_negate_zero_sign() {
        let zero = Complex::new(-0.0f32, 0.0);
        let negated = Packet::negate(zero);
        assert_eq!(negated.re.to_bits(), 0);
        assert_eq!(negated.im.to_bits(), 0);
    }

    #[test]
    fn test_bitwise() {
        let a = Complex::new(f32::from_bits(0xFF00_FF00), f32::from_bits(0x0F0F_0F0F));
        let b = Complex::new(f32::from_bits(0xF0F0_F0F0), f32::from_bits(0xFFFF_0000));

        let res = Packet::andnot(a, b);
        assert_eq!(res.re.to_bits(), 0x0F00_0F00);
        assert_eq!(res.im.to_bits(), 0x0000_0F0F);

        let res = Packet::xor(a, b);
        assert_eq!(res.re.to_bits(), 0x0FF0_0FF0);
        assert_eq!(res.im.to_bits(), 0xF0F0_0F0F);
    }

    #[test]
    fn test_memory() {
        let mut buffer = [Complex::new(1.0f32, 2.0), Complex::new(3.0, 4.0)];
        unsafe {
            assert_eq!(<Complex<f32> as Packet>::load_aligned(buffer.as_ptr().add(1)), buffer[1]);
            assert_eq!(<Complex<f32> as Packet>::broadcast(buffer.as_ptr()), buffer[0]);
            <Complex<f32> as Packet>::store_unaligned(buffer.as_mut_ptr(), Complex::new(5.0, 6.0));
        }
        assert_eq!(buffer[0], Complex::new(5.0, 6.0));

        let mut first = buffer[0];
        <Complex<f32> as Packet>::align::<0>(&mut first, buffer[1]);
        assert_eq!(first, buffer[0]);
    }
}
