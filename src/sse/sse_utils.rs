use core::arch::x86_64::*;

use crate::layout::{
    BROADCAST_FROM_HIGH_HALF, BROADCAST_FROM_LOW_HALF, CONJUGATE_SIGN_MASK, REVERSE_ACROSS_PAIRS,
    REVERSE_WITHIN_PAIR, SELECT_IMAG_PAIRS, SELECT_REAL_PAIRS,
};

//   ____  _            __  __ _
//  / ___|| |__  _   _ / _|/ _| | ___  ___
//  \___ \| '_ \| | | | |_| |_| |/ _ \/ __|
//   ___) | | | | |_| |  _|  _| |  __/\__ \
//  |____/|_| |_|\__,_|_| |_| |_|\___||___/
//
// These six shuffles, plus the sign XOR below, are everything that depends on the SSE lane order.

const SELECT_REAL_IMM: i32 = SELECT_REAL_PAIRS.shuffle_immediate();
const SELECT_IMAG_IMM: i32 = SELECT_IMAG_PAIRS.shuffle_immediate();
const REVERSE_WITHIN_PAIR_IMM: i32 = REVERSE_WITHIN_PAIR.shuffle_immediate();
const REVERSE_ACROSS_PAIRS_IMM: i32 = REVERSE_ACROSS_PAIRS.shuffle_immediate();
const BROADCAST_LOW_IMM: i32 = BROADCAST_FROM_LOW_HALF.shuffle_immediate();
const BROADCAST_HIGH_IMM: i32 = BROADCAST_FROM_HIGH_HALF.shuffle_immediate();

// Duplicate real parts
// values: a.re, a.im, b.re, b.im
// --> a.re, a.re, b.re, b.re
#[inline(always)]
pub unsafe fn select_real_f32(values: __m128) -> __m128 {
    _mm_shuffle_ps(values, values, SELECT_REAL_IMM)
}

// Duplicate imaginary parts
// values: a.re, a.im, b.re, b.im
// --> a.im, a.im, b.im, b.im
#[inline(always)]
pub unsafe fn select_imag_f32(values: __m128) -> __m128 {
    _mm_shuffle_ps(values, values, SELECT_IMAG_IMM)
}

// Swap re and im of each complex
// values: a.re, a.im, b.re, b.im
// --> a.im, a.re, b.im, b.re
#[inline(always)]
pub unsafe fn reverse_within_pair_f32(values: __m128) -> __m128 {
    _mm_shuffle_ps(values, values, REVERSE_WITHIN_PAIR_IMM)
}

// Reverse complex
// values: a.re, a.im, b.re, b.im
// --> b.re, b.im, a.re, a.im
#[inline(always)]
pub unsafe fn reverse_complex_elements_f32(values: __m128) -> __m128 {
    _mm_shuffle_ps(values, values, REVERSE_ACROSS_PAIRS_IMM)
}

// Duplicate low (1st) complex
// values: a.re, a.im, b.re, b.im
// --> a.re, a.im, a.re, a.im
#[inline(always)]
pub unsafe fn duplicate_lo_f32(values: __m128) -> __m128 {
    _mm_shuffle_ps(values, values, BROADCAST_LOW_IMM)
}

// Duplicate high (2nd) complex
// values: a.re, a.im, b.re, b.im
// --> b.re, b.im, b.re, b.im
#[inline(always)]
pub unsafe fn duplicate_hi_f32(values: __m128) -> __m128 {
    _mm_shuffle_ps(values, values, BROADCAST_HIGH_IMM)
}

// Conjugate both complex, by flipping the sign bits of the imaginary lanes. NaN payloads are left alone.
// values: a.re, a.im, b.re, b.im
// --> a.re, -a.im, b.re, -b.im
#[inline(always)]
pub unsafe fn conjugate_f32(values: __m128) -> __m128 {
    let sign_mask = _mm_castsi128_ps(_mm_loadu_si128(
        CONJUGATE_SIGN_MASK.as_ptr() as *const __m128i
    ));
    _mm_xor_ps(values, sign_mask)
}

// Pack high (2nd) and low (1st) complex
// left: l1.re, l1.im, l2.re, l2.im
// right: r1.re, r1.im, r2.re, r2.im
// --> l2.re, l2.im, r1.re, r1.im
#[inline(always)]
pub unsafe fn extract_hi_lo_f32(left: __m128, right: __m128) -> __m128 {
    _mm_shuffle_ps(left, right, 0x4E)
}

// Pack low (1st) and high (2nd) complex
// left: l1.re, l1.im, l2.re, l2.im
// right: r1.re, r1.im, r2.re, r2.im
// --> l1.re, l1.im, r2.re, r2.im
#[inline(always)]
pub unsafe fn extract_lo_hi_f32(left: __m128, right: __m128) -> __m128 {
    _mm_shuffle_ps(left, right, 0xE4)
}

//  __  __       _   _
// |  \/  | __ _| |_| |__
// | |\/| |/ _` | __| '_ \
// | |  | | (_| | |_| | | |
// |_|  |_|\__,_|\__|_| |_|
//

// Complex multiplication.
// Each input contains two complex values, which are multiplied in parallel.
// Only uses SSE2: the subtraction of the im*im product is done by conjugating before the final add.
#[inline(always)]
pub unsafe fn mul_complex_f32(left: __m128, right: __m128) -> __m128 {
    // left.re * right
    let mut temp1 = select_real_f32(left);
    temp1 = _mm_mul_ps(temp1, right);

    // left.im * right, then moved into place with the sign of the im*im term flipped
    let mut temp2 = select_imag_f32(left);
    temp2 = _mm_mul_ps(temp2, right);
    temp2 = conjugate_f32(temp2);
    temp2 = reverse_within_pair_f32(temp2);

    _mm_add_ps(temp1, temp2)
}

// Complex division.
// Multiplies by the conjugate of the divisor, then divides both lanes of each complex by the squared modulus of the divisor.
#[inline(always)]
pub unsafe fn div_complex_f32(left: __m128, right: __m128) -> __m128 {
    let numerator = mul_complex_f32(left, conjugate_f32(right));

    // re^2, im^2 --> re^2 + im^2 in both lanes
    let squares = _mm_mul_ps(right, right);
    let denominator = _mm_add_ps(squares, reverse_within_pair_f32(squares));

    _mm_div_ps(numerator, denominator)
}
