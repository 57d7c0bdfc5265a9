#![feature(test)]
extern crate complex_packet;
extern crate test;

use complex_packet::num_complex::Complex;
use complex_packet::num_traits::Zero;
use complex_packet::{ConjHelper, ConjMul, Packet, PacketArray, PacketArrayMut};
use paste::paste;
use test::Bencher;

fn make_buffer(len: usize) -> Vec<Complex<f32>> {
    (0..len)
        .map(|i| Complex::new(i as f32 * 0.25, 1.0 - i as f32 * 0.125))
        .collect()
}

// Elementwise product of two buffers, with the right operand conjugated
fn bench_mul_conj<P: Packet<Scalar = Complex<f32>>>(b: &mut Bencher, len: usize) {
    let left = make_buffer(len);
    let right = make_buffer(len);
    let mut output = vec![Complex::zero(); len];
    let helper = ConjHelper::<false, true>;

    b.iter(|| {
        let input_left: &[Complex<f32>] = &left;
        let input_right: &[Complex<f32>] = &right;
        let mut out: &mut [Complex<f32>] = &mut output;
        for i in (0..len).step_by(P::SIZE) {
            unsafe {
                let x: P = input_left.load_packet(i);
                let y: P = input_right.load_packet(i);
                out.store_packet(ConjMul::<P>::pmul(&helper, x, y), i);
            }
        }
    });
}

// Elementwise quotient of two buffers
fn bench_div<P: Packet<Scalar = Complex<f32>>>(b: &mut Bencher, len: usize) {
    let left = make_buffer(len);
    let right: Vec<_> = make_buffer(len).iter().map(|c| c + Complex::new(1.0, 1.0)).collect();
    let mut output = vec![Complex::zero(); len];

    b.iter(|| {
        let input_left: &[Complex<f32>] = &left;
        let input_right: &[Complex<f32>] = &right;
        let mut out: &mut [Complex<f32>] = &mut output;
        for i in (0..len).step_by(P::SIZE) {
            unsafe {
                let x: P = input_left.load_packet(i);
                let y: P = input_right.load_packet(i);
                out.store_packet(P::div(x, y), i);
            }
        }
    });
}

// Sum of a buffer with two accumulators
fn bench_sum<P: Packet<Scalar = Complex<f32>>>(b: &mut Bencher, len: usize) {
    let buffer = make_buffer(len);
    b.iter(|| {
        let input: &[Complex<f32>] = &buffer;
        let zero = Complex::zero();
        let mut acc0 = P::splat(&zero);
        let mut acc1 = P::splat(&zero);
        for i in (0..len).step_by(P::SIZE * 2) {
            unsafe {
                acc0 = P::add(acc0, input.load_packet(i));
                acc1 = P::add(acc1, input.load_packet(i + P::SIZE));
            }
        }
        P::reduce_sum_pair(acc0, acc1).reduce_sum()
    });
}

// Lengths must be multiples of 4, so that every packet type divides them evenly
macro_rules! make_benches {
    ($name:ident, $packet:ty, { $($len:literal),* }) => {
        paste! {
            $(
                #[bench]
                fn [<bench_ $name _mul_conj_ $len>](b: &mut Bencher) {
                    bench_mul_conj::<$packet>(b, $len);
                }

                #[bench]
                fn [<bench_ $name _div_ $len>](b: &mut Bencher) {
                    bench_div::<$packet>(b, $len);
                }

                #[bench]
                fn [<bench_ $name _sum_ $len>](b: &mut Bencher) {
                    bench_sum::<$packet>(b, $len);
                }
            )*
        }
    }
}

make_benches!(scalar, Complex<f32>, { 64, 1024, 16384 });

#[cfg(all(target_arch = "x86_64", feature = "sse"))]
make_benches!(sse, complex_packet::PackedComplex2, { 64, 1024, 16384 });
