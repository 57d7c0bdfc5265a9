use std::ops::{Deref, DerefMut};

use crate::Packet;

// A trait to handle reading from an array of scalars into packets.
// Indexes are in scalars, not packets. Bounds are only checked in debug builds.
pub trait PacketArray<P: Packet>: Deref {
    // Load P::SIZE consecutive scalars starting at index.
    unsafe fn load_packet(&self, index: usize) -> P;
    // Same as load_packet, but the address of element `index` must be aligned to P::ALIGNMENT.
    unsafe fn load_packet_aligned(&self, index: usize) -> P;
    // Load a single scalar and copy it to every element of a packet.
    unsafe fn broadcast_packet(&self, index: usize) -> P;
}

impl<P: Packet> PacketArray<P> for &[P::Scalar] {
    #[inline(always)]
    unsafe fn load_packet(&self, index: usize) -> P {
        debug_assert!(self.len() >= index + P::SIZE);
        P::load_unaligned(self.as_ptr().add(index))
    }

    #[inline(always)]
    unsafe fn load_packet_aligned(&self, index: usize) -> P {
        debug_assert!(self.len() >= index + P::SIZE);
        P::load_aligned(self.as_ptr().add(index))
    }

    #[inline(always)]
    unsafe fn broadcast_packet(&self, index: usize) -> P {
        debug_assert!(self.len() >= index + 1);
        P::broadcast(self.as_ptr().add(index))
    }
}
impl<P: Packet> PacketArray<P> for &mut [P::Scalar] {
    #[inline(always)]
    unsafe fn load_packet(&self, index: usize) -> P {
        debug_assert!(self.len() >= index + P::SIZE);
        P::load_unaligned(self.as_ptr().add(index))
    }

    #[inline(always)]
    unsafe fn load_packet_aligned(&self, index: usize) -> P {
        debug_assert!(self.len() >= index + P::SIZE);
        P::load_aligned(self.as_ptr().add(index))
    }

    #[inline(always)]
    unsafe fn broadcast_packet(&self, index: usize) -> P {
        debug_assert!(self.len() >= index + 1);
        P::broadcast(self.as_ptr().add(index))
    }
}

// A trait to handle writing packets to an array of scalars.
pub trait PacketArrayMut<P: Packet>: PacketArray<P> + DerefMut {
    // Store all elements of a packet to the array, starting at index.
    unsafe fn store_packet(&mut self, packet: P, index: usize);
    // Same as store_packet, but the address of element `index` must be aligned to P::ALIGNMENT.
    unsafe fn store_packet_aligned(&mut self, packet: P, index: usize);
}

impl<P: Packet> PacketArrayMut<P> for &mut [P::Scalar] {
    #[inline(always)]
    unsafe fn store_packet(&mut self, packet: P, index: usize) {
        debug_assert!(self.len() >= index + P::SIZE);
        P::store_unaligned(self.as_mut_ptr().add(index), packet)
    }

    #[inline(always)]
    unsafe fn store_packet_aligned(&mut self, packet: P, index: usize) {
        debug_assert!(self.len() >= index + P::SIZE);
        P::store_aligned(self.as_mut_ptr().add(index), packet)
    }
}

#[cfg(test)]
mod unit_tests {
    use num_complex::Complex;
    use num_traits::Zero;

    use super::{PacketArray, PacketArrayMut};
    use crate::Packet;

    #[test]
    fn test_scalar_array() {
        let data: &[Complex<f32>] = &[Complex::new(0.0, 0.5), Complex::new(1.0, 1.5)];
        let mut output: &mut [Complex<f32>] = &mut [Complex::zero(); 2];

        for index in 0..data.len() {
            let value: Complex<f32> = unsafe { data.load_packet(index) };
            let broadcast: Complex<f32> = unsafe { data.broadcast_packet(index) };
            assert_eq!(value, broadcast);
            unsafe { output.store_packet(Packet::conjugate(value), index) };
        }
        assert_eq!(output, &[Complex::new(0.0, -0.5), Complex::new(1.0, -1.5)]);
    }

    #[cfg(all(target_arch = "x86_64", feature = "sse"))]
    #[test]
    fn test_sse_array() {
        use crate::PackedComplex2;

        let data: &[Complex<f32>] = &[
            Complex::new(0.0, 0.5),
            Complex::new(1.0, 1.5),
            Complex::new(2.0, 2.5),
            Complex::new(3.0, 3.5),
        ];

        let mut output: &mut [Complex<f32>] = &mut [Complex::zero(); 4];
        unsafe {
            let lo: PackedComplex2 = data.load_packet(0);
            let mid: PackedComplex2 = data.load_packet(1);
            let hi: PackedComplex2 = data.broadcast_packet(3);
            assert_eq!(lo.to_array(), [data[0], data[1]]);
            assert_eq!(mid.to_array(), [data[1], data[2]]);
            assert_eq!(hi.to_array(), [data[3], data[3]]);

            output.store_packet(hi, 0);
            output.store_packet(lo, 2);
        }
        assert_eq!(output, &[data[3], data[3], data[0], data[1]]);
    }
}
