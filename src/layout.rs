//! Lane layout of a packed-complex register, and the fixed recipes used to rearrange it.
//!
//! A 128-bit register holds four `f32` lanes, interpreted as two interleaved complex numbers:
//! ```text
//! lane:   0      1      2      3
//! value:  a.re   a.im   b.re   b.im
//! ```
//! Every recipe in this module is a `const`, so they all exist before the first arithmetic call,
//! and no initialization order has to be maintained.

/// Byte alignment required by the aligned loads and stores of a packed-complex register.
pub const PACKET_ALIGNMENT: usize = 16;

/// XOR pattern that flips the sign bit of both imaginary lanes (bytes 4-7 and 12-15), and nothing else.
pub const CONJUGATE_SIGN_MASK: [u32; 4] = [0, 0x8000_0000, 0, 0x8000_0000];

/// A fixed permutation of the four lanes of a register.
///
/// `lanes[i]` is the source lane that ends up in destination lane `i`.
/// The same recipe can be expressed as a 16-byte gather pattern (for byte-shuffle instruction sets),
/// or as a `shufps` immediate (for SSE).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PermutationMask {
    lanes: [u8; 4],
}

impl PermutationMask {
    pub const fn new(lanes: [u8; 4]) -> Self {
        assert!(
            lanes[0] < 4 && lanes[1] < 4 && lanes[2] < 4 && lanes[3] < 4,
            "lane index out of range"
        );
        Self { lanes }
    }

    #[inline(always)]
    pub const fn lanes(&self) -> [u8; 4] {
        self.lanes
    }

    /// Expands this recipe into a byte gather pattern: destination byte `4*i + k` reads source byte `4*lanes[i] + k`.
    pub const fn gather_bytes(&self) -> [u8; 16] {
        let mut bytes = [0u8; 16];
        let mut lane = 0;
        while lane < 4 {
            let mut byte = 0;
            while byte < 4 {
                bytes[lane * 4 + byte] = self.lanes[lane] * 4 + byte as u8;
                byte += 1;
            }
            lane += 1;
        }
        bytes
    }

    /// Encodes this recipe as the immediate of a `shufps` whose two inputs are the same register.
    pub const fn shuffle_immediate(&self) -> i32 {
        (self.lanes[0] as i32)
            | ((self.lanes[1] as i32) << 2)
            | ((self.lanes[2] as i32) << 4)
            | ((self.lanes[3] as i32) << 6)
    }

    /// Applies this recipe to plain lane values.
    #[inline(always)]
    pub fn apply<T: Copy>(&self, values: [T; 4]) -> [T; 4] {
        [
            values[self.lanes[0] as usize],
            values[self.lanes[1] as usize],
            values[self.lanes[2] as usize],
            values[self.lanes[3] as usize],
        ]
    }
}

// a.re, a.im, b.re, b.im --> a.re, a.re, b.re, b.re
pub const SELECT_REAL_PAIRS: PermutationMask = PermutationMask::new([0, 0, 2, 2]);

// a.re, a.im, b.re, b.im --> a.im, a.im, b.im, b.im
pub const SELECT_IMAG_PAIRS: PermutationMask = PermutationMask::new([1, 1, 3, 3]);

// a.re, a.im, b.re, b.im --> a.im, a.re, b.im, b.re
pub const REVERSE_WITHIN_PAIR: PermutationMask = PermutationMask::new([1, 0, 3, 2]);

// a.re, a.im, b.re, b.im --> b.re, b.im, a.re, a.im
pub const REVERSE_ACROSS_PAIRS: PermutationMask = PermutationMask::new([2, 3, 0, 1]);

// a.re, a.im, b.re, b.im --> a.re, a.im, a.re, a.im
pub const BROADCAST_FROM_LOW_HALF: PermutationMask = PermutationMask::new([0, 1, 0, 1]);

// a.re, a.im, b.re, b.im --> b.re, b.im, b.re, b.im
pub const BROADCAST_FROM_HIGH_HALF: PermutationMask = PermutationMask::new([2, 3, 2, 3]);
