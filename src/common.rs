use std::fmt::Debug;

/// Which operations a packet type supports natively.
///
/// Generic kernels read these flags at compile time, and fall back to scalar loops for anything that isn't supported.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PacketCaps {
    pub vectorizable: bool,
    pub has_add: bool,
    pub has_sub: bool,
    pub has_mul: bool,
    pub has_div: bool,
    pub has_negate: bool,
    pub has_abs: bool,
    pub has_abs2: bool,
    pub has_min: bool,
    pub has_max: bool,
    pub has_set_linear: bool,
}

/// The capabilities shared by every complex packet: the field operations, but nothing that needs an ordering or a real-valued result.
pub const COMPLEX_PACKET_CAPS: PacketCaps = PacketCaps {
    vectorizable: true,
    has_add: true,
    has_sub: true,
    has_mul: true,
    has_div: true,
    has_negate: true,
    has_abs: false,
    has_abs2: false,
    has_min: false,
    has_max: false,
    has_set_linear: false,
};

/// The operation set every packet specialization provides to generic kernels.
///
/// A packet holds `SIZE` scalars in one value. All arithmetic is elementwise unless stated otherwise.
/// Memory operations are `unsafe`: the caller guarantees that the pointer is valid for `SIZE` scalars
/// (one scalar for `broadcast`), and for the aligned variants, that it is aligned to `ALIGNMENT` bytes.
pub trait Packet: Copy + Debug + Send + Sync + 'static {
    type Scalar: Copy + Debug;

    const SIZE: usize;
    const ALIGNMENT: usize;
    const CAPS: PacketCaps;

    /// Fills every element with `value`.
    fn splat(value: &Self::Scalar) -> Self;

    /// Loads one scalar from `ptr` and copies it into every element.
    unsafe fn broadcast(ptr: *const Self::Scalar) -> Self;

    unsafe fn load_aligned(ptr: *const Self::Scalar) -> Self;
    unsafe fn load_unaligned(ptr: *const Self::Scalar) -> Self;
    unsafe fn store_aligned(ptr: *mut Self::Scalar, packet: Self);
    unsafe fn store_unaligned(ptr: *mut Self::Scalar, packet: Self);

    /// Hints that `ptr` will be read soon. Never faults, whatever the pointer.
    fn prefetch(ptr: *const Self::Scalar);

    /// Returns element 0.
    fn first(self) -> Self::Scalar;

    fn add(a: Self, b: Self) -> Self;
    fn sub(a: Self, b: Self) -> Self;
    fn negate(a: Self) -> Self;
    fn conjugate(a: Self) -> Self;
    fn mul(a: Self, b: Self) -> Self;
    fn div(a: Self, b: Self) -> Self;

    // Raw bit operations, with no numeric meaning
    fn and(a: Self, b: Self) -> Self;
    fn or(a: Self, b: Self) -> Self;
    fn xor(a: Self, b: Self) -> Self;
    /// `a & !b`
    fn andnot(a: Self, b: Self) -> Self;

    /// Reverses the order of the elements.
    fn reverse(self) -> Self;

    /// Sum of all elements.
    fn reduce_sum(self) -> Self::Scalar;

    /// Product of all elements.
    fn reduce_product(self) -> Self::Scalar;

    /// Combines two accumulators into one, for log-depth reduction trees.
    ///
    /// The total is preserved: `reduce_sum(reduce_sum_pair(p0, p1))` equals `reduce_sum(p0) + reduce_sum(p1)` up to rounding.
    /// The order in which terms are added is fixed for a given packet type.
    fn reduce_sum_pair(p0: Self, p1: Self) -> Self;

    /// Shifts the window `[first, second]` forward by `OFFSET` elements, and writes the first `SIZE` elements of the result to `first`.
    ///
    /// `OFFSET` must be smaller than `SIZE`, which is checked at compile time.
    fn align<const OFFSET: usize>(first: &mut Self, second: Self);
}

// Fails to compile when OFFSET isn't a valid element offset for a packet of SIZE elements
pub(crate) struct AlignOffset<const OFFSET: usize, const SIZE: usize>;

impl<const OFFSET: usize, const SIZE: usize> AlignOffset<OFFSET, SIZE> {
    pub(crate) const VALID: () = assert!(OFFSET < SIZE, "align offset must be smaller than the packet size");
}
