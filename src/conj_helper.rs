use crate::Packet;

/// Multiplies packets with either operand implicitly conjugated.
///
/// The two flags are resolved at compile time, so a kernel that needs the Hermitian transpose of an operand
/// never has to materialize a conjugated copy of it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ConjHelper<const CONJ_LHS: bool, const CONJ_RHS: bool>;

pub trait ConjMul<P: Packet> {
    fn pmul(&self, a: P, b: P) -> P;

    #[inline(always)]
    fn pmadd(&self, x: P, y: P, c: P) -> P {
        P::add(self.pmul(x, y), c)
    }
}

impl<P: Packet> ConjMul<P> for ConjHelper<false, false> {
    #[inline(always)]
    fn pmul(&self, a: P, b: P) -> P {
        P::mul(a, b)
    }
}

impl<P: Packet> ConjMul<P> for ConjHelper<false, true> {
    #[inline(always)]
    fn pmul(&self, a: P, b: P) -> P {
        P::mul(a, P::conjugate(b))
    }
}

impl<P: Packet> ConjMul<P> for ConjHelper<true, false> {
    #[inline(always)]
    fn pmul(&self, a: P, b: P) -> P {
        P::mul(P::conjugate(a), b)
    }
}

impl<P: Packet> ConjMul<P> for ConjHelper<true, true> {
    // conj(a) * conj(b) == conj(a * b), which only needs one conjugation
    #[inline(always)]
    fn pmul(&self, a: P, b: P) -> P {
        P::conjugate(P::mul(a, b))
    }
}
