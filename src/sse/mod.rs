mod sse_utils;
mod sse_vector;

pub use self::sse_vector::PackedComplex2;
