use tessera_common::item_with;

/// Trait for floating-point types, so that sampling can be generic over {f32, f64} without
/// having to use [weird macros](tessera_common::item_with).
///
/// This is only intended to be implemented on floating-point types.
pub trait Float: num_traits::Float + num_traits::FloatConst + nalgebra::Scalar {
    const ZERO: Self;
    const ONE: Self;
    const TWO: Self;

    /// Lossy conversion from a grid index.
    fn from_index(i: usize) -> Self;

    /// Narrow to the `f32` stored in attribute buffers.
    fn to_f32(self) -> f32;
}

// this macro lets us impl Float for both f32 and f64 without having to copy/paste,
// but it feels very goofy
item_with! {Real: f32, f64 => impl Float for Real {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const TWO: Self = 2.0;

    #[inline(always)]
    fn from_index(i: usize) -> Self {
        i as Self
    }

    #[inline(always)]
    #[allow(clippy::unnecessary_cast)]
    fn to_f32(self) -> f32 {
        self as f32
    }
}}
