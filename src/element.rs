use std::fmt::Debug;

/// Value written past the logical end of every backing store.
pub const GUARD_SENTINEL: u16 = 999;

mod sealed {
    pub trait Sealed {}
}

/// Fixed-width unsigned integer that can be stored in a [`RingBuffer`].
///
/// Implementors must be valid when all bits are zero, since the backing store
/// is zero-initialized on allocation, and must be able to hold
/// [`GUARD_SENTINEL`]. The trait is sealed for that reason.
///
/// [`RingBuffer`]: crate::RingBuffer
pub trait Element: Copy + PartialEq + Debug + Send + Sync + sealed::Sealed + 'static {
    /// Guard value for this element width
    const GUARD: Self;
}

macro_rules! impl_element {
    ($($ty:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Element for $ty {
                const GUARD: Self = GUARD_SENTINEL as $ty;
            }
        )*
    };
}

impl_element!(u16, u32, u64, usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_is_same_for_every_width() {
        assert_eq!(u16::GUARD, 999);
        assert_eq!(u32::GUARD, 999);
        assert_eq!(u64::GUARD, 999);
        assert_eq!(usize::GUARD, 999);
    }
}
