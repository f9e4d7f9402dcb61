//! Node indices with a reserved sentinel.
//!
//! Links between nodes are plain integers into the arena. The largest value
//! of each integer type is reserved as `NONE`, which marks the end of a chain
//! without paying for an `Option` in every node.

/// A copyable node index with a sentinel "no node" value.
///
/// # Example
///
/// ```
/// use nexus_slist::Index;
///
/// let idx: u16 = 7;
/// assert!(idx.is_some());
/// assert!(u16::NONE.is_none());
/// assert_eq!(u16::try_from_usize(u16::MAX as usize), None);
/// ```
pub trait Index: Copy + Eq + core::fmt::Debug + 'static {
    /// Sentinel marking an absent link.
    const NONE: Self;

    /// Returns `true` if this is the sentinel.
    #[inline]
    fn is_none(self) -> bool {
        self == Self::NONE
    }

    /// Returns `true` if this names a slot.
    #[inline]
    fn is_some(self) -> bool {
        !self.is_none()
    }

    /// Returns the index as a slot offset.
    fn as_usize(self) -> usize;

    /// Converts a slot offset to an index.
    ///
    /// Returns `None` when `val` does not fit or collides with [`Self::NONE`].
    fn try_from_usize(val: usize) -> Option<Self>;

    /// Maps the sentinel to `None`.
    #[inline]
    fn to_option(self) -> Option<Self> {
        if self.is_none() { None } else { Some(self) }
    }
}

macro_rules! impl_index {
    ($($ty:ty),*) => {
        $(
            impl Index for $ty {
                const NONE: Self = <$ty>::MAX;

                #[inline]
                fn as_usize(self) -> usize {
                    self as usize
                }

                #[inline]
                fn try_from_usize(val: usize) -> Option<Self> {
                    match <$ty>::try_from(val) {
                        Ok(idx) if idx != Self::NONE => Some(idx),
                        _ => None,
                    }
                }
            }
        )*
    };
}

impl_index!(u8, u16, u32, u64, usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_is_max() {
        assert!(u8::NONE.is_none());
        assert!(u32::NONE.is_none());
        assert_eq!(usize::NONE, usize::MAX);
        assert!(0u32.is_some());
    }

    #[test]
    fn conversion_rejects_sentinel_and_overflow() {
        assert_eq!(u8::try_from_usize(254), Some(254));
        assert_eq!(u8::try_from_usize(255), None);
        assert_eq!(u8::try_from_usize(1000), None);
        assert_eq!(u32::try_from_usize(42).map(Index::as_usize), Some(42));
    }

    #[test]
    fn to_option_maps_sentinel() {
        assert_eq!(u16::NONE.to_option(), None);
        assert_eq!(3u16.to_option(), Some(3));
    }
}
