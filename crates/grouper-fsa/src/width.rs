// Index-width selection for transition table entries.

use bytemuck::Pod;

/// Unsigned integer width used to store dense state indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IndexWidth {
    U8,
    U16,
    U32,
    U64,
}

impl IndexWidth {
    /// Smallest width able to hold every index in `0..count`.
    ///
    /// A `count` of zero or one still needs one byte per entry.
    pub const fn for_count(count: usize) -> Self {
        let max = count.saturating_sub(1) as u64;
        if max <= u8::MAX as u64 {
            IndexWidth::U8
        } else if max <= u16::MAX as u64 {
            IndexWidth::U16
        } else if max <= u32::MAX as u64 {
            IndexWidth::U32
        } else {
            IndexWidth::U64
        }
    }

    /// Storage size of one table entry, in bytes.
    pub const fn bytes(self) -> usize {
        match self {
            IndexWidth::U8 => 1,
            IndexWidth::U16 => 2,
            IndexWidth::U32 => 4,
            IndexWidth::U64 => 8,
        }
    }
}

/// Integer type a transition table stores its entries in.
///
/// Implemented for `u8`, `u16`, `u32` and `u64`. A grouper picks one through
/// [`Grouper::Index`](crate::Grouper::Index); the table rejects at compile
/// time an index type whose [`MAX`](StateIndex::MAX) is below
/// `STATE_COUNT - 1`.
pub trait StateIndex: Pod + Eq + std::fmt::Debug + Send + Sync + 'static {
    const WIDTH: IndexWidth;
    /// Largest dense index representable.
    const MAX: usize;

    /// Narrow a dense index. The caller guarantees `index <= Self::MAX`.
    fn from_index(index: usize) -> Self;

    fn to_index(self) -> usize;
}

macro_rules! impl_state_index {
    ($ty:ty, $width:expr) => {
        impl StateIndex for $ty {
            const WIDTH: IndexWidth = $width;
            const MAX: usize = if (<$ty>::MAX as u128) > (usize::MAX as u128) {
                usize::MAX
            } else {
                <$ty>::MAX as usize
            };

            #[inline]
            fn from_index(index: usize) -> Self {
                debug_assert!(index <= <Self as StateIndex>::MAX, "index {index} does not fit");
                index as $ty
            }

            #[inline]
            fn to_index(self) -> usize {
                self as usize
            }
        }
    };
}

impl_state_index!(u8, IndexWidth::U8);
impl_state_index!(u16, IndexWidth::U16);
impl_state_index!(u32, IndexWidth::U32);
impl_state_index!(u64, IndexWidth::U64);
