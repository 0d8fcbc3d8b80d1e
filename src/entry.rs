//! Unsigned integer types usable as prefix-sum entries.
//!
//! The entry width bounds the longest text a table can describe: a `u16`
//! table holds at most 65535 symbols, a `u32` table (the default) about
//! four billion.

use std::fmt::Debug;
use std::hash::Hash;

/// An unsigned counter stored in a prefix-sum table.
pub trait Entry: Copy + Default + Debug + Eq + Ord + Hash + Send + Sync + 'static {
    /// Encoded width in bytes (little-endian on disk).
    const WIDTH: usize;

    /// Convert a count, or `None` if it does not fit.
    fn from_count(count: u64) -> Option<Self>;

    /// Widen to a signed integer that holds any difference of two entries.
    fn widen(self) -> i128;

    /// Checked addition.
    fn checked_add(self, rhs: Self) -> Option<Self>;

    /// Checked subtraction.
    fn checked_sub(self, rhs: Self) -> Option<Self>;

    /// Append the little-endian encoding to `out`.
    fn write_le(self, out: &mut Vec<u8>);

    /// Decode from exactly `WIDTH` little-endian bytes.
    fn read_le(bytes: &[u8]) -> Option<Self>;
}

macro_rules! impl_entry {
    ($($t:ty),*) => {
        $(
            impl Entry for $t {
                const WIDTH: usize = std::mem::size_of::<$t>();

                #[inline]
                fn from_count(count: u64) -> Option<Self> {
                    <$t>::try_from(count).ok()
                }

                #[inline]
                fn widen(self) -> i128 {
                    self as i128
                }

                #[inline]
                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_add(self, rhs)
                }

                #[inline]
                fn checked_sub(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_sub(self, rhs)
                }

                fn write_le(self, out: &mut Vec<u8>) {
                    out.extend_from_slice(&self.to_le_bytes());
                }

                fn read_le(bytes: &[u8]) -> Option<Self> {
                    Some(<$t>::from_le_bytes(bytes.try_into().ok()?))
                }
            }
        )*
    };
}

impl_entry!(u16, u32, u64);
