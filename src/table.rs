//! Cumulative symbol-frequency table.
//!
//! For a text $T$ over an alphabet of size $\sigma$, the table stores
//! $\sigma + 1$ entries where
//!
//! $$C[i] = |\{ j : \mathrm{ord}(T[j]) < i \}|$$
//!
//! so $C[0] = 0$, $C[\sigma] = |T|$, and $C[i+1] - C[i]$ is the number of
//! occurrences of the symbol with ordinal $i$. This is the `C` array of an
//! FM-index; backward search maps a symbol to its block of the BWT through it.
//!
//! # Sentinels
//!
//! Text collections are indexed with one sentinel (`$`) per text, ordered
//! before every real symbol. The sentinels are not part of the alphabet, so
//! [`PrefixSumTable::insert_dollar`] accounts for them by shifting every entry.

use std::fmt;
use std::marker::PhantomData;

use tracing::debug;

use crate::alphabet::Alphabet;
use crate::entry::Entry;
use crate::error::{Error, Result};
use crate::frequency::{collection_frequencies, frequencies};

/// Prefix sums of symbol counts, indexed by symbol ordinal.
///
/// `A` is the alphabet the table maps symbols through; `E` is the entry
/// storage type and bounds the total count the table can hold.
pub struct PrefixSumTable<A, E = u32> {
    entries: Vec<E>,
    _alphabet: PhantomData<fn() -> A>,
}

impl<A: Alphabet, E: Entry> PrefixSumTable<A, E> {
    /// Create an empty, unbuilt table.
    pub fn new() -> Self {
        Self::from_entries(Vec::new())
    }

    /// Wrap an existing entry sequence without checking any invariant.
    pub fn from_entries(entries: Vec<E>) -> Self {
        Self {
            entries,
            _alphabet: PhantomData,
        }
    }

    /// Build the table for a single text over `A`.
    pub fn from_text(text: &[A]) -> Result<Self> {
        Self::from_counts(&frequencies(text)?)
    }

    /// Build the table for a collection of texts, counting all of them.
    ///
    /// Sentinels are not counted; see [`insert_dollar`](Self::insert_dollar).
    pub fn from_texts<T: AsRef<[A]>>(texts: &[T]) -> Result<Self> {
        Self::from_counts(&collection_frequencies(texts)?)
    }

    /// Build the table from raw per-symbol counts.
    ///
    /// The resulting alphabet size is `counts.len()`.
    pub fn from_counts(counts: &[u64]) -> Result<Self> {
        let mut entries = Vec::with_capacity(counts.len() + 1);
        let mut sum = 0u64;
        entries.push(E::default());
        for &count in counts {
            sum = sum.checked_add(count).ok_or(Error::Overflow)?;
            entries.push(E::from_count(sum).ok_or(Error::Overflow)?);
        }
        debug!(sigma = counts.len(), total = sum, "built prefix-sum table");
        Ok(Self::from_entries(entries))
    }

    /// Replace the contents with the table for `text`.
    ///
    /// On error the table is left unchanged.
    pub fn rebuild(&mut self, text: &[A]) -> Result<()> {
        *self = Self::from_text(text)?;
        Ok(())
    }

    /// Return the number of entries, $\sigma + 1$ for a built table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return true if the table has not been built.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Return the alphabet size $\sigma$ (`0` for an unbuilt table).
    pub fn alphabet_size(&self) -> usize {
        self.entries.len().saturating_sub(1)
    }

    /// Return the entry at `pos`.
    pub fn get(&self, pos: usize) -> Result<E> {
        self.entries
            .get(pos)
            .copied()
            .ok_or(Error::IndexOutOfBounds(pos))
    }

    /// Overwrite the entry at `pos`.
    pub fn set(&mut self, pos: usize, value: E) -> Result<()> {
        let slot = self
            .entries
            .get_mut(pos)
            .ok_or(Error::IndexOutOfBounds(pos))?;
        *slot = value;
        Ok(())
    }

    /// Resize to `len` entries, zero-filling new slots.
    pub fn resize(&mut self, len: usize) {
        self.resize_filled(len, E::default());
    }

    /// Resize to `len` entries, filling new slots with `fill`.
    ///
    /// Existing entries are kept; nothing is recomputed, so the caller has to
    /// restore the prefix-sum invariants itself.
    pub fn resize_filled(&mut self, len: usize, fill: E) {
        self.entries.resize(len, fill);
    }

    /// Drop all entries, returning to the unbuilt state.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Return the entries as a slice.
    pub fn entries(&self) -> &[E] {
        &self.entries
    }

    /// Return the last entry: the number of symbols counted.
    pub fn total(&self) -> Option<E> {
        self.entries.last().copied()
    }

    /// Return the number of occurrences of the symbol at alphabet index `index`.
    ///
    /// Fails with [`Error::InvalidEncoding`] when the two entries decrease,
    /// which only a hand-filled table can produce.
    pub fn count(&self, index: usize) -> Result<E> {
        let lo = self.get(index)?;
        let hi = self.get(index + 1)?;
        hi.checked_sub(lo).ok_or_else(|| {
            Error::InvalidEncoding(format!(
                "entry {} ({:?}) is below entry {index} ({:?})",
                index + 1,
                hi,
                lo
            ))
        })
    }

    /// Return the alphabet index of `symbol`.
    pub fn ordinal_of(&self, symbol: A) -> usize {
        symbol.ordinal()
    }

    /// Return the symbol at alphabet index `index`.
    pub fn symbol_of(&self, index: usize) -> Result<A> {
        A::from_ordinal(index).ok_or(Error::IndexOutOfBounds(index))
    }

    /// Add `num_dollars` to every entry.
    ///
    /// Accounts for that many sentinel symbols sorting before the alphabet.
    /// Fails with [`Error::Overflow`] without modifying the table if any
    /// entry would overflow.
    pub fn insert_dollar(&mut self, num_dollars: E) -> Result<()> {
        let shifted = self
            .entries
            .iter()
            .map(|&e| e.checked_add(num_dollars))
            .collect::<Option<Vec<E>>>()
            .ok_or(Error::Overflow)?;
        self.entries = shifted;
        debug!(num_dollars = ?num_dollars, "shifted prefix-sum table");
        Ok(())
    }
}

impl<A: Alphabet, E: Entry> Default for PrefixSumTable<A, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A, E: Clone> Clone for PrefixSumTable<A, E> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
            _alphabet: PhantomData,
        }
    }
}

impl<A, E: fmt::Debug> fmt::Debug for PrefixSumTable<A, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrefixSumTable")
            .field("entries", &self.entries)
            .finish()
    }
}

impl<A, E: PartialEq> PartialEq for PrefixSumTable<A, E> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<A, E: Eq> Eq for PrefixSumTable<A, E> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::Dna;

    /// The alphabet of "banana": a < b < n.
    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Ban {
        A,
        B,
        N,
    }

    impl Alphabet for Ban {
        const SIGMA: usize = 3;

        fn ordinal(self) -> usize {
            self as usize
        }

        fn from_ordinal(ordinal: usize) -> Option<Self> {
            [Ban::A, Ban::B, Ban::N].get(ordinal).copied()
        }
    }

    fn banana() -> Vec<Ban> {
        use Ban::*;
        vec![B, A, N, A, N, A]
    }

    #[test]
    fn test_banana_table() {
        let pst = PrefixSumTable::<Ban>::from_text(&banana()).unwrap();
        assert_eq!(pst.entries(), &[0, 3, 4, 6]);
        assert_eq!(pst.len(), 4);
        assert_eq!(pst.alphabet_size(), 3);
        assert_eq!(pst.total(), Some(6));
        assert_eq!(pst.count(0).unwrap(), 3);
        assert_eq!(pst.count(1).unwrap(), 1);
        assert_eq!(pst.count(2).unwrap(), 2);
    }

    #[test]
    fn test_insert_dollar() {
        let mut pst = PrefixSumTable::<Ban>::from_text(&banana()).unwrap();
        pst.insert_dollar(3).unwrap();
        assert_eq!(pst.entries(), &[3, 6, 7, 9]);
    }

    #[test]
    fn test_insert_dollar_overflow_leaves_table() {
        let mut pst = PrefixSumTable::<Dna, u16>::from_counts(&[10, 65_000, 0, 0]).unwrap();
        let before = pst.clone();
        assert!(matches!(pst.insert_dollar(1_000), Err(Error::Overflow)));
        assert_eq!(pst, before);
    }

    #[test]
    fn test_symbol_mapping() {
        let pst = PrefixSumTable::<Ban>::from_text(&banana()).unwrap();
        assert_eq!(pst.ordinal_of(Ban::N), 2);
        assert_eq!(pst.symbol_of(1).unwrap(), Ban::B);
        assert!(matches!(pst.symbol_of(3), Err(Error::IndexOutOfBounds(3))));
    }

    #[test]
    fn test_count_on_decreasing_entries() {
        let mut pst = PrefixSumTable::<Dna>::from_counts(&[2, 2, 2, 2]).unwrap();
        pst.set(2, 1).unwrap();
        assert!(matches!(pst.count(1), Err(Error::InvalidEncoding(_))));
        assert_eq!(pst.count(2).unwrap(), 5);
        assert!(matches!(pst.count(4), Err(Error::IndexOutOfBounds(5))));
    }

    #[test]
    fn test_empty_text_is_all_zero() {
        let pst = PrefixSumTable::<Dna>::from_text(&[]).unwrap();
        assert_eq!(pst.entries(), &[0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_unbuilt_table() {
        let pst = PrefixSumTable::<Dna>::new();
        assert!(pst.is_empty());
        assert_eq!(pst.alphabet_size(), 0);
        assert_eq!(pst.total(), None);
        assert!(matches!(pst.get(0), Err(Error::IndexOutOfBounds(0))));
    }

    #[test]
    fn test_get_set_bounds() {
        let mut pst = PrefixSumTable::<Dna>::from_counts(&[2, 2, 2, 2]).unwrap();
        assert_eq!(pst.get(4).unwrap(), 8);
        assert!(matches!(pst.get(5), Err(Error::IndexOutOfBounds(5))));

        pst.set(4, 9).unwrap();
        assert_eq!(pst.get(4).unwrap(), 9);
        assert!(matches!(pst.set(5, 1), Err(Error::IndexOutOfBounds(5))));
        assert_eq!(pst.entries(), &[0, 2, 4, 6, 9]);
    }

    #[test]
    fn test_resize_and_clear() {
        let mut pst = PrefixSumTable::<Dna>::new();
        pst.resize(3);
        assert_eq!(pst.entries(), &[0, 0, 0]);
        pst.resize_filled(5, 7);
        assert_eq!(pst.entries(), &[0, 0, 0, 7, 7]);
        pst.resize(2);
        assert_eq!(pst.entries(), &[0, 0]);
        pst.clear();
        assert!(pst.is_empty());
        assert_eq!(pst, PrefixSumTable::new());
    }

    #[test]
    fn test_collection_table() {
        let texts = ["ACGT", "AAC", ""]
            .iter()
            .map(|s| s.bytes().filter_map(Dna::from_ascii).collect::<Vec<_>>())
            .collect::<Vec<_>>();
        let mut pst = PrefixSumTable::<Dna>::from_texts(&texts).unwrap();
        assert_eq!(pst.entries(), &[0, 3, 5, 6, 7]);

        pst.insert_dollar(texts.len() as u32).unwrap();
        assert_eq!(pst.entries(), &[3, 6, 8, 9, 10]);
    }

    #[test]
    fn test_narrow_entry_overflow() {
        let text = vec![Dna::G; 70_000];
        let err = PrefixSumTable::<Dna, u16>::from_text(&text).unwrap_err();
        assert!(matches!(err, Error::Overflow));
        assert!(PrefixSumTable::<Dna, u32>::from_text(&text).is_ok());
    }

    #[test]
    fn test_rebuild_replaces_contents() {
        let mut pst = PrefixSumTable::<Ban>::from_text(&banana()).unwrap();
        pst.rebuild(&[Ban::N]).unwrap();
        assert_eq!(pst.entries(), &[0, 0, 0, 1]);
    }

    #[test]
    fn test_equality_ignores_construction_path() {
        let built = PrefixSumTable::<Ban>::from_text(&banana()).unwrap();
        let mut manual = PrefixSumTable::<Ban>::new();
        manual.resize(4);
        for (pos, value) in [0, 3, 4, 6].into_iter().enumerate() {
            manual.set(pos, value).unwrap();
        }
        assert_eq!(built, manual);
    }
}
