//! Per-symbol occurrence counting.
//!
//! Tallies are indexed by symbol ordinal and always span the whole
//! alphabet, so symbols absent from the text keep a count of zero.

use crate::alphabet::Alphabet;
use crate::error::{Error, Result};

/// Count the occurrences of every symbol of `A` in `text`.
pub fn frequencies<A: Alphabet>(text: &[A]) -> Result<Vec<u64>> {
    let mut counts = vec![0u64; A::SIGMA];
    tally(&mut counts, text)?;
    Ok(counts)
}

/// Count the occurrences of every symbol of `A` across all texts of a
/// collection.
pub fn collection_frequencies<A, T>(texts: &[T]) -> Result<Vec<u64>>
where
    A: Alphabet,
    T: AsRef<[A]>,
{
    let mut counts = vec![0u64; A::SIGMA];
    for text in texts {
        tally(&mut counts, text.as_ref())?;
    }
    Ok(counts)
}

fn tally<A: Alphabet>(counts: &mut [u64], text: &[A]) -> Result<()> {
    let sigma = counts.len();
    for &symbol in text {
        let ordinal = symbol.ordinal();
        let slot = counts
            .get_mut(ordinal)
            .ok_or(Error::SymbolOutsideAlphabet { ordinal, sigma })?;
        *slot += 1;
    }
    Ok(())
}
