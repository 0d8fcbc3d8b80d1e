//! Dense ordinal mapping for alphabet symbols.
//!
//! A prefix-sum table is indexed by symbol ordinal: every symbol of an
//! alphabet $\Sigma$ maps to a distinct integer in $[0, \sigma)$, and the
//! ordinal order is the order in which the table accumulates counts.

/// A finite alphabet whose symbols map densely onto `0..SIGMA`.
pub trait Alphabet: Copy {
    /// Number of distinct symbols, $\sigma$.
    const SIGMA: usize;

    /// The ordinal of this symbol, in `0..SIGMA`.
    fn ordinal(self) -> usize;

    /// The symbol with the given ordinal, or `None` when `ordinal >= SIGMA`.
    fn from_ordinal(ordinal: usize) -> Option<Self>;
}

impl Alphabet for u8 {
    const SIGMA: usize = 256;

    #[inline]
    fn ordinal(self) -> usize {
        self as usize
    }

    #[inline]
    fn from_ordinal(ordinal: usize) -> Option<Self> {
        u8::try_from(ordinal).ok()
    }
}

/// The four-letter nucleotide alphabet, ordered `A < C < G < T`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Dna {
    /// Adenine.
    A,
    /// Cytosine.
    C,
    /// Guanine.
    G,
    /// Thymine.
    T,
}

impl Dna {
    /// Parse an ASCII nucleotide (case-insensitive).
    pub fn from_ascii(byte: u8) -> Option<Self> {
        match byte.to_ascii_uppercase() {
            b'A' => Some(Dna::A),
            b'C' => Some(Dna::C),
            b'G' => Some(Dna::G),
            b'T' => Some(Dna::T),
            _ => None,
        }
    }

    /// The uppercase ASCII letter for this nucleotide.
    pub fn to_ascii(self) -> u8 {
        match self {
            Dna::A => b'A',
            Dna::C => b'C',
            Dna::G => b'G',
            Dna::T => b'T',
        }
    }
}

impl Alphabet for Dna {
    const SIGMA: usize = 4;

    #[inline]
    fn ordinal(self) -> usize {
        self as usize
    }

    fn from_ordinal(ordinal: usize) -> Option<Self> {
        match ordinal {
            0 => Some(Dna::A),
            1 => Some(Dna::C),
            2 => Some(Dna::G),
            3 => Some(Dna::T),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_ordinals() {
        assert_eq!(b'a'.ordinal(), 97);
        assert_eq!(u8::from_ordinal(255), Some(255));
        assert_eq!(u8::from_ordinal(256), None);
    }

    #[test]
    fn test_dna_round_trip() {
        for ordinal in 0..Dna::SIGMA {
            let symbol = Dna::from_ordinal(ordinal).unwrap();
            assert_eq!(symbol.ordinal(), ordinal);
            assert_eq!(Dna::from_ascii(symbol.to_ascii()), Some(symbol));
        }
        assert_eq!(Dna::from_ordinal(4), None);
        assert_eq!(Dna::from_ascii(b'g'), Some(Dna::G));
        assert_eq!(Dna::from_ascii(b'N'), None);
    }
}
