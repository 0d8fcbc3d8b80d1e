//! # Prefix-Sum Tables
//!
//! *Alphabet statistics for compressed text indexes.*
//!
//! ## Intuition First
//!
//! Sort every letter of a book alphabetically and lay them out in a row: all
//! the `a`s first, then the `b`s, and so on. To find where the `n`s start you
//! only need to know how many letters come before `n`. A prefix-sum table
//! stores exactly that number for every letter of the alphabet.
//!
//! The same numbers tell you how to cut the alphabet into two piles of about
//! equal height. A wavelet tree makes that cut at every node, so good cuts
//! mean a shallow, balanced tree.
//!
//! ## The Problem
//!
//! An FM-index needs the `C` array (symbols smaller than $c$) on every step
//! of backward search, and a wavelet tree over the BWT needs a way to split
//! its alphabet. Splitting by symbol count ignores skew: with one symbol
//! covering 90% of the text, a naive halving puts almost everything on one
//! side.
//!
//! ## Historical Context
//!
//! ```text
//! 1994  Burrows-Wheeler  Block-sorting transform; the C array appears here
//! 2000  Ferragina-Manzini FM-index: backward search over C and rank
//! 2003  Grossi et al.    Wavelet trees: recursive alphabet partitioning
//! 2008  SeqAn            Generic FM-index with balanced alphabet pivots
//! ```
//!
//! ## Mathematical Formulation
//!
//! For a text $T$ over $\Sigma = \{0, \dots, \sigma - 1\}$:
//!
//! $$C[i] = |\{ j : T[j] < i \}|, \quad 0 \le i \le \sigma$$
//!
//! A pivot $p$ for the range $[b, e]$ locally reduces, by a walk from the
//! midpoint, $|(C[p+1] - C[b]) - (C[e+1] - C[p+1])|$. The walk stops at the
//! first step that makes the split worse, so it finds a local optimum, and a
//! range without occurrence mass walks all the way to $b$.
//!
//! ## Complexity Analysis
//!
//! - **Build**: $O(|T| + \sigma)$ time, $\sigma + 1$ entries of space.
//! - **Pivot**: $O(e - b)$ per query, no allocation.
//! - **Persistence**: $O(\sigma)$ bytes on disk, no header.
//!
//! ## What Could Go Wrong
//!
//! 1. **Entry width**: a `u16` table cannot describe a text with more than
//!    65535 symbols. Construction fails with [`Error::Overflow`] instead of
//!    wrapping.
//! 2. **Stored width**: the on-disk layout does not record the entry width;
//!    open a table with the entry type it was saved with.
//!
//! ## Implementation Notes
//!
//! This crate provides:
//! - **`PrefixSumTable`**: the cumulative count table, with sentinel shifts.
//! - **`SplitTree`**: the balanced alphabet partition built from pivots.
//! - **`Alphabet`**: dense symbol ordinals (`u8`, [`Dna`]).
//!
//! ## References
//!
//! - Ferragina, P., & Manzini, G. (2000). "Opportunistic data structures with applications."
//! - Grossi, R., et al. (2003). "High-order entropy-compressed text indexes."
//! - Döring, A., et al. (2008). "SeqAn: an efficient, generic C++ library for sequence analysis."

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod alphabet;
pub mod entry;
pub mod error;
pub mod frequency;
pub mod persist;
pub mod pivot;
pub mod table;

pub use alphabet::{Alphabet, Dna};
pub use entry::Entry;
pub use error::Error;
pub use persist::OpenMode;
pub use pivot::{NodeId, SplitNode, SplitTree};
pub use table::PrefixSumTable;
