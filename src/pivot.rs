//! Balanced alphabet splits.
//!
//! A wavelet tree over alphabet $\Sigma$ partitions $\Sigma$ into two halves
//! at every internal node. Splitting by symbol *count* instead of by
//! occurrence *mass* can leave one half with almost the whole text; the
//! pivot search here walks from the midpoint of a range toward the side that
//! balances the cumulative counts of the two halves.
//!
//! # Theory
//!
//! For an inclusive range $[b, e]$ and a split after symbol $p$, the left
//! half holds $C[p+1] - C[b]$ occurrences and the right half
//! $C[e+1] - C[p+1]$. The search starts at the midpoint boundary and moves
//! one symbol at a time while $|L - R|$ does not get worse. All masses come
//! from the prefix-sum table, so a query costs $O(e - b)$.

use tracing::trace;

use crate::alphabet::Alphabet;
use crate::entry::Entry;
use crate::table::PrefixSumTable;

impl<A: Alphabet, E: Entry> PrefixSumTable<A, E> {
    /// Return the split point `p` of the inclusive alphabet range
    /// `[begin, end]` that best balances occurrence mass between
    /// `[begin, p]` and `[p + 1, end]`.
    ///
    /// The result satisfies `begin <= p < end`. When two boundaries are
    /// equally balanced, a walk toward `begin` keeps going while the walk
    /// toward `end` stops.
    ///
    /// # Panics
    ///
    /// Panics if `begin >= end` or `end >= self.alphabet_size()`.
    pub fn pivot(&self, begin: usize, end: usize) -> usize {
        assert!(begin < end, "empty pivot range [{begin}, {end}]");
        assert!(
            end < self.alphabet_size(),
            "pivot range end {end} outside alphabet of size {}",
            self.alphabet_size()
        );

        let c = self.entries();
        let real_begin = begin + 1;
        let real_end = end + 1;
        let mut pos = real_begin + (real_end - real_begin + 1) / 2 - 1;

        let below = c[begin].widen();
        let upper = c[real_end].widen();
        let imbalance = |p: usize| {
            let at = c[p].widen();
            ((at - below) - (upper - at)).abs()
        };
        let mut best = upper + 1;

        if c[pos].widen() - below >= upper - c[pos].widen() {
            while pos >= real_begin {
                let current = imbalance(pos);
                if current > best {
                    break;
                }
                best = current;
                pos -= 1;
            }
            pos += 1;
        } else {
            loop {
                let current = imbalance(pos);
                if current >= best || pos >= real_end {
                    break;
                }
                best = current;
                pos += 1;
            }
            pos -= 1;
        }

        // `pos` is the first boundary of the right half. The clamp only
        // matters for hand-filled tables that are not monotone.
        let pivot = pos.saturating_sub(1).clamp(begin, end - 1);
        trace!(begin, end, pivot, "pivot");
        pivot
    }
}

/// Index of a node inside a [`SplitTree`].
pub type NodeId = usize;

/// Node of a [`SplitTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitNode {
    /// Internal node splitting `[begin, end]` into `[begin, pivot]` and
    /// `[pivot + 1, end]`.
    Internal {
        /// First alphabet index covered.
        begin: usize,
        /// Last alphabet index covered (inclusive).
        end: usize,
        /// Last alphabet index of the left child.
        pivot: usize,
        /// Left child.
        left: NodeId,
        /// Right child.
        right: NodeId,
    },
    /// Leaf node representing a single symbol.
    Leaf {
        /// The symbol's alphabet index.
        symbol: usize,
    },
}

impl SplitNode {
    /// Return the inclusive alphabet range covered by this node.
    pub fn range(&self) -> (usize, usize) {
        match *self {
            SplitNode::Internal { begin, end, .. } => (begin, end),
            SplitNode::Leaf { symbol } => (symbol, symbol),
        }
    }
}

/// The shape a wavelet tree takes when every node splits its alphabet range
/// with [`PrefixSumTable::pivot`].
///
/// Ranges without occurrence mass split off one symbol per level, so a sparse
/// alphabet yields a tree about $\sigma$ deep. Nodes live in one flat vector
/// (root at index 0) and every traversal uses an explicit stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitTree {
    nodes: Vec<SplitNode>,
    sigma: usize,
}

impl SplitTree {
    /// Split the whole alphabet of `table` down to single symbols.
    /// Returns `None` for an unbuilt table.
    pub fn new<A: Alphabet, E: Entry>(table: &PrefixSumTable<A, E>) -> Option<Self> {
        let sigma = table.alphabet_size();
        if sigma == 0 {
            return None;
        }

        let mut nodes = Vec::with_capacity(2 * sigma - 1);
        nodes.push(SplitNode::Leaf { symbol: 0 });
        let mut stack = vec![(0, 0, sigma - 1)];

        while let Some((id, begin, end)) = stack.pop() {
            if begin == end {
                nodes[id] = SplitNode::Leaf { symbol: begin };
                continue;
            }

            let pivot = table.pivot(begin, end);
            let left = nodes.len();
            let right = left + 1;
            // Placeholders, overwritten when the child ranges are popped.
            nodes.push(SplitNode::Leaf { symbol: begin });
            nodes.push(SplitNode::Leaf { symbol: end });
            nodes[id] = SplitNode::Internal {
                begin,
                end,
                pivot,
                left,
                right,
            };

            stack.push((right, pivot + 1, end));
            stack.push((left, begin, pivot));
        }

        Some(Self { nodes, sigma })
    }

    /// Return the root node.
    pub fn root(&self) -> &SplitNode {
        &self.nodes[0]
    }

    /// Return the node with the given id.
    pub fn node(&self, id: NodeId) -> Option<&SplitNode> {
        self.nodes.get(id)
    }

    /// Return all nodes; children always follow their parent.
    pub fn nodes(&self) -> &[SplitNode] {
        &self.nodes
    }

    /// Return the alphabet size the tree was built for.
    pub fn sigma(&self) -> usize {
        self.sigma
    }

    /// Return the number of edges on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(0, 0)];
        while let Some((id, d)) = stack.pop() {
            match self.nodes[id] {
                SplitNode::Leaf { .. } => deepest = deepest.max(d),
                SplitNode::Internal { left, right, .. } => {
                    stack.push((right, d + 1));
                    stack.push((left, d + 1));
                }
            }
        }
        deepest
    }

    /// Return the leaf symbols from left to right.
    pub fn leaves(&self) -> Vec<usize> {
        let mut out = Vec::with_capacity(self.sigma);
        let mut stack = vec![0];
        while let Some(id) = stack.pop() {
            match self.nodes[id] {
                SplitNode::Leaf { symbol } => out.push(symbol),
                SplitNode::Internal { left, right, .. } => {
                    stack.push(right);
                    stack.push(left);
                }
            }
        }
        out
    }

    /// Return the number of text symbols that fall under `node`.
    pub fn weight<A: Alphabet, E: Entry>(table: &PrefixSumTable<A, E>, node: &SplitNode) -> u64 {
        let (begin, end) = node.range();
        let c = table.entries();
        match (c.get(begin), c.get(end + 1)) {
            (Some(lo), Some(hi)) => (hi.widen() - lo.widen()).max(0) as u64,
            _ => 0,
        }
    }
}
