//! The [`Chain`]: ring sequence assembly and the contact pair list.

use ringfall_core::{ChainError, Ring, RingRole};
use smallvec::SmallVec;

/// An adjacent index pair checked for contact each tick.
///
/// `b == a + 1` by construction; `b` is the side nearer the driven end
/// of the chain. The indices are positions in the ring sequence, not
/// physical heights; either ring of a pair can be the lower one at any
/// given tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactPair {
    /// Lower index of the pair.
    pub a: usize,
    /// Upper index (`a + 1`).
    pub b: usize,
}

/// An ordered sequence of rings and the fixed adjacency pairs between
/// them.
///
/// By construction, indices `0..N-1` hold Passive rings and index `N-1`
/// holds the Active (driven) ring. The pair list runs from the driven
/// end down to the free end, `(N-2, N-1), (N-3, N-2), ..., (0, 1)`,
/// and never changes for the lifetime of the chain. Processing pairs in
/// this order lets a correction at the driven pair feed the contact test
/// of the next pair within the same tick, which is how momentum
/// propagates along the chain.
///
/// # Examples
///
/// ```
/// use ringfall_chain::Chain;
///
/// let chain = Chain::new(3, 10.0, 0.1).unwrap();
/// assert_eq!(chain.len(), 3);
/// let pairs: Vec<(usize, usize)> =
///     chain.contact_pairs().iter().map(|p| (p.a, p.b)).collect();
/// assert_eq!(pairs, vec![(1, 2), (0, 1)]);
/// assert!(chain.rings()[2].role().is_active());
/// ```
#[derive(Clone, Debug)]
pub struct Chain {
    rings: Vec<Ring>,
    // Inline storage: chains are typically a handful of rings.
    pairs: SmallVec<[ContactPair; 8]>,
}

impl Chain {
    /// Assemble a chain of `links` rings with shared `radius`, the last
    /// ring driven by `drive` (self-acceleration in units of gravity
    /// magnitude).
    ///
    /// Every ring starts resting on the floor: `y = radius`, `vy = 0`.
    ///
    /// Returns `Err(ChainError::EmptyChain)` if `links == 0`,
    /// `Err(ChainError::InvalidRadius)` for a non-finite or
    /// non-positive radius, or `Err(ChainError::InvalidDrive)` for a
    /// non-finite drive.
    pub fn new(links: usize, drive: f64, radius: f64) -> Result<Self, ChainError> {
        if links == 0 {
            return Err(ChainError::EmptyChain);
        }
        if !radius.is_finite() || radius <= 0.0 {
            return Err(ChainError::InvalidRadius { value: radius });
        }
        if !drive.is_finite() {
            return Err(ChainError::InvalidDrive { value: drive });
        }

        let mut rings = Vec::with_capacity(links);
        for _ in 0..links - 1 {
            rings.push(Ring::new(radius, RingRole::Passive));
        }
        rings.push(Ring::new(radius, RingRole::Active { drive }));

        let pairs = (0..links - 1)
            .rev()
            .map(|i| ContactPair { a: i, b: i + 1 })
            .collect();

        Ok(Self { rings, pairs })
    }

    /// Number of rings.
    pub fn len(&self) -> usize {
        self.rings.len()
    }

    /// Always returns `false`; construction rejects `links == 0`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Read-only view of the ring sequence, in chain order.
    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }

    /// Mutable access to the ring sequence, for the engine's tick.
    pub fn rings_mut(&mut self) -> &mut [Ring] {
        &mut self.rings
    }

    /// The driven (Active) ring, always at index `len() - 1`.
    pub fn driven(&self) -> &Ring {
        &self.rings[self.rings.len() - 1]
    }

    /// The adjacency pairs in contact-check order: from the driven end
    /// toward the free end. Empty for a single-ring chain.
    pub fn contact_pairs(&self) -> &[ContactPair] {
        &self.pairs
    }
}
