//! Renderer-facing projection of ring state.

use crate::ring::{Ring, RingRole};

/// The per-ring data an external renderer needs: draw a circle at height
/// `y` with radius `r`, colored by `role`.
///
/// Plain copyable data; holding a `RingView` never borrows the chain.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingView {
    /// Vertical position of the ring center.
    pub y: f64,
    /// Radius.
    pub r: f64,
    /// Motion role (Passive, or Active for the driven ring).
    pub role: RingRole,
}

impl From<&Ring> for RingView {
    fn from(ring: &Ring) -> Self {
        Self {
            y: ring.y,
            r: ring.r(),
            role: ring.role(),
        }
    }
}
