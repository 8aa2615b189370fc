//! Pairwise inelastic contact resolution.
//!
//! Two adjacent rings are in contact when their center separation is no
//! greater than the sum of their radii. Resolution merges their
//! velocities (fully inelastic, equal implicit masses) and pushes them
//! apart symmetrically around the contact midpoint so they end exactly
//! tangent.
//!
//! The sweep over a chain's pair list is sequential and order-dependent:
//! a correction at one pair immediately affects the contact test of the
//! pair processed after it within the same tick. This is the mechanism
//! that propagates momentum along the chain in a single tick, and the
//! traversal order (driven end first) is an invariant, not an
//! implementation accident.

use ringfall_chain::Chain;
use ringfall_core::Ring;

/// Whether two rings are in contact.
///
/// The boundary case (separation exactly equal to the radius sum)
/// counts as contact; [`resolve`] maps that configuration to itself.
pub fn in_contact(a: &Ring, b: &Ring) -> bool {
    (a.y - b.y).abs() <= a.r() + b.r()
}

/// Resolve a contact between two rings, mutating both in place.
///
/// 1. Both velocities become their pre-contact mean.
/// 2. The physically lower ring (`lo`) and higher ring (`hi`) are
///    relabeled locally; this is independent of chain index order.
/// 3. The contact midpoint `(lo.y + lo.r + hi.y - hi.r) / 2` becomes the
///    shared tangent point: `lo` ends just below it, `hi` just above.
///
/// The floor clamp is deliberately not re-checked here. Resolution can
/// leave the lower ring transiently below the floor; the next tick's
/// integrate phase clamps it. This single-tick transient is accepted
/// boundary behavior.
pub fn resolve(a: &mut Ring, b: &mut Ring) {
    let v = (a.vy + b.vy) / 2.0;
    a.vy = v;
    b.vy = v;

    let (lo, hi) = if b.y < a.y { (b, a) } else { (a, b) };
    let y_mid = (lo.y + lo.r() + hi.y - hi.r()) / 2.0;
    lo.y = y_mid - lo.r();
    hi.y = y_mid + hi.r();
}

/// Sweep the chain's contact pairs in their fixed order, resolving each
/// contact found. Returns the number of contacts resolved.
///
/// Pairs not in contact are skipped untouched, so a contact-free sweep
/// is a no-op.
pub(crate) fn sweep(chain: &mut Chain) -> u32 {
    let mut resolved = 0;
    for k in 0..chain.contact_pairs().len() {
        let pair = chain.contact_pairs()[k];
        let rings = chain.rings_mut();
        let (left, right) = rings.split_at_mut(pair.b);
        let (a, b) = (&mut left[pair.a], &mut right[0]);
        if !in_contact(a, b) {
            continue;
        }
        resolve(a, b);
        resolved += 1;
    }
    resolved
}
