//! The synchronous chain world.
//!
//! [`ChainWorld`] is the user-facing API for running a simulation. Each
//! [`tick()`](ChainWorld::tick) call integrates every ring, sweeps the
//! contact pairs in their fixed order, and returns a consistent
//! post-tick [`Frame`] for the external renderer.
//!
//! # Ownership model
//!
//! `ChainWorld` is [`Send`] (can be moved between threads) but all
//! mutation goes through `&mut self`, and the returned [`Frame`] borrows
//! from the world. The caller cannot tick while holding a frame, so the
//! borrow checker rules out ever observing partial-tick state.

use std::fmt;
use std::time::Instant;

use ringfall_chain::Chain;
use ringfall_core::{ChainError, Ring, RingView, TickId};

use crate::collision::sweep;
use crate::config::ChainConfig;
use crate::metrics::StepMetrics;

// Compile-time assertion: ChainWorld is Send.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<ChainWorld>();
    }
};

// ── Frame ───────────────────────────────────────────────────────

/// Read-only, ordered view of ring state at a given tick.
///
/// This is the entire renderer-facing surface: each ring yields a
/// [`RingView`] `(y, r, role)`. The view borrows from the world and must
/// be dropped before the next `tick()` call.
#[derive(Clone, Copy, Debug)]
pub struct Frame<'w> {
    rings: &'w [Ring],
    tick: TickId,
}

impl<'w> Frame<'w> {
    /// The tick this frame was produced at.
    pub fn tick_id(&self) -> TickId {
        self.tick
    }

    /// Number of rings.
    pub fn len(&self) -> usize {
        self.rings.len()
    }

    /// Always returns `false`; chains have at least one ring.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Visual state of the ring at `index`, in chain order.
    pub fn get(&self, index: usize) -> Option<RingView> {
        self.rings.get(index).map(RingView::from)
    }

    /// Iterate visual states in chain order.
    pub fn iter(&self) -> impl Iterator<Item = RingView> + 'w {
        self.rings.iter().map(RingView::from)
    }

    /// The raw ring states, for consumers that want exact values.
    pub fn rings(&self) -> &'w [Ring] {
        self.rings
    }
}

// ── TickResult ──────────────────────────────────────────────────

/// Result of a [`ChainWorld::tick`] call.
pub struct TickResult<'w> {
    /// Consistent post-tick view of every ring.
    pub frame: Frame<'w>,
    /// Metrics for this tick.
    pub metrics: StepMetrics,
}

// ── ChainWorld ──────────────────────────────────────────────────

/// Single-threaded simulation world stepping a ring chain in lockstep
/// with its caller.
///
/// Created from a [`ChainConfig`] via [`new()`](ChainWorld::new). The
/// external driver invokes [`tick()`](ChainWorld::tick) on its own
/// cadence; the world performs no internal scheduling, blocking, or
/// suspension.
///
/// # Example
///
/// ```
/// use ringfall_engine::{ChainConfig, ChainWorld};
///
/// let mut world = ChainWorld::new(ChainConfig::default()).unwrap();
/// for _ in 0..100 {
///     let result = world.tick();
///     assert_eq!(result.frame.len(), 10);
/// }
/// ```
pub struct ChainWorld {
    chain: Chain,
    dt: f64,
    tick: TickId,
    last_metrics: StepMetrics,
}

impl ChainWorld {
    /// Create a world from a [`ChainConfig`].
    ///
    /// Validates the configuration and assembles the chain. This is the
    /// only failure surface; after construction every operation is
    /// total.
    pub fn new(config: ChainConfig) -> Result<Self, ChainError> {
        config.validate()?;
        let chain = Chain::new(config.links, config.drive, config.radius)?;
        Ok(Self {
            chain,
            dt: config.dt,
            tick: TickId(0),
            last_metrics: StepMetrics::default(),
        })
    }

    /// Advance the simulation one tick.
    ///
    /// Phase 1 integrates every ring independently (order across rings
    /// is irrelevant; no ring interacts with another here). Phase 2
    /// sweeps the contact pairs in their fixed order, from the driven
    /// end toward the free end, resolving each contact in place.
    ///
    /// Infallible: all inputs were validated at construction.
    pub fn tick(&mut self) -> TickResult<'_> {
        let start = Instant::now();
        let mut metrics = StepMetrics::default();

        let integrate_start = Instant::now();
        for ring in self.chain.rings_mut() {
            if ring.integrate(self.dt) {
                metrics.floor_clamps += 1;
            }
        }
        metrics.integrate_us = integrate_start.elapsed().as_micros() as u64;

        let contacts_start = Instant::now();
        metrics.contacts_resolved = sweep(&mut self.chain);
        metrics.contacts_us = contacts_start.elapsed().as_micros() as u64;

        self.tick = TickId(self.tick.0 + 1);
        metrics.total_us = start.elapsed().as_micros() as u64;
        self.last_metrics = metrics.clone();

        TickResult {
            frame: Frame {
                rings: self.chain.rings(),
                tick: self.tick,
            },
            metrics,
        }
    }

    /// The current frame, without advancing the simulation.
    pub fn frame(&self) -> Frame<'_> {
        Frame {
            rings: self.chain.rings(),
            tick: self.tick,
        }
    }

    /// Current tick (0 after construction).
    pub fn current_tick(&self) -> TickId {
        self.tick
    }

    /// The configured timestep in seconds.
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Number of rings in the chain.
    pub fn links(&self) -> usize {
        self.chain.len()
    }

    /// Read-only access to the chain topology.
    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    /// Metrics from the most recent tick.
    pub fn last_metrics(&self) -> &StepMetrics {
        &self.last_metrics
    }
}

impl fmt::Debug for ChainWorld {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainWorld")
            .field("links", &self.chain.len())
            .field("dt", &self.dt)
            .field("current_tick", &self.tick)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ringfall_core::RingRole;

    const EPS: f64 = 1e-12;

    fn single_ring(drive: f64) -> ChainWorld {
        ChainWorld::new(ChainConfig {
            links: 1,
            drive,
            radius: 0.1,
            dt: 0.01,
        })
        .unwrap()
    }

    // ── Lifecycle ────────────────────────────────────────────

    #[test]
    fn new_world_starts_at_tick_zero() {
        let world = ChainWorld::new(ChainConfig::default()).unwrap();
        assert_eq!(world.current_tick(), TickId(0));
        assert_eq!(world.links(), 10);
        assert_eq!(world.dt(), 0.01);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let bad = ChainConfig {
            dt: 0.0,
            ..ChainConfig::default()
        };
        match ChainWorld::new(bad) {
            Err(ChainError::InvalidDt { .. }) => {}
            other => panic!("expected InvalidDt, got {other:?}"),
        }
    }

    #[test]
    fn tick_advances_the_counter() {
        let mut world = single_ring(0.0);
        let result = world.tick();
        assert_eq!(result.frame.tick_id(), TickId(1));
        drop(result);
        world.tick();
        assert_eq!(world.current_tick(), TickId(2));
    }

    // ── Single-ring dynamics ─────────────────────────────────

    #[test]
    fn single_ring_free_fall_stays_clamped() {
        // Gravity pulls the resting ring into the floor every tick; the
        // clamp restores y = r and zeroes the velocity.
        let mut world = single_ring(0.0);
        for _ in 0..10 {
            let result = world.tick();
            let view = result.frame.get(0).unwrap();
            assert_eq!(view.y, 0.1);
            assert_eq!(result.frame.rings()[0].vy, 0.0);
            assert_eq!(result.metrics.floor_clamps, 1);
            assert_eq!(result.metrics.contacts_resolved, 0);
        }
    }

    #[test]
    fn driven_single_ring_climbs_monotonically() {
        let mut world = single_ring(10.0);
        let mut prev_y = world.frame().get(0).unwrap().y;
        let mut prev_vy = 0.0;
        for _ in 0..100 {
            let result = world.tick();
            let ring = result.frame.rings()[0];
            assert!(ring.y > prev_y, "height must increase every tick");
            assert!(ring.vy > prev_vy, "velocity must increase every tick");
            prev_y = ring.y;
            prev_vy = ring.vy;
        }
    }

    // ── Frame consistency ────────────────────────────────────

    #[test]
    fn frame_matches_tick_result() {
        let mut world = ChainWorld::new(ChainConfig::default()).unwrap();
        let after_tick: Vec<_> = world.tick().frame.iter().collect();
        let queried: Vec<_> = world.frame().iter().collect();
        assert_eq!(after_tick, queried);
        assert_eq!(world.frame().tick_id(), TickId(1));
    }

    #[test]
    fn frame_roles_mark_only_the_driven_ring() {
        let mut world = ChainWorld::new(ChainConfig {
            links: 4,
            ..ChainConfig::default()
        })
        .unwrap();
        let result = world.tick();
        let roles: Vec<bool> = result.frame.iter().map(|v| v.role.is_active()).collect();
        assert_eq!(roles, vec![false, false, false, true]);
        assert_eq!(
            result.frame.get(3).unwrap().role,
            RingRole::Active { drive: 10.0 }
        );
    }

    #[test]
    fn frame_get_out_of_range_is_none() {
        let world = single_ring(0.0);
        assert!(world.frame().get(1).is_none());
    }

    // ── First-tick contact cascade ───────────────────────────

    /// All rings start coincident, so the first tick resolves every
    /// pair: the driven ring's impulse is shared down the chain.
    #[test]
    fn first_tick_resolves_every_pair() {
        let mut world = ChainWorld::new(ChainConfig {
            links: 5,
            drive: 10.0,
            ..ChainConfig::default()
        })
        .unwrap();
        let result = world.tick();
        assert_eq!(result.metrics.contacts_resolved, 4);
    }

    #[test]
    fn two_ring_first_tick_matches_hand_computation() {
        let mut world = ChainWorld::new(ChainConfig {
            links: 2,
            drive: 10.0,
            radius: 0.1,
            dt: 0.01,
        })
        .unwrap();
        let result = world.tick();
        let rings = result.frame.rings();

        // Integrate: ring0 clamps to (0.1, 0); ring1 rises to
        // 0.1 + 9*dt^2/2 = 0.10045 with vy = 0.09.
        // Contact (|0.1 - 0.10045| <= 0.2): v = 0.045 for both;
        // midpoint (0.1 + 0.1 + 0.10045 - 0.1)/2 = 0.100225 →
        // ring0 at 0.000225, ring1 at 0.200225.
        assert!((rings[0].y - 0.000225).abs() < EPS);
        assert!((rings[1].y - 0.200225).abs() < EPS);
        assert!((rings[0].vy - 0.045).abs() < EPS);
        assert!((rings[1].vy - 0.045).abs() < EPS);

        // The lower ring sits transiently below the floor, accepted
        // until the next integrate clamps it.
        assert!(rings[0].y - rings[0].r() < 0.0);
    }

    // ── Debug impl ───────────────────────────────────────────

    #[test]
    fn debug_impl_reports_state() {
        let world = single_ring(0.0);
        let debug = format!("{world:?}");
        assert!(debug.contains("ChainWorld"));
        assert!(debug.contains("current_tick"));
    }
}
