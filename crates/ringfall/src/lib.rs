//! Ringfall: a vertical chain-of-rings simulation with a driven end and
//! inelastic contacts.
//!
//! This is the top-level facade crate that re-exports the public API
//! from the Ringfall sub-crates. For most users, adding `ringfall` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use ringfall::prelude::*;
//!
//! // Ten rings, the last one driven upward at ten gravities.
//! let config = ChainConfig {
//!     links: 10,
//!     drive: 10.0,
//!     ..ChainConfig::default()
//! };
//! let mut world = ChainWorld::new(config).unwrap();
//!
//! // Advance one tick and hand the frame to a renderer.
//! let result = world.tick();
//! assert_eq!(result.frame.tick_id(), TickId(1));
//! for view in result.frame.iter() {
//!     // draw a circle at height `view.y` with radius `view.r`,
//!     // colored by `view.role`
//!     let _ = (view.y, view.r, view.role.is_active());
//! }
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `ringfall-core` | Ring state, roles, views, ids, errors |
//! | [`chain`] | `ringfall-chain` | Chain assembly and contact pairs |
//! | [`engine`] | `ringfall-engine` | Config, tick engine, collision resolver, metrics |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and ids (`ringfall-core`).
///
/// Contains [`types::Ring`], [`types::RingRole`], [`types::RingView`],
/// [`types::TickId`], the physical constants, and [`types::ChainError`].
pub use ringfall_core as types;

/// Chain topology (`ringfall-chain`).
///
/// Provides [`chain::Chain`]: the ordered ring sequence and its fixed
/// contact pair list.
pub use ringfall_chain as chain;

/// Tick engine (`ringfall-engine`).
///
/// [`engine::ChainWorld`] steps the simulation; [`engine::Frame`] is
/// the renderer-facing view.
pub use ringfall_engine as engine;

/// Common imports for typical Ringfall usage.
///
/// ```rust
/// use ringfall::prelude::*;
/// ```
pub mod prelude {
    pub use ringfall_chain::{Chain, ContactPair};
    pub use ringfall_core::{
        ChainError, Ring, RingRole, RingView, TickId, DEFAULT_DT, DEFAULT_RADIUS, GRAVITY,
    };
    pub use ringfall_engine::{ChainConfig, ChainWorld, Frame, StepMetrics, TickResult};
}
