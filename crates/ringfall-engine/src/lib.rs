//! Tick engine for the Ringfall chain simulation.
//!
//! [`ChainWorld`] owns a chain and advances it in discrete ticks: an
//! integrate phase over every ring, then an ordered contact sweep over
//! the precomputed adjacency pairs. External renderers consume the
//! resulting [`Frame`] view between ticks.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod collision;
pub mod config;
pub mod metrics;
pub mod world;

pub use collision::{in_contact, resolve};
pub use config::ChainConfig;
pub use metrics::StepMetrics;
pub use world::{ChainWorld, Frame, TickResult};
