//! Core types for the Ringfall chain simulation.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the ring state model, motion roles, physical constants, the
//! renderer-facing view type, and error types used throughout the
//! Ringfall workspace.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod ring;
pub mod view;

pub use error::ChainError;
pub use id::TickId;
pub use ring::{Ring, RingRole, DEFAULT_DT, DEFAULT_RADIUS, GRAVITY};
pub use view::RingView;
