//! Chain topology for the Ringfall simulation.
//!
//! A [`Chain`] is the ordered sequence of rings plus the fixed list of
//! adjacent index pairs checked for contact each tick. The chain is the
//! sole owner of its rings; external consumers read through `rings()`
//! and only the engine mutates through `rings_mut()`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod chain;

pub use chain::{Chain, ContactPair};
