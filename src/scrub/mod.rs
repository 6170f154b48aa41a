//! JSON scrubbing - anonymize values while preserving structure
//!
//! This module handles the two anonymization policies applied to parsed
//! JSON values:
//!
//! - **scrub**: keep the container shape intact and replace leaf content
//!   with type-appropriate, non-identifying substitutes
//! - **structure**: discard all content and emit type/emptiness tags only
//!
//! Both policies run against a caller-owned [`Session`] that accumulates
//! leaf-type counters and the identifier pseudonym table for one batch.

pub mod types;
pub mod classifier;
pub mod transformer;

pub use types::{LeafCounts, ScrubConfig, Session};
pub use classifier::classify_and_substitute;
pub use transformer::{Policy, Transformer};
