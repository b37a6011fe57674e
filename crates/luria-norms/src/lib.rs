//! luria-norms
//!
//! Normalization of raw scores against demographic-stratified normative
//! tables: band matching with nearest-band fallback, percentile
//! interpolation across seven anchors, z/t conversion, and qualitative
//! classification. Every operation is a pure function of its inputs; one
//! `normalize` call corresponds to one test-finalization event.

pub mod classify;
pub mod error;
pub mod normalize;
pub mod percentile;
pub mod ranges;
pub mod standard;
