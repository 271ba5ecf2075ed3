//! Value generators used to assemble records.
//!
//! Every helper takes the caller's RNG so a whole run draws from a single
//! random stream.

pub mod address;
pub mod numeric;
pub mod profile;
pub mod text;
pub mod timestamp;
pub mod uuid;
