//! ttrave_core - domain types and the storage contract for the TTRAVE site.
//!
//! Everything here is pure: no I/O, no runtime. Backends live in the
//! `ttrave` crate.

pub mod serde;
pub mod site;
pub mod storage;
