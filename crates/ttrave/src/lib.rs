//! ttrave - storage backends, backend selection and the admin CLI for the
//! TTRAVE site.

pub mod cli;
pub mod config;
pub mod output;
pub mod state;
pub mod storage;
