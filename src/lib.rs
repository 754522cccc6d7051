//! Core logic for the lacuna gap-sequence solver.
//!
//! Each input line describes a pseudo-random run of k values and asks
//! for the n-th element of the sequence obtained by repeatedly
//! appending the smallest integer absent from the trailing window of
//! the last k elements. The solver keeps the window as an ordered
//! counted set so the "smallest absent" query walks sorted keys
//! instead of scanning the integers.

pub mod error;
pub mod io_utils;
pub mod lcg;
pub mod params;
pub mod solver;
pub mod stats;
pub mod window;

pub use error::LacunaError;
pub use lcg::Lcg;
pub use params::Params;
pub use solver::{solve, GapSolver};
pub use stats::RunStats;
pub use window::CountedSet;
