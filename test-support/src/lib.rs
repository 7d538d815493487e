//! Test support utilities.
//!
//! Shared by the unit, integration and behavioural tests of `ini-reader`.

pub mod fixture;
pub mod logging;

pub use fixture::{DUPLICATE_SECTION, FixtureDir, STANDARD, write_fixture};
