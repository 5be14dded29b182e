//! Page components, one per route.

pub mod home;
pub mod rods;
pub mod syllables;
