//! Interactive components.

pub mod rod_board;
pub mod syllable_board;
