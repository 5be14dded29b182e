//! # client
//!
//! Leptos + WASM frontend for the Mindtzijib Learning site. Client-side
//! rendered and served as static files.
//!
//! This crate contains the pages, the shared layout with routing, and the
//! interactive components. The Cuisenaire rod board integrates with the
//! `canvas` crate for imperative canvas rendering via the `RodBoard` bridge
//! component.

pub mod app;
pub mod components;
pub mod data;
pub mod pages;
