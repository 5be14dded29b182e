//! Canvas rendering and input engine for the Cuisenaire rod board.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! full lifecycle of the rod canvas: translating raw DOM input events into
//! scene mutations, snapping positions to the grid, hit-testing rods,
//! managing z-order and selection, and rendering the scene. The host Leptos
//! layer is responsible only for wiring DOM events to the engine and for
//! executing host-environment commands (fullscreen requests) signalled via
//! [`engine::Action`].
//!
//! Everything except [`engine::Engine`] and [`render`] is browser-free, so
//! the whole interaction state machine is unit-testable on a native target.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`scene`] | Placed rods, ghost rod, selection, and z-order |
//! | [`palette`] | Fixed 10-entry rod catalog |
//! | [`geom`] | Grid snapping, bounds, and clamping |
//! | [`input`] | Interaction state machine and keyboard commands |
//! | [`render`] | Scene rendering to a 2D context |
//! | [`viewport`] | Backing-buffer sizing for device pixel density |
//! | [`consts`] | Shared numeric and color constants |

pub mod consts;
pub mod engine;
pub mod geom;
pub mod input;
pub mod palette;
pub mod render;
pub mod scene;
pub mod viewport;
