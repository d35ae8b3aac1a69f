// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Camera-rig transform engine for interactive 3D viewers.
//!
//! Orbitrig turns pointer gestures into camera motion around an orbit
//! origin and derives the matrices a renderer needs to draw the scene from
//! that camera: rotation-only, view, and scene-to-raster.
//!
//! # Key entry points
//!
//! - [`rig::OrbitalRig`] - behavior-registry rig with switchable rotation
//!   mode
//! - [`rig::ArcballRig`] / [`rig::TurntableRig`] - fixed-binding rigs
//! - [`camera::Transforms`] - the derived matrices
//! - [`math`] - axis-angle and turntable rotations and their conversions
//! - [`options::RigOptions`] - runtime configuration (camera, interaction)
//!
//! # Architecture
//!
//! A rig owns its [`camera::CameraParameters`], the single source of
//! truth. Gestures from a [`host::InteractionHost`] pass through a
//! [`input::GestureTracker`] into the rig, which selects a handler from
//! [`interaction`]. The handler computes one new parameter value, the rig
//! validates and stores it, recomputes every matrix once and notifies
//! listeners. Nothing writes to the matrices directly.

pub mod camera;
pub mod error;
pub mod host;
pub mod input;
pub mod interaction;
pub mod math;
pub mod options;
pub mod rig;

pub use error::RigError;
pub use host::{HeadlessHost, InteractionHost, SharedHost, Viewport};
pub use rig::{ArcballRig, CameraRig, OrbitalRig, TurntableRig};
