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
// Function signature hygiene
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Eased orbit camera for third-person and tactical views.
//!
//! The camera follows one subject at a fixed distance, height and pitch,
//! steps its yaw in fixed increments on command, retargets to new subjects,
//! and eases every change over time instead of snapping.
//!
//! # Key entry points
//!
//! - [`camera::OrbitCameraController`] - the per-frame state machine
//! - [`camera::OrbitRig`] - orbit-offset geometry
//! - [`scene::SubjectRegistry`] - followed-subject storage
//! - [`options::Options`] - TOML-backed configuration (orbit shape, timing,
//!   key bindings)
//! - [`util::easing`] - the time-scaled cubic ease-in-out curve
//!
//! # Frame contract
//!
//! The host initializes the controller once, then calls
//! [`advance`](camera::OrbitCameraController::advance) once per frame with
//! the elapsed seconds. Commands issued before an `advance` take effect in
//! that same `advance`.

pub mod camera;
pub mod error;
pub mod input;
pub mod options;
pub mod scene;
pub mod util;

pub use camera::{CameraPose, EulerAngles, OrbitCameraController, PoseSink};
pub use error::CameraError;
pub use options::Options;
