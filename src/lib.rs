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

//! Interactive GPU compute-raytracer viewer built on wgpu.
//!
//! Photon renders its entire scene inside a compute kernel and presents the
//! kernel's output image by blitting it onto a full-screen quad. The crate's
//! real subject is the frame loop: how accumulated input becomes per-frame
//! camera state, how that state is packed and handed to the compute
//! dispatch, and how the dispatch's output reaches the display surface.
//!
//! # Key entry points
//!
//! - [`Viewer`] - the windowed application loop
//! - [`camera::Camera`] / [`camera::CameraController`] - fly-camera state
//!   and input integration
//! - [`renderer::Renderer`] - compute dispatch + quad-blit presentation
//! - [`options::Options`] - runtime configuration (window size, camera
//!   speed and sensitivity)
//!
//! # Architecture
//!
//! One logical thread owns everything: the winit event loop polls input,
//! advances the camera, and submits GPU work. Per frame the raytrace pass
//! writes the storage image and the blit pass samples it; the two
//! submissions go to the same queue, whose in-order execution is the only
//! synchronization between the write and the read.

pub mod camera;
pub mod error;
pub mod gpu;
pub mod input;
pub mod options;
pub mod renderer;
pub mod util;
pub mod viewer;

pub use error::PhotonError;
pub use viewer::{Viewer, ViewerBuilder};
