//! GPU resource management.
//!
//! Provides wgpu instance/device/queue/surface initialization and the
//! per-frame encoder and swapchain helpers the renderer builds on.

/// wgpu device, surface, and queue initialization.
pub mod render_context;

pub use render_context::{RenderContext, RenderContextError};
