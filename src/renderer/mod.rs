//! Rendering pipeline: compute dispatch followed by quad-blit presentation.

/// Full-screen quad blit of the raytraced image.
pub mod blit;
/// Compute raytrace pass and work-group sizing.
pub mod raytrace;

use crate::camera::core::Camera;
use crate::gpu::render_context::{RenderContext, RenderContextError};
use self::blit::BlitPass;
use self::raytrace::RaytracePass;

/// Owns the GPU context, the raytrace pass, and the blit pass, and
/// sequences them once per frame: [`dispatch`](Self::dispatch) then
/// [`present`](Self::present).
///
/// Both submissions target the same queue. The queue's in-order execution
/// of the compute write followed by the sampled read of the same image is
/// the only synchronization between the two passes; no explicit barrier is
/// issued beyond what the queue guarantees for same-queue dependent
/// operations.
pub struct Renderer {
    context: RenderContext,
    raytrace: RaytracePass,
    blit: BlitPass,
}

impl Renderer {
    /// Create the renderer for the given window surface and viewport size.
    ///
    /// # Errors
    ///
    /// Returns [`RenderContextError`] if GPU initialization fails.
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        size: (u32, u32),
    ) -> Result<Self, RenderContextError> {
        let context = RenderContext::new(window, size).await?;
        let raytrace = RaytracePass::new(&context);
        let blit = BlitPass::new(&context, &raytrace.output_view);
        Ok(Self {
            context,
            raytrace,
            blit,
        })
    }

    /// Upload the camera state and submit the compute dispatch that fills
    /// the output image. Call once per frame, before
    /// [`present`](Self::present).
    pub fn dispatch(&mut self, camera: &Camera) {
        let mut encoder = self.context.create_encoder();
        self.raytrace.dispatch(&self.context, &mut encoder, camera);
        self.context.submit(encoder);
    }

    /// Acquire the swapchain frame, blit the output image onto it, and
    /// present.
    ///
    /// # Errors
    ///
    /// Returns [`wgpu::SurfaceError`] if the swapchain frame cannot be
    /// acquired; the caller decides whether to reconfigure and continue
    /// (`Lost`/`Outdated`) or to stop the loop.
    pub fn present(&mut self) -> Result<(), wgpu::SurfaceError> {
        let frame = self.context.next_frame()?;
        let view = frame.texture.create_view(&Default::default());

        let mut encoder = self.context.create_encoder();
        self.blit.render(&mut encoder, &view);
        self.context.submit(encoder);

        frame.present();
        Ok(())
    }

    /// Re-apply the surface configuration after a lost or outdated
    /// swapchain.
    pub fn reconfigure(&self) {
        self.context.reconfigure();
    }
}
