//! Compute raytrace pass.
//!
//! Owns the output storage image and the camera uniform buffer, and encodes
//! the per-frame compute dispatch that fills the image. The kernel itself is
//! an opaque WGSL program; this pass only upholds the binding and
//! work-group contract it declares.

use wgpu::util::DeviceExt;

use crate::camera::core::{Camera, CameraUniform};
use crate::gpu::render_context::RenderContext;

/// Local work-group edge length in threads. Must match the
/// `@workgroup_size` declared by the compute kernel; a mismatch produces
/// wasted invocations at the edges or gaps in the image.
pub const WORKGROUP_SIZE: u32 = 16;

/// Number of work groups needed to cover `pixels` with
/// [`WORKGROUP_SIZE`]-wide groups (ceiling division). The viewport need not
/// be a multiple of the group size; out-of-bounds invocations return early
/// in the kernel.
#[must_use]
pub fn workgroup_count(pixels: u32) -> u32 {
    pixels.div_ceil(WORKGROUP_SIZE)
}

/// The compute pass that renders the scene into the storage image.
pub struct RaytracePass {
    pipeline: wgpu::ComputePipeline,
    bind_group: wgpu::BindGroup,
    camera_buffer: wgpu::Buffer,
    uniform: CameraUniform,
    /// The output image. Written only by this pass's dispatch, read only by
    /// the blit pass's sampled fetch.
    pub output_texture: wgpu::Texture,
    /// View of the output image, shared with the blit pass at creation.
    pub output_view: wgpu::TextureView,
    width: u32,
    height: u32,
}

impl RaytracePass {
    /// Image format of the output storage texture. `rgba16float` is a core
    /// storage format that the blit pass can also sample with filtering.
    pub const OUTPUT_FORMAT: wgpu::TextureFormat =
        wgpu::TextureFormat::Rgba16Float;

    /// Create the pass with an output image sized to the context's
    /// viewport.
    #[must_use]
    pub fn new(context: &RenderContext) -> Self {
        let width = context.config.width;
        let height = context.config.height;

        let output_texture =
            context.device.create_texture(&wgpu::TextureDescriptor {
                label: Some("Raytrace Output Texture"),
                size: wgpu::Extent3d {
                    width,
                    height,
                    depth_or_array_layers: 1,
                },
                mip_level_count: 1,
                sample_count: 1,
                dimension: wgpu::TextureDimension::D2,
                format: Self::OUTPUT_FORMAT,
                usage: wgpu::TextureUsages::STORAGE_BINDING
                    | wgpu::TextureUsages::TEXTURE_BINDING,
                view_formats: &[],
            });
        let output_view = output_texture.create_view(&Default::default());

        let uniform = CameraUniform::new();
        let camera_buffer = context.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("Raytrace Camera Buffer"),
                contents: bytemuck::cast_slice(&[uniform]),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            },
        );

        let bind_group_layout = context.device.create_bind_group_layout(
            &wgpu::BindGroupLayoutDescriptor {
                label: Some("Raytrace Bind Group Layout"),
                entries: &[
                    // binding 0: write-only output image
                    wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::COMPUTE,
                        ty: wgpu::BindingType::StorageTexture {
                            access: wgpu::StorageTextureAccess::WriteOnly,
                            format: Self::OUTPUT_FORMAT,
                            view_dimension: wgpu::TextureViewDimension::D2,
                        },
                        count: None,
                    },
                    // binding 1: camera uniform
                    wgpu::BindGroupLayoutEntry {
                        binding: 1,
                        visibility: wgpu::ShaderStages::COMPUTE,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: false,
                            min_binding_size: None,
                        },
                        count: None,
                    },
                ],
            },
        );

        let bind_group =
            context
                .device
                .create_bind_group(&wgpu::BindGroupDescriptor {
                    label: Some("Raytrace Bind Group"),
                    layout: &bind_group_layout,
                    entries: &[
                        wgpu::BindGroupEntry {
                            binding: 0,
                            resource: wgpu::BindingResource::TextureView(
                                &output_view,
                            ),
                        },
                        wgpu::BindGroupEntry {
                            binding: 1,
                            resource: camera_buffer.as_entire_binding(),
                        },
                    ],
                });

        let shader = context.device.create_shader_module(
            wgpu::ShaderModuleDescriptor {
                label: Some("Raytrace Kernel"),
                source: wgpu::ShaderSource::Wgsl(
                    include_str!("../../assets/shaders/raytrace.wgsl").into(),
                ),
            },
        );

        let pipeline_layout = context.device.create_pipeline_layout(
            &wgpu::PipelineLayoutDescriptor {
                label: Some("Raytrace Pipeline Layout"),
                bind_group_layouts: &[&bind_group_layout],
                push_constant_ranges: &[],
            },
        );

        let pipeline = context.device.create_compute_pipeline(
            &wgpu::ComputePipelineDescriptor {
                label: Some("Raytrace Pipeline"),
                layout: Some(&pipeline_layout),
                module: &shader,
                entry_point: Some("main"),
                compilation_options: Default::default(),
                cache: None,
            },
        );

        Self {
            pipeline,
            bind_group,
            camera_buffer,
            uniform,
            output_texture,
            output_view,
            width,
            height,
        }
    }

    /// Upload the camera state and encode the compute dispatch covering the
    /// output image.
    pub fn dispatch(
        &mut self,
        context: &RenderContext,
        encoder: &mut wgpu::CommandEncoder,
        camera: &Camera,
    ) {
        self.uniform.update(camera);
        context.queue.write_buffer(
            &self.camera_buffer,
            0,
            bytemuck::cast_slice(&[self.uniform]),
        );

        let mut pass =
            encoder.begin_compute_pass(&wgpu::ComputePassDescriptor {
                label: Some("Raytrace Pass"),
                timestamp_writes: None,
            });
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, &self.bind_group, &[]);
        pass.dispatch_workgroups(
            workgroup_count(self.width),
            workgroup_count(self.height),
            1,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workgroup_counts_for_exact_multiples() {
        assert_eq!(workgroup_count(1024), 64);
        assert_eq!(workgroup_count(768), 48);
    }

    #[test]
    fn workgroup_counts_round_up_for_partial_tiles() {
        assert_eq!(workgroup_count(1000), 63);
        assert_eq!(workgroup_count(700), 44);
        assert_eq!(workgroup_count(1), 1);
        assert_eq!(workgroup_count(17), 2);
    }
}
