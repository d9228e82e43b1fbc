use std::sync::Arc;
use winit::window::Window;

use orrery_config::OrreryConfig;

use crate::gpu::{GpuContext, RendererError};
use crate::sphere::{SphereMesh, SpherePipeline};

use super::helpers::{clear_color, create_depth_texture, log_first_frame};
use super::object::SceneObject;
use super::scene::{body_uniforms, light_uniforms, SceneFrame, SceneStyle};

/// GPU context, sphere pipelines, and the two scene objects: the central
/// body and the orbiting light indicator.
pub struct RenderState {
    pub gpu: GpuContext,
    pipeline: SpherePipeline,
    body: SceneObject,
    light: SceneObject,
    style: SceneStyle,
    depth_view: wgpu::TextureView,
    pub clear_color: wgpu::Color,
}

impl RenderState {
    /// Create a fully initialized render state from a window.
    pub async fn new(window: Arc<Window>, config: &OrreryConfig) -> Result<Self, RendererError> {
        let gpu = GpuContext::new(window, config.render.vsync).await?;
        let device = &gpu.device;

        let pipeline = SpherePipeline::new(
            device,
            gpu.format(),
            config.light.wireframe && gpu.line_polygons,
        );

        let body_mesh =
            SphereMesh::from_segments(device, config.body.segments.x, config.body.segments.y)?;
        let light_mesh =
            SphereMesh::from_segments(device, config.light.segments.x, config.light.segments.y)?;
        tracing::info!(
            body_indices = body_mesh.index_count(),
            light_indices = light_mesh.index_count(),
            wireframe = pipeline.has_wireframe(),
            "Scene meshes ready"
        );

        let body = SceneObject::new(device, &pipeline.bind_group_layout, body_mesh, "body");
        let light = SceneObject::new(device, &pipeline.bind_group_layout, light_mesh, "light");

        let (_, depth_view) = create_depth_texture(device, gpu.size.width, gpu.size.height);

        Ok(Self {
            pipeline,
            body,
            light,
            style: SceneStyle::from_config(config),
            depth_view,
            clear_color: clear_color(config.render.clear_color),
            gpu,
        })
    }

    /// Handle a window resize by reconfiguring the surface and depth buffer.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.gpu.resize(width, height);
        let (_, view) =
            create_depth_texture(&self.gpu.device, self.gpu.size.width, self.gpu.size.height);
        self.depth_view = view;
    }

    /// Render one frame: body first, then the light indicator.
    ///
    /// A lost or outdated surface is reconfigured and the frame skipped.
    pub fn render(&mut self, frame: &SceneFrame<'_>) -> Result<(), RendererError> {
        let output = match self.gpu.current_texture() {
            Ok(t) => t,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                tracing::debug!("Surface lost or outdated, reconfiguring");
                self.gpu.reconfigure();
                return Ok(());
            }
            Err(wgpu::SurfaceError::Timeout) => {
                tracing::warn!("Surface texture timeout, skipping frame");
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let view_proj = frame.camera.view_projection(self.gpu.size.aspect());
        self.body.update_uniforms(
            &self.gpu.queue,
            &body_uniforms(
                &self.style,
                &view_proj,
                frame.light_position,
                frame.camera.position,
            ),
        );
        self.light.update_uniforms(
            &self.gpu.queue,
            &light_uniforms(
                &self.style,
                &view_proj,
                frame.light_position,
                frame.camera.position,
            ),
        );

        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("orrery scene encoder"),
            });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("orrery scene pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            pass.set_pipeline(self.pipeline.fill());
            self.body.draw(&mut pass);

            pass.set_pipeline(self.pipeline.outline());
            self.light.draw(&mut pass);
        }

        self.gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        log_first_frame(self.gpu.size.width, self.gpu.size.height, self.gpu.format());

        Ok(())
    }
}
