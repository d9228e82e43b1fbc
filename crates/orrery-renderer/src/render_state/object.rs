//! A drawable scene object: one sphere mesh plus its own uniform buffer.

use crate::sphere::{ObjectUniforms, SphereMesh};

/// Sphere mesh with a dedicated uniform buffer and bind group.
///
/// Each object gets its own buffer so several objects can be drawn in one
/// pass with uniforms written before submission.
pub struct SceneObject {
    pub mesh: SphereMesh,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

impl SceneObject {
    pub fn new(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        mesh: SphereMesh,
        label: &str,
    ) -> Self {
        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(&format!("{label} uniforms")),
            size: std::mem::size_of::<ObjectUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(&format!("{label} bind group")),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        Self {
            mesh,
            uniform_buffer,
            bind_group,
        }
    }

    /// Upload this frame's uniforms.
    pub fn update_uniforms(&self, queue: &wgpu::Queue, uniforms: &ObjectUniforms) {
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(uniforms));
    }

    /// Bind the object's uniforms and draw its mesh. The pipeline must
    /// already be set on `pass`.
    pub fn draw(&self, pass: &mut wgpu::RenderPass<'_>) {
        pass.set_bind_group(0, &self.bind_group, &[]);
        self.mesh.draw(pass);
    }
}
