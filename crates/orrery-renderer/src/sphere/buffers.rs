//! GPU-resident sphere mesh: vertex + index buffers and the draw call.

use std::ops::Range;

use wgpu::util::DeviceExt;

use crate::gpu::RendererError;

use super::mesh::SphereGeometry;
use super::types::SphereVertex;

/// Parameters of the indexed draw issued by [`SphereMesh::draw`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawCall {
    pub indices: Range<u32>,
    pub base_vertex: i32,
    pub instances: Range<u32>,
    pub index_format: wgpu::IndexFormat,
}

impl DrawCall {
    /// Single-instance draw over every index of `geometry`.
    pub fn for_geometry(geometry: &SphereGeometry) -> Self {
        Self::full(geometry.index_count() as u32)
    }

    fn full(index_count: u32) -> Self {
        Self {
            indices: 0..index_count,
            base_vertex: 0,
            instances: 0..1,
            index_format: wgpu::IndexFormat::Uint32,
        }
    }
}

/// A sphere uploaded to the GPU.
///
/// Owns its vertex and index buffers exclusively; both are destroyed when the
/// mesh is dropped. Geometry is static after upload.
#[derive(Debug)]
pub struct SphereMesh {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    vertex_count: u32,
    index_count: u32,
    x_segments: u32,
    y_segments: u32,
}

impl SphereMesh {
    /// Generate a sphere and upload it.
    pub fn from_segments(
        device: &wgpu::Device,
        x_segments: u32,
        y_segments: u32,
    ) -> Result<Self, RendererError> {
        let geometry = SphereGeometry::generate(x_segments, y_segments)?;
        Self::new(device, &geometry)
    }

    /// Upload pre-generated geometry into static vertex and index buffers.
    ///
    /// Fails with [`RendererError::ResourceAllocation`] if a buffer exceeds the
    /// device limit or the device reports an allocation/validation error.
    pub fn new(device: &wgpu::Device, geometry: &SphereGeometry) -> Result<Self, RendererError> {
        let vertex_bytes: &[u8] = bytemuck::cast_slice(geometry.vertices());
        let index_bytes: &[u8] = bytemuck::cast_slice(geometry.indices());

        let max = device.limits().max_buffer_size;
        for (label, len) in [("vertex", vertex_bytes.len()), ("index", index_bytes.len())] {
            if len as u64 > max {
                return Err(RendererError::ResourceAllocation(format!(
                    "sphere {label} buffer of {len} bytes exceeds device limit of {max} bytes"
                )));
            }
        }

        device.push_error_scope(wgpu::ErrorFilter::OutOfMemory);
        device.push_error_scope(wgpu::ErrorFilter::Validation);

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("sphere vertex buffer"),
            contents: vertex_bytes,
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("sphere index buffer"),
            contents: index_bytes,
            usage: wgpu::BufferUsages::INDEX,
        });

        let validation = pollster::block_on(device.pop_error_scope());
        let out_of_memory = pollster::block_on(device.pop_error_scope());
        if let Some(err) = out_of_memory.or(validation) {
            vertex_buffer.destroy();
            index_buffer.destroy();
            return Err(RendererError::ResourceAllocation(err.to_string()));
        }

        tracing::debug!(
            x_segments = geometry.x_segments(),
            y_segments = geometry.y_segments(),
            vertices = geometry.vertex_count(),
            indices = geometry.index_count(),
            bytes = vertex_bytes.len() + index_bytes.len(),
            "sphere mesh uploaded"
        );

        Ok(Self {
            vertex_buffer,
            index_buffer,
            vertex_count: geometry.vertex_count() as u32,
            index_count: geometry.index_count() as u32,
            x_segments: geometry.x_segments(),
            y_segments: geometry.y_segments(),
        })
    }

    /// The parameters `draw` issues. Identical on every call.
    pub fn draw_call(&self) -> DrawCall {
        DrawCall::full(self.index_count)
    }

    /// Bind the mesh buffers and draw every triangle.
    ///
    /// Pipeline and bind groups are the caller's responsibility; no other
    /// pass state is touched.
    pub fn draw(&self, pass: &mut wgpu::RenderPass<'_>) {
        let call = self.draw_call();
        pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        pass.set_index_buffer(self.index_buffer.slice(..), call.index_format);
        pass.draw_indexed(call.indices, call.base_vertex, call.instances);
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    pub fn index_count(&self) -> u32 {
        self.index_count
    }

    pub fn segments(&self) -> (u32, u32) {
        (self.x_segments, self.y_segments)
    }

    /// Size of the vertex buffer in bytes.
    pub fn vertex_buffer_size(&self) -> u64 {
        self.vertex_buffer.size()
    }

    /// Size of the index buffer in bytes.
    pub fn index_buffer_size(&self) -> u64 {
        self.index_buffer.size()
    }
}

impl Drop for SphereMesh {
    fn drop(&mut self) {
        self.vertex_buffer.destroy();
        self.index_buffer.destroy();
        tracing::debug!(
            x_segments = self.x_segments,
            y_segments = self.y_segments,
            "sphere mesh released"
        );
    }
}

// =============================================================================
// Tests
// =============================================================================
