//! wgpu render pipeline for sphere meshes.
//!
//! A solid and an optional wireframe pipeline. Per-object uniforms live in bind group 0;
//! the mesh supplies vertex and index buffers.

use crate::gpu::DEPTH_FORMAT;

use super::types::SphereVertex;

/// Per-object uniforms: transforms, base color, and the light.
///
/// Layout: 2 × mat4 + 4 × vec4 = 192 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ObjectUniforms {
    /// Model-View-Projection matrix (column-major).
    pub mvp: [f32; 16],
    /// Model matrix for world-space normal transform.
    pub model: [f32; 16],
    /// Base color (RGB) and alpha.
    pub color: [f32; 4],
    /// World-space light position in xyz; w = 1.0 draws the object unlit.
    pub light: [f32; 4],
    /// Light RGB; w unused.
    pub light_color: [f32; 4],
    /// World-space camera position in xyz for the specular term.
    pub view_pos: [f32; 4],
}

/// Sphere shader pipelines sharing one uniform bind group layout.
///
/// `line` exists only when wireframe was requested.
pub struct SpherePipeline {
    pub bind_group_layout: wgpu::BindGroupLayout,
    fill: wgpu::RenderPipeline,
    line: Option<wgpu::RenderPipeline>,
}

impl SpherePipeline {
    /// Create sphere pipelines rendering to `format` with a depth buffer.
    ///
    /// `wireframe` requires `Features::POLYGON_MODE_LINE` on `device`.
    pub fn new(device: &wgpu::Device, format: wgpu::TextureFormat, wireframe: bool) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("sphere shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("../shaders/sphere.wgsl").into()),
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("sphere bind group layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: std::num::NonZeroU64::new(
                        std::mem::size_of::<ObjectUniforms>() as u64,
                    ),
                },
                count: None,
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("sphere pipeline layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let fill = build_pipeline(device, &pipeline_layout, &shader, format, wgpu::PolygonMode::Fill);
        let line = wireframe.then(|| {
            build_pipeline(device, &pipeline_layout, &shader, format, wgpu::PolygonMode::Line)
        });

        Self {
            bind_group_layout,
            fill,
            line,
        }
    }

    /// Solid pipeline.
    pub fn fill(&self) -> &wgpu::RenderPipeline {
        &self.fill
    }

    /// Wireframe pipeline, or the solid one when wireframe is unavailable.
    pub fn outline(&self) -> &wgpu::RenderPipeline {
        self.line.as_ref().unwrap_or(&self.fill)
    }

    pub fn has_wireframe(&self) -> bool {
        self.line.is_some()
    }
}

fn build_pipeline(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    shader: &wgpu::ShaderModule,
    format: wgpu::TextureFormat,
    polygon_mode: wgpu::PolygonMode,
) -> wgpu::RenderPipeline {
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(match polygon_mode {
            wgpu::PolygonMode::Fill => "sphere pipeline (fill)",
            _ => "sphere pipeline (line)",
        }),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some("vs_main"),
            buffers: &[SphereVertex::LAYOUT],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend: Some(wgpu::BlendState::REPLACE),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: Some(wgpu::Face::Back),
            polygon_mode,
            ..Default::default()
        },
        depth_stencil: Some(wgpu::DepthStencilState {
            format: DEPTH_FORMAT,
            depth_write_enabled: true,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState::default(),
        multiview: None,
        cache: None,
    })
}
