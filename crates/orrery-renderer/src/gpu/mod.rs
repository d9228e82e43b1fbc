mod context;
mod types;

pub use context::*;
pub use types::*;

/// Headless device for GPU tests, or `None` on machines without any adapter.
/// Requests `POLYGON_MODE_LINE` when the adapter offers it.
#[cfg(test)]
pub(crate) fn headless_device() -> Option<(wgpu::Device, wgpu::Queue)> {
    let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
    let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
        power_preference: wgpu::PowerPreference::LowPower,
        force_fallback_adapter: false,
        compatible_surface: None,
    }))?;
    let desc = wgpu::DeviceDescriptor {
        label: Some("orrery test device"),
        required_features: adapter.features() & wgpu::Features::POLYGON_MODE_LINE,
        ..Default::default()
    };
    pollster::block_on(adapter.request_device(&desc, None)).ok()
}
