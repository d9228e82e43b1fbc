pub mod camera;
pub mod gpu;
pub mod render_state;
pub mod sphere;

pub use camera::{Camera, CameraMovement};
pub use gpu::{GpuContext, RendererError};
pub use render_state::{RenderState, SceneFrame};
pub use sphere::{DrawCall, MeshError, SphereGeometry, SphereMesh, SphereVertex};
