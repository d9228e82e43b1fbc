//! Frame rendering: surface acquisition, per-object uniforms, and the
//! single scene pass.

mod helpers;
mod object;
mod scene;
mod state;

pub use object::SceneObject;
pub use scene::SceneFrame;
pub use state::RenderState;
