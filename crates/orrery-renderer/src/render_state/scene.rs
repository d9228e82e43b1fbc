//! Per-frame scene inputs and uniform computation for the body and the
//! light indicator.

use orrery_config::OrreryConfig;

use crate::camera::Camera;
use crate::sphere::matrix::{self as mat, Mat4, Vec3};
use crate::sphere::ObjectUniforms;

/// Everything that changes between frames.
#[derive(Debug, Clone, Copy)]
pub struct SceneFrame<'a> {
    pub camera: &'a Camera,
    pub light_position: Vec3,
}

/// Static per-object appearance derived from config.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct SceneStyle {
    pub body_model: Mat4,
    pub body_color: [f32; 4],
    pub light_color: [f32; 4],
}

impl SceneStyle {
    pub fn from_config(config: &OrreryConfig) -> Self {
        let [x, y, z] = config.body.offset.map(|c| c as f32);
        let body_model = mat::mul(&mat::translate(x, y, z), &mat::scale(config.body.scale as f32));
        Self {
            body_model,
            body_color: rgba(config.body.color),
            light_color: rgba(config.light.color),
        }
    }
}

fn rgba(rgb: [f64; 3]) -> [f32; 4] {
    [rgb[0] as f32, rgb[1] as f32, rgb[2] as f32, 1.0]
}

/// Uniforms for the lit body, shaded by the light's color as seen from `eye`.
pub(super) fn body_uniforms(
    style: &SceneStyle,
    view_proj: &Mat4,
    light: Vec3,
    eye: Vec3,
) -> ObjectUniforms {
    ObjectUniforms {
        mvp: mat::mul(view_proj, &style.body_model),
        model: style.body_model,
        color: style.body_color,
        light: [light[0], light[1], light[2], 0.0],
        light_color: style.light_color,
        view_pos: [eye[0], eye[1], eye[2], 1.0],
    }
}

/// Uniforms for the unit light sphere centered on the light position.
pub(super) fn light_uniforms(
    style: &SceneStyle,
    view_proj: &Mat4,
    light: Vec3,
    eye: Vec3,
) -> ObjectUniforms {
    let model = mat::translate(light[0], light[1], light[2]);
    ObjectUniforms {
        mvp: mat::mul(view_proj, &model),
        model,
        color: style.light_color,
        light: [light[0], light[1], light[2], 1.0],
        light_color: style.light_color,
        view_pos: [eye[0], eye[1], eye[2], 1.0],
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn style() -> SceneStyle {
        SceneStyle::from_config(&OrreryConfig::default())
    }

    #[test]
    fn body_model_applies_scale_then_offset() {
        let s = style();
        // default: scale 1.5, offset (0, -1.5, 0)
        let top = mat::transform_point(&s.body_model, [0.0, 1.0, 0.0]);
        assert!((top[1] - 0.0).abs() < 1e-5);
        assert!((s.body_model[0] - 1.5).abs() < 1e-6);
        assert!((s.body_model[13] - (-1.5)).abs() < 1e-6);
    }

    #[test]
    fn light_uniforms_translate_to_light_and_are_unlit() {
        let s = style();
        let u = light_uniforms(&s, &mat::IDENTITY, [10.0, 0.0, 0.0], [0.0; 3]);
        assert!((u.model[12] - 10.0).abs() < 1e-6);
        assert!((u.light[3] - 1.0).abs() < f32::EPSILON);
        assert_eq!(u.color, [1.0, 1.0, 1.0, 1.0]);
        // identity view-projection: mvp == model
        assert_eq!(u.mvp, u.model);
    }

    #[test]
    fn body_uniforms_carry_light_position_lit() {
        let s = style();
        let u = body_uniforms(&s, &mat::IDENTITY, [0.0, 0.0, 10.0], [0.0, 0.5, 15.0]);
        assert_eq!(u.light, [0.0, 0.0, 10.0, 0.0]);
        assert_eq!(u.view_pos, [0.0, 0.5, 15.0, 1.0]);
        assert_eq!(u.model, s.body_model);
        let c = 0.8f64 as f32;
        assert_eq!(u.color, [c, c, c, 1.0]);
    }

    #[test]
    fn body_is_tinted_by_configured_light_color() {
        let mut config = OrreryConfig::default();
        config.light.color = [1.0, 0.5, 0.25];
        let s = SceneStyle::from_config(&config);
        let u = body_uniforms(&s, &mat::IDENTITY, [10.0, 0.0, 0.0], [0.0; 3]);
        assert_eq!(u.light_color, [1.0, 0.5, 0.25, 1.0]);
        // the body keeps its own base color
        assert_eq!(u.color, s.body_color);
    }

    #[test]
    fn light_mvp_changes_with_position() {
        let s = style();
        let cam = Camera::from_config(&OrreryConfig::default().camera);
        let vp = cam.view_projection(4.0 / 3.0);
        let a = light_uniforms(&s, &vp, [10.0, 0.0, 0.0], cam.position);
        let b = light_uniforms(&s, &vp, [0.0, 0.0, 10.0], cam.position);
        assert_ne!(a.mvp, b.mvp);
    }
}
