use glam::{Mat4, Vec3, Vec4};

/// Vertical field of view shared by rendering and pointer picking.
pub const FOVY_RADIANS: f32 = std::f32::consts::FRAC_PI_4;
pub const ZNEAR: f32 = 0.1;
pub const ZFAR: f32 = 100.0;

/// View-projection of the fixed camera on +Z looking at the origin.
pub fn view_proj(aspect: f32, camera_z: f32) -> Mat4 {
    let proj = Mat4::perspective_rh(FOVY_RADIANS, aspect.max(1e-3), ZNEAR, ZFAR);
    let view = Mat4::look_at_rh(Vec3::new(0.0, 0.0, camera_z), Vec3::ZERO, Vec3::Y);
    proj * view
}

#[inline]
/// Compute a world-space ray from pixel coordinates on a `width` x `height`
/// backing store.
///
/// Returns `(ray_origin, ray_direction)` in world space; the direction is
/// normalized.
pub fn screen_to_world_ray(
    width: f32,
    height: f32,
    sx: f32,
    sy: f32,
    camera_z: f32,
) -> (Vec3, Vec3) {
    let width = width.max(1.0);
    let height = height.max(1.0);
    let ndc_x = (2.0 * sx / width) - 1.0;
    let ndc_y = 1.0 - (2.0 * sy / height);
    let inv = view_proj(width / height, camera_z).inverse();
    let p_far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
    let p1: Vec3 = p_far.truncate() / p_far.w;
    let ro = Vec3::new(0.0, 0.0, camera_z);
    let rd = (p1 - ro).normalize();
    (ro, rd)
}

/// Project a pixel onto the point `distance` units along its view ray.
pub fn pointer_world(
    width: f32,
    height: f32,
    sx: f32,
    sy: f32,
    camera_z: f32,
    distance: f32,
) -> Vec3 {
    let (ro, rd) = screen_to_world_ray(width, height, sx, sy, camera_z);
    ro + rd * distance
}
