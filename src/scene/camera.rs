use glam::{Mat4, Vec3};

pub const DEFAULT_FOV_DEGREES: f32 = 75.0;
pub const DEFAULT_NEAR: f32 = 0.1;
pub const DEFAULT_FAR: f32 = 1000.0;

/// Parallax target scale and smoothing factor for pointer movement
pub const POINTER_PARALLAX: f32 = 0.1;
pub const POINTER_SMOOTHING: f32 = 0.05;

/// Perspective camera that always looks at a fixed target
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerspectiveCamera {
    pub position: Vec3,
    pub target: Vec3,
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    aspect: f32,
    projection: Mat4,
}

impl PerspectiveCamera {
    pub fn new(fov_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        let mut camera = Self {
            position: Vec3::ZERO,
            target: Vec3::NEG_Z,
            fov_degrees,
            near,
            far,
            aspect,
            projection: Mat4::IDENTITY,
        };
        camera.update_projection();
        camera
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /// Set aspect to `width / height` and rebuild the projection
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height as f32;
        self.update_projection();
    }

    pub fn update_projection(&mut self) {
        self.projection =
            Mat4::perspective_rh(self.fov_degrees.to_radians(), self.aspect, self.near, self.far);
    }

    pub fn look_at(&mut self, target: Vec3) {
        self.target = target;
    }

    pub fn projection_matrix(&self) -> Mat4 {
        self.projection
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection * self.view_matrix()
    }

    /// Ease x/y toward the pointer parallax target and re-aim at `focus`
    pub fn follow_pointer(&mut self, x: f32, y: f32, focus: Vec3) {
        self.position.x += (x * POINTER_PARALLAX - self.position.x) * POINTER_SMOOTHING;
        self.position.y += (y * POINTER_PARALLAX - self.position.y) * POINTER_SMOOTHING;
        self.look_at(focus);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> PerspectiveCamera {
        let mut camera = PerspectiveCamera::new(DEFAULT_FOV_DEGREES, 16.0 / 9.0, DEFAULT_NEAR, DEFAULT_FAR);
        camera.position = Vec3::new(0.0, 0.0, 5.0);
        camera.look_at(Vec3::ZERO);
        camera
    }

    #[test]
    fn viewport_sets_exact_aspect() {
        let mut camera = camera();
        camera.set_viewport(1024, 768);
        assert_eq!(camera.aspect(), 1024.0 / 768.0);

        let expected = Mat4::perspective_rh(75f32.to_radians(), 1024.0 / 768.0, 0.1, 1000.0);
        assert!(camera.projection_matrix().abs_diff_eq(expected, 1e-6));
    }

    #[test]
    fn origin_projects_to_screen_center() {
        let camera = camera();
        let clip = camera.view_projection() * Vec3::ZERO.extend(1.0);
        let ndc = clip.truncate() / clip.w;
        assert!(ndc.x.abs() < 1e-5);
        assert!(ndc.y.abs() < 1e-5);
        assert!((0.0..=1.0).contains(&ndc.z));
    }

    #[test]
    fn follow_pointer_moves_five_percent() {
        let mut camera = camera();
        camera.follow_pointer(1.0, -1.0, Vec3::ZERO);

        assert!((camera.position.x - 0.005).abs() < 1e-7);
        assert!((camera.position.y + 0.005).abs() < 1e-7);
        assert_eq!(camera.position.z, 5.0);
        assert_eq!(camera.target, Vec3::ZERO);
    }
}
