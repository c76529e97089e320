use glam::{Mat4, Vec3};

/// Right-handed look-at transform from eye, target and up.
///
/// `up` and `at - eye` must not be parallel; the controller refuses look
/// targets that would make them so.
pub fn look_at(eye: Vec3, at: Vec3, up: Vec3) -> Mat4 {
    Mat4::look_at_rh(eye, at, up)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eye_maps_to_origin() {
        let eye = Vec3::new(8.0, 2.0, 25.0);
        let view = look_at(eye, Vec3::new(8.0, 2.0, 8.0), Vec3::Y);
        assert!(view.transform_point3(eye).abs_diff_eq(Vec3::ZERO, 1e-5));
    }

    #[test]
    fn target_lies_on_negative_z() {
        let eye = Vec3::new(1.0, 1.0, 1.0);
        let at = Vec3::new(4.0, 5.0, 1.0);
        let p = look_at(eye, at, Vec3::Y).transform_point3(at);
        assert!(p.abs_diff_eq(Vec3::new(0.0, 0.0, -5.0), 1e-5));
    }
}
