//! In-place geometric transforms over every frame.

use glam::{DMat3, DVec3, Vec3};

use super::PointFrames;

/// Rotation matrix `Rz · Ry · Rx` for angles given in degrees.
///
/// Applied to a column vector, the x rotation happens first, then y, then z.
pub fn rotation_matrix(deg_x: f64, deg_y: f64, deg_z: f64) -> DMat3 {
    let rx = DMat3::from_rotation_x(deg_x.to_radians());
    let ry = DMat3::from_rotation_y(deg_y.to_radians());
    let rz = DMat3::from_rotation_z(deg_z.to_radians());
    rz * ry * rx
}

impl PointFrames {
    /// Translate every position in every frame.
    pub fn apply_offset(&mut self, dx: f32, dy: f32, dz: f32) -> &mut Self {
        let offset = Vec3::new(dx, dy, dz);
        self.for_each_position(|p| *p += offset);
        self
    }

    /// Rotate every position about the origin, by `deg_x` around the x axis,
    /// then `deg_y` around y, then `deg_z` around z.
    pub fn apply_rotation(&mut self, deg_x: f32, deg_y: f32, deg_z: f32) -> &mut Self {
        let matrix = rotation_matrix(deg_x.into(), deg_y.into(), deg_z.into());
        self.for_each_position(|p| *p = (matrix * DVec3::from(*p)).as_vec3());
        self
    }

    /// Scale every position component-wise.
    pub fn apply_scale(&mut self, sx: f32, sy: f32, sz: f32) -> &mut Self {
        let scale = Vec3::new(sx, sy, sz);
        self.for_each_position(|p| *p *= scale);
        self
    }

    fn for_each_position(&mut self, mut f: impl FnMut(&mut Vec3)) {
        for frame in self.frames_mut() {
            frame.positions_mut().iter_mut().for_each(&mut f);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Frame, Point};

    fn single_point(position: [f32; 3]) -> PointFrames {
        let mut pf = PointFrames::new();
        pf.add_point(Point::new(255, 0, 0), None).unwrap();
        pf.add_frame(Frame::from_arrays(&[position])).unwrap();
        pf
    }

    fn assert_close(actual: Vec3, expected: Vec3) {
        assert!(
            actual.abs_diff_eq(expected, 1e-5),
            "{:?} != {:?}",
            actual,
            expected
        );
    }

    #[test]
    fn test_apply_offset() {
        let mut pf = single_point([1.0, 2.0, 3.0]);
        pf.apply_offset(1.0, 1.0, 1.0);
        assert_eq!(pf.get_position(0, 0).unwrap(), Vec3::new(2.0, 3.0, 4.0));
    }

    #[test]
    fn test_apply_scale() {
        let mut pf = single_point([1.0, 2.0, 3.0]);
        pf.apply_scale(2.0, 2.0, 2.0);
        assert_eq!(pf.get_position(0, 0).unwrap(), Vec3::new(2.0, 4.0, 6.0));
    }

    #[test]
    fn test_rotate_about_y() {
        let mut pf = single_point([1.0, 0.0, 0.0]);
        pf.apply_rotation(0.0, 90.0, 0.0);
        assert_close(pf.get_position(0, 0).unwrap(), Vec3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_rotate_about_x_and_z() {
        let mut pf = single_point([0.0, 1.0, 0.0]);
        pf.apply_rotation(90.0, 0.0, 0.0);
        assert_close(pf.get_position(0, 0).unwrap(), Vec3::new(0.0, 0.0, 1.0));

        let mut pf = single_point([1.0, 0.0, 0.0]);
        pf.apply_rotation(0.0, 0.0, 90.0);
        assert_close(pf.get_position(0, 0).unwrap(), Vec3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_rotation_order_x_then_z() {
        // x first leaves (1,0,0) alone, then z takes it to (0,1,0).
        // The reverse order would end at (0,0,1).
        let mut pf = single_point([1.0, 0.0, 0.0]);
        pf.apply_rotation(90.0, 0.0, 90.0);
        assert_close(pf.get_position(0, 0).unwrap(), Vec3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_transforms_chain_and_touch_all_frames() {
        let mut pf = PointFrames::new();
        pf.add_point(Point::new(1, 1, 1), None).unwrap();
        pf.add_point(Point::new(2, 2, 2), None).unwrap();
        pf.add_frame(Frame::from_arrays(&[[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]))
            .unwrap();
        pf.add_frame(Frame::from_arrays(&[[0.0, 0.0, 1.0], [1.0, 1.0, 1.0]]))
            .unwrap();

        pf.apply_scale(2.0, 3.0, 4.0).apply_offset(1.0, 1.0, 1.0);

        assert_eq!(pf.get_position(0, 0).unwrap(), Vec3::new(3.0, 1.0, 1.0));
        assert_eq!(pf.get_position(1, 0).unwrap(), Vec3::new(1.0, 4.0, 1.0));
        assert_eq!(pf.get_position(0, 1).unwrap(), Vec3::new(1.0, 1.0, 5.0));
        assert_eq!(pf.get_position(1, 1).unwrap(), Vec3::new(3.0, 4.0, 5.0));
    }

    #[test]
    fn test_transforms_do_not_affect_later_frames() {
        let mut pf = single_point([1.0, 1.0, 1.0]);
        pf.apply_offset(1.0, 0.0, 0.0);
        pf.add_frame(Frame::from_arrays(&[[1.0, 1.0, 1.0]])).unwrap();
        assert_eq!(pf.get_position(0, 0).unwrap(), Vec3::new(2.0, 1.0, 1.0));
        assert_eq!(pf.get_position(0, 1).unwrap(), Vec3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_rotation_matrix_is_orthonormal() {
        let m = rotation_matrix(30.0, -45.0, 120.0);
        assert!((m * m.transpose()).abs_diff_eq(DMat3::IDENTITY, 1e-12));
        assert!((m.determinant() - 1.0).abs() < 1e-12);
    }
}
