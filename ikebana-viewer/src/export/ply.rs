use bevy::math::Vec3;
use std::fmt::Write;

/// ASCII PLY with a single vertex element of `x y z` floats. No normals,
/// UVs, colours or faces.
pub fn serialize_ascii_ply(points: &[Vec3]) -> String {
    let mut out = String::with_capacity(96 + points.len() * 32);
    out.push_str("ply\n");
    out.push_str("format ascii 1.0\n");
    let _ = writeln!(out, "element vertex {}", points.len());
    out.push_str("property float x\n");
    out.push_str("property float y\n");
    out.push_str("property float z\n");
    out.push_str("end_header\n");
    for point in points {
        let _ = writeln!(out, "{} {} {}", point.x, point.y, point.z);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_declares_only_positions() {
        let ply = serialize_ascii_ply(&[Vec3::new(1.0, 2.5, -3.0), Vec3::ZERO]);
        let (header, body) = ply.split_once("end_header\n").unwrap();

        assert!(header.starts_with("ply\nformat ascii 1.0\n"));
        assert!(header.contains("element vertex 2\n"));
        assert_eq!(header.matches("property").count(), 3);
        assert!(!header.contains("face"));
        assert_eq!(body, "1 2.5 -3\n0 0 0\n");
    }

    #[test]
    fn empty_cloud_is_still_valid() {
        let ply = serialize_ascii_ply(&[]);
        assert!(ply.contains("element vertex 0\n"));
        assert!(ply.ends_with("end_header\n"));
    }
}
