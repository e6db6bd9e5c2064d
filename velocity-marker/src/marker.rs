use nalgebra as na;
use ros2_client::builtin_interfaces;

use crate::msg::{geometry_msgs, std_msgs, visualization_msgs::Marker};

/// Vector magnitudes at or below this render as an invisible marker.
const MIN_VELOCITY_NORM: f64 = 1e-6;

/// Arrow shaft diameter, in meters.
const ARROW_WIDTH: f64 = 0.05;

/// Creates an arrow marker ready for [`vector_to_marker`] updates.
///
/// The marker id is fixed at 0, so within a namespace every publish
/// overwrites the previous arrow instead of accumulating.
pub fn init_marker(frame_id: &str, ns: &str) -> Marker {
    Marker {
        header: std_msgs::Header {
            frame_id: frame_id.to_owned(),
            ..Default::default()
        },
        ns: ns.to_owned(),
        id: 0,
        type_: Marker::ARROW,
        action: Marker::ADD,
        scale: geometry_msgs::Vector3 {
            x: 1.0,
            y: 0.1,
            z: 0.1,
        },
        color: std_msgs::ColorRGBA {
            r: 0.6,
            g: 0.6,
            b: 0.0,
            a: 1.0,
        },
        // Zero pose (identity orientation) and zero lifetime (never
        // expires) come from the message defaults.
        ..Default::default()
    }
}

/// Encodes `vec` into `marker`: the arrow length is the vector magnitude
/// times `scale` and the arrow points along the vector.
///
/// Near-zero vectors collapse the marker to zero scale instead of picking
/// an arbitrary direction; the previous orientation is kept. The header
/// stamp is refreshed in both cases.
pub fn vector_to_marker(marker: &mut Marker, vec: &geometry_msgs::Vector3, scale: f64) {
    let velocity_vector = na::Vector3::new(vec.x, vec.y, vec.z);
    let norm = velocity_vector.norm();
    if norm > MIN_VELOCITY_NORM {
        marker.scale.x = norm * scale;
        marker.scale.y = ARROW_WIDTH;
        marker.scale.z = ARROW_WIDTH;
        let quat = rotation_from_x_axis(&velocity_vector);
        marker.pose.orientation.x = quat.coords.x;
        marker.pose.orientation.y = quat.coords.y;
        marker.pose.orientation.z = quat.coords.z;
        marker.pose.orientation.w = quat.coords.w;
    } else {
        marker.scale.x = 0.0;
        marker.scale.y = 0.0;
        marker.scale.z = 0.0;
    }
    // `builtin_interfaces::Time::now()` is crate-private in ros2-client, so
    // construct the same value (nanoseconds since the Unix epoch, ZERO on a
    // clock error) through the public `from_nanos` constructor.
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as i64)
        .unwrap_or(0);
    marker.header.stamp = builtin_interfaces::Time::from_nanos(nanos);
}

/// Minimal rotation mapping the +x axis onto `dir`.
fn rotation_from_x_axis(dir: &na::Vector3<f64>) -> na::UnitQuaternion<f64> {
    na::UnitQuaternion::rotation_between(&na::Vector3::x(), dir).unwrap_or_else(|| {
        // `dir` is anti-parallel to +x; any half turn around an axis in
        // the y-z plane satisfies the mapping, pick z.
        na::UnitQuaternion::from_axis_angle(&na::Vector3::z_axis(), std::f64::consts::PI)
    })
}

#[cfg(test)]
mod test {
    use assert_approx_eq::assert_approx_eq;

    use super::*;

    fn vec3(x: f64, y: f64, z: f64) -> geometry_msgs::Vector3 {
        geometry_msgs::Vector3 { x, y, z }
    }

    fn raw_orientation(marker: &Marker) -> na::Quaternion<f64> {
        na::Quaternion::new(
            marker.pose.orientation.w,
            marker.pose.orientation.x,
            marker.pose.orientation.y,
            marker.pose.orientation.z,
        )
    }

    fn rotated_x_axis(marker: &Marker) -> na::Vector3<f64> {
        let q = na::UnitQuaternion::from_quaternion(raw_orientation(marker));
        q * na::Vector3::x()
    }

    #[test]
    fn test_init_marker() {
        let marker = init_marker("world", "velocity");
        assert_eq!(marker.header.frame_id, "world");
        assert_eq!(marker.ns, "velocity");
        assert_eq!(marker.id, 0);
        assert_eq!(marker.type_, Marker::ARROW);
        assert_eq!(marker.action, Marker::ADD);
        assert_approx_eq!(marker.pose.position.x, 0.0);
        assert_approx_eq!(marker.pose.position.y, 0.0);
        assert_approx_eq!(marker.pose.position.z, 0.0);
        assert_approx_eq!(marker.pose.orientation.x, 0.0);
        assert_approx_eq!(marker.pose.orientation.y, 0.0);
        assert_approx_eq!(marker.pose.orientation.z, 0.0);
        assert_approx_eq!(marker.pose.orientation.w, 1.0);
        assert_approx_eq!(marker.scale.x, 1.0);
        assert_approx_eq!(marker.scale.y, 0.1);
        assert_approx_eq!(marker.scale.z, 0.1);
        assert_approx_eq!(f64::from(marker.color.r), 0.6);
        assert_approx_eq!(f64::from(marker.color.g), 0.6);
        assert_approx_eq!(f64::from(marker.color.b), 0.0);
        assert_approx_eq!(f64::from(marker.color.a), 1.0);
        assert_eq!(marker.lifetime.sec, 0);
        assert_eq!(marker.lifetime.nanosec, 0);
    }

    #[test]
    fn test_forward_vector_keeps_identity_orientation() {
        let mut marker = init_marker("world", "velocity");
        vector_to_marker(&mut marker, &vec3(2.0, 0.0, 0.0), 1.0);
        assert_approx_eq!(marker.scale.x, 2.0);
        assert_approx_eq!(marker.scale.y, 0.05);
        assert_approx_eq!(marker.scale.z, 0.05);
        assert_approx_eq!(marker.pose.orientation.x, 0.0);
        assert_approx_eq!(marker.pose.orientation.y, 0.0);
        assert_approx_eq!(marker.pose.orientation.z, 0.0);
        assert_approx_eq!(marker.pose.orientation.w, 1.0);
    }

    #[test]
    fn test_orientation_aligns_with_vector() {
        for vec in [
            vec3(1.0, 2.0, 3.0),
            vec3(-0.4, 0.2, -0.1),
            vec3(0.0, 0.0, 5.0),
            vec3(0.0, -2.0, 0.0),
        ] {
            let mut marker = init_marker("world", "velocity");
            vector_to_marker(&mut marker, &vec, 1.5);

            let dir = na::Vector3::new(vec.x, vec.y, vec.z);
            assert_approx_eq!(marker.scale.x, dir.norm() * 1.5);
            assert_approx_eq!(raw_orientation(&marker).norm(), 1.0);
            let rotated = rotated_x_axis(&marker);
            let dir = dir.normalize();
            assert_approx_eq!(rotated.x, dir.x);
            assert_approx_eq!(rotated.y, dir.y);
            assert_approx_eq!(rotated.z, dir.z);
        }
    }

    #[test]
    fn test_opposite_vector_is_half_turn() {
        let mut marker = init_marker("world", "velocity");
        vector_to_marker(&mut marker, &vec3(-1.0, 0.0, 0.0), 2.0);
        assert_approx_eq!(marker.scale.x, 2.0);
        assert_approx_eq!(raw_orientation(&marker).norm(), 1.0);
        // Any half turn mapping +x to -x is valid; check the mapping, not
        // the quaternion literal.
        let rotated = rotated_x_axis(&marker);
        assert_approx_eq!(rotated.x, -1.0);
        assert_approx_eq!(rotated.y, 0.0);
        assert_approx_eq!(rotated.z, 0.0);
    }

    #[test]
    fn test_zero_vector_collapses_scale_and_keeps_orientation() {
        let mut marker = init_marker("world", "velocity");
        vector_to_marker(&mut marker, &vec3(0.0, 3.0, 0.0), 1.0);
        let previous = marker.pose.orientation.clone();

        vector_to_marker(&mut marker, &vec3(0.0, 0.0, 0.0), 1.0);
        assert_approx_eq!(marker.scale.x, 0.0);
        assert_approx_eq!(marker.scale.y, 0.0);
        assert_approx_eq!(marker.scale.z, 0.0);
        assert_eq!(marker.pose.orientation, previous);
        assert_ne!(marker.header.stamp, builtin_interfaces::Time::ZERO);
    }

    #[test]
    fn test_near_zero_vector_is_treated_as_zero() {
        let mut marker = init_marker("world", "velocity");
        vector_to_marker(&mut marker, &vec3(1e-7, 0.0, 0.0), 1.0);
        assert_approx_eq!(marker.scale.x, 0.0);
        assert_approx_eq!(marker.scale.y, 0.0);
        assert_approx_eq!(marker.scale.z, 0.0);
    }
}
