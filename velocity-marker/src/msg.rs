#![allow(unreachable_pub, missing_docs)]

use ros2_client::builtin_interfaces;

pub trait MessageType: Sized {
    fn message_type_name() -> ros2_client::MessageTypeName;
}
macro_rules! message_type {
    ($($package_name:ident / $type_name:ident),* $(,)?) => {$(
        impl ros2_client::Message for crate::msg::$package_name::$type_name {}
        impl crate::msg::MessageType for crate::msg::$package_name::$type_name {
            fn message_type_name() -> ros2_client::MessageTypeName {
                ros2_client::MessageTypeName::new(stringify!($package_name), stringify!($type_name))
            }
        }
    )*};
}
message_type!(
    geometry_msgs / Twist,
    geometry_msgs / TwistStamped,
    visualization_msgs / Marker,
);

/// [std_msgs](https://github.com/ros2/common_interfaces/tree/HEAD/std_msgs)
pub mod std_msgs {
    use serde::{Deserialize, Serialize};

    use crate::msg::*;

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct Header {
        pub stamp: builtin_interfaces::Time,
        pub frame_id: String,
    }
    impl Default for Header {
        fn default() -> Self {
            Self {
                stamp: builtin_interfaces::Time::ZERO,
                frame_id: Default::default(),
            }
        }
    }

    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct ColorRGBA {
        pub r: f32,
        pub g: f32,
        pub b: f32,
        pub a: f32,
    }
}

/// [geometry_msgs](https://github.com/ros2/common_interfaces/tree/HEAD/geometry_msgs)
pub mod geometry_msgs {
    use serde::{Deserialize, Serialize};

    use crate::msg::*;

    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct Vector3 {
        pub x: f64,
        pub y: f64,
        pub z: f64,
    }

    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct Twist {
        pub linear: Vector3,
        pub angular: Vector3,
    }

    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct TwistStamped {
        pub header: std_msgs::Header,
        pub twist: Twist,
    }

    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct Point {
        pub x: f64,
        pub y: f64,
        pub z: f64,
    }

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct Quaternion {
        pub x: f64,
        pub y: f64,
        pub z: f64,
        pub w: f64,
    }
    // The message definition defaults w to 1 (identity), not 0.
    impl Default for Quaternion {
        fn default() -> Self {
            Self {
                x: 0.0,
                y: 0.0,
                z: 0.0,
                w: 1.0,
            }
        }
    }

    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct Pose {
        pub position: Point,
        pub orientation: Quaternion,
    }
}

/// [sensor_msgs](https://github.com/ros2/common_interfaces/tree/HEAD/sensor_msgs)
pub mod sensor_msgs {
    use serde::{Deserialize, Serialize};

    use crate::msg::*;

    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct CompressedImage {
        pub header: std_msgs::Header,
        pub format: String,
        pub data: Vec<u8>,
    }
}

/// [visualization_msgs](https://github.com/ros2/common_interfaces/tree/HEAD/visualization_msgs)
pub mod visualization_msgs {
    use serde::{Deserialize, Serialize};

    use crate::msg::*;

    /// Field order matches the `.msg` definition; the CDR encoding is
    /// positional.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    #[serde(default)]
    pub struct Marker {
        pub header: std_msgs::Header,
        pub ns: String,
        pub id: i32,
        #[serde(rename = "type")]
        pub type_: i32,
        pub action: i32,
        pub pose: geometry_msgs::Pose,
        pub scale: geometry_msgs::Vector3,
        pub color: std_msgs::ColorRGBA,
        pub lifetime: builtin_interfaces::Duration,
        pub frame_locked: bool,
        pub points: Vec<geometry_msgs::Point>,
        pub colors: Vec<std_msgs::ColorRGBA>,
        pub texture_resource: String,
        pub texture: sensor_msgs::CompressedImage,
        pub uv_coordinates: Vec<UVCoordinate>,
        pub text: String,
        pub mesh_resource: String,
        pub mesh_file: MeshFile,
        pub mesh_use_embedded_materials: bool,
    }
    impl Default for Marker {
        fn default() -> Self {
            Self {
                header: Default::default(),
                ns: Default::default(),
                id: 0,
                type_: 0,
                action: 0,
                pose: Default::default(),
                scale: Default::default(),
                color: Default::default(),
                lifetime: builtin_interfaces::Duration::zero(),
                frame_locked: false,
                points: Default::default(),
                colors: Default::default(),
                texture_resource: Default::default(),
                texture: Default::default(),
                uv_coordinates: Default::default(),
                text: Default::default(),
                mesh_resource: Default::default(),
                mesh_file: Default::default(),
                mesh_use_embedded_materials: false,
            }
        }
    }

    impl Marker {
        pub const ARROW: i32 = 0;
        pub const CUBE: i32 = 1;
        pub const SPHERE: i32 = 2;
        pub const CYLINDER: i32 = 3;
        pub const LINE_STRIP: i32 = 4;
        pub const LINE_LIST: i32 = 5;
        pub const CUBE_LIST: i32 = 6;
        pub const SPHERE_LIST: i32 = 7;
        pub const POINTS: i32 = 8;
        pub const TEXT_VIEW_FACING: i32 = 9;
        pub const MESH_RESOURCE: i32 = 10;
        pub const TRIANGLE_LIST: i32 = 11;

        pub const ADD: i32 = 0;
        pub const MODIFY: i32 = 0;
        pub const DELETE: i32 = 2;
        pub const DELETEALL: i32 = 3;
    }

    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct UVCoordinate {
        pub u: f32,
        pub v: f32,
    }

    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct MeshFile {
        pub filename: String,
        pub data: Vec<u8>,
    }
}
