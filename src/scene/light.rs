use glam::{Vec3, Vec4};

/// A light source with a homogeneous world position.
///
/// `position.w == 0` encodes an ideal point: a directional light infinitely
/// far away whose direction is constant across the scene. `position.w == 1`
/// is an ordinary positional light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    /// Ambient contribution.
    pub ambient: Vec3,
    /// Emitted radiance.
    pub radiance: Vec3,
    /// Homogeneous world position.
    pub position: Vec4,
}

impl Light {
    pub fn directional(direction: Vec3, ambient: Vec3, radiance: Vec3) -> Self {
        Self {
            ambient,
            radiance,
            position: direction.extend(0.0),
        }
    }

    pub fn positional(position: Vec3, ambient: Vec3, radiance: Vec3) -> Self {
        Self {
            ambient,
            radiance,
            position: position.extend(1.0),
        }
    }

    /// Un-normalized light direction from a homogeneous world-space point.
    ///
    /// The w-weighted subtraction handles both encodings at once: for a
    /// directional light it collapses to the constant light vector, for a
    /// positional light to the fragment-to-light offset.
    pub fn direction_from(&self, world_pos: Vec4) -> Vec3 {
        self.position.truncate() * world_pos.w - world_pos.truncate() * self.position.w
    }
}
