//! Reflective box walls.

use crate::particle::Particle;
use crate::tuning::BounceParams;
use crate::Vec3;

/// Which axes hit a wall during a clamp pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallHits {
    pub x: bool,
    pub y: bool,
    pub z: bool,
}

impl WallHits {
    pub fn any(&self) -> bool {
        self.x || self.y || self.z
    }
}

/// Keep a particle inside `±(bounds - margin)` on every axis.
///
/// An axis that crosses its limit is pinned to the limit and its velocity
/// component is multiplied by the restitution (reflected and damped). Axes
/// are handled independently, so a corner can bounce two or three at once.
pub fn clamp_to_bounds(particle: &mut Particle, bounds: Vec3, params: &BounceParams) -> WallHits {
    let margin = particle.radius * params.margin_scale;
    let limit = bounds - Vec3::splat(margin);

    let x = clamp_axis(&mut particle.position.x, &mut particle.velocity.x, limit.x, params.restitution);
    let y = clamp_axis(&mut particle.position.y, &mut particle.velocity.y, limit.y, params.restitution);
    let z = clamp_axis(&mut particle.position.z, &mut particle.velocity.z, limit.z, params.restitution);

    WallHits { x, y, z }
}

fn clamp_axis(position: &mut f32, velocity: &mut f32, limit: f32, restitution: f32) -> bool {
    if *position > limit {
        *position = limit;
        *velocity *= restitution;
        true
    } else if *position < -limit {
        *position = -limit;
        *velocity *= restitution;
        true
    } else {
        false
    }
}
