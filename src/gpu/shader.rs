//! GPU-side data layouts and the sphere shader.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

use crate::particle::{color_from_hex, Particle};

pub const SPHERE_SHADER: &str = include_str!("sphere.wgsl");

pub const FOG_DENSITY: f32 = 0.005;
pub const AMBIENT_COLOR: u32 = 0x332200;
pub const EMISSIVE_COLOR: u32 = 0x331100;
pub const METALNESS: f32 = 0.1;
/// Quadratic falloff coefficient for the point lights.
pub const LIGHT_FALLOFF: f32 = 0.002;

/// A point light: hex color, intensity, world position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub color: u32,
    pub intensity: f32,
    pub position: Vec3,
}

pub const LIGHTS: [PointLight; 3] = [
    PointLight {
        color: 0xff6600,
        intensity: 2.5,
        position: Vec3::new(5.0, 5.0, 10.0),
    },
    PointLight {
        color: 0xff3300,
        intensity: 2.0,
        position: Vec3::new(-5.0, 3.0, 12.0),
    },
    PointLight {
        color: 0xffaa00,
        intensity: 1.5,
        position: Vec3::new(0.0, -2.0, 15.0),
    },
];

#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Uniforms {
    pub view: [[f32; 4]; 4],
    pub proj: [[f32; 4]; 4],
    pub fog: [f32; 4],
    pub ambient: [f32; 4],
    pub emissive: [f32; 4],
    pub light_position: [[f32; 4]; 3],
    pub light_color: [[f32; 4]; 3],
}

impl Uniforms {
    pub fn new(view: Mat4, proj: Mat4) -> Self {
        let ambient = color_from_hex(AMBIENT_COLOR);
        let emissive = color_from_hex(EMISSIVE_COLOR);

        let mut light_position = [[0.0; 4]; 3];
        let mut light_color = [[0.0; 4]; 3];
        for (i, light) in LIGHTS.iter().enumerate() {
            light_position[i] = light.position.extend(light.intensity).to_array();
            light_color[i] = color_from_hex(light.color).extend(1.0).to_array();
        }

        Self {
            view: view.to_cols_array_2d(),
            proj: proj.to_cols_array_2d(),
            fog: [0.0, 0.0, 0.0, FOG_DENSITY],
            ambient: ambient.extend(METALNESS).to_array(),
            emissive: emissive.extend(LIGHT_FALLOFF).to_array(),
            light_position,
            light_color,
        }
    }
}

/// Per-sphere vertex data, one entry per particle.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct SphereInstance {
    pub center: [f32; 3],
    pub radius: f32,
    pub color: [f32; 3],
    pub opacity: f32,
    /// Spin around x and y, roughness, emissive intensity.
    pub surface: [f32; 4],
}

impl SphereInstance {
    pub const ATTRIBUTES: [wgpu::VertexAttribute; 3] =
        wgpu::vertex_attr_array![0 => Float32x4, 1 => Float32x4, 2 => Float32x4];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<SphereInstance>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

impl From<&Particle> for SphereInstance {
    fn from(p: &Particle) -> Self {
        Self {
            center: p.position.to_array(),
            radius: p.radius,
            color: p.color.to_array(),
            opacity: p.material.opacity,
            surface: [
                p.rotation.x,
                p.rotation.y,
                p.material.roughness,
                p.material.emissive_intensity,
            ],
        }
    }
}
