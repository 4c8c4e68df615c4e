//! Shape generation for 3D primitives
//!
//! Every generator emits a triangle list (or line list for `line`) in local
//! coordinates; `transform` places the result in the world.

use glam::{Mat3, Mat4, Vec3};
use std::f32::consts::PI;

use super::vertex::Vertex;

/// Flat unlit disc facing the viewer
pub fn disc(center: Vec3, radius: f32, color: [f32; 3], segments: u32) -> Vec<Vertex> {
    let segments = segments.max(3);
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::unlit(center, color));
        vertices.push(Vertex::unlit(
            center + Vec3::new(radius * theta1.cos(), radius * theta1.sin(), 0.0),
            color,
        ));
        vertices.push(Vertex::unlit(
            center + Vec3::new(radius * theta2.cos(), radius * theta2.sin(), 0.0),
            color,
        ));
    }

    vertices
}

/// Lit triangle with a shared face normal
pub fn triangle(corners: [Vec3; 3], normal: Vec3, color: [f32; 3]) -> Vec<Vertex> {
    corners
        .iter()
        .map(|&c| Vertex::lit(c, normal, color))
        .collect()
}

/// Lit quad (corners in winding order) split into two triangles
pub fn quad(corners: [Vec3; 4], normal: Vec3, color: [f32; 3]) -> Vec<Vertex> {
    let [a, b, c, d] = corners;
    let mut vertices = triangle([a, b, c], normal, color);
    vertices.extend(triangle([a, c, d], normal, color));
    vertices
}

/// Unlit quad with a color per corner (for gradients)
pub fn gradient_quad(corners: [Vec3; 4], colors: [[f32; 3]; 4]) -> Vec<Vertex> {
    [0, 1, 2, 0, 2, 3]
        .iter()
        .map(|&i| Vertex::unlit(corners[i], colors[i]))
        .collect()
}

/// Lit UV sphere
pub fn sphere(center: Vec3, radius: f32, color: [f32; 3], slices: u32, stacks: u32) -> Vec<Vertex> {
    let slices = slices.max(3);
    let stacks = stacks.max(2);
    let mut vertices = Vec::with_capacity((slices * stacks * 6) as usize);

    let point = |slice: u32, stack: u32| -> Vec3 {
        let phi = stack as f32 / stacks as f32 * PI;
        let theta = slice as f32 / slices as f32 * 2.0 * PI;
        Vec3::new(phi.sin() * theta.cos(), phi.cos(), phi.sin() * theta.sin())
    };

    for stack in 0..stacks {
        for slice in 0..slices {
            let n00 = point(slice, stack);
            let n10 = point(slice + 1, stack);
            let n01 = point(slice, stack + 1);
            let n11 = point(slice + 1, stack + 1);

            for n in [n00, n01, n10, n10, n01, n11] {
                vertices.push(Vertex::lit(center + n * radius, n, color));
            }
        }
    }

    vertices
}

/// Unlit line segment (two vertices of a line list)
pub fn line(a: Vec3, b: Vec3, color: [f32; 3]) -> [Vertex; 2] {
    [Vertex::unlit(a, color), Vertex::unlit(b, color)]
}

/// Place local-space vertices with a model matrix.
///
/// Normals go through the inverse-transpose so non-uniform scale keeps
/// them perpendicular to their faces.
pub fn transform(vertices: &mut [Vertex], model: Mat4) {
    let normal_matrix = Mat3::from_mat4(model).inverse().transpose();
    for v in vertices.iter_mut() {
        v.position = model.transform_point3(v.pos()).to_array();
        if v.lit > 0.0 {
            v.normal = (normal_matrix * Vec3::from_array(v.normal))
                .normalize_or_zero()
                .to_array();
        }
    }
}
