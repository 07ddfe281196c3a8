//! Indexed triangle meshes.
//!
//! A [`TriangleMesh`] owns its vertex and face arrays; both are sized once at
//! construction and never resized. Faces refer to vertices by index. Each face
//! also stores a normal that points away from the mesh's `center`.

use crate::colors::Color;
use crate::math::{Mat4, Quaternion, Vec3};

/// The information stored at the vertex level.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
    pub pos: Vec3,
    pub color: Color,
}

impl Vertex {
    pub const fn new(pos: Vec3, color: Color) -> Self {
        Self { pos, color }
    }
}

/// A triangle defined by three indices into the mesh's vertex array.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Face {
    pub indices: [usize; 3],
    pub normal: Vec3,
}

#[derive(Clone, Debug)]
pub struct TriangleMesh {
    name: String,
    vertices: Box<[Vertex]>,
    faces: Box<[Face]>,
    /// Interior reference point used to orient face normals.
    center: Vec3,
    /// Generation radius, for rounded meshes.
    radius: Option<f32>,
    /// Rotation angles in radians about the X, Y and Z axes.
    pub rotation: Vec3,
    /// World-space offset.
    pub location: Vec3,
}

impl TriangleMesh {
    /// Builds a mesh and computes the normal of every face.
    ///
    /// Every index must be smaller than `vertices.len()`; this is checked in
    /// debug builds only.
    pub fn new(
        name: impl Into<String>,
        vertices: Vec<Vertex>,
        indices: &[[usize; 3]],
        center: Vec3,
    ) -> Self {
        debug_assert!(
            indices.iter().flatten().all(|&i| i < vertices.len()),
            "face index out of range for {} vertices",
            vertices.len()
        );

        let mut mesh = Self {
            name: name.into(),
            vertices: vertices.into_boxed_slice(),
            faces: Box::default(),
            center,
            radius: None,
            rotation: Vec3::ZERO,
            location: Vec3::ZERO,
        };
        let faces: Vec<Face> = indices
            .iter()
            .map(|&indices| Face {
                indices,
                normal: mesh.normal_for(indices),
            })
            .collect();
        mesh.faces = faces.into_boxed_slice();

        log::debug!(
            "built mesh '{}': {} vertices, {} faces",
            mesh.name,
            mesh.vertices.len(),
            mesh.faces.len()
        );
        mesh
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> Option<f32> {
        self.radius
    }

    /// Recolors a vertex in place. Positions are fixed after construction.
    pub fn set_vertex_color(&mut self, index: usize, color: Color) {
        self.vertices[index].color = color;
    }

    /// The three vertices of a face, in winding order.
    pub fn face_vertices(&self, face: &Face) -> [&Vertex; 3] {
        face.indices.map(|i| &self.vertices[i])
    }

    /// Face normal from `cross(v1 - v0, v2 - v0)`, flipped if needed so it
    /// points away from the mesh center. Not normalized.
    pub fn normal_vector(&self, face_index: usize) -> Vec3 {
        self.normal_for(self.faces[face_index].indices)
    }

    fn normal_for(&self, [a, b, c]: [usize; 3]) -> Vec3 {
        let v0 = self.vertices[a].pos;
        let edge1 = self.vertices[b].pos - v0;
        let edge2 = self.vertices[c].pos - v0;
        let normal = edge1.cross(edge2);

        if normal.dot(v0 - self.center) < 0.0 {
            -normal
        } else {
            normal
        }
    }

    /// Local-to-world transform: rotation about X, then Y, then Z, then the
    /// translation by `location`.
    pub fn world_matrix(&self) -> Mat4 {
        let rot_x = Quaternion::from_axis_angle(Vec3::UNIT_X, self.rotation.x());
        let rot_y = Quaternion::from_axis_angle(Vec3::UNIT_Y, self.rotation.y());
        let rot_z = Quaternion::from_axis_angle(Vec3::UNIT_Z, self.rotation.z());

        (rot_z * rot_y * rot_x).to_rotation_matrix()
            * Mat4::translation(self.location.x(), self.location.y(), self.location.z())
    }

    // ============ Procedural shapes ============

    /// A single triangle with red, green and blue corners.
    pub fn triangle() -> Self {
        let vertices = vec![
            Vertex::new(Vec3::new(2.0, 0.0, 0.0), Color::RED),
            Vertex::new(Vec3::new(0.0, 2.0, 0.0), Color::GREEN),
            Vertex::new(Vec3::new(0.0, 0.0, 2.0), Color::BLUE),
        ];
        Self::new("triangle", vertices, &[[0, 1, 2]], Vec3::ZERO)
    }

    /// A tetrahedron with one vertex off the coordinate axes.
    pub fn tetrahedron() -> Self {
        let vertices = vec![
            Vertex::new(Vec3::new(0.0, 1.0, 0.0), Color::RED),
            Vertex::new(Vec3::new(2.0, 0.0, 0.0), Color::GREEN),
            Vertex::new(Vec3::new(0.0, 2.0, 0.0), Color::WHITE),
            Vertex::new(Vec3::new(0.0, 0.0, 2.0), Color::BLUE),
        ];
        let center = vertices.iter().fold(Vec3::ZERO, |acc, v| acc + v.pos) * 0.25;
        Self::new(
            "tetrahedron",
            vertices,
            &[[0, 1, 2], [0, 2, 3], [0, 1, 3], [1, 2, 3]],
            center,
        )
    }

    /// An axis-aligned cube of the given edge length centred on the origin.
    /// Corner colors follow the RGB cube.
    pub fn cube(size: f32) -> Self {
        let h = size / 2.0;
        let vertices = (0..8)
            .map(|i| {
                let corner = [i & 1, (i >> 1) & 1, (i >> 2) & 1];
                let [x, y, z] = corner.map(|bit| if bit == 1 { h } else { -h });
                let [r, g, b] = corner.map(|bit| (bit * 255) as u8);
                Vertex::new(Vec3::new(x, y, z), Color::rgb(r, g, b))
            })
            .collect();

        // Corner index bits: x = 1, y = 2, z = 4.
        let faces = [
            [0, 2, 3],
            [0, 3, 1], // -Z
            [4, 5, 7],
            [4, 7, 6], // +Z
            [0, 4, 6],
            [0, 6, 2], // -X
            [1, 3, 7],
            [1, 7, 5], // +X
            [0, 1, 5],
            [0, 5, 4], // -Y
            [2, 6, 7],
            [2, 7, 3], // +Y
        ];
        Self::new("cube", vertices, &faces, Vec3::ZERO)
    }

    /// A UV sphere tessellated every `step_degrees` of latitude and longitude.
    ///
    /// Poles are single vertices. Colors blend from the north pole's red to the
    /// south pole's blue, with green varying around the equator.
    ///
    /// `step_degrees` must be positive. Coarse steps are clamped to at least
    /// two rings and three segments.
    pub fn uv_sphere(center: Vec3, radius: f32, step_degrees: f32) -> Self {
        debug_assert!(step_degrees > 0.0, "sphere step must be positive, got {step_degrees}");
        let rings = ((180.0 / step_degrees).round() as usize).max(2);
        let segments = ((360.0 / step_degrees).round() as usize).max(3);

        let mut vertices = Vec::with_capacity((rings - 1) * segments + 2);
        vertices.push(Vertex::new(center + Vec3::UNIT_Y * radius, Color::RED));
        for ring in 1..rings {
            let theta = std::f32::consts::PI * ring as f32 / rings as f32;
            let (sin_theta, cos_theta) = theta.sin_cos();
            let t = ring as f32 / rings as f32;
            for segment in 0..segments {
                let phi = std::f32::consts::TAU * segment as f32 / segments as f32;
                let (sin_phi, cos_phi) = phi.sin_cos();
                let offset = Vec3::new(sin_theta * cos_phi, cos_theta, sin_theta * sin_phi);
                let green = (segment as f32 / segments as f32 * 255.0).round() as u8;
                let color = Color::RED.lerp(Color::BLUE, t);
                vertices.push(Vertex::new(
                    center + offset * radius,
                    Color::rgb(color.r, green, color.b),
                ));
            }
        }
        let south = vertices.len();
        vertices.push(Vertex::new(center - Vec3::UNIT_Y * radius, Color::BLUE));

        let ring_start = |ring: usize| 1 + (ring - 1) * segments;
        let mut faces = Vec::with_capacity(2 * segments * (rings - 1));
        for segment in 0..segments {
            let next = (segment + 1) % segments;

            faces.push([0, ring_start(1) + segment, ring_start(1) + next]);

            for ring in 1..rings - 1 {
                let upper = ring_start(ring);
                let lower = ring_start(ring + 1);
                faces.push([upper + segment, lower + segment, lower + next]);
                faces.push([upper + segment, lower + next, upper + next]);
            }

            let last = ring_start(rings - 1);
            faces.push([south, last + next, last + segment]);
        }

        let mut mesh = Self::new("sphere", vertices, &faces, center);
        mesh.radius = Some(radius);
        mesh
    }
}
