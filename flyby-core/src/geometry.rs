/// Geometry for the flyby scene
use crate::vector::Vector3;

/// A 3D vertex with position and normal
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub position: Vector3,
    pub normal: Vector3,
}

impl Vertex {
    pub fn new(position: Vector3, normal: Vector3) -> Self {
        Self { position, normal }
    }
}

/// A triangle face defined by three vertices
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    pub vertices: [Vertex; 3],
}

impl Triangle {
    pub fn new(v0: Vertex, v1: Vertex, v2: Vertex) -> Self {
        Self {
            vertices: [v0, v1, v2],
        }
    }

    /// Triangle whose vertices all carry the face normal
    pub fn flat(p0: Vector3, p1: Vector3, p2: Vector3) -> Self {
        let normal = (p1 - p0).cross(p2 - p0).normalize();
        Self::new(
            Vertex::new(p0, normal),
            Vertex::new(p1, normal),
            Vertex::new(p2, normal),
        )
    }

    /// Face normal from winding order. Degenerate faces give zero.
    pub fn calculate_normal(&self) -> Vector3 {
        let v0 = self.vertices[0].position;
        let v1 = self.vertices[1].position;
        let v2 = self.vertices[2].position;

        (v1 - v0).cross(v2 - v0).normalize()
    }
}

/// A 3D mesh composed of triangles
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    pub triangles: Vec<Triangle>,
}

impl Mesh {
    pub fn new() -> Self {
        Self {
            triangles: Vec::new(),
        }
    }

    pub fn add_triangle(&mut self, triangle: Triangle) {
        self.triangles.push(triangle);
    }

    /// The arrow-shaped glider: four faces meeting at a nose on +Z, with a
    /// tail ridge at z = -1 raised and lowered by 0.3.
    pub fn glider() -> Self {
        let nose = Vector3::new(0.0, 0.0, 1.0);
        let left = Vector3::new(-1.0, 0.0, -1.0);
        let right = Vector3::new(1.0, 0.0, -1.0);
        let top = Vector3::new(0.0, 0.3, -1.0);
        let bottom = Vector3::new(0.0, -0.3, -1.0);

        let mut mesh = Self::new();
        mesh.add_triangle(Triangle::flat(left, top, nose));
        mesh.add_triangle(Triangle::flat(right, top, nose));
        mesh.add_triangle(Triangle::flat(left, bottom, nose));
        mesh.add_triangle(Triangle::flat(right, bottom, nose));
        mesh
    }
}
