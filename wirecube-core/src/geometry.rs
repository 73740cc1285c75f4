/// Geometry primitives for the wireframe cube
use nalgebra::{Point2, Point3};
use thiserror::Error;

/// Number of corners in the cube's vertex table
pub const VERTEX_COUNT: usize = 8;

/// Number of edges in the cube's edge table
pub const EDGE_COUNT: usize = 12;

/// Incident edges every cube corner must have
const VERTEX_DEGREE: usize = 3;

/// A cube corner: its position in model space and its last screen projection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub real: Point3<f64>,
    pub projected: Point2<f64>,
}

impl Vertex {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            real: Point3::new(x, y, z),
            projected: Point2::origin(),
        }
    }
}

/// An undirected edge referencing two entries of the vertex table by index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
}

impl Edge {
    pub const fn new(a: usize, b: usize) -> Self {
        Self { a, b }
    }

    /// Endpoints ordered low-to-high, so `(a, b)` and `(b, a)` compare equal
    pub fn unordered(&self) -> (usize, usize) {
        if self.a <= self.b {
            (self.a, self.b)
        } else {
            (self.b, self.a)
        }
    }
}

/// Violations of the cube's edge table
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TopologyError {
    #[error("edge {edge} references vertex {vertex}, but only {} vertices exist", VERTEX_COUNT)]
    DanglingEndpoint { edge: usize, vertex: usize },
    #[error("edge {edge} connects vertex {vertex} to itself")]
    SelfLoop { edge: usize, vertex: usize },
    #[error("edges {first} and {second} connect the same pair of vertices")]
    DuplicateEdge { first: usize, second: usize },
    #[error("vertex {vertex} has {degree} incident edges, expected {}", VERTEX_DEGREE)]
    WrongDegree { vertex: usize, degree: usize },
}

/// Standard cube topology: top square, bottom square, vertical connectors
const CUBE_EDGES: [Edge; EDGE_COUNT] = [
    Edge::new(0, 1), // AB
    Edge::new(1, 2), // BC
    Edge::new(2, 3), // CD
    Edge::new(3, 0), // DA
    Edge::new(4, 5), // EF
    Edge::new(5, 6), // FG
    Edge::new(6, 7), // GH
    Edge::new(7, 4), // HE
    Edge::new(0, 4), // AE
    Edge::new(1, 5), // BF
    Edge::new(2, 6), // CG
    Edge::new(3, 7), // DH
];

/// Fixed-size vertex and edge tables describing a cube centred on the origin
#[derive(Debug, Clone, PartialEq)]
pub struct Cube {
    vertices: [Vertex; VERTEX_COUNT],
    edges: [Edge; EDGE_COUNT],
}

impl Cube {
    /// Create a cube with corners at `±half_extent` on every axis
    pub fn new(half_extent: f64) -> Self {
        let h = half_extent;
        Self {
            vertices: [
                Vertex::new(-h, h, h),   // A
                Vertex::new(h, h, h),    // B
                Vertex::new(h, -h, h),   // C
                Vertex::new(-h, -h, h),  // D
                Vertex::new(-h, h, -h),  // E
                Vertex::new(h, h, -h),   // F
                Vertex::new(h, -h, -h),  // G
                Vertex::new(-h, -h, -h), // H
            ],
            edges: CUBE_EDGES,
        }
    }

    /// Build a cube from explicit tables; call [`Cube::validate`] before use
    pub fn from_tables(vertices: [Vertex; VERTEX_COUNT], edges: [Edge; EDGE_COUNT]) -> Self {
        Self { vertices, edges }
    }

    pub fn vertices(&self) -> &[Vertex; VERTEX_COUNT] {
        &self.vertices
    }

    pub fn vertices_mut(&mut self) -> &mut [Vertex; VERTEX_COUNT] {
        &mut self.vertices
    }

    pub fn edges(&self) -> &[Edge; EDGE_COUNT] {
        &self.edges
    }

    /// Projected endpoints of a single edge
    pub fn segment(&self, edge: &Edge) -> (Point2<f64>, Point2<f64>) {
        (self.vertices[edge.a].projected, self.vertices[edge.b].projected)
    }

    /// Projected endpoints of every edge, in edge-table order
    pub fn segments(&self) -> impl Iterator<Item = (Point2<f64>, Point2<f64>)> + '_ {
        self.edges.iter().map(move |edge| self.segment(edge))
    }

    /// Check that the edge table describes a closed cube over the vertex table
    pub fn validate(&self) -> Result<(), TopologyError> {
        let mut degrees = [0usize; VERTEX_COUNT];

        for (index, edge) in self.edges.iter().enumerate() {
            for vertex in [edge.a, edge.b] {
                if vertex >= VERTEX_COUNT {
                    return Err(TopologyError::DanglingEndpoint { edge: index, vertex });
                }
            }
            if edge.a == edge.b {
                return Err(TopologyError::SelfLoop { edge: index, vertex: edge.a });
            }
            if let Some(first) = self.edges[..index]
                .iter()
                .position(|other| other.unordered() == edge.unordered())
            {
                return Err(TopologyError::DuplicateEdge { first, second: index });
            }
            degrees[edge.a] += 1;
            degrees[edge.b] += 1;
        }

        match degrees.iter().position(|&degree| degree != VERTEX_DEGREE) {
            Some(vertex) => Err(TopologyError::WrongDegree { vertex, degree: degrees[vertex] }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_corners_cover_every_sign_combination() {
        let cube = Cube::new(100.0);
        for sx in [-100.0, 100.0] {
            for sy in [-100.0, 100.0] {
                for sz in [-100.0, 100.0] {
                    let corner = Point3::new(sx, sy, sz);
                    let hits = cube.vertices().iter().filter(|v| v.real == corner).count();
                    assert_eq!(hits, 1, "corner {:?}", corner);
                }
            }
        }
    }

    #[test]
    fn test_cube_topology_is_valid() {
        let cube = Cube::new(100.0);
        assert_eq!(cube.validate(), Ok(()));

        for vertex in 0..VERTEX_COUNT {
            let degree = cube
                .edges()
                .iter()
                .filter(|e| e.a == vertex || e.b == vertex)
                .count();
            assert_eq!(degree, 3);
        }
    }

    #[test]
    fn test_cube_edges_span_full_side_length() {
        let cube = Cube::new(100.0);
        for edge in cube.edges() {
            let delta = cube.vertices()[edge.a].real - cube.vertices()[edge.b].real;
            assert!((delta.norm() - 200.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_validate_rejects_duplicate_edge() {
        let cube = Cube::new(1.0);
        let mut edges = *cube.edges();
        edges[11] = Edge::new(1, 0);
        let broken = Cube::from_tables(*cube.vertices(), edges);
        assert_eq!(
            broken.validate(),
            Err(TopologyError::DuplicateEdge { first: 0, second: 11 })
        );
    }

    #[test]
    fn test_validate_rejects_dangling_and_self_loop() {
        let cube = Cube::new(1.0);

        let mut edges = *cube.edges();
        edges[3] = Edge::new(3, 8);
        let dangling = Cube::from_tables(*cube.vertices(), edges);
        assert_eq!(
            dangling.validate(),
            Err(TopologyError::DanglingEndpoint { edge: 3, vertex: 8 })
        );

        let mut edges = *cube.edges();
        edges[5] = Edge::new(5, 5);
        let looped = Cube::from_tables(*cube.vertices(), edges);
        assert_eq!(looped.validate(), Err(TopologyError::SelfLoop { edge: 5, vertex: 5 }));
    }

    #[test]
    fn test_validate_rejects_wrong_degree() {
        let cube = Cube::new(1.0);
        let mut edges = *cube.edges();
        // Replace DH with AC: A and C gain a fourth edge, D and H drop to two
        edges[11] = Edge::new(0, 2);
        let skewed = Cube::from_tables(*cube.vertices(), edges);
        assert_eq!(skewed.validate(), Err(TopologyError::WrongDegree { vertex: 0, degree: 4 }));
    }

    #[test]
    fn test_new_vertex_starts_unprojected() {
        let vertex = Vertex::new(1.0, 2.0, 3.0);
        assert_eq!(vertex.projected, Point2::origin());
    }
}
