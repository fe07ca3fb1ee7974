//! In-memory polygonal reference mesh.
//!
//! [`PolyMesh`] stores faces as vertex loops and derives the edge table and
//! adjacency maps needed to answer [`TopologyAdapter`] queries. It is the
//! concrete adapter used by tests, doc examples, and benchmarks.

use std::sync::atomic::{AtomicU64, Ordering};

use hashbrown::{HashMap, HashSet};

use crate::{ElementType, SelectMode, TopologyAdapter};

static NEXT_MESH_ID: AtomicU64 = AtomicU64::new(1);

/// A polygonal mesh with derived adjacency and selection state.
///
/// Faces are vertex loops of arbitrary length (triangles, quads, n-gons).
/// The edge table is derived deterministically: edges appear in
/// first-encounter order while walking faces, endpoints normalized
/// low-to-high, so repeated construction from the same faces yields
/// identical indices.
///
/// Manifold semantics: an edge is manifold iff exactly two faces are
/// incident to it; a vertex is manifold iff it has at least one incident
/// edge, no incident wire edge (zero faces) or over-shared edge (more than
/// two faces), and its incident faces form a single connected fan.
///
/// # Example
///
/// ```
/// use mesh_topology::{PolyMesh, TopologyAdapter};
///
/// // Two triangles sharing an edge.
/// let mesh = PolyMesh::from_faces(4, vec![vec![0, 1, 2], vec![1, 3, 2]]);
/// assert_eq!(mesh.edge_count(), 5);
/// assert_eq!(mesh.face_vertex_count(0), Some(3));
/// ```
#[derive(Debug, Clone)]
pub struct PolyMesh {
    id: u64,
    vertex_count: usize,
    faces: Vec<Vec<u32>>,
    /// Normalized (low, high) endpoints, in first-encounter order.
    edges: Vec<(u32, u32)>,
    /// Per-face bounding edge indices.
    face_edges: Vec<Vec<u32>>,
    /// Per-edge incident face indices.
    edge_faces: Vec<Vec<u32>>,
    /// Per-vertex incident edge indices.
    vertex_edges: Vec<Vec<u32>>,
    selected_verts: HashSet<u32>,
    selected_edges: HashSet<u32>,
    selected_faces: HashSet<u32>,
    select_mode: SelectMode,
    edit_mode: bool,
    editable: bool,
}

impl PolyMesh {
    /// Build a mesh from a vertex count and face vertex loops.
    ///
    /// Degenerate loop entries are tolerated: zero-length edges (repeated
    /// consecutive vertices) are skipped and an edge referenced twice by one
    /// loop is recorded once for that face. Vertex indices beyond
    /// `vertex_count` grow the vertex range rather than panicking.
    #[must_use]
    pub fn from_faces(vertex_count: usize, faces: Vec<Vec<u32>>) -> Self {
        let id = NEXT_MESH_ID.fetch_add(1, Ordering::Relaxed);
        Self::build(id, vertex_count, faces)
    }

    /// Replace the mesh identity.
    ///
    /// Useful for simulating an in-place topology edit of one mesh versus a
    /// switch to a different mesh.
    #[must_use]
    pub fn with_mesh_id(mut self, id: u64) -> Self {
        self.id = id;
        self
    }

    /// Mark the mesh as not editable, so precondition checks fail.
    #[must_use]
    pub fn with_editable(mut self, editable: bool) -> Self {
        self.editable = editable;
        self
    }

    fn build(id: u64, vertex_count: usize, faces: Vec<Vec<u32>>) -> Self {
        let highest_referenced = faces
            .iter()
            .flatten()
            .copied()
            .max()
            .map_or(0, |v| v as usize + 1);
        let vertex_count = vertex_count.max(highest_referenced);

        let mut edge_index: HashMap<(u32, u32), u32> = HashMap::new();
        let mut edges: Vec<(u32, u32)> = Vec::new();
        let mut edge_faces: Vec<Vec<u32>> = Vec::new();
        let mut face_edges: Vec<Vec<u32>> = Vec::with_capacity(faces.len());

        #[allow(clippy::cast_possible_truncation)]
        for (face_idx, boundary) in faces.iter().enumerate() {
            let mut bounding = Vec::with_capacity(boundary.len());
            for (k, &a) in boundary.iter().enumerate() {
                let b = boundary[(k + 1) % boundary.len()];
                if a == b {
                    continue;
                }
                let key = normalize_edge(a, b);
                let edge = *edge_index.entry(key).or_insert_with(|| {
                    edges.push(key);
                    edge_faces.push(Vec::new());
                    (edges.len() - 1) as u32
                });
                if !bounding.contains(&edge) {
                    bounding.push(edge);
                    edge_faces[edge as usize].push(face_idx as u32);
                }
            }
            face_edges.push(bounding);
        }

        let mut vertex_edges: Vec<Vec<u32>> = vec![Vec::new(); vertex_count];
        #[allow(clippy::cast_possible_truncation)]
        for (edge_idx, &(a, b)) in edges.iter().enumerate() {
            vertex_edges[a as usize].push(edge_idx as u32);
            vertex_edges[b as usize].push(edge_idx as u32);
        }

        Self {
            id,
            vertex_count,
            faces,
            edges,
            face_edges,
            edge_faces,
            vertex_edges,
            selected_verts: HashSet::new(),
            selected_edges: HashSet::new(),
            selected_faces: HashSet::new(),
            select_mode: SelectMode::ALL,
            edit_mode: false,
            editable: true,
        }
    }

    /// Endpoints of an edge, normalized low-to-high.
    #[must_use]
    pub fn edge_vertices(&self, edge: u32) -> Option<(u32, u32)> {
        self.edges.get(edge as usize).copied()
    }

    /// Whether the element is currently selected.
    #[must_use]
    pub fn is_selected(&self, element: ElementType, index: u32) -> bool {
        self.selection_set(element).contains(&index)
    }

    /// Currently selected indices of one element type, in ascending order.
    #[must_use]
    pub fn selected(&self, element: ElementType) -> Vec<u32> {
        let mut indices: Vec<u32> = self.selection_set(element).iter().copied().collect();
        indices.sort_unstable();
        indices
    }

    /// Whether the mesh is in edit mode.
    #[must_use]
    pub fn in_edit_mode(&self) -> bool {
        self.edit_mode
    }

    /// The current selection mode.
    #[must_use]
    pub fn select_mode(&self) -> SelectMode {
        self.select_mode
    }

    fn selection_set(&self, element: ElementType) -> &HashSet<u32> {
        match element {
            ElementType::Vertex => &self.selected_verts,
            ElementType::Edge => &self.selected_edges,
            ElementType::Face => &self.selected_faces,
        }
    }

    fn selection_set_mut(&mut self, element: ElementType) -> &mut HashSet<u32> {
        match element {
            ElementType::Vertex => &mut self.selected_verts,
            ElementType::Edge => &mut self.selected_edges,
            ElementType::Face => &mut self.selected_faces,
        }
    }

    fn element_count(&self, element: ElementType) -> usize {
        match element {
            ElementType::Vertex => self.vertex_count,
            ElementType::Edge => self.edges.len(),
            ElementType::Face => self.faces.len(),
        }
    }

    /// Check that the faces incident to a vertex form one connected fan,
    /// where two faces are adjacent iff they share an edge at that vertex.
    fn vertex_fan_is_connected(&self, vertex: u32) -> bool {
        let incident_edges = &self.vertex_edges[vertex as usize];
        let mut incident_faces: Vec<u32> = Vec::new();
        for &edge in incident_edges {
            for &face in &self.edge_faces[edge as usize] {
                if !incident_faces.contains(&face) {
                    incident_faces.push(face);
                }
            }
        }
        let Some(&start) = incident_faces.first() else {
            return false;
        };

        let mut visited: HashSet<u32> = HashSet::new();
        let mut stack = vec![start];
        while let Some(face) = stack.pop() {
            if !visited.insert(face) {
                continue;
            }
            for &edge in incident_edges {
                let faces = &self.edge_faces[edge as usize];
                if faces.contains(&face) {
                    for &other in faces {
                        if !visited.contains(&other) {
                            stack.push(other);
                        }
                    }
                }
            }
        }
        visited.len() == incident_faces.len()
    }
}

impl TopologyAdapter for PolyMesh {
    fn mesh_id(&self) -> u64 {
        self.id
    }

    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn face_count(&self) -> usize {
        self.faces.len()
    }

    fn vertex_is_manifold(&self, vertex: u32) -> Option<bool> {
        let incident = self.vertex_edges.get(vertex as usize)?;
        if incident.is_empty() {
            return Some(false);
        }
        for &edge in incident {
            let face_count = self.edge_faces[edge as usize].len();
            if face_count == 0 || face_count > 2 {
                return Some(false);
            }
        }
        Some(self.vertex_fan_is_connected(vertex))
    }

    fn edge_is_manifold(&self, edge: u32) -> Option<bool> {
        let faces = self.edge_faces.get(edge as usize)?;
        Some(faces.len() == 2)
    }

    fn vertex_edge_count(&self, vertex: u32) -> Option<usize> {
        self.vertex_edges.get(vertex as usize).map(Vec::len)
    }

    fn edge_face_count(&self, edge: u32) -> Option<usize> {
        self.edge_faces.get(edge as usize).map(Vec::len)
    }

    fn face_vertex_count(&self, face: u32) -> Option<usize> {
        self.faces.get(face as usize).map(Vec::len)
    }

    fn face_edges(&self, face: u32) -> Option<&[u32]> {
        self.face_edges.get(face as usize).map(Vec::as_slice)
    }

    fn is_editable(&self) -> bool {
        self.editable
    }

    fn ensure_edit_mode(&mut self) {
        self.edit_mode = true;
    }

    fn set_select_mode(&mut self, mode: SelectMode) {
        self.select_mode = mode;
    }

    fn set_selected(&mut self, element: ElementType, index: u32, selected: bool) {
        if index as usize >= self.element_count(element) {
            return;
        }
        let set = self.selection_set_mut(element);
        if selected {
            set.insert(index);
        } else {
            set.remove(&index);
        }
    }

    fn clear_selection(&mut self) {
        self.selected_verts.clear();
        self.selected_edges.clear();
        self.selected_faces.clear();
    }
}

/// Normalize edge endpoints so the lower index comes first.
#[inline]
fn normalize_edge(a: u32, b: u32) -> (u32, u32) {
    if a < b { (a, b) } else { (b, a) }
}

/// Create a closed unit cube of six quad faces.
///
/// The cube is manifold everywhere: every edge borders exactly two faces
/// and every vertex has a closed three-face fan.
#[must_use]
pub fn unit_cube() -> PolyMesh {
    PolyMesh::from_faces(
        8,
        vec![
            vec![0, 1, 2, 3], // bottom
            vec![4, 7, 6, 5], // top
            vec![0, 4, 5, 1], // front
            vec![1, 5, 6, 2], // right
            vec![2, 6, 7, 3], // back
            vec![3, 7, 4, 0], // left
        ],
    )
}
