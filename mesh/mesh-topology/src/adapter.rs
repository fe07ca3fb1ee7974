//! The topology adapter boundary.

use crate::{ElementType, SelectMode};

/// Boundary trait for a host mesh consumed by the lint engine.
///
/// This trait defines the minimal interface the engine needs: element
/// counts, manifold classification, incidence queries, and selection
/// mutation. Indices are stable `u32` values valid for the lifetime of one
/// analysis; query methods return `None` for out-of-range indices rather
/// than panicking.
///
/// Manifoldness and interior-ness are host primitives. Implementations are
/// trusted verbatim; in particular, vertices on a mirror symmetry plane may
/// be reported non-manifold and the engine will flag them (a known,
/// accepted false positive).
pub trait TopologyAdapter {
    /// Opaque identity of the underlying mesh.
    ///
    /// Two adapters with the same id are assumed to present the same mesh
    /// across calls; a changed id invalidates any element indices recorded
    /// from earlier analyses.
    fn mesh_id(&self) -> u64;

    /// Number of vertices.
    fn vertex_count(&self) -> usize;

    /// Number of edges.
    fn edge_count(&self) -> usize;

    /// Number of faces.
    fn face_count(&self) -> usize;

    /// Whether the vertex has locally 2-manifold topology.
    fn vertex_is_manifold(&self, vertex: u32) -> Option<bool>;

    /// Whether the edge has locally 2-manifold topology.
    fn edge_is_manifold(&self, edge: u32) -> Option<bool>;

    /// Number of edges incident to the vertex.
    fn vertex_edge_count(&self, vertex: u32) -> Option<usize>;

    /// Number of faces incident to the edge.
    fn edge_face_count(&self, edge: u32) -> Option<usize>;

    /// Number of vertices in the face's boundary loop.
    fn face_vertex_count(&self, face: u32) -> Option<usize>;

    /// Edge indices bounding the face.
    fn face_edges(&self, face: u32) -> Option<&[u32]>;

    /// Whether the mesh can currently be analyzed and edited.
    ///
    /// Entry points check this before mutating anything; it is the
    /// adapter-level equivalent of "an active mesh object exists".
    fn is_editable(&self) -> bool;

    /// Switch the host into edit mode if it is not already there.
    fn ensure_edit_mode(&mut self);

    /// Set which element kinds the selection may contain.
    fn set_select_mode(&mut self, mode: SelectMode);

    /// Mark a single element selected or deselected.
    ///
    /// Out-of-range indices are ignored. Selecting an already-selected
    /// element is a no-op, so applying a selection twice is idempotent.
    fn set_selected(&mut self, element: ElementType, index: u32, selected: bool);

    /// Deselect every element of every kind.
    fn clear_selection(&mut self);
}
