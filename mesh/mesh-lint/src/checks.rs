//! The check registry and its predicates.
//!
//! Each check is a pure, deterministic predicate over a [`TopologyAdapter`]
//! producing the indices of defective elements per element type. Running a
//! predicate twice on an unchanged mesh yields identical results; nothing
//! here touches selection state.

use mesh_topology::{ElementType, TopologyAdapter};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{LintError, LintResult};

/// The registered topological checks, in registry order.
///
/// The registry is a static table: each variant carries its symbol, display
/// label, and default enabled state, and dispatch to the predicate is a
/// `match`, resolved at compile time rather than looked up per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CheckKind {
    /// Faces with exactly three vertices.
    Triangles,
    /// Faces with more than four vertices.
    Ngons,
    /// Faces fully enclosed by other geometry.
    InteriorFaces,
    /// Vertices and edges the host reports as not manifold.
    NonmanifoldElements,
    /// Vertices with six or more incident edges.
    SixPlusPoles,
}

impl CheckKind {
    /// Every check, in registry order.
    pub const ALL: [CheckKind; 5] = [
        CheckKind::Triangles,
        CheckKind::Ngons,
        CheckKind::InteriorFaces,
        CheckKind::NonmanifoldElements,
        CheckKind::SixPlusPoles,
    ];

    /// Number of registered checks.
    pub const COUNT: usize = Self::ALL.len();

    /// Stable identifier used by external configuration.
    #[must_use]
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Triangles => "tris",
            Self::Ngons => "ngons",
            Self::InteriorFaces => "interior_faces",
            Self::NonmanifoldElements => "nonmanifold",
            Self::SixPlusPoles => "sixplus_poles",
        }
    }

    /// Human-readable label; unique, and the join key for diffing.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Triangles => "Tris",
            Self::Ngons => "Ngons",
            Self::InteriorFaces => "Interior Faces",
            Self::NonmanifoldElements => "Nonmanifold Elements",
            Self::SixPlusPoles => "6+-edge Poles",
        }
    }

    /// Whether the check runs unless the user disables it.
    #[must_use]
    pub fn default_enabled(&self) -> bool {
        !matches!(self, Self::SixPlusPoles)
    }

    /// Look a check up by its configuration symbol.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.symbol() == symbol)
    }
}

/// Defective element indices, grouped by element type.
///
/// Index order is whatever the predicate produced (ascending, for the
/// built-in checks); the analyzer never reorders or deduplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementSets {
    /// Defective vertex indices.
    pub verts: Vec<u32>,
    /// Defective edge indices.
    pub edges: Vec<u32>,
    /// Defective face indices.
    pub faces: Vec<u32>,
}

impl ElementSets {
    /// The indices recorded for one element type.
    #[must_use]
    pub fn get(&self, element: ElementType) -> &[u32] {
        match element {
            ElementType::Vertex => &self.verts,
            ElementType::Edge => &self.edges,
            ElementType::Face => &self.faces,
        }
    }

    /// Total defective elements across all types.
    #[must_use]
    pub fn total(&self) -> usize {
        self.verts.len() + self.edges.len() + self.faces.len()
    }

    /// Whether no element is flagged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.verts.is_empty() && self.edges.is_empty() && self.faces.is_empty()
    }
}

/// Run one check's predicate against the mesh.
///
/// # Errors
///
/// Returns [`LintError::AdapterQuery`] when the adapter cannot answer a
/// query mid-scan (malformed mesh data). The failing check carries no
/// partial results in that case.
pub fn evaluate(kind: CheckKind, mesh: &impl TopologyAdapter) -> LintResult<ElementSets> {
    let sets = match kind {
        CheckKind::Triangles => find_triangles(mesh)?,
        CheckKind::Ngons => find_ngons(mesh)?,
        CheckKind::InteriorFaces => find_interior_faces(mesh)?,
        CheckKind::NonmanifoldElements => find_nonmanifold(mesh)?,
        CheckKind::SixPlusPoles => find_sixplus_poles(mesh)?,
    };
    debug!(check = kind.label(), flagged = sets.total(), "check evaluated");
    Ok(sets)
}

#[allow(clippy::cast_possible_truncation)]
fn face_indices(mesh: &impl TopologyAdapter) -> impl Iterator<Item = u32> {
    (0..mesh.face_count()).map(|i| i as u32)
}

#[allow(clippy::cast_possible_truncation)]
fn vertex_indices(mesh: &impl TopologyAdapter) -> impl Iterator<Item = u32> {
    (0..mesh.vertex_count()).map(|i| i as u32)
}

#[allow(clippy::cast_possible_truncation)]
fn edge_indices(mesh: &impl TopologyAdapter) -> impl Iterator<Item = u32> {
    (0..mesh.edge_count()).map(|i| i as u32)
}

/// A face is a triangle iff it has exactly three vertices.
fn find_triangles(mesh: &impl TopologyAdapter) -> LintResult<ElementSets> {
    let mut bad = ElementSets::default();
    for face in face_indices(mesh) {
        let count = mesh
            .face_vertex_count(face)
            .ok_or_else(|| face_query_error(CheckKind::Triangles, face))?;
        if count == 3 {
            bad.faces.push(face);
        }
    }
    Ok(bad)
}

/// A face is an n-gon iff it has more than four vertices.
fn find_ngons(mesh: &impl TopologyAdapter) -> LintResult<ElementSets> {
    let mut bad = ElementSets::default();
    for face in face_indices(mesh) {
        let count = mesh
            .face_vertex_count(face)
            .ok_or_else(|| face_query_error(CheckKind::Ngons, face))?;
        if count > 4 {
            bad.faces.push(face);
        }
    }
    Ok(bad)
}

/// A face is interior iff every one of its edges borders three or more
/// faces, leaving no boundary-style edge to expose it.
fn find_interior_faces(mesh: &impl TopologyAdapter) -> LintResult<ElementSets> {
    let mut bad = ElementSets::default();
    for face in face_indices(mesh) {
        let edges = mesh
            .face_edges(face)
            .ok_or_else(|| face_query_error(CheckKind::InteriorFaces, face))?;
        let mut enclosed = true;
        for &edge in edges {
            let link_faces = mesh.edge_face_count(edge).ok_or_else(|| {
                LintError::adapter_query(
                    CheckKind::InteriorFaces,
                    format!("edge {edge} of face {face} out of range"),
                )
            })?;
            if link_faces < 3 {
                enclosed = false;
                break;
            }
        }
        if enclosed {
            bad.faces.push(face);
        }
    }
    Ok(bad)
}

/// Vertices and edges the host classifies as non-manifold, verbatim.
///
/// Vertices on a mirror symmetry plane come back as false positives; that
/// gap is accepted and deliberately not filtered here.
fn find_nonmanifold(mesh: &impl TopologyAdapter) -> LintResult<ElementSets> {
    let mut bad = ElementSets::default();
    for vertex in vertex_indices(mesh) {
        let manifold = mesh.vertex_is_manifold(vertex).ok_or_else(|| {
            LintError::adapter_query(
                CheckKind::NonmanifoldElements,
                format!("vertex {vertex} out of range"),
            )
        })?;
        if !manifold {
            bad.verts.push(vertex);
        }
    }
    for edge in edge_indices(mesh) {
        let manifold = mesh.edge_is_manifold(edge).ok_or_else(|| {
            LintError::adapter_query(
                CheckKind::NonmanifoldElements,
                format!("edge {edge} out of range"),
            )
        })?;
        if !manifold {
            bad.edges.push(edge);
        }
    }
    Ok(bad)
}

/// A vertex is a pole iff more than five edges meet at it.
fn find_sixplus_poles(mesh: &impl TopologyAdapter) -> LintResult<ElementSets> {
    let mut bad = ElementSets::default();
    for vertex in vertex_indices(mesh) {
        let incident = mesh.vertex_edge_count(vertex).ok_or_else(|| {
            LintError::adapter_query(
                CheckKind::SixPlusPoles,
                format!("vertex {vertex} out of range"),
            )
        })?;
        if incident > 5 {
            bad.verts.push(vertex);
        }
    }
    Ok(bad)
}

fn face_query_error(kind: CheckKind, face: u32) -> LintError {
    LintError::adapter_query(kind, format!("face {face} out of range"))
}
