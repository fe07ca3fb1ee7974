//! Cheap topology fingerprints for gating re-analysis.

use mesh_topology::TopologyAdapter;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A cheap fingerprint of a mesh's topology: identity plus element counts.
///
/// Snapshot inequality is a necessary-but-not-sufficient change test. Two
/// equal snapshots do not guarantee an unchanged mesh (an edit that keeps
/// all three counts constant goes undetected); that imprecision is the
/// accepted price of not re-running every predicate on every tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TopologySnapshot {
    /// Opaque identity of the mesh the counts were taken from.
    pub mesh_id: u64,
    /// Vertex count at capture time.
    pub vertices: usize,
    /// Edge count at capture time.
    pub edges: usize,
    /// Face count at capture time.
    pub faces: usize,
}

impl TopologySnapshot {
    /// Capture the current fingerprint of a mesh.
    #[must_use]
    pub fn capture(mesh: &impl TopologyAdapter) -> Self {
        Self {
            mesh_id: mesh.mesh_id(),
            vertices: mesh.vertex_count(),
            edges: mesh.edge_count(),
            faces: mesh.face_count(),
        }
    }
}
