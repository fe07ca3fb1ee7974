//! Mesh element kinds and selection-mode flags.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The kind of a mesh element.
///
/// The variant order is fixed; iteration over [`ElementType::ALL`] drives
/// deterministic output (diff fragments, selection application) but carries
/// no semantic weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ElementType {
    /// A mesh vertex.
    Vertex,
    /// A mesh edge.
    Edge,
    /// A mesh face.
    Face,
}

impl ElementType {
    /// All element types, in canonical order.
    pub const ALL: [ElementType; 3] = [ElementType::Vertex, ElementType::Edge, ElementType::Face];

    /// Singular display name ("vert", "edge", "face").
    #[must_use]
    pub fn singular(&self) -> &'static str {
        match self {
            Self::Vertex => "vert",
            Self::Edge => "edge",
            Self::Face => "face",
        }
    }

    /// Plural display name ("verts", "edges", "faces").
    #[must_use]
    pub fn plural(&self) -> &'static str {
        match self {
            Self::Vertex => "verts",
            Self::Edge => "edges",
            Self::Face => "faces",
        }
    }
}

/// Which element kinds a selection may contain.
///
/// Mirrors the host editor's vertex/edge/face selection toggles. The lint
/// selection step switches the adapter to [`SelectMode::ALL`] so flagged
/// elements of every kind can be marked at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SelectMode {
    /// Vertices may be selected.
    pub vertex: bool,
    /// Edges may be selected.
    pub edge: bool,
    /// Faces may be selected.
    pub face: bool,
}

impl SelectMode {
    /// All three element kinds selectable at once.
    pub const ALL: SelectMode = SelectMode {
        vertex: true,
        edge: true,
        face: true,
    };

    /// Check whether the mode permits selecting the given element type.
    #[must_use]
    pub fn allows(&self, element: ElementType) -> bool {
        match element {
            ElementType::Vertex => self.vertex,
            ElementType::Edge => self.edge,
            ElementType::Face => self.face,
        }
    }
}

impl Default for SelectMode {
    fn default() -> Self {
        Self::ALL
    }
}
