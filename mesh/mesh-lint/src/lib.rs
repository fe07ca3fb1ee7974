//! Mesh quality checks with incremental change detection.
//!
//! This crate inspects a mesh's topology through the
//! [`TopologyAdapter`](mesh_topology::TopologyAdapter) boundary and reports
//! quality defects:
//!
//! - **Check registry**: five topological checks (triangles, n-gons,
//!   interior faces, non-manifold elements, 6+-edge poles), each a pure
//!   predicate producing defective element indices
//! - **Analyzer**: runs the enabled checks and aggregates per-check,
//!   per-element-type results into an immutable [`Analysis`]
//! - **Selection mapping**: projects an analysis back onto the mesh's
//!   selection state ([`select_lint`])
//! - **Change detection**: a [`LintWatcher`] ticked by the host that
//!   re-analyzes only when a cheap topology fingerprint changes and
//!   summarizes defect regressions as a transient message
//!
//! The engine never repairs meshes, never touches geometry, and consumes
//! manifold/adjacency primitives from the host rather than redefining them.
//!
//! # Example
//!
//! ```
//! use mesh_lint::{analyze, CheckKind, LintConfig};
//! use mesh_topology::PolyMesh;
//!
//! // A quad with one corner triangulated off.
//! let mesh = PolyMesh::from_faces(4, vec![vec![0, 1, 2], vec![0, 2, 3]]);
//! let analysis = analyze(&mesh, &LintConfig::default());
//!
//! let tris = analysis.by_kind(CheckKind::Triangles).unwrap();
//! assert_eq!(tris.elements.faces, vec![0, 1]);
//! assert_eq!(tris.row_label(), "2x Tris");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod analyzer;
mod checks;
mod config;
mod error;
mod naming;
mod selection;
mod snapshot;
mod watcher;

pub use analyzer::{analyze, Analysis, CheckOutcome, CheckResult};
pub use checks::{evaluate, CheckKind, ElementSets};
pub use config::LintConfig;
pub use error::{LintError, LintResult};
pub use naming::has_default_name;
pub use selection::{apply_selection, select_lint};
pub use snapshot::TopologySnapshot;
pub use watcher::{diff_analyses, ChangeMessage, LintWatcher, MESSAGE_DISPLAY_DURATION};
