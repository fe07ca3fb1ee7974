//! Topology types and the adapter boundary for mesh lint analysis.
//!
//! This crate provides the foundational types the lint engine works over:
//!
//! - [`ElementType`] - The three kinds of mesh element (vertex, edge, face)
//! - [`SelectMode`] - Which element kinds a selection may contain
//! - [`TopologyAdapter`] - The boundary trait a host mesh must implement
//! - [`PolyMesh`] - An in-memory polygonal reference implementation
//!
//! The lint engine never defines its own manifold or adjacency algorithms;
//! it consumes them through [`TopologyAdapter`]. [`PolyMesh`] exists so that
//! tests, doc examples, and benchmarks have a concrete adapter to run
//! against, and so that small tools can lint index buffers directly.
//!
//! # Example
//!
//! ```
//! use mesh_topology::{unit_cube, TopologyAdapter};
//!
//! let cube = unit_cube();
//! assert_eq!(cube.vertex_count(), 8);
//! assert_eq!(cube.edge_count(), 12);
//! assert_eq!(cube.face_count(), 6);
//!
//! // Every edge of a closed quad cube borders exactly two faces.
//! assert_eq!(cube.edge_is_manifold(0), Some(true));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod adapter;
mod element;
mod poly_mesh;

pub use adapter::TopologyAdapter;
pub use element::{ElementType, SelectMode};
pub use poly_mesh::{unit_cube, PolyMesh};
