#![forbid(unsafe_code)]

//! Core data model for Spotline: spots, the track graph, and traversal.
//!
//! # Role in Spotline
//! `spotline-core` owns the inputs of the layout pipeline. A tracking stage
//! (external to this workspace) detects objects over time and links them into
//! lineages; this crate models those detections as [`Spot`]s and the linkage
//! as an undirected weighted [`TrackGraph`].
//!
//! # Primary responsibilities
//! - **Spot**: identity, numeric features (time position above all), and a
//!   rendering size hint.
//! - **TrackGraph**: insertion-ordered vertex/edge storage with O(1) edge
//!   containment and incident-edge lookup.
//! - **Connected components**: one component per track, computed in a
//!   deterministic order.
//! - **DepthFirst**: deterministic preorder traversal used by the layout
//!   engine to walk one track at a time.
//!
//! # How it fits in the system
//! `spotline-layout` consumes this crate read-only: the engine never mutates
//! the graph or the spots, it only derives grid placements from them.

pub mod geometry;
pub mod graph;
pub mod spot;

pub use geometry::{GridPosition, PointF, SizeF};
pub use graph::{DepthFirst, Edge, EdgeId, GraphError, TrackGraph};
pub use spot::{Feature, Spot, SpotId, TimeKey};
