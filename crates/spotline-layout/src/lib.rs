#![forbid(unsafe_code)]

//! Timeline grid layout for tracked object lineages.
//!
//! # Role in Spotline
//! `spotline-layout` turns a track graph into a timeline grid: every spot
//! gets a discrete (column, row) slot, every track a contiguous band of
//! columns and a color sampled from a perceptual ramp. Rows correspond
//! one-to-one with the sorted distinct time instants of the graph.
//!
//! # Primary responsibilities
//! - **TimeLayout**: the placement engine. Walks each track depth-first and
//!   keeps linked spots in the same column lane where possible.
//! - **LayoutPlan**: the pure result of a run, queryable and serializable.
//! - **CellFacade**: the narrow seam to whatever rendering layer the caller
//!   uses; the engine holds no UI-toolkit dependency.
//! - **CellMetrics**: grid-to-pixel conversion constants, overridable from
//!   the environment.
//!
//! # How it fits in the system
//! The tracking stage builds a [`spotline_core::TrackGraph`]; this crate
//! reads it and pushes positions, sizes, and colors through a [`CellFacade`]
//! implemented by the host's view layer.

pub mod facade;
pub mod metrics;
pub mod plan;
pub mod time_layout;

pub use facade::{CellFacade, FacadeError, RecordingFacade};
pub use metrics::{CellMetrics, CellMetricsParse, MetricsError};
pub use plan::{LayoutPlan, SpotPlacement, TrackPlacement};
pub use time_layout::{LayoutError, TimeLayout};
