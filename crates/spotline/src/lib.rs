#![forbid(unsafe_code)]

//! Spotline: timeline grid layout for tracked object lineages.
//!
//! This crate re-exports the workspace's public API so applications depend on
//! one crate:
//!
//! - [`core`]: spots, the track graph, deterministic traversal.
//! - [`style`]: colors and color-scale sampling.
//! - [`layout`]: the [`TimeLayout`] engine, plans, facades, and metrics.
//!
//! # Example
//!
//! ```
//! use spotline::{
//!     CellMetrics, Feature, InterpolatedScale, RecordingFacade, Spot, SpotId,
//!     TimeLayout, TrackGraph,
//! };
//!
//! let mut graph = TrackGraph::new();
//! graph.add_spot(Spot::new(SpotId(0)).with_feature(Feature::PositionT, 0.0))?;
//! graph.add_spot(Spot::new(SpotId(1)).with_feature(Feature::PositionT, 1.0))?;
//! graph.connect(SpotId(0), SpotId(1), 1.0)?;
//!
//! let mut engine = TimeLayout::new(&graph, CellMetrics::default(), InterpolatedScale::jet());
//! let mut view = RecordingFacade::new();
//! let plan = engine.run(&mut view)?;
//!
//! // Both spots share the lane of their lineage.
//! assert_eq!(plan.placement(SpotId(0)).unwrap().grid.column, 1);
//! assert_eq!(plan.placement(SpotId(1)).unwrap().grid.column, 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use spotline_core as core;
pub use spotline_layout as layout;
pub use spotline_style as style;

pub use spotline_core::{
    DepthFirst, Edge, EdgeId, Feature, GraphError, GridPosition, PointF, SizeF, Spot,
    SpotId, TimeKey, TrackGraph,
};
pub use spotline_layout::{
    CellFacade, CellMetrics, FacadeError, LayoutError, LayoutPlan, RecordingFacade,
    SpotPlacement, TimeLayout, TrackPlacement,
};
pub use spotline_style::{ColorScale, InterpolatedScale, Rgb};
