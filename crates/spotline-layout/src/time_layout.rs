//! The timeline placement engine.

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;
use spotline_core::{DepthFirst, GridPosition, PointF, SizeF, SpotId, TimeKey, TrackGraph};
use spotline_style::ColorScale;

use crate::facade::{CellFacade, FacadeError};
use crate::metrics::CellMetrics;
use crate::plan::{LayoutPlan, SpotPlacement, TrackPlacement};

/// Errors from a layout run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    /// A spot in the graph carries no time-position feature.
    MissingTimeFeature(SpotId),
    /// A facade lookup failed while applying the plan.
    Facade(FacadeError),
}

impl std::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingTimeFeature(id) => {
                write!(f, "{id} has no time position feature")
            }
            Self::Facade(e) => write!(f, "facade rejected a cell update: {e}"),
        }
    }
}

impl std::error::Error for LayoutError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Facade(e) => Some(e),
            Self::MissingTimeFeature(_) => None,
        }
    }
}

impl From<FacadeError> for LayoutError {
    fn from(e: FacadeError) -> Self {
        Self::Facade(e)
    }
}

/// The running cursor threaded through one whole layout run.
///
/// Deliberately shared across tracks, not reset between them: the previously
/// visited spot decides whether the traversal stays in its lane, and the
/// column cursor only ever moves right.
#[derive(Debug, Clone, Copy)]
struct LaneCursor {
    column: i64,
    previous: Option<SpotId>,
}

/// Arranges tracked-object lineages on a 2-D timeline grid.
///
/// Rows are time instants (earliest at row 1, row 0 reserved for headers);
/// columns are lanes. Each track gets a contiguous band of columns and a
/// color from the injected scale. Within a track, a depth-first walk keeps a
/// spot in its predecessor's lane when the two are linked and opens a new
/// lane when the walk jumps across a gap in the lineage.
///
/// Connected components are computed once at construction and reused across
/// runs. Single-threaded and non-reentrant: one run owns its cursor state
/// from the first spot to the last.
pub struct TimeLayout<'g, S> {
    graph: &'g TrackGraph,
    tracks: Vec<Vec<SpotId>>,
    metrics: CellMetrics,
    scale: S,
    column_widths: Vec<u32>,
}

impl<'g, S: ColorScale> TimeLayout<'g, S> {
    /// Build an engine over `graph`. Components are computed here, once.
    #[must_use]
    pub fn new(graph: &'g TrackGraph, metrics: CellMetrics, scale: S) -> Self {
        Self {
            graph,
            tracks: graph.connected_components(),
            metrics,
            scale,
            column_widths: Vec::new(),
        }
    }

    /// Number of tracks (connected components).
    #[must_use]
    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }

    /// Column span of each track after the last run, in track iteration
    /// order. Empty before the first run.
    #[must_use]
    pub fn track_column_widths(&self) -> &[u32] {
        &self.column_widths
    }

    /// Lay out the graph and push the result through `facade`.
    ///
    /// Returns the plan that was applied. On an empty graph this is a no-op
    /// yielding an empty plan.
    pub fn run<F: CellFacade>(&mut self, facade: &mut F) -> Result<LayoutPlan, LayoutError> {
        let plan = self.plan()?;
        plan.apply(self.graph, facade)?;
        self.column_widths = plan.column_widths();
        Ok(plan)
    }

    /// Compute the placement without touching any facade.
    pub fn plan(&self) -> Result<LayoutPlan, LayoutError> {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "time_layout_plan",
            spots = self.graph.len(),
            tracks = self.tracks.len()
        )
        .entered();

        if self.graph.is_empty() {
            return Ok(LayoutPlan::default());
        }

        // Time instant per spot, validated up front so the traversal below
        // cannot fail half-way through.
        let mut instant_of: FxHashMap<SpotId, TimeKey> = FxHashMap::default();
        for spot in self.graph.spots() {
            let t = spot
                .position_t()
                .ok_or(LayoutError::MissingTimeFeature(spot.id()))?;
            instant_of.insert(spot.id(), TimeKey(t));
        }

        // Rows: sorted distinct instants, numbered from 1 (row 0 is the
        // header row). Columns: last used lane per instant, -1 sentinel.
        let mut last_used: BTreeMap<TimeKey, i64> = BTreeMap::new();
        for &instant in instant_of.values() {
            last_used.insert(instant, -1);
        }
        let rows: BTreeMap<TimeKey, u32> = last_used
            .keys()
            .enumerate()
            .map(|(i, &instant)| (instant, i as u32 + 1))
            .collect();

        let track_count = self.tracks.len();
        let mut cursor = LaneCursor {
            column: 1,
            previous: None,
        };
        let mut previous_track_column: i64 = 0;

        let mut placements = Vec::with_capacity(self.graph.len());
        let mut tracks = Vec::with_capacity(track_count);

        for (rank, members) in self.tracks.iter().enumerate() {
            // A lone track samples the start of the scale instead of
            // dividing by zero.
            let position = if track_count > 1 {
                rank as f32 / (track_count - 1) as f32
            } else {
                0.0
            };
            let color = self.scale.sample(position);

            let root = root_of(members, &instant_of);
            for spot_id in DepthFirst::new(self.graph, root) {
                let instant = instant_of[&spot_id];
                let free = last_used[&instant] + 1;

                // No direct link to the previously visited spot: leave its
                // lane and claim a fresh one.
                let linked = match cursor.previous {
                    Some(prev) => self.graph.contains_edge(spot_id, prev),
                    None => true,
                };
                if !linked {
                    cursor.column += 1;
                }
                cursor.previous = Some(spot_id);

                let column = free.max(cursor.column);
                cursor.column = column;
                last_used.insert(instant, column);

                let row = rows[&instant];
                placements.push(self.place(spot_id, column, row, rank));
            }

            // Seal the track's band: every instant resumes right of the
            // cursor, so the next track starts in fresh columns.
            for used in last_used.values_mut() {
                *used = cursor.column;
            }
            tracks.push(TrackPlacement {
                color,
                column_span: (cursor.column - previous_track_column + 1) as u32,
            });
            previous_track_column = cursor.column;

            #[cfg(feature = "tracing")]
            tracing::trace!(
                rank,
                spots = members.len(),
                cursor = cursor.column,
                "track placed"
            );
        }

        Ok(LayoutPlan::new(placements, tracks))
    }

    fn place(&self, spot: SpotId, column: i64, row: u32, rank: usize) -> SpotPlacement {
        let m = self.metrics;
        let x = column as f32 * m.column_width - m.cell_width / 2.0;
        let y = (0.5 + row as f32) * m.row_height - m.cell_height / 2.0;
        let icon_height = self
            .graph
            .spot(spot)
            .map_or(0, spotline_core::Spot::icon_height);
        let height = m.cell_width.min(icon_height as f32);
        SpotPlacement {
            spot,
            grid: GridPosition::new(column as u32, row),
            position: PointF::new(x, y),
            size: SizeF::new(m.cell_width, height),
            track: rank,
        }
    }
}

/// Root of a track: earliest instant, ties broken by smallest spot id.
fn root_of(members: &[SpotId], instant_of: &FxHashMap<SpotId, TimeKey>) -> SpotId {
    let mut best = members[0];
    for &id in &members[1..] {
        let earlier = (instant_of[&id], id) < (instant_of[&best], best);
        if earlier {
            best = id;
        }
    }
    best
}
