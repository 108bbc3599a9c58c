//! The pure result of a layout run.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use spotline_core::{GridPosition, PointF, SizeF, SpotId, TrackGraph};
use spotline_style::Rgb;

use crate::facade::{CellFacade, FacadeError};

/// Placement of one spot, in traversal order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpotPlacement {
    pub spot: SpotId,
    pub grid: GridPosition,
    /// Pixel position of the cell's top-left corner.
    pub position: PointF,
    pub size: SizeF,
    /// Rank of the spot's track, in track iteration order.
    pub track: usize,
}

/// Per-track layout summary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackPlacement {
    pub color: Rgb,
    /// Columns reserved for the track, including the separator lane that
    /// keeps it clear of the next track's band.
    pub column_span: u32,
}

/// Everything a layout run decided, detached from any rendering layer.
///
/// Applying a plan through a [`CellFacade`] is the separate, side-effecting
/// step; the plan itself is a plain value and serializes cleanly, so headless
/// consumers can persist or diff layouts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "PlanData")]
pub struct LayoutPlan {
    placements: Vec<SpotPlacement>,
    tracks: Vec<TrackPlacement>,
    #[serde(skip)]
    by_spot: FxHashMap<SpotId, usize>,
}

/// Wire form of [`LayoutPlan`]; the spot index is rebuilt on deserialize.
#[derive(Deserialize)]
struct PlanData {
    placements: Vec<SpotPlacement>,
    tracks: Vec<TrackPlacement>,
}

impl From<PlanData> for LayoutPlan {
    fn from(data: PlanData) -> Self {
        Self::new(data.placements, data.tracks)
    }
}

impl LayoutPlan {
    pub(crate) fn new(placements: Vec<SpotPlacement>, tracks: Vec<TrackPlacement>) -> Self {
        let by_spot = placements
            .iter()
            .enumerate()
            .map(|(i, p)| (p.spot, i))
            .collect();
        Self {
            placements,
            tracks,
            by_spot,
        }
    }

    /// Spot placements in traversal order.
    #[must_use]
    pub fn placements(&self) -> &[SpotPlacement] {
        &self.placements
    }

    /// Per-track summaries in track iteration order.
    #[must_use]
    pub fn tracks(&self) -> &[TrackPlacement] {
        &self.tracks
    }

    #[must_use]
    pub fn placement(&self, spot: SpotId) -> Option<&SpotPlacement> {
        self.by_spot.get(&spot).map(|&i| &self.placements[i])
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Column span per track, in track iteration order.
    #[must_use]
    pub fn column_widths(&self) -> Vec<u32> {
        self.tracks.iter().map(|t| t.column_span).collect()
    }

    /// Push the plan into the caller's visual cells.
    ///
    /// Sets position, size, and track color on every spot cell, and the
    /// track color on every incident edge. Fails fast on the first cell the
    /// facade does not know.
    pub fn apply<F: CellFacade>(
        &self,
        graph: &TrackGraph,
        facade: &mut F,
    ) -> Result<(), FacadeError> {
        for placement in &self.placements {
            let color = self.tracks[placement.track].color;
            facade.set_position(placement.spot, placement.position)?;
            facade.set_size(placement.spot, placement.size)?;
            facade.set_cell_color(placement.spot, color)?;
            for edge in graph.edges_of(placement.spot) {
                facade.set_edge_color(edge, color)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_plan() -> LayoutPlan {
        LayoutPlan::new(
            vec![
                SpotPlacement {
                    spot: SpotId(7),
                    grid: GridPosition::new(1, 1),
                    position: PointF::new(85.0, 80.0),
                    size: SizeF::new(130.0, 80.0),
                    track: 0,
                },
                SpotPlacement {
                    spot: SpotId(9),
                    grid: GridPosition::new(2, 1),
                    position: PointF::new(235.0, 80.0),
                    size: SizeF::new(130.0, 80.0),
                    track: 1,
                },
            ],
            vec![
                TrackPlacement {
                    color: Rgb::new(0, 0, 143),
                    column_span: 2,
                },
                TrackPlacement {
                    color: Rgb::new(128, 0, 0),
                    column_span: 2,
                },
            ],
        )
    }

    #[test]
    fn placement_lookup_by_spot() {
        let plan = sample_plan();
        assert_eq!(plan.placement(SpotId(9)).unwrap().grid.column, 2);
        assert!(plan.placement(SpotId(1)).is_none());
    }

    #[test]
    fn column_widths_follow_track_order() {
        assert_eq!(sample_plan().column_widths(), vec![2, 2]);
    }

    #[test]
    fn serde_round_trip_rebuilds_lookup() {
        let plan = sample_plan();
        let json = serde_json::to_string(&plan).unwrap();
        let back: LayoutPlan = serde_json::from_str(&json).unwrap();
        assert_eq!(back.placements(), plan.placements());
        assert_eq!(back.tracks(), plan.tracks());
        assert_eq!(back.placement(SpotId(7)).unwrap().grid.row, 1);
    }
}
