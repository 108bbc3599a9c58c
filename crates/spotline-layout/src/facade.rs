//! The seam between the layout engine and the caller's rendering layer.

use rustc_hash::FxHashMap;
use spotline_core::{EdgeId, PointF, SizeF, SpotId};
use spotline_style::Rgb;

/// Errors from facade lookups.
///
/// A failing lookup means the caller handed the engine a graph and a view
/// that disagree; the run fails fast instead of silently skipping cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacadeError {
    /// No visual cell is registered for this spot.
    UnknownSpot(SpotId),
    /// No visual cell is registered for this edge.
    UnknownEdge(EdgeId),
}

impl std::fmt::Display for FacadeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownSpot(id) => write!(f, "no visual cell for {id}"),
            Self::UnknownEdge(id) => write!(f, "no visual cell for {id}"),
        }
    }
}

impl std::error::Error for FacadeError {}

/// Write access to the caller-owned visual cells.
///
/// Implemented by whatever rendering layer hosts the timeline view. The
/// engine issues in-place mutations through this trait as its only side
/// effect; it never touches the graph or the spots themselves.
pub trait CellFacade {
    fn set_position(&mut self, spot: SpotId, position: PointF) -> Result<(), FacadeError>;
    fn set_size(&mut self, spot: SpotId, size: SizeF) -> Result<(), FacadeError>;
    fn set_cell_color(&mut self, spot: SpotId, color: Rgb) -> Result<(), FacadeError>;
    fn set_edge_color(&mut self, edge: EdgeId, color: Rgb) -> Result<(), FacadeError>;
}

/// The visual state recorded for one spot cell.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RecordedCell {
    pub position: Option<PointF>,
    pub size: Option<SizeF>,
    pub color: Option<Rgb>,
}

/// An in-memory facade that records every mutation.
///
/// Accepts writes for any spot or edge; useful as a test double and for
/// headless consumers that want the layout without a live view.
#[derive(Debug, Clone, Default)]
pub struct RecordingFacade {
    cells: FxHashMap<SpotId, RecordedCell>,
    edge_colors: FxHashMap<EdgeId, Rgb>,
}

impl RecordingFacade {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn cell(&self, spot: SpotId) -> Option<&RecordedCell> {
        self.cells.get(&spot)
    }

    #[must_use]
    pub fn edge_color(&self, edge: EdgeId) -> Option<Rgb> {
        self.edge_colors.get(&edge).copied()
    }

    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }
}

impl CellFacade for RecordingFacade {
    fn set_position(&mut self, spot: SpotId, position: PointF) -> Result<(), FacadeError> {
        self.cells.entry(spot).or_default().position = Some(position);
        Ok(())
    }

    fn set_size(&mut self, spot: SpotId, size: SizeF) -> Result<(), FacadeError> {
        self.cells.entry(spot).or_default().size = Some(size);
        Ok(())
    }

    fn set_cell_color(&mut self, spot: SpotId, color: Rgb) -> Result<(), FacadeError> {
        self.cells.entry(spot).or_default().color = Some(color);
        Ok(())
    }

    fn set_edge_color(&mut self, edge: EdgeId, color: Rgb) -> Result<(), FacadeError> {
        self.edge_colors.insert(edge, color);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_facade_captures_all_writes() {
        let mut facade = RecordingFacade::new();
        let spot = SpotId(3);
        facade.set_position(spot, PointF::new(10.0, 20.0)).unwrap();
        facade.set_size(spot, SizeF::new(130.0, 40.0)).unwrap();
        facade.set_cell_color(spot, Rgb::new(255, 0, 0)).unwrap();
        facade.set_edge_color(EdgeId(0), Rgb::new(255, 0, 0)).unwrap();

        let cell = facade.cell(spot).unwrap();
        assert_eq!(cell.position, Some(PointF::new(10.0, 20.0)));
        assert_eq!(cell.size, Some(SizeF::new(130.0, 40.0)));
        assert_eq!(cell.color, Some(Rgb::new(255, 0, 0)));
        assert_eq!(facade.edge_color(EdgeId(0)), Some(Rgb::new(255, 0, 0)));
        assert_eq!(facade.cell_count(), 1);
    }

    #[test]
    fn unknown_lookups_return_none() {
        let facade = RecordingFacade::new();
        assert!(facade.cell(SpotId(9)).is_none());
        assert!(facade.edge_color(EdgeId(9)).is_none());
    }
}
