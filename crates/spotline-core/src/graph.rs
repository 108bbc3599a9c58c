//! The undirected track graph and its deterministic traversals.
//!
//! Vertex and edge insertion order is preserved and defines every iteration
//! order in this crate: spot iteration, neighbor order, component order, and
//! depth-first visit order. The layout engine leans on this to produce
//! bit-identical placements across repeated runs.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::spot::{Spot, SpotId};

/// Opaque edge identifier, dense from 0 in insertion order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct EdgeId(pub u32);

impl std::fmt::Display for EdgeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "edge#{}", self.0)
    }
}

/// An undirected weighted link between two temporally adjacent spots.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Edge {
    pub source: SpotId,
    pub target: SpotId,
    pub weight: f64,
}

impl Edge {
    /// The endpoint that is not `spot`, or `None` if `spot` is not an
    /// endpoint at all.
    #[must_use]
    pub fn opposite(&self, spot: SpotId) -> Option<SpotId> {
        if spot == self.source {
            Some(self.target)
        } else if spot == self.target {
            Some(self.source)
        } else {
            None
        }
    }
}

/// Errors from graph construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A spot with this id is already in the graph.
    DuplicateSpot(SpotId),
    /// An edge endpoint names a spot the graph does not contain.
    UnknownSpot(SpotId),
    /// Both endpoints of an edge name the same spot.
    SelfLoop(SpotId),
    /// The two spots are already linked.
    DuplicateEdge(SpotId, SpotId),
}

impl std::fmt::Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateSpot(id) => write!(f, "duplicate spot: {id}"),
            Self::UnknownSpot(id) => write!(f, "unknown spot: {id}"),
            Self::SelfLoop(id) => write!(f, "self loop on {id}"),
            Self::DuplicateEdge(a, b) => write!(f, "duplicate edge: {a} -- {b}"),
        }
    }
}

impl std::error::Error for GraphError {}

/// Undirected weighted graph over [`Spot`]s.
///
/// Owned by the tracking stage; the layout engine only reads it.
#[derive(Debug, Clone, Default)]
pub struct TrackGraph {
    spots: Vec<Spot>,
    index: FxHashMap<SpotId, usize>,
    edges: Vec<Edge>,
    /// Incident edges per spot, parallel to `spots`, in insertion order.
    incidence: Vec<Vec<EdgeId>>,
    /// Normalized (min, max) endpoint pairs for O(1) containment tests.
    edge_set: FxHashSet<(SpotId, SpotId)>,
}

fn normalize(a: SpotId, b: SpotId) -> (SpotId, SpotId) {
    if a <= b { (a, b) } else { (b, a) }
}

impl TrackGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a spot. Fails if a spot with the same id is already present.
    pub fn add_spot(&mut self, spot: Spot) -> Result<(), GraphError> {
        let id = spot.id();
        if self.index.contains_key(&id) {
            return Err(GraphError::DuplicateSpot(id));
        }
        self.index.insert(id, self.spots.len());
        self.spots.push(spot);
        self.incidence.push(Vec::new());
        Ok(())
    }

    /// Link two spots with a weighted undirected edge.
    pub fn connect(&mut self, a: SpotId, b: SpotId, weight: f64) -> Result<EdgeId, GraphError> {
        if a == b {
            return Err(GraphError::SelfLoop(a));
        }
        let ia = *self.index.get(&a).ok_or(GraphError::UnknownSpot(a))?;
        let ib = *self.index.get(&b).ok_or(GraphError::UnknownSpot(b))?;
        if !self.edge_set.insert(normalize(a, b)) {
            return Err(GraphError::DuplicateEdge(a, b));
        }
        let id = EdgeId(self.edges.len() as u32);
        self.edges.push(Edge {
            source: a,
            target: b,
            weight,
        });
        self.incidence[ia].push(id);
        self.incidence[ib].push(id);
        Ok(id)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.spots.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spots.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Spots in insertion order.
    pub fn spots(&self) -> impl Iterator<Item = &Spot> {
        self.spots.iter()
    }

    #[must_use]
    pub fn spot(&self, id: SpotId) -> Option<&Spot> {
        self.index.get(&id).map(|&i| &self.spots[i])
    }

    #[must_use]
    pub fn contains_spot(&self, id: SpotId) -> bool {
        self.index.contains_key(&id)
    }

    /// Whether an undirected edge links `a` and `b`.
    #[must_use]
    pub fn contains_edge(&self, a: SpotId, b: SpotId) -> bool {
        self.edge_set.contains(&normalize(a, b))
    }

    #[must_use]
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.0 as usize)
    }

    /// Incident edges of `id`, in edge insertion order.
    pub fn edges_of(&self, id: SpotId) -> impl Iterator<Item = EdgeId> + '_ {
        self.index
            .get(&id)
            .map(|&i| self.incidence[i].as_slice())
            .unwrap_or_default()
            .iter()
            .copied()
    }

    /// Neighbors of `id`, in edge insertion order.
    pub fn neighbors(&self, id: SpotId) -> impl Iterator<Item = SpotId> + '_ {
        self.edges_of(id)
            .filter_map(move |e| self.edges[e.0 as usize].opposite(id))
    }

    /// Connected components, one per track.
    ///
    /// Members are listed in vertex insertion order; components are ordered
    /// by their earliest-inserted member. Deterministic for a given
    /// construction sequence.
    #[must_use]
    pub fn connected_components(&self) -> Vec<Vec<SpotId>> {
        // Component index per spot, assigned by flood fill from each
        // yet-unlabeled spot in insertion order.
        let mut label: Vec<Option<usize>> = vec![None; self.spots.len()];
        let mut next = 0usize;
        for start in 0..self.spots.len() {
            if label[start].is_some() {
                continue;
            }
            let mut stack = vec![start];
            label[start] = Some(next);
            while let Some(i) = stack.pop() {
                let id = self.spots[i].id();
                for neighbor in self.neighbors(id) {
                    let j = self.index[&neighbor];
                    if label[j].is_none() {
                        label[j] = Some(next);
                        stack.push(j);
                    }
                }
            }
            next += 1;
        }

        let mut components = vec![Vec::new(); next];
        for (i, spot) in self.spots.iter().enumerate() {
            if let Some(c) = label[i] {
                components[c].push(spot.id());
            }
        }
        components
    }
}

/// Deterministic preorder depth-first traversal of one component.
///
/// Visits the root first, then descends into neighbors in edge insertion
/// order. Only the component containing the root is visited.
pub struct DepthFirst<'g> {
    graph: &'g TrackGraph,
    stack: Vec<SpotId>,
    visited: FxHashSet<SpotId>,
}

impl<'g> DepthFirst<'g> {
    /// Start a traversal at `root`. Yields nothing if `root` is not in the
    /// graph.
    #[must_use]
    pub fn new(graph: &'g TrackGraph, root: SpotId) -> Self {
        let stack = if graph.contains_spot(root) {
            vec![root]
        } else {
            Vec::new()
        };
        Self {
            graph,
            stack,
            visited: FxHashSet::default(),
        }
    }
}

impl Iterator for DepthFirst<'_> {
    type Item = SpotId;

    fn next(&mut self) -> Option<SpotId> {
        loop {
            let id = self.stack.pop()?;
            if !self.visited.insert(id) {
                continue;
            }
            // Reverse push order so the first-inserted neighbor is visited
            // first.
            let before = self.stack.len();
            for neighbor in self.graph.neighbors(id) {
                if !self.visited.contains(&neighbor) {
                    self.stack.push(neighbor);
                }
            }
            self.stack[before..].reverse();
            return Some(id);
        }
    }
}
