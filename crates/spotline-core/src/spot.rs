//! Spots: detected object instances with a time coordinate and feature set.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Opaque spot identifier.
///
/// Ids are assigned by the detection stage and are stable across layout runs.
/// The id order is the deterministic tie-break wherever two spots compare
/// equal on time.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct SpotId(pub u32);

impl std::fmt::Display for SpotId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "spot#{}", self.0)
    }
}

/// Numeric features a spot can carry.
///
/// The layout engine only reads [`Feature::PositionT`]; the rest are carried
/// for downstream consumers (feature plots, per-feature coloring).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Feature {
    PositionT,
    PositionX,
    PositionY,
    PositionZ,
    Radius,
    QualityScore,
}

/// A single detected object instance.
///
/// Spots are immutable once handed to the graph: the tracking stage fills the
/// feature map before layout runs, and the layout engine never writes back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Spot {
    id: SpotId,
    features: FxHashMap<Feature, f64>,
    /// Rendering hint: natural height of the spot's icon, in pixels.
    icon_height: u32,
}

/// Icon height used when the detection stage supplies none.
pub const DEFAULT_ICON_HEIGHT: u32 = 80;

impl Spot {
    #[must_use]
    pub fn new(id: SpotId) -> Self {
        Self {
            id,
            features: FxHashMap::default(),
            icon_height: DEFAULT_ICON_HEIGHT,
        }
    }

    /// Set a feature value (builder-style).
    #[must_use]
    pub fn with_feature(mut self, feature: Feature, value: f64) -> Self {
        self.features.insert(feature, value);
        self
    }

    /// Set the icon height rendering hint (builder-style).
    #[must_use]
    pub fn with_icon_height(mut self, height: u32) -> Self {
        self.icon_height = height;
        self
    }

    #[inline]
    #[must_use]
    pub fn id(&self) -> SpotId {
        self.id
    }

    #[inline]
    #[must_use]
    pub fn feature(&self, feature: Feature) -> Option<f64> {
        self.features.get(&feature).copied()
    }

    /// Time position of this spot, if the detection stage set one.
    #[inline]
    #[must_use]
    pub fn position_t(&self) -> Option<f64> {
        self.feature(Feature::PositionT)
    }

    #[inline]
    #[must_use]
    pub fn icon_height(&self) -> u32 {
        self.icon_height
    }
}

/// Total-ordered wrapper over a time value, usable as an ordered map key.
///
/// Uses IEEE 754 total ordering, so NaN times sort deterministically instead
/// of poisoning comparisons.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TimeKey(pub f64);

impl PartialEq for TimeKey {
    fn eq(&self, other: &Self) -> bool {
        self.0.total_cmp(&other.0) == std::cmp::Ordering::Equal
    }
}

impl Eq for TimeKey {}

impl PartialOrd for TimeKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TimeKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl From<f64> for TimeKey {
    fn from(t: f64) -> Self {
        Self(t)
    }
}
