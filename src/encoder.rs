use crate::error::EncodeError;
use crate::observation::{FurnishedStatus, PropertyObservation, PropertyType, Region};
use crate::tiers::LocationTierTable;

/// Canonical column order of the encoded feature vector.
///
/// This order is load-bearing: the model is trained against it and has no
/// way to detect a reordering, so it is exposed here for callers and tests
/// to assert on. Categoricals are plain integer codes (the one-hot and
/// external-pipeline encodings of earlier revisions are gone).
pub const FEATURE_COLUMNS: [&str; 10] = [
    "property_type",
    "rooms",
    "size_sqft",
    "furnished",
    "region",
    "gymnasium",
    "air_cond",
    "washing_machine",
    "swimming_pool",
    "location_bin",
];

/// Fixed-length numeric vector in `FEATURE_COLUMNS` order, ready for the
/// regressor. Positional accessors decode the categorical columns back to
/// their labels.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector([f32; FEATURE_COLUMNS.len()]);

impl FeatureVector {
    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    pub fn property_type(&self) -> Option<PropertyType> {
        PropertyType::from_code(self.0[0] as u8)
    }

    pub fn rooms(&self) -> u8 {
        self.0[1] as u8
    }

    pub fn size_sqft(&self) -> f32 {
        self.0[2]
    }

    pub fn furnished(&self) -> Option<FurnishedStatus> {
        FurnishedStatus::from_code(self.0[3] as u8)
    }

    pub fn region(&self) -> Option<Region> {
        Region::from_code(self.0[4] as u8)
    }

    pub fn gymnasium(&self) -> bool {
        self.0[5] != 0.0
    }

    pub fn air_cond(&self) -> bool {
        self.0[6] != 0.0
    }

    pub fn washing_machine(&self) -> bool {
        self.0[7] != 0.0
    }

    pub fn swimming_pool(&self) -> bool {
        self.0[8] != 0.0
    }

    pub fn location_bin(&self) -> u8 {
        self.0[9] as u8
    }
}

/// Encode one observation against the historical tier table.
///
/// Pure function of the observation's semantic content: two observations
/// equal in value encode to identical vectors. The only fallible step is
/// the location lookup; the categorical fields were validated when the
/// observation was built.
pub fn encode(
    obs: &PropertyObservation,
    tiers: &LocationTierTable,
) -> Result<FeatureVector, EncodeError> {
    let location_bin = tiers.tier(&obs.location)?;
    Ok(FeatureVector([
        obs.property_type.code() as f32,
        obs.rooms as f32,
        obs.size_sqft,
        obs.furnished.code() as f32,
        obs.region.code() as f32,
        obs.gymnasium as u8 as f32,
        obs.air_cond as u8 as f32,
        obs.washing_machine as u8 as f32,
        obs.swimming_pool as u8 as f32,
        location_bin as f32,
    ]))
}
