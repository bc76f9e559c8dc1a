//! Rental price prediction for the Kuala Lumpur & Selangor market.
//!
//! The library holds the whole logical core: validated observation types,
//! the fixed-order feature encoder, the location tier deriver with its
//! static reference tables, and the random-forest model wrapper. The
//! `train` binary produces the model and tier-table artifacts; the server
//! binary loads them once and answers prediction requests.

pub mod data;
pub mod encoder;
pub mod error;
pub mod locations;
pub mod model;
pub mod observation;
pub mod tiers;

pub use encoder::{encode, FeatureVector, FEATURE_COLUMNS};
pub use error::EncodeError;
pub use model::RentModel;
pub use observation::{FurnishedStatus, PropertyObservation, PropertyType, Region};
pub use tiers::{LocationTierTable, TIER_COUNT};
