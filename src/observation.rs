use crate::error::EncodeError;

/// Property type of a listing. Integer codes follow the alphabetical order
/// of the display labels and are fixed at build time; they must never be
/// re-derived from whatever data file happens to be loaded at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyType {
    Apartment,
    Condominium,
    Duplex,
    Flat,
    Others,
    ServiceResidence,
    Studio,
    TownhouseCondo,
}

impl PropertyType {
    /// All variants in code order.
    pub const ALL: [PropertyType; 8] = [
        PropertyType::Apartment,
        PropertyType::Condominium,
        PropertyType::Duplex,
        PropertyType::Flat,
        PropertyType::Others,
        PropertyType::ServiceResidence,
        PropertyType::Studio,
        PropertyType::TownhouseCondo,
    ];

    pub fn code(self) -> u8 {
        Self::ALL.iter().position(|&p| p == self).unwrap_or(0) as u8
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.get(code as usize).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            PropertyType::Apartment => "Apartment",
            PropertyType::Condominium => "Condominium",
            PropertyType::Duplex => "Duplex",
            PropertyType::Flat => "Flat",
            PropertyType::Others => "Others",
            PropertyType::ServiceResidence => "Service Residence",
            PropertyType::Studio => "Studio",
            PropertyType::TownhouseCondo => "Townhouse Condo",
        }
    }

    pub fn from_label(label: &str) -> Result<Self, EncodeError> {
        Self::ALL
            .iter()
            .find(|p| p.label() == label)
            .copied()
            .ok_or_else(|| EncodeError::unknown_category("property_type", label))
    }
}

/// Furnishing level, coded 0..=2.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FurnishedStatus {
    NotFurnished,
    PartiallyFurnished,
    FullyFurnished,
}

impl FurnishedStatus {
    pub const ALL: [FurnishedStatus; 3] = [
        FurnishedStatus::NotFurnished,
        FurnishedStatus::PartiallyFurnished,
        FurnishedStatus::FullyFurnished,
    ];

    pub fn code(self) -> u8 {
        match self {
            FurnishedStatus::NotFurnished => 0,
            FurnishedStatus::PartiallyFurnished => 1,
            FurnishedStatus::FullyFurnished => 2,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.get(code as usize).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            FurnishedStatus::NotFurnished => "Not Furnished",
            FurnishedStatus::PartiallyFurnished => "Partially Furnished",
            FurnishedStatus::FullyFurnished => "Fully Furnished",
        }
    }

    pub fn from_label(label: &str) -> Result<Self, EncodeError> {
        Self::ALL
            .iter()
            .find(|f| f.label() == label)
            .copied()
            .ok_or_else(|| EncodeError::unknown_category("furnished", label))
    }
}

/// Market region, coded 0..=1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    KualaLumpur,
    Selangor,
}

impl Region {
    pub const ALL: [Region; 2] = [Region::KualaLumpur, Region::Selangor];

    pub fn code(self) -> u8 {
        match self {
            Region::KualaLumpur => 0,
            Region::Selangor => 1,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.get(code as usize).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            Region::KualaLumpur => "Kuala Lumpur",
            Region::Selangor => "Selangor",
        }
    }

    pub fn from_label(label: &str) -> Result<Self, EncodeError> {
        Self::ALL
            .iter()
            .find(|r| r.label() == label)
            .copied()
            .ok_or_else(|| EncodeError::unknown_category("region", label))
    }
}

/// Parse an amenity answer. Only the exact tokens "Yes" and "No" are
/// accepted; anything else is an `InvalidBooleanEncoding` naming the field.
pub fn parse_yes_no(field: &str, value: &str) -> Result<bool, EncodeError> {
    match value {
        "Yes" => Ok(true),
        "No" => Ok(false),
        other => Err(EncodeError::invalid_boolean(field, other)),
    }
}

/// One fully-populated prediction request, validated field by field.
///
/// `rooms` is expected in 1..=10 and `size_sqft` in 300..=3000; those bounds
/// belong to the form layer and are documented preconditions here, not
/// enforced. Out-of-range numerics pass through unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyObservation {
    pub property_type: PropertyType,
    pub rooms: u8,
    pub size_sqft: f32,
    pub furnished: FurnishedStatus,
    pub region: Region,
    pub location: String,
    pub gymnasium: bool,
    pub air_cond: bool,
    pub washing_machine: bool,
    pub swimming_pool: bool,
}

impl PropertyObservation {
    /// Build an observation from the raw string labels a form submits.
    /// Fails on the first unrecognized categorical or amenity token.
    #[allow(clippy::too_many_arguments)]
    pub fn from_labels(
        property_type: &str,
        rooms: u8,
        size_sqft: f32,
        furnished: &str,
        region: &str,
        location: &str,
        gymnasium: &str,
        air_cond: &str,
        washing_machine: &str,
        swimming_pool: &str,
    ) -> Result<Self, EncodeError> {
        Ok(Self {
            property_type: PropertyType::from_label(property_type)?,
            rooms,
            size_sqft,
            furnished: FurnishedStatus::from_label(furnished)?,
            region: Region::from_label(region)?,
            location: location.to_string(),
            gymnasium: parse_yes_no("gymnasium", gymnasium)?,
            air_cond: parse_yes_no("air_cond", air_cond)?,
            washing_machine: parse_yes_no("washing_machine", washing_machine)?,
            swimming_pool: parse_yes_no("swimming_pool", swimming_pool)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn property_type_codes_follow_alphabetical_label_order() {
        let mut labels: Vec<&str> = PropertyType::ALL.iter().map(|p| p.label()).collect();
        let sorted = {
            let mut s = labels.clone();
            s.sort_unstable();
            s
        };
        assert_eq!(labels, sorted);
        labels.dedup();
        assert_eq!(labels.len(), PropertyType::ALL.len());
        assert_eq!(PropertyType::Apartment.code(), 0);
        assert_eq!(PropertyType::Condominium.code(), 1);
        assert_eq!(PropertyType::TownhouseCondo.code(), 7);
    }

    #[test]
    fn labels_round_trip_through_codes() {
        for p in PropertyType::ALL {
            assert_eq!(PropertyType::from_code(p.code()), Some(p));
            assert_eq!(PropertyType::from_label(p.label()), Ok(p));
        }
        for f in FurnishedStatus::ALL {
            assert_eq!(FurnishedStatus::from_code(f.code()), Some(f));
            assert_eq!(FurnishedStatus::from_label(f.label()), Ok(f));
        }
        for r in Region::ALL {
            assert_eq!(Region::from_code(r.code()), Some(r));
            assert_eq!(Region::from_label(r.label()), Ok(r));
        }
    }

    #[test]
    fn unknown_labels_are_rejected() {
        assert_eq!(
            PropertyType::from_label("Castle"),
            Err(EncodeError::unknown_category("property_type", "Castle"))
        );
        assert_eq!(
            FurnishedStatus::from_label("fully furnished"),
            Err(EncodeError::unknown_category("furnished", "fully furnished"))
        );
        assert_eq!(
            Region::from_label("Penang"),
            Err(EncodeError::unknown_category("region", "Penang"))
        );
    }

    #[test]
    fn amenity_tokens_are_strict() {
        assert_eq!(parse_yes_no("gymnasium", "Yes"), Ok(true));
        assert_eq!(parse_yes_no("gymnasium", "No"), Ok(false));
        assert_eq!(
            parse_yes_no("gymnasium", "yes"),
            Err(EncodeError::invalid_boolean("gymnasium", "yes"))
        );
        assert_eq!(
            parse_yes_no("swimming_pool", "1"),
            Err(EncodeError::invalid_boolean("swimming_pool", "1"))
        );
    }

    #[test]
    fn from_labels_reports_first_bad_field() {
        let err = PropertyObservation::from_labels(
            "Condominium",
            3,
            900.0,
            "Fully Furnished",
            "Selangor",
            "Puchong",
            "Maybe",
            "No",
            "Yes",
            "No",
        )
        .unwrap_err();
        assert_eq!(err, EncodeError::invalid_boolean("gymnasium", "Maybe"));
    }
}
