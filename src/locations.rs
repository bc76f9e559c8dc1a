use crate::observation::Region;

/// Known KL & Selangor locations with the region each belongs to, taken
/// from the cleaned listings data. Used to enumerate form choices and to
/// prefill the region for a chosen location; the tier table remains the
/// authority on whether a location can be priced.
pub static LOCATION_REGIONS: &[(&str, Region)] = &[
    ("Cheras", Region::Selangor),
    ("Taman Desa", Region::KualaLumpur),
    ("Sentul", Region::KualaLumpur),
    ("Mont Kiara", Region::KualaLumpur),
    ("Setapak", Region::KualaLumpur),
    ("Ampang", Region::Selangor),
    ("Segambut", Region::KualaLumpur),
    ("Desa ParkCity", Region::KualaLumpur),
    ("Bukit Jalil", Region::KualaLumpur),
    ("Kepong", Region::KualaLumpur),
    ("Wangsa Maju", Region::KualaLumpur),
    ("Jalan Kuching", Region::KualaLumpur),
    ("Bandar Menjalara", Region::KualaLumpur),
    ("Old Klang Road", Region::KualaLumpur),
    ("Desa Pandan", Region::KualaLumpur),
    ("KLCC", Region::KualaLumpur),
    ("Ampang Hilir", Region::KualaLumpur),
    ("Bukit Bintang", Region::KualaLumpur),
    ("KL City", Region::KualaLumpur),
    ("Jalan Ipoh", Region::KualaLumpur),
    ("Setiawangsa", Region::KualaLumpur),
    ("Gombak", Region::Selangor),
    ("Sungai Besi", Region::KualaLumpur),
    ("Jinjang", Region::KualaLumpur),
    ("Sri Petaling", Region::KualaLumpur),
    ("Bangsar South", Region::KualaLumpur),
    ("Pantai", Region::KualaLumpur),
    ("Brickfields", Region::KualaLumpur),
    ("Kuchai Lama", Region::KualaLumpur),
    ("Jalan Sultan Ismail", Region::KualaLumpur),
    ("Bangsar", Region::KualaLumpur),
    ("Pandan Indah", Region::KualaLumpur),
    ("Pandan Jaya", Region::KualaLumpur),
    ("Damansara Heights", Region::KualaLumpur),
    ("Bandar Damai Perdana", Region::KualaLumpur),
    ("Titiwangsa", Region::KualaLumpur),
    ("Bandar Tasik Selatan", Region::KualaLumpur),
    ("Pandan Perdana", Region::KualaLumpur),
    ("Keramat", Region::KualaLumpur),
    ("Pudu", Region::KualaLumpur),
    ("OUG", Region::KualaLumpur),
    ("Taman Tun Dr Ismail", Region::KualaLumpur),
    ("Sri Hartamas", Region::KualaLumpur),
    ("Solaris Dutamas", Region::KualaLumpur),
    ("Puchong", Region::Selangor),
    ("Seputeh", Region::KualaLumpur),
    ("Sri Damansara", Region::KualaLumpur),
    ("Taman Melawati", Region::KualaLumpur),
    ("Desa Petaling", Region::KualaLumpur),
    ("Others", Region::KualaLumpur),
    ("Serdang", Region::Selangor),
    ("City Centre", Region::KualaLumpur),
    ("Salak Selatan", Region::KualaLumpur),
    ("Sungai Penchala", Region::KualaLumpur),
    ("Mid Valley City", Region::KualaLumpur),
    ("Damansara", Region::KualaLumpur),
    ("Cyberjaya", Region::Selangor),
    ("Shah Alam", Region::Selangor),
    ("Klang", Region::Selangor),
    ("Petaling Jaya", Region::Selangor),
    ("Subang Jaya", Region::Selangor),
    ("Bandar Sunway", Region::Selangor),
    ("Seri Kembangan", Region::Selangor),
    ("Kajang", Region::Selangor),
    ("Rawang", Region::Selangor),
    ("Kota Damansara", Region::Selangor),
    ("Batu Caves", Region::Selangor),
    ("Semenyih", Region::Selangor),
    ("Bukit Jelutong", Region::Selangor),
    ("USJ", Region::Selangor),
    ("Damansara Damai", Region::Selangor),
    ("Bandar Mahkota Cheras", Region::Selangor),
    ("Puncak Alam", Region::Selangor),
    ("Sepang", Region::Selangor),
    ("Kuala Langat", Region::Selangor),
    ("Setia Alam", Region::Selangor),
    ("Selayang", Region::Selangor),
    ("Sungai Buloh", Region::Selangor),
    ("Bangi", Region::Selangor),
    ("Dengkil", Region::Selangor),
    ("Ara Damansara", Region::Selangor),
    ("I-City", Region::Selangor),
    ("Bandar Sri Damansara", Region::Selangor),
    ("Damansara Perdana", Region::Selangor),
    ("Bandar Saujana Putra", Region::Selangor),
    ("Kota Kemuning", Region::Selangor),
    ("Ulu Klang", Region::Selangor),
    ("Kapar", Region::Selangor),
    ("Balakong", Region::Selangor),
    ("Bandar Sungai Long", Region::Selangor),
    ("Port Klang", Region::Selangor),
    ("Hulu Langat", Region::Selangor),
    ("Bandar Kinrara", Region::Selangor),
    ("Jenjarom", Region::Selangor),
    ("Glenmarie", Region::Selangor),
    ("Kelana Jaya", Region::Selangor),
    ("Puchong South", Region::Selangor),
    ("Alam Impian", Region::Selangor),
    ("Pulau Indah (Pulau Lumut)", Region::Selangor),
    ("Bandar Bukit Tinggi", Region::Selangor),
    ("Putra Heights", Region::Selangor),
    ("Saujana Utama", Region::Selangor),
    ("Bandar Bukit Raja", Region::Selangor),
    ("Bandar Utama", Region::Selangor),
    ("Subang Bestari", Region::Selangor),
    ("Bandar Botanic", Region::Selangor),
    ("Banting", Region::Selangor),
    ("Kuala Selangor", Region::Selangor),
    ("Salak Tinggi", Region::Selangor),
    ("Serendah", Region::Selangor),
    ("Bukit Beruntung", Region::Selangor),
    ("Mutiara Damansara", Region::Selangor),
    ("Telok Panglima Garang", Region::Selangor),
    ("Bukit Subang", Region::Selangor),
    ("Puncak Jalil", Region::Selangor),
];

/// Region a known location belongs to, if it is in the reference list.
pub fn region_of(location: &str) -> Option<Region> {
    LOCATION_REGIONS
        .iter()
        .find(|(name, _)| *name == location)
        .map(|(_, region)| *region)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_list_has_no_duplicates() {
        let mut names: Vec<&str> = LOCATION_REGIONS.iter().map(|(n, _)| *n).collect();
        names.sort_unstable();
        let before = names.len();
        names.dedup();
        assert_eq!(names.len(), before);
    }

    #[test]
    fn known_locations_resolve() {
        assert_eq!(region_of("Puchong"), Some(Region::Selangor));
        assert_eq!(region_of("KLCC"), Some(Region::KualaLumpur));
        assert_eq!(region_of("Nowhereville"), None);
    }
}
