use std::collections::BTreeMap;

use anyhow::Context;
use polars::prelude::*;
use rand::{seq::SliceRandom, thread_rng};
use tracing::info;

use crate::encoder::encode;
use crate::observation::PropertyObservation;
use crate::tiers::LocationTierTable;

/// Load the cleaned listings CSV.
pub fn load_csv(file_path: &str) -> anyhow::Result<DataFrame> {
    let df = CsvReader::from_path(file_path)?.has_header(true).finish()?;
    info!(rows = df.height(), columns = df.width(), "loaded dataset");
    Ok(df)
}

fn get_str<'a>(column: &'a Utf8Chunked, i: usize, name: &str) -> anyhow::Result<&'a str> {
    column
        .get(i)
        .with_context(|| format!("row {i}: null in column {name:?}"))
}

fn f64_column(df: &DataFrame, name: &str) -> anyhow::Result<Vec<f64>> {
    let series = df.column(name)?.cast(&DataType::Float64)?;
    series
        .f64()?
        .into_iter()
        .enumerate()
        .map(|(i, value)| value.with_context(|| format!("row {i}: null in column {name:?}")))
        .collect()
}

/// Mean historical rent per location, the input to tier derivation.
pub fn mean_rent_by_location(df: &DataFrame) -> anyhow::Result<BTreeMap<String, f64>> {
    let locations = df.column("location")?.utf8()?;
    let rents = f64_column(df, "monthly_rent")?;

    let mut sums: BTreeMap<String, (f64, u32)> = BTreeMap::new();
    for i in 0..df.height() {
        let location = get_str(locations, i, "location")?;
        let entry = sums.entry(location.to_string()).or_insert((0.0, 0));
        entry.0 += rents[i];
        entry.1 += 1;
    }
    Ok(sums
        .into_iter()
        .map(|(location, (sum, count))| (location, sum / f64::from(count)))
        .collect())
}

/// Encode every row of the dataset through the same encoder the server
/// uses, so training and serving cannot drift apart. Returns the feature
/// matrix and the rent targets.
pub fn encode_dataset(
    df: &DataFrame,
    tiers: &LocationTierTable,
) -> anyhow::Result<(Vec<Vec<f32>>, Vec<f32>)> {
    let property_type = df.column("property_type")?.utf8()?;
    let furnished = df.column("furnished")?.utf8()?;
    let region = df.column("region")?.utf8()?;
    let location = df.column("location")?.utf8()?;
    let gymnasium = df.column("gymnasium")?.utf8()?;
    let air_cond = df.column("air_cond")?.utf8()?;
    let washing_machine = df.column("washing_machine")?.utf8()?;
    let swimming_pool = df.column("swimming_pool")?.utf8()?;
    let rooms = f64_column(df, "rooms")?;
    let size_sqft = f64_column(df, "size_sqft")?;
    let monthly_rent = f64_column(df, "monthly_rent")?;

    let mut xs = Vec::with_capacity(df.height());
    let mut ys = Vec::with_capacity(df.height());
    for i in 0..df.height() {
        let observation = PropertyObservation::from_labels(
            get_str(property_type, i, "property_type")?,
            rooms[i] as u8,
            size_sqft[i] as f32,
            get_str(furnished, i, "furnished")?,
            get_str(region, i, "region")?,
            get_str(location, i, "location")?,
            get_str(gymnasium, i, "gymnasium")?,
            get_str(air_cond, i, "air_cond")?,
            get_str(washing_machine, i, "washing_machine")?,
            get_str(swimming_pool, i, "swimming_pool")?,
        )
        .with_context(|| format!("row {i} failed to encode"))?;
        let vector = encode(&observation, tiers)?;
        xs.push(vector.as_slice().to_vec());
        ys.push(monthly_rent[i] as f32);
    }
    Ok((xs, ys))
}

/// Shuffle and split the encoded matrix into training and test portions.
#[allow(clippy::type_complexity)]
pub fn train_test_split(
    xs: Vec<Vec<f32>>,
    ys: Vec<f32>,
    test_size: f64,
) -> ((Vec<Vec<f32>>, Vec<f32>), (Vec<Vec<f32>>, Vec<f32>)) {
    let mut indices: Vec<usize> = (0..ys.len()).collect();
    let mut rng = thread_rng();
    indices.shuffle(&mut rng);

    let n_test = ((ys.len() as f64 * test_size) as usize).min(ys.len().saturating_sub(1));
    let (test_indices, train_indices) = indices.split_at(n_test);

    let take = |idx: &[usize]| -> (Vec<Vec<f32>>, Vec<f32>) {
        (
            idx.iter().map(|&i| xs[i].clone()).collect(),
            idx.iter().map(|&i| ys[i]).collect(),
        )
    };
    (take(train_indices), take(test_indices))
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::df;

    fn sample_frame() -> DataFrame {
        df!(
            "property_type" => &["Condominium", "Apartment", "Condominium", "Studio"],
            "rooms" => &[3i64, 2, 3, 1],
            "size_sqft" => &[900.0, 650.0, 1000.0, 450.0],
            "furnished" => &["Fully Furnished", "Not Furnished", "Partially Furnished", "Fully Furnished"],
            "region" => &["Selangor", "Selangor", "Kuala Lumpur", "Kuala Lumpur"],
            "location" => &["Puchong", "Puchong", "KLCC", "KLCC"],
            "gymnasium" => &["Yes", "No", "Yes", "No"],
            "air_cond" => &["No", "Yes", "Yes", "Yes"],
            "washing_machine" => &["Yes", "No", "Yes", "No"],
            "swimming_pool" => &["No", "No", "Yes", "No"],
            "monthly_rent" => &[1200.0, 1000.0, 3400.0, 3000.0],
        )
        .unwrap()
    }

    #[test]
    fn mean_rents_average_per_location() {
        let means = mean_rent_by_location(&sample_frame()).unwrap();
        assert_eq!(means.len(), 2);
        assert_eq!(means["Puchong"], 1100.0);
        assert_eq!(means["KLCC"], 3200.0);
    }

    #[test]
    fn dataset_encodes_row_by_row() {
        let df = sample_frame();
        let means = mean_rent_by_location(&df).unwrap();
        let tiers = LocationTierTable::from_mean_rents(means).unwrap();
        let (xs, ys) = encode_dataset(&df, &tiers).unwrap();

        assert_eq!(xs.len(), 4);
        assert_eq!(ys, vec![1200.0, 1000.0, 3400.0, 3000.0]);
        // First row: Condominium=1, 3 rooms, 900 sqft, fully furnished,
        // Selangor, amenities, Puchong's tier.
        assert_eq!(xs[0][0], 1.0);
        assert_eq!(xs[0][1], 3.0);
        assert_eq!(xs[0][2], 900.0);
        assert_eq!(xs[0][3], 2.0);
        assert_eq!(xs[0][4], 1.0);
        assert_eq!(xs[0][9], tiers.tier("Puchong").unwrap() as f32);
    }

    #[test]
    fn bad_rows_fail_instead_of_encoding_partially() {
        let df = df!(
            "property_type" => &["Castle"],
            "rooms" => &[3i64],
            "size_sqft" => &[900.0],
            "furnished" => &["Fully Furnished"],
            "region" => &["Selangor"],
            "location" => &["Puchong"],
            "gymnasium" => &["Yes"],
            "air_cond" => &["No"],
            "washing_machine" => &["Yes"],
            "swimming_pool" => &["No"],
            "monthly_rent" => &[1200.0],
        )
        .unwrap();
        let means = BTreeMap::from([
            ("Puchong".to_string(), 1100.0),
            ("KLCC".to_string(), 3200.0),
        ]);
        let tiers = LocationTierTable::from_mean_rents(means).unwrap();
        assert!(encode_dataset(&df, &tiers).is_err());
    }

    #[test]
    fn split_partitions_every_row_exactly_once() {
        let xs: Vec<Vec<f32>> = (0..10).map(|i| vec![i as f32; 10]).collect();
        let ys: Vec<f32> = (0..10).map(|i| i as f32).collect();
        let ((x_train, y_train), (x_test, y_test)) = train_test_split(xs, ys, 0.2);

        assert_eq!(x_train.len(), 8);
        assert_eq!(x_test.len(), 2);
        assert_eq!(y_train.len(), 8);
        assert_eq!(y_test.len(), 2);

        let mut seen: Vec<f32> = y_train.iter().chain(y_test.iter()).copied().collect();
        seen.sort_by(f32::total_cmp);
        assert_eq!(seen, (0..10).map(|i| i as f32).collect::<Vec<_>>());
    }
}
