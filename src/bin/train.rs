use clap::Parser;
use smartcore::metrics::{mean_absolute_error, mean_squared_error};
use tracing::info;
use tracing_subscriber::EnvFilter;

use rental_price_predictor::{data, LocationTierTable, RentModel};

// Training script and entry point
// Steps
// 1. Load the cleaned listings CSV
// 2. Derive the location tier table from per-location mean rents
// 3. Encode every row through the serving encoder
// 4. Train the random forest and evaluate on a held-out split
// 5. Write the model and tier-table artifacts

#[derive(Parser)]
#[command(about = "Train the rental price model")]
struct Args {
    #[arg(long, default_value = "cleaned_data.csv")]
    data: String,
    #[arg(long, default_value = "rf_model.bin")]
    model_out: String,
    #[arg(long, default_value = "location_tiers.json")]
    tables_out: String,
    #[arg(long, default_value_t = 0.2)]
    test_size: f64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let args = Args::parse();

    let df = data::load_csv(&args.data)?;

    let mean_rents = data::mean_rent_by_location(&df)?;
    let tiers = LocationTierTable::from_mean_rents(mean_rents)?;
    info!(locations = tiers.len(), "derived location tiers");

    let (xs, ys) = data::encode_dataset(&df, &tiers)?;
    let ((x_train, y_train), (x_test, y_test)) = data::train_test_split(xs, ys, args.test_size);
    info!(train = y_train.len(), test = y_test.len(), "split dataset");

    let model = RentModel::train(&x_train, &y_train)?;

    if !y_test.is_empty() {
        let predicted = model.predict_batch(&x_test)?;
        let rmse = mean_squared_error(&y_test, &predicted).sqrt();
        let mae = mean_absolute_error(&y_test, &predicted);
        info!(rmse, mae, "evaluated on held-out split");
    }

    model.save(&args.model_out)?;
    tiers.save(&args.tables_out)?;
    info!(
        model = %args.model_out,
        tables = %args.tables_out,
        "artifacts written"
    );
    Ok(())
}
