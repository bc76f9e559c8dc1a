use std::net::SocketAddr;

use anyhow::anyhow;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{extract, Json, Router};
use clap::Parser;
use once_cell::sync::OnceCell;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use rental_price_predictor::{
    encode, locations::region_of, EncodeError, LocationTierTable, PropertyObservation, RentModel,
};

static MODEL: OnceCell<RentModel> = OnceCell::new();
static TIERS: OnceCell<LocationTierTable> = OnceCell::new();

#[derive(Parser)]
#[command(about = "Serve rental price predictions over HTTP")]
struct Args {
    /// Serialized random-forest model produced by the train binary.
    #[arg(long, default_value = "rf_model.bin")]
    model: String,
    /// Location tier table produced by the train binary.
    #[arg(long, default_value = "location_tiers.json")]
    tables: String,
    #[arg(long, default_value_t = 3000)]
    port: u16,
}

/// Raw form fields as the front end submits them. Categoricals and
/// amenities arrive as display strings and are validated on encode.
#[derive(Deserialize)]
struct PredictRequest {
    property_type: String,
    rooms: u8,
    size_sqft: f32,
    furnished: String,
    region: String,
    location: String,
    gymnasium: String,
    air_cond: String,
    washing_machine: String,
    swimming_pool: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let args = Args::parse();

    let model = RentModel::load(&args.model)?;
    let tiers = LocationTierTable::load(&args.tables)?;
    info!(locations = tiers.len(), "artifacts loaded");
    MODEL
        .set(model)
        .map_err(|_| anyhow!("model already initialized"))?;
    TIERS
        .set(tiers)
        .map_err(|_| anyhow!("tier table already initialized"))?;

    let app = Router::new()
        .route("/predict", post(predict))
        .route("/locations", get(locations));

    let addr = SocketAddr::from(([127, 0, 0, 1], args.port));
    info!(%addr, "listening");
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await?;
    Ok(())
}

enum PredictFailure {
    Encode(EncodeError),
    Internal(anyhow::Error),
}

fn run_prediction(req: &PredictRequest) -> Result<f32, PredictFailure> {
    let model = MODEL.get().expect("model is not initialized");
    let tiers = TIERS.get().expect("tier table is not initialized");

    let observation = PropertyObservation::from_labels(
        &req.property_type,
        req.rooms,
        req.size_sqft,
        &req.furnished,
        &req.region,
        &req.location,
        &req.gymnasium,
        &req.air_cond,
        &req.washing_machine,
        &req.swimming_pool,
    )
    .map_err(PredictFailure::Encode)?;
    let vector = encode(&observation, tiers).map_err(PredictFailure::Encode)?;
    let rent = model.predict(&vector).map_err(PredictFailure::Internal)?;
    Ok((rent * 100.0).round() / 100.0)
}

async fn predict(extract::Json(req): extract::Json<PredictRequest>) -> (StatusCode, Json<Value>) {
    match run_prediction(&req) {
        Ok(rent) => (StatusCode::OK, Json(json!({ "monthly_rent": rent }))),
        Err(PredictFailure::Encode(err)) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "error": err.to_string() })),
        ),
        Err(PredictFailure::Internal(err)) => {
            error!(error = %err, "prediction failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "prediction failed" })),
            )
        }
    }
}

/// Locations the loaded tier table can price, with their regions. The form
/// layer uses this to populate its dropdown.
async fn locations() -> Json<Value> {
    let tiers = TIERS.get().expect("tier table is not initialized");
    let list: Vec<Value> = tiers
        .locations()
        .map(|location| {
            json!({
                "location": location,
                "region": region_of(location).map(|r| r.label()),
            })
        })
        .collect();
    Json(json!({ "locations": list }))
}
