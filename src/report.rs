use serde::{Deserialize, Serialize};
use tinytemplate::TinyTemplate;

use crate::{EmissionResult, Result, TripParameters};

static TEMPLATE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/src/report_template.txt"
));
static TEMPLATE_NAME: &str = "report";

/// Decimal places of the distance in [`StructuredReport`]
pub const DISTANCE_DECIMALS: i32 = 3;
/// Decimal places of emission figures in [`StructuredReport`]
pub const EMISSIONS_DECIMALS: i32 = 4;

/// Values of the text report, already formatted
#[derive(Serialize)]
struct Context {
    distance_km: String,
    mode: String,
    round_trip: &'static str,
    passengers: u32,
    lodging: String,
    transport_kg: String,
    transport_per_person_kg: String,
    lodging_kg: String,
    total_kg: String,
    total_per_person_kg: String,
}

/// Returns the human-readable report of a trip and its emissions.
/// Distance is shown with 1 decimal place and emissions with 2.
pub fn format_text(params: &TripParameters, result: &EmissionResult) -> Result<String> {
    let lodging = match params.hotel.as_deref() {
        Some(hotel) if params.nights > 0 && !hotel.is_empty() => {
            format!("{} nights, {hotel}", params.nights)
        }
        _ => "none".to_string(),
    };

    let context = Context {
        distance_km: format!("{:.1}", params.distance_km),
        mode: params.mode.clone(),
        round_trip: if params.round_trip { "yes" } else { "no" },
        passengers: params.passengers,
        lodging,
        transport_kg: format!("{:.2}", result.transport_kg),
        transport_per_person_kg: format!("{:.2}", result.transport_per_person_kg),
        lodging_kg: format!("{:.2}", result.lodging_kg),
        total_kg: format!("{:.2}", result.total_kg),
        total_per_person_kg: format!("{:.2}", result.total_per_person_kg),
    };

    let mut tt = TinyTemplate::new();
    tt.set_default_formatter(&tinytemplate::format_unescaped);
    tt.add_template(TEMPLATE_NAME, TEMPLATE)?;

    Ok(tt.render(TEMPLATE_NAME, &context)?)
}

/// Machine-readable report of a trip and its emissions.
/// The lodging type and the lodging emissions are under distinct keys.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StructuredReport {
    pub distance_km: f64,
    pub transport_mode: String,
    pub passengers: u32,
    pub round_trip: bool,
    pub nights: u32,
    pub lodging_type: Option<String>,
    pub transport_kg: f64,
    pub transport_per_person_kg: f64,
    pub lodging_kg: f64,
    pub total_kg: f64,
    pub total_per_person_kg: f64,
}

impl StructuredReport {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(data: &str) -> Result<Self> {
        Ok(serde_json::from_str(data)?)
    }
}

/// Rounds `value` to `decimals` decimal places
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

/// Returns the structured report of a trip and its emissions, with the distance rounded to
/// [`DISTANCE_DECIMALS`] and emissions to [`EMISSIONS_DECIMALS`] decimal places.
pub fn format_structured(params: &TripParameters, result: &EmissionResult) -> StructuredReport {
    let kg = |v: f64| round_to(v, EMISSIONS_DECIMALS);
    StructuredReport {
        distance_km: round_to(params.distance_km, DISTANCE_DECIMALS),
        transport_mode: params.mode.clone(),
        passengers: params.passengers,
        round_trip: params.round_trip,
        nights: params.nights,
        lodging_type: params.hotel.clone().filter(|h| !h.is_empty()),
        transport_kg: kg(result.transport_kg),
        transport_per_person_kg: kg(result.transport_per_person_kg),
        lodging_kg: kg(result.lodging_kg),
        total_kg: kg(result.total_kg),
        total_per_person_kg: kg(result.total_per_person_kg),
    }
}
