use serde::{Deserialize, Serialize};

use crate::{LodgingTier, Result, TransportMode};

/// The parameters of a single trip
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TripParameters {
    /// one-way distance in km
    pub distance_km: f64,
    /// the transport mode key (e.g. `carro`)
    pub mode: String,
    /// number of passengers sharing the transport; at least 1
    pub passengers: u32,
    pub round_trip: bool,
    pub nights: u32,
    /// the lodging tier key (e.g. `hostel`); `None` means no lodging
    pub hotel: Option<String>,
}

/// Emissions of a trip, in kg of CO2
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct EmissionResult {
    pub transport_kg: f64,
    pub transport_per_person_kg: f64,
    pub lodging_kg: f64,
    pub total_kg: f64,
    pub total_per_person_kg: f64,
}

/// Returns the transport emissions `(total, per person)` in kg of CO2 of travelling `distance_km`
/// with `mode`, twice when `round_trip`.
/// The total is independent of the number of passengers; the per-person share divides it
/// by `max(1, passengers)`.
/// # Error
/// Errors with [`crate::Error::UnknownMode`] when `mode` is not a known key
pub fn compute_transport_emissions(
    distance_km: f64,
    mode: &str,
    passengers: i64,
    round_trip: bool,
) -> Result<(f64, f64)> {
    let factor = mode.parse::<TransportMode>()?.factor();
    let multiplier = if round_trip { 2.0 } else { 1.0 };

    let total = distance_km * factor * multiplier;
    Ok((total, total / passengers.max(1) as f64))
}

/// Returns the lodging emissions in kg of CO2 of staying `nights` in `tier`.
///
/// No lodging (an absent or empty tier, or no nights) is zero emissions and returns
/// before the tier is looked up, so an unknown tier is accepted when `nights <= 0`.
/// # Error
/// Errors with [`crate::Error::UnknownLodging`] when `tier` is not a known key
pub fn compute_lodging_emissions(nights: i64, tier: Option<&str>) -> Result<f64> {
    let tier = match tier {
        Some(tier) if !tier.trim().is_empty() && nights > 0 => tier,
        _ => return Ok(0.0),
    };
    let factor = tier.parse::<LodgingTier>()?.factor();
    Ok(nights as f64 * factor)
}

/// Computes all emissions of a trip
pub fn compute(params: &TripParameters) -> Result<EmissionResult> {
    let (transport_kg, transport_per_person_kg) = compute_transport_emissions(
        params.distance_km,
        &params.mode,
        params.passengers.into(),
        params.round_trip,
    )?;
    let lodging_kg = compute_lodging_emissions(params.nights.into(), params.hotel.as_deref())?;

    let total_kg = transport_kg + lodging_kg;
    Ok(EmissionResult {
        transport_kg,
        transport_per_person_kg,
        lodging_kg,
        total_kg,
        total_per_person_kg: total_kg / params.passengers.max(1) as f64,
    })
}
