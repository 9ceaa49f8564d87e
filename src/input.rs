//! Resolution of raw inputs into [`TripParameters`].
//!
//! Two strategies share the calculator downstream:
//! * [`resolve_flags`] is strict: missing or malformed values are a [`Error::Usage`].
//! * [`Prompter`] is lenient: text that cannot be coerced is replaced by a default.
use std::io::{BufRead, Write};

use crate::{Error, LodgingTier, Result, TransportMode, TripParameters};

/// Tokens accepted as "yes" (case-insensitive). Anything else is "no".
pub const YES_TOKENS: [&str; 7] = ["s", "sim", "y", "yes", "1", "true", "t"];

/// Parameters as given on the command line
#[derive(Debug, Clone, PartialEq)]
pub struct Flags {
    pub distance_km: Option<f64>,
    pub mode: Option<String>,
    pub passengers: i64,
    pub round_trip: bool,
    pub nights: i64,
    pub hotel: Option<String>,
}

impl Default for Flags {
    fn default() -> Self {
        Self {
            distance_km: None,
            mode: None,
            passengers: 1,
            round_trip: false,
            nights: 0,
            hotel: None,
        }
    }
}

impl Flags {
    /// Whether all required parameters (distance and mode) are present
    pub fn is_complete(&self) -> bool {
        self.distance_km.is_some() && self.mode.is_some()
    }
}

/// Parses a decimal number, accepting `,` as decimal separator
pub fn parse_number(text: &str) -> Option<f64> {
    text.trim()
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// Parses an integer. Decimal input is truncated towards zero.
pub fn parse_integer(text: &str) -> Option<i64> {
    let text = text.trim();
    text.parse::<i64>()
        .ok()
        .or_else(|| parse_number(text).map(|v| v.trunc() as i64))
}

/// Parses a yes/no answer; see [`YES_TOKENS`]
pub fn parse_yes_no(text: &str) -> bool {
    let text = text.trim();
    YES_TOKENS.iter().any(|t| t.eq_ignore_ascii_case(text))
}

fn clamp_passengers(passengers: i64) -> u32 {
    passengers.clamp(1, u32::MAX as i64) as u32
}

fn clamp_nights(nights: i64) -> u32 {
    nights.clamp(0, u32::MAX as i64) as u32
}

fn normalize_key(key: &str) -> String {
    key.trim().to_lowercase()
}

fn normalize_hotel(hotel: Option<&str>) -> Option<String> {
    hotel.map(normalize_key).filter(|h| !h.is_empty())
}

/// Resolves [`TripParameters`] from command-line flags.
/// # Error
/// Errors with [`Error::Usage`] when distance or mode is missing, or when the distance
/// is negative.
pub fn resolve_flags(flags: &Flags) -> Result<TripParameters> {
    let missing = [
        flags.distance_km.is_none().then_some("--distance"),
        flags.mode.is_none().then_some("--mode"),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>();
    if !missing.is_empty() {
        return Err(Error::Usage(format!(
            "missing required argument(s): {}",
            missing.join(", ")
        )));
    }

    let distance_km = flags.distance_km.unwrap_or_default();
    if !distance_km.is_finite() || distance_km < 0.0 {
        return Err(Error::Usage(format!(
            "distance must be a non-negative number of km, got {distance_km}"
        )));
    }

    Ok(TripParameters {
        distance_km,
        mode: flags.mode.as_deref().map(normalize_key).unwrap_or_default(),
        passengers: clamp_passengers(flags.passengers),
        round_trip: flags.round_trip,
        nights: clamp_nights(flags.nights),
        hotel: normalize_hotel(flags.hotel.as_deref()),
    })
}

/// Asks for each parameter of a trip on `writer`, reading answers from `reader`.
pub struct Prompter<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Writes `question` and returns the trimmed answer. End of input is an empty answer.
    fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.writer, "{question}")?;
        self.writer.flush()?;
        let mut line = String::new();
        self.reader.read_line(&mut line)?;
        Ok(line.trim().to_string())
    }

    fn ask_number(&mut self, question: &str, default: f64) -> Result<f64> {
        let answer = self.ask(question)?;
        Ok(parse_number(&answer).unwrap_or_else(|| {
            log::warn!("`{answer}` is not a number; using {default}");
            default
        }))
    }

    fn ask_integer(&mut self, question: &str, default: i64) -> Result<i64> {
        let answer = self.ask(question)?;
        Ok(parse_integer(&answer).unwrap_or_else(|| {
            log::warn!("`{answer}` is not an integer; using {default}");
            default
        }))
    }

    /// Resolves [`TripParameters`] by prompting for each of them.
    /// Answers that cannot be coerced fall back to 0 km, 1 passenger and 0 nights.
    /// # Error
    /// Errors only when reading or writing fails
    pub fn resolve_interactive(&mut self) -> Result<TripParameters> {
        writeln!(self.writer, "Trip CO2 emissions calculator")?;

        let distance_km = self.ask_number("One-way distance (km): ", 0.0)?;
        let distance_km = if distance_km < 0.0 {
            log::warn!("negative distance {distance_km}; using 0");
            0.0
        } else {
            distance_km
        };

        writeln!(self.writer, "Transport modes:")?;
        for mode in TransportMode::ALL {
            writeln!(
                self.writer,
                "  {:<12} {} ({} kg CO2/passenger-km)",
                mode.key(),
                mode.description(),
                mode.factor()
            )?;
        }
        let mode = normalize_key(&self.ask("Transport mode: ")?);

        let passengers = self.ask_integer("Passengers [1]: ", 1)?;
        let round_trip = parse_yes_no(&self.ask("Round trip? (y/n) [n]: ")?);
        let nights = clamp_nights(self.ask_integer("Nights of lodging [0]: ", 0)?);

        let hotel = if nights > 0 {
            writeln!(self.writer, "Lodging types:")?;
            for tier in LodgingTier::ALL {
                writeln!(
                    self.writer,
                    "  {:<12} {} ({} kg CO2/night)",
                    tier.key(),
                    tier.description(),
                    tier.factor()
                )?;
            }
            normalize_hotel(Some(&self.ask("Lodging type (empty for none): ")?))
        } else {
            None
        };

        Ok(TripParameters {
            distance_km,
            mode,
            passengers: clamp_passengers(passengers),
            round_trip,
            nights,
            hotel,
        })
    }
}
