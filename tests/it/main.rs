use trip_emissions::{
    compute, compute_lodging_emissions, compute_transport_emissions, format_structured,
    format_text, input, Error, StructuredReport, TransportMode, TripParameters,
};

fn abs_difference<T: std::ops::Sub<Output = T> + PartialOrd>(x: T, y: T) -> T {
    if x < y {
        y - x
    } else {
        x - y
    }
}

fn long_haul_trip() -> TripParameters {
    TripParameters {
        distance_km: 1000.0,
        mode: "aviao_longa".to_string(),
        passengers: 2,
        round_trip: true,
        nights: 3,
        hotel: Some("hotel_padrao".to_string()),
    }
}

/// Round trip long-haul flight for 2 with 3 nights in a standard hotel
#[test]
fn acceptance_long_haul_with_hotel() {
    let accepted_error = 1e-9;
    let result = compute(&long_haul_trip()).unwrap();

    assert!(abs_difference(result.transport_kg, 390.0) < accepted_error);
    assert!(abs_difference(result.transport_per_person_kg, 195.0) < accepted_error);
    assert!(abs_difference(result.lodging_kg, 45.0) < accepted_error);
    assert!(abs_difference(result.total_kg, 435.0) < accepted_error);
    assert!(abs_difference(result.total_per_person_kg, 217.5) < accepted_error);
}

#[test]
fn acceptance_nothing_travelled() {
    let params = TripParameters {
        distance_km: 0.0,
        mode: "carro".to_string(),
        passengers: 1,
        round_trip: false,
        nights: 0,
        hotel: None,
    };
    let result = compute(&params).unwrap();
    assert_eq!(result.total_kg, 0.0);
    assert_eq!(result.total_per_person_kg, 0.0);

    let text = format_text(&params, &result).unwrap();
    assert!(text.contains("Transport (total):       0.00 kg CO2"));
    assert!(text.contains("Transport (per person):  0.00 kg CO2"));
    assert!(text.contains("TOTAL:                     0.00 kg CO2"));
    assert!(text.contains("Per person:                0.00 kg CO2"));
}

#[test]
fn per_person_times_passengers_is_total() {
    for mode in TransportMode::ALL {
        for passengers in 1..=12 {
            let (total, per_person) =
                compute_transport_emissions(987.6, mode.key(), passengers, true).unwrap();
            assert!(abs_difference(per_person * passengers as f64, total) < 1e-9);
        }
    }
}

#[test]
fn no_nights_accepts_any_tier() {
    for tier in [None, Some("hostel"), Some("foguete"), Some("")] {
        assert_eq!(compute_lodging_emissions(0, tier).unwrap(), 0.0);
    }
    for nights in [0, 1, 10, 365] {
        assert_eq!(compute_lodging_emissions(nights, None).unwrap(), 0.0);
    }
}

#[test]
fn unknown_mode_lists_valid_modes() {
    let mut params = long_haul_trip();
    params.mode = "foguete".to_string();
    let error = compute(&params).unwrap_err();
    assert!(matches!(error, Error::UnknownMode { .. }));
    assert_eq!(
        error.to_string(),
        "unknown transport mode `foguete`; valid modes are: carro, onibus, trem, aviao_curta, aviao_longa"
    );
}

#[test]
fn unknown_lodging_with_nights() {
    let mut params = long_haul_trip();
    params.hotel = Some("castelo".to_string());
    let error = compute(&params).unwrap_err();
    assert_eq!(
        error.to_string(),
        "unknown lodging type `castelo`; valid types are: hostel, hotel_padrao, hotel_luxo"
    );
}

/// Deserializing the JSON report reproduces the directly computed figures
#[test]
fn structured_report_roundtrip() {
    let params = TripParameters {
        distance_km: 432.1098,
        mode: "onibus".to_string(),
        passengers: 3,
        round_trip: true,
        nights: 2,
        hotel: Some("hostel".to_string()),
    };
    let result = compute(&params).unwrap();
    let json = format_structured(&params, &result).to_json().unwrap();
    let report = StructuredReport::from_json(&json).unwrap();

    assert!(abs_difference(report.distance_km, params.distance_km) <= 0.001);
    for (reported, computed) in [
        (report.transport_kg, result.transport_kg),
        (report.transport_per_person_kg, result.transport_per_person_kg),
        (report.lodging_kg, result.lodging_kg),
        (report.total_kg, result.total_kg),
        (report.total_per_person_kg, result.total_per_person_kg),
    ] {
        assert!(abs_difference(reported, computed) <= 0.0001);
    }
    assert_eq!(report.transport_mode, "onibus");
    assert_eq!(report.lodging_type.as_deref(), Some("hostel"));
    assert_eq!(report.nights, 2);
    assert!(report.round_trip);
}

#[test]
fn non_interactive_without_required_is_usage_error() {
    let flags = input::Flags {
        mode: Some("carro".to_string()),
        ..Default::default()
    };
    let error = input::resolve_flags(&flags).unwrap_err();
    assert!(error.is_usage());
}

#[test]
fn flags_and_prompts_agree() {
    let flags = input::Flags {
        distance_km: Some(1000.0),
        mode: Some("aviao_longa".to_string()),
        passengers: 2,
        round_trip: true,
        nights: 3,
        hotel: Some("hotel_padrao".to_string()),
    };
    let from_flags = input::resolve_flags(&flags).unwrap();

    let mut prompts = Vec::new();
    let answers = "1000\naviao_longa\n2\ny\n3\nhotel_padrao\n";
    let from_prompts = input::Prompter::new(answers.as_bytes(), &mut prompts)
        .resolve_interactive()
        .unwrap();

    assert_eq!(from_flags, from_prompts);
    assert_eq!(from_flags, long_haul_trip());
}
