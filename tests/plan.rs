use hohmann_calculator::export::{json, report};
use hohmann_calculator::physics::time::seconds_to_days;
use hohmann_calculator::transfer::{TransferError, plan_transfer};
use hohmann_calculator::config::ConfigError;
use hohmann_calculator::{Catalog, OrbitalBody, TransferCalculator};

#[test]
fn earth_mars_plan_is_consistent() {
    let catalog = Catalog::builtin();
    let plan = plan_transfer(&catalog, "earth", "MARS").expect("plan");
    let calc = TransferCalculator::default();

    assert_eq!(plan.origin.name, "Earth");
    assert_eq!(plan.target.name, "Mars");
    assert_eq!(
        Some(plan.departure_delta_v_m_s),
        calc.delta_v_m_s(&plan.origin, &plan.target)
    );
    assert_eq!(plan.primary.name, "Sun");
    assert!((plan.time_of_flight_s * 2.0 - plan.transfer_period_s).abs() < 1e-6);
    assert!(plan.origin_period_s < plan.transfer_period_s);
    assert!(plan.transfer_period_s < plan.target_period_s);

    let tof_days = seconds_to_days(plan.time_of_flight_s);
    assert!((240.0..=300.0).contains(&tof_days), "tof_days = {tof_days}");

    let estimate = plan.estimate.expect("two-burn estimate");
    assert!(estimate.dv1_m_s > 0.0 && estimate.dv2_m_s > 0.0);
    assert!((estimate.dv_total_m_s - 5_600.0).abs() < 700.0);
}

#[test]
fn unknown_body_is_reported() {
    let err = plan_transfer(&Catalog::builtin(), "Earth", "Pluto").unwrap_err();
    assert!(matches!(err, TransferError::UnknownBody(ref name) if name == "Pluto"));
    assert_eq!(err.to_string(), "body 'Pluto' not found in catalog");
}

#[test]
fn same_body_transfer_is_rejected() {
    let err = plan_transfer(&Catalog::builtin(), "mars", "Mars").unwrap_err();
    assert!(matches!(err, TransferError::SameBody(ref name) if name == "Mars"));
}

#[test]
fn report_and_json_describe_the_same_plan() {
    let plan = plan_transfer(&Catalog::builtin(), "Earth", "Mars").expect("plan");
    let text = report::render(&plan.record());
    assert!(text.starts_with("origin: Earth\ntarget: Mars\n"));
    assert!(text.contains(&format!("Δv: {} m/s", plan.departure_delta_v_m_s)));
    assert!(text.contains("primary: Sun\n"));
    assert!(text.contains("Hohmann est.:"));

    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("out").join("plan.json");
    json::write_plan(&path, &plan.record()).expect("write json");

    let contents = std::fs::read_to_string(&path).expect("read json");
    let value: serde_json::Value = serde_json::from_str(&contents).expect("parse json");
    assert_eq!(value["origin"], "Earth");
    assert_eq!(value["primary"], "Sun");
    assert_eq!(value["departure_delta_v_m_s"], plan.departure_delta_v_m_s);
    let names: Vec<_> = value["bodies"]
        .as_array()
        .expect("bodies array")
        .iter()
        .map(|b| b["name"].as_str().unwrap_or_default().to_string())
        .collect();
    assert_eq!(names, ["Earth", "Mars", "transfer"]);
    assert_eq!(value["bodies"][2]["display_color"], "gray");
}

#[test]
fn catalog_refuses_bodies_that_cannot_be_planned() {
    let earth = Catalog::builtin().get("Earth").cloned().expect("earth");
    let bad = OrbitalBody::new("Bad", -1.0, 0.5, 0.1, 0.0, 0.0, 0.0, "white");
    let err = Catalog::from_bodies([earth, bad]).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidBody { ref name, .. } if name == "Bad"));
}

#[test]
fn planning_unvalidated_bodies_fails_instead_of_reporting_zero() {
    let earth = Catalog::builtin().get("Earth").cloned().expect("earth");
    let bad = OrbitalBody::new("Bad", -1.0, 0.5, 0.1, 0.0, 0.0, 0.0, "white");
    let err = TransferCalculator::default().plan(&bad, &earth).unwrap_err();
    assert!(matches!(
        err,
        TransferError::NonFinite { ref origin, ref target } if origin == "Bad" && target == "Earth"
    ));
}
