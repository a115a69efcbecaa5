use hohmann_calculator::impulsive::{
    calculate_delta_v, calculate_period, derive_transfer_orbit, transfer_geometry,
};
use hohmann_calculator::physics::constants::STANDARD_GRAVITY_PARAMETER as MU;
use hohmann_calculator::{Catalog, OrbitalBody};

fn earth() -> OrbitalBody {
    Catalog::builtin().get("Earth").cloned().expect("earth")
}

fn mars() -> OrbitalBody {
    Catalog::builtin().get("Mars").cloned().expect("mars")
}

fn body(a: f64, e: f64) -> OrbitalBody {
    OrbitalBody::new("test", a, a * (1.0 - e), e, 0.0, 0.0, 0.0, "white")
}

#[test]
fn identical_orbits_give_circular_transfer() {
    let transfer = derive_transfer_orbit(&earth(), &earth());
    assert_eq!(transfer.eccentricity, 0.0);

    let a = body(2.7, 0.3);
    let b = OrbitalBody {
        name: "twin".into(),
        ..a.clone()
    };
    assert_eq!(derive_transfer_orbit(&a, &b).eccentricity, 0.0);
}

#[test]
fn transfer_orbit_has_zeroed_orientation() {
    let transfer = derive_transfer_orbit(&earth(), &mars());
    assert_eq!(transfer.name, "transfer");
    assert_eq!(transfer.display_color, "gray");
    assert_eq!(transfer.inclination, 0.0);
    assert_eq!(transfer.longitude_of_ascending_node_deg, 0.0);
    assert_eq!(transfer.argument_of_perihelion_deg, 0.0);

    let (re, rm) = (earth().mean_radius_au(), mars().mean_radius_au());
    assert!((transfer.semi_major_axis_au - (re + rm) / 2.0).abs() < 1e-15);
    assert!((transfer.eccentricity - (rm - re) / (rm + re)).abs() < 1e-15);
    assert_eq!(transfer.perihelion_au, re);
}

#[test]
fn inward_transfer_perihelion_field_is_origin_radius() {
    let transfer = derive_transfer_orbit(&mars(), &earth());
    let geometry = transfer_geometry(&mars(), &earth());
    assert_eq!(transfer.perihelion_au, mars().mean_radius_au());
    assert_eq!(geometry.perihelion_au, earth().mean_radius_au());
    assert!(transfer.perihelion_au > geometry.perihelion_au);
}

#[test]
fn transfer_eccentricity_stays_elliptical() {
    let axes = [0.3, 0.72, 1.0, 1.52, 5.2, 30.1];
    let eccentricities = [0.0, 0.0167, 0.2, 0.5, 0.9, 0.999];
    for &a1 in &axes {
        for &e1 in &eccentricities {
            for &a2 in &axes {
                for &e2 in &eccentricities {
                    let (o, t) = (body(a1, e1), body(a2, e2));
                    if o.mean_radius_au() == t.mean_radius_au() {
                        continue;
                    }
                    let e = derive_transfer_orbit(&o, &t).eccentricity;
                    assert!((0.0..1.0).contains(&e), "e = {e} for {a1}/{e1} -> {a2}/{e2}");
                }
            }
        }
    }
}

#[test]
fn period_grows_with_semi_major_axis() {
    let mut previous = 0.0;
    for step in 1..=50 {
        let period = calculate_period(&body(step as f64 * 0.25, 0.1), MU);
        assert!(period > previous);
        previous = period;
    }
}

#[test]
fn earth_period_is_one_year() {
    let period = calculate_period(&earth(), MU);
    assert!((period / 3.1558e7 - 1.0).abs() < 0.01, "period = {period}");
    let days = period / 86_400.0;
    assert!((days - 365.26).abs() < 0.5, "days = {days}");
}

#[test]
fn earth_to_mars_departure_burn_is_plausible() {
    let dv = calculate_delta_v(&earth(), &mars(), MU).expect("finite burn");
    assert!((2500..=3500).contains(&dv), "dv = {dv}");
}

#[test]
fn departure_burn_depends_on_direction() {
    let outward = calculate_delta_v(&earth(), &mars(), MU).expect("finite burn");
    let inward = calculate_delta_v(&mars(), &earth(), MU).expect("finite burn");
    assert_ne!(outward, inward);
    assert!(outward > 0);
    assert!(inward < 0);
}

#[test]
fn same_orbit_needs_no_departure_burn() {
    assert_eq!(calculate_delta_v(&mars(), &mars(), MU), Some(0));
}

#[test]
fn open_orbit_input_does_not_panic() {
    let comet = OrbitalBody::new("comet", 1.0, 0.5, 1.5, 0.0, 0.0, 0.0, "white");
    let transfer = derive_transfer_orbit(&comet, &earth());
    assert!(transfer.eccentricity.is_finite());
    let bad = OrbitalBody::new("bad", -1.0, 0.5, 0.1, 0.0, 0.0, 0.0, "white");
    assert!(calculate_period(&bad, MU).is_nan());
}

#[test]
fn non_finite_burn_is_not_reported_as_zero() {
    let bad = OrbitalBody::new("bad", -1.0, 0.5, 0.1, 0.0, 0.0, 0.0, "white");
    assert_eq!(calculate_delta_v(&bad, &earth(), MU), None);
}
