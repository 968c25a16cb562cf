use chrono::{DateTime, TimeZone, Utc};
use procurement_recommender::{
    AlwaysInStock, Coordinates, EngineConfig, FixedStock, RecommendationEngine,
    RecommendationRequest, ResourceCategory, ResourceShortage, Supplier, UrgencyLevel,
};

const HOSPITAL: Coordinates = Coordinates {
    lat: -23.561684,
    lng: -46.655291,
};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 9, 30, 0).unwrap()
}

/// A supplier `lat_offset` degrees north of the hospital (0.09 deg ~ 10 km).
fn supplier(id: &str, lat_offset: f64) -> Supplier {
    Supplier::new(
        id,
        format!("Supplier {}", id),
        Coordinates::new(HOSPITAL.lat + lat_offset, HOSPITAL.lng),
    )
    .with_category(ResourceCategory::Equipment)
    .with_resource_type("respiradores")
    .with_rating(5)
    .with_delivery_time(12.0)
    .preferred(true)
}

fn ventilators(urgency: UrgencyLevel) -> ResourceShortage {
    ResourceShortage::new("respiradores", ResourceCategory::Equipment, 4, urgency)
}

fn engine() -> RecommendationEngine<AlwaysInStock> {
    RecommendationEngine::new(EngineConfig::default(), AlwaysInStock)
}

#[test]
fn critical_shortage_prefers_nearby_supplier() {
    let request = RecommendationRequest::new(
        HOSPITAL,
        vec![ventilators(UrgencyLevel::Critical)],
        vec![supplier("B", 0.36), supplier("A", 0.0)],
    )
    .at(now());

    let report = engine().recommend(&request).unwrap();
    let ranked = report.for_resource("respiradores");

    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0].supplier_id, "A");
    assert_eq!(ranked[1].supplier_id, "B");
    assert_eq!(ranked[0].distance_km, 0.0);
    assert_eq!(ranked[1].distance_km, 40.0);
    assert_eq!(ranked[0].estimated_delivery_hours, 6.0);
    assert!((ranked[0].priority_score - 22.7).abs() < 1e-9);
    assert!((ranked[1].priority_score - 14.7).abs() < 1e-9);
}

#[test]
fn low_urgency_keeps_baseline_delivery() {
    let slow = supplier("A", 0.0).with_delivery_time(20.0);
    let request =
        RecommendationRequest::new(HOSPITAL, vec![ventilators(UrgencyLevel::Low)], vec![slow])
            .at(now());

    let report = engine().recommend(&request).unwrap();
    assert_eq!(
        report.best_for("respiradores").unwrap().estimated_delivery_hours,
        20.0
    );
}

#[test]
fn missing_resource_type_is_flagged_unmet() {
    let request = RecommendationRequest::new(
        HOSPITAL,
        vec![ResourceShortage::new(
            "ventiladores",
            ResourceCategory::Equipment,
            2,
            UrgencyLevel::High,
        )],
        vec![supplier("A", 0.0), supplier("B", 0.1)],
    )
    .at(now());

    let report = engine().recommend(&request).unwrap();
    assert!(report.for_resource("ventiladores").is_empty());
    assert!(report.is_unmet("ventiladores"));
    assert_eq!(report.unmet, vec!["ventiladores".to_string()]);
    assert!(report.diagnostics.is_empty());
}

#[test]
fn identical_inputs_give_identical_output() {
    let catalog: Vec<Supplier> = (0..15)
        .map(|i| {
            supplier(&format!("S{:02}", i), 0.03 * i as f64)
                .with_rating((i % 5 + 1) as u8)
                .with_delivery_time(6.0 + i as f64 * 3.0)
                .preferred(i % 2 == 0)
        })
        .collect();
    let lookup = FixedStock::new(false)
        .with_entry("S03", "respiradores", true)
        .with_entry("S07", "respiradores", true);
    let engine = RecommendationEngine::new(EngineConfig::default(), lookup);
    let request =
        RecommendationRequest::new(HOSPITAL, vec![ventilators(UrgencyLevel::High)], catalog)
            .at(now());

    let first = engine.recommend(&request).unwrap();
    let second = engine.recommend(&request).unwrap();
    assert_eq!(first, second);
}

#[test]
fn ineligible_suppliers_never_appear() {
    let catalog = vec![
        supplier("eligible", 0.0),
        Supplier::new("consumables", "Gloves Inc", HOSPITAL)
            .with_category(ResourceCategory::Supplies)
            .with_resource_type("respiradores"),
        Supplier::new("monitors", "CardioTech", HOSPITAL)
            .with_category(ResourceCategory::Equipment)
            .with_resource_type("monitores"),
    ];
    let request =
        RecommendationRequest::new(HOSPITAL, vec![ventilators(UrgencyLevel::Medium)], catalog)
            .at(now());

    let report = engine().recommend(&request).unwrap();
    let ids: Vec<&str> = report
        .for_resource("respiradores")
        .iter()
        .map(|r| r.supplier_id.as_str())
        .collect();
    assert_eq!(ids, vec!["eligible"]);
}

#[test]
fn critical_delivery_never_slower_than_low() {
    let catalog: Vec<Supplier> = [4.0, 12.0, 36.0, 96.0]
        .iter()
        .enumerate()
        .map(|(i, hours)| supplier(&format!("S{}", i), 0.05 * i as f64).with_delivery_time(*hours))
        .collect();

    let run = |urgency| {
        let request = RecommendationRequest::new(HOSPITAL, vec![ventilators(urgency)], catalog.clone())
            .at(now());
        engine().recommend(&request).unwrap()
    };
    let critical = run(UrgencyLevel::Critical);
    let low = run(UrgencyLevel::Low);

    for rec in critical.for_resource("respiradores") {
        let same = low
            .for_resource("respiradores")
            .iter()
            .find(|r| r.supplier_id == rec.supplier_id)
            .unwrap();
        assert!(rec.estimated_delivery_hours <= same.estimated_delivery_hours);
    }
}

#[test]
fn preferred_vendor_wins_a_score_tie() {
    // 3 (rating) + 2 (preferred) on one side, 5 + 0 on the other
    let preferred = supplier("z-preferred", 0.0).with_rating(3);
    let regular = supplier("a-regular", 0.0).preferred(false);
    let request = RecommendationRequest::new(
        HOSPITAL,
        vec![ventilators(UrgencyLevel::Medium)],
        vec![regular, preferred],
    )
    .with_ai_enhanced(false)
    .at(now());

    let report = engine().recommend(&request).unwrap();
    let ranked = report.for_resource("respiradores");
    assert_eq!(ranked[0].priority_score, ranked[1].priority_score);
    assert_eq!(ranked[0].supplier_id, "z-preferred");
}

#[test]
fn moving_a_supplier_away_never_raises_its_score() {
    for urgency in UrgencyLevel::ALL {
        let catalog: Vec<Supplier> = (0..10)
            .map(|i| supplier(&format!("S{}", i), 0.07 * i as f64))
            .collect();
        let request = RecommendationRequest::new(HOSPITAL, vec![ventilators(urgency)], catalog)
            .at(now());

        let report = engine().recommend(&request).unwrap();
        let mut by_distance = report.for_resource("respiradores").to_vec();
        by_distance.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));

        for pair in by_distance.windows(2) {
            assert!(
                pair[1].priority_score <= pair[0].priority_score,
                "{:?}: {} km scored {} but {} km scored {}",
                urgency,
                pair[0].distance_km,
                pair[0].priority_score,
                pair[1].distance_km,
                pair[1].priority_score
            );
        }
    }
}

#[test]
fn partial_results_survive_bad_records() {
    let catalog = vec![
        supplier("good", 0.0),
        supplier("zero-rating", 0.0).with_rating(0),
        supplier("instant", 0.0).with_delivery_time(0.0),
        supplier("nowhere", 0.0).with_delivery_time(f64::NAN),
    ];
    let request =
        RecommendationRequest::new(HOSPITAL, vec![ventilators(UrgencyLevel::High)], catalog)
            .at(now());

    let report = engine().recommend(&request).unwrap();
    assert_eq!(report.for_resource("respiradores").len(), 1);
    assert_eq!(report.diagnostics.len(), 3);
    assert!(report.has_diagnostics());
}
