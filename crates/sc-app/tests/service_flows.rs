//! Service-level flows over the CoolProp backend.

use sc_app::{AppConfig, AppError, CycleService, ExecuteRequest, ExpandRequest, point_vocabulary};
use sc_balance::{CatalogError, Params};
use sc_steam::{CoolPropTable, Cycle, Point, PointId};

fn service() -> CycleService<CoolPropTable> {
    CycleService::from_config(&AppConfig::default()).expect("default config is valid")
}

#[test]
fn resolves_a_single_point() {
    let point: Point = serde_json::from_str(r#"{"p": 40.0, "t": 400.0}"#).unwrap();
    let resolved = service().resolve_point(&point).unwrap();
    assert!(resolved.h.is_some());
    assert!(resolved.s.is_some());
}

#[test]
fn single_property_is_incomplete() {
    let err = service()
        .resolve_point(&Point {
            p: Some(40.0),
            ..Point::default()
        })
        .unwrap_err();
    assert!(matches!(err, AppError::InputIncomplete(_)));
}

#[test]
fn rejected_point_becomes_an_error() {
    let err = service()
        .resolve_point(&Point {
            p: Some(-5.0),
            t: Some(20.0),
            ..Point::default()
        })
        .unwrap_err();
    match err {
        AppError::Point(message) => assert!(message.contains("Check the consistency")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn expands_a_cycle_from_json() {
    let json = r#"{
        "points": {
            "3": {"p": 40.0, "h": 768.0},
            "4_prime": {"p": 5.0, "h": 650.0},
            "4": {"p": 5.0, "h": 673.6}
        }
    }"#;
    let request: ExpandRequest = serde_json::from_str(json).unwrap();
    let out = service().expand_cycle(&request);
    let eta = out.eta_hp.expect("efficiency derived from real outlet");
    assert!((eta - 80.0).abs() < 1e-9);
    assert_eq!(out.eta_lp, None);
}

#[test]
fn lists_and_executes_calculations() {
    let service = service();
    assert_eq!(service.list_calculations().len(), 6);

    let points: Cycle = [
        (PointId::Two, 100.0),
        (PointId::N, 150.0),
        (PointId::X, 300.0),
        (PointId::NPrime, 120.0),
    ]
    .into_iter()
    .map(|(id, h)| (id, Point::from_ph(None, h)))
    .collect();
    let result = service
        .execute_calculation(ExecuteRequest {
            id: "mass_balance_preheater".into(),
            points,
            params: Params::new().with("Gx", 10.0),
        })
        .unwrap();
    assert!((result.params.get("Gv").unwrap() - 46.0).abs() < 1e-9);
}

#[test]
fn execute_errors() {
    let service = service();
    let err = service.execute_calculation(ExecuteRequest::default()).unwrap_err();
    assert!(matches!(err, AppError::InputIncomplete(_)));

    let request: ExecuteRequest = serde_json::from_str(r#"{"id": "boiler"}"#).unwrap();
    let err = service.execute_calculation(request).unwrap_err();
    assert!(matches!(
        err,
        AppError::Catalog(CatalogError::UnknownCalculationId(_))
    ));
}

#[test]
fn vocabulary_is_in_cycle_order() {
    let rows = point_vocabulary();
    assert_eq!(rows.len(), 13);
    assert_eq!(rows[0].id, PointId::One);
    let json = serde_json::to_value(&rows[1]).unwrap();
    assert_eq!(json["id"], "2_prime");
}
