//! Behavioural coverage for catalog decoding and mode filtering.

use std::cell::RefCell;

use prediction_core::{Mode, ResolvedConditions, SpotCatalog};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

/// Shared state for the catalog scenarios.
pub struct CatalogContext {
    document: RefCell<String>,
    catalog: RefCell<Option<SpotCatalog>>,
}

#[fixture]
/// Build a fresh `CatalogContext` for each scenario run.
pub fn context() -> CatalogContext {
    CatalogContext {
        document: RefCell::new(String::new()),
        catalog: RefCell::new(None),
    }
}

#[given("a catalog document with one spot lacking scores and conditions")]
fn bare_spot(context: &CatalogContext) {
    *context.document.borrow_mut() = r#"{"spots":[
        {"id":"bare","name":"Bare Island","lat":-33.99,"lon":151.23,
         "mode":"land","distance_km":12.4,"access":"shore"}
    ]}"#
    .to_owned();
}

#[given("a catalog document without a spots array")]
fn no_spots(context: &CatalogContext) {
    *context.document.borrow_mut() = r#"{"generated":"2024-01-01"}"#.to_owned();
}

#[given("a catalog document with three land spots and one boat spot")]
fn mixed_modes(context: &CatalogContext) {
    *context.document.borrow_mut() = r#"{"spots":[
        {"id":"l1","name":"Land 1","lat":0,"lon":0,"mode":"land","distance_km":1,"access":"shore"},
        {"id":"b1","name":"Boat 1","lat":0,"lon":0,"mode":"boat","distance_km":2,"access":"ramp"},
        {"id":"l2","name":"Land 2","lat":0,"lon":0,"mode":"land","distance_km":3,"access":"jetty"},
        {"id":"l3","name":"Land 3","lat":0,"lon":0,"mode":"land","distance_km":4,"access":"rocks"}
    ]}"#
    .to_owned();
}

#[given("a catalog document with a kayak spot between two boat spots")]
fn kayak_between_boats(context: &CatalogContext) {
    *context.document.borrow_mut() = r#"{"spots":[
        {"id":"b1","name":"Boat 1","lat":0,"lon":0,"mode":"boat","distance_km":1,"access":"ramp"},
        {"id":"k1","name":"Kayak 1","lat":0,"lon":0,"mode":"kayak","distance_km":2,"access":"beach"},
        {"id":"b2","lat":0,"lon":0,"mode":"boat","distance_km":3}
    ]}"#
    .to_owned();
}

#[when("I decode the catalog")]
fn decode(context: &CatalogContext) {
    let catalog =
        SpotCatalog::from_json_str(&context.document.borrow()).expect("catalog should decode");
    *context.catalog.borrow_mut() = Some(catalog);
}

#[then("the spot resolves a base score of one half")]
fn base_score_default(context: &CatalogContext) {
    let catalog = context.catalog.borrow();
    let spot = catalog
        .as_ref()
        .and_then(|catalog| catalog.get("bare"))
        .expect("bare spot decoded");
    assert!(spot.base_score.is_none());
    assert_eq!(spot.base_score(), 0.5);
}

#[then("the spot resolves the default conditions")]
fn conditions_default(context: &CatalogContext) {
    let catalog = context.catalog.borrow();
    let spot = catalog
        .as_ref()
        .and_then(|catalog| catalog.get("bare"))
        .expect("bare spot decoded");
    assert_eq!(spot.conditions(), ResolvedConditions::default());
}

#[then("the catalog is empty")]
fn catalog_empty(context: &CatalogContext) {
    let catalog = context.catalog.borrow();
    assert!(catalog.as_ref().expect("catalog decoded").is_empty());
}

#[then("the boat mode lists exactly one spot")]
fn one_boat_spot(context: &CatalogContext) {
    let catalog = context.catalog.borrow();
    let catalog = catalog.as_ref().expect("catalog decoded");
    let boats: Vec<&str> = catalog
        .in_mode(Mode::Boat)
        .map(|(_, spot)| spot.id.as_str())
        .collect();
    assert_eq!(boats, vec!["b1"]);
}

#[then("the land mode lists spots in document order")]
fn land_in_order(context: &CatalogContext) {
    let catalog = context.catalog.borrow();
    let catalog = catalog.as_ref().expect("catalog decoded");
    let land: Vec<(usize, &str)> = catalog
        .in_mode(Mode::Land)
        .map(|(idx, spot)| (idx, spot.id.as_str()))
        .collect();
    assert_eq!(land, vec![(0, "l1"), (2, "l2"), (3, "l3")]);
}

#[then("the catalog keeps the two boat spots in order")]
fn boats_survive(context: &CatalogContext) {
    let catalog = context.catalog.borrow();
    let catalog = catalog.as_ref().expect("catalog decoded");
    let boats: Vec<(usize, &str, &str)> = catalog
        .in_mode(Mode::Boat)
        .map(|(idx, spot)| (idx, spot.id.as_str(), spot.name.as_str()))
        .collect();
    assert_eq!(boats, vec![(0, "b1", "Boat 1"), (1, "b2", "b2")]);
    assert!(catalog.get("k1").is_none());
}

#[scenario(path = "tests/features/catalog.feature", index = 0)]
fn defaults_fill_missing_fields(context: CatalogContext) {
    let _ = context;
}

#[scenario(path = "tests/features/catalog.feature", index = 1)]
fn missing_array_is_empty(context: CatalogContext) {
    let _ = context;
}

#[scenario(path = "tests/features/catalog.feature", index = 2)]
fn mode_filtering_preserves_order(context: CatalogContext) {
    let _ = context;
}

#[scenario(path = "tests/features/catalog.feature", index = 3)]
fn undecodable_record_is_skipped(context: CatalogContext) {
    let _ = context;
}
