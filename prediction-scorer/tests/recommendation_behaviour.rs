//! Behavioural coverage for scoring, ranking, and alternatives.

use std::cell::RefCell;

use prediction_core::test_support::SpotBuilder;
use prediction_core::{Mode, ScoringContext, Spot, SpotCatalog, UserLocation};
use prediction_scorer::{alternatives, rank};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

/// Shared state for the recommendation scenarios.
pub struct RecommendationContext {
    spots: RefCell<Vec<Spot>>,
    scoring: RefCell<ScoringContext>,
    ranked: RefCell<Vec<(String, Mode, f64)>>,
    offered: RefCell<Vec<(String, String)>>,
}

#[fixture]
/// Build a fresh `RecommendationContext` for each scenario run.
pub fn context() -> RecommendationContext {
    RecommendationContext {
        spots: RefCell::new(Vec::new()),
        scoring: RefCell::new(ScoringContext::default()),
        ranked: RefCell::new(Vec::new()),
        offered: RefCell::new(Vec::new()),
    }
}

fn push(context: &RecommendationContext, spot: Spot) {
    context.spots.borrow_mut().push(spot);
}

#[given("a land spot with base score 0.8 at 5 km")]
fn single_land_spot(context: &RecommendationContext) {
    push(
        context,
        SpotBuilder::new("x").base_score(0.8).distance_km(5.0).build(),
    );
}

#[given("three land spots and two boat spots")]
fn mixed_spots(context: &RecommendationContext) {
    for (id, mode) in [
        ("l1", Mode::Land),
        ("b1", Mode::Boat),
        ("l2", Mode::Land),
        ("b2", Mode::Boat),
        ("l3", Mode::Land),
    ] {
        push(context, SpotBuilder::new(id).mode(mode).build());
    }
}

#[given("a selected land spot with base score 0.5 at 10 km and 15 km/h wind")]
fn selected_spot(context: &RecommendationContext) {
    push(
        context,
        SpotBuilder::new("selected")
            .base_score(0.5)
            .distance_km(10.0)
            .wind_kph(15.0)
            .build(),
    );
}

#[given("a candidate land spot with base score 0.5 at 5 km and 10 km/h wind")]
fn calmer_candidate(context: &RecommendationContext) {
    push(
        context,
        SpotBuilder::new("candidate")
            .base_score(0.5)
            .distance_km(5.0)
            .wind_kph(10.0)
            .build(),
    );
}

#[given("a candidate land spot with base score 0.9 at 10 km and 15 km/h wind")]
fn identical_conditions_candidate(context: &RecommendationContext) {
    push(
        context,
        SpotBuilder::new("candidate")
            .base_score(0.9)
            .distance_km(10.0)
            .wind_kph(15.0)
            .build(),
    );
}

#[given("the user location is known with a 20 km radius")]
fn known_location(context: &RecommendationContext) {
    *context.scoring.borrow_mut() =
        ScoringContext::new(Some(UserLocation::new(-33.87, 151.21)), 20.0);
}

#[given("the user location is unknown with a 20 km radius")]
fn unknown_location(context: &RecommendationContext) {
    *context.scoring.borrow_mut() = ScoringContext::new(None, 20.0);
}

fn rank_mode(context: &RecommendationContext, mode: Mode) {
    let catalog = SpotCatalog::new(context.spots.borrow().clone());
    let ranked = rank(&catalog, mode, &context.scoring.borrow())
        .into_iter()
        .map(|entry| (entry.spot.id.clone(), entry.spot.mode, entry.score))
        .collect();
    *context.ranked.borrow_mut() = ranked;
}

#[when("I rank the land spots")]
fn rank_land(context: &RecommendationContext) {
    rank_mode(context, Mode::Land);
}

#[when("I rank the boat spots")]
fn rank_boat(context: &RecommendationContext) {
    rank_mode(context, Mode::Boat);
}

#[when("I ask for alternatives to the selected spot")]
fn ask_for_alternatives(context: &RecommendationContext) {
    let catalog = SpotCatalog::new(context.spots.borrow().clone());
    let selected = catalog.get("selected").expect("selected spot present");
    let offered = alternatives(selected, &catalog, Mode::Land, &context.scoring.borrow())
        .into_iter()
        .map(|pick| (pick.spot.id.clone(), pick.justification))
        .collect();
    *context.offered.borrow_mut() = offered;
}

#[then("the spot scores 0.78")]
fn scores_located(context: &RecommendationContext) {
    assert_single_score(context, 0.78);
}

#[then("the spot scores 0.68")]
fn scores_unlocated(context: &RecommendationContext) {
    assert_single_score(context, 0.68);
}

fn assert_single_score(context: &RecommendationContext, expected: f64) {
    let ranked = context.ranked.borrow();
    let (_, _, score) = ranked.first().expect("one spot ranked");
    assert!(
        (score - expected).abs() < 1e-9,
        "expected {expected}, got {score}"
    );
}

#[then("exactly two spots are ranked")]
fn two_ranked(context: &RecommendationContext) {
    assert_eq!(context.ranked.borrow().len(), 2);
}

#[then("every ranked spot is a boat spot")]
fn all_boats(context: &RecommendationContext) {
    assert!(
        context
            .ranked
            .borrow()
            .iter()
            .all(|(_, mode, _)| *mode == Mode::Boat)
    );
}

#[then("one alternative is offered")]
fn one_offered(context: &RecommendationContext) {
    let offered = context.offered.borrow();
    assert_eq!(offered.len(), 1);
    assert_eq!(offered[0].0, "candidate");
}

#[then("its justification mentions lower wind")]
fn mentions_wind(context: &RecommendationContext) {
    let offered = context.offered.borrow();
    let (_, justification) = offered.first().expect("alternative offered");
    assert_eq!(
        justification,
        "Better score and lower wind (10 vs 15 km/h)."
    );
}

#[then("no alternative is offered")]
fn none_offered(context: &RecommendationContext) {
    assert!(context.offered.borrow().is_empty());
}

#[scenario(path = "tests/features/recommendation.feature", index = 0)]
fn located_score(context: RecommendationContext) {
    let _ = context;
}

#[scenario(path = "tests/features/recommendation.feature", index = 1)]
fn unlocated_score(context: RecommendationContext) {
    let _ = context;
}

#[scenario(path = "tests/features/recommendation.feature", index = 2)]
fn ranking_is_mode_pure(context: RecommendationContext) {
    let _ = context;
}

#[scenario(path = "tests/features/recommendation.feature", index = 3)]
fn calmer_alternative(context: RecommendationContext) {
    let _ = context;
}

#[scenario(path = "tests/features/recommendation.feature", index = 4)]
fn unjustified_alternative(context: RecommendationContext) {
    let _ = context;
}
