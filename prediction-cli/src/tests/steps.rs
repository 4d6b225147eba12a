//! Behaviour-driven step definitions driving the query command scenarios.

use super::helpers::{COASTAL_CATALOG, CatalogDir, LAND_ONLY_CATALOG};
use super::*;
use camino::Utf8PathBuf;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;

/// Aggregates query scenario state so each step only needs a single world
/// argument.
#[derive(Debug)]
struct QueryWorld {
    dir: CatalogDir,
    catalog_path: Utf8PathBuf,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl QueryWorld {
    fn new() -> Self {
        let dir = CatalogDir::new();
        let catalog_path = dir.root().join("catalog.json");
        Self {
            dir,
            catalog_path,
            stdout: RefCell::new(Vec::new()),
            result: RefCell::new(None),
        }
    }

    /// Insert the catalog path after the subcommand name.
    fn build_command_line(&self, command: &str) -> Vec<String> {
        let mut words = command.split_whitespace().map(str::to_owned);
        let mut argv = vec!["pure-prediction".to_owned()];
        argv.extend(words.next());
        argv.push(self.catalog_path.as_str().to_owned());
        argv.extend(words);
        argv
    }

    fn stdout_text(&self) -> String {
        String::from_utf8(self.stdout.borrow().clone()).expect("stdout utf-8")
    }

    fn error(&self) -> std::cell::Ref<'_, CliError> {
        std::cell::Ref::map(self.result.borrow(), |result| {
            result
                .as_ref()
                .expect("result recorded")
                .as_ref()
                .expect_err("expected error")
        })
    }
}

#[fixture]
fn world() -> QueryWorld {
    QueryWorld::new()
}

#[given("a coastal catalog exists on disk")]
fn coastal_catalog(#[from(world)] world: &QueryWorld) {
    world.dir.write("catalog.json", COASTAL_CATALOG);
}

#[given("a land-only catalog exists on disk")]
fn land_only_catalog(#[from(world)] world: &QueryWorld) {
    world.dir.write("catalog.json", LAND_ONLY_CATALOG);
}

#[given("no catalog exists on disk")]
fn no_catalog(#[from(world)] world: &QueryWorld) {
    assert!(!world.catalog_path.exists());
}

#[when("I run {command}")]
fn run_command_line(#[from(world)] world: &QueryWorld, command: String) {
    let invocation = world.build_command_line(command.trim_matches('"'));
    let outcome = Cli::try_parse_from(invocation)
        .map_err(CliError::from)
        .and_then(|cli| {
            let mut buffer = world.stdout.borrow_mut();
            run_command(cli.command, &mut *buffer)
        });
    world.result.replace(Some(outcome));
}

#[then("the command succeeds")]
fn command_succeeds(#[from(world)] world: &QueryWorld) {
    let borrowed = world.result.borrow();
    let result = borrowed.as_ref().expect("result recorded");
    if let Err(err) = result {
        panic!("expected success, found {err:?}");
    }
}

#[then("the output lines are {expected}")]
fn output_lines_are(#[from(world)] world: &QueryWorld, expected: String) {
    let expected: Vec<&str> = expected.trim_matches('"').split('|').collect();
    let stdout = world.stdout_text();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, expected);
}

#[then("the first output line is {expected}")]
fn first_output_line_is(#[from(world)] world: &QueryWorld, expected: String) {
    let stdout = world.stdout_text();
    assert_eq!(stdout.lines().next(), Some(expected.trim_matches('"')));
}

#[then("the output includes {expected}")]
fn output_includes(#[from(world)] world: &QueryWorld, expected: String) {
    let stdout = world.stdout_text();
    let expected = expected.trim_matches('"');
    assert!(
        stdout.lines().any(|line| line == expected),
        "expected line {expected:?} in output:\n{stdout}"
    );
}

#[then("the JSON output ranks {spot_id} first")]
fn json_ranks_first(#[from(world)] world: &QueryWorld, spot_id: String) {
    let stdout = world.stdout_text();
    let value: serde_json::Value =
        serde_json::from_str(&stdout).expect("output should be JSON");
    let first_id = value
        .as_array()
        .and_then(|entries| entries.first())
        .and_then(|entry| entry.pointer("/spot/id"))
        .and_then(serde_json::Value::as_str);
    assert_eq!(first_id, Some(spot_id.trim_matches('"')));
}

#[then("the command fails because the spot is unknown")]
fn fails_unknown_spot(#[from(world)] world: &QueryWorld) {
    match &*world.error() {
        CliError::UnknownSpot { id, .. } => assert_eq!(id, "nowhere"),
        other => panic!("expected UnknownSpot, found {other:?}"),
    }
}

#[then("the command fails because the catalog is missing")]
fn fails_missing_catalog(#[from(world)] world: &QueryWorld) {
    match &*world.error() {
        CliError::MissingSourceFile { field, .. } => assert_eq!(*field, ARG_CATALOG),
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[then("the command fails because the location is incomplete")]
fn fails_incomplete_location(#[from(world)] world: &QueryWorld) {
    match &*world.error() {
        CliError::IncompleteLocation => {}
        other => panic!("expected IncompleteLocation, found {other:?}"),
    }
}

macro_rules! register_query_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/query_commands.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: QueryWorld) {
            let _ = world;
        }
    };
}

register_query_scenario!(rank_without_location, "ranking land spots without a location");
register_query_scenario!(rank_near_user, "ranking land spots near the user");
register_query_scenario!(best_boat_spot, "reporting the best boat spot");
register_query_scenario!(best_empty_mode, "reporting an empty mode");
register_query_scenario!(detail_with_alternative, "explaining a spot with a better neighbour");
register_query_scenario!(rank_as_json, "printing rankings as JSON");
register_query_scenario!(detail_unknown_spot, "rejecting unknown spot identifiers");
register_query_scenario!(rank_missing_catalog, "rejecting a missing catalog file");
register_query_scenario!(best_half_location, "rejecting half a location");
