//! Shape of the simulated student as handed to goose.

use std::time::Duration;

use clap::Parser;
use load_test::cli::{Cli, Mode};
use load_test::scenarios::student_load::resolve_profile;
use load_test::users::{student_scenario, Credentials};

#[test]
fn waits_between_one_and_three_seconds() {
    let scenario = student_scenario(Credentials::default()).unwrap();
    assert_eq!(scenario.name, "StudentUser");
    assert_eq!(
        scenario.transaction_wait,
        Some((Duration::from_secs(1), Duration::from_secs(3)))
    );
}

#[test]
fn login_runs_on_start_and_tasks_are_weighted_three_to_one() {
    let scenario = student_scenario(Credentials::default()).unwrap();
    let find = |name: &str| {
        scenario
            .transactions
            .iter()
            .find(|transaction| transaction.name == name)
            .unwrap_or_else(|| panic!("missing transaction {name}"))
    };

    let login = find("login");
    assert!(login.on_start);

    let assignment = find("submit_assignment");
    let exam = find("submit_exam");
    assert!(!assignment.on_start);
    assert!(!exam.on_start);
    assert_eq!(assignment.weight, 3 * exam.weight);
}

#[test]
fn profile_overrides_come_from_the_command_line() {
    let cli = Cli::try_parse_from([
        "load-test",
        "client",
        "--profile",
        "stress",
        "--duration",
        "60",
    ])
    .unwrap();
    let Mode::Client(args) = cli.mode else {
        panic!("expected client mode");
    };

    let profile = resolve_profile(&args);
    assert_eq!(profile.name, "stress");
    assert_eq!(profile.users, 500);
    assert_eq!(profile.hatch_rate, "25");
    assert_eq!(profile.run_time, 60);
}
