//! Student load scenario - log in once, then submit assignments and exams 3:1

use anyhow::{Context, Result};
use goose::config::GooseConfiguration;
use goose::prelude::*;

use crate::cli::ClientArgs;
use crate::config::{get_attack_profile, AttackProfile};
use crate::metrics::{collector, reporter};
use crate::users::{student_scenario, Credentials};

/// Resolve the profile named on the command line and apply overrides
pub fn resolve_profile(args: &ClientArgs) -> AttackProfile {
    get_attack_profile(&args.profile).with_overrides(
        args.users,
        args.hatch_rate.clone(),
        args.duration,
    )
}

/// Configure the attack without running it
pub fn build_attack(args: &ClientArgs, profile: &AttackProfile) -> Result<GooseAttack> {
    let credentials = Credentials::new(&args.username, &args.password);

    // The command line is owned by clap, so start from an empty configuration
    let attack = GooseAttack::initialize_with_config(GooseConfiguration::default())
        .context("Failed to initialize load test")?
        .register_scenario(student_scenario(credentials)?)
        .set_default(GooseDefault::Host, args.host.as_str())?
        .set_default(GooseDefault::Users, profile.users)?
        .set_default(GooseDefault::HatchRate, profile.hatch_rate.as_str())?
        .set_default(GooseDefault::RunTime, profile.run_time)?
        // Keep the on-start logins in the final numbers
        .set_default(GooseDefault::NoResetMetrics, true)?;

    let attack = match &args.report_file {
        Some(path) => attack.set_default(GooseDefault::ReportFile, path.as_str())?,
        None => attack,
    };

    Ok(*attack)
}

pub async fn run(args: ClientArgs) -> Result<()> {
    tracing::info!("Starting student load scenario");

    let profile = resolve_profile(&args);
    tracing::info!(
        "Profile '{}': {} users, hatch rate {}/sec, {}s",
        profile.name,
        profile.users,
        profile.hatch_rate,
        profile.run_time
    );

    let attack = build_attack(&args, &profile)?;
    let metrics = attack.execute().await.context("Load test failed")?;

    tracing::info!("Load test finished after {}s", metrics.duration);

    let summaries = collector::summarize(&metrics);
    for summary in summaries.iter().filter(|summary| summary.failures > 0) {
        tracing::warn!(
            "{}: {} of {} requests failed",
            summary.label,
            summary.failures,
            summary.requests
        );
    }

    reporter::print_final_report(&summaries, metrics.duration);

    Ok(())
}
