//! The simulated student: log in once, then keep submitting work.

use std::sync::Arc;
use std::time::Duration;

use goose::prelude::*;

use super::payloads::{AssignmentSubmission, Credentials};

pub const LOGIN_PATH: &str = "/api/auth/login";
pub const ASSIGNMENT_PATH: &str = "/api/assignments/submit";
pub const EXAM_PATH: &str = "/api/exam/submit";

/// Transaction names; goose reports each request under its transaction's name
pub const LOGIN_TASK: &str = "login";
pub const ASSIGNMENT_TASK: &str = "submit_assignment";
pub const EXAM_TASK: &str = "submit_exam";

pub const ASSIGNMENT_WEIGHT: usize = 3;
pub const EXAM_WEIGHT: usize = 1;
pub const MIN_WAIT: Duration = Duration::from_secs(1);
pub const MAX_WAIT: Duration = Duration::from_secs(3);

/// Build the student scenario with its on-start login and weighted tasks
pub fn student_scenario(credentials: Credentials) -> Result<Scenario, GooseError> {
    let credentials = Arc::new(credentials);
    let login: TransactionFunction = Arc::new(move |user| {
        let credentials = Arc::clone(&credentials);
        Box::pin(async move {
            let _goose = user.post_json(LOGIN_PATH, &*credentials).await?;

            Ok(())
        })
    });

    let scenario = scenario!("StudentUser")
        .set_wait_time(MIN_WAIT, MAX_WAIT)?
        .register_transaction(Transaction::new(login).set_name(LOGIN_TASK).set_on_start())
        .register_transaction(
            transaction!(submit_assignment)
                .set_name(ASSIGNMENT_TASK)
                .set_weight(ASSIGNMENT_WEIGHT)?,
        )
        .register_transaction(
            transaction!(submit_exam)
                .set_name(EXAM_TASK)
                .set_weight(EXAM_WEIGHT)?,
        );

    Ok(scenario)
}

async fn submit_assignment(user: &mut GooseUser) -> TransactionResult {
    let submission = AssignmentSubmission::random(&mut rand::thread_rng());
    let _goose = user.post_json(ASSIGNMENT_PATH, &submission).await?;

    Ok(())
}

async fn submit_exam(user: &mut GooseUser) -> TransactionResult {
    let _goose = user.post(EXAM_PATH, "").await?;

    Ok(())
}
