//! Pulls endpoint summaries out of the framework's request aggregates

use goose::metrics::{GooseMetrics, GooseRequestMetricAggregate};

use super::types::{EndpointSummary, TaskMix};
use crate::users::student::{ASSIGNMENT_TASK, EXAM_TASK};

impl EndpointSummary {
    pub fn from_aggregate(label: &str, aggregate: &GooseRequestMetricAggregate) -> Self {
        let timing = &aggregate.raw_data;
        let mean_ms = if timing.counter > 0 {
            timing.total_time as f64 / timing.counter as f64
        } else {
            0.0
        };

        Self {
            label: label.to_string(),
            path: aggregate.path.clone(),
            requests: aggregate.success_count + aggregate.fail_count,
            successes: aggregate.success_count,
            failures: aggregate.fail_count,
            min_ms: timing.minimum_time,
            max_ms: timing.maximum_time,
            mean_ms,
            status_codes: aggregate
                .status_code_counts
                .iter()
                .map(|(code, count)| (*code, *count))
                .collect(),
        }
    }
}

/// Endpoint summaries sorted by label
pub fn summarize(metrics: &GooseMetrics) -> Vec<EndpointSummary> {
    let mut summaries: Vec<EndpointSummary> = metrics
        .requests
        .iter()
        .map(|(label, aggregate)| EndpointSummary::from_aggregate(label, aggregate))
        .collect();
    summaries.sort_by(|a, b| a.label.cmp(&b.label));
    summaries
}

pub fn task_mix(summaries: &[EndpointSummary]) -> TaskMix {
    // `path` holds the request name, which is the transaction name here
    let count = |name: &str| -> usize {
        summaries
            .iter()
            .filter(|summary| summary.path == name)
            .map(|summary| summary.requests)
            .sum()
    };

    TaskMix {
        assignments: count(ASSIGNMENT_TASK),
        exams: count(EXAM_TASK),
    }
}
