//! Console reporter for the end of an attack

use std::fmt::Write;

use super::collector::task_mix;
use super::types::EndpointSummary;

/// Print final summary report
pub fn print_final_report(summaries: &[EndpointSummary], duration_secs: usize) {
    println!("{}", render_final_report(summaries, duration_secs));
}

pub fn render_final_report(summaries: &[EndpointSummary], duration_secs: usize) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "\n╔════════════════════════════════════════════════════════════════╗");
    let _ = writeln!(out, "║                  MADRASATI LOAD TEST REPORT                    ║");
    let _ = writeln!(out, "╚════════════════════════════════════════════════════════════════╝");

    if summaries.is_empty() {
        let _ = writeln!(out, "\n   No requests were recorded.");
    }

    for summary in summaries {
        let _ = writeln!(out, "\n📊 {}", summary.label);
        let _ = writeln!(out, "   Requests:             {:>10}", summary.requests);
        let _ = writeln!(out, "   Succeeded:            {:>10}", summary.successes);
        let _ = writeln!(out, "   Failed:               {:>10}", summary.failures);
        if summary.requests > 0 {
            let _ = writeln!(out, "   Success Rate:         {:>10.2}%", summary.success_rate());
            let _ = writeln!(out, "   Latency Min:          {:>10} ms", summary.min_ms);
            let _ = writeln!(out, "   Latency Mean:         {:>10.2} ms", summary.mean_ms);
            let _ = writeln!(out, "   Latency Max:          {:>10} ms", summary.max_ms);
        }
        for (code, count) in &summary.status_codes {
            let _ = writeln!(out, "   Status {code}:           {count:>10}");
        }
    }

    let mix = task_mix(summaries);
    let _ = writeln!(out, "\n🎯 TASK MIX");
    let _ = writeln!(out, "   Assignments:          {:>10}", mix.assignments);
    let _ = writeln!(out, "   Exams:                {:>10}", mix.exams);
    match mix.ratio() {
        Some(ratio) => {
            let _ = writeln!(out, "   Ratio:                {ratio:>10.2} : 1");
        }
        None => {
            let _ = writeln!(out, "   Ratio:                       n/a");
        }
    }

    let _ = writeln!(out, "\n⏱️  Test Duration: {duration_secs} seconds");
    let _ = write!(out, "════════════════════════════════════════════════════════════════");
    out
}
