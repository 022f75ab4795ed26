use colored::Colorize;
use pulse_bench_report::report::BenchmarkReport;
use tracing::info;

/// Constant multipliers, not measurements. Rough factors for how an
/// event-loop runtime typically compares on the same workload.
const RUNTIME_MULTIPLIERS: &[(&str, f64)] = &[
    ("CPU-intensive", 2.5),
    ("I/O-bound", 1.3),
    ("Memory-intensive", 3.0),
    ("High-concurrency", 4.0),
];

/// Prints the speculative cross-runtime comparison. Every line is
/// labeled as an estimate; nothing here is measured output.
pub fn print_runtime_estimates(report: &BenchmarkReport) {
    let Some(overall_avg) = overall_average_latency_ms(report) else {
        info!(
            "{}",
            "No successful requests, skipping runtime estimates".yellow()
        );
        return;
    };

    info!(
        "{}",
        format!("Measured average latency across endpoints: {overall_avg:.2} ms").blue()
    );
    for (scenario, multiplier) in RUNTIME_MULTIPLIERS {
        info!(
            "{}",
            format!(
                "ESTIMATE (not measured): {scenario} workload on an event-loop runtime \
                ~ {:.2} ms ({multiplier}x)",
                overall_avg * multiplier
            )
            .yellow()
        );
    }
}

fn overall_average_latency_ms(report: &BenchmarkReport) -> Option<f64> {
    let averages: Vec<f64> = report
        .endpoints
        .iter()
        .filter_map(|e| e.summary.latency.as_ref().map(|l| l.avg_latency_ms))
        .collect();
    if averages.is_empty() {
        return None;
    }
    Some(averages.iter().sum::<f64>() / averages.len() as f64)
}
