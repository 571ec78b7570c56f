use crate::model::findings::ValidationReport;
use crate::report::{ReportData, agreement_label, format_f64_2, format_f64_6, format_scores};

pub fn render_report_text(data: &ReportData) -> String {
    let mut out = String::new();

    out.push_str("Spearman Footrule Distance Report\n");
    out.push_str("=================================\n");
    if let Some(label) = &data.label {
        out.push_str(&format!("Input: {}\n", label));
    }
    out.push('\n');

    out.push_str("1. Inputs\n");
    for (item, scores) in data.scores.iter() {
        out.push_str(&format!("{}: {}\n", item, format_scores(scores)));
    }
    out.push_str(&format!(
        "Proposed ranking{}: {}\n\n",
        if data.ranking_derived {
            " (derived from metric 0)"
        } else {
            ""
        },
        data.ranking.join(", ")
    ));

    out.push_str("2. Rank check\n");
    push_validation(&mut out, &data.outcome.validation);
    out.push('\n');

    let outcome = &data.outcome;
    out.push_str("3. Distance\n");
    out.push_str(&format!("Reduction: {}\n", outcome.reduction.name()));
    for pair in &outcome.pairs {
        out.push_str(&format!(
            "{} vs {}: {}\n",
            pair.left.label(),
            pair.right.label(),
            pair.distance
        ));
    }
    out.push_str(&format!(
        "Spearman distance: {}\n",
        format_f64_2(outcome.distance as f64)
    ));
    out.push_str(&format!(
        "Normalized: {} ({})\n",
        format_f64_6(outcome.normalized),
        agreement_label(outcome.normalized)
    ));

    if !outcome.displacements.is_empty() {
        out.push_str("\n4. Displacements (first pair)\n");
        for d in &outcome.displacements {
            out.push_str(&format!(
                "{}: {} -> {} (|{}|)\n",
                d.item, d.left_rank, d.right_rank, d.displacement
            ));
        }
    }

    out
}

/// Side-by-side summary of several reports, one line each.
pub fn render_comparison_text(reports: &[ReportData]) -> String {
    let mut out = String::new();
    out.push_str("Comparison\n");
    out.push_str("----------\n");
    for (idx, data) in reports.iter().enumerate() {
        let label = data
            .label
            .clone()
            .unwrap_or_else(|| format!("input {}", idx + 1));
        out.push_str(&format!(
            "{}: distance {} ({})\n",
            label,
            format_f64_2(data.outcome.distance as f64),
            agreement_label(data.outcome.normalized)
        ));
    }
    out
}

fn push_validation(out: &mut String, report: &ValidationReport) {
    out.push_str(&format!("Length: {}\n", pass_fail(report.length_ok)));
    out.push_str(&format!("Order: {}\n", pass_fail(report.order_ok)));
    out.push_str(&format!(
        "Metric 0 descending: {}\n",
        pass_fail(report.base_descending)
    ));
    for finding in &report.findings {
        out.push_str(&format!("WARN {}: {}\n", finding.code(), finding));
    }
}

fn pass_fail(ok: bool) -> &'static str {
    if ok { "pass" } else { "fail" }
}
