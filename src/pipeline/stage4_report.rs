use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::report::ReportData;
use crate::report::json::render_reports_json;
use crate::report::text::{render_comparison_text, render_report_text};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
}

/// Renders one or more reports for stdout.
pub fn render_reports(reports: &[ReportData], format: ReportFormat) -> std::io::Result<String> {
    match format {
        ReportFormat::Text => Ok(render_text_bundle(reports)),
        ReportFormat::Json => Ok(render_reports_json(reports)?),
    }
}

pub fn write_reports(reports: &[ReportData], out_dir: &Path) -> std::io::Result<()> {
    fs::create_dir_all(out_dir)?;

    let report_path = out_dir.join("footrule.txt");
    write_text(&report_path, &render_text_bundle(reports))?;

    let json_path = out_dir.join("footrule.json");
    write_text(&json_path, &render_reports_json(reports)?)?;

    let tsv_path = out_dir.join("displacements.tsv");
    write_displacements_tsv(reports, &tsv_path)?;

    info!("reports written to {}", out_dir.display());
    Ok(())
}

fn render_text_bundle(reports: &[ReportData]) -> String {
    let mut out = String::new();
    for (idx, data) in reports.iter().enumerate() {
        if idx > 0 {
            out.push('\n');
        }
        out.push_str(&render_report_text(data));
    }
    if reports.len() > 1 {
        out.push('\n');
        out.push_str(&render_comparison_text(reports));
    }
    out
}

fn write_displacements_tsv(reports: &[ReportData], path: &Path) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    writeln!(w, "input\titem\tleft_rank\tright_rank\tdisplacement")?;
    for (idx, data) in reports.iter().enumerate() {
        let label = data
            .label
            .clone()
            .unwrap_or_else(|| format!("input_{}", idx + 1));
        for d in &data.outcome.displacements {
            writeln!(
                w,
                "{}\t{}\t{}\t{}\t{}",
                label, d.item, d.left_rank, d.right_rank, d.displacement
            )?;
        }
    }
    w.flush()?;
    Ok(())
}

fn write_text(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(contents.as_bytes())?;
    w.flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_report.rs"]
mod tests;
