// Colored terminal output for the pothole report summary.

use colored::Colorize;

use crate::pipeline::PotholeReport;

/// Format one report as a summary line.
pub fn format_report_line(report: &PotholeReport) -> String {
    format!(
        "- Reporter: {}, Location: {}, Link: {}",
        report.reporter, report.location, report.link
    )
}

/// Display the collected reports, or the empty-result message.
pub fn display_report_summary(reports: &[PotholeReport]) {
    println!("\n{}", "--- Pothole Report Summary ---".bold());

    if reports.is_empty() {
        println!("No pothole reports found in the provided posts.");
        return;
    }

    for report in reports {
        println!("{}", format_report_line(report));
    }

    println!("\n  {} report(s) found", reports.len().to_string().bold());
}
