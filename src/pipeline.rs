// Triage pipeline: classify loaded records one at a time.
//
// Sequential by design — the Gemini free tier is rate-limited and the
// post counts are small, so there's nothing to gain from fanning out.
// Per-record failures (bad shape, remote errors) are logged and skipped;
// nothing in this loop aborts the run.

use indicatif::{ProgressBar, ProgressStyle};
use serde_json::Value;
use tracing::warn;

use crate::classifier::traits::{PotholeClassifier, Verdict};
use crate::output::truncate_chars;
use crate::posts::Post;

/// One confirmed pothole report, ready for printing.
#[derive(Debug, Clone, PartialEq)]
pub struct PotholeReport {
    pub reporter: String,
    pub location: String,
    pub link: String,
}

/// Classify every well-formed record and collect the confirmed reports
/// in encounter order.
///
/// Records missing any of `text`/`reporter`/`link` are skipped with a
/// diagnostic. A classifier error is treated exactly like a negative
/// verdict — the record produces no report and the loop continues.
pub async fn run(classifier: &dyn PotholeClassifier, records: &[Value]) -> Vec<PotholeReport> {
    let mut reports = Vec::new();

    let pb = ProgressBar::new(records.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("  Analyzing [{bar:30}] {pos}/{len} ({eta})")
            .unwrap(),
    );

    for record in records {
        let Some(post) = Post::from_record(record) else {
            warn!(
                record = %truncate_chars(&record.to_string(), 120),
                "Skipping a post due to missing data"
            );
            pb.inc(1);
            continue;
        };

        match classifier.classify(&post.text).await {
            Ok(Verdict::Pothole { location }) => {
                reports.push(PotholeReport {
                    reporter: post.reporter,
                    location,
                    link: post.link,
                });
            }
            Ok(Verdict::Negative) => {}
            Err(e) => {
                // Deliberate conflation: a failed call reads the same as a
                // negative verdict downstream.
                warn!(
                    reporter = post.reporter,
                    error = %e,
                    "Classification call failed, treating post as not a report"
                );
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    reports
}
