//! Console reporting - progress lines while copying, summary at the end
//!
//! Stdout is the user-facing channel; diagnostics go to tracing on stderr.

use crate::copy::{CopyProgress, RunSummary};

/// Print one line per progress event as the copy loop emits them.
pub fn print_progress(event: &CopyProgress) {
    match event {
        CopyProgress::Started { total } => {
            println!("Total files to process: {total}");
        }
        CopyProgress::Copied {
            index,
            total,
            dest_name,
        } => {
            println!("[{index}/{total}] Copied: {dest_name}");
        }
        CopyProgress::Failed {
            index,
            total,
            reference,
            reason,
        } => {
            println!("[{index}/{total}] Failed: {reference} ({reason})");
        }
        CopyProgress::Completed {
            attempted,
            succeeded,
        } => {
            tracing::debug!("run complete: {succeeded}/{attempted} copied");
        }
    }
}

/// Print the final summary block.
pub fn print_summary(summary: &RunSummary) {
    print!("{}", render_summary(summary));
}

fn render_summary(summary: &RunSummary) -> String {
    let mut out = String::new();
    out.push_str("\n---------------------------------------------------------\n");
    out.push_str(&format!(
        "Processed {} files, {} copied.\n",
        summary.attempted(),
        summary.succeeded()
    ));

    let failures: Vec<_> = summary.failures().collect();
    if failures.is_empty() {
        out.push_str("All files were copied successfully.\n");
    } else {
        out.push_str(&format!("\nFailed ({}):\n", failures.len()));
        for failure in failures {
            let reason = failure
                .outcome
                .as_ref()
                .err()
                .map(|e| e.to_string())
                .unwrap_or_default();
            out.push_str(&format!(
                "- #{} {}\n    {}\n",
                failure.index, failure.reference, reason
            ));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::copy::CopyResult;
    use crate::error::EntryFailure;
    use std::path::PathBuf;

    #[test]
    fn summary_lists_each_failure_with_reason() {
        let summary = RunSummary {
            results: vec![
                CopyResult {
                    reference: "a.mp3".into(),
                    index: 1,
                    outcome: Ok(PathBuf::from("/out/001_a.mp3")),
                },
                CopyResult {
                    reference: "b.mp3".into(),
                    index: 2,
                    outcome: Err(EntryFailure::SourceNotFound {
                        path: PathBuf::from("/music/b.mp3"),
                    }),
                },
            ],
        };

        let text = render_summary(&summary);
        assert!(text.contains("Processed 2 files, 1 copied."));
        assert!(text.contains("- #2 b.mp3"));
        assert!(text.contains("file not found: /music/b.mp3"));
    }

    #[test]
    fn clean_run_reports_success() {
        let summary = RunSummary {
            results: vec![CopyResult {
                reference: "a.mp3".into(),
                index: 1,
                outcome: Ok(PathBuf::from("/out/001_a.mp3")),
            }],
        };
        assert!(render_summary(&summary).contains("All files were copied successfully."));
    }
}
