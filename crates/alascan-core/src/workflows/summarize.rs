use crate::core::io::bals::{BalsError, BalsFile};
use crate::core::io::traits::ScanFile;
use crate::engine::aggregate::Aggregator;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::statistics::ScanSummary;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

/// Averages every result file named in `list_path`.
#[instrument(skip_all, name = "summarize_workflow", fields(list = %list_path.display()))]
pub fn run(list_path: &Path, reporter: &ProgressReporter) -> Result<ScanSummary, EngineError> {
    let paths = super::read_result_list(list_path)?;
    summarize_files(&paths, reporter)
}

/// Averages the given result files in order.
///
/// Files too short to hold a residue table are skipped with a warning and do
/// not count as models. Any other failure aborts the run.
pub fn summarize_files(
    paths: &[PathBuf],
    reporter: &ProgressReporter,
) -> Result<ScanSummary, EngineError> {
    reporter.report(Progress::PassStart {
        name: "Averaging models",
        total_files: paths.len() as u64,
    });
    info!(files = paths.len(), "Averaging alanine-scan result files.");

    let mut aggregator = Aggregator::new();
    for path in paths {
        let Some(model) = load_model(path, reporter)? else {
            continue;
        };
        aggregator
            .add_model(model)
            .map_err(|source| EngineError::Alignment {
                path: path.clone(),
                source,
            })?;
        debug!(path = %path.display(), models = aggregator.model_count(), "Model added.");
        reporter.report(Progress::FileDone { path: path.clone() });
    }

    let processed = aggregator.model_count();
    reporter.report(Progress::PassFinish { processed });

    let scan = aggregator
        .finish()
        .ok_or(EngineError::NoUsableResults(paths.len()))?;
    info!(
        models = scan.model_count(),
        residues = scan.residues.len(),
        "Computed averages and standard deviations."
    );
    Ok(ScanSummary::new(scan))
}

fn load_model(path: &Path, reporter: &ProgressReporter) -> Result<Option<BalsFile>, EngineError> {
    match BalsFile::read_from_path(path) {
        Ok(model) => Ok(Some(model)),
        Err(BalsError::TooShort { found, required }) => {
            warn!(
                path = %path.display(),
                found,
                required,
                "Result file has too few lines; skipping it."
            );
            reporter.report(Progress::FileSkipped {
                path: path.to_path_buf(),
                reason: format!("{} lines, {} required", found, required),
            });
            Ok(None)
        }
        Err(BalsError::Io(source)) => Err(EngineError::io(path, source)),
        Err(source) => Err(EngineError::ResultFile {
            path: path.to_path_buf(),
            source,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::io::bals::tests::result_file_text;
    use std::fs;
    use std::sync::{Arc, Mutex};
    use tempfile::TempDir;

    const LYS: &str = "1 262 LYS A -10.0 1.0 0.5 -4.0 0.2 0.1 5";
    const ASP: &str = "2 263 ASP A -8.0 -2.0 -1.0 -3.0 0.4 0.2 4";

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    fn row(number: u32, name: &str, inter_ddg: f64) -> String {
        format!("1 {} {} A -10.0 {} 0.5 -4.0 0.2 0.1 5", number, name, inter_ddg)
    }

    #[test]
    fn averages_wild_type_energies_and_residue_rows() {
        let dir = TempDir::new().unwrap();
        let first = write(&dir, "a.bals", &result_file_text(-100.0, -50.0, &[LYS, ASP]));
        let second = write(
            &dir,
            "b.bals",
            &result_file_text(-102.0, -52.0, &[&row(262, "LYS", 3.0), &row(263, "ASP", -4.0)]),
        );

        let summary = summarize_files(&[first, second], &ProgressReporter::new()).unwrap();

        assert_eq!(summary.scan.model_count(), 2);
        assert_eq!(summary.scan.inter_wild_type, -101.0);
        assert_eq!(summary.scan.intra_wild_type, -51.0);
        assert_eq!(summary.scan.residues[0].energies.inter_ddg, 2.0);
        assert_eq!(summary.scan.residues[1].energies.inter_ddg, -3.0);
        assert_eq!(summary.standard_deviations, vec![1.0, 1.0]);
    }

    #[test]
    fn short_first_file_is_skipped_without_shifting_rows() {
        let dir = TempDir::new().unwrap();
        let short = write(&dir, "short.bals", "# truncated\n# output\n");
        let first = write(&dir, "a.bals", &result_file_text(-100.0, -50.0, &[LYS]));
        let second = write(&dir, "b.bals", &result_file_text(-100.0, -50.0, &[&row(262, "LYS", 3.0)]));

        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&events);
        let reporter = ProgressReporter::with_callback(Box::new(move |event| {
            sink.lock().unwrap().push(event);
        }));

        let summary = summarize_files(&[short.clone(), first, second], &reporter).unwrap();

        assert_eq!(summary.scan.model_count(), 2);
        assert_eq!(summary.scan.residues[0].energies.inter_ddg, 2.0);
        assert_eq!(summary.scan.header[0], "# header line 0");
        let events = events.lock().unwrap();
        assert!(events.iter().any(
            |e| matches!(e, Progress::FileSkipped { path, .. } if *path == short)
        ));
        assert!(events.iter().any(|e| matches!(e, Progress::PassFinish { processed: 2 })));
    }

    #[test]
    fn misaligned_residue_aborts_with_path() {
        let dir = TempDir::new().unwrap();
        let first = write(&dir, "a.bals", &result_file_text(-100.0, -50.0, &[LYS]));
        let second = write(&dir, "b.bals", &result_file_text(-100.0, -50.0, &[&row(262, "ARG", 1.0)]));

        let err = summarize_files(&[first, second.clone()], &ProgressReporter::new()).unwrap_err();

        match err {
            EngineError::Alignment { path, .. } => assert_eq!(path, second),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn header_only_file_is_skipped_wherever_it_is_listed() {
        let dir = TempDir::new().unwrap();
        let header_only = write(&dir, "empty.bals", &result_file_text(-100.0, -50.0, &[]));
        let model = write(&dir, "good.bals", &result_file_text(-100.0, -50.0, &[LYS]));

        for paths in [
            [header_only.clone(), model.clone()],
            [model.clone(), header_only.clone()],
        ] {
            let summary = summarize_files(&paths, &ProgressReporter::new()).unwrap();
            assert_eq!(summary.scan.model_count(), 1);
            assert_eq!(summary.scan.residues.len(), 1);
            assert_eq!(summary.scan.residues[0].energies.inter_ddg, 1.0);
        }
    }

    #[test]
    fn only_short_files_yield_no_usable_results() {
        let dir = TempDir::new().unwrap();
        let short = write(&dir, "short.bals", "# nothing\n");

        let err = summarize_files(&[short], &ProgressReporter::new()).unwrap_err();
        assert!(matches!(err, EngineError::NoUsableResults(1)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.bals");

        let err = summarize_files(&[missing], &ProgressReporter::new()).unwrap_err();
        assert!(matches!(err, EngineError::Io { .. }));
    }

    #[test]
    fn bad_number_is_a_result_file_error() {
        let dir = TempDir::new().unwrap();
        let bad = write(
            &dir,
            "bad.bals",
            &result_file_text(-1.0, -1.0, &["1 262 LYS A -10.0 x 0.5 -4.0 0.2 0.1 5"]),
        );

        let err = summarize_files(&[bad], &ProgressReporter::new()).unwrap_err();
        assert!(matches!(err, EngineError::ResultFile { .. }));
    }

    #[test]
    fn run_reads_paths_from_list_file() {
        let dir = TempDir::new().unwrap();
        let model = write(&dir, "a.bals", &result_file_text(-100.0, -50.0, &[LYS, ASP]));
        let list = write(&dir, "list.txt", &format!("{}\n\n", model.display()));

        let summary = run(&list, &ProgressReporter::new()).unwrap();
        assert_eq!(summary.scan.residues.len(), 2);
        assert_eq!(summary.standard_deviations, vec![0.0, 0.0]);
    }
}
