use std::fs::File;
use std::io::Write;
use std::path::Path;
use ::csv::Writer;
use tracing::{info, warn};

use crate::errors::ReportError;
use crate::harness::{HeuristicSweep, SweepEntry};


pub const SUMMARY_COLUMNS: [&str; 5] = ["Weight", "Cost", "Length", "Iterations", "Time"];
pub const SUMMARY_HEADER: &str = "Weight,Cost,Length,Iterations,Time";


/// One row per sweep entry, in sweep order
/// Time is in seconds, a weight without a path leaves the other columns empty
pub fn write_summary<W: Write>(writer: W, entries: &[SweepEntry]) -> Result<(), ReportError> {
    let mut out = Writer::from_writer(writer);
    out.write_record(SUMMARY_COLUMNS)?;
    for entry in entries {
        out.write_record(row(entry))?;
    }
    out.flush()?;
    Ok(())
}

/// Every sweep of a heuristic comparison in one table, prefixed with the heuristic name
pub fn write_comparison<W: Write>(writer: W, sweeps: &[HeuristicSweep]) -> Result<(), ReportError> {
    let mut out = Writer::from_writer(writer);
    out.write_record(std::iter::once("Heuristic").chain(SUMMARY_COLUMNS))?;
    for sweep in sweeps {
        for entry in &sweep.entries {
            out.write_record(std::iter::once(sweep.heuristic.name().to_string()).chain(row(entry)))?;
        }
    }
    out.flush()?;
    Ok(())
}

fn row(entry: &SweepEntry) -> [String; 5] {
    match entry.metrics() {
        Some(m) => [
            m.weight.to_string(),
            format!("{:.6}", m.cost),
            m.length.to_string(),
            m.iterations.to_string(),
            format!("{:.9}", m.elapsed.as_secs_f64()),
        ],
        None => {
            warn!("no path at weight {}", entry.weight);
            [entry.weight.to_string(), String::new(), String::new(), String::new(), String::new()]
        }
    }
}

pub fn write_summary_file<P: AsRef<Path>>(path: P, entries: &[SweepEntry]) -> Result<(), ReportError> {
    let path = path.as_ref();
    write_summary(File::create(path)?, entries)?;
    info!(rows = entries.len(), "wrote summary {}", path.display());
    Ok(())
}

pub fn write_comparison_file<P: AsRef<Path>>(path: P, sweeps: &[HeuristicSweep]) -> Result<(), ReportError> {
    let path = path.as_ref();
    write_comparison(File::create(path)?, sweeps)?;
    info!(sweeps = sweeps.len(), "wrote comparison {}", path.display());
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use crate::geometry::Coordinate;
    use crate::harness::{RunMetrics, RunOutcome};
    use crate::heuristics::HeuristicKind;

    fn found(weight: f64, cost: f64, length: usize, iterations: usize, millis: u64) -> SweepEntry {
        SweepEntry {
            weight,
            outcome: RunOutcome::Found {
                metrics: RunMetrics {
                    weight,
                    cost,
                    length,
                    iterations,
                    elapsed: Duration::from_millis(millis),
                },
                path: vec![Coordinate::new(0, 0); length],
            },
        }
    }

    #[test]
    fn test_summary_rows() {
        let entries = vec![
            found(0.0, 7.0, 3, 5, 2),
            found(1.5, 7.25, 4, 3, 1),
            SweepEntry { weight: 2.0, outcome: RunOutcome::NoPath },
        ];
        let mut out = Vec::new();

        write_summary(&mut out, &entries).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec![
            "Weight,Cost,Length,Iterations,Time",
            "0,7.000000,3,5,0.002000000",
            "1.5,7.250000,4,3,0.001000000",
            "2,,,,",
        ]);
    }

    #[test]
    fn test_comparison_rows() {
        let sweeps = vec![
            HeuristicSweep { heuristic: HeuristicKind::Euclidean, entries: vec![found(1.0, 5.0, 2, 2, 0)] },
            HeuristicSweep { heuristic: HeuristicKind::Manhattan, entries: vec![found(1.0, 5.0, 2, 2, 0)] },
        ];
        let mut out = Vec::new();

        write_comparison(&mut out, &sweeps).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Heuristic,Weight,Cost,Length,Iterations,Time");
        assert_eq!(lines[1], "euclidean,1,5.000000,2,2,0.000000000");
        assert_eq!(lines[2], "manhattan,1,5.000000,2,2,0.000000000");
    }

    #[test]
    fn test_header_matches_columns() {
        assert_eq!(SUMMARY_COLUMNS.join(","), SUMMARY_HEADER);

        let mut out = Vec::new();
        write_summary(&mut out, &[]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), format!("{SUMMARY_HEADER}\n"));
    }
}
