//! Report rows and writers.
//!
//! Sweep results go to semicolon-delimited CSV files; the comparison table
//! is printed to the console or emitted as JSON.

use std::path::Path;

use pricer_pricing::comparison::TimedNpv;
use serde::{Deserialize, Serialize};

use crate::market::OptionKind;
use crate::Result;

/// File name of the time-step sweep.
pub const TIME_SWEEP_FILE: &str = "results_time.csv";
/// File name of the sample-count sweep.
pub const SAMPLES_SWEEP_FILE: &str = "results_samples.csv";

/// One two-way comparison in a sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepRow {
    #[serde(rename = "Option Type")]
    pub option_type: String,
    #[serde(rename = "Time Steps")]
    pub time_steps: usize,
    #[serde(rename = "Samples")]
    pub samples: usize,
    #[serde(rename = "Error")]
    pub error: f64,
    #[serde(rename = "Time(non constant) - Time(Constant) in (s)")]
    pub elapsed_seconds: f64,
}

/// Writes `rows` with a header line, `;` separated.
pub fn write_sweep(path: &Path, rows: &[SweepRow]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .has_headers(true)
        .from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Reads a file written by [`write_sweep`].
#[cfg(test)]
pub fn read_sweep(path: &Path) -> Result<Vec<SweepRow>> {
    let mut reader = csv::ReaderBuilder::new().delimiter(b';').from_path(path)?;
    let rows = reader
        .deserialize()
        .collect::<std::result::Result<Vec<SweepRow>, _>>()?;
    Ok(rows)
}

/// One line of the three-way comparison table.
#[derive(Debug, Clone, Serialize)]
pub struct TableRow {
    pub kind: OptionKind,
    pub legacy: TimedNpv,
    pub live: TimedNpv,
    pub frozen: TimedNpv,
    /// Closed-form price on the frozen parameters, European only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analytic: Option<f64>,
}

impl TableRow {
    /// `|NPV_legacy - NPV_live|`
    pub fn live_error(&self) -> f64 {
        (self.legacy.npv - self.live.npv).abs()
    }

    /// `|NPV_legacy - NPV_frozen|`
    pub fn frozen_error(&self) -> f64 {
        (self.legacy.npv - self.frozen.npv).abs()
    }
}

const WIDTH: usize = 15;

/// Renders the console table.
pub fn render_table(rows: &[TableRow]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:>w$}{:>w2$}{:>w2$}{:>w2$}\n",
        "",
        "old engine",
        "non constant",
        "constant",
        w = WIDTH,
        w2 = 2 * WIDTH
    ));
    out.push_str(&format!(
        "{:>w$}{:>w$}{:>w$}{:>w$}{:>w$}{:>w$}{:>w$}\n",
        "kind",
        "NPV",
        "time [s]",
        "NPV",
        "time [s]",
        "NPV",
        "time [s]",
        w = WIDTH
    ));
    for row in rows {
        out.push_str(&format!(
            "{:>w$}{:>w$.6}{:>w$.6}{:>w$.6}{:>w$.6}{:>w$.6}{:>w$.6}\n",
            row.kind.to_string(),
            row.legacy.npv,
            row.legacy.elapsed_seconds,
            row.live.npv,
            row.live.elapsed_seconds,
            row.frozen.npv,
            row.frozen.elapsed_seconds,
            w = WIDTH
        ));
    }
    let analytic: Vec<_> = rows
        .iter()
        .filter_map(|row| row.analytic.map(|price| (row.kind, price)))
        .collect();
    if !analytic.is_empty() {
        out.push('\n');
        for (kind, price) in analytic {
            out.push_str(&format!(
                "{:>w$}{:>w$.6}  (analytic, frozen parameters)\n",
                kind.to_string(),
                price,
                w = WIDTH
            ));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn timed(engine: &'static str, npv: f64, elapsed_seconds: f64) -> TimedNpv {
        TimedNpv {
            engine,
            npv,
            error_estimate: 0.01,
            elapsed_seconds,
        }
    }

    fn table_row() -> TableRow {
        TableRow {
            kind: OptionKind::European,
            legacy: timed("legacy", 3.85, 0.5),
            live: timed("live", 3.85, 0.6),
            frozen: timed("frozen", 3.84, 0.2),
            analytic: Some(3.8412),
        }
    }

    #[test]
    fn test_sweep_csv_layout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(TIME_SWEEP_FILE);
        let rows = vec![
            SweepRow {
                option_type: OptionKind::European.report_label().to_string(),
                time_steps: 5,
                samples: 1000,
                error: 0.0125,
                elapsed_seconds: 0.25,
            },
            SweepRow {
                option_type: OptionKind::Barrier.report_label().to_string(),
                time_steps: 10,
                samples: 1000,
                error: 0.5,
                elapsed_seconds: -0.01,
            },
        ];
        write_sweep(&path, &rows).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Option Type;Time Steps;Samples;Error;Time(non constant) - Time(Constant) in (s)"
        );
        assert_eq!(lines.next().unwrap(), "European Option;5;1000;0.0125;0.25");
        assert_eq!(lines.next().unwrap(), "Barrier Option;10;1000;0.5;-0.01");
        assert!(lines.next().is_none());

        assert_eq!(read_sweep(&path).unwrap(), rows);
    }

    #[test]
    fn test_write_sweep_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join(TIME_SWEEP_FILE);
        assert!(write_sweep(&path, &[]).is_err());
    }

    #[test]
    fn test_table_row_errors() {
        let row = table_row();
        assert_relative_eq!(row.live_error(), 0.0);
        assert_relative_eq!(row.frozen_error(), 0.01, epsilon = 1e-12);
    }

    #[test]
    fn test_render_table() {
        let table = render_table(&[table_row()]);
        let lines: Vec<_> = table.lines().collect();
        assert!(lines[0].contains("old engine"));
        assert!(lines[1].trim_start().starts_with("kind"));
        assert!(lines[2].contains("European"));
        assert!(lines[2].contains("3.850000"));
        assert!(table.contains("analytic"));
    }

    #[test]
    fn test_table_row_json() {
        let json = serde_json::to_value(table_row()).unwrap();
        assert_eq!(json["kind"], "european");
        assert_eq!(json["frozen"]["engine"], "frozen");
        assert_eq!(json["analytic"], 3.8412);

        let mut row = table_row();
        row.analytic = None;
        let json = serde_json::to_value(row).unwrap();
        assert!(json.get("analytic").is_none());
    }
}
