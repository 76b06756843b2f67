use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;

use ipca_dashboard::config::Args;
use ipca_dashboard::data::loader::load_source;
use ipca_dashboard::data::model::FilterCriteria;
use ipca_dashboard::data::stats::Statistics;
use ipca_dashboard::export;
use ipca_dashboard::format;
use ipca_dashboard::state::{AppState, Command};

#[derive(Serialize)]
struct Summary<'a> {
    source: &'a str,
    dropped_rows: usize,
    criteria: FilterCriteria,
    overall: Statistics,
    filtered: Statistics,
}

/// Load, filter and summarize once, writing the result to `out`.
pub fn run<W: Write>(args: &Args, out: &mut W) -> Result<()> {
    let source = args.source();
    let mut state = AppState::default();
    state.set_dataset(load_source(&source).with_context(|| format!("loading {source}"))?);
    state.dispatch(Command::Apply(args.criteria()));

    let dropped_rows = state.load_report.as_ref().map_or(0, |r| r.dropped());

    if args.json {
        let summary = Summary {
            source: &args.data,
            dropped_rows,
            criteria: state.criteria,
            overall: state.overall,
            filtered: state.visible,
        };
        serde_json::to_writer_pretty(&mut *out, &summary)?;
        writeln!(out)?;
    } else {
        writeln!(out, "Dataset:  {source} ({} rows dropped)", dropped_rows)?;
        write_stats(out, "Overall", &state.overall)?;
        writeln!(out, "Filter:   {}", state.criteria)?;
        write_stats(out, "Filtered", &state.visible)?;
    }

    if let Some(path) = &args.export {
        let records = state.visible_records();
        export::export_to_path(path, &records)
            .with_context(|| format!("exporting to {}", path.display()))?;
        if !args.json {
            writeln!(out, "Exported {} records to {}", records.len(), path.display())?;
        }
    }
    Ok(())
}

fn write_stats<W: Write>(out: &mut W, title: &str, stats: &Statistics) -> Result<()> {
    let period = match (stats.first_date, stats.last_date) {
        (Some(first), Some(last)) => format!(
            "{} to {}",
            format::month_year(first),
            format::month_year(last)
        ),
        _ => "-".to_string(),
    };
    writeln!(
        out,
        "{title:<9} {} records ({} historical, {} projection), period {period}, \
         average gasoline {}, accumulated IPCA {}",
        stats.count,
        stats.historical_count,
        stats.projection_count,
        format::currency(stats.average_fuel_price),
        format::percent(stats.last_accumulated_ipca),
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    const DATA: &str = "DATA,ANO,MES,Gasolina_Preco,IPCA_Mensal,IPCA_Acumulado,LAG_0\n\
                        2025-10-01,2025,10,6.00,0.09,4.00,0.01\n\
                        2025-11-01,2025,11,6.20,0.18,4.18,0.0333\n\
                        2025-12-01,2025,12,6.40,0.30,4.50,0.0322\n\
                        short,row\n";

    fn args_for(path: &std::path::Path, extra: &[&str]) -> Args {
        let mut argv = vec!["ipca-dashboard", "--headless", "--data", path.to_str().unwrap()];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn text_summary_reports_both_views() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.csv");
        std::fs::write(&path, DATA).unwrap();

        let mut out = Vec::new();
        run(&args_for(&path, &["--category", "projection"]), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("(1 rows dropped)"));
        assert!(text.contains("Overall   3 records (1 historical, 2 projection)"));
        assert!(text.contains("category=projection"));
        assert!(text.contains("Filtered  2 records"));
        assert!(text.contains("average gasoline R$ 6.30"));
    }

    #[test]
    fn json_summary_and_export() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.csv");
        let export_path = dir.path().join("out.csv");
        std::fs::write(&path, DATA).unwrap();

        let mut out = Vec::new();
        run(
            &args_for(
                &path,
                &["--json", "--month", "10", "--export", export_path.to_str().unwrap()],
            ),
            &mut out,
        )
        .unwrap();

        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["overall"]["count"], 3);
        assert_eq!(json["filtered"]["count"], 1);
        assert_eq!(json["criteria"]["month"], 10);
        assert_eq!(json["criteria"]["category"], "all");

        let exported = std::fs::read_to_string(&export_path).unwrap();
        assert_eq!(exported.lines().count(), 2);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut out = Vec::new();
        assert!(run(&args_for(&dir.path().join("nope.csv"), &[]), &mut out).is_err());
    }

    #[test]
    fn exporting_empty_view_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.csv");
        std::fs::write(&path, DATA).unwrap();
        let export_path = dir.path().join("out.csv");

        let mut out = Vec::new();
        let result = run(
            &args_for(&path, &["--year", "1999", "--export", export_path.to_str().unwrap()]),
            &mut out,
        );
        assert!(result.is_err());
        assert!(!export_path.exists());
    }
}
