// src/io/reporting.rs

use crate::error::Result;
use crate::simulation::costs::CostTotals;
use crate::simulation::engine::SimulationTrace;
use log::info;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Serialize)]
struct DensityRecord {
    x: f64,
    density: f64,
}

/// Writes a simulation trace as CSV (`step,inventory,reorder_flag`).
pub fn write_trace<W: Write>(writer: W, trace: &SimulationTrace) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for point in &trace.points {
        wtr.serialize(point)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Writes the simulation trace to a CSV file.
///
/// # Arguments
/// * `path` - The path to save the file (e.g., "results/naive_trace.csv").
/// * `trace` - The trace returned by the simulation engine.
pub fn write_trace_file(path: &Path, trace: &SimulationTrace) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_trace(file, trace)?;
    info!("Exported {} rows to '{}'", trace.len(), path.display());
    Ok(())
}

/// Writes a sampled failure density as CSV (`x,density`).
pub fn write_density_file(path: &Path, curve: &[(f64, f64)]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    for &(x, density) in curve {
        wtr.serialize(DensityRecord { x, density })?;
    }
    wtr.flush()?;
    info!("Exported {} rows to '{}'", curve.len(), path.display());
    Ok(())
}

/// Renders the accumulated-cost table shown after each run.
pub fn format_costs(title: &str, totals: &CostTotals) -> String {
    format!(
        "=== {} ===\nStorage Costs:  {:.2} €\nDowntime Costs: {:.2} €\nOverall Costs:  {:.2} €",
        title, totals.storage_cost, totals.downtime_cost, totals.overall_cost
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::engine::TracePoint;

    #[test]
    fn test_trace_csv_layout() {
        let trace = SimulationTrace {
            points: vec![
                TracePoint {
                    step: 0,
                    inventory: 4,
                    reorder_flag: false,
                },
                TracePoint {
                    step: 1,
                    inventory: 2,
                    reorder_flag: true,
                },
            ],
        };
        let mut buf = Vec::new();
        write_trace(&mut buf, &trace).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "step,inventory,reorder_flag\n0,4,false\n1,2,true\n"
        );
    }

    #[test]
    fn test_format_costs() {
        let totals = CostTotals {
            storage_cost: 1_300.0,
            downtime_cost: 50_000.0,
            overall_cost: 51_300.0,
        };
        let table = format_costs("Naive Policy", &totals);
        assert!(table.starts_with("=== Naive Policy ==="));
        assert!(table.contains("Overall Costs:  51300.00 €"));
    }
}
