// File: crates/demo/src/main.rs
// Summary: Demo loads (x_index, value) rows from CSV into a DataSet, prints aggregates and x-index lookups.
// Usage: dataset-demo [FILE] [--palette NAME] [-x X ...]

use anyhow::{Context, Result};
use chart_dataset::{palette, DataSet, Entry};
use clap::Parser;
use std::path::{Path, PathBuf};

/// Load `x_index,value` rows into a data set and print its aggregates.
#[derive(Parser, Debug)]
#[command(name = "dataset-demo")]
struct Args {
    /// CSV path (defaults to the bundled stacked sample)
    #[arg(value_name = "FILE")]
    file: Option<String>,

    /// Palette preset name (default, liberty, joyful, pastel, colorful, vordiplom)
    #[arg(long, default_value = "default")]
    palette: String,

    /// X-indices to look up; every x in range when omitted
    #[arg(short = 'x', long = "x-index", allow_negative_numbers = true)]
    queries: Vec<i64>,
}

fn main() -> Result<()> {
    let Args { file, palette: palette_name, mut queries } = Args::parse();

    // Fall back to the bundled sample (supports .csv/.cvs swap)
    let raw = file.unwrap_or_else(|| {
        concat!(env!("CARGO_MANIFEST_DIR"), "/data/stacked_sample.csv").to_string()
    });
    let (path, used_alt) = resolve_path(&raw)?;
    println!("Using input file: {}", path.display());
    if used_alt {
        println!("  (extension swapped between .csv/.cvs)");
    }

    let entries = load_entries_csv(&path)
        .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    if entries.is_empty() {
        anyhow::bail!("no rows loaded; check headers/delimiter.");
    }

    let label = path.file_stem().and_then(|s| s.to_str()).unwrap_or("DataSet");
    let mut set = DataSet::new(entries, label);
    set.set_palette(&palette::find(&palette_name));

    println!("{set}");
    if !set.is_sorted_by_x() {
        println!("Warning: rows are not ascending by x-index; lookups are best-effort.");
    }
    match set.y_bounds() {
        Some((lo, hi)) => println!("Value range: [{}, {}]", set.format_value(lo), set.format_value(hi)),
        None => println!("Value range: (empty)"),
    }
    println!("Sum of |value|: {}", set.format_value(set.y_value_sum()));

    if queries.is_empty() {
        // Default: look up every x-index in range plus one past the end
        let last = set.entries().last().map_or(0, |e| e.x_index);
        queries = (set.entries()[0].x_index..=last + 1).collect();
    }

    for x in queries {
        let run = set.entries_for_x_index(x);
        let color = set
            .color_at(x)
            .map_or_else(|| "-".to_string(), |c| c.to_string());
        if run.is_empty() {
            let near = set.entry_for_x_index(x).map(|e| e.x_index);
            println!("x={x:>4}  no exact entry (closest match: {near:?})  color {color}");
        } else {
            let values = run.iter().map(|e| set.format_value(e.value)).collect::<Vec<_>>();
            println!("x={x:>4}  {} entr{}: [{}]  color {color}",
                run.len(),
                if run.len() == 1 { "y" } else { "ies" },
                values.join(", "));
        }
    }

    Ok(())
}

/// Resolve path, trying .csv/.cvs swap if needed.
/// Returns (actual_path, used_alt)
fn resolve_path(raw: &str) -> Result<(PathBuf, bool)> {
    let p = Path::new(raw);
    if p.exists() {
        return Ok((p.to_path_buf(), false));
    }
    if let Some(alt) = swap_ext(p) {
        if alt.exists() {
            return Ok((alt, true));
        }
    }
    anyhow::bail!("file not found: {}", p.display());
}

/// Load `x_index,value` rows. Rows without an x column get their row number as x-index.
fn load_entries_csv(path: &Path) -> Result<Vec<Entry>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect::<Vec<_>>();
    println!("Headers: {:?}", headers);

    let idx = |names: &[&str]| -> Option<usize> {
        headers.iter().position(|h| names.contains(&h.as_str()))
    };

    let i_x = idx(&["x_index", "xindex", "x", "index"]);
    let i_value = idx(&["value", "y", "val", "close"])
        .context("could not find a value column (value/y/val/close)")?;

    let mut out = Vec::new();
    let mut skipped = 0usize;

    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let x = match i_x {
            Some(ix) => rec.get(ix).and_then(|s| s.trim().parse::<i64>().ok()),
            None => Some(row as i64),
        };
        let value = rec.get(i_value).and_then(|s| s.trim().parse::<f64>().ok());
        match (x, value) {
            (Some(x), Some(v)) => out.push(Entry::new(x, v)),
            _ => skipped += 1,
        }
    }
    if skipped > 0 {
        eprintln!("Skipped {skipped} unparseable rows");
    }
    Ok(out)
}

fn swap_ext(p: &Path) -> Option<PathBuf> {
    let mut alt = p.to_path_buf();
    let ext = p.extension()?.to_string_lossy().to_lowercase();
    match ext.as_str() {
        "cvs" => {
            alt.set_extension("csv");
            Some(alt)
        }
        "csv" => {
            alt.set_extension("cvs");
            Some(alt)
        }
        _ => None,
    }
}
