//! Convert indicator tables to Parquet.
//!
//! ```text
//! csv_to_parquet <input.csv|input.json> [output.parquet]
//! csv_to_parquet <data_dir>
//! ```
//!
//! With a directory, every pillar table found in it is written next to the
//! source as `<stem>.parquet`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use vision_dash::data::Pillar;
use vision_dash::data::loader::{load_file, write_parquet};

fn convert(input: &Path, output: &Path) -> Result<()> {
    let dataset = load_file(input)?;
    write_parquet(&dataset, output)
        .with_context(|| format!("writing {}", output.display()))?;
    println!(
        "Wrote {} rows × {} indicators to {}",
        dataset.len(),
        dataset.field_names.len(),
        output.display()
    );
    Ok(())
}

fn convert_dir(dir: &Path) -> Result<()> {
    let mut converted = 0;
    for pillar in Pillar::all() {
        let stem = pillar.file_stem();
        let source = ["csv", "json"]
            .iter()
            .map(|ext| dir.join(format!("{stem}.{ext}")))
            .find(|p| p.is_file());
        match source {
            Some(input) => {
                convert(&input, &dir.join(format!("{stem}.parquet")))?;
                converted += 1;
            }
            None => log::warn!("{pillar}: no {stem}.csv or {stem}.json in {}", dir.display()),
        }
    }
    if converted == 0 {
        bail!("no indicator tables found in {}", dir.display());
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(input) = args.first().map(PathBuf::from) else {
        bail!("usage: csv_to_parquet <input.csv|input.json|data_dir> [output.parquet]");
    };

    if input.is_dir() {
        return convert_dir(&input);
    }

    let output = match args.get(1) {
        Some(out) => PathBuf::from(out),
        None => input.with_extension("parquet"),
    };
    if output == input {
        bail!("refusing to overwrite the input file {}", input.display());
    }
    convert(&input, &output)
}
