//! One-time converter: melt a wide year-columned scores CSV into the
//! long form the dashboard loads.
//!
//! Input header:  `Division,Sex,Event,<year>,<year>,...`
//! Output header: `Division,Sex,Event,Year,Points,Shift`
//!
//! Usage: `reshape <wide.csv> <long.csv> [Yes|No]`
//!
//! The optional third argument is the `Shift` flag stamped on every output
//! row (default `No`); the production table is built by converting the
//! shifted and unshifted sources separately and concatenating the results.

use std::env;
use std::io;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};

/// One melted output row.
#[derive(Debug, Clone, PartialEq)]
struct LongRow {
    division: String,
    sex: String,
    event: String,
    year: i32,
    points: f64,
}

/// Melt the wide table into long rows, sorted by Division/Sex/Event/Year.
/// Blank year cells are dropped (not every division tracks every event
/// every year).
fn melt(input: impl io::Read) -> Result<Vec<LongRow>> {
    let mut reader = csv::ReaderBuilder::new().quoting(false).from_reader(input);

    let headers = reader.headers().context("reading header row")?.clone();
    if headers.len() < 4 {
        bail!("expected Division,Sex,Event followed by year columns");
    }
    // First three columns identify the series, the rest are year columns.
    let years: Vec<(usize, i32)> = headers
        .iter()
        .enumerate()
        .skip(3)
        .map(|(i, h)| {
            h.trim()
                .parse::<i32>()
                .map(|y| (i, y))
                .with_context(|| format!("column {h:?} is not a year"))
        })
        .collect::<Result<_>>()?;

    let mut rows = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("row {}", row_no + 2))?;
        let division = record.get(0).unwrap_or("").to_string();
        let sex = record.get(1).unwrap_or("").to_string();
        let event = record.get(2).unwrap_or("").to_string();

        for &(col, year) in &years {
            let raw = record.get(col).unwrap_or("").trim();
            if raw.is_empty() {
                continue;
            }
            let points: f64 = raw.parse().with_context(|| {
                format!("row {}, year {year}: {raw:?} is not a number", row_no + 2)
            })?;
            rows.push(LongRow {
                division: division.clone(),
                sex: sex.clone(),
                event: event.clone(),
                year,
                points,
            });
        }
    }

    rows.sort_by(|a, b| {
        (&a.division, &a.sex, &a.event, a.year).cmp(&(&b.division, &b.sex, &b.event, b.year))
    });
    Ok(rows)
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let (input, output, shift) = match args.as_slice() {
        [i, o] => (PathBuf::from(i), PathBuf::from(o), "No".to_string()),
        [i, o, s] => (PathBuf::from(i), PathBuf::from(o), s.clone()),
        _ => bail!("usage: reshape <wide.csv> <long.csv> [Yes|No]"),
    };
    if shift != "Yes" && shift != "No" {
        bail!("Shift flag must be Yes or No, got {shift:?}");
    }

    let file = std::fs::File::open(&input)
        .with_context(|| format!("opening {}", input.display()))?;
    let rows = melt(file).with_context(|| format!("melting {}", input.display()))?;

    let mut writer = csv::Writer::from_path(&output)
        .with_context(|| format!("creating {}", output.display()))?;
    writer.write_record(["Division", "Sex", "Event", "Year", "Points", "Shift"])?;
    for row in &rows {
        let year = row.year.to_string();
        let points = row.points.to_string();
        writer.write_record([
            row.division.as_str(),
            row.sex.as_str(),
            row.event.as_str(),
            year.as_str(),
            points.as_str(),
            shift.as_str(),
        ])?;
    }
    writer.flush()?;

    println!("Wrote {} rows to {}", rows.len(), output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn melts_year_columns_into_sorted_rows() {
        let wide = "\
Division,Sex,Event,2020,2021
World,Women,100m,1000,1100
NAIA,Men,200m,900,905
";
        let rows = melt(wide.as_bytes()).unwrap();

        assert_eq!(rows.len(), 4);
        // Sorted by Division/Sex/Event/Year: NAIA rows first.
        assert_eq!(rows[0].division, "NAIA");
        assert_eq!(rows[0].year, 2020);
        assert_eq!(rows[1].year, 2021);
        assert_eq!(rows[2].division, "World");
        assert_eq!(rows[2].points, 1000.0);
        assert_eq!(rows[3].points, 1100.0);
    }

    #[test]
    fn blank_cells_are_dropped() {
        let wide = "\
Division,Sex,Event,2020,2021
World,Women,Pole Vault,,1050
";
        let rows = melt(wide.as_bytes()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].year, 2021);
    }

    #[test]
    fn non_year_header_is_rejected() {
        let wide = "Division,Sex,Event,banana\nWorld,Women,100m,1\n";
        assert!(melt(wide.as_bytes()).is_err());
    }

    #[test]
    fn non_numeric_cell_is_rejected() {
        let wide = "Division,Sex,Event,2020\nWorld,Women,100m,fast\n";
        assert!(melt(wide.as_bytes()).is_err());
    }
}
