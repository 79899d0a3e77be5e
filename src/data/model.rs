use std::collections::BTreeSet;
use std::fmt;

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Column enums
// ---------------------------------------------------------------------------

/// Competitor sex, matching the `Sex` column values exactly.
/// `Ord` gives the fixed Men-before-Women iteration order used everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
pub enum Sex {
    Men,
    Women,
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::Men => write!(f, "Men"),
            Sex::Women => write!(f, "Women"),
        }
    }
}

/// Whether the zero-shift scoring adjustment was applied to `points`,
/// matching the literal `Yes`/`No` values of the `Shift` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Shift {
    Yes,
    No,
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shift::Yes => write!(f, "Yes"),
            Shift::No => write!(f, "No"),
        }
    }
}

// ---------------------------------------------------------------------------
// Record – one row of the scores table
// ---------------------------------------------------------------------------

/// One performance observation (one row of the long-form CSV).
/// Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Record {
    pub division: String,
    pub sex: Sex,
    pub event: String,
    pub year: i32,
    pub points: f64,
    pub shift: Shift,
}

// ---------------------------------------------------------------------------
// ScoreDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset with pre-computed distinct filter choices.
/// Never mutated after construction.
#[derive(Debug, Clone, Default)]
pub struct ScoreDataset {
    /// All records (rows), in file order.
    pub records: Vec<Record>,
    /// Sorted set of distinct divisions, for the filter widgets.
    pub divisions: BTreeSet<String>,
    /// Sorted set of distinct events, for the filter widgets.
    pub events: BTreeSet<String>,
}

impl ScoreDataset {
    /// Build the distinct-value indices from the loaded records.
    pub fn from_records(records: Vec<Record>) -> Self {
        let mut divisions = BTreeSet::new();
        let mut events = BTreeSet::new();

        for r in &records {
            divisions.insert(r.division.clone());
            events.insert(r.event.clone());
        }
        ScoreDataset {
            records,
            divisions,
            events,
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(division: &str, sex: Sex, event: &str) -> Record {
        Record {
            division: division.to_string(),
            sex,
            event: event.to_string(),
            year: 2020,
            points: 1000.0,
            shift: Shift::No,
        }
    }

    #[test]
    fn from_records_collects_distinct_choices() {
        let ds = ScoreDataset::from_records(vec![
            record("World", Sex::Women, "100m"),
            record("World", Sex::Men, "200m"),
            record("NAIA", Sex::Women, "100m"),
        ]);

        assert_eq!(ds.len(), 3);
        assert_eq!(ds.divisions.iter().collect::<Vec<_>>(), ["NAIA", "World"]);
        assert_eq!(ds.events.iter().collect::<Vec<_>>(), ["100m", "200m"]);
    }

    #[test]
    fn empty_dataset() {
        let ds = ScoreDataset::from_records(Vec::new());
        assert!(ds.is_empty());
        assert!(ds.divisions.is_empty());
        assert!(ds.events.is_empty());
    }
}
