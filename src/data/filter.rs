use std::collections::BTreeSet;
use std::fmt;

use super::model::{ScoreDataset, Sex, Shift};

// ---------------------------------------------------------------------------
// Shift mode
// ---------------------------------------------------------------------------

/// Which side of the zero-shift adjustment the chart displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShiftMode {
    #[default]
    Unshifted,
    Shifted,
}

impl ShiftMode {
    pub const ALL: [ShiftMode; 2] = [ShiftMode::Unshifted, ShiftMode::Shifted];

    /// Whether a record with the given `Shift` flag belongs to this mode.
    pub fn selects(self, shift: Shift) -> bool {
        match self {
            ShiftMode::Shifted => shift == Shift::Yes,
            ShiftMode::Unshifted => shift == Shift::No,
        }
    }
}

impl fmt::Display for ShiftMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShiftMode::Unshifted => write!(f, "Unshifted"),
            ShiftMode::Shifted => write!(f, "Shifted"),
        }
    }
}

// ---------------------------------------------------------------------------
// Filter state
// ---------------------------------------------------------------------------

/// Current filter selections for one session.
///
/// Values are trusted to come from the same choice lists the UI presents;
/// nothing is validated against the dataset.  A selected value that matches
/// no rows simply produces an empty result downstream.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    pub events: BTreeSet<String>,
    pub divisions: BTreeSet<String>,
    pub sexes: BTreeSet<Sex>,
    pub shift_mode: ShiftMode,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            events: BTreeSet::from(["100m".to_string()]),
            divisions: BTreeSet::from(["World".to_string()]),
            sexes: BTreeSet::from([Sex::Women]),
            shift_mode: ShiftMode::Unshifted,
        }
    }
}

impl FilterState {
    // Wholesale-replacement setters: each call discards the prior selection.

    pub fn set_events(&mut self, events: BTreeSet<String>) {
        self.events = events;
    }

    pub fn set_divisions(&mut self, divisions: BTreeSet<String>) {
        self.divisions = divisions;
    }

    pub fn set_sexes(&mut self, sexes: BTreeSet<Sex>) {
        self.sexes = sexes;
    }

    pub fn set_shift_mode(&mut self, mode: ShiftMode) {
        self.shift_mode = mode;
    }

    /// Toggle one event in or out of the selection (checkbox behaviour).
    pub fn toggle_event(&mut self, event: &str) {
        if !self.events.remove(event) {
            self.events.insert(event.to_string());
        }
    }

    pub fn toggle_division(&mut self, division: &str) {
        if !self.divisions.remove(division) {
            self.divisions.insert(division.to_string());
        }
    }

    pub fn toggle_sex(&mut self, sex: Sex) {
        if !self.sexes.remove(&sex) {
            self.sexes.insert(sex);
        }
    }

    /// Three-line description of the active selections, shown above the
    /// chart whether or not any rows match.
    pub fn summarize(&self) -> String {
        let events = join(self.events.iter());
        let divisions = join(self.divisions.iter());
        let sexes = join(self.sexes.iter());
        format!(
            "Showing results for the following events: {events}.\n\
             Showing results for the following divisions: {divisions}.\n\
             Showing results for: {sexes}"
        )
    }
}

fn join<T: fmt::Display>(values: impl Iterator<Item = T>) -> String {
    values
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

// ---------------------------------------------------------------------------
// Row filtering
// ---------------------------------------------------------------------------

/// Return indices of records whose sex, division, and event are each members
/// of the corresponding selected set.
///
/// Membership within a dimension is additive (OR); dimensions combine with
/// AND.  An empty set matches nothing.  `Shift` is deliberately not consulted
/// here; shift filtering belongs to the series builder.
pub fn filtered_indices(dataset: &ScoreDataset, filters: &FilterState) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, r)| {
            filters.sexes.contains(&r.sex)
                && filters.divisions.contains(r.division.as_str())
                && filters.events.contains(r.event.as_str())
        })
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Record;

    fn record(division: &str, sex: Sex, event: &str, year: i32) -> Record {
        Record {
            division: division.to_string(),
            sex,
            event: event.to_string(),
            year,
            points: 1000.0,
            shift: Shift::No,
        }
    }

    fn sample_dataset() -> ScoreDataset {
        ScoreDataset::from_records(vec![
            record("World", Sex::Women, "100m", 2020),
            record("World", Sex::Women, "200m", 2020),
            record("World", Sex::Men, "100m", 2020),
            record("NAIA", Sex::Women, "100m", 2020),
        ])
    }

    fn filters(events: &[&str], divisions: &[&str], sexes: &[Sex]) -> FilterState {
        FilterState {
            events: events.iter().map(|s| s.to_string()).collect(),
            divisions: divisions.iter().map(|s| s.to_string()).collect(),
            sexes: sexes.iter().copied().collect(),
            shift_mode: ShiftMode::Unshifted,
        }
    }

    #[test]
    fn defaults_match_initial_selection() {
        let f = FilterState::default();
        assert!(f.events.contains("100m"));
        assert!(f.divisions.contains("World"));
        assert!(f.sexes.contains(&Sex::Women));
        assert_eq!(f.shift_mode, ShiftMode::Unshifted);
    }

    #[test]
    fn matches_require_membership_in_every_dimension() {
        let ds = sample_dataset();
        let idx = filtered_indices(&ds, &FilterState::default());
        assert_eq!(idx, vec![0]);
    }

    #[test]
    fn selections_are_additive_within_a_dimension() {
        let ds = sample_dataset();
        let f = filters(&["100m", "200m"], &["World"], &[Sex::Women]);
        assert_eq!(filtered_indices(&ds, &f), vec![0, 1]);

        let f = filters(&["100m"], &["World", "NAIA"], &[Sex::Women, Sex::Men]);
        assert_eq!(filtered_indices(&ds, &f), vec![0, 2, 3]);
    }

    #[test]
    fn removing_a_value_never_grows_the_result() {
        let ds = sample_dataset();
        let wide = filters(&["100m", "200m"], &["World", "NAIA"], &[Sex::Women, Sex::Men]);
        let wide_len = filtered_indices(&ds, &wide).len();

        let mut narrow = wide.clone();
        narrow.toggle_event("200m");
        assert!(filtered_indices(&ds, &narrow).len() <= wide_len);

        narrow.toggle_sex(Sex::Men);
        assert!(filtered_indices(&ds, &narrow).len() <= wide_len);
    }

    #[test]
    fn empty_sets_match_nothing() {
        let ds = sample_dataset();
        let f = filters(&[], &[], &[]);
        assert!(filtered_indices(&ds, &f).is_empty());
    }

    #[test]
    fn unmatched_values_yield_empty_result_not_error() {
        let ds = sample_dataset();
        let f = filters(&["Pole Vault"], &["World"], &[Sex::Women]);
        assert!(filtered_indices(&ds, &f).is_empty());
    }

    #[test]
    fn shift_is_not_filtered_here() {
        let mut records = vec![record("World", Sex::Women, "100m", 2020)];
        records[0].shift = Shift::Yes;
        records.push(record("World", Sex::Women, "100m", 2021));
        let ds = ScoreDataset::from_records(records);

        // Default mode is Unshifted, yet both rows pass.
        let idx = filtered_indices(&ds, &FilterState::default());
        assert_eq!(idx, vec![0, 1]);
    }

    #[test]
    fn setters_replace_wholesale() {
        let mut f = FilterState::default();
        f.set_events(BTreeSet::from(["200m".to_string(), "400m".to_string()]));
        assert!(!f.events.contains("100m"));
        assert_eq!(f.events.len(), 2);

        f.set_sexes(BTreeSet::from([Sex::Men]));
        assert_eq!(f.sexes.iter().collect::<Vec<_>>(), [&Sex::Men]);

        f.set_shift_mode(ShiftMode::Shifted);
        assert_eq!(f.shift_mode, ShiftMode::Shifted);
    }

    #[test]
    fn summary_names_every_selection() {
        let f = filters(&["100m", "200m"], &["World"], &[Sex::Women]);
        let summary = f.summarize();
        let lines: Vec<&str> = summary.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("100m, 200m"));
        assert!(lines[1].contains("World"));
        assert!(lines[2].contains("Women"));
    }

    #[test]
    fn summary_is_independent_of_matches() {
        let f = filters(&["Hammer Throw"], &["Mars"], &[Sex::Men]);
        let summary = f.summarize();
        assert!(summary.contains("Hammer Throw"));
        assert!(summary.contains("Mars"));
    }
}
