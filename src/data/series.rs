use super::filter::FilterState;
use super::model::{Record, ScoreDataset};

// ---------------------------------------------------------------------------
// Chart bounds
// ---------------------------------------------------------------------------

/// Minimum chart height in pixels.
pub const MIN_CHART_HEIGHT: f64 = 800.0;

// Initial bound sentinels, tuned to the known score range of the source
// table (World Athletics points top out below 1400).
const MIN_POINTS_SENTINEL: f64 = 1400.0;
const MAX_POINTS_SENTINEL: f64 = 0.0;

/// Running min/max over every plotted point, driving the chart height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartBounds {
    pub min_points: f64,
    pub max_points: f64,
    populated: bool,
}

impl Default for ChartBounds {
    fn default() -> Self {
        Self {
            min_points: MIN_POINTS_SENTINEL,
            max_points: MAX_POINTS_SENTINEL,
            populated: false,
        }
    }
}

impl ChartBounds {
    fn observe(&mut self, points: f64) {
        self.min_points = self.min_points.min(points);
        self.max_points = self.max_points.max(points);
        self.populated = true;
    }

    /// Whether no point has been folded in at all.
    pub fn is_empty(&self) -> bool {
        !self.populated
    }

    /// Dynamic chart height: five pixels per point of spread, floored at
    /// [`MIN_CHART_HEIGHT`].  An entirely empty result stays at the floor
    /// instead of letting the untouched sentinels produce a negative span.
    pub fn chart_height(&self) -> f64 {
        if !self.populated {
            return MIN_CHART_HEIGHT;
        }
        MIN_CHART_HEIGHT.max((self.max_points - self.min_points) * 5.0)
    }
}

// ---------------------------------------------------------------------------
// Series
// ---------------------------------------------------------------------------

/// One plotted line: a (division, sex, event) triple's points over years.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    /// Legend label, `"<division> <sex> <event>"`.
    pub name: String,
    /// `[year, points]` pairs sorted by year.
    pub points: Vec<[f64; 2]>,
}

/// Build one line series per selected (division, sex, event) triple.
///
/// Rows are first restricted to the active shift mode, then the cross
/// product of the selections is walked division-outer, sex-middle,
/// event-inner, which fixes the legend order.  Triples with no matching
/// rows are skipped silently and leave the bounds untouched; not every
/// combination exists in the data.
pub fn build_series(dataset: &ScoreDataset, filters: &FilterState) -> (Vec<Series>, ChartBounds) {
    let shifted: Vec<&Record> = dataset
        .records
        .iter()
        .filter(|r| filters.shift_mode.selects(r.shift))
        .collect();

    let mut series = Vec::new();
    let mut bounds = ChartBounds::default();

    for division in &filters.divisions {
        for sex in &filters.sexes {
            for event in &filters.events {
                let mut points: Vec<[f64; 2]> = shifted
                    .iter()
                    .filter(|r| {
                        r.sex == *sex && r.division == *division && r.event == *event
                    })
                    .map(|r| [f64::from(r.year), r.points])
                    .collect();
                if points.is_empty() {
                    continue;
                }
                points.sort_by(|a, b| a[0].total_cmp(&b[0]));
                for p in &points {
                    bounds.observe(p[1]);
                }
                series.push(Series {
                    name: format!("{division} {sex} {event}"),
                    points,
                });
            }
        }
    }

    (series, bounds)
}
