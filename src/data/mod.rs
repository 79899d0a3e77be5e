/// Data layer: core types, loading, filtering, and series building.
///
/// Architecture:
/// ```text
///  data/top100avg.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse CSV → ScoreDataset (mtime-keyed cache)
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ ScoreDataset  │  Vec<Record>, distinct divisions/events
///   └──────────────┘
///        │
///        ├──────────────────────┐
///        ▼                      ▼
///   ┌──────────┐          ┌──────────┐
///   │  filter   │ summary  │  series   │ one line per
///   │           │ + rows   │           │ (division, sex, event)
///   └──────────┘          └──────────┘
/// ```
pub mod filter;
pub mod loader;
pub mod model;
pub mod series;
