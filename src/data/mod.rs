//! Data layer: record types, parsing, classification, filtering and summaries.
//!
//! Architecture:
//! ```text
//!  data.csv (file or URL)
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  fetch text, parse rows → Dataset (sorted by date)
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  Dataset  │  Vec<Record>, year index
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐      ┌──────────┐
//!   │  filter   │ ───▶ │ classify  │  year / month / category predicates
//!   └──────────┘      └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  stats    │  count, mean fuel price, latest accumulated IPCA
//!   └──────────┘
//! ```

pub mod classify;
pub mod filter;
pub mod loader;
pub mod model;
pub mod stats;
