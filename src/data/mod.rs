//! Wildfire Dataset
//!
//! Loading and in-memory representation of the historical wildfire records:
//!
//! - **types**: Region codes and the per-row `FireRecord`
//! - **loader**: Fetch (HTTP) or read (file) the CSV and parse it
//! - **dataset**: The immutable record set shared by every request
//! - **error**: Error types
//!
//! # Load Path
//!
//! ```text
//!   DataSource → fetch/read → CSV rows → FireRecord (Month, Year derived) → FireDataset
//! ```
//!
//! The dataset is loaded exactly once at startup. Any failure on this path is
//! fatal; there is no retry and no partial load.

pub mod dataset;
pub mod error;
pub mod loader;
pub mod types;

pub use dataset::FireDataset;
pub use error::{DataError, DataResult};
pub use loader::{parse_date, DataSource, DatasetLoader, DEFAULT_DATASET_URL, REQUIRED_COLUMNS};
pub use types::{FireRecord, Region};
