// File: crates/chart-dataset/src/lib.rs
// Summary: Library entry point; exports the data set, entry, search, and palette API.

pub mod color;
pub mod dataset;
pub mod entry;
pub mod error;
pub mod palette;
pub mod search;
pub mod style;

pub use color::Rgba;
pub use dataset::DataSet;
pub use entry::{Entry, EntryId};
pub use error::{DataSetError, Result};
pub use palette::Palette;
pub use search::{entries_for_x_index, index_for_x_index};
pub use style::{AxisDependency, FontSpec, ValueFormatter, ValueStyle};
