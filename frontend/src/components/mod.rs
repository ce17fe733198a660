//! UI Components for the medication list.
//!
//! # Layout Components
//! - [`Header`] - Navigation bar
//! - [`Hero`] - Title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`SearchBox`] - Brand name search
//! - [`MedicationTable`] - Table with hover details and row markers
//! - [`Legend`] - Category colors / icons
//! - [`TypePicker`] / [`DurationChart`] / [`DataTable`] - Duration bars, type breakdown, raw rows
//! - [`LogsPanel`] - Server activity (SSE)

mod header;
mod hero;
mod footer;
mod search;
mod table;
mod legend;
mod chart;
mod logs;

pub use header::*;
pub use hero::*;
pub use footer::*;
pub use search::*;
pub use table::*;
pub use legend::*;
pub use chart::*;
pub use logs::*;
