#![doc = include_str!("../README.md")]
use std::{path::Path, time::Instant};

mod amount;
mod catalogue;
mod input;
mod issues;
mod report;
mod sales;

pub use amount::Amount;
pub use catalogue::{Catalogue, EntryError};
pub use input::{read_json, Input, LoadError};
pub use issues::Issues;
pub use report::{Report, RESULTS_FILE};
pub use sales::{read_sales, total_sales, RecordError, Sale};

/// Totals the sales in the file at `sales` using the price catalogue at
/// `catalogue`, timing the whole computation.
///
/// Problems with individual catalogue entries or sales records are added to
/// `issues` and don't stop the computation.
///
/// # Errors
///
/// Returns any errors from [`Catalogue::from_file`] or [`read_sales`]. The
/// catalogue is read first, so if both files are unusable, the error
/// concerns the catalogue.
pub fn compute(
    catalogue: impl AsRef<Path>,
    sales: impl AsRef<Path>,
    issues: &mut Issues,
) -> Result<Report, LoadError> {
    let start = Instant::now();
    let catalogue = Catalogue::from_file(catalogue, issues)?;
    let records = read_sales(sales, issues)?;
    let total = total_sales(&catalogue, records, issues);
    Ok(Report::new(total, start.elapsed()))
}
