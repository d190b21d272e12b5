use std::{
    fmt::Display,
    fs,
    io::{self, Write},
    path::Path,
    time::Duration,
};

use crate::{amount::Amount, issues::Issues};

/// The name of the file the report is stored in, by default.
pub const RESULTS_FILE: &str = "SalesResults.txt";

/// Holds the result of a run: the sales total and how long it took to work
/// out.
///
/// To get a printable version of the report, use its [`Display`]
/// implementation. To show it to the user and store it, use
/// [`Report::publish`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Report {
    total: Amount,
    elapsed: Duration,
}

impl Report {
    #[must_use]
    pub fn new(total: Amount, elapsed: Duration) -> Self {
        Self { total, elapsed }
    }

    #[must_use]
    pub fn total(&self) -> Amount {
        self.total
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Writes the report text to `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns any errors from writing the file.
    pub fn save(&self, path: impl AsRef<Path>) -> io::Result<()> {
        fs::write(path, self.to_string())
    }

    /// Shows the report to the user and stores it at `path`.
    ///
    /// Any `issues` are written to `err` first, followed by the report on
    /// `out`. Failing to store the report is not an error: it is explained
    /// on `err`, and the function returns `Ok(false)`.
    ///
    /// # Errors
    ///
    /// Returns errors only from writing to `out` or `err`.
    pub fn publish(
        &self,
        issues: &Issues,
        path: impl AsRef<Path>,
        out: &mut impl Write,
        err: &mut impl Write,
    ) -> io::Result<bool> {
        let path = path.as_ref();
        if !issues.is_empty() {
            write!(err, "{issues}")?;
            err.flush()?;
        }
        writeln!(out, "{self}")?;
        out.flush()?;
        match self.save(path) {
            Ok(()) => {
                writeln!(out, "Results stored successfully in {}", path.display())?;
                Ok(true)
            }
            Err(e) => {
                log::error!("storing report in {}: {e}", path.display());
                writeln!(err, "Could not store results in {}: {e}", path.display())?;
                Ok(false)
            }
        }
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Total sales: {}", self.total)?;
        write!(f, "Elapsed time: {:.4} s", self.elapsed.as_secs_f64())
    }
}
