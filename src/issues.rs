use std::fmt::Display;

/// Human-readable data-quality problems found while loading and totalling.
///
/// Issues never stop a run; they are shown to the user alongside the report.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Issues(Vec<String>);

impl Issues {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a new issue, after any already recorded.
    pub fn push(&mut self, issue: impl Into<String>) {
        let issue = issue.into();
        log::warn!("{issue}");
        self.0.push(issue);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

/// Formats the issues as a block for the error stream: a header line, one
/// indented line per issue, and a trailing blank line.
impl Display for Issues {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Errors were found; processing continued.")?;
        for issue in &self.0 {
            writeln!(f, "  - {issue}")?;
        }
        writeln!(f)
    }
}
