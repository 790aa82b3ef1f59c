/// Settings for a single CLI run, built from the command line.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Skips the banner printed at startup.
    pub no_banner: bool,
    /// Quiet level.
    ///
    /// `1` hides banner and section headers, `2` also hides informational
    /// log lines. Lookup results and failures are always printed.
    pub quiet: u8,
}
