/// How much the solver logs to stderr. Each level maps onto a
/// [`tracing::Level`] and includes everything the quieter levels log.
#[derive(clap::ValueEnum, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Only failures of the solver itself, such as an unreadable config or an
    /// invalid problem
    Silent,
    /// Start and end of every search with its expanded, generated and pruned
    /// counts, and one line per report row
    #[default]
    Normal,
    /// Each cheaper meeting point of a bidirectional search and the bound at
    /// which iterative deepening stopped
    Verbose,
    /// Every node as it is expanded or tried
    Debug,
}

impl From<Verbosity> for tracing::Level {
    fn from(value: Verbosity) -> Self {
        match value {
            Verbosity::Silent => tracing::Level::ERROR,
            Verbosity::Normal => tracing::Level::INFO,
            Verbosity::Verbose => tracing::Level::DEBUG,
            Verbosity::Debug => tracing::Level::TRACE,
        }
    }
}
