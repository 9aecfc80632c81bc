//! Command-line options shared by the driver binaries.

use clap::{Args, ValueEnum};
use statespace_core::{TracingConfig, TracingFormat, TracingSetup};
use statespace_search::search::Strategy;
use tracing::Level;

/// Which exploration orders to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyChoice {
    /// Breadth-first; shortest routes.
    Bfs,
    /// Depth-first with an explicit stack.
    Dfs,
    /// Depth-first on the call stack.
    DfsRecursive,
    /// All three, one after the other.
    All,
}

impl StrategyChoice {
    /// The strategies this choice expands to.
    #[must_use]
    pub fn strategies(self) -> Vec<Strategy> {
        match self {
            StrategyChoice::Bfs => vec![Strategy::BreadthFirst],
            StrategyChoice::Dfs => vec![Strategy::DepthFirstIterative],
            StrategyChoice::DfsRecursive => vec![Strategy::DepthFirstRecursive],
            StrategyChoice::All => Strategy::ALL.to_vec(),
        }
    }
}

/// Logging options.
#[derive(Debug, Clone, Args)]
pub struct LogArgs {
    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Log output format: pretty, compact or json
    #[arg(long, env = "STATESPACE_LOG_FORMAT", default_value = "compact", global = true)]
    pub log_format: TracingFormat,

    /// Filter directives such as `statespace_search=trace`; overrides -v
    #[arg(long, env = "STATESPACE_LOG", global = true)]
    pub log_filter: Option<String>,

    /// Log every discovered and expanded state (needs -vv)
    #[arg(long, global = true)]
    pub trace_states: bool,
}

impl LogArgs {
    /// Level selected by the `-v` count.
    #[must_use]
    pub fn level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }

    /// Installs the tracing subscriber described by these options.
    pub fn init(&self) -> TracingConfig {
        let mut setup = TracingSetup::new()
            .with_level(self.level())
            .with_format(self.log_format);
        if let Some(filter) = &self.log_filter {
            setup = setup.with_env_filter(filter.as_str());
        }
        setup.init()
    }
}
