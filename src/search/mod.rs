mod config;
mod counting_problem;
mod error;
mod frontier;
mod problem;
mod reached;
mod report;
pub mod search_engines;
mod search_node;
mod search_result;
mod search_statistics;
mod verbosity;

pub use config::SearchConfig;
pub use counting_problem::CountingProblem;
pub use error::SearchError;
pub use frontier::{Frontier, HeuristicValue};
pub use problem::{NondeterministicProblem, Problem};
pub use reached::ReachedTable;
pub use report::{reports_to_json, Report, ReportRow};
pub use search_engines::*;
pub use search_node::{
    expand, is_cycle, Ancestors, Node, NodeRef, SearchNode, DEFAULT_CYCLE_LOOKBACK,
};
pub use search_result::SearchResult;
pub use search_statistics::SearchStatistics;
pub use verbosity::Verbosity;
