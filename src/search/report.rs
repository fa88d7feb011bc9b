//! Side by side comparison of search engines by how much work they make a
//! problem do.

use crate::search::{CountingProblem, Problem, SearchConfig, SearchEngineName, SearchError};
use itertools::Itertools;
use serde::{Serialize, Serializer};
use std::fmt::{self, Display};
use tracing::info;

/// Effort and outcome of one engine on one problem. Serialises to one flat
/// record, so rows of several engines make a single table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    /// Number of calls to [`Problem::result`], i.e. nodes generated
    pub nodes: usize,
    /// Number of goal tests
    pub goal: usize,
    /// Cost of the solution, infinite if there is none
    pub cost: f64,
    /// Number of calls to [`Problem::actions`] plus the number of actions in
    /// the solution
    pub actions: usize,
    pub problem: String,
    #[serde(serialize_with = "engine_name")]
    pub search: SearchEngineName,
}

impl Display for ReportRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>9} nodes |{:>9} goal |{:>5.0} cost |{:>8} actions | {}",
            thousands(self.nodes),
            thousands(self.goal),
            self.cost,
            thousands(self.actions),
            self.problem
        )
    }
}

/// Rows of one engine over a list of problems.
#[derive(Debug, Clone)]
pub struct Report {
    pub engine: SearchEngineName,
    pub rows: Vec<ReportRow>,
}

fn engine_name<S>(engine: &SearchEngineName, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(engine)
}

impl Report {
    pub fn new(engine: SearchEngineName) -> Self {
        Self {
            engine,
            rows: vec![],
        }
    }

    /// Search `problem` with the report's engine and add a row for it.
    pub fn run<P>(&mut self, problem: P, config: &SearchConfig) -> Result<ReportRow, SearchError>
    where
        P: Problem + Display,
    {
        let problem = CountingProblem::new(problem);
        let result = self.engine.search(&problem, config)?;
        let row = ReportRow {
            nodes: problem.count("result"),
            goal: problem.count("is_goal"),
            cost: result.path_cost(),
            actions: problem.count("actions") + result.depth().unwrap_or(0),
            problem: problem.to_string(),
            search: self.engine,
        };
        info!(engine = %self.engine, problem = %row.problem, cost = row.cost, "report row");
        self.rows.push(row.clone());
        Ok(row)
    }

    /// The column sums. The cost is infinite as soon as one problem went
    /// unsolved.
    pub fn total(&self) -> ReportRow {
        ReportRow {
            nodes: self.rows.iter().map(|row| row.nodes).sum(),
            goal: self.rows.iter().map(|row| row.goal).sum(),
            cost: self.rows.iter().map(|row| row.cost).sum(),
            actions: self.rows.iter().map(|row| row.actions).sum(),
            problem: "TOTAL".to_string(),
            search: self.engine,
        }
    }
}

/// The rows of every report, without totals, as one JSON array.
pub fn reports_to_json(reports: &[Report]) -> Result<String, SearchError> {
    let rows: Vec<&ReportRow> = reports.iter().flat_map(|report| &report.rows).collect();
    Ok(serde_json::to_string_pretty(&rows)?)
}

impl Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}:", self.engine)?;
        for row in &self.rows {
            writeln!(f, "{row}")?;
        }
        write!(f, "{}", self.total())
    }
}

/// `1234567` as `1,234,567`.
fn thousands(n: usize) -> String {
    let digits = n.to_string();
    let reversed = digits
        .chars()
        .rev()
        .chunks(3)
        .into_iter()
        .map(|chunk| chunk.collect::<String>())
        .join(",");
    reversed.chars().rev().collect()
}
