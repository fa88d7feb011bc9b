use std::time::Instant;
use tracing::info;

#[derive(Debug, Clone)]
pub struct SearchStatistics {
    /// Name of the search engine, only used for logging
    engine: &'static str,
    /// Number of nodes expanded
    expanded_nodes: i64,
    /// Number of child nodes generated
    generated_nodes: i64,
    /// Number of times a cheaper path replaced a reached table entry
    reopened_nodes: i64,
    /// Number of children dropped by the cycle check
    pruned_cycles: i64,
    /// Number of branches stopped by a depth bound
    cutoffs: i64,
    /// Time when the search started
    search_start_time: Instant,
    /// Time when the last log was printed, used for periodic logging
    last_log_time: Instant,
}

impl SearchStatistics {
    pub fn new(engine: &'static str) -> Self {
        info!(engine, "starting search");
        Self {
            engine,
            expanded_nodes: 0,
            generated_nodes: 0,
            reopened_nodes: 0,
            pruned_cycles: 0,
            cutoffs: 0,
            search_start_time: Instant::now(),
            last_log_time: Instant::now(),
        }
    }

    pub fn increment_expanded_nodes(&mut self) {
        self.expanded_nodes += 1;
        self.log_if_needed();
    }

    pub fn increment_generated_nodes(&mut self) {
        self.generated_nodes += 1;
    }

    pub fn increment_reopened_nodes(&mut self) {
        self.reopened_nodes += 1;
    }

    pub fn increment_pruned_cycles(&mut self) {
        self.pruned_cycles += 1;
    }

    pub fn increment_cutoffs(&mut self) {
        self.cutoffs += 1;
    }

    pub fn expanded_nodes(&self) -> i64 {
        self.expanded_nodes
    }

    pub fn generated_nodes(&self) -> i64 {
        self.generated_nodes
    }

    pub fn reopened_nodes(&self) -> i64 {
        self.reopened_nodes
    }

    pub fn pruned_cycles(&self) -> i64 {
        self.pruned_cycles
    }

    pub fn cutoffs(&self) -> i64 {
        self.cutoffs
    }

    fn log_if_needed(&mut self) {
        if self.last_log_time.elapsed().as_secs() > 10 {
            self.last_log_time = Instant::now();
            self.log();
        }
    }

    pub fn log(&self) {
        info!(
            engine = self.engine,
            expanded_nodes = self.expanded_nodes,
            generated_nodes = self.generated_nodes,
            reopened_nodes = self.reopened_nodes,
            pruned_cycles = self.pruned_cycles,
            cutoffs = self.cutoffs,
        );
    }

    pub fn finalise_search(&self) {
        info!(engine = self.engine, "finalising search");
        self.log();
        info!(search_duration = self.search_start_time.elapsed().as_secs_f64());
    }
}
