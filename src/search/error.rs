use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the search engine and the bundled problem domains.
///
/// Not finding a solution is *not* an error, see
/// [`SearchResult`](crate::search::SearchResult) for that.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("cannot take the minimum of an empty frontier")]
    EmptyFrontier,
    #[error("{0} needs a problem with an inverse")]
    NotInvertible(String),
    #[error("invalid eight puzzle board {0:?}, expected a permutation of 0..=8")]
    InvalidBoard(Vec<u8>),
    #[error(
        "eight puzzle {initial:?} cannot reach {goal:?}: the boards have different inversion parity"
    )]
    UnsolvablePuzzle { initial: [u8; 9], goal: [u8; 9] },
    #[error("jugs {initial:?} do not fit sizes {sizes:?}")]
    InvalidJugs { initial: Vec<u32>, sizes: Vec<u32> },
    #[error("unknown location {0}")]
    UnknownLocation(String),
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse search config")]
    Config(#[from] toml::de::Error),
    #[error("failed to serialise report")]
    Json(#[from] serde_json::Error),
}
