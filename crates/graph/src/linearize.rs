use crate::error::ValidationError;
use crate::extract::Subgraph;
use crate::types::EdgeType;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Rendering of a single relation statement
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatementFormat {
    /// `from -> Supports -> to`
    #[default]
    Plain,
    /// `||from|| -> || Supports || -> ||to||`, unambiguous when node ids are
    /// whole sentences
    Delimited,
}

impl FromStr for StatementFormat {
    type Err = ValidationError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token.trim().to_ascii_lowercase().as_str() {
            "plain" => Ok(Self::Plain),
            "delimited" => Ok(Self::Delimited),
            other => Err(ValidationError::UnknownFormat(other.to_string())),
        }
    }
}

#[must_use]
pub fn render_statement(
    from: &str,
    relation: EdgeType,
    to: &str,
    format: StatementFormat,
) -> String {
    match format {
        StatementFormat::Plain => format!("{from} -> {relation} -> {to}"),
        StatementFormat::Delimited => format!("||{from}|| -> || {relation} || -> ||{to}||"),
    }
}

/// Turn a subgraph into one statement per edge.
///
/// Statements always read in the source graph's direction: upstream edges,
/// which were collected reversed, are swapped back. Order follows the
/// subgraph's edge discovery order.
#[must_use]
pub fn linearize(subgraph: &Subgraph, format: StatementFormat) -> Vec<String> {
    subgraph
        .source_edges()
        .map(|(from, to, relation)| render_statement(from, relation, to, format))
        .collect()
}
