use crate::graph::AdjacencyMap;
use crate::validation::BorderIssue;
use std::fmt::Write;

pub const NAMING_ERRORS_TITLE: &str = "Province Name Errors";
pub const RELATION_ERRORS_TITLE: &str = "Province Relation Errors";
pub const RELATIONS_TITLE: &str = "Province Neighbour Relations:";

/// `"<title>: None Found"` for an empty log, otherwise the title line followed by
/// one entry per line.
pub fn format_log(title: &str, issues: &[BorderIssue]) -> String {
    if issues.is_empty() {
        return format!("{}: None Found", title);
    }
    let mut out = format!("{}:", title);
    for issue in issues {
        let _ = write!(out, "\n{}", issue);
    }
    out
}

pub fn format_naming_errors(issues: &[BorderIssue]) -> String {
    format_log(NAMING_ERRORS_TITLE, issues)
}

pub fn format_relation_errors(issues: &[BorderIssue]) -> String {
    format_log(RELATION_ERRORS_TITLE, issues)
}

/// One block per region in adjacency order: `NAME:` then a tab-indented line per
/// neighbour. A region without neighbours leaves an empty line under its name.
pub fn format_relations(adjacency: &AdjacencyMap) -> String {
    adjacency
        .iter()
        .map(|(region, neighbours)| {
            let lines: Vec<String> = neighbours.iter().map(|n| format!("\t{}", n.name)).collect();
            format!("{}:\n{}", region.name, lines.join("\n"))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Relation errors, naming errors, a blank line, then the neighbour listing.
pub fn format_full(adjacency: &AdjacencyMap, naming: &[BorderIssue], relation: &[BorderIssue]) -> String {
    let mut parts = vec![
        format_relation_errors(relation),
        format_naming_errors(naming),
        String::new(),
        RELATIONS_TITLE.to_string(),
    ];
    if !adjacency.is_empty() {
        parts.push(format_relations(adjacency));
    }
    parts.join("\n")
}
