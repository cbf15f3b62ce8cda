//! The relation parser: one build pass followed by one validation pass.
use crate::config::ParserConfig;
use crate::display::report;
use crate::graph::{AdjacencyMap, BuildOutput, RelationGraphBuilder};
use crate::store::{Region, Registry};
use crate::validation::{BorderIssue, MutualBorderValidator, RelationError};
use std::fmt;

/// Outputs of one validation run: the adjacency mapping and both error logs.
///
/// Everything is computed in [`RelationParser::parse`]; the value is read-only
/// afterwards.
#[derive(Debug, Clone)]
pub struct RelationParser {
    adjacency: AdjacencyMap,
    naming_errors: Vec<BorderIssue>,
    relation_errors: Vec<BorderIssue>,
}

impl RelationParser {
    /// Parses with the default configuration (empty lines ignored, sequential check).
    pub fn parse<S: AsRef<str>>(lines: &[S], registry: &Registry) -> Result<Self, RelationError> {
        Self::parse_with(lines, registry, &ParserConfig::default())
    }

    #[tracing::instrument(skip_all, fields(parallel = config.parallel))]
    pub fn parse_with<S: AsRef<str>>(
        lines: &[S],
        registry: &Registry,
        config: &ParserConfig,
    ) -> Result<Self, RelationError> {
        let BuildOutput { adjacency, naming_errors } = RelationGraphBuilder::new(registry, config).build(lines)?;

        let validator = MutualBorderValidator::new(&adjacency);
        let relation_errors = if config.parallel {
            validator.validate_parallel()
        } else {
            validator.validate()
        };

        Ok(Self { adjacency, naming_errors, relation_errors })
    }

    pub fn adjacency(&self) -> &AdjacencyMap { &self.adjacency }

    /// Declared neighbours of the region with this exact name.
    pub fn neighbours_of(&self, name: &str) -> Option<&[Region]> {
        self.adjacency.get(name)
    }

    pub fn naming_issues(&self) -> &[BorderIssue] { &self.naming_errors }
    pub fn relation_issues(&self) -> &[BorderIssue] { &self.relation_errors }

    pub fn naming_errors(&self) -> Vec<String> {
        self.naming_errors.iter().map(ToString::to_string).collect()
    }

    pub fn relation_errors(&self) -> Vec<String> {
        self.relation_errors.iter().map(ToString::to_string).collect()
    }

    pub fn report_naming_errors(&self) -> String {
        report::format_naming_errors(&self.naming_errors)
    }

    pub fn report_relation_errors(&self) -> String {
        report::format_relation_errors(&self.relation_errors)
    }

    /// True when every name resolved and every border is mutual.
    pub fn is_consistent(&self) -> bool {
        self.naming_errors.is_empty() && self.relation_errors.is_empty()
    }
}

impl fmt::Display for RelationParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&report::format_full(&self.adjacency, &self.naming_errors, &self.relation_errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::INVALID_REGION_NAME;

    fn registry() -> Registry {
        [
            ("NONG KHAI", 43, "หนองคาย"),
            ("BUENG KAN", 38, "บึงกาฬ"),
            ("UDON THANI", 41, "อุดรธานี"),
            ("SAKON NAKHON", 47, "สกลนคร"),
            ("LOEI", 42, "เลย"),
            ("NAKHON PHANOM", 48, "นครพนม"),
        ]
        .into_iter()
        .map(|(name, id, thai)| Region::new(name).with_attribute("id", id).with_attribute("thai_name", thai))
        .collect()
    }

    fn init_tracing() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    }

    #[test]
    fn test_mutual_pair_is_consistent() {
        init_tracing();
        let prp = RelationParser::parse(&["Nong Khai -> Bueng Kan", "Bueng Kan -> Nong Khai"], &registry()).unwrap();
        assert!(prp.naming_errors().is_empty());
        assert!(prp.relation_errors().is_empty());
        assert!(prp.is_consistent());
        assert_eq!(prp.report_naming_errors(), "Province Name Errors: None Found");
        assert_eq!(prp.report_relation_errors(), "Province Relation Errors: None Found");
    }

    #[test]
    fn test_one_sided_border_is_reported() {
        init_tracing();
        let lines = [
            "Nong Khai -> Bueng Kan",
            "Bueng Kan -> Nong Khai, Nakhon Phanom",
            "Nakhon Phanom -> Bueng Kan, Nong Khai",
        ];
        let prp = RelationParser::parse(&lines, &registry()).unwrap();
        assert!(prp.naming_errors().is_empty());
        assert_eq!(prp.relation_errors(), ["3. Missing Mutual Neighbour for NAKHON PHANOM -> NONG KHAI."]);
        assert!(!prp.is_consistent());
    }

    #[test]
    fn test_unknown_name_and_missing_entries() {
        init_tracing();
        let lines = vec![
            "Nong Khai -> Bueng Kan, Udon Thani, Sakon Nakhon, Loei".to_string(),
            String::new(),
            "Bueng Kan -> Nakhon Phanom, Sakon Nakhon, Nong Khai, sss".to_string(),
        ];
        let prp = RelationParser::parse(&lines, &registry()).unwrap();

        assert_eq!(prp.naming_errors(), ["Missing Province Lookup: BUENG KAN -> SSS"]);
        assert_eq!(
            prp.relation_errors(),
            [
                "1. Missing Province Neighbour Entry for NONG KHAI -> UDON THANI.",
                "1. Missing Province Neighbour Entry for NONG KHAI -> SAKON NAKHON.",
                "1. Missing Province Neighbour Entry for NONG KHAI -> LOEI.",
                "2. Missing Province Neighbour Entry for BUENG KAN -> NAKHON PHANOM.",
                "2. Missing Province Neighbour Entry for BUENG KAN -> SAKON NAKHON.",
                "2. Missing Province Neighbour Entry for BUENG KAN -> **INVALID**.",
            ]
        );

        let neighbours = prp.neighbours_of("BUENG KAN").unwrap();
        assert_eq!(neighbours.len(), 4);
        assert_eq!(neighbours[3].name, INVALID_REGION_NAME);
        assert_eq!(neighbours[0].attribute("thai_name"), Some(&serde_json::json!("นครพนม")));
    }

    #[test]
    fn test_sentinel_named_token_is_still_unresolved() {
        let registry: Registry = [Region::new("LOEI"), Region::new("**invalid**")].into_iter().collect();
        let prp = RelationParser::parse(&["Loei -> **Invalid**", "**INVALID** -> Loei"], &registry).unwrap();
        assert_eq!(
            prp.naming_errors(),
            [
                "Missing Province Lookup: LOEI -> **INVALID**",
                "Missing Province Lookup: **INVALID** -> **INVALID**",
            ]
        );
        assert!(!prp.is_consistent());
    }

    #[test]
    fn test_malformed_line_is_fatal() {
        let err = RelationParser::parse(&["Nong Khai -> Bueng Kan", "Bueng Kan: Nong Khai"], &registry()).unwrap_err();
        assert_eq!(err, RelationError::MissingDelimiter { line: 2, text: "Bueng Kan: Nong Khai".into() });
    }

    #[test]
    fn test_duplicate_source_counts_distinct_regions() {
        let lines = [
            "Loei -> Udon Thani",
            "Udon Thani -> Loei",
            "Loei -> Nong Khai",
            "Nong Khai -> Udon Thani",
        ];
        let prp = RelationParser::parse(&lines, &registry()).unwrap();
        // The first LOEI line is discarded; NONG KHAI sits at position 3.
        assert_eq!(
            prp.relation_errors(),
            [
                "1. Missing Mutual Neighbour for LOEI -> NONG KHAI.",
                "2. Missing Mutual Neighbour for UDON THANI -> LOEI.",
                "3. Missing Mutual Neighbour for NONG KHAI -> UDON THANI.",
            ]
        );
    }

    #[test]
    fn test_parallel_config_gives_same_logs() {
        let lines = [
            "Nong Khai -> Bueng Kan, Udon Thani, Loei",
            "Bueng Kan -> Nong Khai, Nakhon Phanom",
            "Udon Thani -> Sakon Nakhon",
            "Nakhon Phanom -> Bueng Kan, Nong Khai, xyz",
        ];
        let sequential = RelationParser::parse(&lines, &registry()).unwrap();
        let config = ParserConfig { parallel: true, ..Default::default() };
        let parallel = RelationParser::parse_with(&lines, &registry(), &config).unwrap();
        assert_eq!(sequential.relation_errors(), parallel.relation_errors());
        assert_eq!(sequential.naming_errors(), parallel.naming_errors());
    }

    #[test]
    fn test_parse_is_idempotent() {
        let lines = ["Nong Khai -> Bueng Kan, sss", "Bueng Kan -> Loei", ""];
        let registry = registry();
        let first = RelationParser::parse(&lines, &registry).unwrap();
        let second = RelationParser::parse(&lines, &registry).unwrap();
        assert_eq!(first.to_string(), second.to_string());
        assert_eq!(
            serde_json::to_string(first.adjacency()).unwrap(),
            serde_json::to_string(second.adjacency()).unwrap()
        );
        assert_eq!(first.naming_issues(), second.naming_issues());
        assert_eq!(first.relation_issues(), second.relation_issues());
    }

    #[test]
    fn test_display_full_report() {
        let prp = RelationParser::parse(&["Loei -> Nong Khai", "Nong Khai -> Loei"], &registry()).unwrap();
        assert_eq!(
            prp.to_string(),
            "Province Relation Errors: None Found\n\
             Province Name Errors: None Found\n\
             \n\
             Province Neighbour Relations:\n\
             LOEI:\n\
             \tNONG KHAI\n\
             NONG KHAI:\n\
             \tLOEI"
        );
    }
}
