pub mod config;
pub mod entry;
pub mod error;
pub mod mapping;
pub mod report;

pub use config::{CleanerConfig, Criterion, MatchLogic};
pub use entry::{Entry, STATUS_ACTIVE};
pub use error::ModelError;
pub use mapping::ImportMapping;
pub use report::{DeletionLimits, DeletionReport, ImportReport};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_not_actionable() {
        let config = CleanerConfig::default();
        assert_eq!(config.logic, MatchLogic::And);
        assert!(config.criteria.is_empty());
        assert!(!config.is_actionable());
    }

    #[test]
    fn blank_form_id_is_not_actionable() {
        let config = CleanerConfig {
            form_id: "   ".to_string(),
            criteria: vec![Criterion::new("3", "blank")],
            logic: MatchLogic::Or,
        };
        assert!(!config.is_actionable());
    }

    #[test]
    fn config_round_trips_with_uppercase_logic() {
        let config = CleanerConfig {
            form_id: "9".to_string(),
            criteria: vec![Criterion::new("3", "blank"), Criterion::new("5", "42")],
            logic: MatchLogic::Or,
        };
        let json = serde_json::to_string(&config).expect("serialize config");
        assert!(json.contains("\"OR\""));
        let round: CleanerConfig = serde_json::from_str(&json).expect("deserialize config");
        assert_eq!(round, config);
    }

    #[test]
    fn logic_parses_case_insensitively() {
        assert_eq!(" and ".parse::<MatchLogic>().unwrap(), MatchLogic::And);
        assert_eq!("OR".parse::<MatchLogic>().unwrap(), MatchLogic::Or);
        assert!("maybe".parse::<MatchLogic>().is_err());
    }

    #[test]
    fn entry_resolves_pseudo_fields() {
        let entry = Entry::new("17", "9")
            .with_date_created("2026-01-03 10:15:00")
            .with_field("3", "hello");
        assert_eq!(entry.value("id"), "17");
        assert_eq!(entry.value("date_created"), "2026-01-03 10:15:00");
        assert_eq!(entry.value("3"), "hello");
        assert_eq!(entry.value("999"), "");
    }

    #[test]
    fn mapping_drops_blank_destinations() {
        let mapping =
            ImportMapping::from_pairs([("Name", "1"), ("Email", ""), ("Phone", "  ")]);
        assert_eq!(mapping.len(), 1);
        assert_eq!(mapping.field_for("Name"), Some("1"));
        assert_eq!(mapping.field_for("Email"), None);
    }
}
