//! Tests for configuration loading and the grading service

use grain_grader::{AppError, Config, GradingService};
use shared::{
    ClassTable, CornClassTable, CornType, GradingOutcome, SoybeanClassTable, SoybeanTypeTable,
    ThresholdTables, TypeTable,
};

const CORN_REQUEST: &str = r#"{
    "commodity": "corn",
    "sample_grams": 100.0,
    "lot_weight_kg": 1000.0,
    "moisture": { "percentage": 12.0, "tolerance_limit": 14.0 },
    "impurity": { "weight_grams": 0.5, "sample_grams": 100.0, "tolerance_limit": 1.0 },
    "defects": [
        { "kind": "burnt", "weight_grams": 1.5, "sample_grams": 100.0, "tolerance_limit": 1.0 }
    ],
    "consistency": { "sample_grams": 100.0, "hard_grams": 86.0, "semi_hard_grams": 7.0, "dented_grams": 7.0 },
    "colors": { "sample_grams": 100.0, "yellow_grams": 96.0, "white_grams": 2.0, "colored_grams": 2.0 }
}"#;

// =============================================================================
// Configuration Tests
// =============================================================================

mod configuration {
    use super::*;

    #[test]
    fn default_config_uses_standard_tables() {
        let config = Config::default();
        assert_eq!(config.environment, "development");
        assert!(!config.log_json);
        assert_eq!(config.tables, ThresholdTables::default());
    }

    #[test]
    fn explicit_file_overrides_only_named_values() {
        let path = std::env::temp_dir().join(format!(
            "grain-grader-config-{}.toml",
            std::process::id()
        ));
        std::fs::write(
            &path,
            "log_filter = \"grain_grader=debug\"\nlog_json = true\n\n[tables.corn_class]\ncommodity = \"corn\"\nmin_yellow = 90.0\nmin_white = 95.0\nmin_other = 95.0\n",
        )
        .unwrap();

        let config = Config::load(Some(&path));
        std::fs::remove_file(&path).ok();
        let config = config.unwrap();

        assert_eq!(config.log_filter, "grain_grader=debug");
        assert!(config.log_json);
        assert_eq!(
            config.tables.corn_class,
            ClassTable::Corn(CornClassTable {
                min_yellow: 90.0,
                ..CornClassTable::default()
            })
        );
        assert_eq!(config.tables.soybean_type, ThresholdTables::default().soybean_type);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let path = std::env::temp_dir().join("grain-grader-missing-config.toml");
        assert!(Config::load(Some(&path)).is_err());
    }
}

// =============================================================================
// Grading Service Tests
// =============================================================================

mod service {
    use super::*;

    fn service() -> GradingService {
        GradingService::new(ThresholdTables::default()).unwrap()
    }

    #[test]
    fn rejects_invalid_tables() {
        let tables = ThresholdTables {
            soybean_class: ClassTable::Soybean(SoybeanClassTable { min_yellow: -1.0 }),
            ..ThresholdTables::default()
        };
        let err = GradingService::new(tables).unwrap_err();
        assert!(matches!(err, AppError::InvalidTables(_)));
        assert_eq!(err.code(), "INVALID_TABLES");
    }

    #[test]
    fn grades_json_request() {
        let outcome = service().grade_json(CORN_REQUEST).unwrap();
        match outcome {
            GradingOutcome::Corn(grade) => {
                assert_eq!(grade.grain_type, CornType::Type2);
                assert!(!grade.within_tolerances);
            }
            other => panic!("expected a corn grade, got {:?}", other),
        }
    }

    #[test]
    fn grades_from_reader() {
        let outcome = service().grade_reader(CORN_REQUEST.as_bytes()).unwrap();
        assert_eq!(outcome.summary(), "Type 2, class Yellow, group Hard");
    }

    #[test]
    fn malformed_request() {
        let err = service().grade_json("{ \"commodity\": \"rice\" }").unwrap_err();
        assert!(matches!(err, AppError::MalformedRequest(_)));
        assert_eq!(err.code(), "MALFORMED_REQUEST");
    }

    #[test]
    fn invalid_measurement_is_reported_as_grading_error() {
        let json = CORN_REQUEST.replace("\"percentage\": 12.0", "\"percentage\": 120.0");
        let err = service().grade_json(&json).unwrap_err();
        match err {
            AppError::Grading(inner) => assert_eq!(inner.field(), "moisture.percentage"),
            other => panic!("expected a grading error, got {:?}", other),
        }
    }

    #[test]
    fn mismatched_commodity_table() {
        let tables = ThresholdTables {
            corn_type: TypeTable::Soybean(SoybeanTypeTable::default()),
            ..ThresholdTables::default()
        };
        let service = GradingService::new(tables).unwrap();
        let err = service.grade_json(CORN_REQUEST).unwrap_err();
        assert!(matches!(err, AppError::Grading(_)));
    }
}
