//! Threshold tables for type, class and group determination
//!
//! Defaults follow the national grading standard for corn and soybean.
//! Type and class tables are tagged with their commodity; classifiers reject
//! a table filed under the wrong one.

use serde::{Deserialize, Serialize};

use crate::error::{GradingError, GradingResult};
use crate::types::Commodity;
use crate::validation::{check, validate_limit, validate_percentage};

// ============================================================================
// Type Tables
// ============================================================================

/// Ceilings a corn sample must respect to reach a tier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CornTierLimits {
    pub burnt: f64,
    pub damaged: f64,
    pub broken: f64,
    pub impurity: f64,
    pub weevil_damaged: f64,
}

impl CornTierLimits {
    fn validate(&self) -> GradingResult<()> {
        check("burnt", validate_limit(self.burnt))?;
        check("damaged", validate_limit(self.damaged))?;
        check("broken", validate_limit(self.broken))?;
        check("impurity", validate_limit(self.impurity))?;
        check("weevil_damaged", validate_limit(self.weevil_damaged))
    }
}

/// Corn type table, strictest tier first
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CornTypeTable {
    pub type1: CornTierLimits,
    pub type2: CornTierLimits,
    pub type3: CornTierLimits,
    pub out_of_type: CornTierLimits,
}

impl Default for CornTypeTable {
    fn default() -> Self {
        Self {
            type1: CornTierLimits {
                burnt: 1.0,
                damaged: 6.0,
                broken: 3.0,
                impurity: 1.0,
                weevil_damaged: 2.0,
            },
            type2: CornTierLimits {
                burnt: 2.0,
                damaged: 10.0,
                broken: 4.0,
                impurity: 1.5,
                weevil_damaged: 3.0,
            },
            type3: CornTierLimits {
                burnt: 3.0,
                damaged: 15.0,
                broken: 5.0,
                impurity: 2.0,
                weevil_damaged: 4.0,
            },
            out_of_type: CornTierLimits {
                burnt: 5.0,
                damaged: 20.0,
                broken: f64::INFINITY,
                impurity: f64::INFINITY,
                weevil_damaged: 8.0,
            },
        }
    }
}

/// Ceilings a soybean sample must respect to reach a tier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SoybeanTierLimits {
    pub burnt_scorched: f64,
    pub scorched: f64,
    pub moldy: f64,
    pub damaged: f64,
    pub greenish: f64,
    pub broken: f64,
    pub impurity: f64,
}

impl SoybeanTierLimits {
    fn validate(&self) -> GradingResult<()> {
        check("burnt_scorched", validate_limit(self.burnt_scorched))?;
        check("scorched", validate_limit(self.scorched))?;
        check("moldy", validate_limit(self.moldy))?;
        check("damaged", validate_limit(self.damaged))?;
        check("greenish", validate_limit(self.greenish))?;
        check("broken", validate_limit(self.broken))?;
        check("impurity", validate_limit(self.impurity))
    }
}

/// Severe-defect ceilings above which a soybean lot is disqualified
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SoybeanOutOfTypeLimit {
    pub group1: f64,
    pub group2: f64,
}

/// Soybean type table, strictest tier first
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SoybeanTypeTable {
    pub type1: SoybeanTierLimits,
    pub type2: SoybeanTierLimits,
    pub standard: SoybeanTierLimits,
    pub out_of_type_limit: SoybeanOutOfTypeLimit,
}

impl Default for SoybeanTypeTable {
    fn default() -> Self {
        Self {
            type1: SoybeanTierLimits {
                burnt_scorched: 1.0,
                scorched: 0.3,
                moldy: 0.5,
                damaged: 4.0,
                greenish: 2.0,
                broken: 8.0,
                impurity: 1.0,
            },
            type2: SoybeanTierLimits {
                burnt_scorched: 2.0,
                scorched: 1.0,
                moldy: 1.5,
                damaged: 6.0,
                greenish: 4.0,
                broken: 15.0,
                impurity: 1.0,
            },
            standard: SoybeanTierLimits {
                burnt_scorched: 4.0,
                scorched: 1.0,
                moldy: 6.0,
                damaged: 8.0,
                greenish: 8.0,
                broken: 30.0,
                impurity: 1.0,
            },
            out_of_type_limit: SoybeanOutOfTypeLimit {
                group1: 12.0,
                group2: 40.0,
            },
        }
    }
}

/// A type table tagged with its commodity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "commodity", rename_all = "snake_case")]
pub enum TypeTable {
    Corn(CornTypeTable),
    Soybean(SoybeanTypeTable),
}

impl TypeTable {
    pub fn commodity(&self) -> Commodity {
        match self {
            TypeTable::Corn(_) => Commodity::Corn,
            TypeTable::Soybean(_) => Commodity::Soybean,
        }
    }

    pub fn as_corn(&self) -> GradingResult<&CornTypeTable> {
        match self {
            TypeTable::Corn(table) => Ok(table),
            other => Err(wrong_commodity("type_table", Commodity::Corn, other.commodity())),
        }
    }

    pub fn as_soybean(&self) -> GradingResult<&SoybeanTypeTable> {
        match self {
            TypeTable::Soybean(table) => Ok(table),
            other => Err(wrong_commodity("type_table", Commodity::Soybean, other.commodity())),
        }
    }

    pub fn validate(&self) -> GradingResult<()> {
        match self {
            TypeTable::Corn(table) => {
                table.type1.validate()?;
                table.type2.validate()?;
                table.type3.validate()?;
                table.out_of_type.validate()
            }
            TypeTable::Soybean(table) => {
                table.type1.validate()?;
                table.type2.validate()?;
                table.standard.validate()?;
                check("group1", validate_limit(table.out_of_type_limit.group1))?;
                check("group2", validate_limit(table.out_of_type_limit.group2))
            }
        }
    }
}

// ============================================================================
// Class Tables
// ============================================================================

/// Minimum color shares for each corn class
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CornClassTable {
    pub min_yellow: f64,
    pub min_white: f64,
    pub min_other: f64,
}

impl Default for CornClassTable {
    fn default() -> Self {
        Self {
            min_yellow: 95.0,
            min_white: 95.0,
            min_other: 95.0,
        }
    }
}

/// Minimum yellow share for the yellow soybean class
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SoybeanClassTable {
    pub min_yellow: f64,
}

impl Default for SoybeanClassTable {
    fn default() -> Self {
        Self { min_yellow: 90.0 }
    }
}

/// A class table tagged with its commodity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "commodity", rename_all = "snake_case")]
pub enum ClassTable {
    Corn(CornClassTable),
    Soybean(SoybeanClassTable),
}

impl ClassTable {
    pub fn commodity(&self) -> Commodity {
        match self {
            ClassTable::Corn(_) => Commodity::Corn,
            ClassTable::Soybean(_) => Commodity::Soybean,
        }
    }

    pub fn as_corn(&self) -> GradingResult<&CornClassTable> {
        match self {
            ClassTable::Corn(table) => Ok(table),
            other => Err(wrong_commodity("class_table", Commodity::Corn, other.commodity())),
        }
    }

    pub fn as_soybean(&self) -> GradingResult<&SoybeanClassTable> {
        match self {
            ClassTable::Soybean(table) => Ok(table),
            other => Err(wrong_commodity("class_table", Commodity::Soybean, other.commodity())),
        }
    }

    pub fn validate(&self) -> GradingResult<()> {
        match self {
            ClassTable::Corn(table) => {
                check("min_yellow", validate_percentage(table.min_yellow))?;
                check("min_white", validate_percentage(table.min_white))?;
                check("min_other", validate_percentage(table.min_other))
            }
            ClassTable::Soybean(table) => {
                check("min_yellow", validate_percentage(table.min_yellow))
            }
        }
    }
}

// ============================================================================
// Group Table
// ============================================================================

/// Minimum consistency shares for each corn group
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CornGroupTable {
    pub min_hard: f64,
    pub min_semi_hard: f64,
    pub min_dented: f64,
}

impl Default for CornGroupTable {
    fn default() -> Self {
        Self {
            min_hard: 85.0,
            min_semi_hard: 85.0,
            min_dented: 85.0,
        }
    }
}

impl CornGroupTable {
    pub fn validate(&self) -> GradingResult<()> {
        check("min_hard", validate_percentage(self.min_hard))?;
        check("min_semi_hard", validate_percentage(self.min_semi_hard))?;
        check("min_dented", validate_percentage(self.min_dented))
    }
}

// ============================================================================
// Table Set
// ============================================================================

/// Every table a grading run may consult
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ThresholdTables {
    pub corn_type: TypeTable,
    pub corn_class: ClassTable,
    pub corn_group: CornGroupTable,
    pub soybean_type: TypeTable,
    pub soybean_class: ClassTable,
}

impl Default for ThresholdTables {
    fn default() -> Self {
        Self {
            corn_type: TypeTable::Corn(CornTypeTable::default()),
            corn_class: ClassTable::Corn(CornClassTable::default()),
            corn_group: CornGroupTable::default(),
            soybean_type: TypeTable::Soybean(SoybeanTypeTable::default()),
            soybean_class: ClassTable::Soybean(SoybeanClassTable::default()),
        }
    }
}

impl ThresholdTables {
    /// Check every limit. Commodity tags are checked later, by the classifiers.
    pub fn validate(&self) -> GradingResult<()> {
        self.corn_type.validate()?;
        self.corn_class.validate()?;
        self.corn_group.validate()?;
        self.soybean_type.validate()?;
        self.soybean_class.validate()
    }
}

fn wrong_commodity(field: &str, expected: Commodity, found: Commodity) -> GradingError {
    GradingError::invalid(
        field,
        format!("table is for {}, expected {}", found, expected),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tables_are_valid() {
        assert!(ThresholdTables::default().validate().is_ok());
    }

    #[test]
    fn test_corn_out_of_type_is_unbounded_for_broken_and_impurity() {
        let table = CornTypeTable::default();
        assert!(table.out_of_type.broken.is_infinite());
        assert!(table.out_of_type.impurity.is_infinite());
        assert_eq!(table.out_of_type.burnt, 5.0);
    }

    #[test]
    fn test_as_corn_rejects_soybean_table() {
        let table = TypeTable::Soybean(SoybeanTypeTable::default());
        let err = table.as_corn().unwrap_err();
        assert_eq!(err.field(), "type_table");
        assert!(table.as_soybean().is_ok());
    }

    #[test]
    fn test_class_table_tags() {
        let table = ClassTable::Corn(CornClassTable::default());
        assert_eq!(table.commodity(), Commodity::Corn);
        assert!(table.as_soybean().is_err());
    }

    #[test]
    fn test_negative_limit_rejected() {
        let mut corn = CornTypeTable::default();
        corn.type2.damaged = -1.0;
        assert!(TypeTable::Corn(corn).validate().is_err());
    }

    #[test]
    fn test_class_minimum_out_of_range_rejected() {
        let table = ClassTable::Soybean(SoybeanClassTable { min_yellow: 120.0 });
        assert!(table.validate().is_err());
    }

    #[test]
    fn test_tagged_table_round_trips_through_json() {
        let json = serde_json::to_value(TypeTable::Soybean(SoybeanTypeTable::default())).unwrap();
        assert_eq!(json["commodity"], "soybean");
        assert_eq!(json["out_of_type_limit"]["group1"], 12.0);
    }
}
