//! Soybean classification: type and class

use serde::{Deserialize, Serialize};

use super::defects::{SoybeanDefectKind, SoybeanDefectTable};
use super::measurement::Tolerated;
use super::sample::Sample;
use super::tables::{ClassTable, SoybeanTierLimits, SoybeanTypeTable, ThresholdTables, TypeTable};
use crate::error::GradingResult;
use crate::types::{DiscountBreakdown, TypeDetermination};
use crate::validation::{check, percentage_of, validate_fraction_weight, validate_positive_weight};

/// Soybean type, best to worst
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SoybeanType {
    Type1,
    Type2,
    Standard,
    OutOfType,
    Disqualified,
}

impl std::fmt::Display for SoybeanType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SoybeanType::Type1 => write!(f, "Type 1"),
            SoybeanType::Type2 => write!(f, "Type 2"),
            SoybeanType::Standard => write!(f, "Standard"),
            SoybeanType::OutOfType => write!(f, "Out of Type"),
            SoybeanType::Disqualified => write!(f, "Disqualified"),
        }
    }
}

/// Soybean class by grain color
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SoybeanClass {
    Yellow,
    Mixed,
}

impl std::fmt::Display for SoybeanClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SoybeanClass::Yellow => write!(f, "Yellow"),
            SoybeanClass::Mixed => write!(f, "Mixed"),
        }
    }
}

/// Soybean intended use group; selects the disqualification ceiling
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SoybeanGroup {
    /// Group I, for in-natura consumption
    #[default]
    Group1,
    /// Group II, for other uses
    Group2,
}

impl std::fmt::Display for SoybeanGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SoybeanGroup::Group1 => write!(f, "Group I"),
            SoybeanGroup::Group2 => write!(f, "Group II"),
        }
    }
}

/// Color sub-sample used for the class
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct SoybeanColors {
    sample_grams: f64,
    yellow_grams: f64,
    other_colors_grams: f64,
}

impl SoybeanColors {
    pub fn new(sample_grams: f64, yellow_grams: f64, other_colors_grams: f64) -> GradingResult<Self> {
        check("colors.sample_grams", validate_positive_weight(sample_grams))?;
        check(
            "colors.yellow_grams",
            validate_fraction_weight(yellow_grams, sample_grams),
        )?;
        check(
            "colors.other_colors_grams",
            validate_fraction_weight(other_colors_grams, sample_grams),
        )?;
        Ok(Self {
            sample_grams,
            yellow_grams,
            other_colors_grams,
        })
    }

    pub fn yellow_percentage(&self) -> f64 {
        percentage_of(self.yellow_grams, self.sample_grams)
    }

    pub fn other_colors_percentage(&self) -> f64 {
        percentage_of(self.other_colors_grams, self.sample_grams)
    }
}

/// Full soybean grading result
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SoybeanGrade {
    pub grain_type: SoybeanType,
    pub class: SoybeanClass,
    pub group: SoybeanGroup,
    pub defects: SoybeanDefectTable,
    pub discount: DiscountBreakdown,
    pub within_tolerances: bool,
    pub net_weight_kg: f64,
}

/// A soybean sample with its color sub-sample
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Soybean {
    sample: Sample<SoybeanDefectKind>,
    colors: SoybeanColors,
}

impl Soybean {
    pub fn new(sample: Sample<SoybeanDefectKind>, colors: SoybeanColors) -> Self {
        Self { sample, colors }
    }

    pub fn sample(&self) -> &Sample<SoybeanDefectKind> {
        &self.sample
    }

    pub fn colors(&self) -> &SoybeanColors {
        &self.colors
    }

    pub fn defect_table(&self) -> SoybeanDefectTable {
        SoybeanDefectTable::from_defects(self.sample.defects())
    }

    /// Severe defects above the group's ceiling disqualify the lot before
    /// any tier is looked at. Otherwise the tiers are walked from Type 1 to
    /// Standard and the first that fits wins; none fitting is Out of Type.
    pub fn determine_type(
        &self,
        table: &TypeTable,
        group: SoybeanGroup,
    ) -> GradingResult<TypeDetermination<SoybeanType, SoybeanDefectTable>> {
        let table = table.as_soybean()?;
        let defects = self.defect_table();

        if is_disqualified(&defects, table, group) {
            return Ok(TypeDetermination {
                grain_type: SoybeanType::Disqualified,
                defects,
            });
        }

        let impurity = self.sample.impurity().percentage();
        let tiers = [
            (SoybeanType::Type1, &table.type1),
            (SoybeanType::Type2, &table.type2),
            (SoybeanType::Standard, &table.standard),
        ];
        let grain_type = tiers
            .into_iter()
            .find(|(_, limits)| fits_tier(&defects, impurity, limits))
            .map(|(grain_type, _)| grain_type)
            .unwrap_or(SoybeanType::OutOfType);

        Ok(TypeDetermination {
            grain_type,
            defects,
        })
    }

    pub fn determine_class(&self, table: &ClassTable) -> GradingResult<SoybeanClass> {
        let table = table.as_soybean()?;
        if self.colors.yellow_percentage() >= table.min_yellow {
            Ok(SoybeanClass::Yellow)
        } else {
            Ok(SoybeanClass::Mixed)
        }
    }

    pub fn grade(&self, tables: &ThresholdTables, group: SoybeanGroup) -> GradingResult<SoybeanGrade> {
        let determination = self.determine_type(&tables.soybean_type, group)?;
        let class = self.determine_class(&tables.soybean_class)?;
        let discount = self.sample.discount_breakdown();

        Ok(SoybeanGrade {
            grain_type: determination.grain_type,
            class,
            group,
            defects: determination.defects,
            discount,
            within_tolerances: self.sample.is_within_all_tolerances(),
            net_weight_kg: self.sample.lot_weight_kg() - discount.total_kg,
        })
    }
}

fn is_disqualified(
    defects: &SoybeanDefectTable,
    table: &SoybeanTypeTable,
    group: SoybeanGroup,
) -> bool {
    let limit = match group {
        SoybeanGroup::Group1 => table.out_of_type_limit.group1,
        SoybeanGroup::Group2 => table.out_of_type_limit.group2,
    };
    defects.severe() > limit
}

fn fits_tier(defects: &SoybeanDefectTable, impurity: f64, limits: &SoybeanTierLimits) -> bool {
    defects.scorched <= limits.scorched
        && defects.burnt_scorched() <= limits.burnt_scorched
        && defects.moldy <= limits.moldy
        && defects.damaged() <= limits.damaged
        && defects.greenish <= limits.greenish
        && defects.broken <= limits.broken
        && impurity <= limits.impurity
}
