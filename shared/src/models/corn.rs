//! Corn classification: type, class and group

use serde::{Deserialize, Serialize};

use super::defects::{CornDefectKind, CornDefectTable};
use super::measurement::Tolerated;
use super::sample::Sample;
use super::tables::{ClassTable, CornGroupTable, CornTierLimits, ThresholdTables, TypeTable};
use crate::error::GradingResult;
use crate::types::{DiscountBreakdown, TypeDetermination};
use crate::validation::{check, percentage_of, validate_fraction_weight, validate_positive_weight};

/// Corn type, best to worst
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CornType {
    Type1,
    Type2,
    Type3,
    OutOfType,
    Disqualified,
}

impl std::fmt::Display for CornType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CornType::Type1 => write!(f, "Type 1"),
            CornType::Type2 => write!(f, "Type 2"),
            CornType::Type3 => write!(f, "Type 3"),
            CornType::OutOfType => write!(f, "Out of Type"),
            CornType::Disqualified => write!(f, "Disqualified"),
        }
    }
}

/// Corn class by grain color
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CornClass {
    Yellow,
    White,
    Colored,
    Mixed,
}

impl std::fmt::Display for CornClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CornClass::Yellow => write!(f, "Yellow"),
            CornClass::White => write!(f, "White"),
            CornClass::Colored => write!(f, "Colored"),
            CornClass::Mixed => write!(f, "Mixed"),
        }
    }
}

/// Corn group by grain consistency
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CornGroup {
    Hard,
    SemiHard,
    Dented,
    Mixed,
}

impl std::fmt::Display for CornGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CornGroup::Hard => write!(f, "Hard"),
            CornGroup::SemiHard => write!(f, "Semi-hard"),
            CornGroup::Dented => write!(f, "Dented"),
            CornGroup::Mixed => write!(f, "Mixed"),
        }
    }
}

/// Consistency sub-sample used for the group
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct CornConsistency {
    sample_grams: f64,
    hard_grams: f64,
    semi_hard_grams: f64,
    dented_grams: f64,
}

/// Consistency shares, in percent of the group sample
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Default)]
pub struct CornConsistencyPercentages {
    pub hard: f64,
    pub semi_hard: f64,
    pub dented: f64,
}

impl CornConsistency {
    pub fn new(
        sample_grams: f64,
        hard_grams: f64,
        semi_hard_grams: f64,
        dented_grams: f64,
    ) -> GradingResult<Self> {
        check("consistency.sample_grams", validate_positive_weight(sample_grams))?;
        check(
            "consistency.hard_grams",
            validate_fraction_weight(hard_grams, sample_grams),
        )?;
        check(
            "consistency.semi_hard_grams",
            validate_fraction_weight(semi_hard_grams, sample_grams),
        )?;
        check(
            "consistency.dented_grams",
            validate_fraction_weight(dented_grams, sample_grams),
        )?;
        Ok(Self {
            sample_grams,
            hard_grams,
            semi_hard_grams,
            dented_grams,
        })
    }

    pub fn percentages(&self) -> CornConsistencyPercentages {
        CornConsistencyPercentages {
            hard: percentage_of(self.hard_grams, self.sample_grams),
            semi_hard: percentage_of(self.semi_hard_grams, self.sample_grams),
            dented: percentage_of(self.dented_grams, self.sample_grams),
        }
    }
}

/// Color sub-sample used for the class
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct CornColors {
    sample_grams: f64,
    yellow_grams: f64,
    white_grams: f64,
    colored_grams: f64,
}

/// Color shares, in percent of the class sample
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Default)]
pub struct CornColorPercentages {
    pub yellow: f64,
    pub white: f64,
    pub colored: f64,
}

impl CornColors {
    pub fn new(
        sample_grams: f64,
        yellow_grams: f64,
        white_grams: f64,
        colored_grams: f64,
    ) -> GradingResult<Self> {
        check("colors.sample_grams", validate_positive_weight(sample_grams))?;
        check(
            "colors.yellow_grams",
            validate_fraction_weight(yellow_grams, sample_grams),
        )?;
        check(
            "colors.white_grams",
            validate_fraction_weight(white_grams, sample_grams),
        )?;
        check(
            "colors.colored_grams",
            validate_fraction_weight(colored_grams, sample_grams),
        )?;
        Ok(Self {
            sample_grams,
            yellow_grams,
            white_grams,
            colored_grams,
        })
    }

    pub fn percentages(&self) -> CornColorPercentages {
        CornColorPercentages {
            yellow: percentage_of(self.yellow_grams, self.sample_grams),
            white: percentage_of(self.white_grams, self.sample_grams),
            colored: percentage_of(self.colored_grams, self.sample_grams),
        }
    }
}

/// Full corn grading result
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CornGrade {
    pub grain_type: CornType,
    pub class: CornClass,
    pub group: CornGroup,
    pub defects: CornDefectTable,
    pub discount: DiscountBreakdown,
    pub within_tolerances: bool,
    pub net_weight_kg: f64,
}

/// A corn sample with its consistency and color sub-samples
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Corn {
    sample: Sample<CornDefectKind>,
    consistency: CornConsistency,
    colors: CornColors,
}

impl Corn {
    pub fn new(
        sample: Sample<CornDefectKind>,
        consistency: CornConsistency,
        colors: CornColors,
    ) -> Self {
        Self {
            sample,
            consistency,
            colors,
        }
    }

    pub fn sample(&self) -> &Sample<CornDefectKind> {
        &self.sample
    }

    pub fn consistency(&self) -> &CornConsistency {
        &self.consistency
    }

    pub fn colors(&self) -> &CornColors {
        &self.colors
    }

    pub fn defect_table(&self) -> CornDefectTable {
        CornDefectTable::from_defects(self.sample.defects())
    }

    /// Walk the tiers from Type 1 to Out of Type; the first one whose every
    /// ceiling holds wins. A sample that fits none is disqualified.
    pub fn determine_type(
        &self,
        table: &TypeTable,
    ) -> GradingResult<TypeDetermination<CornType, CornDefectTable>> {
        let table = table.as_corn()?;
        let defects = self.defect_table();
        let impurity = self.sample.impurity().percentage();

        let tiers = [
            (CornType::Type1, &table.type1),
            (CornType::Type2, &table.type2),
            (CornType::Type3, &table.type3),
            (CornType::OutOfType, &table.out_of_type),
        ];
        let grain_type = tiers
            .into_iter()
            .find(|(_, limits)| fits_tier(&defects, impurity, limits))
            .map(|(grain_type, _)| grain_type)
            .unwrap_or(CornType::Disqualified);

        Ok(TypeDetermination {
            grain_type,
            defects,
        })
    }

    /// Class thresholds are inclusive
    pub fn determine_class(&self, table: &ClassTable) -> GradingResult<CornClass> {
        let table = table.as_corn()?;
        let colors = self.colors.percentages();

        let class = if colors.yellow >= table.min_yellow {
            CornClass::Yellow
        } else if colors.white >= table.min_white {
            CornClass::White
        } else if colors.colored >= table.min_other {
            CornClass::Colored
        } else {
            CornClass::Mixed
        };
        Ok(class)
    }

    /// Group thresholds are strict: a share equal to the minimum does not qualify
    pub fn determine_group(&self, table: &CornGroupTable) -> CornGroup {
        let consistency = self.consistency.percentages();

        if consistency.hard > table.min_hard {
            CornGroup::Hard
        } else if consistency.semi_hard > table.min_semi_hard {
            CornGroup::SemiHard
        } else if consistency.dented > table.min_dented {
            CornGroup::Dented
        } else {
            CornGroup::Mixed
        }
    }

    pub fn grade(&self, tables: &ThresholdTables) -> GradingResult<CornGrade> {
        let determination = self.determine_type(&tables.corn_type)?;
        let class = self.determine_class(&tables.corn_class)?;
        let group = self.determine_group(&tables.corn_group);
        let discount = self.sample.discount_breakdown();

        Ok(CornGrade {
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

fn fits_tier(defects: &CornDefectTable, impurity: f64, limits: &CornTierLimits) -> bool {
    defects.burnt <= limits.burnt
        && defects.damaged() <= limits.damaged
        && defects.broken <= limits.broken
        && impurity <= limits.impurity
        && defects.weevil_damaged <= limits.weevil_damaged
}
