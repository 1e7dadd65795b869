//! Grading request and report contracts
//!
//! Raw measurements arrive as plain serde structures and are converted into
//! validated domain values before any classification runs.

use serde::{Deserialize, Serialize};

use super::corn::{Corn, CornColors, CornConsistency, CornGrade};
use super::defects::{CornDefectKind, SoybeanDefectKind};
use super::measurement::{Defect, Impurity, Moisture};
use super::sample::Sample;
use super::soybean::{Soybean, SoybeanColors, SoybeanGrade, SoybeanGroup};
use super::tables::ThresholdTables;
use crate::error::GradingResult;
use crate::types::Commodity;

/// Moisture reading
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoistureInput {
    pub percentage: f64,
    pub tolerance_limit: f64,
}

/// Impurity weighing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImpurityInput {
    pub weight_grams: f64,
    pub sample_grams: f64,
    pub tolerance_limit: f64,
}

/// One defect weighing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefectInput<K> {
    pub kind: K,
    pub weight_grams: f64,
    pub sample_grams: f64,
    #[serde(default)]
    pub discount_rate: f64,
    pub tolerance_limit: f64,
}

/// Measurements common to every commodity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleInput<K> {
    pub sample_grams: f64,
    pub lot_weight_kg: f64,
    pub moisture: MoistureInput,
    pub impurity: ImpurityInput,
    #[serde(default = "Vec::new")]
    pub defects: Vec<DefectInput<K>>,
}

impl<K: Copy + PartialEq + std::fmt::Display> SampleInput<K> {
    pub fn into_sample(self) -> GradingResult<Sample<K>> {
        let moisture = Moisture::new(self.moisture.percentage, self.moisture.tolerance_limit)?;
        let impurity = Impurity::new(
            self.impurity.weight_grams,
            self.impurity.sample_grams,
            self.impurity.tolerance_limit,
        )?;
        let defects = self
            .defects
            .into_iter()
            .map(|d| {
                Defect::new(
                    d.kind,
                    d.weight_grams,
                    d.sample_grams,
                    d.discount_rate,
                    d.tolerance_limit,
                )
            })
            .collect::<GradingResult<Vec<_>>>()?;
        Sample::new(
            self.sample_grams,
            self.lot_weight_kg,
            moisture,
            impurity,
            defects,
        )
    }
}

/// Corn consistency weighing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CornConsistencyInput {
    pub sample_grams: f64,
    pub hard_grams: f64,
    pub semi_hard_grams: f64,
    pub dented_grams: f64,
}

/// Corn color weighing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CornColorsInput {
    pub sample_grams: f64,
    pub yellow_grams: f64,
    pub white_grams: f64,
    pub colored_grams: f64,
}

/// Everything measured on a corn sample
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CornSampleInput {
    #[serde(flatten)]
    pub sample: SampleInput<CornDefectKind>,
    pub consistency: CornConsistencyInput,
    pub colors: CornColorsInput,
}

impl TryFrom<CornSampleInput> for Corn {
    type Error = crate::error::GradingError;

    fn try_from(input: CornSampleInput) -> GradingResult<Self> {
        let consistency = CornConsistency::new(
            input.consistency.sample_grams,
            input.consistency.hard_grams,
            input.consistency.semi_hard_grams,
            input.consistency.dented_grams,
        )?;
        let colors = CornColors::new(
            input.colors.sample_grams,
            input.colors.yellow_grams,
            input.colors.white_grams,
            input.colors.colored_grams,
        )?;
        Ok(Corn::new(input.sample.into_sample()?, consistency, colors))
    }
}

/// Soybean color weighing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoybeanColorsInput {
    pub sample_grams: f64,
    pub yellow_grams: f64,
    pub other_colors_grams: f64,
}

/// Everything measured on a soybean sample
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoybeanSampleInput {
    #[serde(flatten)]
    pub sample: SampleInput<SoybeanDefectKind>,
    pub colors: SoybeanColorsInput,
    #[serde(default)]
    pub group: SoybeanGroup,
}

impl TryFrom<SoybeanSampleInput> for Soybean {
    type Error = crate::error::GradingError;

    fn try_from(input: SoybeanSampleInput) -> GradingResult<Self> {
        let colors = SoybeanColors::new(
            input.colors.sample_grams,
            input.colors.yellow_grams,
            input.colors.other_colors_grams,
        )?;
        Ok(Soybean::new(input.sample.into_sample()?, colors))
    }
}

/// A grading request, tagged by commodity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "commodity", rename_all = "snake_case")]
pub enum GradingRequest {
    Corn(CornSampleInput),
    Soybean(SoybeanSampleInput),
}

impl GradingRequest {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn commodity(&self) -> Commodity {
        match self {
            GradingRequest::Corn(_) => Commodity::Corn,
            GradingRequest::Soybean(_) => Commodity::Soybean,
        }
    }

    /// Validate the measurements and grade them against `tables`
    pub fn grade(self, tables: &ThresholdTables) -> GradingResult<GradingOutcome> {
        match self {
            GradingRequest::Corn(input) => {
                let corn = Corn::try_from(input)?;
                Ok(GradingOutcome::Corn(corn.grade(tables)?))
            }
            GradingRequest::Soybean(input) => {
                let group = input.group;
                let soybean = Soybean::try_from(input)?;
                Ok(GradingOutcome::Soybean(soybean.grade(tables, group)?))
            }
        }
    }
}

/// Grading report, tagged by commodity
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "commodity", rename_all = "snake_case")]
pub enum GradingOutcome {
    Corn(CornGrade),
    Soybean(SoybeanGrade),
}

impl GradingOutcome {
    pub fn commodity(&self) -> Commodity {
        match self {
            GradingOutcome::Corn(_) => Commodity::Corn,
            GradingOutcome::Soybean(_) => Commodity::Soybean,
        }
    }

    pub fn total_discount_kg(&self) -> f64 {
        match self {
            GradingOutcome::Corn(grade) => grade.discount.total_kg,
            GradingOutcome::Soybean(grade) => grade.discount.total_kg,
        }
    }

    pub fn within_tolerances(&self) -> bool {
        match self {
            GradingOutcome::Corn(grade) => grade.within_tolerances,
            GradingOutcome::Soybean(grade) => grade.within_tolerances,
        }
    }

    /// Human readable type/class/group line
    pub fn summary(&self) -> String {
        match self {
            GradingOutcome::Corn(grade) => format!(
                "{}, class {}, group {}",
                grade.grain_type, grade.class, grade.group
            ),
            GradingOutcome::Soybean(grade) => format!(
                "{}, class {}, {}",
                grade.grain_type, grade.class, grade.group
            ),
        }
    }
}
