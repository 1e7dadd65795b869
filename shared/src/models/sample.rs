//! Grain sample and lot-level discount aggregation

use serde::Serialize;

use super::measurement::{Defect, Impurity, Moisture, Tolerated};
use crate::error::{GradingError, GradingResult};
use crate::types::DiscountBreakdown;
use crate::validation::{check, validate_positive_weight};

/// A sample drawn from a lot, with the measurements shared by every commodity
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Sample<K> {
    sample_grams: f64,
    lot_weight_kg: f64,
    moisture: Moisture,
    impurity: Impurity,
    defects: Vec<Defect<K>>,
}

impl<K: Copy + PartialEq + std::fmt::Display> Sample<K> {
    /// Build a sample. Each defect kind may appear at most once.
    pub fn new(
        sample_grams: f64,
        lot_weight_kg: f64,
        moisture: Moisture,
        impurity: Impurity,
        defects: Vec<Defect<K>>,
    ) -> GradingResult<Self> {
        check("sample_grams", validate_positive_weight(sample_grams))?;
        check("lot_weight_kg", validate_positive_weight(lot_weight_kg))?;

        for (index, defect) in defects.iter().enumerate() {
            if defects[..index].iter().any(|d| d.kind() == defect.kind()) {
                return Err(GradingError::invalid(
                    "defects",
                    format!("defect kind {} listed more than once", defect.kind()),
                ));
            }
        }

        Ok(Self {
            sample_grams,
            lot_weight_kg,
            moisture,
            impurity,
            defects,
        })
    }
}

impl<K> Sample<K> {
    pub fn sample_grams(&self) -> f64 {
        self.sample_grams
    }

    pub fn lot_weight_kg(&self) -> f64 {
        self.lot_weight_kg
    }

    pub fn moisture(&self) -> &Moisture {
        &self.moisture
    }

    pub fn impurity(&self) -> &Impurity {
        &self.impurity
    }

    pub fn defects(&self) -> &[Defect<K>] {
        &self.defects
    }

    /// Discounts by origin. Impurities are removed first, so moisture is
    /// discounted from the lot net of the impurity discount.
    pub fn discount_breakdown(&self) -> DiscountBreakdown {
        let defects_kg = self
            .defects
            .iter()
            .fold(0.0, |acc, defect| acc + defect.discount_kg(self.lot_weight_kg));
        let impurity_kg = self.impurity.discount_kg(self.lot_weight_kg);
        let moisture_kg = self.moisture.discount_kg(self.lot_weight_kg - impurity_kg);
        DiscountBreakdown::new(defects_kg, impurity_kg, moisture_kg)
    }

    pub fn total_discount_kg(&self) -> f64 {
        self.discount_breakdown().total_kg
    }

    /// Lot weight left after every discount
    pub fn net_weight_kg(&self) -> f64 {
        self.lot_weight_kg - self.total_discount_kg()
    }

    pub fn is_within_all_tolerances(&self) -> bool {
        self.defects.iter().all(|defect| defect.is_within_tolerance())
            && self.impurity.is_within_tolerance()
            && self.moisture.is_within_tolerance()
    }
}
