//! Toleranced measurements: moisture, impurities and individual defects
//!
//! Each measurement reports a percentage of its sample and a tolerance limit.
//! Anything at or above the limit is discounted from the lot in proportion to
//! the excess, reduced by the measurement's discount rate (deságio).

use serde::Serialize;

use crate::error::GradingResult;
use crate::validation::{
    check, percentage_of, validate_fraction_weight, validate_percentage, validate_positive_weight,
};

/// A percentage measured against a tolerance limit
pub trait Tolerated {
    /// Measured share of the sample, 0-100
    fn percentage(&self) -> f64;

    /// Percentage below which no discount applies
    fn tolerance_limit(&self) -> f64;

    /// Share of the computed discount that is waived, 0-100
    fn discount_rate(&self) -> f64 {
        0.0
    }

    /// Strictly below the limit; a measurement exactly at the limit is out of tolerance
    fn is_within_tolerance(&self) -> bool {
        self.percentage() < self.tolerance_limit()
    }

    /// Weight to deduct from a lot of `initial_weight_kg`
    fn discount_kg(&self, initial_weight_kg: f64) -> f64 {
        if self.is_within_tolerance() {
            return 0.0;
        }
        let limit = self.tolerance_limit();
        // Only reachable at 100% with a 100% limit, where the excess ratio tends to 1
        let excess = if limit >= 100.0 {
            1.0
        } else {
            (self.percentage() - limit) / (100.0 - limit)
        };
        initial_weight_kg * excess * (100.0 - self.discount_rate()) / 100.0
    }
}

/// Weight of one fraction of a sample
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct SampleFraction {
    weight_grams: f64,
    sample_grams: f64,
}

impl SampleFraction {
    pub fn new(weight_grams: f64, sample_grams: f64) -> GradingResult<Self> {
        check("sample_grams", validate_positive_weight(sample_grams))?;
        check(
            "weight_grams",
            validate_fraction_weight(weight_grams, sample_grams),
        )?;
        Ok(Self {
            weight_grams,
            sample_grams,
        })
    }

    pub fn weight_grams(&self) -> f64 {
        self.weight_grams
    }

    pub fn sample_grams(&self) -> f64 {
        self.sample_grams
    }

    pub fn percentage(&self) -> f64 {
        percentage_of(self.weight_grams, self.sample_grams)
    }
}

/// Moisture content of a lot
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct Moisture {
    percentage: f64,
    tolerance_limit: f64,
}

impl Moisture {
    pub fn new(percentage: f64, tolerance_limit: f64) -> GradingResult<Self> {
        check("moisture.percentage", validate_percentage(percentage))?;
        check("moisture.tolerance_limit", validate_percentage(tolerance_limit))?;
        Ok(Self {
            percentage,
            tolerance_limit,
        })
    }
}

impl Tolerated for Moisture {
    fn percentage(&self) -> f64 {
        self.percentage
    }

    fn tolerance_limit(&self) -> f64 {
        self.tolerance_limit
    }
}

/// Foreign matter and impurities; a defect with no discount rate
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct Impurity {
    fraction: SampleFraction,
    tolerance_limit: f64,
}

impl Impurity {
    pub fn new(weight_grams: f64, sample_grams: f64, tolerance_limit: f64) -> GradingResult<Self> {
        let fraction = SampleFraction::new(weight_grams, sample_grams)?;
        check("impurity.tolerance_limit", validate_percentage(tolerance_limit))?;
        Ok(Self {
            fraction,
            tolerance_limit,
        })
    }

    pub fn fraction(&self) -> &SampleFraction {
        &self.fraction
    }
}

impl Tolerated for Impurity {
    fn percentage(&self) -> f64 {
        self.fraction.percentage()
    }

    fn tolerance_limit(&self) -> f64 {
        self.tolerance_limit
    }
}

/// Weight of one kind of defective grain found in a sample
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct Defect<K> {
    kind: K,
    fraction: SampleFraction,
    discount_rate: f64,
    tolerance_limit: f64,
}

impl<K: Copy> Defect<K> {
    pub fn new(
        kind: K,
        weight_grams: f64,
        sample_grams: f64,
        discount_rate: f64,
        tolerance_limit: f64,
    ) -> GradingResult<Self> {
        let fraction = SampleFraction::new(weight_grams, sample_grams)?;
        check("defect.discount_rate", validate_percentage(discount_rate))?;
        check("defect.tolerance_limit", validate_percentage(tolerance_limit))?;
        Ok(Self {
            kind,
            fraction,
            discount_rate,
            tolerance_limit,
        })
    }

    pub fn kind(&self) -> K {
        self.kind
    }

    pub fn fraction(&self) -> &SampleFraction {
        &self.fraction
    }
}

impl<K> Tolerated for Defect<K> {
    fn percentage(&self) -> f64 {
        self.fraction.percentage()
    }

    fn tolerance_limit(&self) -> f64 {
        self.tolerance_limit
    }

    fn discount_rate(&self) -> f64 {
        self.discount_rate
    }
}
