//! Common types used across the grading core

use serde::{Deserialize, Serialize};

/// Commodities covered by the grading standard
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Commodity {
    Corn,
    Soybean,
}

impl std::fmt::Display for Commodity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Commodity::Corn => write!(f, "corn"),
            Commodity::Soybean => write!(f, "soybean"),
        }
    }
}

/// Outcome of a type determination together with the defect aggregate the
/// tiers were evaluated against
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TypeDetermination<T, D> {
    pub grain_type: T,
    pub defects: D,
}

/// Weight discount split by origin
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct DiscountBreakdown {
    pub defects_kg: f64,
    pub impurity_kg: f64,
    pub moisture_kg: f64,
    pub total_kg: f64,
}

impl DiscountBreakdown {
    pub fn new(defects_kg: f64, impurity_kg: f64, moisture_kg: f64) -> Self {
        Self {
            defects_kg,
            impurity_kg,
            moisture_kg,
            total_kg: defects_kg + impurity_kg + moisture_kg,
        }
    }
}
