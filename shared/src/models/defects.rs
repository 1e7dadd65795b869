//! Defect kinds and per-commodity defect aggregates
//!
//! Tier limits are expressed over named categories, some of which are sums of
//! several defect kinds. The aggregates below map a sample's defects into
//! those categories; kinds absent from the sample count as 0%.

use serde::{Deserialize, Serialize};

use super::measurement::{Defect, Tolerated};

/// Corn defect kinds
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CornDefectKind {
    /// Burnt or heat-damaged (ardidos)
    Burnt,
    Moldy,
    Fermented,
    Sprouted,
    ShriveledImmature,
    /// Chalky (gessados)
    Chalky,
    /// Weevil damaged (carunchados)
    WeevilDamaged,
    Broken,
}

impl std::fmt::Display for CornDefectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CornDefectKind::Burnt => write!(f, "Burnt"),
            CornDefectKind::Moldy => write!(f, "Moldy"),
            CornDefectKind::Fermented => write!(f, "Fermented"),
            CornDefectKind::Sprouted => write!(f, "Sprouted"),
            CornDefectKind::ShriveledImmature => write!(f, "Shriveled/Immature"),
            CornDefectKind::Chalky => write!(f, "Chalky"),
            CornDefectKind::WeevilDamaged => write!(f, "Weevil Damaged"),
            CornDefectKind::Broken => write!(f, "Broken"),
        }
    }
}

/// Soybean defect kinds
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SoybeanDefectKind {
    /// Heat-damaged (ardidos)
    Burnt,
    /// Fire-scorched (queimados)
    Scorched,
    Moldy,
    Fermented,
    Sprouted,
    Immature,
    /// Shriveled (chochos)
    Shriveled,
    Greenish,
    /// Split, broken or crushed
    Broken,
    PestDamaged,
    OtherDamaged,
}

impl std::fmt::Display for SoybeanDefectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SoybeanDefectKind::Burnt => write!(f, "Burnt"),
            SoybeanDefectKind::Scorched => write!(f, "Scorched"),
            SoybeanDefectKind::Moldy => write!(f, "Moldy"),
            SoybeanDefectKind::Fermented => write!(f, "Fermented"),
            SoybeanDefectKind::Sprouted => write!(f, "Sprouted"),
            SoybeanDefectKind::Immature => write!(f, "Immature"),
            SoybeanDefectKind::Shriveled => write!(f, "Shriveled"),
            SoybeanDefectKind::Greenish => write!(f, "Greenish"),
            SoybeanDefectKind::Broken => write!(f, "Split/Broken/Crushed"),
            SoybeanDefectKind::PestDamaged => write!(f, "Pest Damaged"),
            SoybeanDefectKind::OtherDamaged => write!(f, "Other Damaged"),
        }
    }
}

/// Corn defect percentages by category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct CornDefectTable {
    pub burnt: f64,
    pub moldy: f64,
    pub fermented: f64,
    pub sprouted: f64,
    pub shriveled_immature: f64,
    pub chalky: f64,
    pub weevil_damaged: f64,
    pub broken: f64,
}

impl CornDefectTable {
    pub fn from_defects(defects: &[Defect<CornDefectKind>]) -> Self {
        let mut table = Self::default();
        for defect in defects {
            let slot = match defect.kind() {
                CornDefectKind::Burnt => &mut table.burnt,
                CornDefectKind::Moldy => &mut table.moldy,
                CornDefectKind::Fermented => &mut table.fermented,
                CornDefectKind::Sprouted => &mut table.sprouted,
                CornDefectKind::ShriveledImmature => &mut table.shriveled_immature,
                CornDefectKind::Chalky => &mut table.chalky,
                CornDefectKind::WeevilDamaged => &mut table.weevil_damaged,
                CornDefectKind::Broken => &mut table.broken,
            };
            *slot = defect.percentage();
        }
        table
    }

    /// Damaged grains (avariados). Weevil damage and broken grains have
    /// their own limits and are not part of it.
    pub fn damaged(&self) -> f64 {
        self.burnt
            + self.moldy
            + self.fermented
            + self.sprouted
            + self.shriveled_immature
            + self.chalky
    }
}

/// Soybean defect percentages by category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct SoybeanDefectTable {
    pub burnt: f64,
    pub scorched: f64,
    pub moldy: f64,
    pub fermented: f64,
    pub sprouted: f64,
    pub immature: f64,
    pub shriveled: f64,
    pub greenish: f64,
    pub broken: f64,
    pub pest_damaged: f64,
    pub other_damaged: f64,
}

impl SoybeanDefectTable {
    pub fn from_defects(defects: &[Defect<SoybeanDefectKind>]) -> Self {
        let mut table = Self::default();
        for defect in defects {
            let slot = match defect.kind() {
                SoybeanDefectKind::Burnt => &mut table.burnt,
                SoybeanDefectKind::Scorched => &mut table.scorched,
                SoybeanDefectKind::Moldy => &mut table.moldy,
                SoybeanDefectKind::Fermented => &mut table.fermented,
                SoybeanDefectKind::Sprouted => &mut table.sprouted,
                SoybeanDefectKind::Immature => &mut table.immature,
                SoybeanDefectKind::Shriveled => &mut table.shriveled,
                SoybeanDefectKind::Greenish => &mut table.greenish,
                SoybeanDefectKind::Broken => &mut table.broken,
                SoybeanDefectKind::PestDamaged => &mut table.pest_damaged,
                SoybeanDefectKind::OtherDamaged => &mut table.other_damaged,
            };
            *slot = defect.percentage();
        }
        table
    }

    pub fn burnt_scorched(&self) -> f64 {
        self.burnt + self.scorched
    }

    /// Pest damage counts for a quarter of its weight
    pub fn pest_and_other_damage(&self) -> f64 {
        self.pest_damaged / 4.0 + self.other_damaged
    }

    /// Damaged grains (avariados), including pest and other damage
    pub fn damaged(&self) -> f64 {
        self.burnt_scorched()
            + self.moldy
            + self.fermented
            + self.sprouted
            + self.immature
            + self.shriveled
            + self.pest_and_other_damage()
    }

    /// Severe defects used by the disqualification gate
    pub fn severe(&self) -> f64 {
        self.scorched + self.burnt + self.moldy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_corn_table_maps_by_kind() {
        let defects = vec![
            Defect::new(CornDefectKind::Burnt, 1.0, 100.0, 0.0, 1.0).unwrap(),
            Defect::new(CornDefectKind::WeevilDamaged, 3.0, 100.0, 0.0, 2.0).unwrap(),
            Defect::new(CornDefectKind::Broken, 4.0, 100.0, 0.0, 3.0).unwrap(),
        ];
        let table = CornDefectTable::from_defects(&defects);
        assert!(approx(table.burnt, 1.0));
        assert!(approx(table.weevil_damaged, 3.0));
        assert!(approx(table.broken, 4.0));
        assert_eq!(table.moldy, 0.0);
        assert_eq!(table.chalky, 0.0);
    }

    #[test]
    fn test_corn_damaged_excludes_weevil_and_broken() {
        let table = CornDefectTable {
            burnt: 1.0,
            moldy: 1.0,
            fermented: 1.0,
            sprouted: 1.0,
            shriveled_immature: 1.0,
            chalky: 1.0,
            weevil_damaged: 10.0,
            broken: 10.0,
        };
        assert!(approx(table.damaged(), 6.0));
    }

    #[test]
    fn test_soybean_damaged_includes_pest_and_other_damage() {
        let table = SoybeanDefectTable {
            burnt: 0.5,
            scorched: 0.5,
            moldy: 1.0,
            fermented: 1.0,
            sprouted: 1.0,
            immature: 1.0,
            shriveled: 1.0,
            greenish: 5.0,
            broken: 5.0,
            pest_damaged: 4.0,
            other_damaged: 2.0,
        };
        assert!(approx(table.burnt_scorched(), 1.0));
        assert!(approx(table.pest_and_other_damage(), 3.0));
        // 1.0 + 1.0 * 5 + (4.0 / 4 + 2.0)
        assert!(approx(table.damaged(), 9.0));
        assert!(approx(table.severe(), 2.0));
    }

    #[test]
    fn test_empty_tables_are_zero() {
        assert_eq!(CornDefectTable::from_defects(&[]).damaged(), 0.0);
        assert_eq!(SoybeanDefectTable::from_defects(&[]).damaged(), 0.0);
    }

    proptest! {
        /// Weevil damage and broken grains never count towards corn damaged
        #[test]
        fn prop_corn_damaged_excludes_weevil_and_broken(
            burnt in 0.0f64..10.0,
            moldy in 0.0f64..10.0,
            chalky in 0.0f64..10.0,
            weevil_damaged in 0.0f64..100.0,
            broken in 0.0f64..100.0,
        ) {
            let base = CornDefectTable { burnt, moldy, chalky, ..Default::default() };
            let with_extra = CornDefectTable { weevil_damaged, broken, ..base };
            prop_assert_eq!(with_extra.damaged(), base.damaged());
        }

        /// Pest damage weighs a quarter of other damage in soybean damaged
        #[test]
        fn prop_soybean_pest_damage_counts_for_a_quarter(pest_damaged in 0.0f64..100.0) {
            let pest = SoybeanDefectTable { pest_damaged, ..Default::default() };
            let other = SoybeanDefectTable { other_damaged: pest_damaged / 4.0, ..Default::default() };
            prop_assert!(approx(pest.damaged(), other.damaged()));
        }
    }
}
