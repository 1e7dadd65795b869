//! Tests for tolerance checks and weight discounts
//!
//! Covers the toleranced measurement contract and the lot-level aggregation,
//! where moisture is discounted from the lot net of impurities.

use proptest::prelude::*;
use shared::{
    CornDefectKind, Defect, Impurity, Moisture, Sample, SoybeanDefectKind, Tolerated,
};

fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() < tolerance
}

// =============================================================================
// Lot Discount Tests
// =============================================================================

mod lot_discount {
    use super::*;

    #[test]
    fn impurity_then_moisture_scenario() {
        // 18% moisture against 14%, 2g of impurities in 100g against 1%, 1000kg lot
        let sample = Sample::<CornDefectKind>::new(
            100.0,
            1000.0,
            Moisture::new(18.0, 14.0).unwrap(),
            Impurity::new(2.0, 100.0, 1.0).unwrap(),
            Vec::new(),
        )
        .unwrap();

        let breakdown = sample.discount_breakdown();
        assert!(approx_eq(breakdown.impurity_kg, 10.10, 0.01));
        assert!(approx_eq(breakdown.moisture_kg, 46.04, 0.01));
        assert!(approx_eq(sample.total_discount_kg(), 56.14, 0.01));
    }

    #[test]
    fn moisture_uses_lot_net_of_impurities() {
        let sample = Sample::<CornDefectKind>::new(
            100.0,
            1000.0,
            Moisture::new(18.0, 14.0).unwrap(),
            Impurity::new(2.0, 100.0, 1.0).unwrap(),
            Vec::new(),
        )
        .unwrap();

        let on_full_lot = Moisture::new(18.0, 14.0).unwrap().discount_kg(1000.0);
        assert!(sample.discount_breakdown().moisture_kg < on_full_lot);
    }

    #[test]
    fn defects_impurities_and_moisture_add_up() {
        let lot = 1000.0;
        let defects = vec![
            Defect::new(SoybeanDefectKind::Greenish, 4.0, 100.0, 10.0, 2.0).unwrap(),
            Defect::new(SoybeanDefectKind::Scorched, 1.0, 100.0, 10.0, 0.3).unwrap(),
            Defect::new(SoybeanDefectKind::Moldy, 1.0, 100.0, 10.0, 0.5).unwrap(),
        ];
        let sample = Sample::new(
            100.0,
            lot,
            Moisture::new(18.0, 14.0).unwrap(),
            Impurity::new(2.0, 100.0, 1.0).unwrap(),
            defects,
        )
        .unwrap();

        let impurity = lot * (2.0 - 1.0) / (100.0 - 1.0);
        let moisture = (lot - impurity) * (18.0 - 14.0) / (100.0 - 14.0);
        let greenish = lot * ((4.0 - 2.0) / (100.0 - 2.0) * ((100.0 - 10.0) / 100.0));
        let scorched = lot * ((1.0 - 0.3) / (100.0 - 0.3) * ((100.0 - 10.0) / 100.0));
        let moldy = lot * ((1.0 - 0.5) / (100.0 - 0.5) * ((100.0 - 10.0) / 100.0));
        let expected = impurity + moisture + greenish + scorched + moldy;

        let breakdown = sample.discount_breakdown();
        assert!(approx_eq(breakdown.defects_kg, greenish + scorched + moldy, 1e-9));
        assert!(approx_eq(sample.total_discount_kg(), expected, 1e-9));
        assert!(approx_eq(sample.net_weight_kg(), lot - expected, 1e-9));
        assert!(!sample.is_within_all_tolerances());
    }

    #[test]
    fn within_all_tolerances_requires_every_measurement() {
        let within = Sample::new(
            100.0,
            50.0,
            Moisture::new(13.0, 14.0).unwrap(),
            Impurity::new(0.5, 100.0, 1.0).unwrap(),
            vec![Defect::new(CornDefectKind::Broken, 2.0, 100.0, 0.0, 3.0).unwrap()],
        )
        .unwrap();
        assert!(within.is_within_all_tolerances());

        // Same sample, moisture exactly at its limit
        let at_limit = Sample::new(
            100.0,
            50.0,
            Moisture::new(14.0, 14.0).unwrap(),
            Impurity::new(0.5, 100.0, 1.0).unwrap(),
            vec![Defect::new(CornDefectKind::Broken, 2.0, 100.0, 0.0, 3.0).unwrap()],
        )
        .unwrap();
        assert!(!at_limit.is_within_all_tolerances());
        assert_eq!(at_limit.total_discount_kg(), 0.0);
    }
}

// =============================================================================
// Construction Boundary Tests
// =============================================================================

mod construction {
    use super::*;

    #[test]
    fn boundary_percentages_accepted() {
        assert!(Moisture::new(0.0, 0.0).is_ok());
        assert!(Moisture::new(100.0, 100.0).is_ok());
        assert!(Impurity::new(0.0, 100.0, 0.0).is_ok());
        assert!(Impurity::new(100.0, 100.0, 100.0).is_ok());
        assert!(Defect::new(CornDefectKind::Burnt, 5.0, 100.0, 0.0, 100.0).is_ok());
        assert!(Defect::new(CornDefectKind::Burnt, 5.0, 100.0, 100.0, 0.0).is_ok());
    }

    #[test]
    fn just_outside_boundaries_rejected() {
        assert!(Moisture::new(100.0001, 14.0).is_err());
        assert!(Moisture::new(-0.0001, 14.0).is_err());
        assert!(Moisture::new(12.0, 100.0001).is_err());
        assert!(Impurity::new(1.0, 100.0, -0.0001).is_err());
        assert!(Defect::new(CornDefectKind::Burnt, 5.0, 100.0, 100.0001, 1.0).is_err());
        assert!(Defect::new(CornDefectKind::Burnt, 5.0, 100.0, -0.0001, 1.0).is_err());
    }

    #[test]
    fn defect_weight_rules() {
        assert!(Defect::new(CornDefectKind::Burnt, -0.0001, 100.0, 0.0, 1.0).is_err());
        assert!(Defect::new(CornDefectKind::Burnt, 100.0001, 100.0, 0.0, 1.0).is_err());
        assert!(Defect::new(CornDefectKind::Burnt, 1.0, 0.0, 0.0, 1.0).is_err());
        assert!(Impurity::new(1.0, -1.0, 1.0).is_err());
    }
}

// =============================================================================
// Tolerance Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Percentage of any valid defect lies in 0-100
    #[test]
    fn percentage_within_bounds(
        sample in 1.0f64..10_000.0,
        share in 0.0f64..=1.0,
    ) {
        let defect = Defect::new(CornDefectKind::Broken, sample * share, sample, 0.0, 3.0).unwrap();
        prop_assert!(defect.percentage() >= 0.0);
        prop_assert!(defect.percentage() <= 100.0 + 1e-9);
    }

    /// No discount while within tolerance, whatever the lot weight
    #[test]
    fn no_discount_within_tolerance(
        limit in 0.1f64..100.0,
        below in 0.0f64..0.99,
        rate in 0.0f64..=100.0,
        lot in 0.0f64..1_000_000.0,
    ) {
        let weight = limit * below;
        let defect = Defect::new(SoybeanDefectKind::Greenish, weight, 100.0, rate, limit).unwrap();
        prop_assert!(defect.is_within_tolerance());
        prop_assert_eq!(defect.discount_kg(lot), 0.0);
    }

    /// A measurement exactly at its limit is out of tolerance
    #[test]
    fn at_limit_is_out_of_tolerance(limit in 0.0f64..=100.0) {
        let moisture = Moisture::new(limit, limit).unwrap();
        prop_assert!(!moisture.is_within_tolerance());
    }

    /// Discounts never go negative nor exceed the lot
    #[test]
    fn discount_bounded_by_lot(
        percentage in 0.0f64..=100.0,
        limit in 0.0f64..100.0,
        rate in 0.0f64..=100.0,
        lot in 1.0f64..1_000_000.0,
    ) {
        let defect = Defect::new(CornDefectKind::Moldy, percentage, 100.0, rate, limit).unwrap();
        let discount = defect.discount_kg(lot);
        prop_assert!(discount >= 0.0);
        prop_assert!(discount <= lot * (1.0 + 1e-9));
    }
}
