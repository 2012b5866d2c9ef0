//! Tests for risk band classification

use domain_underwriting::{ClassificationTable, RiskBand};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

mod boundaries {
    use super::*;

    #[test]
    fn test_upper_bounds_are_inclusive() {
        let table = ClassificationTable::default();
        assert_eq!(table.classify(dec!(0)).band, RiskBand::VeryLow);
        assert_eq!(table.classify(dec!(20.0)).band, RiskBand::VeryLow);
        assert_eq!(table.classify(dec!(20.1)).band, RiskBand::Low);
        assert_eq!(table.classify(dec!(40.0)).band, RiskBand::Low);
        assert_eq!(table.classify(dec!(40.1)).band, RiskBand::Moderate);
        assert_eq!(table.classify(dec!(60.0)).band, RiskBand::Moderate);
        assert_eq!(table.classify(dec!(60.1)).band, RiskBand::High);
        assert_eq!(table.classify(dec!(80.0)).band, RiskBand::High);
        assert_eq!(table.classify(dec!(80.1)).band, RiskBand::VeryHigh);
        assert_eq!(table.classify(dec!(100)).band, RiskBand::VeryHigh);
    }

    #[test]
    fn test_labels_and_grades() {
        let table = ClassificationTable::default();
        let class = table.classify(dec!(35));
        assert_eq!(class.label, "Low Risk");
        assert_eq!(class.grade, "A");
        assert_eq!(
            class.description,
            "Good risk profile with standard underwriting considerations"
        );
    }
}

mod guidance {
    use super::*;

    #[test]
    fn test_custom_table_overrides_wording_not_bounds() {
        let mut table = ClassificationTable::default();
        table.high.suggested_premium = "Refer to senior underwriter".to_string();
        let class = table.classify(dec!(67.9));
        assert_eq!(class.band, RiskBand::High);
        assert_eq!(class.suggested_premium, "Refer to senior underwriter");
    }
}

mod properties {
    use super::*;

    proptest! {
        #[test]
        fn prop_classification_is_monotone(
            a in 0u32..=1000,
            b in 0u32..=1000,
        ) {
            let table = ClassificationTable::default();
            let pa = Decimal::from(a) / dec!(10);
            let pb = Decimal::from(b) / dec!(10);
            let ca = table.classify(pa).band;
            let cb = table.classify(pb).band;
            if pa <= pb {
                prop_assert!(ca <= cb);
            }
        }
    }
}
