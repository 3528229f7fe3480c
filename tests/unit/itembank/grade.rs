//! Tests for grade level normalisation

#[cfg(test)]
mod tests {
    use mathmatix_tools::itembank::grade::{
        CALCULUS_GRADE, DEFAULT_GRADE, clean_grade, resolve_grade,
    };

    // Tests blank and nan cells fall back to HS
    // Verified by checking nan case-sensitively
    #[test]
    fn test_missing_grades() {
        assert_eq!(clean_grade(""), DEFAULT_GRADE);
        assert_eq!(clean_grade("   "), DEFAULT_GRADE);
        assert_eq!(clean_grade("nan"), DEFAULT_GRADE);
        assert_eq!(clean_grade("NaN"), DEFAULT_GRADE);
    }

    // Tests serial grades decode to their month
    // Verified by returning the day instead
    #[test]
    fn test_serial_grades() {
        assert_eq!(clean_grade("45962"), "11");
        assert_eq!(clean_grade(" 45900 "), "9");
        assert_eq!(clean_grade("45000"), "45000");
    }

    // Tests day-month text maps through the month table
    // Verified by checking Dec before Nov
    #[test]
    fn test_day_month_grades() {
        assert_eq!(clean_grade("12-Nov"), "11");
        assert_eq!(clean_grade("5-Sep"), "9");
        assert_eq!(clean_grade("1-Oct"), "10");
        assert_eq!(clean_grade("3-Dec"), "12");
        assert_eq!(clean_grade("3-Jan"), "3-Jan");
    }

    // Tests kindergarten folding and float suffix removal
    // Verified by keeping PK as is
    #[test]
    fn test_simple_rewrites() {
        assert_eq!(clean_grade("PK"), "K");
        assert_eq!(clean_grade("K"), "K");
        assert_eq!(clean_grade("7.0"), "7");
        assert_eq!(clean_grade("HS-Alg1"), "HS-Alg1");
    }

    // Tests blank grades use the skill to pick a fallback
    // Verified by trimming before the blank check
    #[test]
    fn test_resolve_grade() {
        assert_eq!(resolve_grade("", "AP.Calc.1"), CALCULUS_GRADE);
        assert_eq!(resolve_grade("nan", "8.EE.1"), DEFAULT_GRADE);
        assert_eq!(resolve_grade(" ", "AP.Calc.1"), DEFAULT_GRADE);
        assert_eq!(resolve_grade("8.0", "AP.Calc.1"), "8");
    }
}
