/// Conversion rate from one step to the next, in percent.
///
/// Zero when the current step is empty. Ratios above 100 (the next step
/// outgrew the current one) are clamped to 100 without warning.
#[inline(always)]
pub fn conversion_percentage(current: f64, next: f64) -> f64 {
    if current == 0.0 {
        0.0
    } else {
        (next / current * 100.0).min(100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(180.0, 90.0, 50.0)]
    #[case(100.0, 100.0, 100.0)]
    #[case(10.0, 25.0, 100.0)] // anomaly: clamped
    #[case(0.0, 5.0, 0.0)]
    #[case(0.0, 0.0, 0.0)]
    #[case(50.0, 0.0, 0.0)]
    #[case(3.0, 1.0, 1.0 / 3.0 * 100.0)]
    #[case(f64::MAX, f64::MAX / 4.0, 25.0)] // 100 * next would overflow
    #[case(2.0 * f64::MIN_POSITIVE, f64::MIN_POSITIVE, 50.0)]
    fn test_conversion_percentage(#[case] current: f64, #[case] next: f64, #[case] expected: f64) {
        assert_eq!(conversion_percentage(current, next), expected);
    }
}
