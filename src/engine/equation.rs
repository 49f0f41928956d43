use crate::models::{EquationForm, GrowthCoefficient};

/// Lower bound applied to x inside logarithmic and square-root sub-terms.
/// Keeps `ln(ln(x + 1))` and `sqrt(x)` defined for zero or negative inputs.
pub const MIN_LOG_INPUT: f64 = 0.01;

/// Evaluate an allometric equation at `x` with the record's coefficients.
///
/// Pure and total: unrecognized forms fall back to the linear formula, the
/// log/sqrt sub-terms see x clamped to [`MIN_LOG_INPUT`], and the result is
/// clamped to be non-negative (no negative physical dimension).
///
/// The clamp applies only inside the log/sqrt sub-terms; the raw x is used
/// in additive and exponential terms, including the `x * mse/2` weighting of
/// the third log-log variant.
pub fn evaluate(form: &EquationForm, x: f64, coeffs: &GrowthCoefficient) -> f64 {
    let a = coeffs.a;
    let b = coeffs.b;
    let c = coeffs.c.unwrap_or(0.0);
    let d = coeffs.d.unwrap_or(0.0);
    let mse = coeffs.mse;

    let safe_x = x.max(MIN_LOG_INPUT);

    let y = match form {
        EquationForm::Linear | EquationForm::Unknown(_) => a + b * x,
        EquationForm::Quadratic => a + b * x + c * x.powi(2),
        EquationForm::Cubic => a + b * x + c * x.powi(2) + d * x.powi(3),
        EquationForm::LogLogW1 => (a + b * (safe_x + 1.0).ln().ln() + mse / 2.0).exp(),
        EquationForm::LogLogW2 => {
            (a + b * (safe_x + 1.0).ln().ln() + safe_x.sqrt() * (mse / 2.0)).exp()
        }
        EquationForm::LogLogW3 => (a + b * (safe_x + 1.0).ln().ln() + x * (mse / 2.0)).exp(),
        EquationForm::ExpoW1 => (a + b * x + mse / 2.0).exp(),
    };

    y.max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use proptest::prelude::*;

    fn coeffs(a: f64, b: f64, c: Option<f64>, d: Option<f64>, mse: f64) -> GrowthCoefficient {
        GrowthCoefficient {
            a,
            b,
            c,
            d,
            mse,
            ..GrowthCoefficient::default()
        }
    }

    #[test]
    fn test_linear() {
        let co = coeffs(2.0, 3.0, None, None, 0.0);
        assert_approx_eq!(evaluate(&EquationForm::Linear, 10.0, &co), 32.0);
    }

    #[test]
    fn test_quadratic() {
        let co = coeffs(1.0, 2.0, Some(3.0), None, 0.0);
        assert_approx_eq!(evaluate(&EquationForm::Quadratic, 2.0, &co), 17.0);
    }

    #[test]
    fn test_cubic() {
        let co = coeffs(1.0, 1.0, Some(1.0), Some(1.0), 0.0);
        // 1 + 2 + 4 + 8
        assert_approx_eq!(evaluate(&EquationForm::Cubic, 2.0, &co), 15.0);
    }

    #[test]
    fn test_missing_coefficients_default_to_zero() {
        // Quadratic with c = None degenerates to linear
        let co = coeffs(1.0, 2.0, None, None, 0.0);
        assert_approx_eq!(evaluate(&EquationForm::Quadratic, 3.0, &co), 7.0);
        // Cubic with c = d = None likewise
        assert_approx_eq!(evaluate(&EquationForm::Cubic, 3.0, &co), 7.0);
    }

    #[test]
    fn test_loglogw1() {
        let co = coeffs(0.5, 1.2, None, None, 0.04);
        let x: f64 = 20.0;
        let expected = (0.5 + 1.2 * (x + 1.0).ln().ln() + 0.02).exp();
        assert_approx_eq!(evaluate(&EquationForm::LogLogW1, x, &co), expected, 1e-10);
    }

    #[test]
    fn test_loglogw2() {
        let co = coeffs(0.5, 1.2, None, None, 0.04);
        let x: f64 = 20.0;
        let expected = (0.5 + 1.2 * (x + 1.0).ln().ln() + x.sqrt() * 0.02).exp();
        assert_approx_eq!(evaluate(&EquationForm::LogLogW2, x, &co), expected, 1e-10);
    }

    #[test]
    fn test_loglogw3_uses_raw_x_in_mse_term() {
        let co = coeffs(0.5, 1.2, None, None, 0.04);
        // Negative x: the log sub-term sees the clamp, the mse term does not
        let x: f64 = -3.0;
        let expected = (0.5 + 1.2 * (MIN_LOG_INPUT + 1.0_f64).ln().ln() + x * 0.02).exp();
        assert_approx_eq!(evaluate(&EquationForm::LogLogW3, x, &co), expected, 1e-10);
    }

    #[test]
    fn test_expow1() {
        let co = coeffs(0.1, 0.05, None, None, 0.02);
        let expected = (0.1 + 0.05 * 12.0 + 0.01_f64).exp();
        assert_approx_eq!(evaluate(&EquationForm::ExpoW1, 12.0, &co), expected, 1e-10);
    }

    #[test]
    fn test_expow1_uses_raw_negative_x() {
        let co = coeffs(0.0, 1.0, None, None, 0.0);
        let expected = (-2.0_f64).exp();
        assert_approx_eq!(evaluate(&EquationForm::ExpoW1, -2.0, &co), expected, 1e-10);
    }

    #[test]
    fn test_unknown_form_falls_back_to_linear() {
        let co = coeffs(2.0, 3.0, Some(99.0), Some(99.0), 5.0);
        let form = EquationForm::Unknown("mystery".to_string());
        assert_approx_eq!(evaluate(&form, 10.0, &co), 32.0);
    }

    #[test]
    fn test_negative_result_clamped_to_zero() {
        let co = coeffs(-10.0, 0.0, None, None, 0.0);
        assert_eq!(evaluate(&EquationForm::Linear, 5.0, &co), 0.0);
    }

    #[test]
    fn test_log_forms_defined_at_zero_and_negative_x() {
        let co = coeffs(0.5, 1.2, None, None, 0.04);
        for form in [
            EquationForm::LogLogW1,
            EquationForm::LogLogW2,
            EquationForm::LogLogW3,
        ] {
            for x in [0.0, -1.0, -100.0] {
                let y = evaluate(&form, x, &co);
                assert!(y.is_finite(), "{form} at x={x} gave {y}");
                assert!(y >= 0.0);
            }
        }
    }

    proptest! {
        #[test]
        fn prop_evaluate_never_negative_or_nan(
            a in -5.0..5.0f64,
            b in -0.5..0.5f64,
            c in proptest::option::of(-0.1..0.1f64),
            d in proptest::option::of(-0.01..0.01f64),
            mse in 0.0..0.5f64,
            x in -10.0..100.0f64,
        ) {
            let co = coeffs(a, b, c, d, mse);
            let forms = [
                EquationForm::Linear,
                EquationForm::Quadratic,
                EquationForm::Cubic,
                EquationForm::LogLogW1,
                EquationForm::LogLogW2,
                EquationForm::LogLogW3,
                EquationForm::ExpoW1,
                EquationForm::Unknown("n/a".to_string()),
            ];
            for form in &forms {
                let y = evaluate(form, x, &co);
                prop_assert!(!y.is_nan(), "{form} produced NaN at x={x}");
                prop_assert!(y >= 0.0, "{form} produced {y} at x={x}");
            }
        }
    }
}
