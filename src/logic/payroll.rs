//! Salary arithmetic and deduction rules.
//!
//! The server recomputes and stores the net amount on every write; these
//! functions mirror that computation so the live preview in the salary
//! form and the stored value can never disagree.

use super::FieldError;
use crate::model::Deduction;

/// Monetary amount a single deduction takes off the given gross salary.
pub fn deduction_amount(gross: f64, deduction: &Deduction) -> f64 {
    if deduction.is_percentage {
        gross * deduction.value / 100.0
    } else {
        deduction.value
    }
}

/// Net salary after all deductions, clamped at zero. Deductions exceeding
/// the gross never produce a negative payout.
pub fn net_salary(gross: f64, deductions: &[Deduction]) -> f64 {
    let total: f64 = deductions.iter().map(|d| deduction_amount(gross, d)).sum();
    (gross - total).max(0.0)
}

/// Checks a deduction row before it may be appended to the working list.
/// On rejection the caller leaves the list untouched.
pub fn validate_deduction(name: &str, value: f64) -> Result<(), FieldError> {
    if name.trim().is_empty() {
        return Err(FieldError::new("deductionName", "Deduction name is required"));
    }
    if value <= 0.0 {
        return Err(FieldError::new(
            "deductionValue",
            "Deduction value must be greater than 0",
        ));
    }
    Ok(())
}

/// Checks the gross amount before a salary draft may be submitted.
pub fn validate_gross(gross: f64) -> Result<(), FieldError> {
    if gross <= 0.0 {
        return Err(FieldError::new(
            "grossSalary",
            "Gross salary must be greater than 0",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DeductionType;

    fn ded(name: &str, value: f64, is_percentage: bool) -> Deduction {
        Deduction {
            id: None,
            kind: DeductionType::Custom,
            name: name.into(),
            value,
            is_percentage,
        }
    }

    #[test]
    fn percentage_and_flat_amounts() {
        assert_eq!(deduction_amount(5000.0, &ded("Income Tax", 20.0, true)), 1000.0);
        assert_eq!(deduction_amount(5000.0, &ded("Union Fee", 150.0, false)), 150.0);
    }

    #[test]
    fn net_with_mixed_deductions() {
        let ds = vec![ded("Income Tax", 20.0, true), ded("Health Insurance", 150.0, false)];
        assert_eq!(net_salary(5000.0, &ds), 3850.0);
    }

    #[test]
    fn net_clamps_at_zero() {
        let ds = vec![ded("Tax", 90.0, true), ded("Fee", 50.0, false)];
        assert_eq!(net_salary(100.0, &ds), 0.0);
    }

    #[test]
    fn net_without_deductions_is_gross() {
        assert_eq!(net_salary(4200.0, &[]), 4200.0);
    }

    #[test]
    fn deduction_name_must_not_be_blank() {
        let err = validate_deduction("   ", 10.0).unwrap_err();
        assert_eq!(err.field, "deductionName");
        assert_eq!(err.message, "Deduction name is required");
    }

    #[test]
    fn deduction_value_must_be_positive() {
        let err = validate_deduction("Parking", 0.0).unwrap_err();
        assert_eq!(err.field, "deductionValue");
        assert!(validate_deduction("Parking", -5.0).is_err());
        assert!(validate_deduction("Parking", 0.01).is_ok());
    }

    #[test]
    fn gross_must_be_positive() {
        assert_eq!(validate_gross(0.0).unwrap_err().field, "grossSalary");
        assert!(validate_gross(1.0).is_ok());
    }
}
