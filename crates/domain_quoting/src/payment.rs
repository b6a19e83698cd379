//! Installment financing
//!
//! Converts a total annual premium into a fixed-payment installment
//! plan, with an optional full amortization schedule for the detail
//! view. All arithmetic stays on [`Decimal`]; the compounding factor is
//! built by exact multiplication rather than floating-point powers.

use rust_decimal::Decimal;
use serde::Serialize;

use core_kernel::{Money, Rate};

use crate::error::QuoteError;

/// Calculates the fixed periodic payment for a financed premium
///
/// A single installment is a lump payment of the present value with no
/// interest applied. A zero rate splits the present value evenly.
/// Otherwise the standard fixed-payment amortization formula applies
/// with a monthly rate of one twelfth of the annual rate.
pub fn installment(
    present_value: Money,
    annual_rate: Rate,
    installments: u32,
) -> Result<Money, QuoteError> {
    validate_terms(annual_rate, installments)?;

    if installments == 1 {
        return Ok(present_value);
    }

    let monthly = annual_rate.monthly();
    if monthly.is_zero() {
        return Ok(present_value.divide(Decimal::from(installments))?);
    }

    let factor = compound_factor(monthly, installments);
    let payment = present_value.amount() * (monthly * factor) / (factor - Decimal::ONE);
    Ok(Money::new(payment, present_value.currency()))
}

/// One line of the amortization detail view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AmortizationEntry {
    /// Installment number, starting at 1
    pub period: u32,
    pub payment: Money,
    pub interest: Money,
    pub principal: Money,
    /// Balance after this payment, clamped at zero for display
    pub balance: Money,
}

/// Builds the full fixed-payment amortization schedule
///
/// Interest accrues on the running balance at the monthly rate; the
/// remainder of each payment amortizes principal. The final balance
/// reaches zero within rounding tolerance.
pub fn amortization_schedule(
    present_value: Money,
    annual_rate: Rate,
    installments: u32,
) -> Result<Vec<AmortizationEntry>, QuoteError> {
    let payment = installment(present_value, annual_rate, installments)?;
    let currency = present_value.currency();

    if installments == 1 {
        return Ok(vec![AmortizationEntry {
            period: 1,
            payment,
            interest: Money::zero(currency),
            principal: payment,
            balance: Money::zero(currency),
        }]);
    }

    let monthly = annual_rate.monthly();
    let mut balance = present_value.amount();
    let mut schedule = Vec::with_capacity(installments as usize);

    for period in 1..=installments {
        let interest = balance * monthly;
        let principal = payment.amount() - interest;
        balance -= principal;
        if balance.is_sign_negative() {
            balance = Decimal::ZERO;
        }

        schedule.push(AmortizationEntry {
            period,
            payment,
            interest: Money::new(interest, currency),
            principal: Money::new(principal, currency),
            balance: Money::new(balance, currency),
        });
    }

    Ok(schedule)
}

fn validate_terms(annual_rate: Rate, installments: u32) -> Result<(), QuoteError> {
    if installments == 0 {
        return Err(QuoteError::validation(
            "Installment count must be at least 1",
        ));
    }
    if annual_rate.is_negative() {
        return Err(QuoteError::validation(format!(
            "Annual interest rate {annual_rate} must not be negative"
        )));
    }
    Ok(())
}

/// (1 + monthly)^n by repeated multiplication
fn compound_factor(monthly: Decimal, installments: u32) -> Decimal {
    let one_plus = Decimal::ONE + monthly;
    let mut factor = Decimal::ONE;
    for _ in 0..installments {
        factor *= one_plus;
    }
    factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_zero_rate_splits_evenly() {
        let payment = installment(Money::pen(dec!(12000)), Rate::zero(), 12).unwrap();
        assert_eq!(payment.amount(), dec!(1000.00));
    }

    #[test]
    fn test_single_installment_is_lump_sum_without_interest() {
        let payment = installment(Money::pen(dec!(12000)), Rate::new(dec!(0.04)), 1).unwrap();
        assert_eq!(payment.amount(), dec!(12000));
    }

    #[test]
    fn test_positive_rate_raises_payment_above_even_split() {
        let payment = installment(Money::pen(dec!(12000)), Rate::new(dec!(0.04)), 12).unwrap();
        assert!(payment.amount() > dec!(1000));
        assert!(payment.amount() < dec!(1030));
    }

    #[test]
    fn test_zero_installments_rejected() {
        let result = installment(Money::pen(dec!(12000)), Rate::zero(), 0);
        assert!(matches!(result, Err(QuoteError::Validation(_))));
    }

    #[test]
    fn test_negative_rate_rejected() {
        let result = installment(Money::pen(dec!(12000)), Rate::new(dec!(-0.01)), 12);
        assert!(matches!(result, Err(QuoteError::Validation(_))));
    }

    #[test]
    fn test_schedule_length_and_numbering() {
        let schedule =
            amortization_schedule(Money::pen(dec!(12000)), Rate::new(dec!(0.04)), 12).unwrap();
        assert_eq!(schedule.len(), 12);
        assert_eq!(schedule[0].period, 1);
        assert_eq!(schedule[11].period, 12);
    }

    #[test]
    fn test_schedule_final_balance_reaches_zero() {
        let schedule =
            amortization_schedule(Money::pen(dec!(12000)), Rate::new(dec!(0.04)), 12).unwrap();
        let last = schedule.last().unwrap();
        assert!(last.balance.amount() < dec!(0.01), "{}", last.balance);
    }

    #[test]
    fn test_schedule_interest_declines_over_time() {
        let schedule =
            amortization_schedule(Money::pen(dec!(12000)), Rate::new(dec!(0.12)), 12).unwrap();
        for pair in schedule.windows(2) {
            assert!(pair[0].interest.amount() > pair[1].interest.amount());
        }
    }

    #[test]
    fn test_single_installment_schedule_has_no_interest() {
        let schedule =
            amortization_schedule(Money::pen(dec!(5000)), Rate::new(dec!(0.04)), 1).unwrap();
        assert_eq!(schedule.len(), 1);
        assert!(schedule[0].interest.is_zero());
        assert_eq!(schedule[0].principal.amount(), dec!(5000));
        assert!(schedule[0].balance.is_zero());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal::Decimal;

    proptest! {
        #[test]
        fn principal_components_sum_to_financed_amount(
            minor in 10_000i64..50_000_000i64,
            rate_bps in 0u32..3_000u32,
            installments in 1u32..60u32
        ) {
            let pv = Money::from_minor(minor, core_kernel::Currency::PEN);
            let rate = Rate::new(Decimal::new(rate_bps as i64, 4));
            let schedule = amortization_schedule(pv, rate, installments).unwrap();

            let principal_sum: Decimal =
                schedule.iter().map(|e| e.principal.amount()).sum();
            let diff = (principal_sum - pv.amount()).abs();
            prop_assert!(diff < Decimal::new(1, 2), "residual {diff}");
        }

        #[test]
        fn schedule_balance_is_monotonically_nonincreasing(
            minor in 10_000i64..10_000_000i64,
            rate_bps in 0u32..2_000u32,
            installments in 2u32..48u32
        ) {
            let pv = Money::from_minor(minor, core_kernel::Currency::PEN);
            let rate = Rate::new(Decimal::new(rate_bps as i64, 4));
            let schedule = amortization_schedule(pv, rate, installments).unwrap();

            for pair in schedule.windows(2) {
                prop_assert!(pair[0].balance.amount() >= pair[1].balance.amount());
            }
        }
    }
}
