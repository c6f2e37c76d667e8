//! Monthly compounding recurrence shared by the benchmark curve and the
//! Growth Flex product
//!
//! Recurrence per month m (1-indexed):
//!   1. balance *= 1 + annual_rate / 12
//!   2. if a deposit is due at m (m > 1 and (m - 1) % cadence == 0),
//!      add it to the balance and to the contributed capital
//!   3. emit balance (gross) or balance - contributed (gain), in cents

use super::series::round_cents;
use crate::scenario::DepositSchedule;

/// Compute a monthly compounding series.
///
/// `deposit` follows the shared boundary rule: nothing at month 1, then a
/// deposit every cadence months starting at month cadence + 1. Each
/// deposit accrues from the following month.
pub fn compounding_series(
    initial_amount: f64,
    term_months: u32,
    annual_rate: f64,
    deposit: Option<&DepositSchedule>,
    show_gross_balance: bool,
) -> Vec<f64> {
    let monthly_rate = annual_rate / 12.0;
    let mut balance = initial_amount;
    let mut contributed = initial_amount;
    let mut values = Vec::with_capacity(term_months as usize);

    for month in 1..=term_months {
        balance *= 1.0 + monthly_rate;

        if let Some(deposit) = deposit {
            if deposit.due_at(month) {
                balance += deposit.amount;
                contributed += deposit.amount;
            }
        }

        let value = if show_gross_balance {
            balance
        } else {
            balance - contributed
        };
        values.push(round_cents(value));
    }

    values
}
