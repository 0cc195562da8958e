//! The account balance summary and its display-ready form.

use serde::{Deserialize, Serialize};

use crate::{Error, currency::format_currency};

/// Aggregate figures for the account as computed by the finance API.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BalanceSummary {
    /// The sum of all income.
    pub income: f64,
    /// The sum of all outcome, as a non-negative amount.
    pub outcome: f64,
    /// Income minus outcome.
    pub total: f64,
}

/// A [BalanceSummary] with every figure formatted as currency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceView {
    /// Formatted income total.
    pub income: String,
    /// Formatted outcome total, without a sign marker.
    pub outcome: String,
    /// Formatted balance.
    pub total: String,
}

/// Format each figure of `summary` independently.
///
/// Unlike transaction rows, the outcome total does not get a sign marker.
pub fn format_balance(summary: &BalanceSummary) -> Result<BalanceView, Error> {
    Ok(BalanceView {
        income: format_currency(summary.income)?,
        outcome: format_currency(summary.outcome)?,
        total: format_currency(summary.total)?,
    })
}

#[cfg(test)]
mod tests {
    use crate::Error;

    use super::{BalanceSummary, BalanceView, format_balance};

    #[test]
    fn formats_each_figure() {
        let summary = BalanceSummary {
            income: 1000.0,
            outcome: 400.0,
            total: 600.0,
        };

        let view = format_balance(&summary).unwrap();

        assert_eq!(
            view,
            BalanceView {
                income: "R$ 1.000,00".to_owned(),
                outcome: "R$ 400,00".to_owned(),
                total: "R$ 600,00".to_owned(),
            }
        );
    }

    #[test]
    fn negative_total_keeps_its_sign() {
        let summary = BalanceSummary {
            income: 100.0,
            outcome: 250.5,
            total: -150.5,
        };

        let view = format_balance(&summary).unwrap();

        assert_eq!(view.outcome, "R$ 250,50");
        assert_eq!(view.total, "-R$ 150,50");
    }

    #[test]
    fn invalid_figure_is_an_error() {
        let summary = BalanceSummary {
            income: 100.0,
            outcome: 0.0,
            total: f64::INFINITY,
        };

        assert_eq!(
            format_balance(&summary),
            Err(Error::InvalidAmount(f64::INFINITY))
        );
    }
}
