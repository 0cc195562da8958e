//! Transactions as received from the finance API and their display-ready form.

use serde::{Deserialize, Serialize};
use time::{
    Date, OffsetDateTime, format_description::BorrowedFormatItem, macros::format_description,
};

use crate::{Error, currency::format_currency, timezone::get_offset_at};

/// Day/month/year, the way dates are written in Brazil, e.g. "24/05/2020".
const DISPLAY_DATE_FORMAT: &[BorrowedFormatItem] = format_description!("[day]/[month]/[year]");

/// The marker put in front of the formatted value of an outcome.
pub const OUTCOME_PREFIX: &str = "- ";

/// Whether money came in or went out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money received.
    Income,
    /// Money spent.
    Outcome,
}

impl TransactionType {
    /// The lowercase name used by the API and as the CSS class of the value cell.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Outcome => "outcome",
        }
    }
}

/// The category a transaction is filed under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// The category's display name.
    pub title: String,
}

/// A single ledger entry exactly as the API returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Unique identifier assigned by the API.
    pub id: String,
    /// What the transaction was for.
    pub title: String,
    /// The amount of money, always non-negative in practice. The sign is
    /// carried by `transaction_type`.
    pub value: f64,
    /// Whether the transaction is income or outcome.
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// The category of the transaction.
    pub category: Category,
    /// When the transaction was recorded.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// A [TransactionRecord] with its value and date formatted for display.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayTransaction {
    /// The record the display strings were derived from.
    pub record: TransactionRecord,
    /// The currency-formatted value, prefixed with [OUTCOME_PREFIX] for outcomes.
    pub formatted_value: String,
    /// The creation date in the local timezone.
    pub local_date: Date,
    /// [DisplayTransaction::local_date] formatted for display, e.g. "24/05/2020".
    pub formatted_date: String,
}

impl DisplayTransaction {
    /// Format `record` for display, rendering its date in `local_timezone`.
    ///
    /// # Errors
    ///
    /// Returns an [Error::InvalidAmount] if the value cannot be formatted,
    /// or an [Error::InvalidTimezone] if `local_timezone` is not a canonical timezone name.
    pub fn from_record(record: TransactionRecord, local_timezone: &str) -> Result<Self, Error> {
        let formatted_value = format_value(record.value, record.transaction_type)?;
        let local_date = to_local_date(&record.created_at, local_timezone)?;
        let formatted_date = local_date
            .format(DISPLAY_DATE_FORMAT)
            .map_err(|error| Error::InvalidDateFormat(error.to_string()))?;

        Ok(Self {
            record,
            formatted_value,
            local_date,
            formatted_date,
        })
    }
}

/// Append `fetched` to `prior`, formatting each fetched record for display.
///
/// Records are neither reordered, filtered nor deduplicated: the result is
/// `prior` followed by the formatted `fetched` records, in order.
///
/// # Errors
///
/// Returns an error if any of the fetched records cannot be formatted. In that
/// case none of the batch is appended.
pub fn append_transactions(
    prior: Vec<DisplayTransaction>,
    fetched: Vec<TransactionRecord>,
    local_timezone: &str,
) -> Result<Vec<DisplayTransaction>, Error> {
    let formatted = fetched
        .into_iter()
        .map(|record| DisplayTransaction::from_record(record, local_timezone))
        .collect::<Result<Vec<_>, _>>()?;

    let mut transactions = prior;
    transactions.extend(formatted);

    Ok(transactions)
}

fn format_value(value: f64, transaction_type: TransactionType) -> Result<String, Error> {
    let formatted = format_currency(value)?;

    match transaction_type {
        TransactionType::Income => Ok(formatted),
        TransactionType::Outcome => Ok(format!("{OUTCOME_PREFIX}{formatted}")),
    }
}

fn to_local_date(created_at: &OffsetDateTime, local_timezone: &str) -> Result<Date, Error> {
    let offset = get_offset_at(local_timezone, created_at).ok_or_else(|| {
        tracing::error!("Invalid timezone {local_timezone}");
        Error::InvalidTimezone(local_timezone.to_owned())
    })?;

    Ok(created_at.to_offset(offset).date())
}
