//! Account types for bank-ledger.

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use rust_decimal::Decimal;

use crate::error::LedgerError;
use crate::money::cents_to_decimal;
use crate::AccountId;

/// Number of digits in an account number.
pub const ACCOUNT_NUMBER_LEN: usize = 6;

/// The user-facing account number: exactly six ASCII digits.
///
/// Construction always goes through [`FromStr`], so holding an
/// `AccountNumber` means the format has been checked.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AccountNumber(String);

impl AccountNumber {
    /// Borrow the digits.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for AccountNumber {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() == ACCOUNT_NUMBER_LEN && s.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self(s.to_owned()))
        } else {
            Err(LedgerError::InvalidAccountNumber {
                account_no: s.to_owned(),
            })
        }
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for AccountNumber {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for AccountNumber {
    type Error = LedgerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AccountNumber> for String {
    fn from(no: AccountNumber) -> Self {
        no.0
    }
}

/// A bank account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Internal identity, distinct from the account number.
    pub id: AccountId,

    /// The external lookup key.
    pub account_no: AccountNumber,

    /// Holder name, trimmed.
    pub name: String,

    /// Current balance in cents. Never negative.
    pub balance_cents: i64,

    /// When the account was opened.
    pub created_at: DateTime<Utc>,

    /// When the balance last changed.
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Create a new account with the given opening balance.
    #[must_use]
    pub fn new(
        account_no: AccountNumber,
        name: String,
        balance_cents: i64,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: AccountId::generate(),
            account_no,
            name,
            balance_cents,
            created_at: now,
            updated_at: now,
        }
    }

    /// Current balance as an exact decimal.
    #[must_use]
    pub fn balance(&self) -> Decimal {
        cents_to_decimal(self.balance_cents)
    }

    /// Check if the account can cover a withdrawal of the requested amount.
    ///
    /// The comparison is against the amount as requested, before any
    /// rounding to cents.
    #[must_use]
    pub fn has_sufficient_funds(&self, amount: Decimal) -> bool {
        amount <= self.balance()
    }
}

/// Validate a holder name and return it trimmed.
///
/// A valid name is non-empty after trimming and contains only ASCII letters
/// and ASCII whitespace.
pub(crate) fn validate_name(name: &str) -> Result<String, LedgerError> {
    let trimmed = name.trim_matches(|c: char| c.is_ascii_whitespace());
    if !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|c| c.is_ascii_alphabetic() || c.is_ascii_whitespace())
    {
        Ok(trimmed.to_owned())
    } else {
        Err(LedgerError::InvalidName {
            name: name.to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_digits_parse() {
        let no: AccountNumber = "123456".parse().unwrap();
        assert_eq!(no.as_str(), "123456");
        assert_eq!(no.to_string(), "123456");
    }

    #[test]
    fn account_number_rejects_bad_input() {
        for bad in ["12345", "1234567", "12a456", "", "12 456", "١٢٣٤٥٦"] {
            assert!(
                matches!(
                    bad.parse::<AccountNumber>(),
                    Err(LedgerError::InvalidAccountNumber { .. })
                ),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn account_number_deserialization_validates() {
        assert!(serde_json::from_str::<AccountNumber>("\"654321\"").is_ok());
        assert!(serde_json::from_str::<AccountNumber>("\"65432x\"").is_err());
    }

    #[test]
    fn names_are_trimmed() {
        assert_eq!(validate_name("  Jane Doe \t").unwrap(), "Jane Doe");
    }

    #[test]
    fn names_reject_digits_punctuation_and_blank() {
        for bad in ["John123", "O'Brien", "", "   ", "Jane-Doe"] {
            assert!(validate_name(bad).is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn names_reject_non_ascii_letters() {
        for bad in ["Zoë Ωmega", "José", "Jane\u{00a0}Doe"] {
            assert!(
                matches!(validate_name(bad), Err(LedgerError::InvalidName { .. })),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn sufficient_funds_compares_requested_amount() {
        let account = Account::new("123456".parse().unwrap(), "Jane".into(), 1_000, Utc::now());
        assert_eq!(account.balance(), Decimal::new(1_000, 2));
        assert!(account.has_sufficient_funds(Decimal::new(1_000, 2)));
        assert!(!account.has_sufficient_funds(Decimal::new(10_001, 3)));
    }
}
