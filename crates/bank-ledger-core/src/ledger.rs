//! The in-memory ledger.
//!
//! A [`Ledger`] owns the account table and the append-only transaction log.
//! Both live behind one reader/writer lock: reads share it, and every
//! mutation holds the write side for its whole validate, mutate and log
//! sequence, so a withdrawal's balance check and update can never interleave
//! with another writer.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::account::validate_name;
use crate::error::{LedgerError, Result};
use crate::money::{cents_covering, to_cents, MIN_OPENING_BALANCE};
use crate::{Account, AccountNumber, Transaction, TransactionType};

/// Aggregate figures over the whole ledger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LedgerSummary {
    /// Number of live accounts.
    pub total_accounts: usize,
    /// Sum of live account balances, in cents.
    pub total_balance_cents: i64,
    /// Sum of every deposit in the log (opening deposits included), in cents.
    pub total_deposited_cents: i64,
    /// Sum of every withdrawal in the log, in cents.
    pub total_withdrawn_cents: i64,
    /// Total number of log entries, including those of deleted accounts.
    pub transaction_count: usize,
}

#[derive(Debug, Default)]
struct LedgerState {
    accounts: HashMap<AccountNumber, Account>,
    log: Vec<Transaction>,
}

/// Accounts plus their transaction history, safe to share across threads.
#[derive(Debug, Default)]
pub struct Ledger {
    state: RwLock<LedgerState>,
}

impl Ledger {
    /// Create an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new account funded with `initial_balance`.
    ///
    /// Checks run in order: account number format, uniqueness, name, then
    /// the minimum opening balance. The minimum is compared against the
    /// requested amount; only an accepted amount is rounded to cents. The
    /// opening deposit is recorded as the account's first transaction.
    ///
    /// # Errors
    ///
    /// - `InvalidAccountNumber` if `account_no` is not six ASCII digits.
    /// - `AccountExists` if the number is taken.
    /// - `InvalidName` if `name` is blank or has characters other than letters and whitespace.
    /// - `InsufficientInitialBalance` if the amount is below $100.00.
    /// - `InvalidAmount` if the amount does not fit in cents.
    pub fn open_account(
        &self,
        account_no: &str,
        name: &str,
        initial_balance: Decimal,
    ) -> Result<Account> {
        let account_no: AccountNumber = account_no.parse()?;

        let mut guard = self.write();
        let state = &mut *guard;

        if state.accounts.contains_key(&account_no) {
            return Err(LedgerError::AccountExists {
                account_no: account_no.into(),
            });
        }

        let name = validate_name(name)?;

        if initial_balance < MIN_OPENING_BALANCE {
            return Err(LedgerError::InsufficientInitialBalance {
                amount: initial_balance,
                minimum: MIN_OPENING_BALANCE,
            });
        }
        let amount_cents = to_cents(initial_balance)?;

        let now = next_timestamp(&state.log);
        let account = Account::new(account_no.clone(), name, amount_cents, now);

        state.accounts.insert(account_no.clone(), account.clone());
        state
            .log
            .push(Transaction::deposit(account_no, amount_cents, amount_cents, now));

        tracing::debug!(
            account_no = %account.account_no,
            balance_cents = amount_cents,
            "Account opened"
        );

        Ok(account)
    }

    /// Look up a live account.
    ///
    /// # Errors
    ///
    /// Returns `AccountNotFound` if no live account has this number.
    pub fn get_account(&self, account_no: &str) -> Result<Account> {
        self.read()
            .accounts
            .get(account_no)
            .cloned()
            .ok_or_else(|| LedgerError::not_found(account_no))
    }

    /// Current balance of a live account, in cents.
    ///
    /// # Errors
    ///
    /// Returns `AccountNotFound` if no live account has this number.
    pub fn balance(&self, account_no: &str) -> Result<i64> {
        self.read()
            .accounts
            .get(account_no)
            .map(|account| account.balance_cents)
            .ok_or_else(|| LedgerError::not_found(account_no))
    }

    /// Add money to an account.
    ///
    /// # Errors
    ///
    /// - `AccountNotFound` if no live account has this number.
    /// - `InvalidAmount` if the amount is not positive, rounds to zero cents,
    ///   or the new balance would overflow.
    pub fn deposit(&self, account_no: &str, amount: Decimal) -> Result<Account> {
        self.apply(account_no, amount, TransactionType::Deposit)
    }

    /// Take money out of an account. All or nothing.
    ///
    /// The funds check compares the requested amount with the balance before
    /// rounding, so `150.004` cannot be taken from `150.00`.
    ///
    /// # Errors
    ///
    /// - `AccountNotFound` if no live account has this number.
    /// - `InvalidAmount` if the amount is not positive or rounds to zero cents.
    /// - `InsufficientFunds` if the amount exceeds the balance.
    pub fn withdraw(&self, account_no: &str, amount: Decimal) -> Result<Account> {
        self.apply(account_no, amount, TransactionType::Withdraw)
    }

    /// Remove an account from the table. Its log entries are kept.
    ///
    /// # Errors
    ///
    /// Returns `AccountNotFound` if no live account has this number.
    pub fn delete_account(&self, account_no: &str) -> Result<()> {
        let removed = self.write().accounts.remove(account_no);
        match removed {
            Some(account) => {
                tracing::debug!(account_no = %account.account_no, "Account removed from table");
                Ok(())
            }
            None => Err(LedgerError::not_found(account_no)),
        }
    }

    /// Transaction history of a live account, newest first.
    ///
    /// Existence is checked against the live table, so a deleted account's
    /// history is not returned even though its entries remain in the log.
    ///
    /// # Errors
    ///
    /// Returns `AccountNotFound` if no live account has this number.
    pub fn transactions(&self, account_no: &str) -> Result<Vec<Transaction>> {
        let state = self.read();
        if !state.accounts.contains_key(account_no) {
            return Err(LedgerError::not_found(account_no));
        }

        Ok(state
            .log
            .iter()
            .rev()
            .filter(|tx| tx.account_no.as_str() == account_no)
            .cloned()
            .collect())
    }

    /// Snapshot of every live account, ordered by account number.
    #[must_use]
    pub fn list_accounts(&self) -> Vec<Account> {
        let mut accounts: Vec<Account> = self.read().accounts.values().cloned().collect();
        accounts.sort_by(|a, b| a.account_no.cmp(&b.account_no));
        accounts
    }

    /// Totals over the live table and the full log.
    #[must_use]
    pub fn summary(&self) -> LedgerSummary {
        let state = self.read();

        let mut summary = LedgerSummary {
            total_accounts: state.accounts.len(),
            total_balance_cents: state
                .accounts
                .values()
                .fold(0_i64, |sum, a| sum.saturating_add(a.balance_cents)),
            transaction_count: state.log.len(),
            ..LedgerSummary::default()
        };

        for tx in &state.log {
            match tx.transaction_type {
                TransactionType::Deposit => {
                    summary.total_deposited_cents =
                        summary.total_deposited_cents.saturating_add(tx.amount_cents);
                }
                TransactionType::Withdraw => {
                    summary.total_withdrawn_cents =
                        summary.total_withdrawn_cents.saturating_add(tx.amount_cents);
                }
            }
        }

        summary
    }

    fn apply(
        &self,
        account_no: &str,
        amount: Decimal,
        transaction_type: TransactionType,
    ) -> Result<Account> {
        let mut guard = self.write();
        let state = &mut *guard;

        let account = state
            .accounts
            .get_mut(account_no)
            .ok_or_else(|| LedgerError::not_found(account_no))?;

        if amount <= Decimal::ZERO {
            return Err(LedgerError::InvalidAmount(format!(
                "{} amount must be positive, got {amount}",
                transaction_type.as_str()
            )));
        }

        if transaction_type == TransactionType::Withdraw && !account.has_sufficient_funds(amount) {
            return Err(LedgerError::InsufficientFunds {
                balance_cents: account.balance_cents,
                required_cents: cents_covering(amount),
            });
        }

        let amount_cents = to_cents(amount)?;
        if amount_cents == 0 {
            return Err(LedgerError::InvalidAmount(format!(
                "{} amount {amount} rounds to zero cents",
                transaction_type.as_str()
            )));
        }

        // A withdrawal no larger than the balance rounds to no more than the balance.
        let balance_cents = match transaction_type {
            TransactionType::Deposit => account
                .balance_cents
                .checked_add(amount_cents)
                .ok_or_else(|| {
                    LedgerError::InvalidAmount(format!("deposit of {amount} overflows balance"))
                })?,
            TransactionType::Withdraw => account.balance_cents - amount_cents,
        };

        let now = next_timestamp(&state.log);
        account.balance_cents = balance_cents;
        account.updated_at = now;
        let updated = account.clone();

        let entry = match transaction_type {
            TransactionType::Deposit => {
                Transaction::deposit(updated.account_no.clone(), amount_cents, balance_cents, now)
            }
            TransactionType::Withdraw => {
                Transaction::withdraw(updated.account_no.clone(), amount_cents, balance_cents, now)
            }
        };
        state.log.push(entry);

        tracing::debug!(
            account_no = %updated.account_no,
            kind = transaction_type.as_str(),
            amount_cents,
            balance_cents,
            "Balance updated"
        );

        Ok(updated)
    }

    fn read(&self) -> RwLockReadGuard<'_, LedgerState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, LedgerState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Timestamp for the next log entry; never earlier than the last one.
fn next_timestamp(log: &[Transaction]) -> DateTime<Utc> {
    let now = Utc::now();
    log.last().map_or(now, |last| now.max(last.timestamp))
}
