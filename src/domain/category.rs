use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{Displayable, Identifiable};
use crate::domain::transaction::Transaction;

/// Width of the `*`-padded title line in a rendered statement.
const STATEMENT_WIDTH: usize = 30;

/// A named spending category backed by an append-only ledger.
///
/// The ledger is private: entries are only ever appended through [`deposit`],
/// [`withdraw`], and [`transfer_to`], and the balance is always the signed
/// sum of every entry.
///
/// [`deposit`]: Category::deposit
/// [`withdraw`]: Category::withdraw
/// [`transfer_to`]: Category::transfer_to
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    id: Uuid,
    name: String,
    ledger: Vec<Transaction>,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            ledger: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Read access to the ledger, oldest entry first.
    pub fn ledger(&self) -> &[Transaction] {
        &self.ledger
    }

    pub fn transaction_count(&self) -> usize {
        self.ledger.len()
    }

    /// Records a deposit. The amount is stored as given; callers are
    /// expected to pass positive values.
    pub fn deposit(&mut self, amount: f64, description: impl Into<String>) {
        self.ledger.push(Transaction::new(amount, description));
    }

    /// Records a withdrawal if the category can afford it. The stored amount
    /// is negated. Returns whether the ledger was touched.
    pub fn withdraw(&mut self, amount: f64, description: impl Into<String>) -> bool {
        if !self.can_afford(amount) {
            tracing::debug!(category = %self.name, amount, "withdrawal refused");
            return false;
        }
        self.ledger.push(Transaction::new(-amount, description));
        true
    }

    /// Signed sum of every ledger entry.
    pub fn balance(&self) -> f64 {
        self.ledger.iter().map(|txn| txn.amount).sum()
    }

    /// Funds-sufficiency guard shared by `withdraw` and `transfer_to`.
    pub fn can_afford(&self, amount: f64) -> bool {
        amount <= self.balance()
    }

    /// Sum of the withdrawal entries only (zero or negative).
    pub fn withdrawn_total(&self) -> f64 {
        self.ledger
            .iter()
            .filter(|txn| txn.is_withdrawal())
            .map(|txn| txn.amount)
            .sum()
    }

    /// Moves `amount` into `other` as a paired withdrawal/deposit. The guard
    /// runs before either ledger is touched, so both entries land or neither
    /// does. Returns whether the transfer happened.
    pub fn transfer_to(&mut self, amount: f64, other: &mut Category) -> bool {
        if !self.can_afford(amount) {
            tracing::debug!(from = %self.name, to = %other.name, amount, "transfer refused");
            return false;
        }
        self.withdraw(amount, format!("Transfer to {}", other.name));
        other.deposit(amount, format!("Transfer from {}", self.name));
        true
    }
}

impl fmt::Display for Category {
    /// Renders the category statement: a `*`-padded title (floor-divided
    /// padding, so odd leftover widths fall one short), one line per ledger
    /// entry with the description truncated to 23 columns and the amount in
    /// a 7-column two-decimal field, then the running total.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stars = "*".repeat(STATEMENT_WIDTH.saturating_sub(self.name.chars().count()) / 2);
        writeln!(f, "{stars}{}{stars}", self.name)?;
        for txn in &self.ledger {
            writeln!(f, "{:<23.23}{:>7.2}", txn.description, txn.amount)?;
        }
        write!(f, "Total: {}", self.balance())
    }
}

impl Identifiable for Category {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Displayable for Category {
    fn display_label(&self) -> String {
        format!("{} ({} entries)", self.name, self.ledger.len())
    }
}
