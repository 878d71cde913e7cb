use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{Displayable, Identifiable};

/// A single signed ledger record. Positive amounts are deposits, negative
/// amounts withdrawals. Never mutated once appended to a ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    pub amount: f64,
    pub description: String,
    pub recorded_at: DateTime<Utc>,
}

impl Transaction {
    pub fn new(amount: f64, description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount,
            description: description.into(),
            recorded_at: Utc::now(),
        }
    }

    pub fn is_withdrawal(&self) -> bool {
        self.amount < 0.0
    }
}

impl Identifiable for Transaction {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Displayable for Transaction {
    fn display_label(&self) -> String {
        format!("txn:{} {:+.2}", self.id, self.amount)
    }
}
