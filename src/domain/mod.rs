//! Category and transaction domain models.

pub mod category;
pub mod common;
pub mod transaction;

pub use category::Category;
pub use common::{Displayable, Identifiable};
pub use transaction::Transaction;
