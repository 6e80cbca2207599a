pub mod model;
pub mod outpoint;
pub mod script;

pub use model::{Transaction, TxInput, TxOutput};
pub use outpoint::OutPoint;
pub use script::Script;

/// Version written into every transaction this crate builds.
pub const TX_VERSION: i32 = 1;
