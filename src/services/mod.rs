// Service exports
pub mod inventory;

pub use inventory::{InventoryStore, InventoryError};
