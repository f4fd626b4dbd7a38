pub mod adapters;
pub mod balance;
pub mod chemistry;
pub mod error;
pub mod models;

pub use crate::balance::calculator::calculate;
pub use crate::balance::validator::{CalculationMode, ValidationResult, validate};
pub use crate::chemistry::{Field, Side};
pub use crate::error::AppError;
pub use crate::models::{BalanceResult, Status, WaterSample};
