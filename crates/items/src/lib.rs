//! Items domain module.
//!
//! This crate contains the business rules for catalogued possessions, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod category;
pub mod item;
pub mod rules;
pub mod summary;

pub use category::{Category, UnknownCategory, is_valid_category, valid_categories};
pub use item::{Item, ItemId, ItemInput, ItemPatch, ItemRecord};
pub use rules::{Violation, is_valid_date_format};
pub use summary::{CategoryCount, CategorySummary};
