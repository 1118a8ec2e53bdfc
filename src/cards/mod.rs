//! Card system: definitions and the fixed catalog.
//!
//! ## Key Types
//!
//! - `CardId`: Identity of a physical card, 1 through 30
//! - `CardDefinition`: Static card data (name, kind, flavor text)
//! - `CardKind`: Asset, Action or Capital with kind-specific fields
//! - `Category`: Board category (Environment, Social, Governance)
//!
//! The catalog holds one definition per physical card; duplicates such as
//! the two Regulatory Fines are separate ids.

pub mod catalog;
pub mod definition;

pub use catalog::DECK_SIZE;
pub use definition::{
    AssetCategory, CardDefinition, CardId, CardKind, CardType, Category, GREENWASHING_TAG,
};
