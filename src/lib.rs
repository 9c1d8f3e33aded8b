//! # itemdefs: item definition record generator
//!
//! Turns a list of item identifier lines into RON records for the game's item
//! definition asset. Each input line carries one identifier wrapped in a fixed
//! four-character prefix and one-character suffix:
//!
//! ```text
//! sss"Wheat"
//! ```
//!
//! which becomes
//!
//! ```text
//!
//!         (((1, 1)), (
//!             id: Wheat,
//!             name: "Wheat",
//!             description: "Wheat",
//!             texture_id: Wheat,
//!         )),
//! ```
//!
//! Descriptions come from the hardcoded [`Catalog`]. An identifier that is not
//! in the catalog stops processing with [`RecordError::UnknownIdentifier`].

pub mod catalog;
pub mod error;
pub mod identifier;
pub mod record;
pub mod transformer;

// Re-export key types
pub use catalog::Catalog;
pub use error::RecordError;
pub use identifier::extract_identifier;
pub use record::{EmitMode, ItemRecord};
pub use transformer::{LineTransformer, RunSummary};
