//! Domain models for genealogy export
//!
//! Raw input records (`RawNode`, `Annotation`) as they arrive from a provider, and
//! the normalized entities (`Individual`, `Family`) the exporter derives from them.

pub mod annotation;
pub mod family;
pub mod individual;
pub mod node;
pub mod serde;
pub mod types;

// Re-export commonly used types
pub use annotation::{Annotation, Occurrence};
pub use family::{Discovery, Family, ParentPair};
pub use individual::{Individual, ParentKeys};
pub use node::RawNode;
pub use types::{FamilyXref, Gender, IndividualXref};
