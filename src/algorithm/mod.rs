//! Record reconciliation and family reconstruction
//!
//! Turns the raw documents into normalized individuals, an annotation index, and the
//! reconstructed families, sharing one `IdAllocator` per export.

pub mod annotations;
pub mod family;
pub mod identity;
pub mod ids;
pub mod precedence;

// Re-export commonly used items
pub use annotations::AnnotationIndex;
pub use family::{FamilyMembership, FamilyReconstructor};
pub use identity::NormalizedTree;
pub use ids::IdAllocator;
pub use precedence::{resolve, resolved_gender, resolved_name};
