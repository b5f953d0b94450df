//! Value objects - immutable types that represent domain concepts

mod entity_id;
mod role;
mod viewer;

pub use entity_id::{EntityId, EntityIdParseError};
pub use role::{Role, SignInPortal};
pub use viewer::Viewer;
