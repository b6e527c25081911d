// Internal types - not serialized across the API boundary
pub mod auth;

pub use auth::{Claims, Identity, Role};
