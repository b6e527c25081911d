// Stores layer - database access
pub mod deuda_store;
pub mod user_store;

pub use deuda_store::{DeudaStore, MutationOutcome, NewDeuda, SearchHit};
pub use user_store::UserStore;
