//! Module that describe domain entities and errors.
mod entities;
mod errors;

pub use entities::AccountGroup;
pub use entities::AccountId;
pub use entities::AccountRef;
pub use entities::Chain;
pub use entities::ChainId;
pub use entities::Credential;
pub use entities::NewAccount;
pub use entities::NewChain;
pub use entities::RecordId;
pub use entities::DEFAULT_PASSWORD;
pub use entities::UNUSED_STATE;
pub use errors::*;
