mod credentials;
mod discovery;
mod prompt;

pub use credentials::CredentialFileReader;
pub use discovery::discover_chain_files;
pub use prompt::prompt_group;

use crate::Credential;
use crate::SourceError;

pub trait Source {
    fn read(&mut self) -> Result<Vec<Credential>, SourceError>;
}
