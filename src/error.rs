use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::service::ServiceError;
use crate::types::Chain;

/// Every failure a client command can end with. Only the dispatcher looks
/// at it; everything below propagates it with `?`.
#[derive(Debug, Error)]
pub enum ClientCliError {
    #[error("the keystore must be given as an argument or must be added to the {0} configuration")]
    KeystoreNotConfigured(Chain),
    #[error("the keystore {} is not available", .0.display())]
    KeystoreNotAvailable(PathBuf),
    #[error("unable to read the keystore {}", .path.display())]
    KeystoreUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("unable to create the .env files in {}", .path.display())]
    CreateConfig {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("unable to read the user input")]
    Input(#[source] io::Error),
    #[error("unable to write the command output")]
    Output(#[source] io::Error),
    #[error(transparent)]
    Service(#[from] ServiceError),
}
