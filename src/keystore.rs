use std::fs;
use std::path::Path;

use age::secrecy::SecretString;

use crate::context::Context;
use crate::error::ClientCliError;
use crate::service::PrivateKey;
use crate::types::Chain;

pub const PASSWORD_PROMPT: &str = "Enter your keystore password: ";

/// Locate, read and decrypt the keystore for `chain`. An explicit path wins
/// over the configured one; the configured password wins over prompting.
pub fn resolve_private_key(
    ctx: &mut Context<'_>,
    chain: Chain,
    explicit_path: Option<&Path>,
) -> Result<PrivateKey, ClientCliError> {
    let config = ctx.config;
    let configured = config.keystore(chain);
    let path = match (explicit_path, configured) {
        (Some(path), _) => path,
        (None, Some(keystore)) => keystore.file.as_path(),
        (None, None) => return Err(ClientCliError::KeystoreNotConfigured(chain)),
    };

    if !path.is_file() {
        return Err(ClientCliError::KeystoreNotAvailable(path.to_path_buf()));
    }
    let keystore = fs::read_to_string(path).map_err(|source| ClientCliError::KeystoreUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("read {} keystore from {}", chain, path.display());

    let password = match configured.and_then(|keystore| keystore.password.clone()) {
        Some(password) => password,
        None => ctx
            .console
            .read_password(PASSWORD_PROMPT)
            .map(SecretString::from)
            .map_err(ClientCliError::Input)?,
    };

    let private_key = ctx
        .service
        .decrypt_private_key(chain, &keystore, &password)?;
    Ok(private_key)
}
