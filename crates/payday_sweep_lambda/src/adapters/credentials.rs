use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use payday_sweep_core::SweepError;

/// Turns an encrypted credential blob into plaintext bytes.
pub trait CredentialDecryptor {
    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>, String>;
}

/// Decodes the base64 ciphertext from the environment and decrypts it.
pub fn resolve_access_token(
    encoded: &str,
    decryptor: &impl CredentialDecryptor,
) -> Result<String, SweepError> {
    let ciphertext = STANDARD.decode(encoded.trim()).map_err(|error| {
        SweepError::CredentialDecryption(format!("ciphertext is not valid base64: {error}"))
    })?;

    let plaintext = decryptor
        .decrypt(&ciphertext)
        .map_err(SweepError::CredentialDecryption)?;

    let token = String::from_utf8(plaintext).map_err(|error| {
        SweepError::CredentialDecryption(format!("plaintext is not valid UTF-8: {error}"))
    })?;

    if token.trim().is_empty() {
        return Err(SweepError::CredentialDecryption(
            "decrypted credential is empty".to_string(),
        ));
    }

    Ok(token)
}
