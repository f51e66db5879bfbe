use md4::{Digest as _, Md4};
use pwhash::unix;

use crate::{
    algorithm::{classify, AlgorithmTag},
    error::VerifyError,
};

/// Checks whether a candidate plaintext produces a target hash string.
/// The target carries its own salt and algorithm parameters.
pub trait Verifier: Sync {
    /// Returns `Ok(true)` on a match, `Ok(false)` otherwise.
    /// An error means the primitive could not process this pair.
    /// The candidate is taken as raw bytes, as read from the dictionary.
    fn verify(&self, candidate: &[u8], target: &str) -> Result<bool, VerifyError>;
}

/// The prefix of NT hashes in the crypt(3) format.
const NT_PREFIX: &str = "$3$$";

/// A verifier backed by the unix crypt implementations of `pwhash`.
/// NT hashes are computed locally, yescrypt variants are not supported.
#[derive(Clone, Copy, Debug, Default)]
pub struct CryptVerifier;

impl CryptVerifier {
    pub fn new() -> Self {
        Self
    }
}

impl Verifier for CryptVerifier {
    fn verify(&self, candidate: &[u8], target: &str) -> Result<bool, VerifyError> {
        let computed = match classify(target) {
            tag @ (AlgorithmTag::Yescrypt | AlgorithmTag::GostYescrypt) => {
                return Err(VerifyError::Unsupported(tag))
            }
            AlgorithmTag::Nt => nt_crypt(candidate),
            _ => unix::crypt(candidate, target)?,
        };

        Ok(computed == target)
    }
}

/// Widens every byte of a password to two bytes, the high one being zero.
/// This is UTF-16LE for ASCII and Latin-1 passwords, and how crypt(3) builds
/// the NT key for any other byte.
#[inline]
fn widen(password: &[u8]) -> Vec<u8> {
    password.iter().flat_map(|&b| [b, 0]).collect()
}

/// Hashes a password using NTLM, in the crypt(3) `$3$$` format.
#[inline]
pub fn nt_crypt(password: &[u8]) -> String {
    format!("{NT_PREFIX}{}", hex::encode(Md4::digest(widen(password))))
}
