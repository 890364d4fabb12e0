//! Static shared-secret check for privileged routes.

use sha2::{Digest, Sha256};

use crate::error::Error;

/// The operator password, held only as a SHA-256 digest.
///
/// Candidates are hashed the same way and the digests compared without
/// early exit, so timing does not reveal how much of a guess was right
/// or how long the secret is.
#[derive(Clone)]
pub struct SharedSecret {
  digest: [u8; 32],
}

impl SharedSecret {
  pub fn new(secret: &str) -> Self {
    Self { digest: Sha256::digest(secret.as_bytes()).into() }
  }

  pub fn matches(&self, candidate: &str) -> bool {
    let candidate: [u8; 32] = Sha256::digest(candidate.as_bytes()).into();
    self
      .digest
      .iter()
      .zip(candidate.iter())
      .fold(0u8, |acc, (a, b)| acc | (a ^ b))
      == 0
  }

  /// `Ok` when `candidate` is the secret, [`Error::Unauthorized`] otherwise.
  pub fn verify(&self, candidate: &str) -> Result<(), Error> {
    if self.matches(candidate) {
      Ok(())
    } else {
      Err(Error::Unauthorized)
    }
  }
}

impl std::fmt::Debug for SharedSecret {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str("SharedSecret(..)")
  }
}
