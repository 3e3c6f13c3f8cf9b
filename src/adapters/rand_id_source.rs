use rand::Rng;

use crate::ports::IdSource;

const URL_SAFE_ALPHABET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// Length of a staging-directory suffix, collision-resistant by size.
pub const STAGING_SUFFIX_LEN: usize = 21;

/// Length of the prefix applied to a collision-renamed file.
pub const COLLISION_PREFIX_LEN: usize = 4;

/// Id source sampling a URL-safe alphabet from the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandIdSource;

impl RandIdSource {
    pub fn new() -> Self {
        Self
    }
}

fn random_id(len: usize) -> String {
    let mut rng = rand::rng();
    (0..len)
        .map(|_| URL_SAFE_ALPHABET[rng.random_range(0..URL_SAFE_ALPHABET.len())] as char)
        .collect()
}

impl IdSource for RandIdSource {
    fn staging_suffix(&self) -> String {
        random_id(STAGING_SUFFIX_LEN)
    }

    fn collision_prefix(&self) -> String {
        random_id(COLLISION_PREFIX_LEN)
    }
}
