// src/db/ids.rs
use base64::Engine;
use rand::rngs::OsRng;
use rand::RngCore;

pub const RECORD_ID_BYTES: usize = 15;

/// Surrogate id for a new stored record, from the OS RNG.
/// This is what the store calls on every insert.
pub fn new_record_id() -> String {
    let mut rng = OsRng;
    record_id(&mut rng, RECORD_ID_BYTES)
}

/// Generate a URL-safe record id from random bytes.
/// - Uses Base64 URL-safe, no padding.
/// - 15 bytes -> 20 char id.
pub fn record_id<R: RngCore>(rng: &mut R, nbytes: usize) -> String {
    let mut buf = vec![0u8; nbytes];
    rng.fill_bytes(&mut buf);
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buf)
}
