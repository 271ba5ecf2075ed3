//! UUID identifier generator.

use rand::Rng;
use uuid::{Builder, Uuid};

/// Generate a random UUID v4 using the provided RNG.
pub fn generate_uuid_v4<R: Rng + ?Sized>(rng: &mut R) -> Uuid {
    let mut bytes = [0u8; 16];
    rng.fill(&mut bytes);

    // Builder sets the version (4) and RFC 4122 variant bits.
    Builder::from_random_bytes(bytes).into_uuid()
}
