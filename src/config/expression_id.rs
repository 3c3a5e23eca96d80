//! Client-side expression identifiers.
//!
//! Produces version-4 style UUID strings
//! (`xxxxxxxx-xxxx-4xxx-yxxx-xxxxxxxxxxxx`). The id travels with the create
//! request and tags the optimistic entry, and the service keeps it as the
//! record's canonical id.

use rand::RngExt;

const TEMPLATE: &str = "xxxxxxxx-xxxx-4xxx-yxxx-xxxxxxxxxxxx";
const HEX: &[u8; 16] = b"0123456789abcdef";

/// Generate a fresh expression id like `3f2b8c1e-9a4d-4e7f-b2c1-0d9e8f7a6b5c`.
pub fn generate_expression_id() -> String {
    let mut rng = rand::rng();
    TEMPLATE
        .chars()
        .map(|c| match c {
            'x' => HEX[rng.random_range(0..16)] as char,
            // RFC 4122 variant: top two bits are `10`
            'y' => HEX[rng.random_range(0..4) | 0x8] as char,
            other => other,
        })
        .collect()
}
