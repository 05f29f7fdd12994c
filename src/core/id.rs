//! Record identifier generation

use uuid::Uuid;

/// Generate a fresh record identifier
///
/// Identifiers are 32-character lowercase hex strings (a v4 UUID in simple
/// form), collision-resistant and opaque to clients.
pub fn next_id() -> String {
    Uuid::new_v4().simple().to_string()
}
