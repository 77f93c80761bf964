//! Employee identifier checks.

use uuid::Uuid;

use crate::error::CoreError;

/// Length of a hyphenated UUID, e.g. `4a3a170b-22cd-4ac2-aad1-9bb5b34a1507`.
const HYPHENATED_UUID_LEN: usize = 36;

/// Parse an employee id, accepting only the hyphenated 36-character form.
///
/// `uuid` alone would also accept the simple, braced and URN encodings; the
/// upstream only ever issues hyphenated ids, so anything else is rejected.
pub fn parse_employee_id(raw: &str) -> Result<Uuid, CoreError> {
    if raw.len() != HYPHENATED_UUID_LEN {
        return Err(CoreError::BadIdentifier(raw.to_string()));
    }
    Uuid::try_parse(raw).map_err(|_| CoreError::BadIdentifier(raw.to_string()))
}
