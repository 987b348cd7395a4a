//! Database utility functions.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::db::{DbError, DbResult};

/// Generate a fresh random identifier for a new entity.
pub fn generate_entity_id() -> Uuid {
    Uuid::new_v4()
}

/// Current instant, used for created/updated/uploaded timestamps.
pub fn current_timestamp() -> DateTime<Utc> {
    Utc::now()
}

/// Parse a client-supplied identifier.
///
/// A malformed identifier is a client input problem and maps to
/// `DbError::Validation`, never to `NotFound`.
pub fn parse_entity_id(entity_type: &str, id: &str) -> DbResult<Uuid> {
    Uuid::parse_str(id.trim()).map_err(|_| DbError::Validation {
        message: format!("Invalid {} id '{}': expected a UUID", entity_type, id),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_unique_and_not_nil() {
        let a = generate_entity_id();
        let b = generate_entity_id();
        assert_ne!(a, b);
        assert!(!a.is_nil());
    }

    #[test]
    fn parse_entity_id_accepts_hyphenated_uuid() {
        let id = generate_entity_id();
        assert_eq!(parse_entity_id("Task", &id.to_string()).unwrap(), id);
    }

    #[test]
    fn parse_entity_id_rejects_garbage() {
        let err = parse_entity_id("Task", "not-a-uuid").unwrap_err();
        assert!(matches!(err, DbError::Validation { .. }));
        assert!(err.to_string().contains("Invalid Task id 'not-a-uuid'"));
    }

    #[test]
    fn timestamps_are_monotonic_enough_for_updates() {
        let first = current_timestamp();
        let second = current_timestamp();
        assert!(second >= first);
    }
}
