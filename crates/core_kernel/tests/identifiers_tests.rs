//! Unit tests for the Identifiers module
//!
//! Tests cover identifier creation, parsing, conversion, and display
//! formatting.

use core_kernel::{ApplicationId, ClientId, AssessmentId};
use uuid::Uuid;

mod application_id_tests {
    use super::*;

    #[test]
    fn test_new_generates_unique_ids() {
        let id1 = ApplicationId::new();
        let id2 = ApplicationId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_new_v7_generates_time_ordered_ids() {
        let id1 = ApplicationId::new_v7();
        std::thread::sleep(std::time::Duration::from_millis(1));
        let id2 = ApplicationId::new_v7();
        let uuid1: Uuid = id1.into();
        let uuid2: Uuid = id2.into();
        assert!(uuid1 < uuid2);
    }

    #[test]
    fn test_display_includes_prefix() {
        let id = ApplicationId::new();
        assert!(id.to_string().starts_with("APP-"));
    }

    #[test]
    fn test_parse_roundtrip() {
        let id = ApplicationId::new();
        let parsed: ApplicationId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_parse_without_prefix() {
        let uuid = Uuid::new_v4();
        let parsed: ApplicationId = uuid.to_string().parse().unwrap();
        assert_eq!(parsed.as_uuid(), &uuid);
    }
}

mod client_id_tests {
    use super::*;

    #[test]
    fn test_client_prefix() {
        assert_eq!(ClientId::prefix(), "CL");
        assert!(ClientId::new().to_string().starts_with("CL-"));
    }

    #[test]
    fn test_serde_is_transparent() {
        let id = ClientId::new();
        let json = serde_json::to_string(&id).unwrap();
        // Serializes as a bare UUID string, not a struct
        assert!(json.starts_with('"'));
        let back: ClientId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }
}

mod assessment_id_tests {
    use super::*;

    #[test]
    fn test_invalid_string_fails_to_parse() {
        let result: Result<AssessmentId, _> = "not-a-uuid".parse();
        assert!(result.is_err());
    }

    #[test]
    fn test_from_uuid_preserves_value() {
        let uuid = Uuid::now_v7();
        let id = AssessmentId::from_uuid(uuid);
        assert_eq!(id.as_uuid(), &uuid);
    }
}
