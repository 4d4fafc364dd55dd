//! Property-based tests for HTTP status mapping

use proptest::prelude::*;

use cloudvault::shared::error::ApiError;

proptest! {
    #[test]
    fn test_every_non_success_status_has_a_message(
        status in (100u16..600).prop_filter("non-2xx", |s| !(200..300).contains(s)),
        body in prop::option::of("[ a-zA-Z]{0,20}"),
    ) {
        let err = ApiError::from_status(status, body);
        prop_assert!(!err.user_message().trim().is_empty());
        prop_assert_eq!(err.status(), Some(status));
    }

    #[test]
    fn test_body_message_used_for_unfixed_client_errors(
        status in prop::sample::select(vec![400u16, 409, 410, 413, 415, 422]),
        message in "[a-zA-Z][a-zA-Z ]{0,30}",
    ) {
        let err = ApiError::from_status(status, Some(message.clone()));
        prop_assert_eq!(err.user_message(), message);
    }
}
