//! Property-based tests for upload progress

use proptest::prelude::*;

use cloudvault::client::upload::UploadProgress;

proptest! {
    #[test]
    fn test_progress_is_monotonic_and_ends_at_100(total in 1usize..200) {
        let percents: Vec<f64> = (0..=total)
            .map(|completed| UploadProgress { completed, total }.percent())
            .collect();
        prop_assert_eq!(percents[0], 0.0);
        prop_assert_eq!(percents[total], 100.0);
        prop_assert!(percents.windows(2).all(|w| w[0] < w[1]));
        let done = UploadProgress { completed: total, total };
        prop_assert!(done.is_done());
    }
}
