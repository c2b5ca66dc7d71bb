//! Splitting never loses, reorders or invents bytes

use cryptodiff_common::{Datasource, Multipart};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_split_concatenates_to_input(
        buffer in proptest::collection::vec(any::<u8>(), 0..1024),
        modifier in proptest::collection::vec(any::<u8>(), 0..512),
    ) {
        let mut ds = Datasource::new(&modifier);
        let parts = Multipart::split(&mut ds, &buffer);

        prop_assert!(!parts.is_empty());
        prop_assert_eq!(parts.total_len(), buffer.len());
        prop_assert_eq!(parts.concat(), buffer.clone());
        prop_assert_eq!(
            parts.non_empty().map(<[u8]>::len).sum::<usize>(),
            buffer.len()
        );
    }

    #[test]
    fn prop_split_is_deterministic(
        buffer in proptest::collection::vec(any::<u8>(), 0..256),
        modifier in proptest::collection::vec(any::<u8>(), 0..128),
    ) {
        let first = Multipart::split(&mut Datasource::new(&modifier), &buffer);
        let second = Multipart::split(&mut Datasource::new(&modifier), &buffer);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_from_lengths_keeps_every_byte(
        buffer in proptest::collection::vec(any::<u8>(), 0..256),
        lengths in proptest::collection::vec(0usize..64, 0..16),
    ) {
        let parts = Multipart::from_lengths(&buffer, &lengths);
        prop_assert_eq!(parts.concat(), buffer);
    }
}

#[test]
fn test_empty_buffer_yields_only_empty_parts() {
    let modifier = [1, 5, 0, 0, 0, 0, 0, 0, 0, 1, 1];
    let parts = Multipart::split(&mut Datasource::new(&modifier), &[]);
    assert_eq!(parts.len(), 3);
    assert!(parts.iter().all(<[u8]>::is_empty));
    assert_eq!(parts.non_empty().count(), 0);
}

#[test]
fn test_exhausted_source_gives_single_part() {
    let buffer = b"unsplit";
    let parts = Multipart::split(&mut Datasource::new(&[]), buffer);
    assert_eq!(parts, Multipart::single(buffer));
}
