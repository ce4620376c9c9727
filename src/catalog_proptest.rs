//! Property-based tests for the catalog and task manager.
//!
//! These tests use proptest to generate random inputs and verify that
//! invariants hold for all possible inputs.

#[cfg(test)]
mod proptest_tests {
    use crate::catalog::{RepoCatalog, Repository};
    use crate::files::{FileListing, SourceFile};
    use crate::tasks::{Priority, TaskManager};
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn priority_strategy() -> impl Strategy<Value = Priority> {
        prop_oneof![
            Just(Priority::Low),
            Just(Priority::Medium),
            Just(Priority::High),
            Just(Priority::Critical),
        ]
    }

    proptest! {
        /// Property: sorted_by_size never yields a larger repo after a smaller one
        #[test]
        fn sorted_by_size_is_non_increasing(sizes in prop::collection::vec(any::<u64>(), 0..64)) {
            let mut catalog = RepoCatalog::new();
            for (id, size) in (1..).zip(sizes.iter().copied()) {
                catalog.add(Repository::new(id, "r", "Rust", "https://example.com", size)).unwrap();
            }
            let sorted = catalog.sorted_by_size();
            prop_assert_eq!(sorted.len(), sizes.len());
            for pair in sorted.windows(2) {
                prop_assert!(pair[0].size_bytes >= pair[1].size_bytes);
            }
        }

        /// Property: file listings sort into non-increasing size order
        #[test]
        fn file_listing_sort_is_non_increasing(
            sizes in prop::collection::vec(0usize..1_000_000, 0..64)
        ) {
            let mut listing = FileListing::new();
            for (i, size) in sizes.iter().enumerate() {
                listing.add(Box::new(SourceFile::new(&format!("f{}.rs", i), *size, "Rust")));
            }
            listing.sort_by_size();
            let ordered = listing.sizes();
            prop_assert_eq!(ordered.len(), sizes.len());
            for pair in ordered.windows(2) {
                prop_assert!(pair[0] >= pair[1]);
            }
        }

        /// Property: mock sizes stay inside the documented range for any seed
        #[test]
        fn demo_sizes_in_range(seed in any::<u64>()) {
            let catalog = RepoCatalog::demo(&mut StdRng::seed_from_u64(seed));
            for repo in catalog.iter() {
                prop_assert!(repo.size_bytes >= 1024);
                prop_assert!(repo.size_bytes < 1024 + 1_000_000);
            }
        }

        /// Property: the task count equals the number of create calls
        #[test]
        fn task_count_matches_creations(
            priorities in prop::collection::vec(priority_strategy(), 0..100)
        ) {
            let mut manager = TaskManager::new();
            for (i, priority) in priorities.iter().enumerate() {
                manager.create(&format!("task {}", i), "", *priority);
            }
            prop_assert_eq!(manager.count(), priorities.len());
        }

        /// Property: task ids are strictly increasing and never reused after deletes
        #[test]
        fn task_ids_strictly_increasing(
            ops in prop::collection::vec(any::<bool>(), 1..100)
        ) {
            let mut manager = TaskManager::new();
            let mut last_id = 0;
            for create in ops {
                if create || manager.count() == 0 {
                    let id = manager.create("t", "", Priority::Low).id;
                    prop_assert!(id > last_id);
                    last_id = id;
                } else {
                    manager.delete(last_id);
                    prop_assert!(manager.get(last_id).is_none());
                    let next = manager.create("t", "", Priority::Low).id;
                    prop_assert!(next > last_id);
                    last_id = next;
                }
            }
        }
    }
}
