//! Property-based invariants for grouping and rendering.

use std::collections::HashMap;

use hashhound::duplicates::DuplicateFinder;
use hashhound::output::CsvOutput;
use proptest::prelude::*;

fn dump_from_pairs(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .map(|(user, hash)| format!("{user}:1000:lmhash:{hash}:::\n"))
        .collect()
}

// Reference model: username keyed, last hash wins, first-seen order kept.
fn expected_groups(pairs: &[(String, String)]) -> HashMap<String, Vec<String>> {
    let mut accounts: Vec<(String, String)> = Vec::new();
    for (user, hash) in pairs {
        match accounts.iter_mut().find(|(u, _)| u == user) {
            Some(entry) => entry.1 = hash.clone(),
            None => accounts.push((user.clone(), hash.clone())),
        }
    }

    let mut by_hash: HashMap<String, Vec<String>> = HashMap::new();
    for (user, hash) in accounts {
        by_hash.entry(hash).or_default().push(user);
    }
    by_hash.retain(|_, members| members.len() >= 2);
    by_hash
}

proptest! {
    // Small alphabets force hash collisions and username repeats.
    #[test]
    fn grouping_matches_reference_model(
        pairs in prop::collection::vec(("[a-d]{1,2}", "[hk][12]"), 0..40)
    ) {
        let dump = dump_from_pairs(&pairs);
        let report = DuplicateFinder::new().find_in_source(dump.as_bytes()).unwrap();

        let expected = expected_groups(&pairs);
        prop_assert_eq!(report.groups.len(), expected.len());
        for group in &report.groups {
            let members = expected.get(&group.nt_hash).expect("unexpected group");
            prop_assert_eq!(&group.members, members);
        }
    }

    #[test]
    fn usernames_are_partitioned_across_groups(
        pairs in prop::collection::vec(("[a-z]{1,6}", "[0-9a-f]{4}"), 0..60)
    ) {
        let dump = dump_from_pairs(&pairs);
        let report = DuplicateFinder::new().find_in_source(dump.as_bytes()).unwrap();

        let mut seen = std::collections::HashSet::new();
        for group in &report.groups {
            // No group below the sharing threshold is ever materialized.
            prop_assert!(group.len() >= 2);
            for member in &group.members {
                // Each username appears in at most one group.
                prop_assert!(seen.insert(member.clone()));
            }
        }
    }

    #[test]
    fn groups_are_sorted_desc_count_then_asc_hash(
        pairs in prop::collection::vec(("[a-h]{1,3}", "[xy][0-3]"), 0..50)
    ) {
        let dump = dump_from_pairs(&pairs);
        let report = DuplicateFinder::new().find_in_source(dump.as_bytes()).unwrap();

        for window in report.groups.windows(2) {
            let (a, b) = (&window[0], &window[1]);
            prop_assert!(
                a.len() > b.len() || (a.len() == b.len() && a.nt_hash < b.nt_hash)
            );
        }
    }

    #[test]
    fn analysis_is_deterministic(
        pairs in prop::collection::vec(("[a-f]{1,4}", "[0-9]{2}"), 0..40)
    ) {
        let dump = dump_from_pairs(&pairs);
        let finder = DuplicateFinder::new();

        let first = finder.find_in_source(dump.as_bytes()).unwrap();
        let second = finder.find_in_source(dump.as_bytes()).unwrap();

        prop_assert_eq!(&first.groups, &second.groups);
        prop_assert_eq!(first.summary, second.summary);
        prop_assert_eq!(
            CsvOutput::new(&first.groups).to_string().unwrap(),
            CsvOutput::new(&second.groups).to_string().unwrap()
        );
    }
}
