//! Hash grouping and shared-password group management.
//!
//! # Overview
//!
//! Grouping folds parsed `(username, nt_hash)` pairs into one bucket per
//! distinct hash string, then retains only the buckets with two or more
//! members. Hash strings are compared byte-for-byte; no case normalization
//! is applied, so `ABCD` and `abcd` form separate buckets.
//!
//! A username that appears on multiple dump lines counts once: it keeps its
//! first-seen position in the dump but its last-seen hash, so every account
//! lands in at most one group.
//!
//! # Example
//!
//! ```
//! use hashhound::dump::Record;
//! use hashhound::duplicates::HashGrouper;
//!
//! let mut grouper = HashGrouper::new();
//! for line in [
//!     "admin:500:lm:5f4dcc3b5aa765d61d8327deb882cf99:::",
//!     "user1:1001:lm:202cb962ac59075b964b07152d234b70:::",
//!     "user2:1002:lm:202cb962ac59075b964b07152d234b70:::",
//! ] {
//!     grouper.insert(Record::parse(line, 1).unwrap());
//! }
//!
//! let (groups, stats) = grouper.finish();
//! assert_eq!(groups.len(), 1); // admin's hash is unshared and dropped
//! assert_eq!(groups[0].members, vec!["user1", "user2"]);
//! assert_eq!(stats.distinct_hashes, 2);
//! ```

use std::collections::HashMap;

use crate::dump::Record;

/// A group of accounts sharing one NT hash.
///
/// Only materialized for hashes with at least two members; singleton and
/// empty groups never appear in a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashGroup {
    /// The shared NT hash, exactly as it appeared in the dump.
    pub nt_hash: String,
    /// Usernames that produced this hash, in first-seen dump order.
    pub members: Vec<String>,
}

impl HashGroup {
    /// Create a new group.
    #[must_use]
    pub fn new(nt_hash: String, members: Vec<String>) -> Self {
        Self { nt_hash, members }
    }

    /// Number of accounts in this group.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Check if this group is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// The full member list as a comma-joined string.
    ///
    /// This is the untruncated form used by the CSV and JSON exports; the
    /// console table applies its own display cap.
    #[must_use]
    pub fn member_list(&self) -> String {
        self.members.join(", ")
    }
}

/// Statistics from the grouping phase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupingStats {
    /// Total records folded in, including repeats of the same username
    pub total_records: usize,
    /// Number of distinct usernames seen
    pub unique_accounts: usize,
    /// Number of distinct hash strings seen
    pub distinct_hashes: usize,
    /// Number of hashes shared by 2+ accounts
    pub shared_groups: usize,
    /// Number of accounts that belong to a shared group
    pub shared_accounts: usize,
}

impl GroupingStats {
    /// Percentage of accounts whose hash is shared with at least one other.
    #[must_use]
    pub fn shared_rate(&self) -> f64 {
        if self.unique_accounts == 0 {
            0.0
        } else {
            (self.shared_accounts as f64 / self.unique_accounts as f64) * 100.0
        }
    }
}

#[derive(Debug)]
struct Account {
    username: String,
    nt_hash: String,
}

/// Accumulator that folds records into shared-password groups.
///
/// Owned exclusively by the caller for the duration of one run; [`finish`]
/// consumes it and returns the finalized, sorted groups.
///
/// [`finish`]: HashGrouper::finish
#[derive(Debug, Default)]
pub struct HashGrouper {
    // Accounts in first-seen order, with a username index for repeats.
    accounts: Vec<Account>,
    index: HashMap<String, usize>,
    total_records: usize,
}

impl HashGrouper {
    /// Create an empty grouper.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one record in.
    ///
    /// A repeated username keeps its first-seen position but takes the hash
    /// from its latest record.
    pub fn insert(&mut self, record: Record) {
        self.total_records += 1;
        match self.index.get(&record.username) {
            Some(&pos) => {
                log::debug!(
                    "Repeated account '{}': replacing earlier hash",
                    record.username
                );
                self.accounts[pos].nt_hash = record.nt_hash;
            }
            None => {
                self.index.insert(record.username.clone(), self.accounts.len());
                self.accounts.push(Account {
                    username: record.username,
                    nt_hash: record.nt_hash,
                });
            }
        }
    }

    /// Finalize into shared-password groups.
    ///
    /// Groups with fewer than two members are dropped. The result is sorted
    /// by descending member count, ties broken by ascending hash string, so
    /// repeated runs over the same input produce identical output.
    #[must_use]
    pub fn finish(self) -> (Vec<HashGroup>, GroupingStats) {
        let mut stats = GroupingStats {
            total_records: self.total_records,
            unique_accounts: self.accounts.len(),
            ..GroupingStats::default()
        };

        // Iterating accounts in first-seen order keeps each member list in
        // original dump order.
        let mut by_hash: HashMap<String, Vec<String>> = HashMap::new();
        for account in self.accounts {
            by_hash
                .entry(account.nt_hash)
                .or_default()
                .push(account.username);
        }
        stats.distinct_hashes = by_hash.len();

        let mut groups: Vec<HashGroup> = by_hash
            .into_iter()
            .filter_map(|(nt_hash, members)| {
                if members.len() < 2 {
                    log::trace!("Dropping unshared hash {nt_hash}");
                    None
                } else {
                    stats.shared_groups += 1;
                    stats.shared_accounts += members.len();
                    Some(HashGroup::new(nt_hash, members))
                }
            })
            .collect();

        groups.sort_by(|a, b| {
            b.members
                .len()
                .cmp(&a.members.len())
                .then_with(|| a.nt_hash.cmp(&b.nt_hash))
        });

        log::info!(
            "Grouping complete: {} account(s), {} distinct hash(es), {} shared ({:.1}% of accounts affected)",
            stats.unique_accounts,
            stats.distinct_hashes,
            stats.shared_groups,
            stats.shared_rate()
        );

        (groups, stats)
    }
}
