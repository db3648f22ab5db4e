//! Console table formatter for shared-password reports.
//!
//! Renders one bordered row per group with columns
//! `NT Hash | Shared By (Count) | User Accounts`. Member lists longer than
//! [`MEMBER_DISPLAY_CAP`] are shortened to the first seven usernames plus a
//! `+<n> more` marker; the CSV and JSON exports never truncate.
//!
//! # Example
//!
//! ```
//! use hashhound::duplicates::HashGroup;
//! use hashhound::output::TableOutput;
//!
//! let groups = vec![HashGroup::new(
//!     "202cb962ac59075b964b07152d234b70".to_string(),
//!     vec!["user1".to_string(), "user2".to_string()],
//! )];
//! let table = TableOutput::new(&groups).render();
//! assert!(table.contains("NT Hash"));
//! assert!(table.contains("user1, user2"));
//! ```

use std::io;

use crate::duplicates::HashGroup;

/// Maximum usernames shown per table row before `+<n> more` kicks in.
pub const MEMBER_DISPLAY_CAP: usize = 7;

const HEADERS: [&str; 3] = ["NT Hash", "Shared By (Count)", "User Accounts"];

/// Console table formatter.
///
/// Pure function of a finalized, pre-sorted group slice; rows come out in
/// slice order.
pub struct TableOutput<'a> {
    groups: &'a [HashGroup],
}

impl<'a> TableOutput<'a> {
    /// Create a new table formatter.
    #[must_use]
    pub fn new(groups: &'a [HashGroup]) -> Self {
        Self { groups }
    }

    /// Write the bordered table to the given writer.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from the writer.
    pub fn write_to<W: io::Write>(&self, mut writer: W) -> io::Result<()> {
        let rows: Vec<[String; 3]> = self
            .groups
            .iter()
            .map(|group| {
                [
                    group.nt_hash.clone(),
                    group.len().to_string(),
                    display_members(group),
                ]
            })
            .collect();

        let mut widths = [HEADERS[0].len(), HEADERS[1].len(), HEADERS[2].len()];
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row.iter()) {
                *width = (*width).max(cell.chars().count());
            }
        }

        write_border(&mut writer, &widths)?;
        writeln!(
            writer,
            "| {:<w0$} | {:<w1$} | {:<w2$} |",
            HEADERS[0],
            HEADERS[1],
            HEADERS[2],
            w0 = widths[0],
            w1 = widths[1],
            w2 = widths[2]
        )?;
        write_border(&mut writer, &widths)?;
        for row in &rows {
            writeln!(
                writer,
                "| {:<w0$} | {:>w1$} | {:<w2$} |",
                row[0],
                row[1],
                row[2],
                w0 = widths[0],
                w1 = widths[1],
                w2 = widths[2]
            )?;
        }
        write_border(&mut writer, &widths)?;

        Ok(())
    }

    /// Render the table to a string.
    #[must_use]
    pub fn render(&self) -> String {
        let mut buffer = Vec::new();
        // Writing into a Vec cannot fail.
        self.write_to(&mut buffer)
            .expect("in-memory table rendering failed");
        String::from_utf8_lossy(&buffer).to_string()
    }
}

fn write_border<W: io::Write>(writer: &mut W, widths: &[usize; 3]) -> io::Result<()> {
    writeln!(
        writer,
        "+-{:-<w0$}-+-{:-<w1$}-+-{:-<w2$}-+",
        "",
        "",
        "",
        w0 = widths[0],
        w1 = widths[1],
        w2 = widths[2]
    )
}

/// Comma-joined member list, capped for display.
///
/// Above [`MEMBER_DISPLAY_CAP`] members, shows the first seven (original
/// dump order) followed by `+<remaining> more`.
fn display_members(group: &HashGroup) -> String {
    if group.len() > MEMBER_DISPLAY_CAP {
        let shown = group.members[..MEMBER_DISPLAY_CAP].join(", ");
        format!("{shown}, +{} more", group.len() - MEMBER_DISPLAY_CAP)
    } else {
        group.member_list()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(hash: &str, members: &[&str]) -> HashGroup {
        HashGroup::new(
            hash.to_string(),
            members.iter().map(|m| m.to_string()).collect(),
        )
    }

    #[test]
    fn test_table_contains_headers_and_borders() {
        let groups = vec![group("aabb", &["x", "y"])];
        let table = TableOutput::new(&groups).render();

        assert!(table.contains("| NT Hash"));
        assert!(table.contains("Shared By (Count)"));
        assert!(table.contains("User Accounts"));
        assert!(table.starts_with("+-"));
        assert!(table.trim_end().ends_with("-+"));
    }

    #[test]
    fn test_table_row_content() {
        let groups = vec![group("202cb962ac59075b964b07152d234b70", &["user1", "user2"])];
        let table = TableOutput::new(&groups).render();

        assert!(table.contains("202cb962ac59075b964b07152d234b70"));
        assert!(table.contains("user1, user2"));
        // Count column carries the member count.
        assert!(table.contains("| 2 |") || table.contains(" 2 |"));
    }

    #[test]
    fn test_rows_follow_slice_order() {
        let groups = vec![group("first", &["a", "b", "c"]), group("second", &["d", "e"])];
        let table = TableOutput::new(&groups).render();

        let first = table.find("first").unwrap();
        let second = table.find("second").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_members_at_cap_are_not_truncated() {
        let members: Vec<String> = (1..=7).map(|i| format!("u{i}")).collect();
        let refs: Vec<&str> = members.iter().map(String::as_str).collect();
        let groups = vec![group("h", &refs)];
        let table = TableOutput::new(&groups).render();

        assert!(table.contains("u1, u2, u3, u4, u5, u6, u7"));
        assert!(!table.contains("more"));
    }

    #[test]
    fn test_members_above_cap_are_truncated() {
        let members: Vec<String> = (1..=9).map(|i| format!("u{i}")).collect();
        let refs: Vec<&str> = members.iter().map(String::as_str).collect();
        let groups = vec![group("h", &refs)];
        let table = TableOutput::new(&groups).render();

        assert!(table.contains("u1, u2, u3, u4, u5, u6, u7, +2 more"));
        assert!(!table.contains("u8"));
        assert!(!table.contains("u9"));
    }

    #[test]
    fn test_empty_group_list_renders_header_only() {
        let table = TableOutput::new(&[]).render();
        // Header plus three borders, no data rows.
        assert_eq!(table.lines().count(), 4);
    }
}
