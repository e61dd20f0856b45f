//! Month-grouped index of recent entries for the sidebar.

use crate::dates::EntryDate;
use crate::entry::Entry;

/// The sidebar lists at most this many recent entries.
pub const RECENT_LIMIT: usize = 10;

/// One sidebar link: enough to render a titled anchor per entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarEntry {
    pub date: EntryDate,
    pub title: String,
}

/// The entries of one year-month, labelled like `2024年01月`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthBucket {
    pub label: String,
    pub entries: Vec<SidebarEntry>,
}

/// Groups the most recent entries ([`RECENT_LIMIT`] at most) by year-month.
///
/// `entries` must already be sorted newest first; buckets are emitted in the
/// order their month is first seen, with no re-sorting, so unsorted input
/// would split a month across several buckets.
/// [`EntryStore::read_summaries`](crate::store::EntryStore::read_summaries)
/// returns entries in the required order.
pub fn build_sidebar(entries: &[Entry]) -> Vec<MonthBucket> {
    let mut buckets: Vec<MonthBucket> = Vec::new();
    let mut current = String::new();
    let mut acc: Vec<SidebarEntry> = Vec::new();

    for entry in entries.iter().take(RECENT_LIMIT) {
        let label = entry.date.month_label();
        if label != current {
            if !acc.is_empty() {
                buckets.push(MonthBucket {
                    label: current,
                    entries: std::mem::take(&mut acc),
                });
            }
            current = label;
        }
        acc.push(SidebarEntry {
            date: entry.date,
            title: entry.title.clone(),
        });
    }
    if !acc.is_empty() {
        buckets.push(MonthBucket {
            label: current,
            entries: acc,
        });
    }

    buckets
}
