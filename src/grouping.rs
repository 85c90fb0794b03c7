use std::collections::HashMap;

use crate::utils::{minute_key, month_key};

/// One rendered message paired with its original timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimedBlock {
    pub timestamp: String,
    pub block: String,
}

/// Messages sent within the same clock minute. Never empty.
pub type MinuteGroup = Vec<TimedBlock>;

/// Everything that goes into one output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileGroup {
    /// `YYYY-MM` when splitting by month, empty otherwise.
    pub month: String,
    pub minutes: Vec<MinuteGroup>,
}

/// Multimap that remembers the order in which keys were first seen.
#[derive(Debug)]
pub struct OrderedGroups<T> {
    index: HashMap<String, usize>,
    groups: Vec<(String, Vec<T>)>,
}

impl<T> Default for OrderedGroups<T> {
    fn default() -> Self {
        Self {
            index: HashMap::new(),
            groups: Vec::new(),
        }
    }
}

impl<T> OrderedGroups<T> {
    /// Append `item` to the bucket for `key`, opening a new bucket at the end if needed.
    pub fn push(&mut self, key: String, item: T) {
        match self.index.get(&key) {
            Some(&i) => self.groups[i].1.push(item),
            None => {
                self.index.insert(key.clone(), self.groups.len());
                self.groups.push((key, vec![item]));
            }
        }
    }

    pub fn into_groups(self) -> Vec<(String, Vec<T>)> {
        self.groups
    }
}

/// Bucket `items` by `key_fn`, first-seen key order, stable within a bucket.
pub fn group_by<T, F>(items: impl IntoIterator<Item = T>, mut key_fn: F) -> Vec<(String, Vec<T>)>
where
    F: FnMut(&T) -> String,
{
    let mut groups = OrderedGroups::default();
    for item in items {
        let key = key_fn(&item);
        groups.push(key, item);
    }
    groups.into_groups()
}

/// Group blocks by month, then by minute within each month.
///
/// With `split_by_month` off the month level is flattened into a single
/// `FileGroup` with an empty month, keeping the minute groups in order.
pub fn group_blocks(blocks: Vec<TimedBlock>, split_by_month: bool) -> Vec<FileGroup> {
    let months: Vec<FileGroup> = group_by(blocks, |b| month_key(&b.timestamp))
        .into_iter()
        .map(|(month, month_blocks)| FileGroup {
            month,
            minutes: group_by(month_blocks, |b| minute_key(&b.timestamp))
                .into_iter()
                .map(|(_, minute)| minute)
                .collect(),
        })
        .collect();

    if split_by_month {
        return months;
    }

    vec![FileGroup {
        month: String::new(),
        minutes: months.into_iter().flat_map(|m| m.minutes).collect(),
    }]
}
