//! Recency-ordered candidate lists.
//!
//! [`RecencyOrdered`] holds verifications sorted by creation time, most
//! recent first. The ordering is established when the list is built and
//! cannot be broken afterwards, so a front-to-back scan always prefers the
//! most recently created match.

use crate::errors::OrderingError;
use crate::verification::Verification;
use std::cmp::Reverse;

/// Verifications ordered most recently created first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecencyOrdered<V> {
    items: Vec<V>,
}

impl<V: Verification> RecencyOrdered<V> {
    /// Empty candidate list.
    pub fn empty() -> Self {
        Self { items: Vec::new() }
    }

    /// Sort `items` most recent first.
    ///
    /// The sort is stable: candidates created at the same instant keep their
    /// input order.
    pub fn from_unordered(mut items: Vec<V>) -> Self {
        items.sort_by_key(|item| Reverse(item.created_at()));
        Self { items }
    }

    /// Accept `items` as they are if already ordered most recent first.
    ///
    /// Equal creation times are allowed in any order.
    pub fn try_from_ordered(items: Vec<V>) -> Result<Self, OrderingError> {
        if let Some(index) = items
            .windows(2)
            .position(|pair| pair[0].created_at() < pair[1].created_at())
        {
            return Err(OrderingError::OutOfOrder { index: index + 1 });
        }
        Ok(Self { items })
    }

    /// Most recently created candidate.
    pub fn most_recent(&self) -> Option<&V> {
        self.items.first()
    }
}

impl<V> RecencyOrdered<V> {
    pub fn as_slice(&self) -> &[V] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, V> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_inner(self) -> Vec<V> {
        self.items
    }
}

impl<V: Verification> Default for RecencyOrdered<V> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<V: Verification> FromIterator<V> for RecencyOrdered<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self::from_unordered(iter.into_iter().collect())
    }
}

impl<V: Verification> TryFrom<Vec<V>> for RecencyOrdered<V> {
    type Error = OrderingError;

    fn try_from(items: Vec<V>) -> Result<Self, Self::Error> {
        Self::try_from_ordered(items)
    }
}

impl<'a, V> IntoIterator for &'a RecencyOrdered<V> {
    type Item = &'a V;
    type IntoIter = std::slice::Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verification::VerificationRecord;
    use chrono::{DateTime, TimeDelta, TimeZone, Utc};
    use uuid::Uuid;

    fn day(n: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + TimeDelta::days(n)
    }

    fn record(id: u128, created: i64) -> VerificationRecord {
        VerificationRecord::issued(Uuid::from_u128(id), day(created), 30)
    }

    fn ids(list: &RecencyOrdered<VerificationRecord>) -> Vec<u128> {
        list.iter().map(|r| r.id.as_u128()).collect()
    }

    #[test]
    fn from_unordered_sorts_most_recent_first() {
        let list = RecencyOrdered::from_unordered(vec![record(1, 1), record(3, 9), record(2, 5)]);
        assert_eq!(ids(&list), vec![3, 2, 1]);
        assert_eq!(list.most_recent().map(|r| r.id.as_u128()), Some(3));

        let drained: Vec<u128> = list.into_inner().into_iter().map(|r| r.id.as_u128()).collect();
        assert_eq!(drained, vec![3, 2, 1]);
    }

    #[test]
    fn sort_keeps_input_order_for_ties() {
        let list: RecencyOrdered<_> = [record(1, 4), record(2, 4), record(3, 7)].into_iter().collect();
        assert_eq!(ids(&list), vec![3, 1, 2]);
    }

    #[test]
    fn try_from_ordered_reports_first_violation() {
        let err = RecencyOrdered::try_from_ordered(vec![record(1, 9), record(2, 3), record(3, 5)])
            .unwrap_err();
        assert_eq!(err, OrderingError::OutOfOrder { index: 2 });
    }

    #[test]
    fn try_from_ordered_accepts_ties_and_keeps_order() {
        let list = RecencyOrdered::try_from(vec![record(2, 5), record(1, 5), record(3, 1)]).unwrap();
        assert_eq!(ids(&list), vec![2, 1, 3]);
    }

    #[test]
    fn empty_list() {
        let list = RecencyOrdered::<VerificationRecord>::default();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert!(list.most_recent().is_none());
        assert!(RecencyOrdered::<VerificationRecord>::try_from_ordered(Vec::new()).is_ok());
    }
}
