use crate::domain::model::{GroupKey, GroupMode, Order};
use std::collections::HashMap;

/// Orders partitioned into groups, ordered by locale-collated group label.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupedView {
    groups: Vec<(GroupKey, Vec<Order>)>,
}

impl GroupedView {
    pub fn groups(&self) -> &[(GroupKey, Vec<Order>)] {
        &self.groups
    }

    pub fn keys(&self) -> impl Iterator<Item = &GroupKey> {
        self.groups.iter().map(|(key, _)| key)
    }

    pub fn get(&self, key: &GroupKey) -> Option<&[Order]> {
        self.groups
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, orders)| orders.as_slice())
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn order_count(&self) -> usize {
        self.groups.iter().map(|(_, orders)| orders.len()).sum()
    }

    /// True when both views have the same keys in the same order.
    pub fn same_keys(&self, other: &GroupedView) -> bool {
        self.keys().eq(other.keys())
    }
}

/// Keeps `active` and `complete` orders in source order; everything else is dropped.
pub fn filter_eligible(orders: &[Order]) -> Vec<Order> {
    orders
        .iter()
        .filter(|order| order.status.is_displayed())
        .cloned()
        .collect()
}

pub fn group_by(orders: &[Order], mode: GroupMode) -> GroupedView {
    let mut index: HashMap<GroupKey, usize> = HashMap::new();
    let mut groups: Vec<(GroupKey, Vec<Order>)> = Vec::new();

    for order in orders {
        let key = GroupKey::for_order(order, mode);
        match index.get(&key) {
            Some(&slot) => groups[slot].1.push(order.clone()),
            None => {
                index.insert(key.clone(), groups.len());
                groups.push((key, vec![order.clone()]));
            }
        }
    }

    groups.sort_by(|(a, _), (b, _)| a.cmp(b));

    GroupedView { groups }
}

/// Filter then group, the full pipeline run on every change to the order list or mode.
pub fn build_grouped_view(orders: &[Order], mode: GroupMode) -> GroupedView {
    let eligible = filter_eligible(orders);
    let view = group_by(&eligible, mode);
    tracing::debug!(
        "Grouped {} of {} orders into {} groups ({:?})",
        view.order_count(),
        orders.len(),
        view.len(),
        mode
    );
    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Karigar, OrderStatus};

    fn order(id: &str, status: &str, karigar: Option<&str>, product: Option<&str>) -> Order {
        let mut order = Order::new(id, status);
        order.karigar = karigar.map(|name| Karigar::new(format!("k-{}", name), name));
        order.product = product.map(str::to_string);
        order
    }

    fn labels(view: &GroupedView) -> Vec<&str> {
        view.keys().map(|k| k.label()).collect()
    }

    fn ids(orders: &[Order]) -> Vec<&str> {
        orders.iter().map(|o| o.order_id.as_str()).collect()
    }

    #[test]
    fn test_filter_eligible_keeps_active_and_complete_in_order() {
        let orders = vec![
            order("1", "active", None, None),
            order("2", "cancelled", None, None),
            order("3", "complete", None, None),
            order("4", "pending", None, None),
            order("5", "active", None, None),
        ];

        let eligible = filter_eligible(&orders);
        assert_eq!(ids(&eligible), vec!["1", "3", "5"]);
        assert!(eligible.iter().all(|o| matches!(o.status, OrderStatus::Active | OrderStatus::Complete)));
    }

    #[test]
    fn test_filter_eligible_empty_input() {
        assert!(filter_eligible(&[]).is_empty());
        assert!(group_by(&[], GroupMode::ByKarigar).is_empty());
    }

    #[test]
    fn test_unassigned_orders_group_under_not_assigned() {
        let orders = vec![
            order("1", "active", None, Some("Ring")),
            order("2", "active", Some("Amit"), Some("Ring")),
        ];

        let view = group_by(&orders, GroupMode::ByKarigar);
        assert_eq!(labels(&view), vec!["Amit", "Not Assigned"]);
        assert_eq!(ids(view.get(&GroupKey::Karigar("Amit".into())).unwrap()), vec!["2"]);
        assert_eq!(ids(view.get(&GroupKey::Unassigned).unwrap()), vec!["1"]);
    }

    #[test]
    fn test_karigar_named_not_assigned_merges_with_unassigned() {
        let orders = vec![
            order("1", "active", None, None),
            order("2", "active", Some("Not Assigned"), Some("Unknown Product")),
            order("3", "active", Some("Amit"), None),
        ];

        let view = group_by(&orders, GroupMode::ByKarigar);
        assert_eq!(labels(&view), vec!["Amit", "Not Assigned"]);
        assert_eq!(ids(view.get(&GroupKey::Unassigned).unwrap()), vec!["1", "2"]);

        let view = group_by(&orders, GroupMode::ByProduct);
        assert_eq!(labels(&view), vec!["Unknown Product"]);
        assert_eq!(ids(view.get(&GroupKey::UnknownProduct).unwrap()), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_product_mode_uses_unknown_product_sentinel() {
        let orders = vec![
            order("1", "active", None, Some("Necklace")),
            order("2", "active", None, Some("")),
            order("3", "complete", None, None),
            order("4", "active", None, Some("bangle")),
        ];

        let view = group_by(&orders, GroupMode::ByProduct);
        assert_eq!(labels(&view), vec!["bangle", "Necklace", "Unknown Product"]);
        assert_eq!(ids(view.get(&GroupKey::UnknownProduct).unwrap()), vec!["2", "3"]);
    }

    #[test]
    fn test_groups_are_collated_not_insertion_ordered() {
        let orders = vec![
            order("1", "active", Some("zoya"), None),
            order("2", "active", Some("Bharat"), None),
            order("3", "active", Some("amit"), None),
            order("4", "active", Some("Chetan"), None),
        ];

        let view = group_by(&orders, GroupMode::ByKarigar);
        assert_eq!(labels(&view), vec!["amit", "Bharat", "Chetan", "zoya"]);
    }

    #[test]
    fn test_key_order_independent_of_input_permutation() {
        let base = vec![
            order("1", "active", Some("Ravi"), None),
            order("2", "active", None, None),
            order("3", "active", Some("Amit"), None),
            order("4", "complete", Some("Meena"), None),
        ];
        let expected = labels(&group_by(&base, GroupMode::ByKarigar))
            .into_iter()
            .map(str::to_string)
            .collect::<Vec<_>>();

        let mut reversed = base.clone();
        reversed.reverse();
        let mut rotated = base.clone();
        rotated.rotate_left(2);

        for permutation in [reversed, rotated] {
            let view = group_by(&permutation, GroupMode::ByKarigar);
            assert_eq!(labels(&view), expected);
        }
    }

    #[test]
    fn test_group_preserves_source_order_within_group() {
        let orders = vec![
            order("1", "active", Some("Amit"), None),
            order("2", "active", Some("Ravi"), None),
            order("3", "complete", Some("Amit"), None),
            order("4", "active", Some("Amit"), None),
        ];

        let view = group_by(&orders, GroupMode::ByKarigar);
        assert_eq!(ids(view.get(&GroupKey::Karigar("Amit".into())).unwrap()), vec!["1", "3", "4"]);
    }

    #[test]
    fn test_every_eligible_order_lands_in_exactly_one_group() {
        let orders = vec![
            order("1", "active", Some("Amit"), Some("Ring")),
            order("2", "complete", None, Some("Chain")),
            order("3", "active", Some("Ravi"), None),
            order("4", "cancelled", Some("Ravi"), Some("Ring")),
            order("5", "active", Some("Amit"), Some("Chain")),
        ];

        for mode in [GroupMode::ByKarigar, GroupMode::ByProduct] {
            let view = build_grouped_view(&orders, mode);
            let mut seen: Vec<&str> = view
                .groups()
                .iter()
                .flat_map(|(_, orders)| orders.iter().map(|o| o.order_id.as_str()))
                .collect();
            seen.sort();
            assert_eq!(seen, vec!["1", "2", "3", "5"], "mode {:?}", mode);
        }
    }

    #[test]
    fn test_grouping_is_deterministic() {
        let orders = vec![
            order("1", "active", Some("Amit"), Some("Ring")),
            order("2", "active", None, Some("Chain")),
            order("3", "complete", Some("amit"), None),
        ];

        let first = build_grouped_view(&orders, GroupMode::ByKarigar);
        let second = build_grouped_view(&orders, GroupMode::ByKarigar);
        assert_eq!(first, second);
        assert!(first.same_keys(&second));
        assert_eq!(labels(&first), vec!["amit", "Amit", "Not Assigned"]);
    }
}
