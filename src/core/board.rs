use crate::core::expansion::{derive_expansion_state, ExpansionState, DEFAULT_EXPANDED};
use crate::core::grouping::{build_grouped_view, GroupedView};
use crate::core::labels::{
    format_display_date, karat_tint, status_chip, truncate_label, StatusChip, DESCRIPTION_LIMIT,
    GROUP_LABEL_LIMIT,
};
use crate::core::urgency::{due_date_urgency_at, UrgencyColor};
use crate::domain::model::{GroupKey, GroupMode, Karigar, Order};
use crate::domain::ports::Clock;
use serde::Serialize;
use std::collections::HashMap;

const STRIPE_TOKEN: &str = "#f1f3f4";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardSettings {
    pub mode: GroupMode,
    pub default_expanded: bool,
    pub label_limit: usize,
    pub description_limit: usize,
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self {
            mode: GroupMode::ByKarigar,
            default_expanded: DEFAULT_EXPANDED,
            label_limit: GROUP_LABEL_LIMIT,
            description_limit: DESCRIPTION_LIMIT,
        }
    }
}

/// Owns the order and karigar lists and the derived grouping.
///
/// Every mutator recomputes the grouped view immediately. The expansion state
/// is re-derived only when the set of group keys changes.
#[derive(Debug, Clone, Default)]
pub struct OrderBoard {
    orders: Vec<Order>,
    karigars: Vec<Karigar>,
    settings: BoardSettings,
    grouped: GroupedView,
    expansion: ExpansionState,
}

impl OrderBoard {
    pub fn new(settings: BoardSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    pub fn with_orders(settings: BoardSettings, orders: Vec<Order>, karigars: Vec<Karigar>) -> Self {
        let mut board = Self::new(settings);
        board.orders = orders;
        board.karigars = karigars;
        board.recompute();
        board
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn karigars(&self) -> &[Karigar] {
        &self.karigars
    }

    pub fn mode(&self) -> GroupMode {
        self.settings.mode
    }

    pub fn grouped(&self) -> &GroupedView {
        &self.grouped
    }

    pub fn expansion(&self) -> &ExpansionState {
        &self.expansion
    }

    pub fn set_orders(&mut self, orders: Vec<Order>) {
        self.orders = orders;
        self.recompute();
    }

    pub fn set_karigars(&mut self, karigars: Vec<Karigar>) {
        self.karigars = karigars;
        self.recompute();
    }

    pub fn set_mode(&mut self, mode: GroupMode) {
        if self.settings.mode == mode {
            return;
        }
        self.settings.mode = mode;
        self.recompute();
    }

    /// Replaces the order with the same id, or appends it.
    pub fn upsert_order(&mut self, order: Order) {
        match self.orders.iter_mut().find(|o| o.order_id == order.order_id) {
            Some(existing) => *existing = order,
            None => self.orders.push(order),
        }
        self.recompute();
    }

    pub fn remove_order(&mut self, order_id: &str) -> Option<Order> {
        let pos = self.orders.iter().position(|o| o.order_id == order_id)?;
        let removed = self.orders.remove(pos);
        self.recompute();
        Some(removed)
    }

    pub fn recompute(&mut self) {
        let resolved = resolve_karigars(&self.orders, &self.karigars);
        let grouped = build_grouped_view(&resolved, self.settings.mode);

        if !grouped.same_keys(&self.grouped) {
            self.expansion = derive_expansion_state(
                grouped.keys(),
                &self.expansion,
                self.settings.default_expanded,
            );
            tracing::debug!("Group keys changed, {} groups tracked", self.expansion.len());
        }
        self.grouped = grouped;
    }

    /// Flips one group. Returns the new flag, `None` for an unknown group.
    pub fn toggle_group(&mut self, key: &GroupKey) -> Option<bool> {
        self.expansion.toggle(key)
    }

    /// Collapses all groups when any is expanded, otherwise expands all.
    pub fn toggle_all(&mut self) -> bool {
        self.expansion.toggle_all()
    }

    pub fn any_expanded(&self) -> bool {
        self.expansion.any_expanded()
    }

    /// Looks up an order for the renderer's selection callback.
    pub fn select(&self, order_id: &str) -> Option<&Order> {
        self.grouped
            .groups()
            .iter()
            .flat_map(|(_, orders)| orders.iter())
            .find(|o| o.order_id == order_id)
    }

    pub fn view<C: Clock + ?Sized>(&self, clock: &C) -> BoardView {
        let now = clock.now();
        let mode = self.settings.mode;

        let groups = self
            .grouped
            .groups()
            .iter()
            .enumerate()
            .map(|(index, (key, orders))| GroupSection {
                key: key.label().to_string(),
                label: truncate_label(key.label(), self.settings.label_limit),
                sentinel: key.is_sentinel(),
                expanded: self.expansion.is_expanded(key),
                row_tint: (index % 2 == 0).then_some(STRIPE_TOKEN),
                cards: orders
                    .iter()
                    .map(|order| {
                        let urgency = due_date_urgency_at(&order.delivery_date, &now);
                        OrderCard::build(order, mode, urgency, self.settings.description_limit)
                    })
                    .collect(),
            })
            .collect();

        let any_expanded = self.any_expanded();
        BoardView {
            title: match mode {
                GroupMode::ByKarigar => "Karigar Orders",
                GroupMode::ByProduct => "Product Orders",
            },
            column_header: match mode {
                GroupMode::ByKarigar => "Karigar Name",
                GroupMode::ByProduct => "Product",
            },
            toggle_label: if any_expanded { "Collapse All" } else { "Expand All" },
            mode,
            groups,
        }
    }
}

/// Refreshes each embedded karigar from the directory by id.
fn resolve_karigars(orders: &[Order], karigars: &[Karigar]) -> Vec<Order> {
    if karigars.is_empty() {
        return orders.to_vec();
    }
    let by_id: HashMap<&str, &Karigar> = karigars.iter().map(|k| (k.id.as_str(), k)).collect();

    orders
        .iter()
        .map(|order| {
            let mut order = order.clone();
            let current = order
                .karigar
                .as_ref()
                .and_then(|k| by_id.get(k.id.as_str()))
                .map(|k| (*k).clone());
            if current.is_some() {
                order.karigar = current;
            }
            order
        })
        .collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct BoardView {
    pub title: &'static str,
    pub column_header: &'static str,
    pub toggle_label: &'static str,
    pub mode: GroupMode,
    pub groups: Vec<GroupSection>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GroupSection {
    pub key: String,
    pub label: String,
    pub sentinel: bool,
    pub expanded: bool,
    pub row_tint: Option<&'static str>,
    pub cards: Vec<OrderCard>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OrderCard {
    pub order_id: String,
    /// Product in karigar view, karigar in product view.
    pub title: String,
    pub status: String,
    pub chip: StatusChip,
    pub urgency: UrgencyColor,
    pub karat: String,
    pub tint: &'static str,
    pub lot_weight: Option<f64>,
    pub placed: String,
    pub delivery: String,
    pub description: String,
}

impl OrderCard {
    fn build(order: &Order, mode: GroupMode, urgency: UrgencyColor, description_limit: usize) -> Self {
        let title = match mode {
            GroupMode::ByKarigar => order.product.clone().unwrap_or_default(),
            GroupMode::ByProduct => order
                .karigar
                .as_ref()
                .map(|k| k.name.clone())
                .unwrap_or_default(),
        };

        Self {
            order_id: order.order_id.clone(),
            title,
            status: order.status.as_str().to_string(),
            chip: status_chip(&order.status, urgency),
            urgency,
            karat: order.karat.as_str().to_string(),
            tint: karat_tint(&order.karat),
            lot_weight: order.lot_weight,
            placed: format_display_date(&order.placed_date),
            delivery: format_display_date(&order.delivery_date),
            description: truncate_label(&order.description, description_limit),
        }
    }
}
