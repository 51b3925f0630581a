use crate::core::collation::locale_compare;
use serde::{Deserialize, Deserializer, Serialize};
use std::cmp::Ordering;
use std::fmt;

pub const NOT_ASSIGNED_LABEL: &str = "Not Assigned";
pub const UNKNOWN_PRODUCT_LABEL: &str = "Unknown Product";

/// Lifecycle status of an order. Only `Active` and `Complete` appear on the board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    Active,
    Complete,
    Other(String),
}

impl OrderStatus {
    pub fn is_displayed(&self) -> bool {
        matches!(self, OrderStatus::Active | OrderStatus::Complete)
    }

    pub fn as_str(&self) -> &str {
        match self {
            OrderStatus::Active => "active",
            OrderStatus::Complete => "complete",
            OrderStatus::Other(s) => s,
        }
    }
}

impl From<String> for OrderStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "active" => OrderStatus::Active,
            "complete" => OrderStatus::Complete,
            _ => OrderStatus::Other(value),
        }
    }
}

impl From<&str> for OrderStatus {
    fn from(value: &str) -> Self {
        OrderStatus::from(value.to_string())
    }
}

impl From<OrderStatus> for String {
    fn from(value: OrderStatus) -> Self {
        value.as_str().to_string()
    }
}

/// Gold purity grade.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Karat {
    K18,
    K20,
    K22,
    Other(String),
}

impl Karat {
    pub fn as_str(&self) -> &str {
        match self {
            Karat::K18 => "18K",
            Karat::K20 => "20K",
            Karat::K22 => "22K",
            Karat::Other(s) => s,
        }
    }
}

impl Default for Karat {
    fn default() -> Self {
        Karat::Other(String::new())
    }
}

impl From<String> for Karat {
    fn from(value: String) -> Self {
        match value.as_str() {
            "18K" => Karat::K18,
            "20K" => Karat::K20,
            "22K" => Karat::K22,
            _ => Karat::Other(value),
        }
    }
}

impl From<Karat> for String {
    fn from(value: Karat) -> Self {
        value.as_str().to_string()
    }
}

/// Artisan an order can be assigned to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Karigar {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl Karigar {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(deserialize_with = "string_or_number")]
    pub order_id: String,
    pub status: OrderStatus,
    #[serde(default)]
    pub product: Option<String>,
    #[serde(default)]
    pub lot_weight: Option<f64>,
    #[serde(default)]
    pub placed_date: String,
    #[serde(default)]
    pub delivery_date: String,
    #[serde(default)]
    pub description: String,
    /// Copy of the assigned karigar, not an owning link.
    #[serde(default)]
    pub karigar: Option<Karigar>,
    #[serde(default)]
    pub karat: Karat,
}

impl Order {
    pub fn new(order_id: impl Into<String>, status: impl Into<OrderStatus>) -> Self {
        Self {
            order_id: order_id.into(),
            status: status.into(),
            product: None,
            lot_weight: None,
            placed_date: String::new(),
            delivery_date: String::new(),
            description: String::new(),
            karigar: None,
            karat: Karat::default(),
        }
    }

    pub fn with_product(mut self, product: impl Into<String>) -> Self {
        self.product = Some(product.into());
        self
    }

    pub fn with_karigar(mut self, karigar: Karigar) -> Self {
        self.karigar = Some(karigar);
        self
    }

    pub fn with_delivery_date(mut self, date: impl Into<String>) -> Self {
        self.delivery_date = date.into();
        self
    }

    pub fn karigar_name(&self) -> Option<&str> {
        self.karigar
            .as_ref()
            .map(|k| k.name.as_str())
            .filter(|name| !name.trim().is_empty())
    }

    pub fn product_name(&self) -> Option<&str> {
        self.product.as_deref().filter(|p| !p.trim().is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupMode {
    #[default]
    ByKarigar,
    ByProduct,
}

impl GroupMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "karigar" | "by_karigar" | "artisan" => Some(GroupMode::ByKarigar),
            "product" | "by_product" => Some(GroupMode::ByProduct),
            _ => None,
        }
    }
}

/// Board group. Orders missing a karigar or a product fall into the sentinel variants,
/// as do names spelled exactly like a sentinel label.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GroupKey {
    Karigar(String),
    Unassigned,
    Product(String),
    UnknownProduct,
}

impl GroupKey {
    pub fn for_order(order: &Order, mode: GroupMode) -> Self {
        match mode {
            GroupMode::ByKarigar => match order.karigar_name() {
                Some(name) if name != NOT_ASSIGNED_LABEL => GroupKey::Karigar(name.to_string()),
                _ => GroupKey::Unassigned,
            },
            GroupMode::ByProduct => match order.product_name() {
                Some(name) if name != UNKNOWN_PRODUCT_LABEL => GroupKey::Product(name.to_string()),
                _ => GroupKey::UnknownProduct,
            },
        }
    }

    pub fn label(&self) -> &str {
        match self {
            GroupKey::Karigar(name) | GroupKey::Product(name) => name,
            GroupKey::Unassigned => NOT_ASSIGNED_LABEL,
            GroupKey::UnknownProduct => UNKNOWN_PRODUCT_LABEL,
        }
    }

    pub fn is_sentinel(&self) -> bool {
        matches!(self, GroupKey::Unassigned | GroupKey::UnknownProduct)
    }

    fn rank(&self) -> u8 {
        match self {
            GroupKey::Karigar(_) => 0,
            GroupKey::Unassigned => 1,
            GroupKey::Product(_) => 2,
            GroupKey::UnknownProduct => 3,
        }
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Ord for GroupKey {
    fn cmp(&self, other: &Self) -> Ordering {
        locale_compare(self.label(), other.label()).then_with(|| self.rank().cmp(&other.rank()))
    }
}

impl PartialOrd for GroupKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(s) => s,
        Id::Number(n) => n.to_string(),
    })
}
