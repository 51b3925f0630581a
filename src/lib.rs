pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliArgs;

pub use crate::adapters::{export::ExportFormat, storage::LocalStorage};
pub use crate::app::engine::{BoardEngine, RunOutcome};
pub use crate::config::BoardConfig;
pub use crate::core::board::{BoardSettings, BoardView, OrderBoard};
pub use crate::core::expansion::{derive_expansion_state, ExpansionState};
pub use crate::core::grouping::{filter_eligible, group_by, GroupedView};
pub use crate::core::labels::truncate_label;
pub use crate::core::urgency::{due_date_urgency, due_date_urgency_at, UrgencyColor};
pub use crate::domain::model::{GroupKey, GroupMode, Karat, Karigar, Order, OrderStatus};
pub use crate::domain::ports::{Clock, FixedClock, SystemClock};
pub use crate::utils::error::{BoardError, Result};
