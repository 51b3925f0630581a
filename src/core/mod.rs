pub mod board;
pub mod collation;
pub mod expansion;
pub mod grouping;
pub mod labels;
pub mod urgency;

pub use crate::domain::model::{GroupKey, GroupMode, Karat, Karigar, Order, OrderStatus};
pub use crate::domain::ports::{Clock, KarigarSource, OrderSource, Storage};
pub use crate::utils::error::Result;
