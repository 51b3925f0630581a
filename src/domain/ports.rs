use crate::domain::model::{Karigar, Order};
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Duration, Local, NaiveDate, NaiveTime, TimeZone};

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

#[async_trait]
pub trait OrderSource: Send + Sync {
    async fn fetch_orders(&self) -> Result<Vec<Order>>;
}

#[async_trait]
pub trait KarigarSource: Send + Sync {
    async fn fetch_karigars(&self) -> Result<Vec<Karigar>>;
}

/// Source of "now" for due date urgency.
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Pinned to a calendar date, noon local time.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    today: NaiveDate,
}

impl FixedClock {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        let noon = self.today.and_time(NaiveTime::MIN) + Duration::hours(12);
        Local
            .from_local_datetime(&noon)
            .earliest()
            .unwrap_or_else(|| noon.and_utc().with_timezone(&Local))
    }
}
