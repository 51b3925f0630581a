// Adapters layer: concrete order sources, storage and board exporters.

pub mod export;
pub mod file_source;
pub mod http_source;
pub mod static_source;
pub mod storage;
