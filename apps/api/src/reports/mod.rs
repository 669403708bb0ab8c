// Report history: topic versioning, document storage, per-user statistics.

pub mod handlers;
pub mod stats;
pub mod storage;
pub mod versioning;
