//! Data layer of the YouTube analytics dashboard: wire types for the REST
//! API, display formatting, and the chart series derived from a channel's
//! videos. Everything here is pure and runs both natively and in the browser.

pub mod aggregate;
pub mod channel_ref;
pub mod chart;
pub mod config;
pub mod error;
pub mod format;
pub mod models;
pub mod pagination;
pub mod query;
pub mod timestamp;
pub mod top_videos;

pub use aggregate::{aggregate_monthly, MonthlyBucket};
pub use config::ApiConfig;
pub use error::ApiError;
pub use format::{format_count, format_duration, format_short_date};
pub use top_videos::{top_by_views, DEFAULT_TOP_N};
