//! Common types used across the application.

pub mod account;
pub mod folder;
pub mod id;
pub mod insight;
pub mod transaction;

pub use account::{Account, AccountType, HealthStatus};
pub use folder::Folder;
pub use id::*;
pub use insight::{
    DayOfWeekPattern, InsightBundle, InsightGroup, Projection, Projections, SpendingVelocity,
    TimeOfDayPattern, TimePatterns, WeekendFocus,
};
pub use transaction::Transaction;
