//! Display formatting and result wrapper types.
//!
//! Domain models and analytics read models implement [`std::fmt::Display`]
//! directly, producing markdown. Newtype wrappers cover the cases where the
//! same data needs context: a page of goals, the outcome of a create, update
//! or delete, or a list of missed days tied to its goal.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Models and     │    │  Wrappers and   │    │    Markdown     │
//! │  read models    │───▶│  result types   │───▶│    (terminal)   │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! - [`collections`]: [`GoalPage`], [`Tasks`]
//! - [`results`]: [`CreateResult`], [`UpdateResult`], [`DeleteResult`]
//! - [`analytics`]: progress, catch-up, insights, charts and the dashboard
//! - [`status`]: one-line [`OperationStatus`] messages
//! - [`datetime`]: [`LocalDateTime`]
//!
//! ```rust
//! use tempo_core::display::OperationStatus;
//!
//! let refused = OperationStatus::failure("Deletion requires confirmation");
//! assert!(refused.to_string().starts_with("Error:"));
//! ```

pub mod analytics;
pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use analytics::{Dashboard, MissedDays};
pub use collections::{GoalPage, Tasks};
pub use datetime::LocalDateTime;
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::OperationStatus;
