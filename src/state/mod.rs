// State management module
// Handles the agent catalog, filter state, and transient notifications

pub mod app_state;
pub mod catalog;
pub mod filter;
pub mod notifications;

pub use app_state::AppState;
pub use catalog::{AgentKey, AgentRecord, CATALOG};
pub use filter::Category;
pub use notifications::{Notifications, ToastKind};
