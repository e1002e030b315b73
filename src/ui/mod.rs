//! Terminal user interface for the guide reader.
//!
//! Contains the application state and rendering, the sidebar panel,
//! event handling, terminal lifecycle management and logging setup.
mod app;
mod event;
mod guard;
pub mod logging;
mod sidebar;

pub use app::{App, AppMode};
pub use event::{Event, EventHandler};
pub use guard::{TerminalGuard, init_panic_hook, init_tui};
pub use sidebar::SidebarPanel;
