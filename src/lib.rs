//! Guide Reader Library
//!
//! A terminal viewer for the Ezmedtech sales-team training guide: a
//! scrollable content pane with a searchable sidebar table of contents.
//!
//! # Features
//!
//! - The full training guide embedded as static content
//! - Sidebar navigation with live, case-insensitive section filtering
//! - Animated scroll-to-section
//! - Plain-text export of the guide for printing or archiving
//!
//! # Modules
//!
//! - `navigator`: sidebar, search and active-section state
//! - `content`: the embedded guide body and section anchors
//! - `export`: plain-text export of the guide
//! - `launch`: opening the marketing site in the default browser
//! - `ui`: terminal user interface components and event handling
pub mod content;
pub mod export;
pub mod launch;
pub mod navigator;
pub mod ui;

pub use ui::logging;
