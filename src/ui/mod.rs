//! User interface rendering layer with component-based architecture.
//!
//! This module turns view models into ANSI-styled output through small
//! rendering components. It provides theme support and a layout that adapts
//! to the pane size.
//!
//! # Architecture
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Shared rendering utilities (cursor, centering, truncation)
//! - [`theme`]: Color scheme definitions and ANSI escape sequence generation
//!
//! # Example
//!
//! ```rust,no_run
//! use emotion_quiz::app::AppState;
//! use emotion_quiz::ui::render;
//!
//! let state = AppState::default();
//! render(&state, 24, 80); // Renders to stdout
//! ```

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    EnteredListInfo, FeedbackInfo, FooterInfo, HeaderInfo, InputBarInfo, ResultsInfo, UIViewModel,
};
