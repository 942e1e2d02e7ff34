//! View model types representing renderable UI state.
//!
//! View models are computed by `AppState::compute_viewmodel()` and consumed by
//! the renderer. They hold display-ready strings only: no session logic, no
//! clock, no vocabulary. Exactly one of the entering sections
//! (`input_bar`, `entered`) or `results` is populated at a time.
//!
//! # Example
//!
//! ```rust
//! use emotion_quiz::ui::viewmodel::{FooterInfo, HeaderInfo, ResultsInfo, UIViewModel};
//!
//! let vm = UIViewModel {
//!     header: HeaderInfo { title: " How many emotions do you know? ".to_string() },
//!     footer: FooterInfo { keybindings: "q/Esc: close".to_string() },
//!     input_bar: None,
//!     feedback: None,
//!     entered: None,
//!     results: Some(ResultsInfo {
//!         heading: "Your Results".to_string(),
//!         percentage: "33.3%".to_string(),
//!         summary: "You named 1 out of 3 emotions!".to_string(),
//!         call_to_action: String::new(),
//!         button_label: "Sign Up to Learn More".to_string(),
//!     }),
//! };
//! assert!(vm.input_bar.is_none());
//! ```

/// Complete UI view model for rendering.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Header information (quiz title).
    pub header: HeaderInfo,

    /// Footer information (keybindings, help text).
    pub footer: FooterInfo,

    /// Input box contents while words are being entered.
    pub input_bar: Option<InputBarInfo>,

    /// Duplicate/unknown word message, while it is still visible.
    pub feedback: Option<FeedbackInfo>,

    /// Accepted words while words are being entered.
    pub entered: Option<EnteredListInfo>,

    /// Score panel once results are shown.
    pub results: Option<ResultsInfo>,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text.
    pub keybindings: String,
}

/// Input box display information.
#[derive(Debug, Clone)]
pub struct InputBarInfo {
    /// Pending input, or the placeholder when nothing is typed.
    pub text: String,

    /// Whether `text` is the placeholder (rendered dimmed, no cursor).
    pub is_placeholder: bool,
}

/// Transient alert line.
#[derive(Debug, Clone)]
pub struct FeedbackInfo {
    /// Message text, e.g. "Banana is not an emotion".
    pub message: String,
}

/// The words named so far, wrapped into rows of chips.
#[derive(Debug, Clone)]
pub struct EnteredListInfo {
    /// List heading including the count.
    pub title: String,

    /// Visible chip rows, oldest first.
    pub chip_rows: Vec<Vec<String>>,

    /// Number of older words scrolled out of view.
    pub hidden_count: usize,
}

/// Score panel display information.
#[derive(Debug, Clone)]
pub struct ResultsInfo {
    /// Panel heading.
    pub heading: String,

    /// Formatted percentage, e.g. "33.3%".
    pub percentage: String,

    /// "You named N out of M emotions!"
    pub summary: String,

    /// Sign-up prompt text.
    pub call_to_action: String,

    /// Label of the sign-up button.
    pub button_label: String,
}
