//! Top-level rendering coordinator.
//!
//! Computes the view model from application state and hands it to the
//! component layout for the current phase.

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Renders the plugin UI to stdout.
///
/// Prints ANSI-styled output with `print!`. Does not clear the screen; Zellij
/// hands the plugin a fresh frame for every render call.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);

    render_viewmodel(&viewmodel, &state.theme, rows, cols);
}

/// Renders a view model with the layout for its phase.
fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    if let Some(results) = &vm.results {
        components::render_results_mode(vm, results, theme, cols, rows);
    } else {
        components::render_entry_mode(vm, theme, cols, rows);
    }
}
