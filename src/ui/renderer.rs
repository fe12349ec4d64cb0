//! Top-level rendering coordinator.
//!
//! Rendering is two steps: [`AppState::compute_viewmodel`] turns state into a
//! [`UIViewModel`], then the component layouts print it.

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Renders the plugin UI to stdout.
///
/// Computes the view model from `state` and hands it to the detail or list
/// layout.
///
/// # Parameters
///
/// * `state` - Current application state
/// * `rows` - Terminal height in rows
/// * `cols` - Terminal width in columns
///
/// # Output
///
/// ANSI-styled text via `print!`. Does not clear the screen.
///
/// # Example
///
/// ```rust
/// use artscope::{initialize, Config};
///
/// let state = initialize(&Config::default());
/// artscope::ui::render(&state, 24, 80);
/// ```
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);

    render_viewmodel(&viewmodel, &state.theme, rows, cols);
}

fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    if let Some(detail) = &vm.detail {
        components::render_detail_mode(vm, detail, theme, cols, rows);
    } else {
        components::render_list_mode(vm, theme, cols, rows);
    }
}
