mod client_form;
mod client_list;
mod dashboard;
mod delete_dialog;
mod header;
pub mod landing;
mod layout;
mod status_bar;
mod theme;

use crate::app::state::{AppState, View};
use ratatui::prelude::*;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    header::render(frame, app_layout.header, state);

    match state.view {
        View::Landing => landing::render(frame, app_layout.body, state),
        View::Dashboard => dashboard::render(frame, app_layout.body, state),
        View::Clients => client_list::render(frame, app_layout.body, state),
        View::NewClient | View::EditClient | View::ClientDetails => {
            client_form::render(frame, app_layout.body, state)
        }
        View::DeleteClient => {
            // The dialog floats over the list it was opened from
            client_list::render(frame, app_layout.body, state);
            delete_dialog::render(frame, state);
        }
    }

    status_bar::render(frame, app_layout.status_bar, state);
}
