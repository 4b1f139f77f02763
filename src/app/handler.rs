use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::{AppState, View};
use crate::clients::form::{FieldInput, FormFocus};
use crate::dashboard::DashboardTab;
use crate::ui::landing;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent)
        }
        AppEvent::Tick => {
            let ttl = Duration::from_secs(state.config.ui.status_ttl_secs);
            state.expire_status(ttl);
            vec![]
        }
    }
}

/// Applies one action to the state. Shared by the main loop and the
/// tests so both see identical transitions.
pub fn apply_action(state: &mut AppState, action: Action) {
    match action {
        Action::Navigate { view, client_id } => {
            tracing::debug!(?view, ?client_id, "navigate");
            state.navigate(view, client_id);
        }
        Action::SaveClient { patch } => {
            let updated = state.selected_client().is_some();
            let id = state.save_client(patch);
            tracing::info!(%id, updated, "client saved");
            state.set_status(if updated {
                "Alterações salvas"
            } else {
                "Cliente cadastrado"
            });
        }
        Action::DeleteClient { id } => {
            tracing::info!(%id, "client deleted");
            state.delete_client(&id);
            state.set_status("Cliente excluído");
        }
        Action::ToggleAction { index } => {
            state.dashboard.toggle_action(index);
            state.dirty = true;
        }
        Action::Quit => {
            tracing::info!("quit requested");
            state.should_quit = true;
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) => handle_key(state, key),
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    // The delete dialog is modal and captures all input while open
    if state.view == View::DeleteClient {
        return handle_delete_dialog_key(state, key);
    }

    match key.code {
        KeyCode::F(1) => return vec![navigate(View::Landing)],
        KeyCode::F(2) => return vec![navigate(View::Dashboard)],
        KeyCode::F(3) => return vec![navigate(View::Clients)],
        _ => {}
    }

    match state.view {
        View::Landing => handle_landing_key(state, key),
        View::Dashboard => handle_dashboard_key(state, key),
        View::Clients => handle_list_key(state, key),
        View::NewClient | View::EditClient => handle_form_key(state, key),
        View::ClientDetails => handle_details_key(state, key),
        View::DeleteClient => vec![],
    }
}

fn navigate(view: View) -> Action {
    Action::Navigate {
        view,
        client_id: None,
    }
}

fn handle_landing_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Enter => vec![navigate(View::Dashboard)],
        KeyCode::Down => {
            scroll_landing(state, 1);
            vec![]
        }
        KeyCode::Up => {
            scroll_landing(state, -1);
            vec![]
        }
        KeyCode::PageDown => {
            scroll_landing(state, 10);
            vec![]
        }
        KeyCode::PageUp => {
            scroll_landing(state, -10);
            vec![]
        }
        KeyCode::Home => {
            state.landing_scroll = 0;
            vec![]
        }
        KeyCode::Char('q') if state.config.behavior.quit_on_q => vec![Action::Quit],
        _ => vec![],
    }
}

fn scroll_landing(state: &mut AppState, delta: i16) {
    state.landing_scroll = state
        .landing_scroll
        .saturating_add_signed(delta)
        .min(landing::MAX_SCROLL);
}

fn handle_dashboard_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let on_plan = state.dashboard.tab == DashboardTab::PlanoDeAcao;
    match key.code {
        KeyCode::Tab | KeyCode::Right | KeyCode::Left => {
            state.dashboard.next_tab();
            vec![]
        }
        KeyCode::Down if on_plan => {
            state.dashboard.select_next_action();
            vec![]
        }
        KeyCode::Up if on_plan => {
            state.dashboard.select_prev_action();
            vec![]
        }
        KeyCode::Enter | KeyCode::Char(' ') if on_plan => {
            vec![Action::ToggleAction {
                index: state.dashboard.selected_action,
            }]
        }
        KeyCode::Char('q') if state.config.behavior.quit_on_q => vec![Action::Quit],
        _ => vec![],
    }
}

fn handle_list_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('n') => vec![navigate(View::NewClient)],
            KeyCode::Char('e') => selected_row_navigate(state, View::EditClient),
            _ => vec![],
        };
    }

    let total = state.filtered_clients().len();
    match key.code {
        KeyCode::Up => {
            state.search.move_up();
            vec![]
        }
        KeyCode::Down => {
            state.search.move_down(total);
            vec![]
        }
        KeyCode::Home => {
            state.search.selected = 0;
            vec![]
        }
        KeyCode::End => {
            if total > 0 {
                state.search.selected = total - 1;
            }
            vec![]
        }
        KeyCode::Enter => selected_row_navigate(state, View::ClientDetails),
        KeyCode::Delete => selected_row_navigate(state, View::DeleteClient),
        KeyCode::Backspace => {
            state.search.pop();
            vec![]
        }
        KeyCode::Esc => {
            state.search.clear();
            vec![]
        }
        KeyCode::Char(c) => {
            state.search.push(c);
            vec![]
        }
        _ => vec![],
    }
}

fn selected_row_navigate(state: &AppState, view: View) -> Vec<Action> {
    let filtered = state.filtered_clients();
    match filtered.get(state.search.selected) {
        Some(client) => vec![Action::Navigate {
            view,
            client_id: Some(client.id.clone()),
        }],
        None => vec![],
    }
}

fn handle_form_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let Some(form) = state.form.as_mut() else {
        return vec![navigate(View::Clients)];
    };

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('a') => form.move_cursor(FieldInput::move_home),
            KeyCode::Char('e') => form.move_cursor(FieldInput::move_end),
            KeyCode::Char('w') => form.delete_word_back(),
            KeyCode::Char('u') => form.clear_field(),
            // The edit form's danger zone; plain Del edits text here
            KeyCode::Char('d') => {
                if let Some(id) = state.selected_id.clone() {
                    return vec![Action::Navigate {
                        view: View::DeleteClient,
                        client_id: Some(id),
                    }];
                }
            }
            _ => {}
        }
        return vec![];
    }

    match key.code {
        KeyCode::Esc => vec![navigate(View::Clients)],
        KeyCode::Tab | KeyCode::Down => {
            form.focus_next();
            vec![]
        }
        KeyCode::BackTab | KeyCode::Up => {
            form.focus_prev();
            vec![]
        }
        KeyCode::Enter => {
            if form.validate() {
                vec![
                    Action::SaveClient { patch: form.patch() },
                    navigate(View::Clients),
                ]
            } else {
                vec![]
            }
        }
        KeyCode::Backspace => {
            form.backspace();
            vec![]
        }
        KeyCode::Delete => {
            form.delete_forward();
            vec![]
        }
        KeyCode::Left => {
            form.move_cursor(FieldInput::move_left);
            vec![]
        }
        KeyCode::Right => {
            form.move_cursor(FieldInput::move_right);
            vec![]
        }
        KeyCode::Home => {
            form.move_cursor(FieldInput::move_home);
            vec![]
        }
        KeyCode::End => {
            form.move_cursor(FieldInput::move_end);
            vec![]
        }
        KeyCode::Char(' ') if form.focus == FormFocus::Status => {
            form.toggle_status();
            vec![]
        }
        KeyCode::Char(c) => {
            form.type_char(c);
            vec![]
        }
        _ => vec![],
    }
}

fn handle_details_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Esc => vec![navigate(View::Clients)],
        KeyCode::Enter | KeyCode::Char('e') => vec![Action::Navigate {
            view: View::EditClient,
            client_id: state.selected_id.clone(),
        }],
        KeyCode::Delete => vec![Action::Navigate {
            view: View::DeleteClient,
            client_id: state.selected_id.clone(),
        }],
        _ => vec![],
    }
}

fn handle_delete_dialog_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Enter | KeyCode::Char('s') | KeyCode::Char('S') => {
            match state.selected_id.clone() {
                Some(id) => vec![Action::DeleteClient { id }, navigate(View::Clients)],
                None => vec![navigate(View::Clients)],
            }
        }
        KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => vec![navigate(View::Clients)],
        _ => vec![],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::dashboard::ActionStatus;

    fn state() -> AppState {
        AppState::new(AppConfig::default())
    }

    fn press_mod(state: &mut AppState, code: KeyCode, modifiers: KeyModifiers) -> Vec<Action> {
        handle_event(
            state,
            AppEvent::Terminal(CEvent::Key(KeyEvent::new(code, modifiers))),
        )
    }

    fn press(state: &mut AppState, code: KeyCode) -> Vec<Action> {
        press_mod(state, code, KeyModifiers::NONE)
    }

    /// Presses a key and immediately applies whatever it produced.
    fn press_apply(state: &mut AppState, code: KeyCode) {
        let actions = press(state, code);
        for action in actions {
            apply_action(state, action);
        }
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            press_apply(state, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_ctrl_c_quits_from_any_view() {
        for view in [View::Landing, View::Clients, View::NewClient, View::DeleteClient] {
            let mut state = state();
            state.navigate(view, None);
            let actions = press_mod(&mut state, KeyCode::Char('c'), KeyModifiers::CONTROL);
            assert!(matches!(actions[..], [Action::Quit]));
        }
    }

    #[test]
    fn test_function_keys_navigate_between_views() {
        let mut state = state();
        press_apply(&mut state, KeyCode::F(2));
        assert_eq!(state.view, View::Dashboard);
        press_apply(&mut state, KeyCode::F(3));
        assert_eq!(state.view, View::Clients);
        press_apply(&mut state, KeyCode::F(1));
        assert_eq!(state.view, View::Landing);
    }

    #[test]
    fn test_landing_enter_opens_dashboard() {
        let mut state = state();
        press_apply(&mut state, KeyCode::Enter);
        assert_eq!(state.view, View::Dashboard);
    }

    #[test]
    fn test_landing_scroll_is_clamped() {
        let mut state = state();
        for _ in 0..200 {
            press_apply(&mut state, KeyCode::PageDown);
        }
        assert_eq!(state.landing_scroll, landing::MAX_SCROLL);
        press_apply(&mut state, KeyCode::Home);
        assert_eq!(state.landing_scroll, 0);
    }

    #[test]
    fn test_q_quits_on_landing_but_types_in_search() {
        let mut state = state();
        let actions = press(&mut state, KeyCode::Char('q'));
        assert!(matches!(actions[..], [Action::Quit]));

        let mut state = self::state();
        state.navigate(View::Clients, None);
        let actions = press(&mut state, KeyCode::Char('q'));
        assert!(actions.is_empty());
        assert_eq!(state.search.query, "q");
    }

    #[test]
    fn test_typing_filters_and_resets_selection() {
        let mut state = state();
        state.navigate(View::Clients, None);
        press_apply(&mut state, KeyCode::Down);
        assert_eq!(state.search.selected, 1);

        type_text(&mut state, "mar");
        assert_eq!(state.search.query, "mar");
        assert_eq!(state.search.selected, 0);
        assert_eq!(state.filtered_clients().len(), 1);

        press_apply(&mut state, KeyCode::Esc);
        assert_eq!(state.search.query, "");
        assert_eq!(state.filtered_clients().len(), 5);
    }

    #[test]
    fn test_enter_opens_details_for_selected_row() {
        let mut state = state();
        state.navigate(View::Clients, None);
        type_text(&mut state, "curitiba");
        press_apply(&mut state, KeyCode::Enter);
        assert_eq!(state.view, View::ClientDetails);
        assert_eq!(state.selected_id.as_deref(), Some("4"));
    }

    #[test]
    fn test_enter_on_empty_result_does_nothing() {
        let mut state = state();
        state.navigate(View::Clients, None);
        type_text(&mut state, "xyz");
        let actions = press(&mut state, KeyCode::Enter);
        assert!(actions.is_empty());
        assert_eq!(state.view, View::Clients);
    }

    #[test]
    fn test_ctrl_n_opens_blank_form() {
        let mut state = state();
        state.navigate(View::Clients, None);
        let actions = press_mod(&mut state, KeyCode::Char('n'), KeyModifiers::CONTROL);
        for action in actions {
            apply_action(&mut state, action);
        }
        assert_eq!(state.view, View::NewClient);
        assert!(state.selected_id.is_none());
    }

    #[test]
    fn test_new_client_full_flow() {
        let mut state = state();
        state.navigate(View::NewClient, None);

        type_text(&mut state, "Beatriz Rocha");
        press_apply(&mut state, KeyCode::Tab);
        type_text(&mut state, "bia@email.com");
        press_apply(&mut state, KeyCode::Tab);
        type_text(&mut state, "(11) 91111-2222");
        press_apply(&mut state, KeyCode::Tab);
        type_text(&mut state, "Osasco - SP");

        press_apply(&mut state, KeyCode::Enter);
        assert_eq!(state.view, View::Clients);
        assert_eq!(state.clients.len(), 6);
        assert_eq!(state.clients[5].name, "Beatriz Rocha");
        assert_eq!(state.clients[5].email, "bia@email.com");
        assert!(state.status_message.is_some());
    }

    #[test]
    fn test_submit_with_errors_stays_on_form() {
        let mut state = state();
        state.navigate(View::NewClient, None);
        let actions = press(&mut state, KeyCode::Enter);
        assert!(actions.is_empty());
        assert_eq!(state.view, View::NewClient);
        let errors = state.form.as_ref().map(|f| f.errors.len());
        assert_eq!(errors, Some(4));
        assert_eq!(state.clients.len(), 5);
    }

    #[test]
    fn test_esc_cancels_form_without_saving() {
        let mut state = state();
        state.navigate(View::NewClient, None);
        type_text(&mut state, "Rascunho");
        press_apply(&mut state, KeyCode::Esc);
        assert_eq!(state.view, View::Clients);
        assert!(state.form.is_none());
        assert_eq!(state.clients.len(), 5);
    }

    #[test]
    fn test_edit_flow_updates_record() {
        let mut state = state();
        state.navigate(View::EditClient, Some("1".to_string()));
        // Cursor starts at the end of the prefilled name
        type_text(&mut state, " Filha");
        press_apply(&mut state, KeyCode::Enter);
        assert_eq!(state.view, View::Clients);
        assert_eq!(state.clients.len(), 5);
        assert_eq!(state.clients[0].name, "Maria Silva Santos Filha");
    }

    #[test]
    fn test_space_toggles_status_switch_in_edit() {
        let mut state = state();
        state.navigate(View::EditClient, Some("4".to_string()));
        // Carlos starts inactive; walk focus onto the switch and flip it
        for _ in 0..4 {
            press_apply(&mut state, KeyCode::Tab);
        }
        press_apply(&mut state, KeyCode::Char(' '));
        press_apply(&mut state, KeyCode::Enter);
        assert!(state.clients[3].status.is_active());
    }

    #[test]
    fn test_ctrl_d_opens_delete_dialog_from_edit() {
        let mut state = state();
        state.navigate(View::EditClient, Some("2".to_string()));
        let actions = press_mod(&mut state, KeyCode::Char('d'), KeyModifiers::CONTROL);
        for action in actions {
            apply_action(&mut state, action);
        }
        assert_eq!(state.view, View::DeleteClient);
        assert_eq!(state.selected_id.as_deref(), Some("2"));

        // No record behind the new-client form, so nothing to delete
        let mut state = self::state();
        state.navigate(View::NewClient, None);
        let actions = press_mod(&mut state, KeyCode::Char('d'), KeyModifiers::CONTROL);
        assert!(actions.is_empty());
    }

    #[test]
    fn test_details_enter_switches_to_edit() {
        let mut state = state();
        state.navigate(View::ClientDetails, Some("2".to_string()));
        press_apply(&mut state, KeyCode::Enter);
        assert_eq!(state.view, View::EditClient);
        assert_eq!(state.selected_id.as_deref(), Some("2"));
    }

    #[test]
    fn test_delete_dialog_confirm_removes_client() {
        let mut state = state();
        state.navigate(View::Clients, None);
        press_apply(&mut state, KeyCode::Delete);
        assert_eq!(state.view, View::DeleteClient);
        assert_eq!(state.selected_id.as_deref(), Some("1"));

        press_apply(&mut state, KeyCode::Char('s'));
        assert_eq!(state.view, View::Clients);
        assert_eq!(state.clients.len(), 4);
        assert!(state.clients.iter().all(|c| c.id != "1"));
        assert!(state.selected_id.is_none());
    }

    #[test]
    fn test_delete_dialog_cancel_keeps_client_and_search() {
        let mut state = state();
        state.navigate(View::Clients, None);
        type_text(&mut state, "ana");
        press_apply(&mut state, KeyCode::Delete);
        press_apply(&mut state, KeyCode::Esc);
        assert_eq!(state.view, View::Clients);
        assert_eq!(state.clients.len(), 5);
        assert_eq!(state.search.query, "ana");
    }

    #[test]
    fn test_delete_dialog_swallows_global_keys() {
        let mut state = state();
        state.navigate(View::DeleteClient, Some("1".to_string()));
        let actions = press(&mut state, KeyCode::F(2));
        assert!(actions.is_empty());
        assert_eq!(state.view, View::DeleteClient);
    }

    #[test]
    fn test_dashboard_tab_and_toggle() {
        let mut state = state();
        state.navigate(View::Dashboard, None);
        assert_eq!(state.dashboard.tab, DashboardTab::Diagnostico);

        press_apply(&mut state, KeyCode::Tab);
        assert_eq!(state.dashboard.tab, DashboardTab::PlanoDeAcao);

        press_apply(&mut state, KeyCode::Down);
        press_apply(&mut state, KeyCode::Down);
        press_apply(&mut state, KeyCode::Char(' '));
        assert_eq!(state.dashboard.actions[2].status, ActionStatus::Concluida);
        assert_eq!(state.dashboard.completed_count(), 2);
    }

    #[test]
    fn test_dashboard_arrows_ignored_on_diagnostics_tab() {
        let mut state = state();
        state.navigate(View::Dashboard, None);
        press_apply(&mut state, KeyCode::Down);
        assert_eq!(state.dashboard.selected_action, 0);
        let actions = press(&mut state, KeyCode::Enter);
        assert!(actions.is_empty());
    }

    #[test]
    fn test_tick_expires_status_message() {
        let mut state = state();
        state.config.ui.status_ttl_secs = 0;
        state.set_status("Cliente excluído");
        let actions = handle_event(&mut state, AppEvent::Tick);
        assert!(actions.is_empty());
        assert!(state.status_message.is_none());
    }

    #[test]
    fn test_stale_selection_save_appends() {
        let mut state = state();
        state.navigate(View::EditClient, Some("3".to_string()));
        // Record vanishes while the form is open
        state.delete_client("3");

        press_mod(&mut state, KeyCode::Char('u'), KeyModifiers::CONTROL);
        type_text(&mut state, "Ana Recriada");
        press_apply(&mut state, KeyCode::Enter);
        assert_eq!(state.clients.len(), 5);
        assert_eq!(state.clients[4].name, "Ana Recriada");
    }
}
