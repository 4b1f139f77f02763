use crate::clients::filter::filter_clients;
use crate::clients::form::{ClientForm, FormMode};
use crate::clients::model::{seed_clients, Client, ClientId, ClientPatch};
use crate::config::AppConfig;
use crate::dashboard::DashboardState;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Landing,
    Dashboard,
    Clients,
    NewClient,
    EditClient,
    ClientDetails,
    DeleteClient,
}

impl View {
    /// Which top-menu entry the view belongs to.
    pub fn menu_index(self) -> usize {
        match self {
            View::Landing => 0,
            View::Dashboard => 1,
            _ => 2,
        }
    }
}

/// Search box plus row selection for the client list.
#[derive(Debug, Default)]
pub struct SearchState {
    pub query: String,
    pub selected: usize,
}

impl SearchState {
    pub fn push(&mut self, c: char) {
        self.query.push(c);
        self.selected = 0;
    }

    pub fn pop(&mut self) {
        self.query.pop();
        self.selected = 0;
    }

    pub fn clear(&mut self) {
        self.query.clear();
        self.selected = 0;
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_down(&mut self, total: usize) {
        if self.selected + 1 < total {
            self.selected += 1;
        }
    }
}

#[derive(Debug)]
pub struct StatusMessage {
    pub text: String,
    pub shown_at: Instant,
}

pub struct AppState {
    pub config: AppConfig,
    pub clients: Vec<Client>,
    pub selected_id: Option<ClientId>,
    pub view: View,
    pub search: SearchState,
    pub form: Option<ClientForm>,
    pub dashboard: DashboardState,
    pub landing_scroll: u16,
    pub status_message: Option<StatusMessage>,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let clients = if config.behavior.seed_demo_data {
            seed_clients()
        } else {
            Vec::new()
        };
        Self {
            config,
            clients,
            selected_id: None,
            view: View::Landing,
            search: SearchState::default(),
            form: None,
            dashboard: DashboardState::new(),
            landing_scroll: 0,
            status_message: None,
            should_quit: false,
            dirty: true,
        }
    }

    /// Switches the visible view, replacing the selection and rebuilding
    /// any form draft. Entering a view always starts it from the top.
    pub fn navigate(&mut self, view: View, client_id: Option<ClientId>) {
        self.selected_id = client_id;
        self.form = match view {
            View::NewClient => Some(ClientForm::new_client()),
            View::EditClient => {
                Some(ClientForm::for_client(FormMode::Edit, self.selected_client()))
            }
            View::ClientDetails => {
                Some(ClientForm::for_client(FormMode::Details, self.selected_client()))
            }
            _ => None,
        };
        // Closing the delete dialog drops back onto the list as it was;
        // every other way into the list starts a fresh search.
        if view == View::Clients && self.view != View::DeleteClient {
            self.search = SearchState::default();
        }
        match view {
            View::Landing => self.landing_scroll = 0,
            View::Dashboard => self.dashboard.reset_view(),
            _ => {}
        }
        self.view = view;
        self.dirty = true;
    }

    /// Updates the selected record in place, or appends a new one when
    /// the selection is empty or no longer resolves.
    pub fn save_client(&mut self, patch: ClientPatch) -> ClientId {
        self.dirty = true;
        match self.selected_index() {
            Some(i) => {
                self.clients[i].apply(patch);
                self.clients[i].id.clone()
            }
            None => {
                let client = Client::create(patch);
                let id = client.id.clone();
                self.clients.push(client);
                id
            }
        }
    }

    /// Removes the record with the given id. Unknown ids are a no-op.
    pub fn delete_client(&mut self, id: &str) {
        self.clients.retain(|c| c.id != id);
        if self.selected_id.as_deref() == Some(id) {
            self.selected_id = None;
        }
        let visible = self.filtered_clients().len();
        if self.search.selected >= visible {
            self.search.selected = visible.saturating_sub(1);
        }
        self.dirty = true;
    }

    fn selected_index(&self) -> Option<usize> {
        let id = self.selected_id.as_deref()?;
        self.clients.iter().position(|c| c.id == id)
    }

    pub fn selected_client(&self) -> Option<&Client> {
        self.selected_index().map(|i| &self.clients[i])
    }

    pub fn filtered_clients(&self) -> Vec<&Client> {
        filter_clients(&self.clients, &self.search.query)
    }

    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status_message = Some(StatusMessage {
            text: text.into(),
            shown_at: Instant::now(),
        });
        self.dirty = true;
    }

    pub fn expire_status(&mut self, ttl: Duration) {
        if let Some(msg) = &self.status_message {
            if msg.shown_at.elapsed() >= ttl {
                self.status_message = None;
                self.dirty = true;
            }
        }
    }
}
