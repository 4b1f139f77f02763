use crate::app::state::View;
use crate::clients::model::{ClientId, ClientPatch};

/// State transitions requested by the key handlers. Applied in order by
/// the main loop, which also owns the resulting status messages.
#[derive(Debug)]
pub enum Action {
    Navigate { view: View, client_id: Option<ClientId> },
    SaveClient { patch: ClientPatch },
    DeleteClient { id: ClientId },
    ToggleAction { index: usize },
    Quit,
}
