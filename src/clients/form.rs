use crate::clients::model::{Client, ClientPatch, ClientStatus};
use chrono::NaiveDate;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    Phone,
    City,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Phone, Field::City];

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Nome Completo",
            Field::Email => "Email",
            Field::Phone => "Telefone",
            Field::City => "Cidade",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Name => "Digite o nome completo",
            Field::Email => "exemplo@email.com",
            Field::Phone => "(00) 00000-0000",
            Field::City => "Cidade - UF",
        }
    }

    pub fn required_message(self) -> &'static str {
        match self {
            Field::Name => "Nome é obrigatório",
            Field::Email => "Email é obrigatório",
            Field::Phone => "Telefone é obrigatório",
            Field::City => "Cidade é obrigatória",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{}", .0.required_message())]
    Required(Field),
    #[error("Email inválido")]
    InvalidEmail,
}

/// Single-line text input with a byte-offset cursor. All cursor moves
/// land on char boundaries.
#[derive(Debug, Clone, Default)]
pub struct FieldInput {
    pub text: String,
    pub cursor: usize,
}

impl FieldInput {
    pub fn with_text(text: &str) -> Self {
        Self {
            text: text.to_string(),
            cursor: text.len(),
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
            self.text.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn delete_word_back(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let mut pos = self.cursor;
        // Skip trailing whitespace
        while pos > 0 && self.text.as_bytes().get(pos - 1) == Some(&b' ') {
            pos -= 1;
        }
        // Skip word characters
        while pos > 0 && self.text.as_bytes().get(pos - 1) != Some(&b' ') {
            pos -= 1;
        }
        self.text.drain(pos..self.cursor);
        self.cursor = pos;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    New,
    Edit,
    Details,
}

impl FormMode {
    pub fn title(self) -> &'static str {
        match self {
            FormMode::New => "Novo Cliente",
            FormMode::Edit => "Editar Cliente",
            FormMode::Details => "Detalhes do Cliente",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            FormMode::New => "Preencha as informações para cadastrar um novo cliente",
            FormMode::Edit => "Atualize as informações do cliente",
            FormMode::Details => "Visualize as informações do cliente",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    Field(Field),
    Status,
}

/// In-progress draft for the new/edit/details screens. Holds raw text
/// per field plus the validation errors from the last failed submit.
#[derive(Debug, Clone)]
pub struct ClientForm {
    pub mode: FormMode,
    pub inputs: [FieldInput; 4],
    pub status_active: bool,
    pub created_at: Option<NaiveDate>,
    pub focus: FormFocus,
    pub errors: BTreeMap<Field, ValidationError>,
}

impl ClientForm {
    pub fn new_client() -> Self {
        Self::for_client(FormMode::New, None)
    }

    pub fn for_client(mode: FormMode, client: Option<&Client>) -> Self {
        let field_text = |f: fn(&Client) -> &str| {
            client.map(|c| FieldInput::with_text(f(c))).unwrap_or_default()
        };
        Self {
            mode,
            inputs: [
                field_text(|c| &c.name),
                field_text(|c| &c.email),
                field_text(|c| &c.phone),
                field_text(|c| &c.city),
            ],
            status_active: client
                .map(|c| c.status.is_active())
                .unwrap_or(mode == FormMode::New),
            created_at: client.map(|c| c.created_at),
            focus: FormFocus::Field(Field::Name),
            errors: BTreeMap::new(),
        }
    }

    pub fn input(&self, field: Field) -> &FieldInput {
        &self.inputs[field.index()]
    }

    pub fn value(&self, field: Field) -> &str {
        &self.inputs[field.index()].text
    }

    pub fn error(&self, field: Field) -> Option<ValidationError> {
        self.errors.get(&field).copied()
    }

    /// Whether the status switch is part of this form. Hidden when
    /// creating: new clients always start active.
    pub fn has_status_switch(&self) -> bool {
        self.mode != FormMode::New
    }

    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            FormFocus::Field(Field::Name) => FormFocus::Field(Field::Email),
            FormFocus::Field(Field::Email) => FormFocus::Field(Field::Phone),
            FormFocus::Field(Field::Phone) => FormFocus::Field(Field::City),
            FormFocus::Field(Field::City) if self.has_status_switch() => FormFocus::Status,
            FormFocus::Field(Field::City) => FormFocus::Field(Field::Name),
            FormFocus::Status => FormFocus::Field(Field::Name),
        };
    }

    pub fn focus_prev(&mut self) {
        self.focus = match self.focus {
            FormFocus::Field(Field::Name) if self.has_status_switch() => FormFocus::Status,
            FormFocus::Field(Field::Name) => FormFocus::Field(Field::City),
            FormFocus::Field(Field::Email) => FormFocus::Field(Field::Name),
            FormFocus::Field(Field::Phone) => FormFocus::Field(Field::Email),
            FormFocus::Field(Field::City) => FormFocus::Field(Field::Phone),
            FormFocus::Status => FormFocus::Field(Field::City),
        };
    }

    pub fn type_char(&mut self, c: char) {
        if let FormFocus::Field(field) = self.focus {
            self.inputs[field.index()].insert_char(c);
            self.errors.remove(&field);
        }
    }

    pub fn backspace(&mut self) {
        if let FormFocus::Field(field) = self.focus {
            self.inputs[field.index()].delete_back();
            self.errors.remove(&field);
        }
    }

    pub fn delete_forward(&mut self) {
        if let FormFocus::Field(field) = self.focus {
            self.inputs[field.index()].delete_forward();
            self.errors.remove(&field);
        }
    }

    pub fn delete_word_back(&mut self) {
        if let FormFocus::Field(field) = self.focus {
            self.inputs[field.index()].delete_word_back();
            self.errors.remove(&field);
        }
    }

    pub fn clear_field(&mut self) {
        if let FormFocus::Field(field) = self.focus {
            self.inputs[field.index()].clear();
            self.errors.remove(&field);
        }
    }

    pub fn move_cursor(&mut self, op: fn(&mut FieldInput)) {
        if let FormFocus::Field(field) = self.focus {
            op(&mut self.inputs[field.index()]);
        }
    }

    pub fn toggle_status(&mut self) {
        self.status_active = !self.status_active;
    }

    /// Runs all field checks at once and stores the failures. Returns
    /// true when the draft is clean.
    pub fn validate(&mut self) -> bool {
        let mut errors = BTreeMap::new();

        for field in [Field::Name, Field::Phone, Field::City] {
            if self.value(field).trim().is_empty() {
                errors.insert(field, ValidationError::Required(field));
            }
        }

        let email = self.value(Field::Email);
        if email.trim().is_empty() {
            errors.insert(Field::Email, ValidationError::Required(Field::Email));
        } else if !is_valid_email(email) {
            errors.insert(Field::Email, ValidationError::InvalidEmail);
        }

        self.errors = errors;
        self.errors.is_empty()
    }

    pub fn patch(&self) -> ClientPatch {
        ClientPatch {
            name: Some(self.value(Field::Name).to_string()),
            email: Some(self.value(Field::Email).to_string()),
            phone: Some(self.value(Field::Phone).to_string()),
            city: Some(self.value(Field::City).to_string()),
            status: Some(if self.status_active {
                ClientStatus::Ativo
            } else {
                ClientStatus::Inativo
            }),
        }
    }
}

/// Accepts `local@domain` where neither part is empty, nothing contains
/// whitespace, and the domain has an interior dot.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}
