use chrono::{Local, NaiveDate};
use uuid::Uuid;

pub type ClientId = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClientStatus {
    #[default]
    Ativo,
    Inativo,
}

impl ClientStatus {
    pub fn label(self) -> &'static str {
        match self {
            ClientStatus::Ativo => "Ativo",
            ClientStatus::Inativo => "Inativo",
        }
    }

    pub fn is_active(self) -> bool {
        self == ClientStatus::Ativo
    }
}

#[derive(Debug, Clone)]
pub struct Client {
    pub id: ClientId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub status: ClientStatus,
    pub created_at: NaiveDate,
}

/// Field-wise update for a client record. `id` and `created_at` are absent
/// on purpose: they are fixed at creation time.
#[derive(Debug, Clone, Default)]
pub struct ClientPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub city: Option<String>,
    pub status: Option<ClientStatus>,
}

impl Client {
    /// Builds a brand-new record from a patch, minting a v4 UUID and
    /// stamping today's date.
    pub fn create(patch: ClientPatch) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: patch.name.unwrap_or_default(),
            email: patch.email.unwrap_or_default(),
            phone: patch.phone.unwrap_or_default(),
            city: patch.city.unwrap_or_default(),
            status: patch.status.unwrap_or_default(),
            created_at: Local::now().date_naive(),
        }
    }

    pub fn apply(&mut self, patch: ClientPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
        if let Some(city) = patch.city {
            self.city = city;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
    }
}

pub fn seed_clients() -> Vec<Client> {
    vec![
        seed("1", "Maria Silva Santos", "maria.silva@email.com", "(11) 98765-4321", "São Paulo - SP", ClientStatus::Ativo, 2025, 1, 15),
        seed("2", "João Pedro Oliveira", "joao.pedro@email.com", "(21) 99876-5432", "Rio de Janeiro - RJ", ClientStatus::Ativo, 2025, 2, 10),
        seed("3", "Ana Carolina Costa", "ana.costa@email.com", "(31) 97654-3210", "Belo Horizonte - MG", ClientStatus::Ativo, 2025, 3, 5),
        seed("4", "Carlos Eduardo Mendes", "carlos.mendes@email.com", "(41) 96543-2109", "Curitiba - PR", ClientStatus::Inativo, 2025, 1, 20),
        seed("5", "Juliana Almeida", "juliana.almeida@email.com", "(51) 95432-1098", "Porto Alegre - RS", ClientStatus::Ativo, 2025, 2, 28),
    ]
}

fn seed(
    id: &str,
    name: &str,
    email: &str,
    phone: &str,
    city: &str,
    status: ClientStatus,
    year: i32,
    month: u32,
    day: u32,
) -> Client {
    Client {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        city: city.to_string(),
        status,
        created_at: NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patch_all() -> ClientPatch {
        ClientPatch {
            name: Some("Teste".to_string()),
            email: Some("teste@email.com".to_string()),
            phone: Some("(11) 90000-0000".to_string()),
            city: Some("Campinas - SP".to_string()),
            status: Some(ClientStatus::Inativo),
        }
    }

    #[test]
    fn test_create_fills_fields_from_patch() {
        let client = Client::create(patch_all());
        assert_eq!(client.name, "Teste");
        assert_eq!(client.email, "teste@email.com");
        assert_eq!(client.phone, "(11) 90000-0000");
        assert_eq!(client.city, "Campinas - SP");
        assert_eq!(client.status, ClientStatus::Inativo);
        assert_eq!(client.created_at, Local::now().date_naive());
    }

    #[test]
    fn test_create_generates_unique_ids() {
        let a = Client::create(patch_all());
        let b = Client::create(patch_all());
        assert!(!a.id.is_empty());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_create_defaults_to_active() {
        let client = Client::create(ClientPatch::default());
        assert_eq!(client.status, ClientStatus::Ativo);
    }

    #[test]
    fn test_apply_updates_only_populated_fields() {
        let mut client = Client::create(patch_all());
        let id = client.id.clone();
        let created_at = client.created_at;

        client.apply(ClientPatch {
            name: Some("Novo Nome".to_string()),
            ..Default::default()
        });

        assert_eq!(client.name, "Novo Nome");
        assert_eq!(client.email, "teste@email.com");
        assert_eq!(client.status, ClientStatus::Inativo);
        assert_eq!(client.id, id);
        assert_eq!(client.created_at, created_at);
    }

    #[test]
    fn test_seed_clients_are_unique() {
        let seeds = seed_clients();
        assert_eq!(seeds.len(), 5);
        for (i, a) in seeds.iter().enumerate() {
            for b in seeds.iter().skip(i + 1) {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_seed_records_carry_the_demo_dataset() {
        let expected = [
            ("1", "Maria Silva Santos", "maria.silva@email.com", "(11) 98765-4321", "São Paulo - SP", ClientStatus::Ativo, "2025-01-15"),
            ("2", "João Pedro Oliveira", "joao.pedro@email.com", "(21) 99876-5432", "Rio de Janeiro - RJ", ClientStatus::Ativo, "2025-02-10"),
            ("3", "Ana Carolina Costa", "ana.costa@email.com", "(31) 97654-3210", "Belo Horizonte - MG", ClientStatus::Ativo, "2025-03-05"),
            ("4", "Carlos Eduardo Mendes", "carlos.mendes@email.com", "(41) 96543-2109", "Curitiba - PR", ClientStatus::Inativo, "2025-01-20"),
            ("5", "Juliana Almeida", "juliana.almeida@email.com", "(51) 95432-1098", "Porto Alegre - RS", ClientStatus::Ativo, "2025-02-28"),
        ];
        let seeds = seed_clients();
        assert_eq!(seeds.len(), expected.len());
        for (client, (id, name, email, phone, city, status, date)) in seeds.iter().zip(expected) {
            assert_eq!(client.id, id);
            assert_eq!(client.name, name);
            assert_eq!(client.email, email);
            assert_eq!(client.phone, phone);
            assert_eq!(client.city, city);
            assert_eq!(client.status, status);
            assert_eq!(client.created_at.to_string(), date);
        }
    }
}
