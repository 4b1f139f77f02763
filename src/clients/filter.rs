use crate::clients::model::Client;

/// Case-insensitive substring match over name, email and city.
/// An empty query matches everything; insertion order is preserved.
pub fn filter_clients<'a>(clients: &'a [Client], query: &str) -> Vec<&'a Client> {
    let needle = query.to_lowercase();
    clients
        .iter()
        .filter(|c| {
            c.name.to_lowercase().contains(&needle)
                || c.email.to_lowercase().contains(&needle)
                || c.city.to_lowercase().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::model::seed_clients;

    #[test]
    fn test_empty_query_matches_all() {
        let clients = seed_clients();
        let hits = filter_clients(&clients, "");
        assert_eq!(hits.len(), clients.len());
    }

    #[test]
    fn test_matches_by_name() {
        let clients = seed_clients();
        let hits = filter_clients(&clients, "silva");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "1");
    }

    #[test]
    fn test_matches_by_email_and_city() {
        let clients = seed_clients();
        assert_eq!(filter_clients(&clients, "joao.pedro")[0].id, "2");
        assert_eq!(filter_clients(&clients, "curitiba")[0].id, "4");
    }

    #[test]
    fn test_case_insensitive() {
        let clients = seed_clients();
        let upper = filter_clients(&clients, "MARIA");
        let lower = filter_clients(&clients, "maria");
        assert_eq!(upper.len(), lower.len());
        assert_eq!(upper[0].id, lower[0].id);
    }

    #[test]
    fn test_no_match_yields_empty() {
        let clients = seed_clients();
        assert!(filter_clients(&clients, "xyz").is_empty());
    }

    #[test]
    fn test_preserves_insertion_order() {
        let clients = seed_clients();
        // "a" appears in every seed name or email
        let hits = filter_clients(&clients, "a");
        let ids: Vec<_> = hits.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3", "4", "5"]);
    }
}
