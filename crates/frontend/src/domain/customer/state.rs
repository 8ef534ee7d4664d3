//! Shared view state for the customers page.

use contracts::domain::customer::aggregate::Customer;
use leptos::prelude::*;

use crate::domain::customer::api;
use crate::shared::list_utils::{filter_list, Searchable};

/// Rows shown per page in the customers grid.
pub const PAGE_SIZE: usize = 10;

/// Single owner of the displayed customer list, the active page number and
/// the name filter. Provided via context; every mutation goes through the
/// named methods below.
#[derive(Clone, Copy)]
pub struct CustomersViewState {
    pub customers: RwSignal<Vec<Customer>>,
    pub page: RwSignal<usize>,
    pub name_filter: RwSignal<String>,
}

impl CustomersViewState {
    pub fn new() -> Self {
        Self {
            customers: RwSignal::new(Vec::new()),
            page: RwSignal::new(1),
            name_filter: RwSignal::new(String::new()),
        }
    }

    /// Replace the whole list after a successful fetch.
    pub fn replace_customers(&self, customers: Vec<Customer>) {
        self.customers.set(customers);
    }

    /// Pagination bridge: adopt the page the controls asked for.
    pub fn set_page(&self, page: usize) {
        self.page.set(page);
    }

    /// Update the name filter. A new filter restarts from the first page.
    pub fn set_name_filter(&self, filter: String) {
        self.name_filter.set(filter);
        self.page.set(1);
    }

    /// Customers whose name matches the current filter.
    pub fn filtered(&self) -> Vec<Customer> {
        filter_list(self.customers.get(), &self.name_filter.get())
    }

    /// Re-fetch the collection and replace the list. A failure is logged and
    /// leaves the previous list in place.
    pub fn load(&self) {
        let this = *self;
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_customers().await {
                Ok(customers) => this.replace_customers(customers),
                Err(e) => log::error!("failed to load customers: {e}"),
            }
        });
    }
}

impl Searchable for Customer {
    fn matches_filter(&self, filter: &str) -> bool {
        self.name
            .to_lowercase()
            .contains(&filter.trim().to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer(id: i64, name: &str) -> Customer {
        Customer {
            id,
            name: name.into(),
            email: format!("c{id}@x.com"),
            national_id: "12345678901".into(),
        }
    }

    #[test]
    fn test_name_filter_is_case_insensitive() {
        assert!(customer(1, "Ana Souza").matches_filter("SOUZA"));
        assert!(customer(1, "Ana Souza").matches_filter("ana s"));
        assert!(!customer(1, "Ana Souza").matches_filter("Oliveira"));
    }

    #[test]
    fn test_filtered_list() {
        let customers = vec![customer(1, "Ana Souza"), customer(2, "Bruno Oliveira")];
        let kept = filter_list(customers, "oliveira");
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, 2);
    }

    #[test]
    fn test_page_change_adopts_exactly_the_requested_page() {
        let state = CustomersViewState::new();
        assert_eq!(state.page.get_untracked(), 1);
        for page in [3, 1, 97] {
            state.set_page(page);
            assert_eq!(state.page.get_untracked(), page);
        }
    }

    #[test]
    fn test_new_filter_restarts_from_first_page() {
        let state = CustomersViewState::new();
        state.set_page(4);
        state.set_name_filter("souza".into());
        assert_eq!(state.page.get_untracked(), 1);
        assert_eq!(state.name_filter.get_untracked(), "souza");
    }

    #[test]
    fn test_list_is_replaced_wholesale() {
        let state = CustomersViewState::new();
        state.replace_customers(vec![customer(1, "Ana Souza"), customer(2, "Bruno Oliveira")]);
        state.replace_customers(vec![customer(3, "Carla Mendes")]);
        let ids: Vec<i64> = state
            .customers
            .get_untracked()
            .iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, vec![3]);
    }
}
