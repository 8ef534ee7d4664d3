use crate::domain::customer::state::CustomersViewState;
use crate::domain::customer::ui::list::CustomerList;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the shared view state to the whole app via context.
    provide_context(CustomersViewState::new());

    view! {
        <CustomerList />
    }
}
