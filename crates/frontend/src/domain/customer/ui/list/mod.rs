use leptos::prelude::*;

use crate::domain::customer::api;
use crate::domain::customer::state::{CustomersViewState, PAGE_SIZE};
use crate::domain::customer::ui::details::CustomerDetails;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::icons::icon;
use crate::shared::list_utils::{page_count, page_slice};

/// Which record the details panel is working on. `None` means the panel is
/// closed, `Some(None)` a new customer, `Some(Some(id))` an existing one.
type DetailsTarget = Option<Option<i64>>;

#[component]
#[allow(non_snake_case)]
pub fn CustomerList() -> impl IntoView {
    let state =
        use_context::<CustomersViewState>().expect("CustomersViewState not found in context");
    let (details, set_details) = signal::<DetailsTarget>(None);
    let (deleting, set_deleting) = signal(false);

    // First load when the page opens.
    state.load();

    let total_count = move || state.filtered().len();
    let total_pages = move || page_count(total_count(), PAGE_SIZE);
    let visible = move || page_slice(&state.filtered(), state.page.get(), PAGE_SIZE);

    let handle_delete = move |id: i64| {
        if deleting.get_untracked() {
            return;
        }
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message("Really delete this customer?")
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        set_deleting.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::delete_customer(id).await {
                Ok(confirmation) => {
                    if let Some(w) = web_sys::window() {
                        let _ = w.alert_with_message(&confirmation.message);
                    }
                    state.load();
                }
                Err(e) => log::error!("failed to delete customer {id}: {e}"),
            }
            set_deleting.set(false);
        });
    };

    view! {
        <div class="content">
            <div class="header">
                <h2>
                    {icon("customers")}
                    {"Customers"}
                </h2>
                <div class="header__actions">
                    <button
                        class="button button--primary"
                        on:click=move |_| set_details.set(Some(None))
                    >
                        {icon("plus")}
                        {"New customer"}
                    </button>
                    <button class="button button--secondary" on:click=move |_| state.load()>
                        {icon("refresh")}
                        {"Refresh"}
                    </button>
                </div>
            </div>

            <div class="filter-bar">
                <input
                    type="search"
                    class="filter-input"
                    placeholder="Filter by name"
                    prop:value=move || state.name_filter.get()
                    on:input=move |ev| state.set_name_filter(event_target_value(&ev))
                />
            </div>

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">{"Id"}</th>
                            <th class="table__header-cell">{"Name"}</th>
                            <th class="table__header-cell">{"E-mail"}</th>
                            <th class="table__header-cell">{"CPF"}</th>
                            <th class="table__header-cell">{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || visible().into_iter().map(|customer| {
                            let id = customer.id;
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{customer.id}</td>
                                    <td class="table__cell">{customer.name.clone()}</td>
                                    <td class="table__cell">{customer.email.clone()}</td>
                                    <td class="table__cell">{customer.national_id.clone()}</td>
                                    <td class="table__cell table__cell--actions">
                                        <button
                                            class="button button--icon"
                                            title="Edit"
                                            on:click=move |_| set_details.set(Some(Some(id)))
                                        >
                                            {icon("edit")}
                                        </button>
                                        <button
                                            class="button button--icon"
                                            title="Delete"
                                            on:click=move |_| handle_delete(id)
                                        >
                                            {icon("delete")}
                                        </button>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>

            <PaginationControls
                current_page=Signal::derive(move || state.page.get())
                total_pages=Signal::derive(total_pages)
                total_count=Signal::derive(total_count)
                on_page_change=Callback::new(move |page| state.set_page(page))
            />

            {move || details.get().map(|target| view! {
                <CustomerDetails
                    id=target
                    on_saved=Callback::new(move |_| state.load())
                    on_close=Callback::new(move |_| set_details.set(None))
                />
            })}
        </div>
    }
}
