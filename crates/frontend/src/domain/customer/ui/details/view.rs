use contracts::domain::customer::validation::{Field, FieldStatus};
use leptos::prelude::*;

use super::view_model::CustomerFormModel;
use crate::shared::icons::icon;

#[component]
pub fn CustomerDetails(
    id: Option<i64>,
    on_saved: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let vm = if id.is_some() {
        CustomerFormModel::for_edit()
    } else {
        CustomerFormModel::for_create()
    };
    vm.load_if_needed(id);

    let title = if vm.is_edit_mode() {
        "Edit customer"
    } else {
        "New customer"
    };

    view! {
        <div class="details-container customer-details">
            <div class="details-header">
                <h3>{title}</h3>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}
            {move || vm.message.get().map(|m| view! { <div class="message">{m}</div> })}

            <div class="details-form">
                {vm.is_edit_mode().then(|| view! {
                    <div class="form-group">
                        <label for="customer-id">{"Identifier"}</label>
                        <input
                            type="text"
                            id="customer-id"
                            prop:value=move || {
                                vm.form.get().id.map(|v| v.to_string()).unwrap_or_default()
                            }
                            disabled=true
                        />
                    </div>
                })}

                <div class="form-group">
                    <label for="customer-name">{"Name"}</label>
                    <input
                        type="text"
                        id="customer-name"
                        class:input--invalid=move || {
                            matches!(vm.field_status(Field::Name), FieldStatus::Invalid(_))
                        }
                        prop:value=move || vm.form.get().name
                        on:input=move |ev| vm.set_name(event_target_value(&ev))
                        placeholder="Full customer name"
                    />
                    {field_messages(vm, Field::Name)}
                </div>

                <div class="form-group">
                    <label for="customer-email">{"E-mail"}</label>
                    <input
                        type="text"
                        id="customer-email"
                        class:input--invalid=move || {
                            matches!(vm.field_status(Field::Email), FieldStatus::Invalid(_))
                        }
                        prop:value=move || vm.form.get().email
                        on:input=move |ev| vm.set_email(event_target_value(&ev))
                        placeholder="name@example.com"
                    />
                    {field_messages(vm, Field::Email)}
                </div>

                <div class="form-group">
                    <label for="customer-cpf">{"CPF"}</label>
                    <input
                        type="text"
                        id="customer-cpf"
                        inputmode="numeric"
                        maxlength="11"
                        class:input--invalid=move || {
                            matches!(vm.field_status(Field::NationalId), FieldStatus::Invalid(_))
                        }
                        prop:value=move || vm.form.get().national_id
                        on:input=move |ev| vm.set_national_id(event_target_value(&ev))
                        placeholder="11 digits"
                    />
                    {field_messages(vm, Field::NationalId)}
                </div>
            </div>

            <div class="details-actions">
                <button
                    class="button button--primary"
                    on:click=move |_| vm.submit(on_saved)
                    disabled=move || !vm.is_form_valid() || vm.busy.get()
                >
                    {icon("save")}
                    {if vm.is_edit_mode() { "Save" } else { "Create" }}
                </button>
                <button class="button button--secondary" on:click=move |_| on_close.run(())>
                    {icon("cancel")}
                    {"Close"}
                </button>
            </div>
        </div>
    }
}

/// Rejection reasons shown under a field once the user has touched it.
fn field_messages(vm: CustomerFormModel, field: Field) -> impl Fn() -> AnyView {
    move || match vm.field_status(field) {
        FieldStatus::Invalid(reasons) => view! {
            <div class="field-errors">
                {reasons
                    .iter()
                    .map(|reason| view! { <span class="field-error">{reason.to_string()}</span> })
                    .collect_view()}
            </div>
        }
        .into_any(),
        _ => view! { <></> }.into_any(),
    }
}
