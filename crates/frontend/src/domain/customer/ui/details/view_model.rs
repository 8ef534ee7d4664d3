use std::collections::HashSet;

use contracts::domain::customer::aggregate::CustomerDraft;
use contracts::domain::customer::validation::{self, Field, FieldStatus};
use leptos::prelude::*;

use crate::domain::customer::api;
use crate::shared::input_mask::mask_national_id;

/// What happens to the form fields after a successful submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostSubmit {
    /// Clear the fields back to an untouched form.
    Reset,
    /// Leave the submitted values in place.
    Keep,
}

/// ViewModel for the customer form.
///
/// Create mode checks the three domain fields and resets after a successful
/// submission; edit mode additionally requires the identifier and keeps the
/// submitted values.
#[derive(Clone, Copy)]
pub struct CustomerFormModel {
    pub form: RwSignal<CustomerDraft>,
    pub busy: RwSignal<bool>,
    pub message: RwSignal<Option<String>>,
    pub error: RwSignal<Option<String>>,
    touched: RwSignal<HashSet<Field>>,
    checked_fields: &'static [Field],
    post_submit: PostSubmit,
}

impl CustomerFormModel {
    pub fn for_create() -> Self {
        Self::new(CustomerDraft::CREATE_FIELDS, PostSubmit::Reset)
    }

    pub fn for_edit() -> Self {
        Self::new(CustomerDraft::UPDATE_FIELDS, PostSubmit::Keep)
    }

    fn new(checked_fields: &'static [Field], post_submit: PostSubmit) -> Self {
        Self {
            form: RwSignal::new(CustomerDraft::default()),
            busy: RwSignal::new(false),
            message: RwSignal::new(None),
            error: RwSignal::new(None),
            touched: RwSignal::new(HashSet::new()),
            checked_fields,
            post_submit,
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.checked_fields.contains(&Field::Identifier)
    }

    /// Load form data from the server when editing an existing record.
    /// On failure the form's current contents stay as they are.
    pub fn load_if_needed(&self, id: Option<i64>) {
        let Some(existing_id) = id else {
            return;
        };

        let this = *self;
        leptos::task::spawn_local(async move {
            match api::fetch_customer(existing_id).await {
                Ok(record) => this.form.set(CustomerDraft::from_record(&record)),
                Err(e) => {
                    log::error!("failed to fetch customer {existing_id}: {e}");
                    this.error.set(Some(e.to_string()));
                }
            }
        });
    }

    pub fn set_name(&self, value: String) {
        self.form.update(|f| f.name = value);
        self.mark_touched(Field::Name);
    }

    pub fn set_email(&self, value: String) {
        self.form.update(|f| f.email = value);
        self.mark_touched(Field::Email);
    }

    /// The national-ID input is masked: punctuation is dropped and the value
    /// is capped at the CPF length.
    pub fn set_national_id(&self, value: String) {
        let masked = mask_national_id(&value);
        self.form.update(|f| f.national_id = masked);
        self.mark_touched(Field::NationalId);
    }

    /// Validity of one field as the form should display it.
    pub fn field_status(&self, field: Field) -> FieldStatus {
        if !self.touched.get().contains(&field) {
            return FieldStatus::Untouched;
        }
        match validation::check_field(&self.form.get(), field) {
            Ok(()) => FieldStatus::Valid,
            Err(reasons) => FieldStatus::Invalid(reasons),
        }
    }

    /// Aggregate validity over the fields this mode checks.
    pub fn is_form_valid(&self) -> bool {
        validation::validate_fields(&self.form.get(), self.checked_fields).is_ok()
    }

    /// Submit the draft.
    ///
    /// An invalid draft is rejected locally, marking every checked field
    /// touched so its messages surface. Re-activation while a request is in
    /// flight is ignored. On success the server confirmation is stored, the
    /// configured post-submit behavior is applied and `on_saved` runs; on
    /// failure the fields and message stay as they were.
    pub fn submit(&self, on_saved: Callback<()>) {
        if self.busy.get_untracked() {
            return;
        }
        if !self.is_form_valid() {
            self.touch_all();
            return;
        }

        self.message.set(None);
        self.busy.set(true);

        let this = *self;
        leptos::task::spawn_local(async move {
            let draft = this.form.get_untracked();
            let sent = if draft.is_update() {
                api::update_customer(&draft).await
            } else {
                api::create_customer(&draft).await
            };
            match sent {
                Ok(confirmation) => {
                    this.message.set(Some(confirmation.message));
                    if this.post_submit == PostSubmit::Reset {
                        this.reset();
                    }
                    this.busy.set(false);
                    on_saved.run(());
                }
                Err(e) => {
                    log::error!("failed to save customer: {e}");
                    this.busy.set(false);
                }
            }
        });
    }

    /// Back to an empty, untouched form.
    pub fn reset(&self) {
        self.form.set(CustomerDraft::default());
        self.touched.set(HashSet::new());
    }

    fn mark_touched(&self, field: Field) {
        self.touched.update(|touched| {
            touched.insert(field);
        });
    }

    fn touch_all(&self) {
        self.touched.update(|touched| {
            touched.extend(self.checked_fields.iter().copied());
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::customer::validation::ValidationError;

    #[test]
    fn test_modes() {
        assert!(!CustomerFormModel::for_create().is_edit_mode());
        assert!(CustomerFormModel::for_edit().is_edit_mode());
    }

    #[test]
    fn test_untouched_fields_report_no_messages() {
        let vm = CustomerFormModel::for_create();
        assert_eq!(vm.field_status(Field::Name), FieldStatus::Untouched);
    }

    #[test]
    fn test_short_name_flags_the_field() {
        let vm = CustomerFormModel::for_create();
        vm.set_name("Short".into());
        assert_eq!(
            vm.field_status(Field::Name),
            FieldStatus::Invalid(vec![ValidationError::TooShort { min: 8, actual: 5 }])
        );
        assert!(!vm.is_form_valid());
    }

    #[test]
    fn test_national_id_input_is_masked() {
        let vm = CustomerFormModel::for_create();
        vm.set_national_id("123.456.789-01".into());
        assert_eq!(vm.form.get_untracked().national_id, "12345678901");
        assert!(vm.field_status(Field::NationalId).is_valid());
    }

    #[test]
    fn test_valid_create_draft_passes_the_gate() {
        let vm = CustomerFormModel::for_create();
        vm.set_name("Ana Souza".into());
        vm.set_email("a@x.com".into());
        vm.set_national_id("12345678901".into());
        assert!(vm.is_form_valid());
    }

    #[test]
    fn test_edit_mode_requires_identifier() {
        let vm = CustomerFormModel::for_edit();
        vm.set_name("Ana Souza".into());
        vm.set_email("a@x.com".into());
        vm.set_national_id("12345678901".into());
        assert!(!vm.is_form_valid());

        vm.form.update(|f| f.id = Some(7));
        assert!(vm.is_form_valid());
    }

    #[test]
    fn test_reset_clears_values_and_touched_state() {
        let vm = CustomerFormModel::for_create();
        vm.set_name("Ana Souza".into());
        vm.reset();
        assert_eq!(vm.form.get_untracked(), CustomerDraft::default());
        assert_eq!(vm.field_status(Field::Name), FieldStatus::Untouched);
    }
}
