use serde::{Deserialize, Serialize};

use crate::domain::customer::validation::Field;

// ============================================================================
// Record
// ============================================================================

/// Customer record as served by the backend.
///
/// The identifier is assigned by the server; the client never creates or
/// mutates one. Wire names are the backend's: `nome`, `cpf`, and `id` or
/// `idCliente` for the identifier depending on the endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(alias = "idCliente")]
    pub id: i64,

    #[serde(rename = "nome")]
    pub name: String,

    pub email: String,

    #[serde(rename = "cpf")]
    pub national_id: String,
}

// ============================================================================
// Form draft
// ============================================================================

/// Mutable form payload sent on create and update requests.
///
/// The domain fields hold the raw input strings; `id` is set only when an
/// existing record has been loaded into the form and travels on the wire as
/// `idCliente`. A draft without an id serializes to the create body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerDraft {
    #[serde(
        rename = "idCliente",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<i64>,

    #[serde(rename = "nome")]
    pub name: String,

    pub email: String,

    #[serde(rename = "cpf")]
    pub national_id: String,
}

impl CustomerDraft {
    /// Fields a create submission is checked against.
    pub const CREATE_FIELDS: &'static [Field] = &[Field::Name, Field::Email, Field::NationalId];

    /// Fields an update submission is checked against.
    pub const UPDATE_FIELDS: &'static [Field] = &[
        Field::Identifier,
        Field::Name,
        Field::Email,
        Field::NationalId,
    ];

    /// Copy a fetched record into the form.
    pub fn from_record(record: &Customer) -> Self {
        Self {
            id: Some(record.id),
            name: record.name.clone(),
            email: record.email.clone(),
            national_id: record.national_id.clone(),
        }
    }

    /// Whether submitting this draft updates an existing record.
    pub fn is_update(&self) -> bool {
        self.id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_list_payload() {
        let payload = r#"[{"id":1,"nome":"Ana Souza","email":"a@x.com","cpf":"12345678901"}]"#;
        let customers: Vec<Customer> = serde_json::from_str(payload).unwrap();
        assert_eq!(customers.len(), 1);
        assert_eq!(customers[0].id, 1);
        assert_eq!(customers[0].name, "Ana Souza");
        assert_eq!(customers[0].email, "a@x.com");
        assert_eq!(customers[0].national_id, "12345678901");
    }

    #[test]
    fn test_decodes_single_record_with_id_cliente_key() {
        let payload = r#"{"idCliente":7,"nome":"Bruno Oliveira","email":"b@x.com","cpf":"98765432100"}"#;
        let customer: Customer = serde_json::from_str(payload).unwrap();
        assert_eq!(customer.id, 7);
        assert_eq!(customer.name, "Bruno Oliveira");
    }

    #[test]
    fn test_create_body_has_no_identifier() {
        let draft = CustomerDraft {
            id: None,
            name: "Ana Souza".into(),
            email: "a@x.com".into(),
            national_id: "12345678901".into(),
        };
        let body: serde_json::Value = serde_json::to_value(&draft).unwrap();
        assert!(body.get("idCliente").is_none());
        assert_eq!(body["nome"], "Ana Souza");
        assert_eq!(body["cpf"], "12345678901");
    }

    #[test]
    fn test_update_body_carries_id_cliente() {
        let draft = CustomerDraft {
            id: Some(7),
            name: "Ana Souza".into(),
            email: "a@x.com".into(),
            national_id: "12345678901".into(),
        };
        let body: serde_json::Value = serde_json::to_value(&draft).unwrap();
        assert_eq!(body["idCliente"], 7);
    }

    #[test]
    fn test_from_record_keeps_identifier() {
        let record = Customer {
            id: 42,
            name: "Carla Mendes".into(),
            email: "c@x.com".into(),
            national_id: "11122233344".into(),
        };
        let draft = CustomerDraft::from_record(&record);
        assert_eq!(draft.id, Some(42));
        assert!(draft.is_update());
        assert_eq!(draft.name, record.name);
    }
}
