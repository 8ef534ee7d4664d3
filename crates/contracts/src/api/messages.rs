use serde::{Deserialize, Serialize};

/// Confirmation envelope returned by the backend's mutating endpoints
/// (create, update, delete).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiMessage {
    #[serde(rename = "mensagem")]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_wire_name() {
        let msg: ApiMessage = serde_json::from_str(r#"{"mensagem":"Cliente cadastrado"}"#).unwrap();
        assert_eq!(msg.message, "Cliente cadastrado");
    }
}
