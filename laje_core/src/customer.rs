//! Customer records.
//!
//! A customer lives inside the budget files made for them; there is no
//! remote store. The optional fields mirror what the sales desk collects for
//! delivery and invoicing in Brazil.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A customer of the reseller.
///
/// ## JSON Example
///
/// ```json
/// {
///   "id": "b4f9d6a2-3c1e-4b5f-9d7a-8e2f1c0a9b3d",
///   "name": "Maria Souza",
///   "email": "maria@example.com",
///   "phone": "(41) 99999-0000",
///   "cidade": "Curitiba"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    /// Stable identifier
    pub id: Uuid,

    /// Full name
    pub name: String,

    /// Contact e-mail
    pub email: String,

    /// Contact phone
    pub phone: String,

    /// CPF (natural person tax id)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpf: Option<String>,

    /// RG (identity document)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rg: Option<String>,

    /// Delivery address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endereco_entrega: Option<String>,

    /// City
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cidade: Option<String>,

    /// District
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bairro: Option<String>,

    /// Postal code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cep: Option<String>,

    /// Birth date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_nascimento: Option<NaiveDate>,
}

impl Customer {
    /// Create a customer with a fresh id and only the required contact data
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Customer {
            id: Uuid::new_v4(),
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            cpf: None,
            rg: None,
            endereco_entrega: None,
            cidade: None,
            bairro: None,
            cep: None,
            data_nascimento: None,
        }
    }

    /// One-line contact summary for listings and exports
    pub fn contact_line(&self) -> String {
        format!("{} · {} · {}", self.name, self.phone, self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_customer_has_fresh_id() {
        let a = Customer::new("Maria Souza", "maria@example.com", "(41) 99999-0000");
        let b = Customer::new("Maria Souza", "maria@example.com", "(41) 99999-0000");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_optional_fields_stay_out_of_json() {
        let customer = Customer::new("João Lima", "joao@example.com", "(41) 98888-1111");
        let json = serde_json::to_string(&customer).unwrap();
        assert!(!json.contains("cpf"));
        assert!(!json.contains("data_nascimento"));

        let roundtrip: Customer = serde_json::from_str(&json).unwrap();
        assert_eq!(customer, roundtrip);
    }

    #[test]
    fn test_contact_line() {
        let customer = Customer::new("Maria Souza", "maria@example.com", "(41) 99999-0000");
        let line = customer.contact_line();
        assert!(line.contains("Maria Souza"));
        assert!(line.contains("(41) 99999-0000"));
    }
}
