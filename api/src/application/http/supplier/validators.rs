use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateSupplierValidator {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[validate(length(min = 1, message = "phone_no is required"))]
    pub phone_no: String,

    #[serde(default)]
    #[validate(email(message = "email is invalid"))]
    pub email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_and_phone_are_required() {
        let validator = CreateSupplierValidator {
            name: "".to_string(),
            phone_no: "".to_string(),
            email: None,
        };

        let errors = validator.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
        assert!(errors.field_errors().contains_key("phone_no"));
    }

    #[test]
    fn email_is_optional_but_checked_when_present() {
        let missing: CreateSupplierValidator = serde_json::from_value(serde_json::json!({
            "name": "Acme",
            "phone_no": "0712345678"
        }))
        .unwrap();
        assert!(missing.validate().is_ok());

        let invalid = CreateSupplierValidator {
            name: "Acme".to_string(),
            phone_no: "0712345678".to_string(),
            email: Some("not-an-email".to_string()),
        };
        assert!(invalid.validate().is_err());
    }
}
