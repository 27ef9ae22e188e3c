use crate::domain::a003_team_member::AccessLevel;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Payload of `POST /api/users`. The server stores the member as
/// `name = firstName + " " + lastName`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserDto {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub contact: String,
    pub role: String,
    pub access_level: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateUserResponse {
    pub message: String,
    pub id: u32,
}

/// Validation failure bound to a form field (camelCase field name).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: &str) -> Self {
        Self {
            field,
            message: message.to_string(),
        }
    }
}

impl CreateUserDto {
    /// Checks every field; an empty result means the form can be submitted.
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        let required = [
            ("firstName", &self.first_name),
            ("lastName", &self.last_name),
            ("email", &self.email),
            ("contact", &self.contact),
            ("role", &self.role),
            ("accessLevel", &self.access_level),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                errors.push(FieldError::new(field, "required"));
            }
        }

        if !self.email.trim().is_empty() && !is_valid_email(self.email.trim()) {
            errors.push(FieldError::new("email", "E-mail is not valid"));
        }
        if !self.contact.trim().is_empty() && !is_valid_phone(self.contact.trim()) {
            errors.push(FieldError::new("contact", "Phone number is not valid"));
        }
        if !self.access_level.is_empty() && AccessLevel::parse(&self.access_level).is_none() {
            errors.push(FieldError::new("accessLevel", "Unknown access level"));
        }

        errors
    }

    /// First error message for a field, if any.
    pub fn error_for(errors: &[FieldError], field: &str) -> Option<String> {
        errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.clone())
    }
}

/// `local@domain.tld`: one `@`, no whitespace, a dotted domain without empty labels.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') || !domain.contains('.') {
        return false;
    }
    domain.split('.').all(|label| !label.is_empty())
}

static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\+|00)?(?:[0-9]\s?){6,14}[0-9]$").expect("phone pattern compiles")
});

/// International phone number: optional `+` or `00` prefix followed by 7 to 15
/// digits, single spaces allowed between digits.
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_dto() -> CreateUserDto {
        CreateUserDto {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            contact: "+44 20 7946 0958".to_string(),
            role: "Analyst".to_string(),
            access_level: "Manager".to_string(),
        }
    }

    #[test]
    fn test_valid_dto_has_no_errors() {
        assert!(valid_dto().validate().is_empty());
    }

    #[test]
    fn test_empty_form_reports_every_field() {
        let errors = CreateUserDto::default().validate();
        let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec!["firstName", "lastName", "email", "contact", "role", "accessLevel"]
        );
        assert!(errors.iter().all(|e| e.message == "required"));
    }

    #[test]
    fn test_invalid_email_and_phone() {
        let dto = CreateUserDto {
            email: "ada.example.com".to_string(),
            contact: "12-34".to_string(),
            ..valid_dto()
        };
        let errors = dto.validate();
        assert_eq!(
            CreateUserDto::error_for(&errors, "email").as_deref(),
            Some("E-mail is not valid")
        );
        assert_eq!(
            CreateUserDto::error_for(&errors, "contact").as_deref(),
            Some("Phone number is not valid")
        );
        assert_eq!(CreateUserDto::error_for(&errors, "role"), None);
    }

    #[test]
    fn test_unknown_access_level() {
        let dto = CreateUserDto {
            access_level: "Owner".to_string(),
            ..valid_dto()
        };
        assert_eq!(
            CreateUserDto::error_for(&dto.validate(), "accessLevel").as_deref(),
            Some("Unknown access level")
        );
    }

    #[test]
    fn test_email_rules() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@mail.example.org"));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a@b..co"));
        assert!(!is_valid_email("a@@b.co"));
        assert!(!is_valid_email("a b@c.de"));
    }

    #[test]
    fn test_phone_rules() {
        assert!(is_valid_phone("1234567"));
        assert!(is_valid_phone("+49 30 1234567"));
        assert!(is_valid_phone("0049301234567"));
        assert!(is_valid_phone("00 49 30 1234567"));
        assert!(!is_valid_phone("123456"));
        assert!(!is_valid_phone("1234567890123456"));
        assert!(!is_valid_phone("+49  301234567"));
        assert!(!is_valid_phone("+49-30-1234567"));
        assert!(!is_valid_phone("1234567 "));
        assert!(!is_valid_phone("+"));
        assert!(!is_valid_phone("0049 30\t\t1234567"));
        assert!(is_valid_phone("+44 20 7946 0958"));
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(valid_dto()).unwrap();
        assert_eq!(json["firstName"], "Ada");
        assert_eq!(json["accessLevel"], "Manager");
    }
}
