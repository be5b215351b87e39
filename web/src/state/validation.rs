/// Returns an error message for a blank required field.
pub fn require(value: &str, field: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{} is required", field))
    } else {
        Ok(())
    }
}

pub fn validate_email(email: &str) -> Result<(), String> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Email is required".to_string());
    }

    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && !email.contains(char::is_whitespace)
                && domain.contains('.')
                && domain.split('.').all(|label| !label.is_empty())
        }
        None => false,
    };

    if valid {
        Ok(())
    } else {
        Err("Please enter a valid email address".to_string())
    }
}

/// Phone numbers are optional; when given they need at least ten digits.
pub fn validate_phone(phone: &str) -> Result<(), String> {
    let phone = phone.trim();
    if phone.is_empty() {
        return Ok(());
    }

    let digits = phone.chars().filter(|c| c.is_ascii_digit()).count();
    let allowed = phone
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '(' | ')' | '+' | '.'));

    if allowed && digits >= 10 {
        Ok(())
    } else {
        Err("Please enter a valid phone number".to_string())
    }
}

/// Turns a form field into `None` when it was left blank.
pub fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email() {
        assert!(validate_email("alex@example.com").is_ok());
        assert!(validate_email("  alex@mail.example.co  ").is_ok());
        assert_eq!(validate_email(""), Err("Email is required".to_string()));
        assert!(validate_email("alex").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("alex@example").is_err());
        assert!(validate_email("alex@.com").is_err());
        assert!(validate_email("a lex@example.com").is_err());
        assert!(validate_email("alex@@example.com").is_err());
        assert!(validate_email("alex@example..com").is_err());
        assert!(validate_email("alex@example.com.").is_err());
    }

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("").is_ok());
        assert!(validate_phone("(555) 123-4567").is_ok());
        assert!(validate_phone("+1 555 123 4567").is_ok());
        assert!(validate_phone("555-1234").is_err());
        assert!(validate_phone("call me maybe").is_err());
    }

    #[test]
    fn test_require_and_non_blank() {
        assert_eq!(require("  ", "Name"), Err("Name is required".to_string()));
        assert!(require("Alex", "Name").is_ok());
        assert_eq!(non_blank("   "), None);
        assert_eq!(non_blank(" forearm "), Some("forearm".to_string()));
    }
}
