/// Password policy for system users
///
/// Length is counted in characters, not bytes.
pub struct PasswordValidator {
    min_length: usize,
    max_length: usize,
}

impl PasswordValidator {
    /// Validator configured with the 6-128 character policy
    pub fn new() -> Self {
        Self {
            min_length: 6,
            max_length: 128,
        }
    }

    pub fn validate(&self, password: &str) -> Result<(), PasswordValidationError> {
        let length = password.chars().count();
        if length < self.min_length {
            return Err(PasswordValidationError::TooShort(self.min_length));
        }
        if length > self.max_length {
            return Err(PasswordValidationError::TooLong(self.max_length));
        }

        Ok(())
    }
}

impl Default for PasswordValidator {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors that can occur during password validation
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum PasswordValidationError {
    #[error("La contraseña debe tener al menos {0} caracteres")]
    TooShort(usize),

    #[error("La contraseña no puede superar {0} caracteres")]
    TooLong(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_too_short() {
        assert_eq!(
            PasswordValidator::new().validate("abc12"),
            Err(PasswordValidationError::TooShort(6))
        );
    }

    #[test]
    fn test_password_too_long() {
        assert_eq!(
            PasswordValidator::new().validate(&"a".repeat(129)),
            Err(PasswordValidationError::TooLong(128))
        );
    }

    #[test]
    fn test_length_counts_characters() {
        assert!(PasswordValidator::new().validate("ñandú1").is_ok());
    }
}
