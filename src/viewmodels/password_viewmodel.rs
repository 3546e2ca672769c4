use crate::utils::constants::MIN_PASSWORD_LEN;
use crate::viewmodels::validation::ValidationError;

pub const PASSWORD_CHANGED: &str =
    "Contraseña actualizada correctamente. Vuelve a iniciar sesión con la nueva contraseña.";
pub const PASSWORD_CHANGE_FAILED: &str = "Error al cambiar la contraseña";

pub fn validate_password_change(new_password: &str, confirm_password: &str) -> Result<(), ValidationError> {
    if new_password.is_empty() || confirm_password.is_empty() {
        return Err(ValidationError::MissingFields);
    }
    if new_password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort(MIN_PASSWORD_LEN));
    }
    if new_password != confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rules_in_order() {
        assert_eq!(validate_password_change("", ""), Err(ValidationError::MissingFields));
        assert_eq!(
            validate_password_change("corta", "corta"),
            Err(ValidationError::PasswordTooShort(8))
        );
        assert_eq!(
            validate_password_change("suficiente1", "suficiente2"),
            Err(ValidationError::PasswordMismatch)
        );
        assert!(validate_password_change("suficiente", "suficiente").is_ok());
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // 7 caracteres, más de 8 bytes
        assert!(validate_password_change("ñññññññ", "ñññññññ").is_err());
        assert!(validate_password_change("ññññññññ", "ññññññññ").is_ok());
    }
}
