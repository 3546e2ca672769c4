use thiserror::Error;

/// Errores de validación de formularios (se muestran en línea tal cual)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Por favor, completa todos los campos")]
    MissingFields,
    #[error("El campo {0} es obligatorio")]
    Required(&'static str),
    #[error("La contraseña debe tener al menos {0} caracteres")]
    PasswordTooShort(usize),
    #[error("Las contraseñas no coinciden")]
    PasswordMismatch,
    #[error("Los emails no coinciden")]
    EmailMismatch,
    #[error("El email no es válido")]
    InvalidEmail,
    #[error("Fecha no válida: {0}")]
    InvalidDate(&'static str),
    #[error("La fecha de fin no puede ser anterior a la fecha de inicio")]
    EndBeforeStart,
    #[error("El aforo debe ser un número entero positivo")]
    InvalidCapacity,
    #[error("{0}")]
    TicketNotNominable(String),
    #[error("El código UID de la pulsera es obligatorio.")]
    BraceletUidRequired,
    #[error("Todos los campos obligatorios deben ser rellenados.")]
    TicketTypeIncomplete,
    #[error("El precio debe ser un número positivo o cero.")]
    InvalidPrice,
    #[error("El stock debe ser un número entero positivo o cero.")]
    InvalidStock,
}
