use lazy_static::lazy_static;
use regex::Regex;

/// A field of the contact form, for inline error placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Phone,
    Message,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Nome",
            Field::Email => "Email",
            Field::Phone => "Telefone",
            Field::Message => "Mensagem",
        }
    }
}

/// One recoverable validation failure, tied to its field so the form
/// can mark every offending input at once.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: &'static str,
}

/// Contact form contents. There is no backend; `submit` simulates the
/// send and always goes through once validation passes.
#[derive(Builder, Clone, Debug)]
#[builder(setter(into))]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactMessage {
    pub fn validate(&self) -> Vec<FieldError> {
        lazy_static! {
            static ref EMAIL_REGEX: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
        }

        let mut errors = Vec::new();
        if self.name.trim().is_empty() {
            errors.push(FieldError {
                field: Field::Name,
                message: "Nome é obrigatório",
            });
        }
        if self.email.trim().is_empty() {
            errors.push(FieldError {
                field: Field::Email,
                message: "Email é obrigatório",
            });
        } else if !EMAIL_REGEX.is_match(&self.email) {
            errors.push(FieldError {
                field: Field::Email,
                message: "Email inválido",
            });
        }
        if self.phone.trim().is_empty() {
            errors.push(FieldError {
                field: Field::Phone,
                message: "Telefone é obrigatório",
            });
        }
        if self.message.trim().is_empty() {
            errors.push(FieldError {
                field: Field::Message,
                message: "Mensagem é obrigatória",
            });
        }
        errors
    }

    pub fn submit(&self) -> std::result::Result<(), Vec<FieldError>> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
