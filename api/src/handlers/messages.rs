//! Message catalog in English and Brazilian Portuguese

use lp_core::errors::{AuthError, DomainError, TokenError, UserError};
use lp_shared::Language;

fn localized(language: Language, en: &str, pt: &str) -> String {
    match language {
        Language::English => en.to_string(),
        Language::Portuguese => pt.to_string(),
    }
}

/// Client-facing text for a domain error
///
/// Internal and database errors get a generic text; their details only go
/// to the log.
pub fn error_message(error: &DomainError, language: Language) -> String {
    match error {
        DomainError::Auth(err) => auth_message(err, language),
        DomainError::Token(TokenError::TokenGenerationFailed) => internal_error(language),
        DomainError::Token(_) => auth_message(&AuthError::InvalidToken, language),
        DomainError::User(err) => user_message(err, language),
        DomainError::Validation { message } => match language {
            Language::English => format!("Invalid request: {}", message),
            Language::Portuguese => format!("Requisição inválida: {}", message),
        },
        DomainError::NotFound { .. } => resource_not_found(language),
        DomainError::Internal { .. } | DomainError::Database { .. } => internal_error(language),
    }
}

fn auth_message(error: &AuthError, language: Language) -> String {
    match error {
        AuthError::InvalidCredentials => localized(
            language,
            "Invalid email or password. Please check your details and try again.",
            "E-mail ou senha inválidos. Por favor, verifique seus dados e tente novamente.",
        ),
        AuthError::AccountDeleted => localized(
            language,
            "Your account has been deleted. Please contact support.",
            "Sua conta foi excluída. Por favor, entre em contato com o suporte.",
        ),
        AuthError::AccountDisabled => localized(
            language,
            "Your account is disabled. Please contact support.",
            "Sua conta está desativada. Por favor, entre em contato com o suporte.",
        ),
        AuthError::UserNotFound => user_not_found(language),
        AuthError::InvalidToken => localized(language, "Invalid token.", "Token inválido."),
        AuthError::AccessDenied => localized(language, "Access denied", "Acesso negado"),
        AuthError::OldPasswordIncorrect => localized(
            language,
            "The old password is incorrect. Please try again.",
            "A senha antiga está incorreta. Tente novamente.",
        ),
        AuthError::PasswordSameAsOld => localized(
            language,
            "The new password must be different from the old password. Please choose a new password.",
            "A nova senha deve ser diferente da senha antiga. Por favor, escolha uma nova senha.",
        ),
    }
}

fn user_message(error: &UserError, language: Language) -> String {
    match error {
        UserError::NotFound => user_not_found(language),
        UserError::EmailInUse { email } => match language {
            Language::English => format!("The email is already in use. (Email: {})", email),
            Language::Portuguese => format!("O e-mail já está em uso. (Email: {})", email),
        },
        UserError::DefaultPasswordNotSet => localized(
            language,
            "Environment variable DEFAULT_PASSWORD is not configured.",
            "Variável de ambiente DEFAULT_PASSWORD não configurada.",
        ),
    }
}

fn user_not_found(language: Language) -> String {
    localized(language, "User not found.", "Usuário não encontrado.")
}

pub fn internal_error(language: Language) -> String {
    localized(
        language,
        "An internal error occurred.",
        "Ocorreu um erro interno.",
    )
}

pub fn invalid_request(language: Language) -> String {
    localized(language, "Invalid request.", "Requisição inválida.")
}

pub fn resource_not_found(language: Language) -> String {
    localized(language, "Resource not found.", "Recurso não encontrado.")
}

pub fn password_min_length(language: Language) -> String {
    localized(
        language,
        "The new password must be at least 8 characters long.",
        "A nova senha deve ter no mínimo 8 caracteres.",
    )
}

pub fn password_changed(language: Language) -> String {
    localized(language, "Password changed successfully.", "Senha alterada com sucesso.")
}

pub fn logged_out(language: Language) -> String {
    localized(language, "Logged out successfully.", "Logout realizado com sucesso.")
}

pub fn password_reset(name: &str, language: Language) -> String {
    match language {
        Language::English => format!("The password of user {} was reset successfully", name),
        Language::Portuguese => format!("A senha do usuário {} foi resetada com sucesso", name),
    }
}
