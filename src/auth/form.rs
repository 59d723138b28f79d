//! Entry-page form handling: field validation before the session store is
//! called, and the user-facing messages the entry page shows.

use log::debug;

use crate::auth::session::SessionStore;
use crate::storage::KeyValueStore;

/// Messages shown under the entry form. Never a structured code; the text is
/// what the seller reads.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthFormError {
    #[error("Por favor, preencha todos os campos")]
    MissingFields,

    #[error("Por favor, preencha seu nome")]
    MissingName,

    #[error("As senhas não coincidem")]
    PasswordMismatch,

    #[error("Erro no login. Tente novamente.")]
    LoginFailed,

    #[error("Erro ao criar conta. Tente novamente.")]
    RegistrationFailed,

    #[error("Erro inesperado. Tente novamente.")]
    Unexpected,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthForm {
    Login {
        email: String,
        password: String,
    },
    Register {
        name: String,
        email: String,
        password: String,
        confirm_password: String,
    },
}

/// Toast shown after a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthNotice {
    pub title: &'static str,
    pub description: &'static str,
}

impl AuthForm {
    /// Local checks, in the order the entry page runs them.
    pub fn validate(&self) -> Result<(), AuthFormError> {
        match self {
            AuthForm::Login { email, password } => {
                if email.is_empty() || password.is_empty() {
                    return Err(AuthFormError::MissingFields);
                }
            }
            AuthForm::Register {
                name,
                email,
                password,
                confirm_password,
            } => {
                if email.is_empty() || password.is_empty() {
                    return Err(AuthFormError::MissingFields);
                }
                if name.is_empty() {
                    return Err(AuthFormError::MissingName);
                }
                if password != confirm_password {
                    return Err(AuthFormError::PasswordMismatch);
                }
            }
        }
        Ok(())
    }

    fn notice(&self) -> AuthNotice {
        match self {
            AuthForm::Login { .. } => AuthNotice {
                title: "Login realizado!",
                description: "Bem-vindo de volta ao BRIDGE Solutions",
            },
            AuthForm::Register { .. } => AuthNotice {
                title: "Conta criada!",
                description: "Sua jornada de vendas começou!",
            },
        }
    }
}

/// Validate the form and hand it to the session store.
///
/// A session that is still restoring cannot accept a submission; that case
/// surfaces as the generic unexpected-error message.
pub async fn submit<S: KeyValueStore>(
    form: &AuthForm,
    session: &mut SessionStore<S>,
) -> Result<AuthNotice, AuthFormError> {
    form.validate()?;
    if session.is_loading() {
        debug!("auth form submitted while session is loading");
        return Err(AuthFormError::Unexpected);
    }

    match form {
        AuthForm::Login { email, password } => {
            if !session.login(email, password).await {
                return Err(AuthFormError::LoginFailed);
            }
        }
        AuthForm::Register {
            name,
            email,
            password,
            ..
        } => {
            if !session.register(name, email, password).await {
                return Err(AuthFormError::RegistrationFailed);
            }
        }
    }
    Ok(form.notice())
}
