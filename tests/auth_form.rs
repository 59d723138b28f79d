//! Integration tests for entry form validation and notices

use blitzseller::auth::{submit, AuthForm, AuthFormError};
mod common;

#[tokio::test]
async fn register_blocked_without_name() {
    let mut session = common::memory_session();
    let form = AuthForm::Register {
        name: String::new(),
        email: "nova@bridge.com".to_string(),
        password: "abc".to_string(),
        confirm_password: "abc".to_string(),
    };
    let err = submit(&form, &mut session).await.unwrap_err();
    assert_eq!(err, AuthFormError::MissingName);
    assert_eq!(err.to_string(), "Por favor, preencha seu nome");
    assert!(!session.is_authenticated());
}

#[tokio::test]
async fn register_blocked_on_mismatch() {
    let mut session = common::memory_session();
    let form = AuthForm::Register {
        name: "Nova".to_string(),
        email: "nova@bridge.com".to_string(),
        password: "abc".to_string(),
        confirm_password: "abd".to_string(),
    };
    let err = submit(&form, &mut session).await.unwrap_err();
    assert_eq!(err.to_string(), "As senhas não coincidem");
}

#[tokio::test]
async fn successful_register_keeps_name() {
    let mut session = common::memory_session();
    let form = AuthForm::Register {
        name: "Nova Vendedora".to_string(),
        email: "nova@bridge.com".to_string(),
        password: "abc".to_string(),
        confirm_password: "abc".to_string(),
    };
    let notice = submit(&form, &mut session).await.unwrap();
    assert_eq!(notice.title, "Conta criada!");
    assert_eq!(session.current().unwrap().name, "Nova Vendedora");
}

#[tokio::test]
async fn login_notice() {
    let mut session = common::memory_session();
    let form = AuthForm::Login {
        email: "joao@empresa.com".to_string(),
        password: "123".to_string(),
    };
    let notice = submit(&form, &mut session).await.unwrap();
    assert_eq!(notice.title, "Login realizado!");
    assert_eq!(session.current().unwrap().name, "joao");
}

#[test]
fn empty_login_email_is_refused() {
    let mut session = common::memory_session();
    let form = AuthForm::Login {
        email: String::new(),
        password: "123".to_string(),
    };
    let err = tokio_test::block_on(submit(&form, &mut session)).unwrap_err();
    assert_eq!(err, AuthFormError::MissingFields);
    assert!(!session.is_authenticated());
}
