// End-to-end session lifecycle: stored credential -> verification ->
// token issuance -> guard decisions, over a real migrated database

mod common;

use poem::http::HeaderMap;

use deudas_backend::errors::ApiError;
use deudas_backend::services::{access_guard, VerifyOutcome};
use deudas_backend::stores::{MutationOutcome, NewDeuda};
use deudas_backend::types::internal::Role;

use common::{create_user, setup_test_app};

fn bearer_headers(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert("authorization", format!("Bearer {}", token).parse().unwrap());
    headers
}

#[tokio::test]
async fn test_full_session_lifecycle_for_a_merchant() {
    let app = setup_test_app().await;
    let merchant = create_user(&app, "Almacén Uno", "uno@x.com", "pass-uno", Role::User).await;

    // Verify the credential and mint a session
    let identity = match app.auth_service.verify("uno@x.com", "pass-uno").await.unwrap() {
        VerifyOutcome::Success(identity) => identity,
        VerifyOutcome::InvalidCredentials => panic!("Expected successful verification"),
    };
    assert_eq!(identity.id, merchant.id);
    assert_eq!(identity.role, Role::User);

    let token = app.token_service.issue(&identity).unwrap();

    // The guard accepts the session and reproduces exactly id and role
    let claims = access_guard::authenticate(&bearer_headers(&token), &app.token_service).unwrap();
    assert_eq!(claims.sub, merchant.id);
    assert_eq!(claims.role, Role::User);

    // A merchant session never passes the admin gate
    assert!(matches!(
        access_guard::require_admin(&claims),
        Err(ApiError::Forbidden(_))
    ));
}

#[tokio::test]
async fn test_admin_session_passes_the_admin_gate() {
    let app = setup_test_app().await;
    create_user(&app, "Root", "root@x.com", "rootpass", Role::Admin).await;

    let identity = match app.auth_service.verify("root@x.com", "rootpass").await.unwrap() {
        VerifyOutcome::Success(identity) => identity,
        VerifyOutcome::InvalidCredentials => panic!("Expected successful verification"),
    };

    let token = app.token_service.issue(&identity).unwrap();
    let claims = access_guard::authenticate(&bearer_headers(&token), &app.token_service).unwrap();

    assert_eq!(claims.role, Role::Admin);
    assert!(access_guard::require_admin(&claims).is_ok());
}

#[tokio::test]
async fn test_verification_failures_stay_uniform_against_a_real_store() {
    let app = setup_test_app().await;
    create_user(&app, "Almacén Uno", "uno@x.com", "pass-uno", Role::User).await;

    for (email, password) in [
        ("uno@x.com", "wrong-password"),
        ("desconocido@x.com", "pass-uno"),
        ("", ""),
    ] {
        let outcome = app.auth_service.verify(email, password).await.unwrap();
        assert!(
            matches!(outcome, VerifyOutcome::InvalidCredentials),
            "expected uniform rejection for {:?}",
            (email, password)
        );
    }
}

#[tokio::test]
async fn test_ownership_is_enforced_across_sessions() {
    let app = setup_test_app().await;
    let owner = create_user(&app, "Dueño", "owner@x.com", "pass-a", Role::User).await;
    let intruder = create_user(&app, "Otro", "other@x.com", "pass-b", Role::User).await;

    let (deuda, _) = app
        .deuda_store
        .create_with_deudor(
            &owner.id,
            NewDeuda {
                dni: "111".to_string(),
                nombre: "Luis".to_string(),
                apellido: "Diaz".to_string(),
                monto: 500.0,
                descripcion: "rent".to_string(),
            },
        )
        .await
        .unwrap();

    // The intruder's session id drives the ownership decision
    let outcome = app
        .deuda_store
        .delete_owned(&deuda.id, &intruder.id)
        .await
        .unwrap();
    assert!(matches!(outcome, MutationOutcome::NotOwner));

    let outcome = app
        .deuda_store
        .delete_owned(&deuda.id, &owner.id)
        .await
        .unwrap();
    assert!(matches!(outcome, MutationOutcome::Applied(())));
}
