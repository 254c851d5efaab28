use crate::core::errors::SpendlensError;
use crate::tests::{ScriptedGateway, create_test_service};

#[tokio::test]
async fn register_login_and_validate_session() {
    let service = create_test_service(ScriptedGateway::new());

    let user = service
        .register_user("mia@example.com".to_string(), "hunter2", "Mia".to_string())
        .await
        .unwrap();

    let token = service
        .authenticate("mia@example.com", "hunter2")
        .await
        .unwrap();
    let claims = service.validate_token(&token).unwrap();
    assert_eq!(claims.sub, user.id);
}

#[tokio::test]
async fn wrong_password_is_rejected() {
    let service = create_test_service(ScriptedGateway::new());
    service
        .register_user("nina@example.com".to_string(), "hunter2", "Nina".to_string())
        .await
        .unwrap();

    let err = service
        .authenticate("nina@example.com", "wrong")
        .await
        .unwrap_err();
    assert!(matches!(err, SpendlensError::InvalidCredentials));
}

#[tokio::test]
async fn unknown_email_is_rejected() {
    let service = create_test_service(ScriptedGateway::new());
    let err = service
        .authenticate("ghost@example.com", "pw")
        .await
        .unwrap_err();
    assert!(matches!(err, SpendlensError::InvalidCredentials));
}

#[tokio::test]
async fn duplicate_email_is_a_conflict() {
    let service = create_test_service(ScriptedGateway::new());
    service
        .register_user("oscar@example.com".to_string(), "pw", "Oscar".to_string())
        .await
        .unwrap();

    let err = service
        .register_user("oscar@example.com".to_string(), "pw", "Oscar II".to_string())
        .await
        .unwrap_err();
    assert!(matches!(err, SpendlensError::EmailAlreadyRegistered(_)));
}

#[tokio::test]
async fn empty_email_is_rejected() {
    let service = create_test_service(ScriptedGateway::new());
    let err = service
        .register_user("  ".to_string(), "pw", "Nobody".to_string())
        .await
        .unwrap_err();
    assert!(matches!(err, SpendlensError::MissingEmail));
}

#[test]
fn garbage_token_is_unauthorized() {
    let service = create_test_service(ScriptedGateway::new());
    let err = service.validate_token("not-a-jwt").unwrap_err();
    assert!(matches!(err, SpendlensError::Unauthorized(_)));
}
