//! Test helpers for Web API integration tests.

use std::sync::Arc;

use axum_test::TestServer;
use jsonwebtoken::{encode, EncodingKey, Header};

use mailfrom::web::handlers::AppState;
use mailfrom::web::middleware::{JwtClaims, JwtState};
use mailfrom::web::router::{create_health_router, create_router};
use mailfrom::{Database, SenderIdentity};

/// JWT secret used by the test server.
pub const TEST_JWT_SECRET: &str = "test-secret-key-for-testing-only";

/// Default sender name the test host is configured with.
pub const TEST_DEFAULT_NAME: &str = "WordPress";

/// Default sender email the test host is configured with.
pub const TEST_DEFAULT_EMAIL: &str = "noreply@host.com";

/// Create a test server with an in-memory database.
pub async fn create_test_server() -> (TestServer, Database) {
    let db = Database::open_in_memory()
        .await
        .expect("Failed to create test database");

    let app_state = Arc::new(AppState::new(
        db.clone(),
        SenderIdentity::new(TEST_DEFAULT_NAME, TEST_DEFAULT_EMAIL),
    ));
    let jwt_state = Arc::new(JwtState::new(TEST_JWT_SECRET));

    let router = create_router(app_state, jwt_state, &[]).merge(create_health_router());

    let server = TestServer::new(router).expect("Failed to create test server");

    (server, db)
}

/// Mint a token with the given role, signed with the test secret.
pub fn mint_token(role: &str) -> String {
    let now = chrono::Utc::now().timestamp() as u64;
    let claims = JwtClaims {
        sub: "test-user".to_string(),
        role: role.to_string(),
        iat: now,
        exp: now + 3600,
        jti: uuid::Uuid::new_v4().to_string(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_JWT_SECRET.as_bytes()),
    )
    .expect("Failed to encode test token")
}

/// Mint an administrator token.
pub fn admin_token() -> String {
    mint_token("admin")
}
