use backend_service::startup::Application;
use backend_service::DEFAULT_PORT;
use service_core::config::Config;
use service_core::error::AppError;
use std::collections::HashMap;

fn config_with(vars: &[(&str, &str)]) -> Config {
    let vars = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect::<HashMap<_, _>>();
    Config::from_env_map(DEFAULT_PORT, vars).expect("Failed to load configuration")
}

#[test]
fn default_port_is_3001() {
    assert_eq!(config_with(&[]).port, 3001);
}

#[test]
fn port_env_overrides_default() {
    assert_eq!(config_with(&[("PORT", "8099")]).port, 8099);
}

#[tokio::test]
async fn port_zero_binds_an_ephemeral_port() {
    let app = Application::build(config_with(&[("PORT", "0")]))
        .await
        .expect("Failed to build application");

    assert_ne!(app.port(), 0);
}

#[tokio::test]
async fn occupied_port_fails_to_start() {
    let first = Application::build(config_with(&[("PORT", "0")]))
        .await
        .expect("Failed to build application");

    let second = Application::build(config_with(&[("PORT", &first.port().to_string())])).await;

    assert!(matches!(second, Err(AppError::Bind { .. })));
}
