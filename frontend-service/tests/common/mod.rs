use frontend_service::startup::Application;
use frontend_service::DEFAULT_PORT;
use service_core::config::Config;
use std::collections::HashMap;

pub struct TestApp {
    pub address: String,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let vars = HashMap::from([("PORT".to_string(), "0".to_string())]);
        let config =
            Config::from_env_map(DEFAULT_PORT, vars).expect("Failed to load configuration");

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        TestApp { address }
    }

    pub fn client(&self) -> reqwest::Client {
        reqwest::Client::new()
    }
}
