#![allow(dead_code)]

use std::net::TcpListener;

use reqwest::{Client, Response};
use serde_json::Value;

pub struct TestApp {
    pub address: String,
    pub client: Client,
}

/// Starts the router on a random local port over a freshly seeded in-memory database.
pub async fn spawn_app() -> TestApp {
    let pool = nc_news::connect_in_memory()
        .await
        .expect("could not open in-memory database");
    nc_news::seed::seed(&pool, &nc_news::seed::test_data())
        .await
        .expect("could not seed database");

    let listener = TcpListener::bind("127.0.0.1:0").expect("could not bind a free port");
    let port = listener.local_addr().expect("no local address").port();
    tokio::spawn(nc_news::serve(
        nc_news::make_router(),
        listener,
        pool,
        std::future::pending(),
    ));

    TestApp {
        address: format!("http://127.0.0.1:{}", port),
        client: Client::new(),
    }
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    pub async fn get(&self, path: &str) -> Response {
        self.client
            .get(self.url(path))
            .send()
            .await
            .expect("request failed")
    }

    pub async fn post_json(&self, path: &str, body: &Value) -> Response {
        self.client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("request failed")
    }

    pub async fn patch_json(&self, path: &str, body: &Value) -> Response {
        self.client
            .patch(self.url(path))
            .json(body)
            .send()
            .await
            .expect("request failed")
    }

    pub async fn delete(&self, path: &str) -> Response {
        self.client
            .delete(self.url(path))
            .send()
            .await
            .expect("request failed")
    }
}

pub async fn json_body(response: Response) -> Value {
    response.json::<Value>().await.expect("body was not json")
}

pub async fn error_msg(response: Response) -> String {
    let body = json_body(response).await;
    body["msg"].as_str().expect("error body has no msg").to_string()
}
