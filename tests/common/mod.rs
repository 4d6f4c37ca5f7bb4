//! Shared harness: the router served in-process over a private in-memory store.

#![allow(dead_code)]

use inventory_service::{transport, Database, DeletePolicy};
use serde_json::{json, Value};

pub struct TestApp {
    pub base_url: String,
    pub client: reqwest::Client,
    /// Same pool the router uses, for tests that need to break the store.
    pub db: Database,
}

impl TestApp {
    pub async fn spawn(delete_policy: DeletePolicy) -> TestApp {
        let db = Database::connect_in_memory().await.expect("in-memory database");
        let router = transport::http::create_router(transport::http::AppState {
            db: db.clone(),
            delete_policy,
        });

        // Bind to an ephemeral port so tests can run in parallel.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        TestApp {
            base_url: format!("http://127.0.0.1:{}", port),
            client: reqwest::Client::new(),
            db,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get(&self, path: &str) -> (u16, Value) {
        let resp = self.client.get(self.url(path)).send().await.unwrap();
        split(resp).await
    }

    pub async fn post(&self, path: &str, body: &Value) -> (u16, Value) {
        let resp = self.client.post(self.url(path)).json(body).send().await.unwrap();
        split(resp).await
    }

    pub async fn put(&self, path: &str, body: &Value) -> (u16, Value) {
        let resp = self.client.put(self.url(path)).json(body).send().await.unwrap();
        split(resp).await
    }

    pub async fn delete(&self, path: &str) -> (u16, Value) {
        let resp = self.client.delete(self.url(path)).send().await.unwrap();
        split(resp).await
    }

    /// Creates the sample Insumo and returns its id.
    pub async fn create_papel(&self) -> i64 {
        let (status, body) = self.post("/insumos", &papel_a4()).await;
        assert_eq!(status, 201, "unexpected body: {}", body);
        body["id"].as_i64().unwrap()
    }
}

async fn split(resp: reqwest::Response) -> (u16, Value) {
    let status = resp.status().as_u16();
    let body = resp.json::<Value>().await.unwrap_or(Value::Null);
    (status, body)
}

pub fn papel_a4() -> Value {
    json!({
        "nomeInsumo": "Papel A4",
        "QtdInsumo": 500,
        "descricaoInsumo": "Resma",
        "Status": "Ativo"
    })
}

pub fn papelaria_xyz(insumo_id: i64) -> Value {
    json!({
        "nomeFornecedor": "Papelaria XYZ",
        "insumoFornecedor": "Papel A4",
        "precoInsumo": 23.9,
        "contatoTelefone": "11999999999",
        "contatoEmail": "contato@xyz.com",
        "idInsumo": insumo_id
    })
}
