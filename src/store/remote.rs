//! HTTP client store: the same operations, issued against `doing-server`.

use crate::config::BasicAuth;
use crate::errors::{AppError, AppResult};
use crate::models::entry::{Entry, EntryRecord};
use crate::store::EntryStore;
use reqwest::StatusCode;
use reqwest::blocking::{Client, RequestBuilder, Response};
use std::time::Duration;

pub struct RemoteStore {
    base_url: String,
    auth: Option<BasicAuth>,
    client: Client,
}

impl RemoteStore {
    pub fn new(base_url: String, auth: Option<BasicAuth>) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            auth,
            client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Attach credentials, send, and translate error statuses.
    fn send(&self, req: RequestBuilder) -> AppResult<Response> {
        let req = match &self.auth {
            Some(auth) => req.basic_auth(&auth.username, Some(&auth.password)),
            None => req,
        };

        let resp = req.send()?;
        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            return Err(AppError::NotFound);
        }
        if status == StatusCode::CONFLICT {
            return Err(AppError::OpenEntry);
        }
        if !status.is_success() {
            return Err(AppError::Server {
                status: status.as_u16(),
                message: error_message(resp),
            });
        }
        Ok(resp)
    }
}

/// Best-effort extraction of the `{"error": ...}` body the server sends.
fn error_message(resp: Response) -> String {
    let fallback = "request failed".to_string();
    let Ok(body) = resp.text() else {
        return fallback;
    };
    serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
        .unwrap_or(if body.is_empty() { fallback } else { body })
}

impl EntryStore for RemoteStore {
    fn insert(&self, entry: &Entry) -> AppResult<Entry> {
        let rec = EntryRecord::from(entry);
        let resp = self.send(self.client.post(self.url("/entries")).json(&rec))?;
        Ok(Entry::from(resp.json::<EntryRecord>()?))
    }

    fn update(&self, entry: &Entry) -> AppResult<()> {
        let id = entry.id.ok_or(AppError::NotFound)?;
        let rec = EntryRecord::from(entry);
        self.send(
            self.client
                .put(self.url(&format!("/entries/{id}")))
                .json(&rec),
        )?;
        Ok(())
    }

    fn delete(&self, id: i64) -> AppResult<()> {
        self.send(self.client.delete(self.url(&format!("/entries/{id}"))))?;
        Ok(())
    }

    fn all(&self) -> AppResult<Vec<Entry>> {
        let resp = self.send(self.client.get(self.url("/entries")))?;
        let recs = resp.json::<Vec<EntryRecord>>()?;
        Ok(recs.into_iter().map(Entry::from).collect())
    }

    fn latest(&self) -> AppResult<Option<Entry>> {
        let resp = self.send(self.client.get(self.url("/entries/latest")))?;
        let rec = resp.json::<Option<EntryRecord>>()?;
        Ok(rec.map(Entry::from))
    }

    fn get(&self, id: i64) -> AppResult<Entry> {
        let resp = self.send(self.client.get(self.url(&format!("/entries/{id}"))))?;
        Ok(Entry::from(resp.json::<EntryRecord>()?))
    }

    fn truncate(&self) -> AppResult<()> {
        self.send(self.client.delete(self.url("/entries")))?;
        Ok(())
    }
}
