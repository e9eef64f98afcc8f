use reqwest::redirect::Policy;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered `{"status":"fail", ...}`.
    #[error("{0}")]
    Rejected(String),

    /// A gated endpoint was called without a live session.
    #[error("not logged in")]
    NotLoggedIn,

    #[error("server returned {status}: {body}")]
    Status { status: StatusCode, body: String },
}

/// `{"status": ..., "message"?: ..., "employee_id"?: ...}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusReply {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub employee_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    /// Digits (`"123"`) or a full `EMP...` id. Empty lets the server pick.
    #[serde(default)]
    pub employee_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Me {
    pub email: String,
    pub name: String,
}

#[derive(Deserialize)]
struct AskReply {
    reply: String,
}

/// A logged-in conversation with the helpdesk. Holds the session cookie.
pub struct HelpdeskClient {
    client: Client,
    base_url: String,
}

impl HelpdeskClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let client = Client::builder()
            .cookie_store(true)
            .redirect(Policy::none())
            .no_proxy()
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Log in. Fails with [`ClientError::Rejected`] on bad credentials.
    pub async fn login(&self, email: &str, password: &str) -> Result<(), ClientError> {
        let res = self
            .client
            .post(self.url("/login"))
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await?;
        expect_success(res).await.map(|_| ())
    }

    /// Register and log in. Returns the assigned employee ID.
    pub async fn register(&self, registration: &Registration) -> Result<String, ClientError> {
        let res = self
            .client
            .post(self.url("/register"))
            .json(registration)
            .send()
            .await?;
        let reply = expect_success(res).await?;
        Ok(reply.employee_id.unwrap_or_default())
    }

    pub async fn ask(&self, message: &str) -> Result<String, ClientError> {
        self.ask_as(message, None).await
    }

    /// Ask on behalf of `email` instead of the logged-in user.
    pub async fn ask_as(&self, message: &str, email: Option<&str>) -> Result<String, ClientError> {
        let mut body = serde_json::json!({ "message": message });
        if let Some(email) = email {
            body["email"] = email.into();
        }
        let res = self.client.post(self.url("/ask")).json(&body).send().await?;
        let reply: AskReply = gated(res).await?.json().await?;
        Ok(reply.reply)
    }

    pub async fn me(&self) -> Result<Me, ClientError> {
        let res = self.client.get(self.url("/me")).send().await?;
        Ok(gated(res).await?.json().await?)
    }

    pub async fn reset(&self) -> Result<(), ClientError> {
        let res = self.client.post(self.url("/reset")).send().await?;
        gated(res).await.map(|_| ())
    }

    pub async fn logout(&self) -> Result<(), ClientError> {
        self.client.get(self.url("/logout")).send().await?;
        Ok(())
    }
}

async fn gated(res: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = res.status();
    if status.is_redirection() {
        return Err(ClientError::NotLoggedIn);
    }
    if !status.is_success() {
        let body = res.text().await.unwrap_or_default();
        return Err(ClientError::Status { status, body });
    }
    Ok(res)
}

async fn expect_success(res: reqwest::Response) -> Result<StatusReply, ClientError> {
    let status = res.status();
    let text = res.text().await?;
    let reply: StatusReply = match serde_json::from_str(&text) {
        Ok(reply) => reply,
        Err(_) => return Err(ClientError::Status { status, body: text }),
    };
    if reply.status == "success" {
        Ok(reply)
    } else {
        Err(ClientError::Rejected(reply.message.unwrap_or(reply.status)))
    }
}
