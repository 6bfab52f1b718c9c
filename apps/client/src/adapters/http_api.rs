//! reqwest adapter for the remote game service.

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::types::{
    AckResponse, ActionsResponse, CallDealerRequest, CallFriendRequest, DiscardRequest,
    PlayRequest, ReplayResponse, TableResponse,
};
use crate::api::GameApi;
use crate::auth::AuthSession;
use crate::config::ClientConfig;
use crate::error::ClientError;

/// HTTP implementation of [`GameApi`] carrying the session bearer credential.
pub struct HttpGameApi {
    http: reqwest::Client,
    base_url: String,
    auth: AuthSession,
}

/// Error body shape the service answers rejections with.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl ErrorBody {
    fn detail(self) -> Option<String> {
        self.message.or(self.error)
    }
}

impl HttpGameApi {
    pub fn new(config: &ClientConfig, auth: AuthSession) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ClientError::config(format!("http client: {e}")))?;
        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            auth,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        debug!(path, "GET");
        let resp = self
            .http
            .get(self.url(path))
            .header(AUTHORIZATION, self.auth.bearer())
            .send()
            .await?;
        Self::decode(resp).await
    }

    async fn post_json<T, B>(&self, path: &str, body: Option<&B>) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        debug!(path, "POST");
        let mut req = self
            .http
            .post(self.url(path))
            .header(AUTHORIZATION, self.auth.bearer());
        if let Some(body) = body {
            req = req.json(body);
        }
        let resp = req.send().await?;
        Self::decode(resp).await
    }

    /// Map HTTP status to the error taxonomy, then decode the body.
    ///
    /// 401/403 end the session; 404 means the table id is gone and polling
    /// must stop; other non-2xx statuses surface the service's own message as
    /// a rejection. Bodies that fail to decode count as transport failures.
    async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ClientError> {
        let status = resp.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(ClientError::unauthorized());
        }
        if status == StatusCode::NOT_FOUND {
            let detail = Self::error_detail(resp, status).await;
            return Err(ClientError::game_not_found(detail));
        }
        if !status.is_success() {
            let detail = Self::error_detail(resp, status).await;
            return Err(ClientError::rejected(detail));
        }
        Ok(resp.json::<T>().await?)
    }

    async fn error_detail(resp: reqwest::Response, status: StatusCode) -> String {
        match resp.json::<ErrorBody>().await {
            Ok(body) => body.detail().unwrap_or_else(|| format!("HTTP {status}")),
            Err(_) => format!("HTTP {status}"),
        }
    }
}

#[async_trait]
impl GameApi for HttpGameApi {
    async fn fetch_table(&self, game_id: &str) -> Result<TableResponse, ClientError> {
        self.get_json(&format!("/game/{game_id}/table")).await
    }

    async fn create_single(&self) -> Result<TableResponse, ClientError> {
        self.post_json::<_, ()>("/game/singleplayer", None).await
    }

    async fn start_game(&self, game_id: &str) -> Result<AckResponse, ClientError> {
        self.post_json::<_, ()>(&format!("/game/{game_id}/start"), None)
            .await
    }

    async fn start_single(&self, game_id: &str) -> Result<TableResponse, ClientError> {
        self.post_json::<_, ()>(&format!("/game/{game_id}/start-single"), None)
            .await
    }

    async fn join_game(&self, game_id: &str) -> Result<AckResponse, ClientError> {
        self.post_json::<_, ()>(&format!("/game/{game_id}/join"), None)
            .await
    }

    async fn call_dealer(
        &self,
        game_id: &str,
        req: &CallDealerRequest,
    ) -> Result<TableResponse, ClientError> {
        self.post_json(&format!("/game/{game_id}/call-dealer"), Some(req))
            .await
    }

    async fn discard_bottom(
        &self,
        game_id: &str,
        req: &DiscardRequest,
    ) -> Result<TableResponse, ClientError> {
        self.post_json(&format!("/game/{game_id}/discard-bottom"), Some(req))
            .await
    }

    async fn call_friend(
        &self,
        game_id: &str,
        req: &CallFriendRequest,
    ) -> Result<TableResponse, ClientError> {
        self.post_json(&format!("/game/{game_id}/call-friend"), Some(req))
            .await
    }

    async fn play_cards(
        &self,
        game_id: &str,
        req: &PlayRequest,
    ) -> Result<TableResponse, ClientError> {
        self.post_json(&format!("/game/{game_id}/play"), Some(req))
            .await
    }

    async fn ai_play(&self, game_id: &str) -> Result<TableResponse, ClientError> {
        self.post_json::<_, ()>(&format!("/game/{game_id}/ai-play"), None)
            .await
    }

    async fn fetch_replay(&self, game_id: &str) -> Result<ReplayResponse, ClientError> {
        self.get_json(&format!("/game/{game_id}/replay")).await
    }

    async fn fetch_actions(&self, game_id: &str) -> Result<ActionsResponse, ClientError> {
        self.get_json(&format!("/game/{game_id}/actions")).await
    }
}
