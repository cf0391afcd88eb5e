use super::{config::ClientConfig, errors::ClientError};
use crate::application::engagement::dto::{
    AddCommentRequest, CommentResponse, CommentsResponse, EngagementSummary, ErrorResponse,
    LikesResponse,
};
use crate::domain::engagement::content::Comment;
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use uuid::Uuid;

/// The engagement endpoints as seen from a client.
///
/// Counts returned here are authoritative and replace any locally computed value.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EngagementApi: Send + Sync {
    async fn like(&self, content_id: Uuid) -> Result<i32, ClientError>;
    async fn unlike(&self, content_id: Uuid) -> Result<i32, ClientError>;
    async fn dislike(&self, content_id: Uuid) -> Result<i32, ClientError>;
    async fn add_comment(
        &self,
        content_id: Uuid,
        request: AddCommentRequest,
    ) -> Result<Comment, ClientError>;
    async fn list_comments(&self, content_id: Uuid) -> Result<Vec<Comment>, ClientError>;
    async fn get_engagement(&self, content_id: Uuid) -> Result<EngagementSummary, ClientError>;
}

pub struct HttpEngagementApi {
    client: Client,
    base_url: String,
}

impl HttpEngagementApi {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, ClientError> {
        let client = Client::builder().timeout(config.request_timeout).build()?;
        Ok(Self::new(client, config.base_url.clone()))
    }

    fn url(&self, content_id: Uuid, action: &str) -> String {
        format!("{}/content/{}/{}", self.base_url, content_id, action)
    }

    async fn post_counter(&self, content_id: Uuid, action: &str) -> Result<i32, ClientError> {
        let res = self.client.post(self.url(content_id, action)).send().await?;
        let body: LikesResponse = decode(res).await?;
        tracing::debug!(%content_id, action, likes = body.likes, "counter confirmed by server");
        Ok(body.likes)
    }
}

/// Maps a response onto `T` or the matching [`ClientError`].
async fn decode<T: DeserializeOwned>(res: Response) -> Result<T, ClientError> {
    let status = res.status();
    if status.is_success() {
        return Ok(res.json::<T>().await?);
    }

    let message = match res.json::<ErrorResponse>().await {
        Ok(body) => body.error,
        Err(_) => status.to_string(),
    };
    Err(match status {
        StatusCode::NOT_FOUND => ClientError::NotFound(message),
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
            ClientError::Validation(message)
        }
        _ => ClientError::Service(message),
    })
}

#[async_trait]
impl EngagementApi for HttpEngagementApi {
    async fn like(&self, content_id: Uuid) -> Result<i32, ClientError> {
        self.post_counter(content_id, "like").await
    }

    async fn unlike(&self, content_id: Uuid) -> Result<i32, ClientError> {
        self.post_counter(content_id, "unlike").await
    }

    async fn dislike(&self, content_id: Uuid) -> Result<i32, ClientError> {
        self.post_counter(content_id, "dislike").await
    }

    async fn add_comment(
        &self,
        content_id: Uuid,
        request: AddCommentRequest,
    ) -> Result<Comment, ClientError> {
        let res = self
            .client
            .post(self.url(content_id, "comments"))
            .json(&request)
            .send()
            .await?;
        let body: CommentResponse = decode(res).await?;
        Ok(body.comment)
    }

    async fn list_comments(&self, content_id: Uuid) -> Result<Vec<Comment>, ClientError> {
        let res = self
            .client
            .get(self.url(content_id, "comments"))
            .send()
            .await?;
        let body: CommentsResponse = decode(res).await?;
        Ok(body.comments)
    }

    async fn get_engagement(&self, content_id: Uuid) -> Result<EngagementSummary, ClientError> {
        let res = self
            .client
            .get(format!("{}/content/{}", self.base_url, content_id))
            .send()
            .await?;
        decode(res).await
    }
}
