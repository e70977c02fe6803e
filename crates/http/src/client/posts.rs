//! Spot post and comment client methods

use crate::client::ApiClient;
use crate::error::ClientError;
use crate::types::{CommentRequest, SpotPost};
use http::Method;

impl ApiClient {
    /// List the posts attached to a spot
    pub async fn spot_posts(&self, spot_id: &str) -> Result<Vec<SpotPost>, ClientError> {
        let ctx = self.context(Method::GET, &format!("/api/spot/posts/{spot_id}/"));
        self.execute(ctx).await
    }

    /// Add a comment to an existing post
    pub async fn add_comment(
        &self,
        post_id: u64,
        comment: CommentRequest,
    ) -> Result<SpotPost, ClientError> {
        let ctx = self
            .context(Method::POST, &format!("/api/spot/posts/add-comment/{post_id}"))
            .json(&comment)?;
        self.execute(ctx).await
    }
}
