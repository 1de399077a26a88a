use async_trait::async_trait;

use crate::domain::hashtag::errors::HashtagError;
use crate::domain::hashtag::model::HashtagList;

pub struct GenerateHashtagsParams {
    pub content: Option<String>,
}

#[async_trait]
pub trait GenerateHashtagsUseCase: Send + Sync {
    async fn execute(&self, params: GenerateHashtagsParams) -> Result<HashtagList, HashtagError>;
}
