use poem_openapi::Object;

use business::domain::hashtag::model::HashtagList;

#[derive(Debug, Clone, Object)]
pub struct GenerateHashtagsRequest {
    /// Text to extract hashtags from
    pub content: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct HashtagsResponse {
    /// Extracted hashtags, each starting with '#', in provider order
    pub hashtags: Vec<String>,
}

impl From<HashtagList> for HashtagsResponse {
    fn from(list: HashtagList) -> Self {
        Self {
            hashtags: list.into_inner(),
        }
    }
}
