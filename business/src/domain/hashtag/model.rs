use super::errors::HashtagError;

/// Number of hashtags requested from the provider.
pub const HASHTAG_COUNT: usize = 10;

/// Validated inbound content for a hashtag generation.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    content: String,
}

impl GenerationRequest {
    /// Rejects missing, empty and whitespace-only content.
    /// The accepted content is kept untrimmed.
    pub fn new(content: Option<String>) -> Result<Self, HashtagError> {
        match content {
            Some(content) if !content.trim().is_empty() => Ok(Self { content }),
            _ => Err(HashtagError::ContentRequired),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Instruction text sent to the provider.
#[derive(Debug, Clone, PartialEq)]
pub struct Prompt(String);

impl Prompt {
    pub fn for_request(request: &GenerationRequest) -> Self {
        Self(format!(
            "Extract {} SEO-friendly hashtags from the following content. \
             Return hashtags only, separated by commas. Content: \"{}\"",
            HASHTAG_COUNT,
            request.content()
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Prompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered hashtags extracted from a provider reply.
///
/// Every element starts with `#`. Count and uniqueness are not enforced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HashtagList(Vec<String>);

impl HashtagList {
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

/// Whitespace as ECMAScript `\s` defines it: Unicode `White_Space` plus the
/// byte-order mark, minus U+0085.
fn is_split_whitespace(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{0085}')
}

/// Parses a provider reply into hashtags.
///
/// Newlines are removed first. The text is then split on commas and on any
/// whitespace that directly precedes a `#`. Pieces are trimmed and only those
/// starting with `#` survive, in order, duplicates included.
pub fn extract_hashtags(raw: &str) -> HashtagList {
    let text: String = raw.chars().filter(|c| *c != '\n').collect();

    let mut pieces = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        let splits_before_tag = is_split_whitespace(c) && chars.peek() == Some(&'#');
        if c == ',' || splits_before_tag {
            pieces.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }
    pieces.push(current);

    HashtagList(
        pieces
            .iter()
            .map(|piece| piece.trim_matches(is_split_whitespace))
            .filter(|piece| piece.starts_with('#'))
            .map(str::to_string)
            .collect(),
    )
}
