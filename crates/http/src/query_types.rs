//! Request/query types

#[derive(Debug, Default)]
pub struct AuthorQuery {
    pub author: Option<String>,
}

impl AuthorQuery {
    /// Build from raw query pairs. The first `author` wins; repeats are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let author = pairs.into_iter().find(|(key, _)| key == "author").map(|(_, value)| value);
        Self { author }
    }

    /// Author filter if one was given. An empty `author=` means no filter.
    pub fn filter(&self) -> Option<&str> {
        self.author.as_deref().filter(|a| !a.is_empty())
    }
}
