use std::fmt;

pub const USER_ID_PARAM: &str = "userId";

/// Player identity taken from the launch URL; fixed for the page's lifetime.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionId(String);

impl SessionId {
    /// Parses a `location.search` string. An empty `userId` counts as absent.
    pub fn from_query(search: &str) -> Option<Self> {
        let query = search.strip_prefix('?').unwrap_or(search);
        url::form_urlencoded::parse(query.as_bytes())
            .find(|(key, _)| key == USER_ID_PARAM)
            .map(|(_, value)| value.into_owned())
            .filter(|value| !value.is_empty())
            .map(SessionId)
    }

    pub fn from_window() -> Option<Self> {
        let search = web_sys::window()?.location().search().ok()?;
        Self::from_query(&search)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_user_id_from_query() {
        let id = SessionId::from_query("?foo=1&userId=42").unwrap();
        assert_eq!(id.as_str(), "42");
        assert_eq!(SessionId::from_query("userId=abc").unwrap().as_str(), "abc");
    }

    #[test]
    fn decodes_percent_escapes() {
        let id = SessionId::from_query("?userId=a%20b%2Bc").unwrap();
        assert_eq!(id.as_str(), "a b+c");
    }

    #[test]
    fn missing_or_empty_user_id_is_absent() {
        assert_eq!(SessionId::from_query(""), None);
        assert_eq!(SessionId::from_query("?user=1"), None);
        assert_eq!(SessionId::from_query("?userId="), None);
    }

    #[test]
    fn first_occurrence_wins() {
        let id = SessionId::from_query("?userId=first&userId=second").unwrap();
        assert_eq!(id.as_str(), "first");
    }
}
