use std::fmt;

use reqwest::StatusCode;

/// Set of status codes a call accepts as success.
///
/// Renders as the codes joined by `/` (e.g. `200/201`) in error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpectedStatus(Vec<StatusCode>);

impl ExpectedStatus {
    pub fn new(codes: impl IntoIterator<Item = StatusCode>) -> Self {
        Self(codes.into_iter().collect())
    }

    /// Accept only `200 OK`.
    #[must_use]
    pub fn ok() -> Self {
        Self(vec![StatusCode::OK])
    }

    #[must_use]
    pub fn contains(&self, status: StatusCode) -> bool {
        self.0.contains(&status)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn codes(&self) -> &[StatusCode] {
        &self.0
    }
}

impl From<StatusCode> for ExpectedStatus {
    fn from(status: StatusCode) -> Self {
        Self(vec![status])
    }
}

impl fmt::Display for ExpectedStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.0.iter().map(|c| c.as_u16().to_string()).collect();
        write!(f, "{}", rendered.join("/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_codes_joined_by_slash() {
        let expected = ExpectedStatus::new([StatusCode::OK, StatusCode::CREATED, StatusCode::NO_CONTENT]);
        assert_eq!(expected.to_string(), "200/201/204");
    }

    #[test]
    fn membership_is_exact() {
        let expected = ExpectedStatus::ok();
        assert!(expected.contains(StatusCode::OK));
        assert!(!expected.contains(StatusCode::CREATED));
        assert!(!expected.contains(StatusCode::NO_CONTENT));
    }

    #[test]
    fn empty_set_renders_empty() {
        let expected = ExpectedStatus::new([]);
        assert!(expected.is_empty());
        assert_eq!(expected.to_string(), "");
    }

    #[test]
    fn single_code_from_status() {
        let expected = ExpectedStatus::from(StatusCode::ACCEPTED);
        assert_eq!(expected.codes(), &[StatusCode::ACCEPTED]);
    }
}
