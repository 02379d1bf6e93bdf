//! Request and response payloads for link operations

use serde::{Deserialize, Serialize};

use crate::errors::{CartevvError, Result};

/// Body accepted by the resolve and expand endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LinkRequest {
    /// Link as typed by the user, possibly without a scheme.
    #[serde(default)]
    pub url: Option<String>,
}

impl LinkRequest {
    /// The trimmed link, or `InvalidInput` when absent or blank.
    pub fn link(&self) -> Result<&str> {
        self.url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .ok_or_else(|| CartevvError::InvalidInput("Missing url in body".into()))
    }
}

/// Final URL of an expanded short link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpandedLink {
    /// URL reached after following every redirect.
    pub final_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_rejects_missing_and_blank() {
        assert!(matches!(LinkRequest::default().link(), Err(CartevvError::InvalidInput(_))));

        let blank = LinkRequest { url: Some("   ".into()) };
        assert!(matches!(blank.link(), Err(CartevvError::InvalidInput(_))));
    }

    #[test]
    fn link_is_trimmed() {
        let request = LinkRequest { url: Some("  maps.app.goo.gl/abc \n".into()) };
        assert_eq!(request.link().unwrap(), "maps.app.goo.gl/abc");
    }
}
