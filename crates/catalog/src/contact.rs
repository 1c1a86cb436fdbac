use serde::{Deserialize, Serialize};

/// An outbound contact link shown beneath the catalog.
///
/// Purely presentational: `icon` names a glyph and `style` is a class token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactLink {
    name: String,
    icon: String,
    url: String,
    #[serde(default)]
    style: String,
}

impl ContactLink {
    pub fn new(
        name: impl Into<String>,
        icon: impl Into<String>,
        url: impl Into<String>,
        style: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            icon: icon.into(),
            url: url.into(),
            style: style.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn icon(&self) -> &str {
        &self.icon
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn style(&self) -> &str {
        &self.style
    }
}
