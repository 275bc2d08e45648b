use std::fmt;

pub const APP_NAME: &str = "Profit Analytics";
pub const APP_TAGLINE: &str = "Seller breakeven & listing price planner";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const GIT_TAG: Option<&str> = option_env!("GIT_TAG");
pub const GIT_SHA: Option<&str> = option_env!("GIT_SHA");

/// Build identity shown in the footer and written to the log on start-up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BuildInfo {
    pub tag: Option<&'static str>,
    pub version: &'static str,
    pub sha: Option<&'static str>,
}

impl BuildInfo {
    pub const fn current() -> Self {
        Self {
            tag: GIT_TAG,
            version: APP_VERSION,
            sha: GIT_SHA,
        }
    }

    /// Prefers the release tag; falls back to the crate version.
    pub fn label(&self) -> String {
        match self.tag {
            Some(tag) => tag.to_string(),
            None => format!("v{}", self.version),
        }
    }
}

impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.sha {
            Some(sha) => write!(f, "{} ({sha})", self.label()),
            None => write!(f, "{}", self.label()),
        }
    }
}

pub fn version_label() -> String {
    BuildInfo::current().label()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_prefers_tag() {
        let info = BuildInfo {
            tag: Some("v2.1.0"),
            version: "1.0.0",
            sha: Some("abc1234"),
        };
        assert_eq!(info.label(), "v2.1.0");
        assert_eq!(info.to_string(), "v2.1.0 (abc1234)");
    }

    #[test]
    fn label_falls_back_to_crate_version() {
        let info = BuildInfo {
            tag: None,
            version: "1.0.0",
            sha: None,
        };
        assert_eq!(info.label(), "v1.0.0");
        assert_eq!(info.to_string(), "v1.0.0");
    }
}
