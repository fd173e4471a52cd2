// Results of the bucket metadata probes
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// Outcome of asking S3 whether a bucket has a given configuration.
///
/// The report only ever shows a `bool`, but we keep the reason for a
/// negative answer around for logging.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Capability {
    /// The configuration exists on the bucket.
    Enabled,

    /// S3 told us the configuration doesn't exist.
    NotConfigured,

    /// The check failed for some other reason (access denied, network, etc).
    Unknown(String),
}

impl Capability {
    /// Collapse the tri-state into the `bool` shown in the report.
    pub fn is_enabled(&self) -> bool {
        matches!(self, Self::Enabled)
    }
}

/// Outcome of the bucket website probe.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WebsiteCapability {
    /// Whether website hosting is configured.
    pub capability: Capability,

    /// Host that all requests are redirected to, if the website redirects.
    pub redirect_host: Option<String>,
}

impl WebsiteCapability {
    /// Website configuration present, with an optional redirect host.
    pub fn enabled(redirect_host: Option<String>) -> Self {
        Self {
            capability: Capability::Enabled,
            redirect_host,
        }
    }

    /// Website configuration absent or unreadable.
    ///
    /// The redirect host is only ever reported for enabled websites.
    pub fn disabled(capability: Capability) -> Self {
        Self {
            capability,
            redirect_host: None,
        }
    }

    /// Returns `(enabled, redirect_host)` as shown in the report.
    pub fn as_report(&self) -> (bool, Option<&str>) {
        if self.capability.is_enabled() {
            (true, self.redirect_host.as_deref())
        }
        else {
            (false, None)
        }
    }
}
