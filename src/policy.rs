//! Cacheability policy
//!
//! Decides which tab titles are registered in the redirection cache. Titles
//! the policy rejects may open as many duplicate tabs as the host asks for;
//! titles it accepts get at most one live cache slot.

/// Decides whether a tab with the given title should be cached for
/// redirection instead of duplicating tabs.
pub trait CachePolicy {
    fn should_cache(&self, title: &str) -> bool;
}

/// Any plain predicate works as a policy.
impl<F> CachePolicy for F
where
    F: Fn(&str) -> bool,
{
    fn should_cache(&self, title: &str) -> bool {
        self(title)
    }
}

/// Marker-substring policy: a title is cacheable iff it contains any of the
/// configured marker substrings.
#[derive(Debug, Clone)]
pub struct MarkerPolicy {
    markers: Vec<String>,
}

impl MarkerPolicy {
    pub fn new(markers: Vec<String>) -> Self {
        Self { markers }
    }

    pub fn markers(&self) -> &[String] {
        &self.markers
    }
}

impl Default for MarkerPolicy {
    /// Error report and search result tabs are the singleton tabs that must
    /// not multiply per invocation.
    fn default() -> Self {
        Self::new(vec!["Error: ".to_string(), "Search ".to_string()])
    }
}

impl CachePolicy for MarkerPolicy {
    fn should_cache(&self, title: &str) -> bool {
        self.markers.iter().any(|m| title.contains(m.as_str()))
    }
}
