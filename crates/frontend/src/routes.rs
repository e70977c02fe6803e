//! Declarative route table
//!
//! Maps navigation paths to deferred view constructors. Entries are tried
//! in declaration order and the first match wins; the wildcard entry
//! matches any path and redirects to the root. Resolution is a pure
//! function of the current path and the static entry sequence.

use std::sync::Arc;
use tracing::debug;

/// Pattern that matches any path
pub const WILDCARD: &str = "*";

/// Root path of the application
pub const ROOT: &str = "/";

/// Deferred view constructor, invoked only when its entry wins
pub type ViewFactory<V> = Arc<dyn Fn() -> V + Send + Sync>;

enum RouteTarget<V> {
    View(ViewFactory<V>),
    Redirect(String),
}

/// A single path-to-view mapping
pub struct RouteEntry<V> {
    pattern: String,
    target: RouteTarget<V>,
}

impl<V> RouteEntry<V> {
    /// Map `pattern` to a view built on demand
    pub fn view(pattern: impl Into<String>, factory: impl Fn() -> V + Send + Sync + 'static) -> Self {
        Self {
            pattern: pattern.into(),
            target: RouteTarget::View(Arc::new(factory)),
        }
    }

    /// Map `pattern` to a client-side redirect
    pub fn redirect(pattern: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            target: RouteTarget::Redirect(to.into()),
        }
    }

    /// Pattern this entry matches
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    fn matches(&self, path: &str) -> bool {
        self.pattern == WILDCARD || self.pattern == path
    }
}

/// Outcome of resolving a navigation path
#[derive(Debug, PartialEq, Eq)]
pub enum RouteOutcome<V> {
    /// Render the constructed view
    Render(V),
    /// Navigate to another path
    Redirect(String),
}

/// Ordered route table
pub struct RouteTable<V> {
    entries: Vec<RouteEntry<V>>,
}

impl<V> RouteTable<V> {
    /// Create a table from its entries, in matching order
    pub fn new(entries: Vec<RouteEntry<V>>) -> Self {
        Self { entries }
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve a navigation path; first matching entry wins
    ///
    /// A path no entry matches never errors: it resolves to a redirect to
    /// the root.
    pub fn resolve(&self, path: &str) -> RouteOutcome<V> {
        for entry in &self.entries {
            if entry.matches(path) {
                return match &entry.target {
                    RouteTarget::View(factory) => RouteOutcome::Render(factory()),
                    RouteTarget::Redirect(to) => {
                        debug!(path, to = to.as_str(), "redirecting");
                        RouteOutcome::Redirect(to.clone())
                    }
                };
            }
        }
        debug!(path, "no route matched, redirecting to root");
        RouteOutcome::Redirect(ROOT.to_string())
    }
}

/// The application route table
///
/// The root path renders the main view; any other path redirects back to
/// it.
pub fn app_routes<V>(main_view: impl Fn() -> V + Send + Sync + 'static) -> RouteTable<V> {
    RouteTable::new(vec![
        RouteEntry::view(ROOT, main_view),
        RouteEntry::redirect(WILDCARD, ROOT),
    ])
}
