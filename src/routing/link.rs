//! Language-aware link.
//!
//! A `LocalizedLink` is given a bare target and always resolves it through
//! [`translate`] for the active language. The rendered `href` and the path
//! navigated to on click come from the same function, so they cannot drift.

use std::fmt;

use html_escape::{encode_double_quoted_attribute, encode_text};
use tracing::debug;

use crate::i18n::Language;
use crate::routing::path::translate;
use crate::routing::store::PathProvider;

type NavigateCallback = Box<dyn Fn() + Send + Sync>;

/// An anchor whose destination follows the active language.
///
/// # Example
///
/// ```
/// use clinic_site::i18n::Language;
/// use clinic_site::routing::LocalizedLink;
///
/// let link = LocalizedLink::new("/randevu", "Randevu");
/// assert_eq!(link.href(Language::GEORGIAN), "/ka/randevu");
/// ```
pub struct LocalizedLink {
    /// Bare destination path.
    to: String,
    /// Link text.
    content: String,
    /// Additional CSS classes.
    class: Option<String>,
    /// Invoked after a click has navigated (e.g. to close a mobile menu).
    on_navigate: Option<NavigateCallback>,
}

impl LocalizedLink {
    pub fn new(to: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            content: content.into(),
            class: None,
            on_navigate: None,
        }
    }

    /// Sets the CSS class.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Sets a callback run after every click-triggered navigation.
    pub fn on_navigate(mut self, callback: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_navigate = Some(Box::new(callback));
        self
    }

    /// Returns the bare destination path.
    pub fn to(&self) -> &str {
        &self.to
    }

    /// Returns the content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Resolved destination for the given active language.
    ///
    /// Administrative targets come back unchanged.
    pub fn href(&self, active: Language) -> String {
        translate(&self.to, active)
    }

    /// Handle a click: navigate explicitly to the resolved destination, then
    /// run the callback. Returns the path navigated to.
    pub fn click<P: PathProvider>(&self, active: Language, paths: &mut P) -> String {
        let target = self.href(active);
        debug!(to = %self.to, target = %target, "Link activated");
        paths.navigate(&target);

        if let Some(callback) = &self.on_navigate {
            callback();
        }
        target
    }

    /// Render the anchor as HTML.
    ///
    /// `current_path` marks the link with `aria-current="page"` when it
    /// points at the page being shown.
    pub fn render(&self, active: Language, current_path: &str) -> String {
        let href = self.href(active);
        let mut html = format!("<a href=\"{}\"", encode_double_quoted_attribute(&href));

        if let Some(class) = &self.class {
            html.push_str(&format!(
                " class=\"{}\"",
                encode_double_quoted_attribute(class)
            ));
        }
        if href == current_path {
            html.push_str(" aria-current=\"page\"");
        }

        html.push('>');
        html.push_str(&encode_text(&self.content));
        html.push_str("</a>");
        html
    }
}

impl fmt::Debug for LocalizedLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocalizedLink")
            .field("to", &self.to)
            .field("content", &self.content)
            .field("class", &self.class)
            .field("on_navigate", &self.on_navigate.is_some())
            .finish()
    }
}
