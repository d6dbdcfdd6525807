//! Site routes
//!
//! A route is the page path, its query string and the locale it is shown
//! in. Switching locale keeps path and query; switching page keeps the
//! locale. Non-default locales are prefixed onto the href.

use crate::error::{RouteError, RouteResult};
use crate::i18n::LocaleTag;

/// Home page path
pub const HOME_PATH: &str = "/";

/// Blog listing path
pub const BLOG_PATH: &str = "/blog";

/// A page of the site in a given locale
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    path: String,
    query: Vec<(String, String)>,
    locale: LocaleTag,
}

impl Route {
    /// Parse `as_path` (`/blog?page=2`) for `locale`
    pub fn parse(as_path: &str, locale: LocaleTag) -> RouteResult<Self> {
        let as_path = as_path.trim();
        let (path, query) = match as_path.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (as_path, None),
        };

        if path.is_empty() {
            return Err(RouteError::Empty);
        }
        if !path.starts_with('/') {
            return Err(RouteError::NotAbsolute {
                path: path.to_string(),
            });
        }

        let mut pairs = Vec::new();
        for pair in query.unwrap_or_default().split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            if key.is_empty() {
                return Err(RouteError::MalformedQuery {
                    pair: pair.to_string(),
                });
            }
            pairs.push((key.to_string(), value.to_string()));
        }

        Ok(Self {
            path: path.to_string(),
            query: pairs,
            locale,
        })
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn locale(&self) -> &LocaleTag {
        &self.locale
    }

    /// Path and query, without locale prefix
    pub fn as_path(&self) -> String {
        if self.query.is_empty() {
            return self.path.clone();
        }
        let query = self
            .query
            .iter()
            .map(|(k, v)| if v.is_empty() { k.clone() } else { format!("{}={}", k, v) })
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{}", self.path, query)
    }

    /// Link target, prefixed unless shown in the default locale
    pub fn href(&self, default_locale: &LocaleTag) -> String {
        let as_path = self.as_path();
        if &self.locale == default_locale {
            return as_path;
        }
        if self.path == HOME_PATH {
            // "/fr" rather than "/fr/"
            format!("/{}{}", self.locale, &as_path[1..])
        } else {
            format!("/{}{}", self.locale, as_path)
        }
    }

    /// Same page and query in another locale
    pub fn with_locale(&self, locale: LocaleTag) -> Self {
        Self {
            path: self.path.clone(),
            query: self.query.clone(),
            locale,
        }
    }

    /// Another page in the same locale
    pub fn with_path(&self, as_path: &str) -> RouteResult<Self> {
        Self::parse(as_path, self.locale.clone())
    }

    /// Whether this is the blog listing or one of its posts
    pub fn is_blog(&self) -> bool {
        self.path == BLOG_PATH || self.path.starts_with("/blog/")
    }
}
