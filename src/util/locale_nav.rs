//! Locale-preserving navigation built on `leptos_router`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components never build localized URLs by hand. They ask a `LocaleRouter`
//! for the current locale, for an href, or to navigate; the router reads the
//! address bar each time so it always agrees with the URL.

#[cfg(test)]
#[path = "locale_nav_test.rs"]
mod locale_nav_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use super::locale::{Locale, locale_from_path, localized_path, replace_locale};

/// Caller-controlled navigation behaviour.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LocaleNavOptions {
    /// Replace the current history entry instead of pushing a new one.
    pub replace: bool,
}

/// Navigation helpers bound to a path reader and a navigate function.
#[derive(Clone)]
pub struct LocaleRouter<P, N> {
    current_path: P,
    navigate: N,
}

impl<P, N> LocaleRouter<P, N>
where
    P: Fn() -> String,
    N: Fn(&str, NavigateOptions),
{
    pub fn new(current_path: P, navigate: N) -> Self {
        Self { current_path, navigate }
    }

    pub fn current_locale(&self) -> Locale {
        locale_from_path(&(self.current_path)())
    }

    /// Localized href for an app-relative path.
    pub fn href(&self, path: &str) -> String {
        localized_path(self.current_locale(), path)
    }

    pub fn navigate(&self, path: &str, options: LocaleNavOptions) {
        let target = self.href(path);
        (self.navigate)(&target, NavigateOptions { replace: options.replace, ..NavigateOptions::default() });
    }

    /// Switch locale in place. Always replaces the history entry.
    pub fn change_locale(&self, locale: Locale) {
        let current = (self.current_path)();
        let target = replace_locale(&current, locale);
        if target == current {
            return;
        }
        (self.navigate)(&target, NavigateOptions { replace: true, ..NavigateOptions::default() });
    }
}

/// Join a pathname and a query string that may or may not carry its `?`.
#[must_use]
pub fn join_search(pathname: &str, search: &str) -> String {
    let search = search.trim_start_matches('?');
    if search.is_empty() {
        pathname.to_owned()
    } else {
        format!("{pathname}?{search}")
    }
}

/// Router for the current route tree. Must be called inside `<Router>`.
pub fn use_locale_router()
-> LocaleRouter<impl Fn() -> String + Clone + 'static, impl Fn(&str, NavigateOptions) + Clone + 'static> {
    let location = use_location();
    let navigate = use_navigate();
    LocaleRouter::new(move || join_search(&location.pathname.get(), &location.search.get()), navigate)
}

/// Reactive current locale. Must be called inside `<Router>`.
pub fn use_locale() -> Memo<Locale> {
    let location = use_location();
    Memo::new(move |_| locale_from_path(&location.pathname.get()))
}
