//! Client routes, their pages and the navigation menu

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Home,
    About,
    Services,
    Contact,
    ContactForm,
}

/// Static content of a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub heading: &'static str,
    pub body: Option<&'static str>,
    pub link: Option<PageLink>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLink {
    pub text: &'static str,
    pub to: Route,
}

impl Route {
    pub const ALL: [Route; 6] = [
        Route::Login,
        Route::Home,
        Route::About,
        Route::Services,
        Route::Contact,
        Route::ContactForm,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Home => "/",
            Route::About => "/about",
            Route::Services => "/services",
            Route::Contact => "/contact",
            Route::ContactForm => "/contact/form",
        }
    }

    /// Parses a path, ignoring any query or fragment and one trailing slash.
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = match path.strip_suffix('/') {
            Some(trimmed) if !trimmed.is_empty() => trimmed,
            _ => path,
        };
        Self::ALL.into_iter().find(|route| route.path() == path)
    }

    /// Every view except the login form requires a session.
    pub fn is_protected(&self) -> bool {
        !matches!(self, Route::Login)
    }

    pub fn page(&self) -> Page {
        const WELCOME: &str = "Welcome to my website";

        match self {
            Route::Login => Page { heading: "Login", body: None, link: None },
            Route::Home => Page {
                heading: WELCOME,
                body: Some("This is the home page content"),
                link: Some(PageLink { text: "Contact Us", to: Route::Contact }),
            },
            Route::About => Page {
                heading: WELCOME,
                body: Some("This is the About page content"),
                link: None,
            },
            Route::Services => Page {
                heading: WELCOME,
                body: Some("This is the Services page content"),
                link: None,
            },
            Route::Contact => Page {
                heading: "Contact Us",
                body: Some("Feel free to reach out to us!"),
                link: Some(PageLink { text: "Fill out the contact form", to: Route::ContactForm }),
            },
            Route::ContactForm => Page { heading: "Contact Form", body: None, link: None },
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Entries of the navigation menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavLink {
    Home,
    About,
    Services,
    Contact,
}

impl NavLink {
    pub const ALL: [NavLink; 4] = [NavLink::Home, NavLink::About, NavLink::Services, NavLink::Contact];

    /// Label shown in the menu, also recorded as the current page.
    pub fn label(&self) -> &'static str {
        match self {
            NavLink::Home => "Home",
            NavLink::About => "About",
            NavLink::Services => "Services",
            NavLink::Contact => "Contact",
        }
    }

    pub fn route(&self) -> Route {
        match self {
            NavLink::Home => Route::Home,
            NavLink::About => Route::About,
            NavLink::Services => Route::Services,
            NavLink::Contact => Route::Contact,
        }
    }
}

impl FromStr for NavLink {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|link| link.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown navigation link: {}", s))
    }
}
