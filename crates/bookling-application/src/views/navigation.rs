use std::fmt;
use std::str::FromStr;

use bookling_core::BooklingError;
use bookling_core::session::SessionState;

/// Screens of the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Login,
    Register,
    Profile,
    Books,
    Categories,
}

impl Route {
    pub const ALL: [Route; 6] = [
        Route::Home,
        Route::Login,
        Route::Register,
        Route::Profile,
        Route::Books,
        Route::Categories,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Login => "/login",
            Route::Register => "/register",
            Route::Profile => "/profile",
            Route::Books => "/books",
            Route::Categories => "/categories",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Bookling",
            Route::Login => "Sign in",
            Route::Register => "Register",
            Route::Profile => "Profile",
            Route::Books => "Books",
            Route::Categories => "Categories",
        }
    }

    /// Whether the screen only makes sense with a signed-in user.
    pub fn requires_session(&self) -> bool {
        matches!(self, Route::Profile)
    }
}

impl FromStr for Route {
    type Err = BooklingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let normalized = match trimmed.trim_end_matches('/') {
            "" => "/",
            other => other,
        };
        Route::ALL
            .into_iter()
            .find(|route| route.path() == normalized)
            .ok_or_else(|| BooklingError::invalid_input(format!("Unknown route '{}'", trimmed)))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// One entry of the header bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderItem {
    Link(Route),
    Logout,
}

impl HeaderItem {
    pub fn label(&self) -> &'static str {
        match self {
            HeaderItem::Link(route) => route.title(),
            HeaderItem::Logout => "Sign out",
        }
    }
}

/// The header bar shown on every screen.
pub struct Header;

impl Header {
    /// Entries for the given session state: sign-in and registration when
    /// anonymous, profile and sign-out when authenticated.
    pub fn items(state: &SessionState) -> Vec<HeaderItem> {
        let mut items = vec![
            HeaderItem::Link(Route::Home),
            HeaderItem::Link(Route::Books),
            HeaderItem::Link(Route::Categories),
        ];
        if state.is_authenticated() {
            items.push(HeaderItem::Link(Route::Profile));
            items.push(HeaderItem::Logout);
        } else {
            items.push(HeaderItem::Link(Route::Login));
            items.push(HeaderItem::Link(Route::Register));
        }
        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookling_core::user::User;

    #[test]
    fn test_route_parsing() {
        assert_eq!("/".parse::<Route>().unwrap(), Route::Home);
        assert_eq!("".parse::<Route>().unwrap(), Route::Home);
        assert_eq!("/books/".parse::<Route>().unwrap(), Route::Books);
        assert_eq!(" /profile ".parse::<Route>().unwrap(), Route::Profile);
        assert!("/admin".parse::<Route>().is_err());
    }

    #[test]
    fn test_paths_round_trip() {
        for route in Route::ALL {
            assert_eq!(route.path().parse::<Route>().unwrap(), route);
        }
    }

    #[test]
    fn test_header_for_anonymous() {
        let items = Header::items(&SessionState::Anonymous);
        assert!(items.contains(&HeaderItem::Link(Route::Login)));
        assert!(items.contains(&HeaderItem::Link(Route::Register)));
        assert!(!items.contains(&HeaderItem::Logout));
        assert!(!items.contains(&HeaderItem::Link(Route::Profile)));
    }

    #[test]
    fn test_header_for_authenticated() {
        let items = Header::items(&SessionState::Authenticated(User::new(1, "ann")));
        assert!(items.contains(&HeaderItem::Link(Route::Profile)));
        assert!(items.contains(&HeaderItem::Logout));
        assert!(!items.contains(&HeaderItem::Link(Route::Login)));
    }
}
