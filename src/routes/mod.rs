// Route exports
pub mod commands;
pub mod guard;
pub mod render;

use crate::services::ApiClient;
use guard::{GuardOutcome, RouteGuard};

/// Pages reachable in the app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Search,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/",
            Route::Search => "/search",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.split(&['?', '#'][..]).next().unwrap_or(path);
        match path.trim_end_matches('/') {
            "" => Some(Route::Login),
            "/search" => Some(Route::Search),
            _ => None,
        }
    }

    pub fn requires_auth(&self) -> bool {
        matches!(self, Route::Search)
    }
}

/// Result of resolving a path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Render(Route),
    Placeholder,
    Redirect { to: Route, message: &'static str },
    NotFound,
}

/// Maps paths to pages, running the route guard in front of protected ones
pub struct Router {
    api: ApiClient,
}

impl Router {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn navigate(&self, path: &str) -> Navigation {
        let Some(route) = Route::from_path(path) else {
            tracing::warn!("No route for {}", path);
            return Navigation::NotFound;
        };

        if !route.requires_auth() {
            return Navigation::Render(route);
        }

        let mut guard = RouteGuard::new();
        guard.check(&self.api).await;
        match guard.outcome() {
            GuardOutcome::Render => Navigation::Render(route),
            GuardOutcome::Placeholder => Navigation::Placeholder,
            GuardOutcome::Redirect { to, message } => Navigation::Redirect { to, message },
        }
    }
}
