use crate::routes::Route;
use crate::services::ApiClient;

pub const SESSION_EXPIRED_MESSAGE: &str = "Your session expired. Please log in again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    Checking,
    Authenticated,
    Unauthenticated,
}

/// What the guarded route should show for the current auth state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardOutcome {
    Placeholder,
    Render,
    Redirect { to: Route, message: &'static str },
}

/// Gates a protected route behind one authentication probe
#[derive(Debug, Clone)]
pub struct RouteGuard {
    state: AuthState,
}

impl Default for RouteGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl RouteGuard {
    pub fn new() -> Self {
        Self {
            state: AuthState::Checking,
        }
    }

    pub fn state(&self) -> AuthState {
        self.state
    }

    /// Probe the service once; later calls return the settled state
    pub async fn check(&mut self, api: &ApiClient) -> AuthState {
        if self.state == AuthState::Checking {
            self.state = if api.check_auth().await {
                AuthState::Authenticated
            } else {
                AuthState::Unauthenticated
            };
            tracing::debug!("Route guard settled: {:?}", self.state);
        }
        self.state
    }

    pub fn outcome(&self) -> GuardOutcome {
        match self.state {
            AuthState::Checking => GuardOutcome::Placeholder,
            AuthState::Authenticated => GuardOutcome::Render,
            AuthState::Unauthenticated => GuardOutcome::Redirect {
                to: Route::Login,
                message: SESSION_EXPIRED_MESSAGE,
            },
        }
    }
}
