// Hash routes (`#/login`, `#/dashboard`, ...)

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Login,
    Register,
    ForgotPassword,
    ResetPassword { token: String },
    Dashboard,
    Privacy,
    Terms,
    Security,
}

impl Route {
    /// Unknown or empty hashes land on the login screen
    pub fn from_hash(hash: &str) -> Self {
        let path = hash.trim_start_matches('#');
        let (path, query) = match path.split_once('?') {
            Some((p, q)) => (p, Some(q)),
            None => (path, None),
        };

        match path.trim_end_matches('/') {
            "/register" => Route::Register,
            "/forgot-password" => Route::ForgotPassword,
            "/reset-password" => Route::ResetPassword {
                token: query.and_then(token_param).unwrap_or_default(),
            },
            "/dashboard" => Route::Dashboard,
            "/privacy" => Route::Privacy,
            "/terms" => Route::Terms,
            "/security" => Route::Security,
            _ => Route::Login,
        }
    }

    pub fn to_hash(&self) -> String {
        match self {
            Route::Login => "#/login".to_string(),
            Route::Register => "#/register".to_string(),
            Route::ForgotPassword => "#/forgot-password".to_string(),
            Route::ResetPassword { token } if token.is_empty() => "#/reset-password".to_string(),
            Route::ResetPassword { token } => format!("#/reset-password?token={}", token),
            Route::Dashboard => "#/dashboard".to_string(),
            Route::Privacy => "#/privacy".to_string(),
            Route::Terms => "#/terms".to_string(),
            Route::Security => "#/security".to_string(),
        }
    }

    pub fn requires_auth(&self) -> bool {
        matches!(self, Route::Dashboard)
    }

    /// Guard: where a request for `self` actually ends up
    pub fn resolve(self, authenticated: bool) -> Self {
        match self {
            route if route.requires_auth() && !authenticated => Route::Login,
            Route::Login | Route::Register if authenticated => Route::Dashboard,
            route => route,
        }
    }
}

fn token_param(query: &str) -> Option<String> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "token")
        .map(|(_, value)| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hashes() {
        assert_eq!(Route::from_hash("#/dashboard"), Route::Dashboard);
        assert_eq!(Route::from_hash("#/terms/"), Route::Terms);
        assert_eq!(Route::from_hash(""), Route::Login);
        assert_eq!(Route::from_hash("#/nowhere"), Route::Login);
        assert_eq!(
            Route::from_hash("#/reset-password?lang=en&token=abc123"),
            Route::ResetPassword { token: "abc123".into() }
        );
    }

    #[test]
    fn test_hash_round_trip() {
        let routes = [
            Route::Login,
            Route::Register,
            Route::ForgotPassword,
            Route::ResetPassword { token: "xyz".into() },
            Route::Dashboard,
            Route::Privacy,
            Route::Terms,
            Route::Security,
        ];
        for route in routes {
            assert_eq!(Route::from_hash(&route.to_hash()), route);
        }
    }

    #[test]
    fn test_guard() {
        assert_eq!(Route::Dashboard.resolve(false), Route::Login);
        assert_eq!(Route::Dashboard.resolve(true), Route::Dashboard);
        assert_eq!(Route::Login.resolve(true), Route::Dashboard);
        assert_eq!(Route::Register.resolve(true), Route::Dashboard);
        assert_eq!(Route::Privacy.resolve(false), Route::Privacy);
        assert_eq!(Route::ForgotPassword.resolve(true), Route::ForgotPassword);
    }
}
