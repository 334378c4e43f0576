//! Credential snapshot handed to header derivation.
//!
//! The core never reads or writes credential storage. Whoever owns the
//! keychain takes a snapshot and passes it in, so deriving headers stays a
//! pure function of its inputs.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Device-level credential obtained without a signed-in user.
    Anonymous,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthToken {
    pub token: String,
    pub kind: TokenKind,
}

impl AuthToken {
    pub fn user(token: &str) -> Self {
        Self {
            token: token.to_string(),
            kind: TokenKind::User,
        }
    }

    pub fn anonymous(token: &str) -> Self {
        Self {
            token: token.to_string(),
            kind: TokenKind::Anonymous,
        }
    }

    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

/// Read-only view of the credential available at derivation time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub token: Option<AuthToken>,
}

impl Credentials {
    pub fn none() -> Self {
        Self { token: None }
    }

    pub fn with_token(token: AuthToken) -> Self {
        Self { token: Some(token) }
    }
}

/// The two authentication booleans of an endpoint folded into one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthRequirement {
    /// Credential-acquisition calls; they go out without any token.
    None,
    /// A device-level anonymous token is enough.
    AnonymousAllowed,
    /// Only a signed-in user's token will do.
    UserRequired,
}

impl AuthRequirement {
    pub fn from_flags(requires_any_token: bool, supports_anonymous_token: bool) -> Self {
        match (requires_any_token, supports_anonymous_token) {
            (false, _) => AuthRequirement::None,
            (true, true) => AuthRequirement::AnonymousAllowed,
            (true, false) => AuthRequirement::UserRequired,
        }
    }

    /// Whether `credentials` are enough to issue the call.
    pub fn is_satisfied_by(self, credentials: &Credentials) -> bool {
        match (self, &credentials.token) {
            (AuthRequirement::None, _) => true,
            (_, None) => false,
            (AuthRequirement::AnonymousAllowed, Some(_)) => true,
            (AuthRequirement::UserRequired, Some(token)) => token.kind == TokenKind::User,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_prefixes_token() {
        assert_eq!(AuthToken::user("abc").bearer(), "Bearer abc");
    }

    #[test]
    fn anonymous_token_only_satisfies_anonymous_endpoints() {
        let anon = Credentials::with_token(AuthToken::anonymous("a"));
        assert!(AuthRequirement::AnonymousAllowed.is_satisfied_by(&anon));
        assert!(!AuthRequirement::UserRequired.is_satisfied_by(&anon));
        assert!(AuthRequirement::None.is_satisfied_by(&Credentials::none()));
        assert!(!AuthRequirement::AnonymousAllowed.is_satisfied_by(&Credentials::none()));
    }

    #[test]
    fn flags_fold_into_requirement() {
        assert_eq!(AuthRequirement::from_flags(false, false), AuthRequirement::None);
        assert_eq!(
            AuthRequirement::from_flags(true, true),
            AuthRequirement::AnonymousAllowed
        );
        assert_eq!(
            AuthRequirement::from_flags(true, false),
            AuthRequirement::UserRequired
        );
    }
}
