//! Sign-in Stub
//!
//! Two-mode form (sign in / sign up) with no credential check. Submitting in
//! either mode moves the flow on to payment, forwarding whatever selection
//! it was handed. A real identity provider would replace this boundary.

use crate::selection::SelectionPayload;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

impl AuthMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::SignIn => AuthMode::SignUp,
            AuthMode::SignUp => AuthMode::SignIn,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            AuthMode::SignIn => "Welcome Back",
            AuthMode::SignUp => "Create Account",
        }
    }

    pub fn subtitle(&self) -> &'static str {
        match self {
            AuthMode::SignIn => "Enter your credentials to access your dashboard.",
            AuthMode::SignUp => "Start your financial journey today.",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            AuthMode::SignIn => "Sign In",
            AuthMode::SignUp => "Sign Up & Continue",
        }
    }

    /// Question before the mode-switch link
    pub fn switch_prompt(&self) -> &'static str {
        match self {
            AuthMode::SignIn => "Don't have an account?",
            AuthMode::SignUp => "Already have an account?",
        }
    }

    pub fn switch_label(&self) -> &'static str {
        match self {
            AuthMode::SignIn => "Sign Up free",
            AuthMode::SignUp => "Sign In",
        }
    }

    pub fn shows_full_name(&self) -> bool {
        matches!(self, AuthMode::SignUp)
    }

    pub fn shows_forgot_password(&self) -> bool {
        matches!(self, AuthMode::SignIn)
    }
}

/// Field values as typed; never inspected
#[derive(Clone, Default, PartialEq, Eq)]
pub struct AuthForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for AuthForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthForm")
            .field("full_name", &self.full_name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Result of submitting the stub: always go on, carrying the selection
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Proceed {
    pub selection: Option<SelectionPayload>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthStub {
    mode: AuthMode,
    form: AuthForm,
}

impl AuthStub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        tracing::debug!(mode = ?self.mode, "Auth mode toggled");
    }

    pub fn form(&self) -> &AuthForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut AuthForm {
        &mut self.form
    }

    /// Accept the form unconditionally and forward `selection` untouched
    pub fn submit(&self, selection: Option<SelectionPayload>) -> Proceed {
        tracing::info!(
            mode = ?self.mode,
            tier = selection.as_ref().map(|s| s.tier().id.as_str()),
            "Auth stub submitted"
        );
        Proceed { selection }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use finflex_core::{BillingFrequency, Catalog};

    #[test]
    fn test_starts_in_sign_in_and_toggles() {
        let mut auth = AuthStub::new();
        assert_eq!(auth.mode(), AuthMode::SignIn);

        for _ in 0..5 {
            auth.toggle_mode();
        }
        assert_eq!(auth.mode(), AuthMode::SignUp);
        assert!(auth.mode().shows_full_name());
        assert!(!auth.mode().shows_forgot_password());
    }

    #[test]
    fn test_submit_ignores_field_contents() {
        let catalog = Catalog::finflex();
        let selection = SelectionPayload::new(catalog.find("teams").unwrap(), BillingFrequency::Yearly);

        let mut auth = AuthStub::new();
        let empty = auth.submit(Some(selection.clone()));
        assert_eq!(empty.selection.as_ref(), Some(&selection));

        auth.form_mut().email = "not an email".into();
        auth.form_mut().password = "x".into();
        auth.toggle_mode();
        let garbage = auth.submit(Some(selection.clone()));
        assert_eq!(garbage.selection, Some(selection));
    }

    #[test]
    fn test_submit_without_selection() {
        let auth = AuthStub::new();
        assert_eq!(auth.submit(None), Proceed { selection: None });
    }

    #[test]
    fn test_password_not_in_debug() {
        let mut auth = AuthStub::new();
        auth.form_mut().password = "hunter2".into();
        assert!(!format!("{auth:?}").contains("hunter2"));
    }

    #[test]
    fn test_mode_copy() {
        assert_eq!(AuthMode::SignIn.title(), "Welcome Back");
        assert_eq!(AuthMode::SignUp.submit_label(), "Sign Up & Continue");
        assert_eq!(AuthMode::SignIn.switch_label(), "Sign Up free");
    }
}
