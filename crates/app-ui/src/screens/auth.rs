//! Login and signup screens

use app_core::auth::{AuthError, AuthProvider, AuthService, SignInError};

use crate::components::Notice;
use crate::navigation::{NavigationState, Result, Route};

/// Notice shown for a failed login
pub fn login_failure_notice(err: &AuthError) -> Notice {
    match err {
        AuthError::MissingFields => Notice::new("Error", "Please enter both email and password"),
        AuthError::SignIn(SignInError::UserNotFound) => {
            Notice::new("Account Not Found", "Please sign up first.")
        }
        AuthError::SignIn(SignInError::InvalidCredentials) => {
            Notice::new("Incorrect Password", "Please check your password.")
        }
        AuthError::SignIn(SignInError::Other(message)) => Notice::new("Login Failed", message),
        AuthError::SignUp(e) => Notice::new("Login Failed", e.to_string()),
    }
}

/// Notice shown for a failed signup
pub fn signup_failure_notice(err: &AuthError) -> Notice {
    match err {
        AuthError::MissingFields => Notice::new("Error", "Please fill out all fields."),
        AuthError::SignUp(e) => Notice::new("Signup Failed", e.to_string()),
        AuthError::SignIn(e) => Notice::new("Signup Failed", e.to_string()),
    }
}

/// Email/password login form
#[derive(Debug, Clone, Default)]
pub struct LoginScreen {
    /// Email field
    pub email: String,
    /// Password field
    pub password: String,
    notice: Option<Notice>,
}

impl LoginScreen {
    /// Empty form
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the email field
    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    /// Set the password field
    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }

    /// Submit the form
    ///
    /// On success the user lands on the main tabs. The resulting notice is
    /// returned and also kept until [`LoginScreen::clear_notice`].
    pub async fn submit<P: AuthProvider>(
        &mut self,
        auth: &AuthService<P>,
        nav: &mut NavigationState,
    ) -> Result<Notice> {
        let notice = match auth.login(&self.email, &self.password).await {
            Ok(_) => {
                nav.navigate(Route::MainApp)?;
                Notice::new("Success", "Login successful!")
            }
            Err(e) => login_failure_notice(&e),
        };
        self.notice = Some(notice.clone());
        Ok(notice)
    }

    /// "Sign up" link
    pub fn go_to_signup(&self, nav: &mut NavigationState) -> Result<()> {
        nav.navigate(Route::Signup)
    }

    /// Notice from the last submit
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Dismiss the notice
    pub fn clear_notice(&mut self) {
        self.notice = None;
    }
}

/// Account creation form
#[derive(Debug, Clone, Default)]
pub struct SignupScreen {
    /// Email field
    pub email: String,
    /// Password field
    pub password: String,
    notice: Option<Notice>,
}

impl SignupScreen {
    /// Empty form
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the email field
    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    /// Set the password field
    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }

    /// Submit the form; success returns to the login screen
    pub async fn submit<P: AuthProvider>(
        &mut self,
        auth: &AuthService<P>,
        nav: &mut NavigationState,
    ) -> Result<Notice> {
        let notice = match auth.signup(&self.email, &self.password).await {
            Ok(_) => {
                nav.navigate(Route::Login)?;
                Notice::new("Success", "Account created successfully!")
            }
            Err(e) => signup_failure_notice(&e),
        };
        self.notice = Some(notice.clone());
        Ok(notice)
    }

    /// "Log in" link
    pub fn go_to_login(&self, nav: &mut NavigationState) -> Result<()> {
        nav.navigate(Route::Login)
    }

    /// Notice from the last submit
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }
}
