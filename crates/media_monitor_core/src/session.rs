//! crates/media_monitor_core/src/session.rs
//!
//! The login session and the login form's validation rules.

/// Whether someone is signed in, and under which display name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Session {
    #[default]
    LoggedOut,
    LoggedIn { display_name: String },
}

impl Session {
    pub fn is_logged_in(&self) -> bool {
        matches!(self, Session::LoggedIn { .. })
    }

    pub fn display_name(&self) -> Option<&str> {
        match self {
            Session::LoggedIn { display_name } => Some(display_name),
            Session::LoggedOut => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Username,
    Password,
}

impl LoginField {
    pub fn as_str(self) -> &'static str {
        match self {
            LoginField::Username => "username",
            LoginField::Password => "password",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "username" => Some(LoginField::Username),
            "password" => Some(LoginField::Password),
            _ => None,
        }
    }
}

pub const USERNAME_REQUIRED: &str = "Username is required";
pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const CREDENTIALS_REJECTED: &str = "Invalid username or password";

/// Validation messages attached to the login form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoginErrors {
    pub username: Option<&'static str>,
    pub password: Option<&'static str>,
    /// Set when a credential verifier turned the attempt down.
    pub form: Option<&'static str>,
}

impl LoginErrors {
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of field-level errors (the form-level error is not counted).
    pub fn len(&self) -> usize {
        usize::from(self.username.is_some()) + usize::from(self.password.is_some())
    }

    pub fn clear(&mut self, field: LoginField) {
        match field {
            LoginField::Username => self.username = None,
            LoginField::Password => self.password = None,
        }
    }

    pub fn rejected() -> Self {
        Self {
            form: Some(CREDENTIALS_REJECTED),
            ..Self::default()
        }
    }
}

/// A username/password pair that passed form validation.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Checks that both fields contain something other than whitespace.
pub fn validate_login(username: &str, password: &str) -> Result<Credentials, LoginErrors> {
    let mut errors = LoginErrors::default();
    if username.trim().is_empty() {
        errors.username = Some(USERNAME_REQUIRED);
    }
    if password.trim().is_empty() {
        errors.password = Some(PASSWORD_REQUIRED);
    }
    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(Credentials {
        username: username.to_string(),
        password: password.to_string(),
    })
}

/// Up to two uppercase initials, one per word: "Sarah Johnson" -> "SJ".
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}
