pub mod credentials;

pub use credentials::{AcceptAnyCredentials, Argon2PasswordVerifier};
