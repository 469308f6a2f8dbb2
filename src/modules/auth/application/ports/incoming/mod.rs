pub mod credential_gate;

pub use credential_gate::{AuthError, CredentialGate};
