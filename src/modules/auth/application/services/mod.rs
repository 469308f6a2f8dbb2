pub mod credential_gate_service;

pub use credential_gate_service::CredentialGateService;
