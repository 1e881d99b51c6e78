mod basic_auth;
pub use basic_auth::{
    evaluate, AuthChallenge, AuthResult, AuthenticatedUser, BasicAuthCredentials, BasicAuthError,
};
