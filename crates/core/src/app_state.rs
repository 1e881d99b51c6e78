use crate::authentication::BasicAuthCredentials;

pub struct AppState {
    /// The expected credential pair every request is validated against.
    /// Loaded from the yaml at startup and read-only afterwards, so the
    /// state can be shared across requests without any locking.
    pub credentials: BasicAuthCredentials,
}
