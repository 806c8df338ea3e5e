pub mod challenge;

// Re-export use cases
pub use challenge::{
    AddTxtRecordUseCase, CleanupOutcome, Dns01Authenticator, RemoveTxtRecordUseCase,
};
