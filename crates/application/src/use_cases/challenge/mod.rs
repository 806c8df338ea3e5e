mod add_txt_record;
mod authenticator;
mod remove_txt_record;

pub use add_txt_record::AddTxtRecordUseCase;
pub use authenticator::{Dns01Authenticator, DEFAULT_CHALLENGE_TTL};
pub use remove_txt_record::{CleanupOutcome, RemoveTxtRecordUseCase};
