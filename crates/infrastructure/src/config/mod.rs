mod credentials_file;

pub use credentials_file::load_credentials;
