mod fingerprint;
mod name_matcher;
mod path_validator;

pub use fingerprint::{MIN_FILE_SIZE, SAMPLE_WINDOW, file_fingerprint};
pub use name_matcher::{find_lowres_file, lowres_candidates};
pub use path_validator::{ensure_directory_exists, validate_directory_exists};
