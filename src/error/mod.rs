mod telex_error;

pub use telex_error::{TelexError, TelexResult};
