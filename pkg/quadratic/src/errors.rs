pub use failure::err_msg;
pub use failure::format_err;
pub use failure::Error;
pub use failure::Fail;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Failures while reading coefficients from the user.
#[derive(Debug, Fail)]
pub enum InputError {
    /// The input stream closed before three numbers could be read.
    #[fail(display = "Input ended before three coefficients were read")]
    EndOfInput,

    #[fail(display = "Expected 3 coefficients but got {}", _0)]
    WrongCount(usize),

    #[fail(display = "Not a number: '{}'", _0)]
    NotANumber(String),
}
