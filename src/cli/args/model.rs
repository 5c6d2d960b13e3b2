//! Data structures for command-line arguments.

use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

use clap;
use bionic::Lockup;
use serde_json;


/// Structure to hold options received from the command line.
#[derive(Clone, Debug, PartialEq)]
pub struct Options {
    /// Verbosity of the logging output.
    ///
    /// Corresponds to the number of times the -v flag has been passed.
    /// If -q has been used instead, this will be negative.
    pub verbosity: isize,

    /// The lockup to render.
    pub lockup: Lockup,
    /// Directory to load fonts from.
    pub font_dir: PathBuf,
    /// Path to write the finished image to.
    ///
    /// If absent, a timestamped file name in the current directory is used.
    pub output_path: Option<PathBuf>,
}

#[allow(dead_code)]
impl Options {
    #[inline]
    pub fn verbose(&self) -> bool { self.verbosity > 0 }
    #[inline]
    pub fn quiet(&self) -> bool { self.verbosity < 0 }
}


macro_attr! {
    /// Error that can occur while parsing of command line arguments.
    #[derive(Debug, EnumFromInner!)]
    pub enum ArgsError {
        /// General error when parsing the arguments.
        Parse(clap::Error),
        /// Lockup --json parsing error.
        Json(serde_json::Error),
        /// Error while reading the --json input.
        Io(io::Error),
        /// Invalid value of a numeric flag.
        Value(ValueError),
    }
}

impl Error for ArgsError {
    fn description(&self) -> &str { "command line argument error" }
    fn cause(&self) -> Option<&Error> {
        match *self {
            ArgsError::Parse(ref e) => Some(e),
            ArgsError::Json(ref e) => Some(e),
            ArgsError::Io(ref e) => Some(e),
            ArgsError::Value(ref e) => Some(e),
        }
    }
}

impl fmt::Display for ArgsError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ArgsError::Parse(ref e) => write!(fmt, "invalid arguments: {}", e),
            ArgsError::Json(ref e) => write!(fmt, "lockup JSON error: {}", e),
            ArgsError::Io(ref e) => write!(fmt, "cannot read lockup JSON: {}", e),
            ArgsError::Value(ref e) => write!(fmt, "{}", e),
        }
    }
}


/// Error for a flag whose value failed to parse.
#[derive(Debug)]
pub struct ValueError {
    pub flag: &'static str,
    pub value: String,
}

impl Error for ValueError {
    fn description(&self) -> &str { "invalid flag value" }
}

impl fmt::Display for ValueError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "invalid value for --{}: {:?}", self.flag, self.value)
    }
}
