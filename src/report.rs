use super::{
    state::Tally,
    types::{TcpState, UnknownStateName},
};
use std::{error::Error, ffi::OsString};

/// What to print, chosen purely by how many arguments were given.
#[derive(Debug, PartialEq)]
pub enum Report {
    /// Count for one state, `0` if it never showed up.
    Single(TcpState),
    /// Every observed state as `NAME: count`.
    Dump,
}

impl Report {
    /// `args` excludes the program name. Only exactly one argument selects a single state;
    /// any other count falls back to a dump. An argument that isn't valid UTF-8 can't be a
    /// state name either.
    pub fn from_args<I: IntoIterator<Item = OsString>>(args: I) -> Result<Self, ReportError> {
        let mut args = args.into_iter();

        match (args.next(), args.next()) {
            (Some(arg), None) => {
                let name = arg.to_str().ok_or_else(|| {
                    ReportError::UnknownTcpParameter(arg.to_string_lossy().into())
                })?;
                Ok(Self::Single(name.parse()?))
            }
            _ => Ok(Self::Dump),
        }
    }

    pub fn write<Writer: std::io::Write>(
        &self,
        tally: &Tally,
        mut f: Writer,
    ) -> Result<(), std::io::Error> {
        match self {
            Self::Single(state) => writeln!(f, "{}", tally.count(*state))?,
            Self::Dump => {
                for (state, count) in tally.observed() {
                    writeln!(f, "{}: {}", state, count)?;
                }
            }
        }

        f.flush()
    }
}

#[derive(Debug, PartialEq)]
pub enum ReportError {
    UnknownTcpParameter(String),
}

impl std::fmt::Display for ReportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownTcpParameter(name) => write!(f, "unknown tcp parameter \"{}\"", name),
        }
    }
}

impl From<UnknownStateName> for ReportError {
    fn from(UnknownStateName(name): UnknownStateName) -> Self {
        Self::UnknownTcpParameter(name)
    }
}

impl Error for ReportError {}
