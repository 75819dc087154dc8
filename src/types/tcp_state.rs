use std::{error::Error, str::FromStr};

/// Connection states as numbered by the kernel's `tcp_states.h`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TcpState {
    ErrorStatus,
    Established,
    SynSent,
    SynRecv,
    FinWait1,
    FinWait2,
    TimeWait,
    Close,
    CloseWait,
    LastAck,
    Listen,
    Closing,
}

impl TcpState {
    /// Every state, in code order.
    pub const ALL: [TcpState; 12] = [
        Self::ErrorStatus,
        Self::Established,
        Self::SynSent,
        Self::SynRecv,
        Self::FinWait1,
        Self::FinWait2,
        Self::TimeWait,
        Self::Close,
        Self::CloseWait,
        Self::LastAck,
        Self::Listen,
        Self::Closing,
    ];

    /// Looks up the two hex digit code found in the `st` column. Matching is exact, so the
    /// lowercase `0a` is not `LISTEN`.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|state| state.code() == code)
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::ErrorStatus => "00",
            Self::Established => "01",
            Self::SynSent => "02",
            Self::SynRecv => "03",
            Self::FinWait1 => "04",
            Self::FinWait2 => "05",
            Self::TimeWait => "06",
            Self::Close => "07",
            Self::CloseWait => "08",
            Self::LastAck => "09",
            Self::Listen => "0A",
            Self::Closing => "0B",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::ErrorStatus => "ERROR_STATUS",
            Self::Established => "ESTABLISHED",
            Self::SynSent => "SYN_SENT",
            Self::SynRecv => "SYN_RECV",
            Self::FinWait1 => "FIN_WAIT1",
            Self::FinWait2 => "FIN_WAIT2",
            Self::TimeWait => "TIME_WAIT",
            Self::Close => "CLOSE",
            Self::CloseWait => "CLOSE_WAIT",
            Self::LastAck => "LAST_ACK",
            Self::Listen => "LISTEN",
            Self::Closing => "CLOSING",
        }
    }
}

impl std::fmt::Display for TcpState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for TcpState {
    type Err = UnknownStateName;

    /// Parses a state by its name (e.g. `ESTABLISHED`). Case-sensitive.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|state| state.name() == name)
            .ok_or_else(|| UnknownStateName(name.into()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnknownStateName(pub String);

impl std::fmt::Display for UnknownStateName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unrecognised tcp state name \"{}\"", self.0)
    }
}

impl Error for UnknownStateName {}
