use serde::de::IgnoredAny;

/// The leading columns of one row of the connection table. Only `state` is decoded; the
/// address columns are consumed positionally so the intermediate type lines up with the table
/// header (`sl local_address rem_address st ...`) without requiring them to be text.
#[derive(serde::Deserialize, Debug, Clone, PartialEq)]
pub struct ConnectionFields {
    pub slot: IgnoredAny,
    pub local_address: IgnoredAny,
    pub remote_address: IgnoredAny,
    pub state: String,
}

impl ConnectionFields {
    /// Token in the `st` column of the header row.
    pub const HEADER_STATE: &'static str = "st";

    #[cfg(test)]
    pub fn with_state(state: &str) -> Self {
        Self {
            slot: IgnoredAny,
            local_address: IgnoredAny,
            remote_address: IgnoredAny,
            state: state.into(),
        }
    }

    pub fn is_header(&self) -> bool {
        self.state == Self::HEADER_STATE
    }
}
