use super::types::{ConnectionFields, TcpState};
use std::collections::HashMap;

/// What a single row contributed to the tally.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Classified {
    Counted(TcpState),
    /// The table's own header row.
    Header,
    /// A state code outside the known table; ignored.
    Unrecognised,
}

/// Per-state connection counts, built in one pass over the table.
#[derive(Debug, Default)]
pub struct Tally {
    counts: HashMap<TcpState, u64>,
}

impl Tally {
    pub fn process(&mut self, row: &ConnectionFields) -> Classified {
        if row.is_header() {
            return Classified::Header;
        }

        match TcpState::from_code(&row.state) {
            Some(state) => {
                *self.counts.entry(state).or_default() += 1;
                Classified::Counted(state)
            }
            None => Classified::Unrecognised,
        }
    }

    /// Count for `state`, zero if it was never seen.
    pub fn count(&self, state: TcpState) -> u64 {
        self.counts.get(&state).copied().unwrap_or(0)
    }

    /// Observed states only, in code order.
    pub fn observed(&self) -> impl Iterator<Item = (TcpState, u64)> + '_ {
        TcpState::ALL
            .into_iter()
            .filter_map(|state| self.counts.get(&state).map(|&count| (state, count)))
    }

    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::{Classified, Tally};
    use crate::types::{ConnectionFields, TcpState};

    fn row(state: &str) -> ConnectionFields {
        ConnectionFields::with_state(state)
    }

    fn build_tally(states: &[&str]) -> Tally {
        let mut tally = Tally::default();

        for state in states {
            tally.process(&row(state));
        }

        tally
    }

    #[test]
    fn test_basic_example() {
        let tally = build_tally(&["st", "01", "01", "0A"]);

        assert_eq!(
            tally.observed().collect::<Vec<_>>(),
            vec![(TcpState::Established, 2), (TcpState::Listen, 1)]
        );
        assert_eq!(tally.count(TcpState::Established), 2);
        assert_eq!(tally.count(TcpState::Listen), 1);
        assert_eq!(tally.count(TcpState::Close), 0);
        assert_eq!(tally.total(), 3);
    }

    #[test]
    fn test_every_code_counts_once() {
        for state in TcpState::ALL {
            let mut tally = Tally::default();

            assert_eq!(
                tally.process(&row(state.code())),
                Classified::Counted(state)
            );
            assert_eq!(tally.observed().collect::<Vec<_>>(), vec![(state, 1)]);
        }
    }

    #[test]
    fn test_header_ignored() {
        let mut tally = Tally::default();

        assert_eq!(tally.process(&row("st")), Classified::Header);
        assert_eq!(tally.total(), 0);
        assert_eq!(tally.observed().count(), 0);
    }

    #[test]
    fn test_unrecognised_codes_ignored() {
        let mut tally = build_tally(&["01"]);

        for code in ["0C", "0a", "FF", "ESTABLISHED", "ST"] {
            assert_eq!(tally.process(&row(code)), Classified::Unrecognised);
        }

        assert_eq!(
            tally.observed().collect::<Vec<_>>(),
            vec![(TcpState::Established, 1)]
        );
    }

    #[test]
    fn test_observed_in_code_order() {
        let tally = build_tally(&["0B", "06", "00", "0A", "06"]);

        assert_eq!(
            tally.observed().collect::<Vec<_>>(),
            vec![
                (TcpState::ErrorStatus, 1),
                (TcpState::TimeWait, 2),
                (TcpState::Listen, 1),
                (TcpState::Closing, 1),
            ]
        );
    }
}
