//! CSV output for simulation results.
//!
//! Two tables, mirroring the reference output files:
//! - per-trial/per-state winners (`trial,state,winner`), trials numbered
//!   from 1
//! - per-trial national winners (`trial,winner`)
//!
//! Plain comma-joined rows over a `BufWriter`; parent directories are
//! created as needed.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::types::{SimulationSummary, StateRecord};

fn create_writer(path: &str) -> BufWriter<File> {
    if let Some(parent) = Path::new(path).parent() {
        let _ = fs::create_dir_all(parent);
    }
    BufWriter::new(File::create(path).expect("Failed to create results file"))
}

/// Write the full per-trial, per-state winner table.
///
/// `states` must be the table the summary was simulated against; rows are
/// emitted in trial order, states in input order within each trial.
pub fn save_state_winners(summary: &SimulationSummary, states: &[StateRecord], path: &str) {
    let mut f = create_writer(path);
    writeln!(f, "trial,state,winner").expect("Failed to write results file");
    for (i, trial) in summary.trials.iter().enumerate() {
        for (state, winner) in states.iter().zip(&trial.state_winners) {
            writeln!(f, "{},{},{}", i + 1, state.name, winner)
                .expect("Failed to write results file");
        }
    }
    f.flush().expect("Failed to write results file");
}

/// Write the per-trial national winner table.
pub fn save_national_winners(summary: &SimulationSummary, path: &str) {
    let mut f = create_writer(path);
    writeln!(f, "trial,winner").expect("Failed to write results file");
    for (i, winner) in summary.national_winners().enumerate() {
        writeln!(f, "{},{}", i + 1, winner).expect("Failed to write results file");
    }
    f.flush().expect("Failed to write results file");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Candidate, TrialResult};

    fn state(name: &str, ev: u32) -> StateRecord {
        StateRecord {
            name: name.to_string(),
            registered_voters: 1000,
            turnout_rate: 0.6,
            harris_share: 0.48,
            trump_share: 0.47,
            margin_of_error: 0.03,
            electoral_votes: ev,
        }
    }

    fn summary_fixture() -> (SimulationSummary, Vec<StateRecord>) {
        let states = vec![state("A", 19), state("B", 16)];
        let mut summary = SimulationSummary::default();
        summary.push(TrialResult {
            national_winner: Candidate::Harris,
            harris_electoral_votes: 35,
            trump_electoral_votes: 0,
            state_winners: vec![Candidate::Harris, Candidate::Harris],
        });
        summary.push(TrialResult {
            national_winner: Candidate::Trump,
            harris_electoral_votes: 16,
            trump_electoral_votes: 19,
            state_winners: vec![Candidate::Trump, Candidate::Harris],
        });
        (summary, states)
    }

    #[test]
    fn test_state_winner_table_layout() {
        let (summary, states) = summary_fixture();
        let dir = std::env::temp_dir().join("electionsim_test_state_winners");
        let path = dir.join("state_winners.csv");
        let path = path.to_str().unwrap().to_string();
        save_state_winners(&summary, &states, &path);

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "trial,state,winner");
        assert_eq!(lines[1], "1,A,Harris");
        assert_eq!(lines[2], "1,B,Harris");
        assert_eq!(lines[3], "2,A,Trump");
        assert_eq!(lines[4], "2,B,Harris");
        assert_eq!(lines.len(), 5);
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_national_winner_table_layout() {
        let (summary, _) = summary_fixture();
        let dir = std::env::temp_dir().join("electionsim_test_national_winners");
        let path = dir.join("national_winners.csv");
        let path = path.to_str().unwrap().to_string();
        save_national_winners(&summary, &path);

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines, vec!["trial,winner", "1,Harris", "2,Trump"]);
        let _ = fs::remove_dir_all(dir);
    }
}
