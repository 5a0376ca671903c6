use std::fmt;

/// A maximal run of one repeated character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Run {
    pub character: char,
    /// Number of consecutive occurrences, always at least 1
    pub count: u64,
}

impl Run {
    pub fn new(character: char, count: u64) -> Self {
        Self { character, count }
    }
}

impl fmt::Display for Run {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {})", self.character, self.count)
    }
}

/// Run-length encodes `text`.
///
/// Folds left to right carrying the open run; a change of character closes it
/// and the last run is flushed unconditionally. Empty text yields no runs.
pub fn encode(text: &str) -> Vec<Run> {
    let (mut runs, open) = text.chars().fold(
        (Vec::new(), None::<Run>),
        |(mut runs, open), c| match open {
            Some(run) if run.character == c => (runs, Some(Run::new(c, run.count + 1))),
            Some(run) => {
                runs.push(run);
                (runs, Some(Run::new(c, 1)))
            }
            None => (runs, Some(Run::new(c, 1))),
        },
    );
    runs.extend(open);
    runs
}

/// Iterator that expands a run sequence back into its characters.
pub struct RunExpander<'a> {
    runs: std::slice::Iter<'a, Run>,
    current: Option<char>,
    /// Characters left to emit from the current run
    remaining_run: u64,
}

impl<'a> RunExpander<'a> {
    pub fn new(runs: &'a [Run]) -> Self {
        Self {
            runs: runs.iter(),
            current: None,
            remaining_run: 0,
        }
    }
}

impl Iterator for RunExpander<'_> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        while self.remaining_run == 0 {
            let run = self.runs.next()?;
            self.current = Some(run.character);
            self.remaining_run = run.count;
        }
        self.remaining_run -= 1;
        self.current
    }
}

/// Rebuilds the text a run sequence was encoded from.
pub fn expand(runs: &[Run]) -> String {
    RunExpander::new(runs).collect()
}
