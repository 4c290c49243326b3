/// A single ASCII digit found in a line, with its byte offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitOccurrence {
    character: char,
    index: usize,
}

impl DigitOccurrence {
    /// Returns `None` unless `character` is one of '0'..='9'.
    pub fn new(character: char, index: usize) -> Option<Self> {
        character
            .is_ascii_digit()
            .then_some(Self { character, index })
    }

    pub fn character(&self) -> char {
        self.character
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn digit_value(&self) -> u32 {
        u32::from(self.character as u8 - b'0')
    }
}

/// The digits kept from one calibration line: nothing, a lone digit, or the
/// first and last digits in line order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineResult {
    Empty,
    Single(DigitOccurrence),
    Pair {
        first: DigitOccurrence,
        last: DigitOccurrence,
    },
}

impl LineResult {
    pub fn value(&self) -> u32 {
        match self {
            LineResult::Empty => 0,
            LineResult::Single(d) => 10 * d.digit_value() + d.digit_value(),
            LineResult::Pair { first, last } => 10 * first.digit_value() + last.digit_value(),
        }
    }

    /// The kept digits in line order.
    pub fn occurrences(&self) -> impl Iterator<Item = DigitOccurrence> {
        let (first, last) = match *self {
            LineResult::Empty => (None, None),
            LineResult::Single(d) => (Some(d), None),
            LineResult::Pair { first, last } => (Some(first), Some(last)),
        };
        first.into_iter().chain(last)
    }

    pub fn len(&self) -> usize {
        match self {
            LineResult::Empty => 0,
            LineResult::Single(_) => 1,
            LineResult::Pair { .. } => 2,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, LineResult::Empty)
    }
}

/// Per-line results in input order. Append-only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalibrationSet {
    lines: Vec<LineResult>,
}

impl CalibrationSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, result: LineResult) {
        self.lines.push(result);
    }

    /// Value of every line, in append order.
    pub fn values(&self) -> Vec<u32> {
        self.lines.iter().map(LineResult::value).collect()
    }

    pub fn total_sum(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.value())).sum()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LineResult> {
        self.lines.iter()
    }
}

impl Extend<LineResult> for CalibrationSet {
    fn extend<I: IntoIterator<Item = LineResult>>(&mut self, iter: I) {
        self.lines.extend(iter);
    }
}

impl FromIterator<LineResult> for CalibrationSet {
    fn from_iter<I: IntoIterator<Item = LineResult>>(iter: I) -> Self {
        Self {
            lines: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a CalibrationSet {
    type Item = &'a LineResult;
    type IntoIter = std::slice::Iter<'a, LineResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

/// Outcome of a full calibration run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalibrationReport {
    pub set: CalibrationSet,
    pub lines_read: usize,
    /// 1-based numbers of lines that had no digit and contributed 0.
    pub skipped_lines: Vec<usize>,
}

impl CalibrationReport {
    pub fn total(&self) -> u64 {
        self.set.total_sum()
    }
}
