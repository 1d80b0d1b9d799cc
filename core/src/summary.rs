//! Run summaries: an insertion-ordered mapping from human-readable
//! label to a scalar value.
//!
//! Values keep their raw numeric form so callers (and tests) can compare
//! them exactly; formatting happens only on display — counts grouped
//! with thousands separators, rates to 3 decimal places.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum SummaryValue {
    Count(u64),
    Rate(f64),
    Label(String),
}

impl SummaryValue {
    pub fn as_count(&self) -> Option<u64> {
        match self {
            Self::Count(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_rate(&self) -> Option<f64> {
        match self {
            Self::Rate(r) => Some(*r),
            _ => None,
        }
    }

    pub fn as_label(&self) -> Option<&str> {
        match self {
            Self::Label(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for SummaryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count(n) => write!(f, "{}", group_thousands(*n)),
            Self::Rate(r) => write!(f, "{r:.3}"),
            Self::Label(s) => write!(f, "{s}"),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Summary {
    entries: Vec<(&'static str, SummaryValue)>,
}

impl Summary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, label: &'static str, value: SummaryValue) {
        self.entries.push((label, value));
    }

    pub fn get(&self, label: &str) -> Option<&SummaryValue> {
        self.entries
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, v)| v)
    }

    /// Labels in insertion order — the display order.
    pub fn labels(&self) -> Vec<&'static str> {
        self.entries.iter().map(|(l, _)| *l).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &SummaryValue)> {
        self.entries.iter().map(|(l, v)| (*l, v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// 1234567 -> "1,234,567"
fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
