use crate::base;

/// Transactions ordered by date. Transactions sharing a date keep their
/// insertion order, which defines their index-in-date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Recordlist(Vec<base::Record>);

impl Recordlist {
    pub fn new() -> Self {
        Self::default()
    }

    fn from_vec(mut inner: Vec<base::Record>) -> Self {
        inner.sort_by_key(base::Record::date);
        Self(inner)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns the records dated within `window`.
    pub fn slice_in(&self, window: base::Window) -> &[base::Record] {
        self.slice_between(window.start(), window.end())
    }

    /// Returns the records dated `dt`.
    pub fn slice_on(&self, dt: base::Date) -> &[base::Record] {
        self.slice_between(dt, dt)
    }

    fn slice_between(&self, start: base::Date, end: base::Date) -> &[base::Record] {
        if start > end {
            return &[];
        }
        let i = self.0.partition_point(|r| r.date() < start);
        let j = i + self.0[i..].partition_point(|r| r.date() <= end);
        &self.0[i..j]
    }

    pub fn insert(&mut self, r: base::Record) {
        let i = self.0.partition_point(|x| x.date() <= r.date());
        self.0.insert(i, r);
    }

    fn index_of(&self, dt: base::Date, iid: usize) -> Option<usize> {
        let i = self.0.partition_point(|x| x.date() < dt);
        let j = i + self.0[i..].partition_point(|x| x.date() <= dt);
        let k = i.checked_add(iid)?;
        match k.cmp(&j) {
            std::cmp::Ordering::Less => Some(k),
            _ => None,
        }
    }

    /// Returns the record at the given date and index-in-date, or `None` if
    /// input is out of bounds.
    pub fn get(&self, dt: base::Date, iid: usize) -> Option<&base::Record> {
        let i = self.index_of(dt, iid)?;
        Some(&self.0[i])
    }

    /// Removes and returns the record at the given date and index-in-date. If
    /// input is out of bounds, returns `None` and leaves record list
    /// unmodified.
    pub fn remove(&mut self, dt: base::Date, iid: usize) -> Option<base::Record> {
        let i = self.index_of(dt, iid)?;
        Some(self.0.remove(i))
    }

    pub fn iter(&self) -> impl Iterator<Item = &base::Record> {
        self.0.iter()
    }

    pub fn iter_with_iid(&self) -> impl Iterator<Item = (usize, &base::Record)> {
        let mut iid = 0;
        self.iter().enumerate().map(move |(i, r)| {
            if i > 0 && r.date() > self.0[i - 1].date() {
                iid = 0;
            }
            let ret = (iid, r);
            iid += 1;
            ret
        })
    }
}

impl IntoIterator for Recordlist {
    type Item = base::Record;
    type IntoIter = std::vec::IntoIter<base::Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<base::Record> for Recordlist {
    fn from_iter<T: IntoIterator<Item = base::Record>>(iter: T) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<&'a base::Record> for Recordlist {
    fn from_iter<T: IntoIterator<Item = &'a base::Record>>(iter: T) -> Self {
        iter.into_iter().cloned().collect()
    }
}

impl std::fmt::Display for Recordlist {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for r in self.iter() {
            writeln!(f, "{}", r)?;
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("invalid record at line {line}")]
pub struct ParseError {
    line: usize,
    source: serde_json::Error,
}

impl std::str::FromStr for Recordlist {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.lines()
            .map(str::trim)
            .enumerate()
            .filter(|(_, x)| !x.is_empty())
            .map(|(i, x)| {
                x.parse::<base::Record>().map_err(|e| ParseError {
                    line: i + 1,
                    source: e,
                })
            })
            .collect::<Result<Self, _>>()
    }
}

impl TryFrom<&str> for Recordlist {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}
