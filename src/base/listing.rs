use crate::base;

/// Placeholder shown for transactions without a note.
pub const NO_DESCRIPTION: &str = "(no description)";

/// Flags one transaction of a listing as being removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Removal {
    pub date: base::Date,
    /// Zero-based index-in-date.
    pub iid0: usize,
    /// Whether the removal was carried out or is only a dry run.
    pub confirmed: bool,
}

/// Transactions grouped by date, one line per transaction:
///
/// ```text
/// 2015-03-30
///   1 -- +3,000.00  Salary: March paycheck
///   2 ----- -60.00  Food: (no description)
/// ```
#[derive(Debug, PartialEq, Eq)]
pub struct Config {
    pub charset: base::Charset,
    pub first_iid: usize,
    pub rl: base::Recordlist,
    pub removal: Option<Removal>,
}

impl Config {
    pub fn to_listing(&self) -> String {
        let alignment_charlen = self.get_alignment_charlen();
        let mut s = String::new();
        let mut prev_date = None;
        for (iid0, r) in self.rl.iter_with_iid() {
            if prev_date != Some(r.date()) {
                s.push_str(&r.date().to_string());
                s.push('\n');
                prev_date = Some(r.date());
            }
            s.push_str("  ");
            s.push_str(&self.line(r, iid0, alignment_charlen));
            s.push('\n');
        }
        s
    }

    fn signed_amount(r: &base::Record) -> String {
        format!("{}{}", r.kind().sign(), r.amount())
    }

    fn get_alignment_charlen(&self) -> usize {
        self.rl
            .iter_with_iid()
            .map(|(iid0, r)| {
                base::util::aligned_charlen(
                    &(iid0 + self.first_iid).to_string(),
                    &Self::signed_amount(r),
                )
            })
            .max()
            .unwrap_or_default()
    }

    fn line(&self, r: &base::Record, iid0: usize, alignment_charlen: usize) -> String {
        let iid = (iid0 + self.first_iid).to_string();
        let amount = Self::signed_amount(r);
        let mut s = base::util::dashed_line(&iid, &amount, self.charset.dash, alignment_charlen);
        if self.charset.color {
            let head_len = s.len() - amount.len();
            let color = match r.kind() {
                base::Kind::Income => colored::Color::Green,
                base::Kind::Expense => colored::Color::Red,
            };
            let tail = colored::Colorize::color(amount.as_str(), color).to_string();
            s.truncate(head_len);
            s.push_str(&tail);
        }
        s.push_str("  ");
        s.push_str(r.category().label());
        s.push_str(": ");
        if r.note().is_empty() {
            s.push_str(NO_DESCRIPTION);
        } else {
            s.push_str(r.note());
        }
        if let Some(removal) = self.removal {
            if removal.date == r.date() && removal.iid0 == iid0 {
                s.push_str(&self.removal_msg(removal.confirmed));
            }
        }
        s
    }

    fn removal_msg(&self, confirmed: bool) -> String {
        let msg = if confirmed {
            " <- [REMOVED]"
        } else {
            " <- [WOULD BE REMOVED]"
        };
        match (self.charset.color, confirmed) {
            (false, _) => msg.to_string(),
            (true, true) => colored::Colorize::red(msg).to_string(),
            (true, false) => colored::Colorize::yellow(msg).to_string(),
        }
    }
}
