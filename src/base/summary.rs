use crate::base;

/// Income, expense and balance totals of one window.
pub struct Summary {
    charset: base::Charset,
    window: base::Window,
    income: base::Cents,
    expense: base::Cents,
    count: usize,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Config {
    pub charset: base::Charset,
    pub window: base::Window,
    pub rl: base::Recordlist,
}

impl Config {
    pub fn to_summary(&self) -> Summary {
        let records = self.rl.slice_in(self.window);
        let totals = base::aggregate::by_kind(records, self.window);
        Summary {
            charset: self.charset.clone(),
            window: self.window,
            income: totals.get(base::Kind::Income).unwrap_or_default(),
            expense: totals.get(base::Kind::Expense).unwrap_or_default(),
            count: records.len(),
        }
    }
}

impl Summary {
    pub fn income(&self) -> base::Cents {
        self.income
    }

    pub fn expense(&self) -> base::Cents {
        self.expense
    }

    /// Income minus expenses. May be negative.
    pub fn balance(&self) -> base::Cents {
        self.income - self.expense
    }

    pub fn count(&self) -> usize {
        self.count
    }

    fn rows(&self) -> [(&'static str, String, Option<colored::Color>); 4] {
        let balance_color = match self.balance().cmp(&base::Cents::ZERO) {
            std::cmp::Ordering::Less => Some(colored::Color::Red),
            std::cmp::Ordering::Greater => Some(colored::Color::Green),
            std::cmp::Ordering::Equal => None,
        };
        [
            (
                "Income",
                self.income.to_string_for_alignment(),
                Some(colored::Color::Green),
            ),
            (
                "Expenses",
                self.expense.to_string_for_alignment(),
                Some(colored::Color::Red),
            ),
            (
                "Balance",
                self.balance().to_string_for_alignment(),
                balance_color,
            ),
            ("Transactions", format!("{} ", self.count), None),
        ]
    }
}

impl std::fmt::Display for Summary {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Totals for {}:", self.window.label())?;
        let rows = self.rows();
        let alignment_charlen = rows
            .iter()
            .map(|(label, value, _)| base::util::aligned_charlen(label, value))
            .max()
            .unwrap_or_default();
        for (label, value, color) in rows {
            let line = base::util::dashed_line(label, &value, self.charset.dash, alignment_charlen);
            match color {
                Some(color) if self.charset.color => {
                    let (head, tail) = line.split_at(line.len() - value.len());
                    let tail = colored::Colorize::color(tail, color);
                    writeln!(f, "{}{}", head, tail.to_string().trim_end())?;
                }
                _ => writeln!(f, "{}", line.trim_end())?,
            }
        }
        Ok(())
    }
}
