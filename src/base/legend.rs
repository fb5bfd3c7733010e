//! Terminal rendering of an expense pie chart as a legend: one row per wedge
//! with its color swatch, category, amount, share of the total and a bar
//! proportional to its total.

use crate::base;

pub struct Legend {
    charset: base::Charset,
    window: base::Window,
    pie: base::Pie,
    alignment_charlen: usize,
    max_barlen: usize,
}

#[derive(Debug, PartialEq)]
pub struct Config {
    pub charset: base::Charset,
    pub window: base::Window,
    pub palette: base::Palette,
    pub full_circle: base::FullCircle,
    pub term_width: usize,
    pub rl: base::Recordlist,
}

/// Width of a percentage such as ` 60.0%`.
const PERCENT_CHARLEN: usize = 6;

impl Config {
    pub fn to_pie(&self) -> base::Pie {
        let totals = base::aggregate::by_category(self.rl.iter(), self.window);
        base::Pie::new(&totals, &self.palette, self.full_circle)
    }

    pub fn to_legend(&self) -> Legend {
        let pie = self.to_pie();
        let alignment_charlen = pie
            .wedges
            .iter()
            .map(|w| base::util::aligned_charlen(w.category.label(), &w.total.to_string()))
            .max()
            .unwrap_or_default();
        let max_barlen = self
            .term_width
            .max(base::util::MIN_TERM_WIDTH)
            .saturating_sub(2) // swatch and space
            .saturating_sub(alignment_charlen)
            .saturating_sub(1)
            .saturating_sub(PERCENT_CHARLEN)
            .saturating_sub(1);
        Legend {
            charset: self.charset.clone(),
            window: self.window,
            pie,
            alignment_charlen,
            max_barlen,
        }
    }
}

impl Legend {
    pub fn pie(&self) -> &base::Pie {
        &self.pie
    }

    /// Bars are scaled so that the largest wedge, which is always first,
    /// spans `max_barlen`.
    fn barlen(&self, w: &base::Wedge) -> usize {
        let max_total = match self.pie.wedges.first() {
            Some(first) => first.total,
            None => return 0,
        };
        let x = w.total.ratio(max_total).unwrap_or_default() * (self.max_barlen as f64);
        self.max_barlen.min(x.round() as usize)
    }

    fn paint(&self, s: &str, w: &base::Wedge) -> String {
        match w.color.to_terminal() {
            Some(color) if self.charset.color => colored::Colorize::color(s, color).to_string(),
            _ => s.to_string(),
        }
    }

    fn draw(&self, f: &mut impl std::fmt::Write, w: &base::Wedge) -> std::fmt::Result {
        let swatch = self.paint(&self.charset.swatch.to_string(), w);
        let line = base::util::dashed_line(
            w.category.label(),
            &w.total.to_string(),
            self.charset.dash,
            self.alignment_charlen,
        );
        let percent = format!("{:>5.1}%", w.fraction * 100.0);
        write!(f, "{} {} {}", swatch, line, percent)?;
        let barlen = self.barlen(w);
        if barlen > 0 {
            let bars = self.charset.chart_bar.to_string().repeat(barlen);
            write!(f, " {}", self.paint(&bars, w))?;
        }
        writeln!(f)
    }
}

impl std::fmt::Display for Legend {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Expenses for {}: {}",
            self.window.label(),
            self.pie.grand_total
        )?;
        for w in &self.pie.wedges {
            self.draw(f, w)?;
        }
        Ok(())
    }
}
