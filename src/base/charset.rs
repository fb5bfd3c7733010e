#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Charset {
    pub dash: char,
    pub chart_bar: char,
    pub swatch: char,
    pub color: bool,
}

impl Default for Charset {
    /// Only ASCII characters. No color.
    fn default() -> Self {
        Self {
            dash: '-',
            chart_bar: '+',
            swatch: '#',
            color: false,
        }
    }
}

impl Charset {
    pub fn with_unicode(self) -> Self {
        Self {
            dash: '\u{2500}',
            chart_bar: '\u{2588}',
            swatch: '\u{25cf}',
            ..self
        }
    }

    pub fn with_color(self) -> Self {
        Self {
            color: true,
            ..self
        }
    }
}
