//! Pie/ring chart geometry derived from per-category totals.
//!
//! Wedges are laid out in descending order of total, ties broken by category
//! name ascending, so that colors and offsets are reproducible between
//! renders. Each wedge's start offset is the sum of the spans before it, and
//! the spans add up to one full circle in the configured units.

use crate::base::Aggregate;
use crate::base::Category;
use crate::base::Cents;
use crate::base::Color;
use crate::base::Palette;

/// Length of a full circle in the units a renderer draws arcs with.
#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Serialize, serde::Deserialize)]
#[serde(tag = "unit", rename_all = "camelCase")]
pub enum FullCircle {
    /// Angles in radians, a full circle is `2π`.
    #[default]
    Radians,
    /// Angles in degrees, a full circle is `360`.
    Degrees,
    /// Stroke-dash lengths along a ring of the given radius, a full circle is
    /// `2π × radius`. The radius must be finite and positive.
    StrokeDash {
        #[serde(deserialize_with = "deserialize_radius")]
        radius: f64,
    },
}

fn deserialize_radius<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let radius = <f64 as serde::Deserialize>::deserialize(deserializer)?;
    if radius.is_finite() && radius > 0.0 {
        Ok(radius)
    } else {
        Err(serde::de::Error::custom(format!(
            "radius must be finite and positive, got {}",
            radius
        )))
    }
}

impl FullCircle {
    pub fn units(self) -> f64 {
        match self {
            FullCircle::Radians => std::f64::consts::TAU,
            FullCircle::Degrees => 360.0,
            FullCircle::StrokeDash { radius } => std::f64::consts::TAU * radius,
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Wedge {
    pub category: Category,
    #[serde(rename = "totalCents")]
    pub total: Cents,
    /// `total / grand_total`, in (0, 1].
    pub fraction: f64,
    pub start_offset: f64,
    pub span: f64,
    pub color: Color,
}

/// Wedges of one chart plus the total they were derived from. A chart with a
/// zero grand total has no wedges; renderers should show a "no data" state.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pie {
    pub wedges: Vec<Wedge>,
    #[serde(rename = "grandTotalCents")]
    pub grand_total: Cents,
    pub full_circle: f64,
}

impl Pie {
    pub fn new<K>(totals: &Aggregate<K, Cents>, palette: &Palette, full_circle: FullCircle) -> Self
    where
        K: Copy + Ord + Into<Category>,
    {
        let units = full_circle.units();
        let mut entries = totals
            .iter()
            .filter(|&(_, v)| v.is_positive())
            .collect::<Vec<_>>();
        let grand_total = entries.iter().map(|&(_, v)| v).sum::<Cents>();
        if !grand_total.is_positive() {
            return Self::empty(units);
        }
        entries.sort_unstable_by(|&(k1, v1), &(k2, v2)| v2.cmp(&v1).then_with(|| k1.cmp(&k2)));

        let grand = grand_total.as_f64();
        let mut offset = 0.0;
        let wedges = entries
            .into_iter()
            .enumerate()
            .map(|(i, (k, v))| {
                let span = v.as_f64() * units / grand;
                let wedge = Wedge {
                    category: k.into(),
                    total: v,
                    fraction: v.as_f64() / grand,
                    start_offset: offset,
                    span,
                    color: palette.get(i).clone(),
                };
                offset += span;
                wedge
            })
            .collect::<Vec<_>>();
        log::debug!(
            "built {} wedges over {} with grand total {}",
            wedges.len(),
            units,
            grand_total
        );
        Self {
            wedges,
            grand_total,
            full_circle: units,
        }
    }

    fn empty(full_circle: f64) -> Self {
        Self {
            wedges: Vec::new(),
            grand_total: Cents::ZERO,
            full_circle,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.wedges.is_empty()
    }
}
