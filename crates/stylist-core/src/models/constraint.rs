//! Closed constraint vocabulary.
//!
//! The source system passed free-form key/value filter dictionaries between
//! agents; here every extractable slot is a tagged variant with a typed
//! value, so routing logic can match exhaustively and typos cannot silently
//! drop a filter.

use serde::{Deserialize, Serialize};

/// Price band extracted from user text (저렴 / 보통 / 고급).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceBand {
    Budget,
    Mid,
    Premium,
}

impl PriceBand {
    /// Won boundaries as a half-open (min, max) pair for predicate
    /// translation. `None` means unbounded on that side.
    pub fn price_range(self) -> (Option<u32>, Option<u32>) {
        match self {
            PriceBand::Budget => (None, Some(crate::constants::PRICE_BUDGET_MAX_WON)),
            PriceBand::Mid => (
                Some(crate::constants::PRICE_BUDGET_MAX_WON),
                Some(crate::constants::PRICE_MID_MAX_WON),
            ),
            PriceBand::Premium => (Some(crate::constants::PRICE_MID_MAX_WON), None),
        }
    }

    /// Whether a price falls inside this band.
    pub fn contains(self, price: u32) -> bool {
        let (min, max) = self.price_range();
        min.map_or(true, |m| price >= m) && max.map_or(true, |m| price <= m)
    }
}

/// Comparison operator for numeric size bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CmpOp {
    Le,
    Ge,
    Eq,
}

/// Garment dimension a size bound applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeDimension {
    /// 총장
    Length,
    /// 가슴단면
    Chest,
    /// 어깨너비
    Shoulder,
}

/// A numeric measurement bound, e.g. "총장 65cm 이하".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizeBound {
    pub dimension: SizeDimension,
    pub op: CmpOp,
    pub cm: f64,
}

impl SizeBound {
    /// Whether a measured value satisfies this bound.
    pub fn matches(&self, value: f64) -> bool {
        match self.op {
            CmpOp::Le => value <= self.cm,
            CmpOp::Ge => value >= self.cm,
            CmpOp::Eq => (value - self.cm).abs() < f64::EPSILON,
        }
    }
}

/// What the user wants changed about a previous recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackSignal {
    Cheaper,
    DifferentStyle,
    BetterQuality,
    MoreTrendy,
}

/// One structured filter value extracted from user text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Constraint {
    Category(String),
    Style(String),
    Color(String),
    PriceBand(PriceBand),
    Brand(String),
    Size(SizeBound),
    Feedback(FeedbackSignal),
}

/// Discriminant for [`Constraint`], used for first-wins deduplication and
/// relaxation by kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstraintKind {
    Category,
    Style,
    Color,
    PriceBand,
    Brand,
    Size,
    Feedback,
}

impl Constraint {
    pub fn kind(&self) -> ConstraintKind {
        match self {
            Constraint::Category(_) => ConstraintKind::Category,
            Constraint::Style(_) => ConstraintKind::Style,
            Constraint::Color(_) => ConstraintKind::Color,
            Constraint::PriceBand(_) => ConstraintKind::PriceBand,
            Constraint::Brand(_) => ConstraintKind::Brand,
            Constraint::Size(_) => ConstraintKind::Size,
            Constraint::Feedback(_) => ConstraintKind::Feedback,
        }
    }

    /// Structured constraints translate to equality/range predicates on the
    /// relational store. Style is tag-like and feedback is a routing signal;
    /// neither counts as structured for strategy selection.
    pub fn is_structured(&self) -> bool {
        matches!(
            self,
            Constraint::Category(_)
                | Constraint::Color(_)
                | Constraint::PriceBand(_)
                | Constraint::Brand(_)
                | Constraint::Size(_)
        )
    }

    /// Tag-like constraints match against an item's tag set.
    pub fn is_tag_like(&self) -> bool {
        matches!(self, Constraint::Style(_))
    }
}

/// An ordered set of constraints, at most one per kind (except `Size`,
/// where one bound per dimension is kept). First extraction wins.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConstraintSet {
    entries: Vec<Constraint>,
}

impl ConstraintSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a constraint unless one of the same kind (and, for size
    /// bounds, the same dimension) is already present.
    pub fn insert(&mut self, constraint: Constraint) -> bool {
        let duplicate = self.entries.iter().any(|c| match (&constraint, c) {
            (Constraint::Size(a), Constraint::Size(b)) => a.dimension == b.dimension,
            (a, b) => a.kind() == b.kind(),
        });
        if duplicate {
            return false;
        }
        self.entries.push(constraint);
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = &Constraint> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn category(&self) -> Option<&str> {
        self.entries.iter().find_map(|c| match c {
            Constraint::Category(v) => Some(v.as_str()),
            _ => None,
        })
    }

    pub fn style(&self) -> Option<&str> {
        self.entries.iter().find_map(|c| match c {
            Constraint::Style(v) => Some(v.as_str()),
            _ => None,
        })
    }

    pub fn color(&self) -> Option<&str> {
        self.entries.iter().find_map(|c| match c {
            Constraint::Color(v) => Some(v.as_str()),
            _ => None,
        })
    }

    pub fn brand(&self) -> Option<&str> {
        self.entries.iter().find_map(|c| match c {
            Constraint::Brand(v) => Some(v.as_str()),
            _ => None,
        })
    }

    pub fn price_band(&self) -> Option<PriceBand> {
        self.entries.iter().find_map(|c| match c {
            Constraint::PriceBand(b) => Some(*b),
            _ => None,
        })
    }

    pub fn size_bounds(&self) -> impl Iterator<Item = &SizeBound> {
        self.entries.iter().filter_map(|c| match c {
            Constraint::Size(b) => Some(b),
            _ => None,
        })
    }

    pub fn feedback(&self) -> Option<FeedbackSignal> {
        self.entries.iter().find_map(|c| match c {
            Constraint::Feedback(s) => Some(*s),
            _ => None,
        })
    }

    /// Number of structured (predicate-translatable) constraints.
    pub fn structured_count(&self) -> usize {
        self.entries.iter().filter(|c| c.is_structured()).count()
    }

    pub fn has_structured(&self) -> bool {
        self.structured_count() > 0
    }

    pub fn has_tag_like(&self) -> bool {
        self.entries.iter().any(|c| c.is_tag_like())
    }

    /// Remove all constraints of the given kind, returning a new set.
    pub fn without(&self, kind: ConstraintKind) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .filter(|c| c.kind() != kind)
                .cloned()
                .collect(),
        }
    }

    /// Relaxation stage 3: drop the style/tag constraint.
    pub fn without_style(&self) -> Self {
        self.without(ConstraintKind::Style)
    }

    /// Relaxation stage 4: drop brand constraints.
    pub fn without_brand(&self) -> Self {
        self.without(ConstraintKind::Brand)
    }

    /// Relaxation stage 5: drop price-range constraints.
    pub fn without_price(&self) -> Self {
        self.without(ConstraintKind::PriceBand)
    }

    /// Relaxation stage 6: keep only the category constraint.
    pub fn category_only(&self) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .filter(|c| c.kind() == ConstraintKind::Category)
                .cloned()
                .collect(),
        }
    }

    /// Replace or insert a price band, used when feedback folds in a
    /// "cheaper" signal.
    pub fn set_price_band(&mut self, band: PriceBand) {
        self.entries
            .retain(|c| c.kind() != ConstraintKind::PriceBand);
        self.entries.push(Constraint::PriceBand(band));
    }
}

impl FromIterator<Constraint> for ConstraintSet {
    fn from_iter<T: IntoIterator<Item = Constraint>>(iter: T) -> Self {
        let mut set = Self::new();
        for c in iter {
            set.insert(c);
        }
        set
    }
}
