//! Category markers: one color or icon per distinct category value.
//!
//! Categories are numbered in the order they first appear in the dataset and
//! take `palette[n % palette.len()]`. Re-running on the same dataset always
//! gives the same assignment; a dataset whose rows start with another
//! category gives a different one.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::Dataset;

/// Row tints, pastel so the text stays readable.
pub const COLOR_PALETTE: [&str; 10] = [
    "#66c5cc", "#f6cf71", "#f89c74", "#dcb0f2", "#87c55f",
    "#9eb9f3", "#fe88b1", "#c9db74", "#8be0a4", "#b497e7",
];

/// Badges prepended to the display name.
pub const ICON_PALETTE: [&str; 10] = ["💊", "🟢", "🔵", "🟣", "🟠", "🟡", "🔴", "🟤", "⚪", "⚫"];

/// What a marker looks like on screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerKind {
    #[default]
    Color,
    Icon,
}

impl std::str::FromStr for MarkerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "color" | "colour" => Ok(MarkerKind::Color),
            "icon" | "emoji" => Ok(MarkerKind::Icon),
            other => Err(other.to_string()),
        }
    }
}

/// A palette entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Marker {
    Color(String),
    Icon(String),
}

impl Marker {
    pub fn value(&self) -> &str {
        match self {
            Marker::Color(v) | Marker::Icon(v) => v,
        }
    }
}

/// Fixed, cyclically indexed list of markers.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    entries: Vec<Marker>,
}

impl Palette {
    pub fn colors() -> Self {
        Self {
            entries: COLOR_PALETTE.iter().map(|c| Marker::Color(c.to_string())).collect(),
        }
    }

    pub fn icons() -> Self {
        Self {
            entries: ICON_PALETTE.iter().map(|i| Marker::Icon(i.to_string())).collect(),
        }
    }

    pub fn for_kind(kind: MarkerKind) -> Self {
        match kind {
            MarkerKind::Color => Self::colors(),
            MarkerKind::Icon => Self::icons(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at `index`, wrapping around. `None` only for an empty palette.
    pub fn get(&self, index: usize) -> Option<&Marker> {
        if self.entries.is_empty() {
            return None;
        }
        self.entries.get(index % self.entries.len())
    }
}

/// One legend line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendEntry {
    pub category: String,
    pub marker: Marker,
}

/// Category → marker assignment for one dataset column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryStyles {
    column: String,
    legend: Vec<LegendEntry>,
    lookup: HashMap<String, usize>,
}

impl CategoryStyles {
    /// Assign markers to the distinct values of `column`.
    ///
    /// A missing column gives an empty legend; every row then has no marker.
    pub fn build(dataset: &Dataset, column: &str, palette: &Palette) -> Self {
        let mut styles = Self {
            column: column.to_string(),
            ..Self::default()
        };

        let Some(col) = dataset.column_index(column) else {
            return styles;
        };

        for (_, cells) in dataset.rows() {
            let value = &cells[col];
            if styles.lookup.contains_key(value) {
                continue;
            }
            let Some(marker) = palette.get(styles.legend.len()) else {
                break;
            };
            styles.lookup.insert(value.clone(), styles.legend.len());
            styles.legend.push(LegendEntry {
                category: value.clone(),
                marker: marker.clone(),
            });
        }

        styles
    }

    pub fn column(&self) -> &str {
        &self.column
    }

    /// Legend entries in first-seen order.
    pub fn legend(&self) -> &[LegendEntry] {
        &self.legend
    }

    pub fn marker_for(&self, category: &str) -> Option<&Marker> {
        self.lookup.get(category).map(|&i| &self.legend[i].marker)
    }

    /// Marker of each selected row, keyed by its category cell.
    pub fn row_markers(&self, dataset: &Dataset, rows: &[usize]) -> Vec<Option<Marker>> {
        rows.iter()
            .filter(|&&idx| idx < dataset.len())
            .map(|&idx| {
                dataset
                    .cell(idx, &self.column)
                    .and_then(|category| self.marker_for(category))
                    .cloned()
            })
            .collect()
    }
}

/// How the display-name cell is rewritten on output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DisplayName {
    /// Leave the name untouched.
    #[default]
    Plain,
    /// `"💊 Adderall"` using the row's icon marker.
    WithIcon,
    /// `"Adderall (amphetamine)"`.
    WithGeneric,
}

/// Rewrite a display name. Empty extras leave the name as is.
pub fn decorate_name(name: &str, mode: DisplayName, icon: Option<&Marker>, generic: &str) -> String {
    match mode {
        DisplayName::Plain => name.to_string(),
        DisplayName::WithIcon => match icon {
            Some(Marker::Icon(icon)) => format!("{} {}", icon, name),
            _ => name.to_string(),
        },
        DisplayName::WithGeneric if !generic.is_empty() => format!("{} ({})", name, generic),
        DisplayName::WithGeneric => name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset(categories: &[&str]) -> Dataset {
        Dataset::new(
            vec!["Medication Type".into(), "Brand Name".into()],
            categories
                .iter()
                .enumerate()
                .map(|(i, c)| vec![c.to_string(), format!("Brand {}", i)])
                .collect(),
        )
    }

    #[test]
    fn test_first_seen_order() {
        let ds = dataset(&["Stimulant", "Non-Stimulant", "Stimulant"]);
        let palette = Palette::colors();
        let styles = CategoryStyles::build(&ds, "Medication Type", &palette);

        assert_eq!(styles.marker_for("Stimulant"), palette.get(0));
        assert_eq!(styles.marker_for("Non-Stimulant"), palette.get(1));
        assert_eq!(styles.legend().len(), 2);
    }

    #[test]
    fn test_reordering_rows_flips_assignment() {
        let ds = dataset(&["Non-Stimulant", "Stimulant"]);
        let palette = Palette::colors();
        let styles = CategoryStyles::build(&ds, "Medication Type", &palette);

        assert_eq!(styles.marker_for("Non-Stimulant"), palette.get(0));
        assert_eq!(styles.marker_for("Stimulant"), palette.get(1));
    }

    #[test]
    fn test_deterministic() {
        let ds = dataset(&["A", "B", "C", "A"]);
        let a = CategoryStyles::build(&ds, "Medication Type", &Palette::icons());
        let b = CategoryStyles::build(&ds, "Medication Type", &Palette::icons());
        assert_eq!(a, b);
    }

    #[test]
    fn test_palette_wraps_after_ten() {
        let names: Vec<String> = (0..11).map(|i| format!("Category {}", i)).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let ds = dataset(&refs);
        let palette = Palette::colors();
        let styles = CategoryStyles::build(&ds, "Medication Type", &palette);

        let first_ten: std::collections::HashSet<_> =
            names[..10].iter().map(|n| styles.marker_for(n).unwrap().clone()).collect();
        assert_eq!(first_ten.len(), 10);
        assert_eq!(styles.marker_for("Category 10"), palette.get(0));
    }

    #[test]
    fn test_row_markers_follow_category() {
        let ds = dataset(&["Stimulant", "Non-Stimulant", "Stimulant"]);
        let styles = CategoryStyles::build(&ds, "Medication Type", &Palette::icons());
        let markers = styles.row_markers(&ds, &[2, 1]);

        assert_eq!(markers[0], Some(Marker::Icon("💊".into())));
        assert_eq!(markers[1], Some(Marker::Icon("🟢".into())));
    }

    #[test]
    fn test_missing_column_gives_no_markers() {
        let ds = dataset(&["Stimulant"]);
        let styles = CategoryStyles::build(&ds, "Class", &Palette::colors());

        assert!(styles.legend().is_empty());
        assert_eq!(styles.row_markers(&ds, &[0]), vec![None]);
    }

    #[test]
    fn test_decorate_name() {
        let icon = Marker::Icon("💊".into());
        let color = Marker::Color("#66c5cc".into());

        assert_eq!(decorate_name("Adderall", DisplayName::WithIcon, Some(&icon), ""), "💊 Adderall");
        assert_eq!(decorate_name("Adderall", DisplayName::WithIcon, Some(&color), ""), "Adderall");
        assert_eq!(
            decorate_name("Adderall", DisplayName::WithGeneric, None, "amphetamine"),
            "Adderall (amphetamine)"
        );
        assert_eq!(decorate_name("Adderall", DisplayName::WithGeneric, None, ""), "Adderall");
        assert_eq!(decorate_name("Adderall", DisplayName::Plain, Some(&icon), "x"), "Adderall");
    }

    #[test]
    fn test_marker_kind_from_str() {
        assert_eq!("ICON".parse::<MarkerKind>(), Ok(MarkerKind::Icon));
        assert!("stripes".parse::<MarkerKind>().is_err());
    }
}
