//! Chart series: duration range bars and the category hierarchy.

use serde::{Deserialize, Serialize};

use crate::models::Dataset;

/// One horizontal bar, from `low` to `low + span` hours.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DurationBar {
    pub brand_name: String,
    pub generic_name: String,
    pub category: String,
    /// Descriptor shown on hover, e.g. "8-12 hours".
    pub duration: String,
    pub low: f64,
    pub high: f64,
    pub span: f64,
    pub mechanism_of_action: String,
    pub common_side_effects: String,
}

/// Node of the category → generic → brand tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HierarchyNode {
    pub label: String,
    /// Hours; for inner nodes the sum over children.
    pub value: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<HierarchyNode>,
}

impl HierarchyNode {
    fn branch(label: &str) -> Self {
        Self {
            label: label.to_string(),
            value: 0.0,
            children: Vec::new(),
        }
    }

    fn child_mut(&mut self, label: &str) -> &mut HierarchyNode {
        let pos = match self.children.iter().position(|c| c.label == label) {
            Some(pos) => pos,
            None => {
                self.children.push(Self::branch(label));
                self.children.len() - 1
            }
        };
        &mut self.children[pos]
    }
}

/// Bars for the selected rows, skipping rows without a low bound.
///
/// The span comes from the `duration` column; when it is missing it is
/// `high - low`, and with no high bound the bar has zero length.
pub fn duration_bars(dataset: &Dataset, rows: &[usize]) -> Vec<DurationBar> {
    rows.iter()
        .filter_map(|&idx| dataset.medication(idx))
        .filter_map(|med| {
            let low = med.duration_low?;
            let high = med.duration_high.unwrap_or(low);
            let span = med.duration_span.unwrap_or((high - low).max(0.0));
            Some(DurationBar {
                brand_name: med.brand_name,
                generic_name: med.generic_name,
                category: med.medication_type,
                duration: med.duration,
                low,
                high,
                span,
                mechanism_of_action: med.mechanism_of_action,
                common_side_effects: med.common_side_effects,
            })
        })
        .collect()
}

/// Category → generic name → brand, valued by the low duration bound.
///
/// Rows without a low bound are left out. Siblings keep first-seen order.
pub fn hierarchy(dataset: &Dataset, rows: &[usize]) -> Vec<HierarchyNode> {
    let mut root = HierarchyNode::branch("");

    for med in rows.iter().filter_map(|&idx| dataset.medication(idx)) {
        let Some(hours) = med.duration_low else {
            continue;
        };

        let category = root.child_mut(&med.medication_type);
        category.value += hours;
        let generic = category.child_mut(&med.generic_name);
        generic.value += hours;
        generic.children.push(HierarchyNode {
            label: med.brand_name,
            value: hours,
            children: Vec::new(),
        });
    }

    root.children
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::columns;

    fn dataset() -> Dataset {
        let headers = [
            columns::MEDICATION_TYPE,
            columns::BRAND_NAME,
            columns::GENERIC_NAME,
            columns::DURATION,
            columns::DURATION_LOW,
            columns::DURATION_HIGH,
            columns::DURATION_SPAN,
            columns::MECHANISM,
            columns::SIDE_EFFECTS,
        ];
        let rows = [
            ["Stimulant", "Adderall", "amphetamine", "4-6 hours", "4", "6", "2", "Releases dopamine", "Insomnia"],
            ["Stimulant", "Adderall XR", "amphetamine", "10-12 hours", "10", "12", "", "Extended release", "Headache"],
            ["Non-Stimulant", "Strattera", "atomoxetine", "24 hours", "24", "", "", "NE reuptake inhibitor", "Nausea"],
            ["Stimulant", "Mystery", "unknown", "varies", "", "", "", "", ""],
        ];
        Dataset::new(
            headers.iter().map(|s| s.to_string()).collect(),
            rows.iter().map(|r| r.iter().map(|s| s.to_string()).collect()).collect(),
        )
    }

    #[test]
    fn test_duration_bars() {
        let ds = dataset();
        let bars = duration_bars(&ds, &ds.all_indices());

        assert_eq!(bars.len(), 3);
        assert_eq!(bars[0].span, 2.0);
        assert_eq!(bars[1].span, 2.0);
        assert_eq!(bars[2].high, 24.0);
        assert_eq!(bars[2].span, 0.0);
        assert_eq!(bars[2].category, "Non-Stimulant");
    }

    #[test]
    fn test_bars_carry_hover_details() {
        let ds = dataset();
        let bars = duration_bars(&ds, &[2]);

        assert_eq!(bars[0].generic_name, "atomoxetine");
        assert_eq!(bars[0].duration, "24 hours");
        assert_eq!(bars[0].mechanism_of_action, "NE reuptake inhibitor");
        assert_eq!(bars[0].common_side_effects, "Nausea");
    }

    #[test]
    fn test_hierarchy_sums() {
        let ds = dataset();
        let tree = hierarchy(&ds, &ds.all_indices());

        assert_eq!(tree.len(), 2);
        assert_eq!(tree[0].label, "Stimulant");
        assert_eq!(tree[0].value, 14.0);
        assert_eq!(tree[0].children.len(), 1);
        assert_eq!(tree[0].children[0].children.len(), 2);
        assert_eq!(tree[1].label, "Non-Stimulant");
        assert_eq!(tree[1].children[0].children[0].label, "Strattera");
    }

    #[test]
    fn test_hierarchy_respects_row_selection() {
        let ds = dataset();
        let tree = hierarchy(&ds, &[2]);
        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].value, 24.0);
    }
}
