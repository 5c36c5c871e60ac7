//! Element ids and class names shared with the generated report pages.

use crate::error::ViewError;

/// Id of the `<img>` showing the relationships graph.
pub const RELATIONSHIPS_IMAGE: &str = "relationships";

/// A checkbox (or radio) on a report page, named by its element id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Toggle {
    Implied,
    OneDegree,
    TwoDegrees,
    ShowNonKeys,
    ShowComments,
    ShowLegend,
    ShowRelatedCols,
    ShowConstNames,
    RemoveImpliedOrphans,
}

impl Toggle {
    pub const ALL: [Toggle; 9] = [
        Toggle::Implied,
        Toggle::OneDegree,
        Toggle::TwoDegrees,
        Toggle::ShowNonKeys,
        Toggle::ShowComments,
        Toggle::ShowLegend,
        Toggle::ShowRelatedCols,
        Toggle::ShowConstNames,
        Toggle::RemoveImpliedOrphans,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Toggle::Implied => "implied",
            Toggle::OneDegree => "oneDegree",
            Toggle::TwoDegrees => "twoDegrees",
            Toggle::ShowNonKeys => "showNonKeys",
            Toggle::ShowComments => "showComments",
            Toggle::ShowLegend => "showLegend",
            Toggle::ShowRelatedCols => "showRelatedCols",
            Toggle::ShowConstNames => "showConstNames",
            Toggle::RemoveImpliedOrphans => "removeImpliedOrphans",
        }
    }

    pub fn from_id(id: &str) -> Result<Self, ViewError> {
        let id = id.strip_prefix('#').unwrap_or(id);
        Self::ALL
            .into_iter()
            .find(|t| t.id() == id)
            .ok_or_else(|| ViewError::UnknownToggle(id.to_string()))
    }
}

/// A set of annotations sharing a class whose visibility follows a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Group {
    ImpliedRelationship,
    Comment,
    Legend,
    RelatedKey,
    Constraint,
    Degrees,
    ImpliedNotOrphan,
}

impl Group {
    pub fn class(self) -> &'static str {
        match self {
            Group::ImpliedRelationship => "impliedRelationship",
            Group::Comment => "comment",
            Group::Legend => "legend",
            Group::RelatedKey => "relatedKey",
            Group::Constraint => "constraint",
            Group::Degrees => "degrees",
            Group::ImpliedNotOrphan => "impliedNotOrphan",
        }
    }

    /// CSS selector matching every member of the group.
    pub fn selector(self) -> String {
        format!(".{}", self.class())
    }
}

/// Groups shown while their toggle is checked.
pub const DIRECT_BINDINGS: [(Toggle, Group); 5] = [
    (Toggle::Implied, Group::ImpliedRelationship),
    (Toggle::ShowComments, Group::Comment),
    (Toggle::ShowLegend, Group::Legend),
    (Toggle::ShowRelatedCols, Group::RelatedKey),
    (Toggle::ShowConstNames, Group::Constraint),
];

/// Groups hidden while their toggle is checked.
pub const INVERSE_BINDINGS: [(Toggle, Group); 2] = [
    (Toggle::Implied, Group::Degrees),
    (Toggle::RemoveImpliedOrphans, Group::ImpliedNotOrphan),
];

/// Toggles whose clicks may change the relationships image.
pub const IMAGE_TOGGLES: [Toggle; 4] = [
    Toggle::Implied,
    Toggle::OneDegree,
    Toggle::TwoDegrees,
    Toggle::ShowNonKeys,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_ids_round_trip() {
        for toggle in Toggle::ALL {
            assert_eq!(Toggle::from_id(toggle.id()).unwrap(), toggle);
        }
    }

    #[test]
    fn test_toggle_from_selector() {
        assert_eq!(Toggle::from_id("#showLegend").unwrap(), Toggle::ShowLegend);
    }

    #[test]
    fn test_unknown_toggle() {
        let err = Toggle::from_id("compact").unwrap_err();
        assert_eq!(err.to_string(), "Unknown toggle: compact");
    }

    #[test]
    fn test_group_selector() {
        assert_eq!(Group::ImpliedNotOrphan.selector(), ".impliedNotOrphan");
    }
}
