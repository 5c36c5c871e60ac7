use std::path::Path;

use crate::error::ViewError;
use crate::markup::Toggle;

/// Page context: the table a page describes, or none for the summary page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub table: Option<String>,
}

impl ViewState {
    pub fn table(name: impl Into<String>) -> Self {
        Self::from(Some(name.into()))
    }

    pub fn summary() -> Self {
        Self { table: None }
    }

    /// The table name, with an empty name meaning the summary page.
    pub fn table_name(&self) -> Option<&str> {
        self.table.as_deref().filter(|t| !t.is_empty())
    }

    /// Every graph this page can ask for.
    pub fn graphs(&self) -> Vec<GraphSelection> {
        let kinds: &[RelationshipGraph] = match self.table_name() {
            Some(_) => &RelationshipGraph::ALL_TABLE,
            None => &RelationshipGraph::ALL_SUMMARY,
        };
        kinds.iter().map(|k| k.selection(self)).collect()
    }

    /// Graphs of this page with no image under `page_dir`, the directory
    /// holding the page itself.
    pub fn missing_graphs(&self, page_dir: &Path) -> Vec<GraphSelection> {
        self.graphs()
            .into_iter()
            .filter(|g| !page_dir.join(&g.src).is_file())
            .collect()
    }

    pub fn select(&self, toggles: ToggleState) -> GraphSelection {
        RelationshipGraph::select(self, toggles).selection(self)
    }
}

impl From<Option<String>> for ViewState {
    fn from(table: Option<String>) -> Self {
        Self {
            table: table.filter(|t| !t.is_empty()),
        }
    }
}

/// Checkbox states consulted when picking the relationships graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToggleState {
    pub implied: bool,
    /// Only meaningful on table pages.
    pub one_degree: bool,
    /// Only meaningful on the summary page.
    pub show_non_keys: bool,
}

impl ToggleState {
    /// Mark the checkbox with element id `id` as checked.
    /// Toggles that never affect the graph are accepted and ignored.
    pub fn check(&mut self, id: &str) -> Result<(), ViewError> {
        match Toggle::from_id(id)? {
            Toggle::Implied => self.implied = true,
            Toggle::OneDegree => self.one_degree = true,
            Toggle::TwoDegrees => self.one_degree = false,
            Toggle::ShowNonKeys => self.show_non_keys = true,
            _ => {}
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationshipGraph {
    ImpliedTwoDegrees,
    OneDegree,
    TwoDegrees,
    LargeImplied,
    CompactImplied,
    Large,
    Compact,
}

impl RelationshipGraph {
    pub const ALL_TABLE: [RelationshipGraph; 3] = [
        RelationshipGraph::OneDegree,
        RelationshipGraph::TwoDegrees,
        RelationshipGraph::ImpliedTwoDegrees,
    ];

    pub const ALL_SUMMARY: [RelationshipGraph; 4] = [
        RelationshipGraph::Compact,
        RelationshipGraph::Large,
        RelationshipGraph::CompactImplied,
        RelationshipGraph::LargeImplied,
    ];

    pub fn select(state: &ViewState, toggles: ToggleState) -> Self {
        match (state.table_name(), toggles.implied) {
            (Some(_), true) => Self::ImpliedTwoDegrees,
            (Some(_), false) if toggles.one_degree => Self::OneDegree,
            (Some(_), false) => Self::TwoDegrees,
            (None, true) if toggles.show_non_keys => Self::LargeImplied,
            (None, true) => Self::CompactImplied,
            (None, false) if toggles.show_non_keys => Self::Large,
            (None, false) => Self::Compact,
        }
    }

    /// Name of the `<map>` holding the graph's clickable regions.
    pub fn map_id(self) -> &'static str {
        match self {
            Self::ImpliedTwoDegrees => "impliedTwoDegreesRelationshipsGraph",
            Self::OneDegree => "oneDegreeRelationshipsGraph",
            Self::TwoDegrees => "twoDegreesRelationshipsGraph",
            Self::LargeImplied => "largeImpliedRelationshipsGraph",
            Self::CompactImplied => "compactImpliedRelationshipsGraph",
            Self::Large => "largeRelationshipsGraph",
            Self::Compact => "compactRelationshipsGraph",
        }
    }

    /// Path of the pre-generated image, relative to the page showing it.
    /// Table graphs live one directory up from the table pages.
    pub fn image_path(self, table: Option<&str>) -> String {
        let table = table.unwrap_or_default();
        match self {
            Self::ImpliedTwoDegrees => format!("../graphs/{}.implied2degrees.png", table),
            Self::OneDegree => format!("../graphs/{}.1degree.png", table),
            Self::TwoDegrees => format!("../graphs/{}.2degrees.png", table),
            Self::LargeImplied => "graphs/summary/relationships.implied.large.png".to_string(),
            Self::CompactImplied => "graphs/summary/relationships.implied.compact.png".to_string(),
            Self::Large => "graphs/summary/relationships.real.large.png".to_string(),
            Self::Compact => "graphs/summary/relationships.real.compact.png".to_string(),
        }
    }

    pub fn selection(self, state: &ViewState) -> GraphSelection {
        GraphSelection {
            graph: self,
            src: self.image_path(state.table_name()),
        }
    }
}

/// An image/map pair ready to be applied to the relationships image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphSelection {
    pub graph: RelationshipGraph,
    pub src: String,
}

impl GraphSelection {
    pub fn map_id(&self) -> &'static str {
        self.graph.map_id()
    }

    /// Value for the image's `useMap` attribute.
    pub fn use_map(&self) -> String {
        format!("#{}", self.graph.map_id())
    }
}
