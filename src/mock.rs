//! In-memory page used by the synchronizer tests.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::element::{Checkbox, ClickHandler, Display, GraphImage, Page};
use crate::markup::{Group, Toggle};

#[derive(Default)]
struct CheckboxInner {
    checked: Cell<bool>,
    handlers: RefCell<Vec<ClickHandler>>,
}

#[derive(Clone, Default)]
pub struct MockCheckbox(Rc<CheckboxInner>);

impl MockCheckbox {
    pub fn new(checked: bool) -> Self {
        let cb = Self::default();
        cb.0.checked.set(checked);
        cb
    }

    pub fn set_checked(&self, checked: bool) {
        self.0.checked.set(checked);
    }

    /// Flips the checkbox and fires its handlers, like a user click.
    pub fn click(&self) {
        self.0.checked.set(!self.0.checked.get());
        self.fire();
    }

    pub fn fire(&self) {
        for handler in self.0.handlers.borrow_mut().iter_mut() {
            handler();
        }
    }

    pub fn handler_count(&self) -> usize {
        self.0.handlers.borrow().len()
    }
}

impl Checkbox for MockCheckbox {
    fn is_checked(&self) -> bool {
        self.0.checked.get()
    }

    fn on_click(&self, handler: ClickHandler) {
        self.0.handlers.borrow_mut().push(handler);
    }
}

struct TargetInner {
    displayed: Cell<bool>,
    changes: Cell<usize>,
}

#[derive(Clone)]
pub struct MockTarget(Rc<TargetInner>);

impl MockTarget {
    pub fn new(displayed: bool) -> Self {
        Self(Rc::new(TargetInner {
            displayed: Cell::new(displayed),
            changes: Cell::new(0),
        }))
    }

    /// Number of show/hide calls received.
    pub fn changes(&self) -> usize {
        self.0.changes.get()
    }
}

impl Display for MockTarget {
    fn is_displayed(&self) -> bool {
        self.0.displayed.get()
    }

    fn show(&self) {
        self.0.displayed.set(true);
        self.0.changes.set(self.0.changes.get() + 1);
    }

    fn hide(&self) {
        self.0.displayed.set(false);
        self.0.changes.set(self.0.changes.get() + 1);
    }
}

#[derive(Clone, Default)]
pub struct MockImage(Rc<RefCell<(String, String)>>);

impl MockImage {
    pub fn use_map(&self) -> String {
        self.0.borrow().0.clone()
    }

    pub fn src(&self) -> String {
        self.0.borrow().1.clone()
    }
}

impl GraphImage for MockImage {
    fn set_use_map(&self, map: &str) {
        self.0.borrow_mut().0 = map.to_string();
    }

    fn set_src(&self, src: &str) {
        self.0.borrow_mut().1 = src.to_string();
    }
}

pub struct MockPage {
    checkboxes: HashMap<Toggle, MockCheckbox>,
    groups: HashMap<Group, MockTarget>,
    image: Option<MockImage>,
}

impl MockPage {
    /// A page with an image and every group visible, but no checkboxes.
    pub fn new() -> Self {
        let groups = [
            Group::ImpliedRelationship,
            Group::Comment,
            Group::Legend,
            Group::RelatedKey,
            Group::Constraint,
            Group::Degrees,
            Group::ImpliedNotOrphan,
        ]
        .into_iter()
        .map(|g| (g, MockTarget::new(true)))
        .collect();

        Self {
            checkboxes: HashMap::new(),
            groups,
            image: Some(MockImage::default()),
        }
    }

    /// A table page as generated: one degree selected, legend on.
    pub fn table_page() -> Self {
        Self::new()
            .with(Toggle::Implied, false)
            .with(Toggle::OneDegree, true)
            .with(Toggle::TwoDegrees, false)
            .with(Toggle::ShowComments, false)
            .with(Toggle::ShowLegend, true)
            .with(Toggle::ShowRelatedCols, false)
            .with(Toggle::ShowConstNames, false)
    }

    /// The summary relationships page.
    pub fn summary_page() -> Self {
        Self::new()
            .with(Toggle::Implied, false)
            .with(Toggle::ShowNonKeys, false)
            .with(Toggle::RemoveImpliedOrphans, false)
    }

    pub fn with(mut self, toggle: Toggle, checked: bool) -> Self {
        self.checkboxes.insert(toggle, MockCheckbox::new(checked));
        self
    }

    pub fn without_image(mut self) -> Self {
        self.image = None;
        self
    }

    pub fn cb(&self, toggle: Toggle) -> MockCheckbox {
        self.checkboxes[&toggle].clone()
    }

    pub fn target(&self, group: Group) -> MockTarget {
        self.groups[&group].clone()
    }

    pub fn img(&self) -> MockImage {
        self.image.clone().unwrap_or_default()
    }

    /// Selects one of the degree radios, clearing the other.
    pub fn pick_degree(&self, one: bool) {
        let (on, off) = if one {
            (Toggle::OneDegree, Toggle::TwoDegrees)
        } else {
            (Toggle::TwoDegrees, Toggle::OneDegree)
        };
        self.cb(off).set_checked(false);
        self.cb(on).set_checked(true);
        self.cb(on).fire();
    }
}

impl Page for MockPage {
    type Checkbox = MockCheckbox;
    type Target = MockTarget;
    type Image = MockImage;

    fn checkbox(&self, toggle: Toggle) -> Option<MockCheckbox> {
        self.checkboxes.get(&toggle).cloned()
    }

    fn group(&self, group: Group) -> MockTarget {
        self.target(group)
    }

    fn image(&self) -> Option<MockImage> {
        self.image.clone()
    }
}
