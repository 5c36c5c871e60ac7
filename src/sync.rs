use std::rc::Rc;

use crate::element::{Checkbox, Display, GraphImage, Page};
use crate::graph::{GraphSelection, ToggleState, ViewState};
use crate::markup::{DIRECT_BINDINGS, IMAGE_TOGGLES, INVERSE_BINDINGS, Toggle};

/// Show `target` when `checkbox` is checked, hide it otherwise.
pub fn sync<C: Checkbox, T: Display>(checkbox: &C, target: &T) {
    let checked = checkbox.is_checked();
    if checked != target.is_displayed() {
        if checked {
            target.show();
        } else {
            target.hide();
        }
    }
}

/// Hide `target` when `checkbox` is checked, show it otherwise.
pub fn unsync<C: Checkbox, T: Display>(checkbox: &C, target: &T) {
    let checked = checkbox.is_checked();
    if checked == target.is_displayed() {
        if checked {
            target.hide();
        } else {
            target.show();
        }
    }
}

/// Keep `target` visible exactly while `checkbox` is checked.
pub fn associate<C: Checkbox, T: Display>(checkbox: &C, target: &T) {
    sync(checkbox, target);
    let (cb, target) = (checkbox.clone(), target.clone());
    checkbox.on_click(Box::new(move || sync(&cb, &target)));
}

/// Keep `target` visible exactly while `checkbox` is unchecked.
pub fn associate_inverse<C: Checkbox, T: Display>(checkbox: &C, target: &T) {
    unsync(checkbox, target);
    let (cb, target) = (checkbox.clone(), target.clone());
    checkbox.on_click(Box::new(move || unsync(&cb, &target)));
}

/// The relationships image together with the checkboxes that pick its graph.
pub struct ImageBinding<P: Page> {
    implied: Option<P::Checkbox>,
    one_degree: Option<P::Checkbox>,
    show_non_keys: Option<P::Checkbox>,
    image: Option<P::Image>,
    state: Rc<ViewState>,
}

impl<P: Page> Clone for ImageBinding<P> {
    fn clone(&self) -> Self {
        Self {
            implied: self.implied.clone(),
            one_degree: self.one_degree.clone(),
            show_non_keys: self.show_non_keys.clone(),
            image: self.image.clone(),
            state: Rc::clone(&self.state),
        }
    }
}

impl<P: Page> ImageBinding<P> {
    pub fn new(page: &P, state: Rc<ViewState>) -> Self {
        Self {
            implied: page.checkbox(Toggle::Implied),
            one_degree: page.checkbox(Toggle::OneDegree),
            show_non_keys: page.checkbox(Toggle::ShowNonKeys),
            image: page.image(),
            state,
        }
    }

    /// Current checkbox states; absent checkboxes read as unchecked.
    pub fn toggles(&self) -> ToggleState {
        let checked = |cb: &Option<P::Checkbox>| cb.as_ref().is_some_and(|c| c.is_checked());
        ToggleState {
            implied: checked(&self.implied),
            one_degree: checked(&self.one_degree),
            show_non_keys: checked(&self.show_non_keys),
        }
    }

    /// Point the image and its map at the graph the checkboxes select.
    pub fn sync_image(&self) -> GraphSelection {
        let selection = self.state.select(self.toggles());
        if let Some(image) = &self.image {
            image.set_use_map(&selection.use_map());
            image.set_src(&selection.src);
        }
        selection
    }
}

/// What [`Synchronizer::ready`] managed to wire up.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Wiring {
    pub bindings: usize,
    pub image_triggers: usize,
    pub has_image: bool,
    /// Checkboxes the page does not have, in first-lookup order.
    pub missing: Vec<Toggle>,
}

impl Wiring {
    fn note_missing(&mut self, toggle: Toggle) {
        if !self.missing.contains(&toggle) {
            self.missing.push(toggle);
        }
    }
}

pub struct Synchronizer<P: Page> {
    page: P,
    state: Rc<ViewState>,
}

impl<P: Page> Synchronizer<P> {
    pub fn new(page: P, state: ViewState) -> Self {
        Self {
            page,
            state: Rc::new(state),
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn image_binding(&self) -> ImageBinding<P> {
        ImageBinding::new(&self.page, Rc::clone(&self.state))
    }

    /// Make the page consistent and keep it so on every click.
    /// Bindings whose checkbox is missing from the page are skipped.
    pub fn ready(&self) -> Wiring {
        let mut wiring = Wiring::default();

        for (toggle, group) in DIRECT_BINDINGS {
            match self.page.checkbox(toggle) {
                Some(cb) => {
                    associate(&cb, &self.page.group(group));
                    wiring.bindings += 1;
                }
                None => wiring.note_missing(toggle),
            }
        }

        let image = self.image_binding();
        wiring.has_image = image.image.is_some();
        image.sync_image();
        for toggle in IMAGE_TOGGLES {
            match self.page.checkbox(toggle) {
                Some(cb) => {
                    let image = image.clone();
                    cb.on_click(Box::new(move || {
                        image.sync_image();
                    }));
                    wiring.image_triggers += 1;
                }
                None => wiring.note_missing(toggle),
            }
        }

        for (toggle, group) in INVERSE_BINDINGS {
            match self.page.checkbox(toggle) {
                Some(cb) => {
                    associate_inverse(&cb, &self.page.group(group));
                    wiring.bindings += 1;
                }
                None => wiring.note_missing(toggle),
            }
        }

        wiring
    }
}
