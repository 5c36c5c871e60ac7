//! What the synchronizer needs from a page, independent of the browser.
//!
//! Handles are cheap to clone and refer to the same underlying element, so
//! click handlers can own copies of the elements they update.

use crate::markup::{Group, Toggle};

pub type ClickHandler = Box<dyn FnMut()>;

pub trait Checkbox: Clone + 'static {
    fn is_checked(&self) -> bool;

    /// Runs `handler` after every click, once the checked state has changed.
    fn on_click(&self, handler: ClickHandler);
}

/// Something that can be shown or hidden as a unit.
pub trait Display: Clone + 'static {
    fn is_displayed(&self) -> bool;
    fn show(&self);
    fn hide(&self);
}

pub trait GraphImage: Clone + 'static {
    fn set_use_map(&self, map: &str);
    fn set_src(&self, src: &str);
}

pub trait Page: 'static {
    type Checkbox: Checkbox;
    type Target: Display;
    type Image: GraphImage;

    /// `None` when the page has no such control.
    fn checkbox(&self, toggle: Toggle) -> Option<Self::Checkbox>;

    /// All members of `group`; may be empty.
    fn group(&self, group: Group) -> Self::Target;

    fn image(&self) -> Option<Self::Image>;
}
