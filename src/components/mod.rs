pub mod advisory_page;
pub mod bottom_nav;
pub mod common;
pub mod header;
pub mod home_page;
pub mod market_page;
pub mod pest_page;
pub mod profile_page;
pub mod shell;
pub mod weather_page;

use std::ops::Deref;
use std::rc::Rc;

use crate::content::Content;

/// Read-only content shared through context. Screens read from it but never
/// share mutable state through it.
#[derive(Clone)]
pub struct AppContent(pub Rc<Content>);

impl AppContent {
    pub fn new(content: Content) -> Self {
        Self(Rc::new(content))
    }
}

impl Deref for AppContent {
    type Target = Content;

    fn deref(&self) -> &Content {
        &self.0
    }
}
