use crate::menu::{Course, MenuError, MenuItemDraft, MenuItemId, MenuStore};
use log::{info, warn};

// Text buffers behind the "Manage Menu Items" inputs
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MenuForm {
    pub dish_name: String,
    pub description: String,
    pub course: Course,
    pub price: String,
}

impl MenuForm {
    pub fn new(course: Course) -> Self {
        Self {
            course,
            ..Default::default()
        }
    }

    pub fn draft(&self) -> MenuItemDraft {
        MenuItemDraft {
            dish_name: self.dish_name.clone(),
            description: self.description.clone(),
            course: Some(self.course),
            price: self.price.clone(),
        }
    }

    /// Adds the current input to `store`.
    ///
    /// On success the text inputs are cleared and the selected course is kept
    /// for the next dish. On failure the inputs are left as typed so the user
    /// can correct them.
    pub fn submit(&mut self, store: &mut MenuStore) -> Result<MenuItemId, MenuError> {
        match store.add(self.draft()) {
            Ok(item) => {
                info!("Menu item '{}' added to {}", item.dish_name, item.course);
                let id = item.id;
                self.dish_name.clear();
                self.description.clear();
                self.price.clear();
                Ok(id)
            }
            Err(e) => {
                warn!("Rejected menu item: {}", e);
                Err(e)
            }
        }
    }
}
