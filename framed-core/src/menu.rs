/// An entry of a screen's options menu.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuItem {
    /// Identifier reported back when the item is chosen.
    pub id: String,
    /// Label shown to the user.
    pub title: String,
}

impl MenuItem {
    /// Create a new menu item.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}
