// Which screen the navigator is currently showing
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum State {
    Initialising, // First frame, preferences applied to the store
    Home,         // Menu overview with averages per course
    ManageMenu,   // Add and remove dishes
    FilterMenu,   // Dishes of a single course
    About,
}
