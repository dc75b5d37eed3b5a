//! Lifecycle notifications

/// Receives popover lifecycle notifications
///
/// Every hook has an empty default, so observers implement only what they
/// need. Hooks receive the id of the popover that fired them.
pub trait PopoverObserver {
    /// Before the popover is placed and attached
    fn will_show(&mut self, _id: &str) {}

    /// Once the popover is attached and fully opaque
    fn did_show(&mut self, _id: &str) {}

    /// Before the dismissal starts
    fn will_dismiss(&mut self, _id: &str) {}

    /// After the popover has been removed from its container
    fn did_dismiss(&mut self, _id: &str) {}
}
