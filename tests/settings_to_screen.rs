//! Settings file to placed popover, through the facade crate.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use callout::config::CalloutSettings;
use callout::{
    ArrowDirection, ArrowDirections, OverlayLayer, Popover, PopoverDefaults, PopoverState, Rect,
    Size,
};

#[test]
fn saved_settings_drive_new_popovers() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("callout.toml");

    let mut settings = CalloutSettings::default();
    settings.popover.fade_ms = 40;
    settings.popover.padding = [0, 0, 0, 0];
    settings.popover.content_width = 200;
    settings.popover.content_height = 100;
    settings.save_to(&path).unwrap();

    let loaded = CalloutSettings::load_from(&path).unwrap();
    PopoverDefaults::install(PopoverDefaults::from_settings(&loaded));

    let container = Rc::new(RefCell::new(OverlayLayer::new(Rect::new(0, 0, 320, 480))));
    let mut popover = Popover::new("menu", "Copy");
    assert_eq!(popover.effective_content_size(), Size::new(200, 100));

    popover
        .show(&container, Rect::new(20, 40, 60, 60), ArrowDirections::ANY, true)
        .unwrap();
    popover.update(Duration::from_millis(50));
    assert_eq!(popover.state(), PopoverState::Shown);

    let placement = popover.placement().unwrap();
    assert_eq!(placement.direction, ArrowDirection::Up);
    assert_eq!(placement.content, Rect::new(0, 60, 200, 160));
}
