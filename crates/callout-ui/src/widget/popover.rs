//! Popover lifecycle controller
//!
//! A popover goes `Hidden -> Showing -> Shown -> Dismissing -> Hidden`.
//! `Showing` and `Dismissing` only exist while a fade is running; the fade is
//! advanced by the host through [`Popover::update`], which is also where the
//! `did_show` and `did_dismiss` notifications of animated transitions fire.
//!
//! Calling `show` or `dismiss` while a fade is running is ignored, as is
//! showing a popover that is already shown or dismissing one that is hidden.
//!
//! Dropping a popover that is still attached removes it from its container.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use tracing::{debug, info, warn};

use super::content::PopoverContent;
use super::observer::PopoverObserver;
use super::traits::Widget;
use crate::animation::{Easing, FadeOutcome, FadeTransition};
use crate::assets::{AssetHandle, PopoverAssets};
use crate::container::{Attachment, Container, ContainerRef, OwnerId, WeakContainer};
use crate::defaults::PopoverDefaults;
use crate::direction::{ArrowDirection, ArrowDirections};
use crate::error::{PlacementError, PopoverError, Result};
use crate::geometry::{Insets, Rect, Size};
use crate::input::UiEvent;
use crate::placement::{self, Placement};
use crate::renderer::{Color, RenderBackend};

/// Where a popover is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PopoverState {
    #[default]
    Hidden,
    /// Attached and fading in
    Showing,
    Shown,
    /// Still attached, fading out
    Dismissing,
}

impl PopoverState {
    /// True while a fade is running
    pub fn is_in_flight(self) -> bool {
        matches!(self, PopoverState::Showing | PopoverState::Dismissing)
    }
}

#[derive(Debug, Clone, Copy)]
enum Hook {
    WillShow,
    DidShow,
    WillDismiss,
    DidDismiss,
}

/// A content box with an arrow pointing at an anchor
pub struct Popover {
    id: String,
    owner: OwnerId,
    content: PopoverContent,
    content_size: Size,
    padding: Insets,
    assets: PopoverAssets,
    fade: FadeTransition,
    observer: Option<Box<dyn PopoverObserver>>,
    container: Option<WeakContainer>,
    /// Container frame captured at show time
    container_frame: Rect,
    placement: Option<Placement>,
    state: PopoverState,
}

impl std::fmt::Debug for Popover {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Popover")
            .field("id", &self.id)
            .field("state", &self.state)
            .field("placement", &self.placement)
            .finish_non_exhaustive()
    }
}

impl Popover {
    /// Create a popover starting from the current process-wide defaults
    pub fn new(id: impl Into<String>, content: impl Into<PopoverContent>) -> Self {
        Self::with_defaults(id, content, &PopoverDefaults::current())
    }

    /// Create a popover from an explicit set of defaults
    pub fn with_defaults(
        id: impl Into<String>,
        content: impl Into<PopoverContent>,
        defaults: &PopoverDefaults,
    ) -> Self {
        Self {
            id: id.into(),
            owner: OwnerId::next(),
            content: content.into(),
            content_size: defaults.content_size,
            padding: defaults.padding,
            assets: defaults.assets.clone(),
            fade: FadeTransition::new(defaults.fade_duration).with_easing(defaults.easing),
            observer: None,
            container: None,
            container_frame: Rect::default(),
            placement: None,
            state: PopoverState::Hidden,
        }
    }

    /// Set desired inner content size; a zero component fills that axis
    pub fn with_content_size(mut self, size: Size) -> Self {
        self.content_size = size;
        self
    }

    /// Size the content box to its text
    pub fn fit_to_content(mut self) -> Self {
        self.content_size = self.content.intrinsic_size();
        self
    }

    pub fn with_padding(mut self, padding: Insets) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_fade_duration(mut self, duration: Duration) -> Self {
        self.fade.duration = duration;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.fade.easing = easing;
        self
    }

    pub fn with_observer(mut self, observer: impl PopoverObserver + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    pub fn set_content(&mut self, content: impl Into<PopoverContent>) {
        self.content = content.into();
    }

    pub fn set_content_size(&mut self, size: Size) {
        self.content_size = size;
    }

    pub fn set_padding(&mut self, padding: Insets) {
        self.padding = padding;
    }

    pub fn set_fade_duration(&mut self, duration: Duration) {
        self.fade.duration = duration;
    }

    pub fn set_easing(&mut self, easing: Easing) {
        self.fade.easing = easing;
    }

    pub fn set_observer(&mut self, observer: Option<Box<dyn PopoverObserver>>) {
        self.observer = observer;
    }

    pub fn set_background(&mut self, handle: AssetHandle) {
        self.assets.background = handle;
    }

    pub fn set_arrow_asset(&mut self, direction: ArrowDirection, handle: AssetHandle) {
        self.assets.set_arrow(direction, handle);
    }

    pub fn content(&self) -> &PopoverContent {
        &self.content
    }

    pub fn content_size(&self) -> Size {
        self.content_size
    }

    pub fn padding(&self) -> Insets {
        self.padding
    }

    pub fn fade_duration(&self) -> Duration {
        self.fade.duration
    }

    pub fn assets(&self) -> &PopoverAssets {
        &self.assets
    }

    pub fn state(&self) -> PopoverState {
        self.state
    }

    pub fn is_animating(&self) -> bool {
        self.state.is_in_flight()
    }

    pub fn opacity(&self) -> f32 {
        self.fade.alpha()
    }

    /// Placement chosen by the last `show`, container-local
    pub fn placement(&self) -> Option<Placement> {
        self.placement
    }

    /// Content size including padding, as handed to the placement engine
    pub fn effective_content_size(&self) -> Size {
        self.padding.pad(self.content_size)
    }

    /// Content box in root-relative coordinates, while attached
    pub fn content_frame(&self) -> Option<Rect> {
        let (x, y) = self.container_frame.origin();
        self.placement.map(|p| p.content.offset(x, y))
    }

    /// Place the popover next to `anchor` and attach it to `container`.
    ///
    /// `anchor` must be in the same root-relative space as the container's
    /// frame (see [`crate::frame_for_element`]). The container must not be
    /// borrowed while this runs.
    pub fn show<C: Container + 'static>(
        &mut self,
        container: &Rc<RefCell<C>>,
        anchor: Rect,
        directions: ArrowDirections,
        animated: bool,
    ) -> Result<()> {
        let shared: ContainerRef = container.clone();
        self.show_in(&shared, anchor, directions, animated)
    }

    /// [`Popover::show`] for a type-erased container handle.
    ///
    /// Fails with [`PopoverError::ContainerOccupied`] when another popover is
    /// attached to `container`.
    pub fn show_in(
        &mut self,
        container: &ContainerRef,
        anchor: Rect,
        directions: ArrowDirections,
        animated: bool,
    ) -> Result<()> {
        if directions.is_empty() {
            return Err(PlacementError::NoDirections.into());
        }
        if self.state != PopoverState::Hidden {
            debug!(id = %self.id, state = ?self.state, "Ignoring show");
            return Ok(());
        }
        if let Some(other) = container.borrow().occupant() {
            if other != self.owner {
                debug!(id = %self.id, ?other, "Container occupied");
                return Err(PopoverError::ContainerOccupied);
            }
        }

        self.notify(Hook::WillShow);

        self.container = Some(Rc::downgrade(container));
        let frame = container.borrow().frame();

        let chosen =
            placement::best_placement(&frame, &anchor, self.effective_content_size(), directions)?;
        let arrow_size = self.assets.arrow(chosen.direction).size;
        let placed = Placement {
            direction: chosen.direction,
            content: chosen.rect,
            arrow: placement::arrow_rect(chosen.direction, &frame, &anchor, arrow_size),
        };

        container.borrow_mut().attach(Attachment {
            owner: self.owner,
            popover: self.id.clone(),
            direction: placed.direction,
            content: placed.content,
            arrow: placed.arrow,
        });
        self.container_frame = frame;
        self.placement = Some(placed);

        info!(
            id = %self.id,
            direction = %placed.direction,
            rect = %placed.content,
            animated,
            "Showing popover"
        );

        if animated {
            self.state = PopoverState::Showing;
            self.fade.fade_in();
        } else {
            self.fade.show_now();
            self.state = PopoverState::Shown;
            self.notify(Hook::DidShow);
        }
        Ok(())
    }

    /// Remove the popover from its container
    pub fn dismiss(&mut self, animated: bool) {
        if self.state != PopoverState::Shown {
            debug!(id = %self.id, state = ?self.state, "Ignoring dismiss");
            return;
        }

        self.notify(Hook::WillDismiss);
        info!(id = %self.id, animated, "Dismissing popover");

        if animated {
            self.state = PopoverState::Dismissing;
            self.fade.fade_out();
        } else {
            self.finish_dismiss();
        }
    }

    /// Advance a running fade and commit it when it completes
    pub fn update(&mut self, dt: Duration) {
        match self.fade.update(dt) {
            Some(FadeOutcome::FadedIn) if self.state == PopoverState::Showing => {
                self.state = PopoverState::Shown;
                debug!(id = %self.id, "Popover shown");
                self.notify(Hook::DidShow);
            }
            Some(FadeOutcome::FadedOut) if self.state == PopoverState::Dismissing => {
                self.finish_dismiss();
            }
            _ => {}
        }
    }

    fn finish_dismiss(&mut self) {
        match self.container.take().and_then(|weak| weak.upgrade()) {
            Some(container) => container.borrow_mut().detach(self.owner),
            None => warn!(id = %self.id, "Container dropped before popover removal"),
        }
        self.placement = None;
        self.fade.hide_now();
        self.state = PopoverState::Hidden;
        debug!(id = %self.id, "Popover dismissed");
        self.notify(Hook::DidDismiss);
    }

    fn notify(&mut self, hook: Hook) {
        let Some(observer) = self.observer.as_mut() else {
            return;
        };
        let id = self.id.as_str();
        match hook {
            Hook::WillShow => observer.will_show(id),
            Hook::DidShow => observer.did_show(id),
            Hook::WillDismiss => observer.will_dismiss(id),
            Hook::DidDismiss => observer.did_dismiss(id),
        }
    }
}

impl Drop for Popover {
    fn drop(&mut self) {
        if self.state == PopoverState::Hidden {
            return;
        }
        let Some(container) = self.container.take().and_then(|weak| weak.upgrade()) else {
            return;
        };
        match container.try_borrow_mut() {
            Ok(mut container) => {
                container.detach(self.owner);
                debug!(id = %self.id, "Dropped popover detached");
            }
            Err(_) => warn!(id = %self.id, "Container borrowed while dropping popover"),
        };
    }
}

impl Widget for Popover {
    fn id(&self) -> &str {
        &self.id
    }

    fn bounds(&self) -> Option<Rect> {
        self.content_frame()
    }

    fn update(&mut self, dt: Duration) {
        Popover::update(self, dt);
    }

    /// Taps are swallowed while attached. One outside the content box of a
    /// settled popover dismisses it.
    fn handle_event(&mut self, event: &UiEvent) -> bool {
        let Some((x, y)) = event.tap_point() else {
            return false;
        };
        if self.state == PopoverState::Hidden {
            return false;
        }

        let inside = self
            .content_frame()
            .is_some_and(|frame| frame.contains(x, y));
        if self.state == PopoverState::Shown && !inside {
            debug!(id = %self.id, x, y, "Tap outside popover");
            self.dismiss(true);
        }
        true
    }

    fn render(&self, backend: &mut dyn RenderBackend) {
        let Some(placed) = self.placement else {
            return;
        };
        let alpha = self.fade.alpha();
        let (fx, fy) = self.container_frame.origin();
        let content = placed.content.offset(fx, fy);
        let arrow = placed.arrow.offset(fx, fy);

        backend.draw_asset(&self.assets.background, content, Color::POPOVER_BORDER, alpha);
        backend.draw_box(content, Color::POPOVER_BORDER, alpha);

        let text_x = content.left + self.padding.left;
        let max_width = content.width() - self.padding.horizontal();
        let rows = (content.height() - self.padding.vertical()).max(0) as usize;
        for (row, line) in self.content.lines().iter().take(rows).enumerate() {
            let y = content.top + self.padding.top + row as i32;
            backend.draw_text(text_x, y, line, max_width, Color::POPOVER_TEXT, alpha);
        }

        backend.draw_asset(
            self.assets.arrow(placed.direction),
            arrow,
            Color::POPOVER_ARROW,
            alpha,
        );
    }

    fn visibility(&self) -> f32 {
        self.opacity()
    }
}
