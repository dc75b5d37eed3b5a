//! Host container abstraction
//!
//! A container is the surface a popover inserts itself into. Containers are
//! shared single-threaded values (`Rc<RefCell<_>>`); a popover keeps only a
//! weak reference between attach and detach. A container holds at most one
//! popover at a time.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::direction::ArrowDirection;
use crate::geometry::{Rect, Size};

/// Identity of a popover instance, unique within the process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OwnerId(u64);

impl OwnerId {
    pub fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// What a popover inserts into its container
///
/// Rects are local to the container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    /// Instance that attached this, used for later removal
    pub owner: OwnerId,
    /// Id the popover was created with
    pub popover: String,
    pub direction: ArrowDirection,
    pub content: Rect,
    pub arrow: Rect,
}

/// A surface popovers can be attached to
pub trait Container {
    /// Current frame in root-relative coordinates
    fn frame(&self) -> Rect;

    /// Owner of the popover currently attached, if any
    fn occupant(&self) -> Option<OwnerId>;

    /// Insert a popover's content box and arrow, replacing any previous one
    fn attach(&mut self, attachment: Attachment);

    /// Remove what `owner` attached; other owners are left alone
    fn detach(&mut self, owner: OwnerId);
}

/// Shared handle to a container
pub type ContainerRef = Rc<RefCell<dyn Container>>;

/// Non-owning handle to a container
pub type WeakContainer = Weak<RefCell<dyn Container>>;

/// Anything with an on-screen position and size
pub trait ScreenElement {
    /// Top-left corner in root-relative coordinates
    fn screen_origin(&self) -> (i32, i32);

    fn size(&self) -> Size;
}

/// Convert an element's on-screen placement into a root-relative rect.
///
/// Anchor and container rects must share this coordinate space for placement
/// to be correct.
pub fn frame_for_element(element: &impl ScreenElement) -> Rect {
    let (x, y) = element.screen_origin();
    Rect::from_origin_size(x, y, element.size())
}

/// Container that records attachments, for hosts that draw popovers
/// themselves and for tests.
#[derive(Debug, Clone, Default)]
pub struct OverlayLayer {
    frame: Rect,
    attached: Option<Attachment>,
}

impl OverlayLayer {
    pub fn new(frame: Rect) -> Self {
        Self {
            frame,
            attached: None,
        }
    }

    pub fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }

    pub fn attachments(&self) -> &[Attachment] {
        self.attached.as_slice()
    }

    /// Attachment of the popover created with `id`
    pub fn attachment(&self, id: &str) -> Option<&Attachment> {
        self.attached.as_ref().filter(|a| a.popover == id)
    }

    pub fn is_empty(&self) -> bool {
        self.attached.is_none()
    }
}

impl Container for OverlayLayer {
    fn frame(&self) -> Rect {
        self.frame
    }

    fn occupant(&self) -> Option<OwnerId> {
        self.attached.as_ref().map(|a| a.owner)
    }

    fn attach(&mut self, attachment: Attachment) {
        self.attached = Some(attachment);
    }

    fn detach(&mut self, owner: OwnerId) {
        if self.occupant() == Some(owner) {
            self.attached = None;
        }
    }
}
