//! Reusable widgets for the TUI

pub mod input;
pub mod notification;
pub mod swipe;

pub use input::{TextInput, TextInputWidget};
pub use notification::{Notification, NotificationQueue, NotificationType, NotificationWidget};
pub use swipe::{SwipeOutcome, SwipeState, DELETE_BUTTON_WIDTH, REVEAL_THRESHOLD};
