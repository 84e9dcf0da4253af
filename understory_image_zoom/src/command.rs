// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! External zoom commands and the channel that delivers them.
//!
//! Toolbars, keyboard shortcuts and other controls that have no pointer
//! context talk to zoomers through a [`CommandChannel`]. Each attached zoomer
//! holds a [`CommandReceiver`] subscription; dropping the receiver
//! unsubscribes it. There is no global channel: callers create one and hand it
//! to the zoomers that should listen.
//!
//! ```
//! use understory_image_zoom::{CommandChannel, ZoomCommand};
//!
//! let channel = CommandChannel::new();
//! let receiver = channel.subscribe();
//!
//! assert!(channel.emit(ZoomCommand::ZoomIn));
//! assert_eq!(receiver.try_recv(), Some(ZoomCommand::ZoomIn));
//! assert_eq!(receiver.try_recv(), None);
//!
//! drop(receiver);
//! assert!(!channel.emit(ZoomCommand::ZoomReset));
//! ```

use alloc::collections::VecDeque;
use alloc::rc::{Rc, Weak};
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;
use core::str::FromStr;

/// A zero-argument zoom trigger.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ZoomCommand {
    /// Zoom in one step about the container center (`zoom-in`).
    ZoomIn,
    /// Zoom out one step about the container center (`zoom-out`).
    ZoomOut,
    /// Return to the fit view (`zoom-reset`).
    ZoomReset,
}

impl ZoomCommand {
    /// Every command, in declaration order.
    pub const ALL: [Self; 3] = [Self::ZoomIn, Self::ZoomOut, Self::ZoomReset];

    /// The event name of this command.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::ZoomIn => "zoom-in",
            Self::ZoomOut => "zoom-out",
            Self::ZoomReset => "zoom-reset",
        }
    }
}

impl fmt::Display for ZoomCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown command name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnknownCommand;

impl fmt::Display for UnknownCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown zoom command")
    }
}

impl core::error::Error for UnknownCommand {}

impl FromStr for ZoomCommand {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|cmd| cmd.name() == s)
            .ok_or(UnknownCommand)
    }
}

type Queue = RefCell<VecDeque<ZoomCommand>>;

/// Single-threaded broadcast channel for [`ZoomCommand`]s.
///
/// Cloning the channel yields another handle to the same set of subscribers.
#[derive(Clone, Default)]
pub struct CommandChannel {
    subscribers: Rc<RefCell<Vec<Weak<Queue>>>>,
}

impl fmt::Debug for CommandChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandChannel")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

impl CommandChannel {
    /// Creates a channel with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new subscriber.
    ///
    /// The receiver only sees commands emitted after this call.
    #[must_use]
    pub fn subscribe(&self) -> CommandReceiver {
        let queue = Rc::new(Queue::default());
        self.subscribers.borrow_mut().push(Rc::downgrade(&queue));
        CommandReceiver { queue }
    }

    /// Queues `command` for every live subscriber.
    ///
    /// Returns `true` if at least one subscriber received it.
    pub fn emit(&self, command: ZoomCommand) -> bool {
        let mut subscribers = self.subscribers.borrow_mut();
        subscribers.retain(|weak| weak.strong_count() > 0);
        for queue in subscribers.iter().filter_map(Weak::upgrade) {
            queue.borrow_mut().push_back(command);
        }
        tracing::trace!(%command, listeners = subscribers.len(), "command emitted");
        !subscribers.is_empty()
    }

    /// Number of live subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers
            .borrow()
            .iter()
            .filter(|weak| weak.strong_count() > 0)
            .count()
    }
}

/// A subscription to a [`CommandChannel`].
///
/// Commands are buffered in arrival order until taken with
/// [`try_recv`](Self::try_recv).
pub struct CommandReceiver {
    queue: Rc<Queue>,
}

impl fmt::Debug for CommandReceiver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandReceiver")
            .field("pending", &self.pending())
            .finish()
    }
}

impl CommandReceiver {
    /// Takes the oldest pending command, if any.
    pub fn try_recv(&self) -> Option<ZoomCommand> {
        self.queue.borrow_mut().pop_front()
    }

    /// Number of commands waiting to be taken.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }
}

#[cfg(test)]
mod tests {
    use super::{CommandChannel, UnknownCommand, ZoomCommand};

    #[test]
    fn names_round_trip() {
        for cmd in ZoomCommand::ALL {
            assert_eq!(cmd.name().parse::<ZoomCommand>(), Ok(cmd));
        }
        assert_eq!("zoom-sideways".parse::<ZoomCommand>(), Err(UnknownCommand));
    }

    #[test]
    fn broadcast_reaches_every_subscriber_in_order() {
        let channel = CommandChannel::new();
        let a = channel.subscribe();
        let b = channel.clone().subscribe();
        assert_eq!(channel.subscriber_count(), 2);

        channel.emit(ZoomCommand::ZoomIn);
        channel.emit(ZoomCommand::ZoomReset);

        for rx in [&a, &b] {
            assert_eq!(rx.pending(), 2);
            assert_eq!(rx.try_recv(), Some(ZoomCommand::ZoomIn));
            assert_eq!(rx.try_recv(), Some(ZoomCommand::ZoomReset));
            assert_eq!(rx.try_recv(), None);
        }
    }

    #[test]
    fn dropped_receivers_are_unsubscribed() {
        let channel = CommandChannel::new();
        assert!(!channel.emit(ZoomCommand::ZoomOut));

        let a = channel.subscribe();
        let b = channel.subscribe();
        drop(a);
        assert_eq!(channel.subscriber_count(), 1);
        assert!(channel.emit(ZoomCommand::ZoomOut));
        assert_eq!(b.try_recv(), Some(ZoomCommand::ZoomOut));

        drop(b);
        assert_eq!(channel.subscriber_count(), 0);
        assert!(!channel.emit(ZoomCommand::ZoomOut));
    }

    #[test]
    fn late_subscribers_miss_earlier_commands() {
        let channel = CommandChannel::new();
        let early = channel.subscribe();
        channel.emit(ZoomCommand::ZoomIn);
        let late = channel.subscribe();
        channel.emit(ZoomCommand::ZoomOut);

        assert_eq!(early.pending(), 2);
        assert_eq!(late.try_recv(), Some(ZoomCommand::ZoomOut));
        assert_eq!(late.try_recv(), None);
    }
}
