//! Non-blocking per-frame input drain.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};

use crate::map::handle_key_event;
use crate::types::PlayerAction;

/// Poll terminal events until none are pending, forwarding every mapped key
/// press (and terminal auto-repeat) to `sink`.
///
/// Returns the number of actions forwarded.
pub fn drain_pending(mut sink: impl FnMut(PlayerAction)) -> io::Result<usize> {
    let mut forwarded = 0;
    while event::poll(Duration::ZERO)? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Release {
                continue;
            }
            if let Some(action) = handle_key_event(key) {
                sink(action);
                forwarded += 1;
            }
        }
    }
    Ok(forwarded)
}
