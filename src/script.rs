//! Canned input for headless runs.

use terrawalk_sim::{InputEvent, InputFrame, MoveKeys};

/// Ticks between gentle turns.
const TURN_EVERY: u64 = 240;
/// Pointer travel per turn; a quarter turn at the default sensitivity.
const TURN_DX: f64 = 785.0;
const JUMP_EVERY: u64 = 90;

/// A walk that heads forward, turns now and then, hops over small steps and
/// optionally places a block every `place_every` ticks.
pub fn scripted_frame(tick: u64, place_every: u64) -> InputFrame {
    let mut frame = InputFrame::holding(MoveKeys {
        forward: true,
        jump: tick % JUMP_EVERY == 0,
        ..MoveKeys::default()
    });
    if tick == 1 {
        frame.events.push(InputEvent::SelectSlot(4));
    }
    if tick % TURN_EVERY == 0 {
        frame.look_delta = (TURN_DX, 0.0);
    }
    if place_every > 0 && tick % place_every == 0 {
        frame.events.push(InputEvent::PrimaryClick);
    }
    frame
}
