use eframe::egui::{Event, Key};
use pendulum_wave::Control;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Control(Control),
    Quit,
}

pub fn action_for_key(key: Key) -> Option<Action> {
    match key {
        Key::Space => Some(Action::Control(Control::TogglePause)),
        Key::R => Some(Action::Control(Control::Reset)),
        Key::ArrowUp | Key::ArrowRight => Some(Action::Control(Control::SpeedUp)),
        Key::ArrowDown | Key::ArrowLeft => Some(Action::Control(Control::SlowDown)),
        Key::Escape => Some(Action::Quit),
        _ => None,
    }
}

/// Key presses in this frame's events, in arrival order. Auto-repeats count.
pub fn actions_from_events(events: &[Event]) -> Vec<Action> {
    events
        .iter()
        .filter_map(|event| match event {
            Event::Key {
                key, pressed: true, ..
            } => action_for_key(*key),
            _ => None,
        })
        .collect()
}
