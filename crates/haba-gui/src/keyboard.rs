//! Global keyboard shortcuts.

use iced::keyboard;
use iced::Subscription;

use crate::app::Message;
use crate::screen::Page;

#[derive(Debug, Clone)]
pub enum Shortcut {
    /// Ctrl+C: copy the current tier's tokens as JSON.
    CopyTokens,
    /// F5: rescan token tables from disk.
    Reload,
    /// Ctrl+1 / Ctrl+2: switch page.
    Open(Page),
}

/// Subscription that converts keyboard events to `Message::Shortcut`.
pub fn keyboard_subscription() -> Subscription<Message> {
    iced::event::listen_with(|event, _status, _id| match event {
        iced::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            map_shortcut(key, modifiers)
        }
        _ => None,
    })
}

fn map_shortcut(key: keyboard::Key, modifiers: keyboard::Modifiers) -> Option<Message> {
    use keyboard::key::Named;
    use keyboard::Key;

    let ctrl = modifiers.control();

    match key {
        Key::Named(Named::F5) => Some(Shortcut::Reload),
        Key::Character(ref c) if ctrl => match c.as_str() {
            "c" => Some(Shortcut::CopyTokens),
            "1" => Some(Shortcut::Open(Page::Preview)),
            "2" => Some(Shortcut::Open(Page::Tokens)),
            _ => None,
        },
        _ => None,
    }
    .map(Message::Shortcut)
}
