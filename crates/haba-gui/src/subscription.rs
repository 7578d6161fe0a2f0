use iced::{window, Event, Subscription};

use crate::app::Message;
use crate::keyboard;

/// Window geometry events feeding the layout owner.
pub fn window_events() -> Subscription<Message> {
    iced::event::listen_with(|event, _status, _id| match event {
        Event::Window(event) => map_window_event(event),
        _ => None,
    })
}

/// The opened size counts as a resize, since the window manager may not
/// honour the size we asked for.
fn map_window_event(event: window::Event) -> Option<Message> {
    match event {
        window::Event::Opened { size, .. } | window::Event::Resized(size) => {
            Some(Message::WindowResized(size))
        }
        window::Event::Moved(pos) => Some(Message::WindowMoved(pos)),
        _ => None,
    }
}

pub fn subscriptions() -> Subscription<Message> {
    Subscription::batch([window_events(), keyboard::keyboard_subscription()])
}
