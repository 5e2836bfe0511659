//! Helpers for feeding crossterm events into the app

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use invoicer::ui::Effect;
use invoicer::App;

pub fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

pub fn ctrl(c: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
}

/// Type `text` into the focused field one key at a time
pub fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        let effects = app.handle_input_event(key(KeyCode::Char(c)));
        assert!(effects.is_empty(), "typing should not produce effects");
    }
}

/// Send a single event and return the effects it produced
pub fn press(app: &mut App, event: Event) -> Vec<Effect> {
    app.handle_input_event(event)
}

/// Fill the three product fields and press Enter on the price field
pub fn add_product(app: &mut App, name: &str, weight: &str, price: &str) {
    use invoicer::ui::Focus;

    assert_eq!(app.state().focus, Focus::ProductName);
    type_text(app, name);
    press(app, key(KeyCode::Tab));
    type_text(app, weight);
    press(app, key(KeyCode::Tab));
    type_text(app, price);
    let effects = press(app, key(KeyCode::Enter));
    assert!(effects.is_empty());
}
