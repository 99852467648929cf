use std::cell::{Cell, RefCell};
use std::rc::Rc;

use vr_keyboard::{
    Button, InputEvent, KeyChannel, Keyboard, KeyboardConfig, KeyboardController, ShiftSprite,
    ViewState,
};

mod support;
use support::manual_clock::ManualClock;
use support::recorder::{Event, Recorder};

fn controller(channel: &Rc<KeyChannel>) -> KeyboardController {
    let _ = env_logger::builder().is_test(true).try_init();
    KeyboardController::builder()
        .config(KeyboardConfig {
            auto_caps_at_start: false,
            ..Default::default()
        })
        .channel(Rc::clone(channel))
        .clock(ManualClock::new())
        .build()
}

#[test]
fn events_before_init_are_dropped() {
    let channel = Rc::new(KeyChannel::new());
    let mut kb = controller(&channel);
    let rec = Recorder::attach(&kb);

    assert!(!kb.press_key("a"));
    assert!(!kb.press_button(Button::Space));
    assert!(!kb.handle(InputEvent::Button(Button::Shift)));
    assert_eq!(kb.text(), "");
    assert_eq!(kb.total_presses(), 0);
    assert!(rec.events().is_empty());

    kb.init();
    assert!(kb.is_ready());
    assert!(kb.handle(InputEvent::from('a')));
    assert_eq!(kb.text(), "a");
}

#[test]
fn init_is_idempotent() {
    let channel = Rc::new(KeyChannel::new());
    let mut kb = controller(&channel);
    let rec = Recorder::attach(&kb);
    kb.init();
    kb.init();
    assert_eq!(rec.count(|e| matches!(e, Event::KeyColors(_))), 1);
}

#[test]
fn attached_keyboard_receives_channel_keys() {
    let channel = Rc::new(KeyChannel::new());
    let mut keyboard = Keyboard::new(controller(&channel));
    keyboard.init();

    channel.raise_key_pressed("a");
    assert_eq!(keyboard.controller().text(), "");

    assert!(keyboard.attach());
    assert!(!keyboard.attach());
    assert_eq!(channel.key_pressed.subscriber_count(), 1);

    channel.raise_key_pressed("a");
    channel.raise_key_pressed("b");
    assert!(keyboard.press_button(Button::Space));
    assert_eq!(keyboard.controller().text(), "ab ");
    assert_eq!(keyboard.controller().total_presses(), 3);

    assert!(keyboard.detach());
    assert!(!keyboard.detach());
    assert_eq!(channel.key_pressed.subscriber_count(), 0);

    channel.raise_key_pressed("c");
    assert_eq!(keyboard.controller().text(), "ab ");
}

#[test]
fn dropping_the_keyboard_releases_the_subscription() {
    let channel = Rc::new(KeyChannel::new());
    {
        let mut keyboard = Keyboard::new(controller(&channel));
        keyboard.init();
        keyboard.attach();
        assert_eq!(channel.key_pressed.subscriber_count(), 1);
    }
    assert_eq!(channel.key_pressed.subscriber_count(), 0);
    // Nothing left to deliver to.
    channel.raise_key_pressed("a");
}

#[test]
fn dispose_detaches_and_silences_the_controller() {
    let channel = Rc::new(KeyChannel::new());
    let mut kb = controller(&channel);
    kb.init();
    let rec = Recorder::attach(&kb);

    let mut keyboard = Keyboard::new(kb);
    keyboard.attach();
    keyboard.dispose();

    assert_eq!(channel.key_pressed.subscriber_count(), 0);
    channel.raise_key_pressed("a");
    assert!(rec.events().is_empty());
}

#[test]
fn disposed_controller_drops_events() {
    let channel = Rc::new(KeyChannel::new());
    let mut kb = controller(&channel);
    kb.init();
    kb.dispose();

    assert!(kb.is_disposed());
    assert!(!kb.press_key("a"));
    assert!(!kb.press_button(Button::Delete));
    assert_eq!(kb.keyboard_mode_changed.subscriber_count(), 0);
    assert_eq!(kb.press_count_changed().subscriber_count(), 0);

    kb.init();
    assert!(!kb.is_ready());
}

#[test]
fn re_entrant_key_press_is_dropped() {
    let channel = Rc::new(KeyChannel::new());
    let mut keyboard = Keyboard::new(controller(&channel));
    keyboard.init();
    keyboard.attach();

    let inner = Rc::clone(&channel);
    keyboard
        .controller()
        .keyboard_mode_changed
        .subscribe(move |_| inner.raise_key_pressed("z"));

    assert!(keyboard.press_button(Button::Shift));
    let kb = keyboard.controller();
    assert_eq!(kb.text(), "");
    assert!(kb.is_shift_active());
    assert_eq!(kb.total_presses(), 1);
}

#[test]
fn channel_is_shared_with_key_widgets() {
    let channel = Rc::new(KeyChannel::new());
    let mut keyboard = Keyboard::new(controller(&channel));
    assert!(Rc::ptr_eq(keyboard.channel(), &channel));

    let enabled = Rc::new(Cell::new(true));
    let widget = Rc::clone(&enabled);
    channel
        .keys_state_changed
        .subscribe(move |on| widget.set(*on));

    keyboard.init();
    keyboard.attach();
    keyboard.controller_mut().select(0, 0);
    for _ in 0..15 {
        channel.raise_key_pressed("x");
    }
    assert!(!enabled.get());
    keyboard.press_button(Button::Delete);
    assert!(enabled.get());
}

#[test]
fn mode_subscribers_render_from_the_payload() {
    let channel = Rc::new(KeyChannel::new());
    let keyboard = Rc::new(RefCell::new(Keyboard::new(controller(&channel))));
    keyboard.borrow().init();

    let seen: Rc<RefCell<Vec<ViewState>>> = Rc::default();
    let reads = Rc::new(Cell::new(0));
    {
        let seen = Rc::clone(&seen);
        let reads = Rc::clone(&reads);
        let kb = Rc::downgrade(&keyboard);
        keyboard
            .borrow()
            .controller()
            .keyboard_mode_changed
            .subscribe(move |view| {
                seen.borrow_mut().push(view.clone());
                let Some(kb) = kb.upgrade() else { return };
                // Reading back mid-handler must not panic.
                if kb.borrow().try_controller().is_some() {
                    reads.set(reads.get() + 1);
                }
            });
    }

    assert!(keyboard.borrow().press_button(Button::Shift));
    assert!(keyboard.borrow().controller().is_shift_active());
    assert_eq!(reads.get(), 0);

    let seen = seen.borrow();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].shift.color, KeyboardConfig::default().colors.highlighted);
    assert_eq!(seen[0].shift.sprite, ShiftSprite::Default);
    assert_eq!(seen[0].counter_text.as_deref(), Some("Presses: 1"));
}

#[test]
fn try_controller_reads_outside_handlers() {
    let channel = Rc::new(KeyChannel::new());
    let keyboard = Keyboard::new(controller(&channel));
    keyboard.init();
    keyboard.press_button(Button::Shift);
    let kb = keyboard.try_controller().map(|kb| kb.is_shift_active());
    assert_eq!(kb, Some(true));
}
