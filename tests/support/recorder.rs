use std::cell::RefCell;
use std::rc::Rc;
use vr_keyboard::{KeyColors, KeyboardController};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    KeyColors(KeyColors),
    KeysState(bool),
    FirstKeyPress,
    ModeChanged,
    PressCount(u32),
    EnterState(bool),
    Submitted(String),
}

/// Collects every signal a controller and its channel emit, in order.
#[derive(Default, Debug, Clone)]
pub struct Recorder {
    events: Rc<RefCell<Vec<Event>>>,
}

impl Recorder {
    pub fn attach(kb: &KeyboardController) -> Self {
        let rec = Self::default();
        let channel = kb.channel();

        let sink = rec.sink();
        channel
            .key_colors_changed
            .subscribe(move |c| sink.borrow_mut().push(Event::KeyColors(*c)));
        let sink = rec.sink();
        channel
            .keys_state_changed
            .subscribe(move |b| sink.borrow_mut().push(Event::KeysState(*b)));
        let sink = rec.sink();
        channel
            .first_key_press
            .subscribe(move |_| sink.borrow_mut().push(Event::FirstKeyPress));
        let sink = rec.sink();
        kb.keyboard_mode_changed
            .subscribe(move |_| sink.borrow_mut().push(Event::ModeChanged));
        let sink = rec.sink();
        kb.press_count_changed()
            .subscribe(move |n| sink.borrow_mut().push(Event::PressCount(*n)));
        let sink = rec.sink();
        kb.enter_state_changed
            .subscribe(move |b| sink.borrow_mut().push(Event::EnterState(*b)));
        let sink = rec.sink();
        kb.submitted
            .subscribe(move |s| sink.borrow_mut().push(Event::Submitted(s.clone())));
        rec
    }

    fn sink(&self) -> Rc<RefCell<Vec<Event>>> {
        Rc::clone(&self.events)
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }

    pub fn count(&self, pred: impl Fn(&Event) -> bool) -> usize {
        self.events.borrow().iter().filter(|e| pred(e)).count()
    }

    pub fn last_keys_state(&self) -> Option<bool> {
        self.events.borrow().iter().rev().find_map(|e| match e {
            Event::KeysState(b) => Some(*b),
            _ => None,
        })
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}
