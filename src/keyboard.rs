use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

use crate::channel::KeyChannel;
use crate::controller::KeyboardController;
use crate::key::{Button, InputEvent};
use crate::signal::SubscriptionId;

/// A [`KeyboardController`] that can listen on its [`KeyChannel`].
///
/// The channel subscription is held between [`attach`](Self::attach) and
/// [`detach`](Self::detach), and released when the handle is disposed or
/// dropped.
pub struct Keyboard {
    controller: Rc<RefCell<KeyboardController>>,
    channel: Rc<KeyChannel>,
    subscription: Option<SubscriptionId>,
}

impl Keyboard {
    pub fn new(controller: KeyboardController) -> Self {
        let channel = Rc::clone(controller.channel());
        Self {
            controller: Rc::new(RefCell::new(controller)),
            channel,
            subscription: None,
        }
    }

    pub fn init(&self) {
        self.controller.borrow_mut().init();
    }

    /// Subscribes to key presses on the channel. Returns `false` if already
    /// attached.
    pub fn attach(&mut self) -> bool {
        if self.subscription.is_some() {
            return false;
        }
        let weak = Rc::downgrade(&self.controller);
        let id = self.channel.key_pressed.subscribe(move |key: &String| {
            let Some(controller) = weak.upgrade() else {
                return;
            };
            match controller.try_borrow_mut() {
                Ok(mut controller) => {
                    controller.press_key(key);
                }
                Err(_) => log::warn!("dropping re-entrant key press {key:?}"),
            }
        });
        self.subscription = Some(id);
        log::info!("keyboard attached to key channel");
        true
    }

    /// Returns `false` if not attached.
    pub fn detach(&mut self) -> bool {
        match self.subscription.take() {
            Some(id) => {
                self.channel.key_pressed.unsubscribe(id);
                log::info!("keyboard detached from key channel");
                true
            }
            None => false,
        }
    }

    pub fn is_attached(&self) -> bool {
        self.subscription.is_some()
    }

    pub fn press_button(&self, button: Button) -> bool {
        match self.controller.try_borrow_mut() {
            Ok(mut controller) => controller.press_button(button),
            Err(_) => {
                log::warn!("dropping re-entrant {button:?} press");
                false
            }
        }
    }

    pub fn handle(&self, event: InputEvent) -> bool {
        match self.controller.try_borrow_mut() {
            Ok(mut controller) => controller.handle(event),
            Err(_) => {
                log::warn!("dropping re-entrant {event:?}");
                false
            }
        }
    }

    pub fn channel(&self) -> &Rc<KeyChannel> {
        &self.channel
    }

    /// Panics while the controller is handling an event, i.e. from inside a
    /// subscriber. Use [`try_controller`](Self::try_controller) there.
    pub fn controller(&self) -> Ref<'_, KeyboardController> {
        self.controller.borrow()
    }

    /// `None` while the controller is handling an event.
    pub fn try_controller(&self) -> Option<Ref<'_, KeyboardController>> {
        self.controller.try_borrow().ok()
    }

    pub fn controller_mut(&self) -> RefMut<'_, KeyboardController> {
        self.controller.borrow_mut()
    }

    pub fn dispose(mut self) {
        self.detach();
        self.controller.borrow_mut().dispose();
    }
}

impl Drop for Keyboard {
    fn drop(&mut self) {
        self.detach();
    }
}
