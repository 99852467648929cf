//! Terminal stand-in for a VR scene, using crossterm and ratatui.
//!
//! The physical keyboard plays the role of the VR key widgets: letters go
//! through the key channel, the rest are mapped to keyboard buttons.
//! Run with: cargo run --example tui_crossterm
//!
//! Tab = shift, F2 = layout switch, F3 = numbers/special, Left/Right move the
//! caret (hold Shift to select), Esc quits.

use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use crossterm::{
    event::{self, Event, KeyCode as CKeyCode, KeyEvent as CKeyEvent, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout as TuiLayout},
    style::{Color as TuiColor, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use vr_keyboard::{
    Button, Color, KeyChannel, Keyboard, KeyboardConfig, KeyboardController, ShiftSprite,
};

struct App {
    keyboard: Keyboard,
    channel: Rc<KeyChannel>,
    message: Rc<RefCell<String>>,
    should_quit: bool,
}

impl App {
    fn new() -> Self {
        let channel = Rc::new(KeyChannel::new());
        let controller = KeyboardController::builder()
            .config(KeyboardConfig::default())
            .channel(Rc::clone(&channel))
            .build();

        let message = Rc::new(RefCell::new(String::from("Type something")));
        let sink = Rc::clone(&message);
        controller
            .submitted
            .subscribe(move |text| *sink.borrow_mut() = format!("Submitted {text:?}"));
        let sink = Rc::clone(&message);
        channel.first_key_press.subscribe(move |_| {
            *sink.borrow_mut() = String::from("First key pressed");
        });

        let mut keyboard = Keyboard::new(controller);
        keyboard.init();
        keyboard.attach();

        Self {
            keyboard,
            channel,
            message,
            should_quit: false,
        }
    }

    fn handle_crossterm_event(&mut self, event: CKeyEvent) {
        let button = match event.code {
            CKeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            CKeyCode::Char(' ') => Button::Space,
            CKeyCode::Char(c) => {
                // Key widgets only publish while enabled.
                if self.keyboard.controller().keys_enabled() {
                    self.channel.raise_key_pressed(&c.to_lowercase().to_string());
                }
                return;
            }
            CKeyCode::Tab => Button::Shift,
            CKeyCode::F(2) => Button::LayoutSwitch,
            CKeyCode::F(3) => Button::NumbersSpecial,
            CKeyCode::Backspace => Button::Delete,
            CKeyCode::Enter => Button::Enter,
            CKeyCode::Left | CKeyCode::Right => {
                self.move_caret(event);
                return;
            }
            _ => return,
        };
        self.keyboard.press_button(button);
    }

    fn move_caret(&mut self, event: CKeyEvent) {
        let mut kb = self.keyboard.controller_mut();
        let sel = kb.selection();
        let focus = match event.code {
            CKeyCode::Left => sel.focus.saturating_sub(1),
            _ => sel.focus + 1,
        };
        let anchor = if event.modifiers.contains(KeyModifiers::SHIFT) {
            sel.anchor
        } else {
            focus
        };
        kb.select(anchor, focus);
    }
}

fn tui_color(c: Color) -> TuiColor {
    TuiColor::Rgb(c.r, c.g, c.b)
}

fn ui(f: &mut Frame, app: &App) {
    let chunks = TuiLayout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(f.size());

    let kb = app.keyboard.controller();
    let view = kb.view_state();
    let sel = kb.selection();

    let mut spans = Vec::new();
    for (i, ch) in kb.text().chars().enumerate() {
        let style = if i >= sel.start() && i < sel.end() {
            Style::default().bg(TuiColor::Blue)
        } else {
            Style::default()
        };
        spans.push(Span::styled(ch.to_string(), style));
    }
    let output = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("Output {}/{}", kb.text().chars().count(), kb.config().max_characters)),
    );
    f.render_widget(output, chunks[0]);

    let shift_label = match view.shift.sprite {
        ShiftSprite::Active => "CAPS",
        ShiftSprite::Default => "Shift",
    };
    let mut chrome = vec![
        Span::styled(
            format!("[{shift_label}]"),
            Style::default().fg(tui_color(view.shift.color)),
        ),
        Span::raw(format!(" [{}]", view.switch_label)),
    ];
    if view.numbers_special_visible {
        chrome.push(Span::raw(format!(" [{}]", view.numbers_special_label)));
    }
    let enter_style = if view.enter_enabled {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(TuiColor::DarkGray)
    };
    chrome.push(Span::styled(" [Enter]", enter_style));
    if let Some(counter) = &view.counter_text {
        chrome.push(Span::raw(format!("  {counter}")));
    }
    let keys = Paragraph::new(Line::from(chrome)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("{:?}", view.layout)),
    );
    f.render_widget(keys, chunks[1]);

    let status = Paragraph::new(app.message.borrow().clone())
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, chunks[2]);

    f.set_cursor(chunks[0].x + 1 + sel.focus as u16, chunks[0].y + 1);
}

fn main() -> Result<(), io::Error> {
    env_logger::init();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();

    loop {
        terminal.draw(|f| ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            if key.code == CKeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                break;
            }

            app.handle_crossterm_event(key);

            if app.should_quit {
                break;
            }
        }
    }

    app.keyboard.dispose();

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
