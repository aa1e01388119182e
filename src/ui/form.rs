//! Input widgets for the contact details form

use crossterm::event::KeyCode;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tui_textarea::TextArea;

use crate::booking::PersonalInfo;

/// Single-line text input with a visible cursor
pub struct TextField {
    pub value: String,
    pub cursor_pos: usize,
    pub placeholder: String,
    /// When set, typed characters must satisfy this predicate
    accept: Option<fn(char) -> bool>,
}

impl TextField {
    pub fn new(placeholder: &str) -> Self {
        Self {
            value: String::new(),
            cursor_pos: 0,
            placeholder: placeholder.to_string(),
            accept: None,
        }
    }

    /// A field that only accepts phone-number characters
    pub fn phone(placeholder: &str) -> Self {
        Self {
            accept: Some(|c| c.is_ascii_digit() || c == '+' || c == ' ' || c == '-'),
            ..Self::new(placeholder)
        }
    }

    pub fn set_value(&mut self, new_value: &str) {
        self.value = new_value.to_string();
        self.cursor_pos = self.value.len();
    }

    /// Handle a key event, returns true if the key was consumed
    pub fn handle_key(&mut self, key: KeyCode) -> bool {
        match key {
            KeyCode::Char(c) => {
                if self.accept.map_or(true, |f| f(c)) {
                    self.value.insert(self.cursor_pos, c);
                    self.cursor_pos += c.len_utf8();
                }
                true
            }
            KeyCode::Backspace => {
                if self.cursor_pos > 0 {
                    let prev = self.value[..self.cursor_pos]
                        .chars()
                        .next_back()
                        .map_or(1, char::len_utf8);
                    self.cursor_pos -= prev;
                    self.value.remove(self.cursor_pos);
                }
                true
            }
            KeyCode::Delete => {
                if self.cursor_pos < self.value.len() {
                    self.value.remove(self.cursor_pos);
                }
                true
            }
            KeyCode::Left => {
                if self.cursor_pos > 0 {
                    let prev = self.value[..self.cursor_pos]
                        .chars()
                        .next_back()
                        .map_or(1, char::len_utf8);
                    self.cursor_pos -= prev;
                }
                true
            }
            KeyCode::Right => {
                if self.cursor_pos < self.value.len() {
                    let next = self.value[self.cursor_pos..]
                        .chars()
                        .next()
                        .map_or(1, char::len_utf8);
                    self.cursor_pos += next;
                }
                true
            }
            KeyCode::Home => {
                self.cursor_pos = 0;
                true
            }
            KeyCode::End => {
                self.cursor_pos = self.value.len();
                true
            }
            _ => false,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, focused: bool) {
        let content = if self.value.is_empty() && !focused {
            Line::from(Span::styled(
                self.placeholder.as_str(),
                Style::default().fg(Color::DarkGray),
            ))
        } else {
            let mut text = self.value.clone();
            if focused {
                if self.cursor_pos < text.len() {
                    text.insert(self.cursor_pos, '|');
                } else {
                    text.push('|');
                }
            }
            Line::from(text)
        };

        let para = Paragraph::new(content).style(Style::default().fg(if focused {
            Color::White
        } else {
            Color::Gray
        }));
        frame.render_widget(para, area);
    }
}

/// Index order of the contact form fields
const FIELD_COUNT: usize = 3;

/// The three-field contact form: name, address, phone
pub struct ContactForm {
    pub name: TextField,
    pub address: Box<TextArea<'static>>,
    pub phone: TextField,
    pub focused_index: usize,
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            name: TextField::new("Full name of the contact person"),
            address: Box::new(TextArea::default()),
            phone: TextField::phone("Phone number, e.g. 9876543210"),
            focused_index: 0,
        }
    }

    pub fn next_field(&mut self) {
        self.focused_index = (self.focused_index + 1) % FIELD_COUNT;
    }

    pub fn prev_field(&mut self) {
        self.focused_index = if self.focused_index == 0 {
            FIELD_COUNT - 1
        } else {
            self.focused_index - 1
        };
    }

    pub fn is_last_field(&self) -> bool {
        self.focused_index == FIELD_COUNT - 1
    }

    /// Route a key to the focused field, returns true if consumed
    pub fn handle_key(&mut self, key: KeyCode) -> bool {
        match self.focused_index {
            0 => self.name.handle_key(key),
            1 => {
                self.address.input(crossterm::event::KeyEvent::new(
                    key,
                    crossterm::event::KeyModifiers::NONE,
                ));
                true
            }
            _ => self.phone.handle_key(key),
        }
    }

    /// Snapshot the current field values
    pub fn personal_info(&self) -> PersonalInfo {
        PersonalInfo {
            name: self.name.value.clone(),
            address: self.address.lines().join("\n"),
            phone: self.phone.value.clone(),
        }
    }

    /// Restore fields from a previously entered draft (back navigation)
    pub fn set_from(&mut self, info: &PersonalInfo) {
        self.name.set_value(&info.name);
        self.phone.set_value(&info.phone);
        self.address.select_all();
        self.address.cut();
        self.address.insert_str(&info.address);
    }

    pub fn render_address(&mut self, frame: &mut Frame, area: Rect, focused: bool) {
        let border_color = if focused { Color::Cyan } else { Color::Gray };
        self.address.set_cursor_line_style(Style::default());
        self.address.set_cursor_style(if focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        });
        self.address.set_block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color)),
        );
        if self.address.lines().iter().all(|l| l.is_empty()) && !focused {
            self.address
                .set_placeholder_text("Address where services are needed");
            self.address
                .set_placeholder_style(Style::default().fg(Color::DarkGray));
        }
        frame.render_widget(&*self.address, area);
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}
