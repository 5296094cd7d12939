use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{App, ConfirmChoice, InputMode};

#[derive(Debug, Clone, Copy)]
pub(crate) enum NormalAction {
    Quit,
    EnterAdd,
    EnterEdit,
    EnterSearch,
    ToggleDone,
    Delete,
    ClearAll,
    ToggleTheme,
    ShowHelp,
    Refresh,
    SelectNext,
    SelectPrev,
    PrevTab,
    NextTab,
    SelectFirst,
    SelectLast,
}

impl NormalAction {
    fn from_event(key: &KeyEvent) -> Option<Self> {
        if matches!(key.code, KeyCode::Char('c')) && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(Self::Quit);
        }

        match key.code {
            KeyCode::Char('q') => Some(Self::Quit),
            KeyCode::Char('a') => Some(Self::EnterAdd),
            KeyCode::Char('e') => Some(Self::EnterEdit),
            KeyCode::Char('/') => Some(Self::EnterSearch),
            KeyCode::Char('d') | KeyCode::Char(' ') | KeyCode::Enter => Some(Self::ToggleDone),
            KeyCode::Char('x') | KeyCode::Delete => Some(Self::Delete),
            KeyCode::Char('C') => Some(Self::ClearAll),
            KeyCode::Char('t') => Some(Self::ToggleTheme),
            KeyCode::Char('h') => Some(Self::ShowHelp),
            KeyCode::Char('r') => Some(Self::Refresh),
            KeyCode::Char('j') | KeyCode::Down => Some(Self::SelectNext),
            KeyCode::Char('k') | KeyCode::Up => Some(Self::SelectPrev),
            KeyCode::Left | KeyCode::BackTab => Some(Self::PrevTab),
            KeyCode::Char('l') | KeyCode::Right | KeyCode::Tab => Some(Self::NextTab),
            KeyCode::Home => Some(Self::SelectFirst),
            KeyCode::End => Some(Self::SelectLast),
            _ => None,
        }
    }
}

impl App {
    pub(crate) fn on_key(&mut self, key: KeyEvent) -> Result<()> {
        match self.input_mode {
            InputMode::Normal => self.handle_normal_mode(key),
            InputMode::Add => self.handle_add_mode(key),
            InputMode::Edit => self.handle_edit_mode(key),
            InputMode::Search => self.handle_search_mode(key),
            InputMode::Help => self.handle_help_mode(key),
            InputMode::ConfirmClear => self.handle_confirm_clear_mode(key),
        }
    }

    fn handle_normal_mode(&mut self, key: KeyEvent) -> Result<()> {
        if let Some(action) = NormalAction::from_event(&key) {
            self.execute_normal_action(action)?;
        }
        Ok(())
    }

    fn execute_normal_action(&mut self, action: NormalAction) -> Result<()> {
        match action {
            NormalAction::Quit => {
                self.should_quit = true;
            }
            NormalAction::EnterAdd => {
                self.start_add();
            }
            NormalAction::EnterEdit => {
                self.start_edit_selected();
            }
            NormalAction::EnterSearch => {
                self.start_search();
            }
            NormalAction::ToggleDone => {
                self.toggle_selected()?;
            }
            NormalAction::Delete => {
                self.delete_selected()?;
            }
            NormalAction::ClearAll => {
                self.prompt_clear();
            }
            NormalAction::ToggleTheme => {
                self.toggle_theme()?;
            }
            NormalAction::ShowHelp => {
                self.show_help_overlay();
            }
            NormalAction::Refresh => {
                self.refresh();
                self.set_status_info("Refreshed tasks");
            }
            NormalAction::SelectNext => self.select_next(),
            NormalAction::SelectPrev => self.select_prev(),
            NormalAction::PrevTab => self.prev_tab(),
            NormalAction::NextTab => self.next_tab(),
            NormalAction::SelectFirst => {
                if !self.visible.is_empty() {
                    self.selected = 0;
                    self.table_state.select(Some(self.selected));
                }
            }
            NormalAction::SelectLast => {
                if !self.visible.is_empty() {
                    self.selected = self.visible.len() - 1;
                    self.table_state.select(Some(self.selected));
                }
            }
        }
        Ok(())
    }

    fn handle_add_mode(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Enter => self.submit_input(),
            KeyCode::Esc => {
                self.cancel_input();
                Ok(())
            }
            _ => {
                self.edit_buffer_key(key);
                self.view.set_draft(self.input.as_str());
                Ok(())
            }
        }
    }

    fn handle_edit_mode(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Enter => self.submit_input(),
            KeyCode::Esc => {
                self.cancel_input();
                Ok(())
            }
            _ => {
                self.edit_buffer_key(key);
                self.view.set_draft(self.input.as_str());
                Ok(())
            }
        }
    }

    fn handle_search_mode(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Enter => {
                self.commit_search();
                Ok(())
            }
            KeyCode::Esc => {
                self.cancel_search();
                Ok(())
            }
            _ => {
                self.edit_buffer_key(key);
                self.sync_search();
                Ok(())
            }
        }
    }

    fn handle_help_mode(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('h') => {
                self.input_mode = InputMode::Normal;
                self.status = None;
                Ok(())
            }
            _ => Ok(()),
        }
    }

    fn handle_confirm_clear_mode(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Esc => {
                self.input_mode = InputMode::Normal;
                self.set_status_info("Clear cancelled");
                Ok(())
            }
            KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') => {
                self.confirm_choice = self.confirm_choice.toggle();
                Ok(())
            }
            KeyCode::Enter => {
                if self.confirm_choice == ConfirmChoice::Yes {
                    self.perform_clear()?;
                } else {
                    self.set_status_info("Clear cancelled");
                }
                self.input_mode = InputMode::Normal;
                Ok(())
            }
            _ => Ok(()),
        }
    }

    fn edit_buffer_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Backspace => self.input.backspace(),
            KeyCode::Delete => self.input.delete_char(),
            KeyCode::Char(c) => self.input.insert_char(c),
            KeyCode::Left => self.input.move_left(),
            KeyCode::Right => self.input.move_right(),
            KeyCode::Home => self.input.move_home(),
            KeyCode::End => self.input.move_end(),
            _ => {}
        }
    }
}
