//! Cursor movement handlers for the discovery list.
//!
//! Every movement may bring the cursor near the bottom of the loaded list,
//! so each handler finishes by polling the load-more sentinel.

use bubbletea_rs::Cmd;

use super::DiscoveryApp;
use crate::tui::messages::AppMsg;

/// Number of rows a page-wise movement jumps.
const PAGE_JUMP: usize = 10;

impl DiscoveryApp {
    /// Dispatches navigation messages to their handlers.
    pub(super) fn handle_navigation_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        let max_index = self.visible_indices.len().saturating_sub(1);
        match msg {
            AppMsg::CursorUp => {
                self.cursor_position = self.cursor_position.saturating_sub(1);
            }
            AppMsg::CursorDown => {
                if self.cursor_position < max_index {
                    self.cursor_position = self.cursor_position.saturating_add(1);
                }
            }
            AppMsg::PageUp => {
                self.cursor_position = self.cursor_position.saturating_sub(PAGE_JUMP);
            }
            AppMsg::PageDown => {
                self.cursor_position = self.cursor_position.saturating_add(PAGE_JUMP).min(max_index);
            }
            AppMsg::Home => {
                self.cursor_position = 0;
            }
            AppMsg::End => {
                self.cursor_position = max_index;
            }
            _ => return None,
        }
        self.maybe_load_more()
    }
}
