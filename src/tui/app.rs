use std::time::SystemTime;

use super::traits::View;

/// Application state managing navigation
pub struct AppState {
    pub view_stack: Vec<Box<dyn View>>,
    /// One-off message shown in the status bar until the next key press
    pub notice: Option<String>,
}

impl AppState {
    pub fn new(root_view: Box<dyn View>) -> Self {
        AppState {
            view_stack: vec![root_view],
            notice: None,
        }
    }

    /// Get the current active view (top of stack)
    pub fn current_view(&mut self) -> &mut dyn View {
        let last = self.view_stack.len() - 1;
        self.view_stack[last].as_mut()
    }

    /// Push a new view onto the stack
    pub fn push_view(&mut self, view: Box<dyn View>) {
        self.view_stack.push(view);
    }

    /// Pop the current view from the stack
    /// Returns false if we're already at the root view
    pub fn pop_view(&mut self) -> bool {
        if self.view_stack.len() > 1 {
            self.view_stack.pop();
            true
        } else {
            false
        }
    }

    /// Get the current navigation depth (0 = root view)
    pub fn depth(&self) -> usize {
        self.view_stack.len() - 1
    }

    /// Let every view on the stack process background results
    pub fn update_all(&mut self) {
        for view in self.view_stack.iter_mut() {
            view.update();
        }
    }

    pub fn breadcrumb(&self) -> Vec<String> {
        let mut crumbs = vec!["Scores".to_string()];
        crumbs.extend(self.view_stack.iter().map(|v| v.breadcrumb_label()));
        crumbs
    }

    pub fn key_hints(&self) -> Vec<&'static str> {
        self.view_stack
            .last()
            .map(|v| v.key_hints())
            .unwrap_or_default()
    }

    /// Last refresh reported by any view, topmost first
    pub fn last_refresh(&self) -> Option<SystemTime> {
        self.view_stack.iter().rev().find_map(|v| v.last_refresh())
    }
}
