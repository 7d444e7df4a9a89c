//! Keybinding system for context-aware keyboard shortcuts
//!
//! Provides a registry of keybindings that change based on the current application mode.

use crate::app::AppMode;
use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;

/// Actions that can be triggered by keybindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    NewScramble,
    ToggleCamera,
    ToggleRecording,
    ToggleExplanations,
    Help,
    Quit,
}

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
    pub action: KeyAction,
    pub display: String,
    pub description: String,
}

impl Keybinding {
    /// Create a new keybinding with no modifiers
    pub fn new(key: KeyCode, action: KeyAction, display: &str, description: &str) -> Self {
        Self {
            key,
            modifiers: KeyModifiers::NONE,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    /// Create a keybinding with modifiers
    pub fn with_modifiers(
        key: KeyCode,
        modifiers: KeyModifiers,
        action: KeyAction,
        display: &str,
        description: &str,
    ) -> Self {
        Self {
            key,
            modifiers,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    fn matches(&self, key: KeyCode, modifiers: KeyModifiers) -> bool {
        // SHIFT is ignored so '?' works on layouts that need it
        self.key == key && self.modifiers == modifiers.difference(KeyModifiers::SHIFT)
    }
}

/// Context-aware keybinding registry
pub struct KeybindingContext {
    /// Mode-specific keybindings
    mode_bindings: HashMap<AppMode, Vec<Keybinding>>,
    /// Global keybindings (available in all modes)
    global_bindings: Vec<Keybinding>,
}

impl Default for KeybindingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingContext {
    /// Create a new keybinding context with default bindings
    pub fn new() -> Self {
        let mut ctx = Self {
            mode_bindings: HashMap::new(),
            global_bindings: Vec::new(),
        };
        ctx.register_defaults();
        ctx
    }

    /// Register default keybindings for all modes
    fn register_defaults(&mut self) {
        self.global_bindings = vec![
            Keybinding::new(KeyCode::Char('?'), KeyAction::Help, "?", "Help"),
            Keybinding::new(KeyCode::Char('q'), KeyAction::Quit, "Q", "Quit"),
            Keybinding::new(KeyCode::Esc, KeyAction::Quit, "Esc", "Quit"),
            Keybinding::with_modifiers(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
                KeyAction::Quit,
                "Ctrl+C",
                "Quit",
            ),
        ];

        self.mode_bindings.insert(
            AppMode::Scramble,
            vec![
                Keybinding::new(KeyCode::Char('n'), KeyAction::NewScramble, "N", "New scramble"),
                Keybinding::new(KeyCode::Char('c'), KeyAction::ToggleCamera, "C", "Camera on/off"),
                Keybinding::new(KeyCode::Char(' '), KeyAction::ToggleRecording, "Space", "Start solve"),
                Keybinding::new(KeyCode::Char('e'), KeyAction::ToggleExplanations, "E", "Explanations"),
            ],
        );

        // No new scramble mid-solve
        self.mode_bindings.insert(
            AppMode::Recording,
            vec![
                Keybinding::new(KeyCode::Char(' '), KeyAction::ToggleRecording, "Space", "Stop solve"),
                Keybinding::new(KeyCode::Char('c'), KeyAction::ToggleCamera, "C", "Camera off"),
                Keybinding::new(KeyCode::Char('e'), KeyAction::ToggleExplanations, "E", "Explanations"),
            ],
        );

        self.mode_bindings.insert(
            AppMode::Analysis,
            vec![
                Keybinding::new(KeyCode::Char('n'), KeyAction::NewScramble, "N", "Next scramble"),
                Keybinding::new(KeyCode::Char(' '), KeyAction::ToggleRecording, "Space", "Solve again"),
                Keybinding::new(KeyCode::Char('c'), KeyAction::ToggleCamera, "C", "Camera on/off"),
                Keybinding::new(KeyCode::Char('e'), KeyAction::ToggleExplanations, "E", "Explanations"),
            ],
        );
    }

    /// Get keybindings for a specific mode (includes global bindings)
    pub fn get_bindings(&self, mode: &AppMode) -> Vec<&Keybinding> {
        let mut bindings: Vec<&Keybinding> = Vec::new();

        if let Some(mode_bindings) = self.mode_bindings.get(mode) {
            bindings.extend(mode_bindings.iter());
        }
        bindings.extend(self.global_bindings.iter());

        bindings
    }

    /// Resolve a key press to an action in the given mode
    pub fn action_for(
        &self,
        mode: &AppMode,
        key: KeyCode,
        modifiers: KeyModifiers,
    ) -> Option<KeyAction> {
        self.get_bindings(mode)
            .into_iter()
            .find(|b| b.matches(key, modifiers))
            .map(|b| b.action)
    }

    /// Get navigation bar items for display
    pub fn get_nav_items(&self, mode: &AppMode) -> Vec<NavBarItem> {
        let mut items: Vec<NavBarItem> = Vec::new();

        for binding in self.get_bindings(mode) {
            // One entry per action; Esc and Ctrl+C duplicate Q
            if items.iter().any(|i| i.action == binding.action) {
                continue;
            }
            items.push(NavBarItem {
                action: binding.action,
                key_display: binding.display.clone(),
                action_label: binding.description.clone(),
            });
        }

        items
    }

    /// Get full help content for a mode (for help overlay)
    pub fn get_help_content(&self, mode: &AppMode) -> Vec<HelpSection> {
        let mut sections = Vec::new();

        let solve_bindings: Vec<_> = self
            .get_bindings(mode)
            .into_iter()
            .filter(|b| {
                matches!(
                    b.action,
                    KeyAction::NewScramble
                        | KeyAction::ToggleCamera
                        | KeyAction::ToggleRecording
                        | KeyAction::ToggleExplanations
                )
            })
            .collect();

        if !solve_bindings.is_empty() {
            sections.push(HelpSection {
                title: "Solving".to_string(),
                items: solve_bindings
                    .iter()
                    .map(|b| (b.display.clone(), b.description.clone()))
                    .collect(),
            });
        }

        let general_bindings: Vec<_> = self
            .get_bindings(mode)
            .into_iter()
            .filter(|b| matches!(b.action, KeyAction::Help | KeyAction::Quit))
            .collect();

        if !general_bindings.is_empty() {
            sections.push(HelpSection {
                title: "General".to_string(),
                items: general_bindings
                    .iter()
                    .map(|b| (b.display.clone(), b.description.clone()))
                    .collect(),
            });
        }

        sections
    }
}

/// Navigation bar item for display
#[derive(Debug, Clone)]
pub struct NavBarItem {
    pub action: KeyAction,
    pub key_display: String,
    pub action_label: String,
}

/// Help section for the help overlay
#[derive(Debug, Clone)]
pub struct HelpSection {
    pub title: String,
    pub items: Vec<(String, String)>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_toggles_recording_in_every_mode() {
        let ctx = KeybindingContext::new();
        for mode in [AppMode::Scramble, AppMode::Recording, AppMode::Analysis] {
            assert_eq!(
                ctx.action_for(&mode, KeyCode::Char(' '), KeyModifiers::NONE),
                Some(KeyAction::ToggleRecording)
            );
        }
    }

    #[test]
    fn test_no_new_scramble_while_recording() {
        let ctx = KeybindingContext::new();
        assert_eq!(
            ctx.action_for(&AppMode::Recording, KeyCode::Char('n'), KeyModifiers::NONE),
            None
        );
        assert_eq!(
            ctx.action_for(&AppMode::Scramble, KeyCode::Char('n'), KeyModifiers::NONE),
            Some(KeyAction::NewScramble)
        );
    }

    #[test]
    fn test_ctrl_c_quits_but_plain_c_toggles_camera() {
        let ctx = KeybindingContext::new();
        assert_eq!(
            ctx.action_for(&AppMode::Scramble, KeyCode::Char('c'), KeyModifiers::CONTROL),
            Some(KeyAction::Quit)
        );
        assert_eq!(
            ctx.action_for(&AppMode::Scramble, KeyCode::Char('c'), KeyModifiers::NONE),
            Some(KeyAction::ToggleCamera)
        );
    }

    #[test]
    fn test_help_with_shift() {
        let ctx = KeybindingContext::new();
        assert_eq!(
            ctx.action_for(&AppMode::Analysis, KeyCode::Char('?'), KeyModifiers::SHIFT),
            Some(KeyAction::Help)
        );
    }

    #[test]
    fn test_nav_items_are_unique_per_action() {
        let ctx = KeybindingContext::new();
        let items = ctx.get_nav_items(&AppMode::Scramble);
        let quits = items.iter().filter(|i| i.action == KeyAction::Quit).count();
        assert_eq!(quits, 1);
        assert_eq!(items.len(), 6);
    }

    #[test]
    fn test_help_sections() {
        let ctx = KeybindingContext::new();
        let sections = ctx.get_help_content(&AppMode::Recording);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].title, "Solving");
        assert_eq!(sections[1].title, "General");
    }
}
