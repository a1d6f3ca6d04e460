//! Input handling and keybinding resolution

use app_core::{Command, CommandId, KeyScope};
use std::collections::HashMap;
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{Key, ModifiersState, NamedKey};

/// Input handler that maps keys to commands
///
/// A key may be bound in more than one scope; the live [`KeyScope`] picks
/// which binding (if any) fires.
pub struct InputHandler {
    /// Key bindings: lower-cased key string -> command IDs
    bindings: HashMap<String, Vec<String>>,

    /// Current modifier state
    modifiers: ModifiersState,
}

impl InputHandler {
    /// Create a new input handler with bindings (command -> keys)
    pub fn new(bindings: HashMap<String, Vec<String>>) -> Self {
        let mut key_to_commands: HashMap<String, Vec<String>> = HashMap::new();

        for (command, keys) in bindings {
            for key in keys {
                key_to_commands
                    .entry(key.to_lowercase())
                    .or_default()
                    .push(command.clone());
            }
        }
        for commands in key_to_commands.values_mut() {
            commands.sort();
        }

        Self {
            bindings: key_to_commands,
            modifiers: ModifiersState::empty(),
        }
    }

    /// Update modifier state
    pub fn update_modifiers(&mut self, modifiers: ModifiersState) {
        self.modifiers = modifiers;
    }

    /// Handle a key event and return the command bound in `scope`
    pub fn handle_key(&self, event: &KeyEvent, scope: KeyScope) -> Option<Command> {
        if event.state != ElementState::Pressed {
            return None;
        }

        let key_str = key_to_string(&event.logical_key);
        if key_str.is_empty() {
            return None;
        }
        let full_key = build_key_string(self.modifiers, &key_str);

        tracing::debug!("Key pressed: {}", full_key);
        self.resolve(&full_key, scope)
    }

    /// Look up a key string such as `"Ctrl+q"` in `scope`
    pub fn resolve(&self, key: &str, scope: KeyScope) -> Option<Command> {
        self.bindings
            .get(&key.to_lowercase())?
            .iter()
            .find(|id| scope.binds(&CommandId::new(id)))
            .map(|id| Command::new(id))
    }
}

/// Build a key string with modifiers
fn build_key_string(modifiers: ModifiersState, key: &str) -> String {
    let mut parts = Vec::new();

    if modifiers.control_key() {
        parts.push("Ctrl");
    }
    if modifiers.alt_key() {
        parts.push("Alt");
    }
    if modifiers.shift_key() {
        parts.push("Shift");
    }
    if modifiers.super_key() {
        parts.push("Super");
    }

    parts.push(key);
    parts.join("+")
}

/// Convert a logical key to a string
fn key_to_string(key: &Key) -> String {
    match key {
        Key::Named(named) => match named {
            NamedKey::Space => "Space".to_string(),
            NamedKey::Enter => "Return".to_string(),
            NamedKey::Escape => "Escape".to_string(),
            NamedKey::Home => "Home".to_string(),
            NamedKey::End => "End".to_string(),
            NamedKey::PageUp => "PageUp".to_string(),
            NamedKey::PageDown => "PageDown".to_string(),
            NamedKey::ArrowUp => "Up".to_string(),
            NamedKey::ArrowDown => "Down".to_string(),
            NamedKey::ArrowLeft => "Left".to_string(),
            NamedKey::ArrowRight => "Right".to_string(),
            _ => format!("{:?}", named),
        },
        Key::Character(c) => c.to_string(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handler() -> InputHandler {
        InputHandler::new(app_core::AppConfig::default().keybindings)
    }

    #[test]
    fn test_arrows_unbound_on_page() {
        let input = handler();
        assert_eq!(input.resolve("Right", KeyScope::Page), None);
        assert_eq!(input.resolve("Escape", KeyScope::Page), None);
    }

    #[test]
    fn test_lightbox_scope_binds_navigation() {
        let input = handler();
        let scope = KeyScope::Lightbox { navigation: true };
        assert_eq!(
            input.resolve("Right", scope),
            Some(Command::new(CommandId::LIGHTBOX_NEXT))
        );
        assert_eq!(
            input.resolve("left", scope),
            Some(Command::new(CommandId::LIGHTBOX_PREV))
        );
        assert_eq!(
            input.resolve("Escape", scope),
            Some(Command::new(CommandId::LIGHTBOX_CLOSE))
        );
    }

    #[test]
    fn test_single_image_only_binds_close() {
        let input = handler();
        let scope = KeyScope::Lightbox { navigation: false };
        assert_eq!(input.resolve("Right", scope), None);
        assert_eq!(input.resolve("Left", scope), None);
        assert!(input.resolve("Escape", scope).is_some());
    }

    #[test]
    fn test_quit_in_every_scope() {
        let input = handler();
        for scope in [KeyScope::Page, KeyScope::Lightbox { navigation: true }] {
            assert_eq!(
                input.resolve("Ctrl+Q", scope),
                Some(Command::new(CommandId::APP_QUIT))
            );
        }
    }

    #[test]
    fn test_modifier_string() {
        let mods = ModifiersState::CONTROL | ModifiersState::SHIFT;
        assert_eq!(build_key_string(mods, "q"), "Ctrl+Shift+q");
        assert_eq!(build_key_string(ModifiersState::empty(), "Left"), "Left");
    }
}
