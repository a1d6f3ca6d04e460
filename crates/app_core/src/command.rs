//! Command system for user actions

use serde::{Deserialize, Serialize};

/// Command identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CommandId(pub String);

impl CommandId {
    pub fn new(id: &str) -> Self {
        Self(id.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    // Lightbox commands
    pub const LIGHTBOX_NEXT: &'static str = "lightbox.next";
    pub const LIGHTBOX_PREV: &'static str = "lightbox.prev";
    pub const LIGHTBOX_CLOSE: &'static str = "lightbox.close";

    // Gallery commands
    pub const GALLERY_FILTER: &'static str = "gallery.filter";
    pub const GALLERY_OPEN: &'static str = "gallery.open";

    // App commands
    pub const APP_LANGUAGE: &'static str = "app.language";
    pub const APP_SCROLL_TO: &'static str = "app.scroll_to";
    pub const APP_QUIT: &'static str = "app.quit";

    /// Scope in which this command may be bound to a key
    pub fn scope(&self) -> KeyScopeKind {
        if self.0.starts_with("lightbox.") {
            KeyScopeKind::Lightbox
        } else {
            KeyScopeKind::Page
        }
    }
}

/// Command with optional parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub id: CommandId,
    pub params: CommandParams,
}

/// Command parameters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandParams {
    pub int_value: Option<i64>,
    pub string_value: Option<String>,
}

impl Command {
    pub fn new(id: &str) -> Self {
        Self {
            id: CommandId::new(id),
            params: CommandParams::default(),
        }
    }

    pub fn with_int(mut self, value: i64) -> Self {
        self.params.int_value = Some(value);
        self
    }

    pub fn with_string(mut self, value: &str) -> Self {
        self.params.string_value = Some(value.to_string());
        self
    }

    pub fn is(&self, id: &str) -> bool {
        self.id.as_str() == id
    }
}

/// Which set of key bindings is currently live
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyScope {
    /// Normal page browsing
    Page,
    /// Lightbox open; `navigation` is false with a single image
    Lightbox { navigation: bool },
}

impl KeyScope {
    /// Does this scope bind `command`?
    ///
    /// Lightbox bindings exist only while the lightbox is open, and
    /// Prev/Next only when there is something to step to.
    pub fn binds(&self, command: &CommandId) -> bool {
        match (self, command.scope()) {
            (KeyScope::Page, KeyScopeKind::Page) => true,
            (KeyScope::Page, KeyScopeKind::Lightbox) => false,
            (KeyScope::Lightbox { .. }, KeyScopeKind::Page) => command.as_str() == CommandId::APP_QUIT,
            (KeyScope::Lightbox { navigation }, KeyScopeKind::Lightbox) => {
                *navigation || command.as_str() == CommandId::LIGHTBOX_CLOSE
            }
        }
    }
}

/// Scope a command belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyScopeKind {
    Page,
    Lightbox,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_builder() {
        let cmd = Command::new(CommandId::GALLERY_FILTER).with_string("street");
        assert!(cmd.is(CommandId::GALLERY_FILTER));
        assert_eq!(cmd.params.string_value.as_deref(), Some("street"));
        assert_eq!(Command::new(CommandId::GALLERY_OPEN).with_int(3).params.int_value, Some(3));
    }

    #[test]
    fn test_page_scope_does_not_bind_lightbox_keys() {
        let scope = KeyScope::Page;
        assert!(!scope.binds(&CommandId::new(CommandId::LIGHTBOX_NEXT)));
        assert!(!scope.binds(&CommandId::new(CommandId::LIGHTBOX_CLOSE)));
        assert!(scope.binds(&CommandId::new(CommandId::APP_QUIT)));
    }

    #[test]
    fn test_lightbox_scope() {
        let nav = KeyScope::Lightbox { navigation: true };
        assert!(nav.binds(&CommandId::new(CommandId::LIGHTBOX_NEXT)));
        assert!(nav.binds(&CommandId::new(CommandId::LIGHTBOX_PREV)));
        assert!(nav.binds(&CommandId::new(CommandId::LIGHTBOX_CLOSE)));
        assert!(!nav.binds(&CommandId::new(CommandId::APP_LANGUAGE)));

        let single = KeyScope::Lightbox { navigation: false };
        assert!(!single.binds(&CommandId::new(CommandId::LIGHTBOX_NEXT)));
        assert!(single.binds(&CommandId::new(CommandId::LIGHTBOX_CLOSE)));
    }
}
