//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Platform-appropriate modifier for the alternate save shortcut
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const SAVE_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const SAVE_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Save shortcut display for help text
/// Ctrl+S works on all platforms (Cmd+W/Ctrl+W also work as fallback)
pub const SAVE_SHORTCUT: &str = "Ctrl+S";
