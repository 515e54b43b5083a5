//! Shared UI icons and emojis.
//!
//! Emoji constants used across the chat rendering for consistent visual
//! styling, with plain-text fallbacks for dumb terminals.

use console::Emoji;

// Status indicators
pub static CHECK: Emoji<'_, '_> = Emoji("✅ ", "[OK]");
pub static CROSS: Emoji<'_, '_> = Emoji("❌ ", "[ERR]");
pub static SPARKLE: Emoji<'_, '_> = Emoji("✨ ", "*");

// Chat indicators
pub static BOT: Emoji<'_, '_> = Emoji("🤖 ", "[bot]");
pub static USER: Emoji<'_, '_> = Emoji("👤 ", "[you]");

// Integration indicators
pub static PLUG: Emoji<'_, '_> = Emoji("🔌 ", "[~]");
pub static LINK: Emoji<'_, '_> = Emoji("🔗 ", "[=]");

// Pipeline indicators
pub static PROGRESS: Emoji<'_, '_> = Emoji("📊 ", "[PROG]");
pub static CALENDAR: Emoji<'_, '_> = Emoji("📅 ", "[CAL]");
pub static DOCUMENT: Emoji<'_, '_> = Emoji("📄 ", "[DOC]");
