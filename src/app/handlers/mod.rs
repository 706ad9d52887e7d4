//! Message handlers organized by domain
//!
//! Each module covers one group of tools. Handlers take `&mut State` plus
//! the message payload and return an [`iced::Task`] for any follow-up work
//! (config saves, network fetches, file dialogs).

pub mod calculator;
pub mod dates;
pub mod finance;
pub mod generate;
pub mod media;
pub mod text;
pub mod ui_state;

#[cfg(test)]
pub mod test_utils;

// Re-export all handlers for clean imports in app/mod.rs
pub(crate) use calculator::*;
pub(crate) use dates::*;
pub(crate) use finance::*;
pub(crate) use generate::*;
pub(crate) use media::*;
pub(crate) use text::*;
pub(crate) use ui_state::*;
