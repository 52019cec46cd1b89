// SPDX-License-Identifier: MPL-2.0
//! `pinch_lens` displays a single image that can be zoomed and panned with
//! double taps, drags, pinches and on-screen controls.
//!
//! It is built with the Iced GUI framework, localized with Fluent, and keeps
//! its gesture tunables in a user `settings.toml`.

#![doc(html_root_url = "https://docs.rs/pinch_lens/0.1.0")]

pub mod app;
pub mod error;
pub mod i18n;
pub mod ui;
