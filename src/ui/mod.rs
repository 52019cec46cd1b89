// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`viewer`] - Zoomable image with info panel, controls and drawer
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Transform controller, scale and animation state
//! - [`widgets`] - Custom Iced widgets (transformed image surface)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - Embedded SVG icons and the cover image
//! - [`navbar`] - Title bar

pub mod design_tokens;
pub mod icons;
pub mod navbar;
pub mod state;
pub mod styles;
pub mod theming;
pub mod viewer;
pub mod widgets;
