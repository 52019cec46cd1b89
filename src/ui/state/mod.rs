// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! This module contains the image transform logic separated from the widgets
//! that render it, following the principle of separation of concerns.

pub mod animation;
pub mod scale;
pub mod transform;

// Re-export commonly used types for convenience
pub use animation::{Animated, Easing, Frame, TransformAnimation};
pub use scale::{ButtonStep, ZoomScale};
pub use transform::{TransformController, TransformSettings, ViewState};
