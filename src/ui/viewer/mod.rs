// SPDX-License-Identifier: MPL-2.0
//! Image viewer module: the zoomable cover image and its overlays.
//!
//! ```text
//! component.rs (orchestrator)
//!     ├── subcomponents::gesture - raw input to double tap, drag and pinch
//!     ├── info_panel             - scale and offset read-out
//!     ├── controls               - zoom out, reset, zoom in
//!     └── drawer                 - page drawer on the right edge
//! ```

pub mod component;
pub mod controls;
pub mod drawer;
pub mod info_panel;
pub mod subcomponents;
