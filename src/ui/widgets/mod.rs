// SPDX-License-Identifier: MPL-2.0
pub mod transform_image;

pub use transform_image::{Transform, TransformImage};
