//! tinct provides small color primitives in the RGB and HSV models, with
//! conversions and blending operations between and within them.
//!
//! ```rust
//! use tinct::Rgb;
//!
//! let orange = Rgb::from_hex(0xFF8000);
//! let hsv = orange.to_hsv();
//! assert_eq!(hsv.to_rgb().to_bytes(), (255, 128, 0));
//! ```

#![deny(missing_docs)]

mod color;
mod hsv;
mod interpolate;
pub mod math;
mod parse;
mod rgb;


pub use color::Component;
pub use hsv::{Hsv, HUE_UNDEFINED};
pub use parse::ParseColorError;
pub use rgb::Rgb;
