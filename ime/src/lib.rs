//! IME - Image manipulation and enhancement engine
//!
//! Pure, synchronous operations over in-memory RGB images:
//!
//! - Channel views, flips and brightness (re-exported from `ime-core`)
//! - Convolution filters ([`filter`])
//! - Histograms, color correction, level adjustment and sepia ([`color`])
//! - Haar wavelet compression ([`wavelet`])
//! - Split-view previews of any [`Operation`]
//!
//! # Example
//!
//! ```
//! use ime::{Image, ImageTransform, Operation, Pixel};
//!
//! let img = Image::from_fn(8, 4, 255, |r, c| Pixel::new((c * 30) as i64, (r * 60) as i64, 90, 255));
//! let blurred = Operation::Blur.apply(&img).unwrap();
//! assert_eq!(blurred.dimensions(), (8, 4));
//!
//! let preview = Operation::Sepia.preview(&img, 50.0).unwrap();
//! assert_eq!(preview.get_pixel(0, 7).unwrap(), img.get_pixel(0, 7).unwrap());
//! ```

mod error;
mod operation;

// Re-export core types (primary data structures used everywhere)
pub use ime_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use ime_color as color;
pub use ime_filter as filter;
pub use ime_wavelet as wavelet;

pub use error::{ImeError, ImeResult};
pub use operation::Operation;
