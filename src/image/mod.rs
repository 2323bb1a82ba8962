pub mod io;
pub mod rgb;
pub mod traits;

pub use self::rgb::{ImageRgb8, Rgb, RgbImageBuf};
pub use self::traits::{ImageView, Rows};
