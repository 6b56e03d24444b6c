use crate::error::ShortenerError;
use crate::shortcode::ShortCode;

type Result<T> = std::result::Result<T, ShortenerError>;

pub trait Shortener: Send + Sync + 'static {
    /// Returns the short code for `long_url`, creating one on first use.
    ///
    /// Calling this repeatedly with the same URL always yields the same code.
    fn shorten(&self, long_url: &str) -> Result<ShortCode>;
}
