//! Module implementing the builder for `Engine`.

use std::error;
use std::fmt;
use std::path::Path;

use resources::{CachingLoader, Font, FontLoader, Loader};
use super::config::Config;
use super::{Engine, Inner};


const DEFAULT_FONT_CAPACITY: usize = 16;


/// Builder for `Engine`.
#[derive(Debug)]
#[must_use = "unused builder which must be used"]
pub struct Builder<Fl = FontLoader>
    where Fl: Loader<Item=Font>
{
    errors: Vec<Error>,
    loader: Option<LoaderSetup<Fl>>,
    font_cache_size: usize,
    export_width: Option<u32>,
    export_height: Option<u32>,
}

/// How the engine's font loader is to be set up.
#[derive(Debug)]
enum LoaderSetup<Fl: Loader> {
    /// Wrap the loader in an LRU cache.
    Cached(Fl),
    /// Use the loader as-is, without caching.
    Raw(Fl),
}

impl<Fl> Builder<Fl>
    where Fl: Loader<Item=Font>
{
    /// Create a new `Builder`.
    #[inline]
    pub fn new() -> Self {
        Builder::default()
    }
}
impl<Fl> Default for Builder<Fl>
    where Fl: Loader<Item=Font>
{
    fn default() -> Self {
        Builder{
            errors: vec![],
            loader: None,
            font_cache_size: DEFAULT_FONT_CAPACITY,
            export_width: None,
            export_height: None,
        }
    }
}

// Setters.
impl Builder<FontLoader> {
    /// Set the directory where the fonts will be loaded from.
    #[inline]
    pub fn font_directory<P: AsRef<Path>>(self, directory: P) -> Self {
        self.font_loader(FontLoader::new(directory))
    }
}
impl<Fl> Builder<Fl>
    where Fl: Loader<Item=Font>
{
    /// Set a custom loader for fonts.
    ///
    /// Fonts loaded by it will still be cached in an LRU cache.
    /// See `raw_font_loader` if you want to provide your own caching.
    pub fn font_loader(mut self, loader: Fl) -> Self {
        match self.loader {
            None => { self.loader = Some(LoaderSetup::Cached(loader)); self }
            Some(_) => self.err(Error::LoaderConflict),
        }
    }

    /// Set a custom "raw" loader for fonts.
    ///
    /// Fonts loaded this way will not be cached (unless the loader itself
    /// implements some kind of caching).
    pub fn raw_font_loader(mut self, loader: Fl) -> Self {
        match self.loader {
            None => { self.loader = Some(LoaderSetup::Raw(loader)); self }
            Some(_) => self.err(Error::LoaderConflict),
        }
    }

    /// Change the size of the font cache.
    #[inline]
    pub fn font_cache_size(mut self, size: usize) -> Self {
        self.font_cache_size = size; self
    }

    /// Set the pixel size of exported images.
    #[inline]
    pub fn export_size(mut self, width: u32, height: u32) -> Self {
        self.export_width = Some(width);
        self.export_height = Some(height);
        self
    }
}

// Validation & building.
impl<Fl> Builder<Fl>
    where Fl: Loader<Item=Font>
{
    /// Build the `Engine`.
    pub fn build(mut self) -> Result<Engine<Fl>, Error> {
        if let Some(error) = self.errors.pop() {
            return Err(error);
        }

        let config = self.build_config();
        let font_loader = match self.loader {
            None => return Err(Error::NoLoader),
            Some(LoaderSetup::Cached(loader)) =>
                CachingLoader::new(loader, self.font_cache_size),
            // The phony CachingLoader doesn't actually cache anything,
            // but provides the same interface yielding Arc<Font>.
            Some(LoaderSetup::Raw(loader)) => CachingLoader::phony(loader),
        };
        Ok(Engine::from(Inner::new(config, font_loader)))
    }

    #[doc(hidden)]
    fn build_config(&self) -> Config {
        let mut config = Config::default();
        if let Some(width) = self.export_width {
            config.width = width;
        }
        if let Some(height) = self.export_height {
            config.height = height;
        }
        config
    }

    #[doc(hidden)]
    fn err(mut self, error: Error) -> Self {
        self.errors.push(error); self
    }
}


/// Error that resulted from misconfiguration of the `Engine` via its `Builder`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// No font loader set up.
    NoLoader,
    /// More than one font loader set up.
    LoaderConflict,
}

impl error::Error for Error {
    fn description(&self) -> &str { "engine build error" }
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::NoLoader => write!(fmt, "no font loader configured"),
            Error::LoaderConflict =>
                write!(fmt, "multiple font loaders configured for the engine"),
        }
    }
}


#[cfg(test)]
mod tests {
    use resources::FontLoader;
    use super::{Builder, Error};

    #[test]
    fn loader_is_required() {
        let result = Builder::<FontLoader>::new().build();
        assert_eq!(Err(Error::NoLoader), result.map(|_| ()));
    }

    #[test]
    fn conflicting_loaders_are_rejected() {
        let result = Builder::new()
            .font_directory("fonts")
            .raw_font_loader(FontLoader::new("fonts"))
            .build();
        assert_eq!(Err(Error::LoaderConflict), result.map(|_| ()));
    }

    #[test]
    fn export_size_lands_in_config() {
        let engine = Builder::new()
            .font_directory("fonts")
            .export_size(640, 360)
            .build().unwrap();
        assert_eq!(640, engine.config().width);
        assert_eq!(360, engine.config().height);
    }
}
