//! Module which defines the rendering engine.

mod builder;
mod config;

pub use self::builder::{Builder, Error as BuildError};
pub use self::config::Config;


use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use antidote::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use model::Lockup;
use resources::{CachingLoader, Font, FontLoader, Loader};
use util::cache::ThreadSafeCache;
use super::error::RenderError;
use super::layout::{self, Layout};
use super::output::RenderOutput;
use super::task::RenderTask;


/// Lockup rendering engine.
///
/// The engine is thread-safe (`Sync`) since normally you'd want the rendering
/// to be performed in a background thread.
///
/// *Note*: `Engine` implements `Clone`
/// by merely cloning a shared reference to the underlying object.
#[derive(Debug)]
pub struct Engine<Fl = FontLoader>
    where Fl: Loader<Item=Font>
{
    inner: Arc<Inner<Fl>>,
}

impl<Fl> Clone for Engine<Fl>
    where Fl: Loader<Item=Font>
{
    fn clone(&self) -> Self {
        Engine{inner: self.inner.clone()}
    }
}

/// Shared state of the engine that render tasks have access to.
#[derive(Debug)]
pub(super) struct Inner<Fl>
    where Fl: Loader<Item=Font>
{
    pub(super) config: RwLock<Config>,
    pub(super) font_loader: CachingLoader<Fl>,
    /// Raised for the duration of a single export.
    /// A render attempted while this is up fails with `RenderError::Busy`.
    pub(super) exporting: AtomicBool,
}

impl<Fl> Inner<Fl>
    where Fl: Loader<Item=Font>
{
    #[inline]
    pub fn new(config: Config, font_loader: CachingLoader<Fl>) -> Self {
        Inner{
            config: RwLock::new(config),
            font_loader: font_loader,
            exporting: AtomicBool::new(false),
        }
    }
}

impl<Fl> From<Inner<Fl>> for Engine<Fl>
    where Fl: Loader<Item=Font>
{
    fn from(inner: Inner<Fl>) -> Self {
        Engine{inner: Arc::new(inner)}
    }
}

// Constructors.
impl Engine<FontLoader> {
    /// Create an Engine which loads fonts from given directory path.
    ///
    /// Loaded fonts will be cached in memory (LRU cache).
    ///
    /// For other ways of creating `Engine`, see the `EngineBuilder`.
    #[inline]
    pub fn new<D: AsRef<Path>>(font_directory: D) -> Self {
        Builder::new()
            .font_directory(font_directory)
            .build().unwrap()
    }
}
impl<Fl> Engine<Fl>
    where Fl: Loader<Item=Font>
{
    /// Create an Engine that uses given loader for fonts.
    ///
    /// Loaded fonts will be cached in memory (LRU cache).
    #[inline]
    pub fn with_loader(font_loader: Fl) -> Self {
        Builder::new()
            .font_loader(font_loader)
            .build().unwrap()
    }

    /// Create an Engine that uses given font loader directly.
    ///
    /// Any caching scheme, if necessary, should be implemented by the loader itself.
    #[inline]
    pub fn with_raw_loader(font_loader: Fl) -> Self {
        Builder::new()
            .raw_font_loader(font_loader)
            .build().unwrap()
    }
}

// Lockup rendering.
impl<Fl> Engine<Fl>
    where Fl: Loader<Item=Font>
{
    /// Lay out given lockup for a live preview.
    ///
    /// This is pure arithmetic and never touches the font loader,
    /// so it can be called freely even while an export is running.
    #[inline]
    pub fn lay_out(&self, lockup: &Lockup) -> Layout {
        layout::lay_out(lockup)
    }

    /// Render given lockup into a full-size raster image.
    ///
    /// Only one export can be in flight on an engine at a time;
    /// a render attempted while another is running
    /// fails immediately with `RenderError::Busy`.
    ///
    /// Note that rendering is a CPU-intensive process and can be relatively
    /// lengthy. It is recommended to execute it in a separate thread.
    pub fn render(&self, lockup: Lockup) -> Result<RenderOutput, RenderError<Fl>> {
        if self.inner.exporting.swap(true, Ordering::SeqCst) {
            warn!("Refusing to render: another export is in progress");
            return Err(RenderError::Busy);
        }
        let result = RenderTask::new(lockup, self.inner.clone()).perform();
        self.inner.exporting.store(false, Ordering::SeqCst);
        result
    }
}

// Managing resources.
impl<Fl> Engine<Fl>
    where Fl: Loader<Item=Font>
{
    /// Preemptively load a font into engine's cache.
    pub fn preload_font(&self, name: &str) -> Result<(), Fl::Err> {
        if !self.inner.font_loader.phony {
            self.inner.font_loader.load(name)?;
        }
        Ok(())
    }

    /// Return a reference to the internal font cache, if any.
    /// This can be used to examine cache statistics (hits & misses).
    pub fn font_cache(&self) -> Option<&ThreadSafeCache<String, Fl::Item>> {
        if self.inner.font_loader.phony {
            None
        } else {
            Some(self.inner.font_loader.cache())
        }
    }
}

// Configuration.
impl<Fl> Engine<Fl>
    where Fl: Loader<Item=Font>
{
    /// Read the `Engine`'s configuration.
    #[inline]
    pub fn config(&self) -> RwLockReadGuard<Config> {
        self.inner.config.read()
    }

    /// Modify the `Engine`'s configuration.
    ///
    /// Changes will affect future render tasks.
    #[inline]
    pub fn config_mut(&self) -> RwLockWriteGuard<Config> {
        self.inner.config.write()
    }
}


#[cfg(test)]
mod tests {
    use std::sync::{mpsc, Mutex};
    use std::thread;
    use model::Lockup;
    use resources::{Font, Loader};
    use super::super::error::RenderError;
    use super::Engine;

    #[test]
    fn thread_safe() {
        fn assert_sync<T: Sync>() {}
        fn assert_send<T: Send>() {}

        assert_sync::<Engine>();
        assert_send::<Engine>();
    }

    /// Loader that signals when entered and then blocks until released.
    struct BlockingLoader {
        entered: Mutex<mpsc::Sender<()>>,
        release: Mutex<mpsc::Receiver<()>>,
    }
    impl Loader for BlockingLoader {
        type Item = Font;
        type Err = String;
        fn load<'n>(&self, _: &'n str) -> Result<Font, String> {
            self.entered.lock().unwrap().send(()).unwrap();
            self.release.lock().unwrap().recv().unwrap();
            Err("no font".into())
        }
    }

    #[test]
    fn only_one_export_at_a_time() {
        let (entered_tx, entered_rx) = mpsc::channel();
        let (release_tx, release_rx) = mpsc::channel();
        let engine = Engine::with_loader(BlockingLoader{
            entered: Mutex::new(entered_tx),
            release: Mutex::new(release_rx),
        });

        let busy_render = {
            let engine = engine.clone();
            thread::spawn(move || engine.render(Lockup::default()))
        };
        entered_rx.recv().unwrap();

        // The first render is now stuck inside the loader.
        match engine.render(Lockup::default()) {
            Err(ref e) if e.is_busy() => {}
            _ => panic!("concurrent render was not rejected"),
        }

        release_tx.send(()).unwrap();
        match busy_render.join().unwrap() {
            Err(RenderError::Font(..)) => {}
            _ => panic!("blocked render should have failed on the font"),
        }

        // The slot is free again.
        release_tx.send(()).unwrap();
        match engine.render(Lockup::default()) {
            Err(RenderError::Font(..)) => {}
            Err(ref e) if e.is_busy() => panic!("engine still busy after export"),
            _ => panic!("render should have failed on the font"),
        }
    }
}
