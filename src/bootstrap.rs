//! Application bootstrap: mount the root component and publish its handle.
//!
//! DESIGN
//! ======
//! `Bootstrap` ties together three seams:
//! - a `Page` that supplies the ambient domain,
//! - a `Mounter` that attaches the UI to the element with the reserved id,
//! - a `HandleSlot` where the mounted handle is published.
//!
//! The browser build wires `BrowserPage` + `LeptosMounter` to a thread-local
//! slot (see [`init`] and [`published`]). Tests wire fakes to a private slot,
//! so no two tests ever share published state.
//!
//! Each `initialize()` builds a fresh `AppConfig`, mounts, then overwrites
//! the slot. A failed mount leaves the slot untouched and returns the
//! mounter's error as-is.

#[cfg(test)]
#[path = "bootstrap_test.rs"]
mod bootstrap_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::{AppConfig, MOUNT_ID};
use crate::error::BootError;
use crate::page::Page;

/// Attaches the root UI to a page element.
pub trait Mounter {
    /// Whatever the framework hands back for a live mount.
    type Instance;

    /// Mount onto the element whose id is `target_id`, seeded with `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the target element is absent or the framework
    /// fails to construct the view.
    fn mount(&self, target_id: &str, config: AppConfig) -> Result<Self::Instance, BootError>;
}

/// A mounted app together with the configuration it was created with.
#[derive(Debug)]
pub struct MountedApp<I> {
    config: AppConfig,
    instance: I,
}

impl<I> MountedApp<I> {
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn instance(&self) -> &I {
        &self.instance
    }
}

/// Shared handle to a mounted app. Identity is pointer identity.
pub type AppHandle<I> = Rc<MountedApp<I>>;

/// Single-writer slot holding the most recently published handle.
#[derive(Debug)]
pub struct HandleSlot<I> {
    current: RefCell<Option<AppHandle<I>>>,
}

impl<I> HandleSlot<I> {
    pub const fn new() -> Self {
        Self { current: RefCell::new(None) }
    }

    /// Store `handle`, returning whatever it replaced.
    pub fn publish(&self, handle: AppHandle<I>) -> Option<AppHandle<I>> {
        self.current.replace(Some(handle))
    }

    pub fn get(&self) -> Option<AppHandle<I>> {
        self.current.borrow().clone()
    }

    pub fn clear(&self) -> Option<AppHandle<I>> {
        self.current.take()
    }
}

impl<I> Default for HandleSlot<I> {
    fn default() -> Self {
        Self::new()
    }
}

/// Mounts the app on the page and publishes the result.
pub struct Bootstrap<P, M: Mounter> {
    page: P,
    mounter: M,
    slot: Rc<HandleSlot<M::Instance>>,
}

impl<P: Page, M: Mounter> Bootstrap<P, M> {
    /// Bootstrap with its own private slot.
    pub fn new(page: P, mounter: M) -> Self {
        Self::with_slot(page, mounter, Rc::new(HandleSlot::new()))
    }

    /// Bootstrap that publishes into a shared slot.
    pub fn with_slot(page: P, mounter: M, slot: Rc<HandleSlot<M::Instance>>) -> Self {
        Self { page, mounter, slot }
    }

    /// Build the configuration, mount on `#app`, and publish the handle.
    ///
    /// # Errors
    ///
    /// Propagates the mounter's error unchanged. Nothing is published on
    /// failure.
    pub fn initialize(&self) -> Result<AppHandle<M::Instance>, BootError> {
        let config = AppConfig::from_page(&self.page);
        let instance = self.mounter.mount(MOUNT_ID, config.clone())?;

        log::info!(
            "mounted #{MOUNT_ID}: host={} port={} version={}",
            config.host,
            config.port,
            config.version
        );

        let handle = Rc::new(MountedApp { config, instance });
        if self.slot.publish(Rc::clone(&handle)).is_some() {
            log::debug!("replaced previously published app handle");
        }
        Ok(handle)
    }

    /// The handle published by the latest successful `initialize()`.
    pub fn published(&self) -> Option<AppHandle<M::Instance>> {
        self.slot.get()
    }
}

#[cfg(feature = "csr")]
pub use browser::{LeptosInstance, LeptosMounter, init, published};

#[cfg(feature = "csr")]
mod browser {
    use std::rc::Rc;

    use leptos::prelude::*;
    use wasm_bindgen::JsCast;

    use super::{AppHandle, Bootstrap, HandleSlot, Mounter};
    use crate::app::App;
    use crate::config::{AppConfig, GLOBAL_HANDLE};
    use crate::error::BootError;
    use crate::page::BrowserPage;

    thread_local! {
        static PUBLISHED: Rc<HandleSlot<LeptosInstance>> = Rc::new(HandleSlot::new());
    }

    /// A live Leptos mount.
    #[derive(Debug)]
    pub struct LeptosInstance {
        pub element: web_sys::HtmlElement,
    }

    /// Mounts [`App`] with `leptos::mount::mount_to`.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct LeptosMounter;

    impl Mounter for LeptosMounter {
        type Instance = LeptosInstance;

        fn mount(&self, target_id: &str, config: AppConfig) -> Result<LeptosInstance, BootError> {
            let document = web_sys::window()
                .ok_or(BootError::NoWindow)?
                .document()
                .ok_or(BootError::NoDocument)?;
            let element = document
                .get_element_by_id(target_id)
                .ok_or_else(|| BootError::MissingMountTarget { id: target_id.to_owned() })?
                .dyn_into::<web_sys::HtmlElement>()
                .map_err(|_| BootError::Mount(format!("#{target_id} is not an HTML element")))?;

            let AppConfig { port, host, version } = config;
            let handle = leptos::mount::mount_to(element.clone(), move || {
                view! { <App port=port host=host version=version/> }
            });
            // The page owns the view for its whole lifetime.
            handle.forget();

            Ok(LeptosInstance { element })
        }
    }

    /// Mount the app on the live page and publish it, both in the
    /// process-wide slot and as `window.app`.
    ///
    /// # Errors
    ///
    /// Returns the mount error unchanged.
    pub fn init() -> Result<AppHandle<LeptosInstance>, BootError> {
        let slot = PUBLISHED.with(Rc::clone);
        let handle = Bootstrap::with_slot(BrowserPage, LeptosMounter, slot).initialize()?;
        expose_on_window(handle.config());
        Ok(handle)
    }

    /// The handle published by the latest successful [`init`].
    pub fn published() -> Option<AppHandle<LeptosInstance>> {
        PUBLISHED.with(|slot| slot.get())
    }

    fn expose_on_window(config: &AppConfig) {
        let Some(window) = web_sys::window() else {
            log::debug!("window.{GLOBAL_HANDLE} not set: no window");
            return;
        };
        let json = match serde_json::to_string(config) {
            Ok(json) => json,
            Err(e) => {
                log::debug!("window.{GLOBAL_HANDLE} not set: serialize failed: {e}");
                return;
            }
        };
        let value = match js_sys::JSON::parse(&json) {
            Ok(value) => value,
            Err(e) => {
                log::debug!("window.{GLOBAL_HANDLE} not set: JSON.parse failed: {e:?}");
                return;
            }
        };
        match js_sys::Reflect::set(&window, &GLOBAL_HANDLE.into(), &value) {
            Ok(true) => log::debug!("published window.{GLOBAL_HANDLE}"),
            Ok(false) => log::debug!("window.{GLOBAL_HANDLE} not set: property is read-only"),
            Err(e) => log::debug!("window.{GLOBAL_HANDLE} not set: {e:?}"),
        }
    }
}
