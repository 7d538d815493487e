//! The parsed configuration handle.

use std::cell::{RefCell, RefMut};

use crate::session::{ErrorCode, Session};
use crate::store::{Section, Store};

/// Sections, properties and session state produced by one parse.
///
/// The handle owns all of its data. Release it with [`Configuration::free`]
/// or by dropping it; either way it cannot be used afterwards.
///
/// Accessors record diagnostics through a `RefCell`, so a configuration is
/// `Send` but not `Sync`. Wrap it in a `Mutex` to share it between threads.
#[derive(Debug)]
pub struct Configuration {
    store: Store,
    session: RefCell<Session>,
}

impl Configuration {
    pub(crate) const fn new(store: Store, session: Session) -> Self {
        Self {
            store,
            session: RefCell::new(session),
        }
    }

    /// Code recorded by the parse or by the latest accessor call.
    #[must_use]
    pub fn last_error_code(&self) -> ErrorCode {
        self.session.borrow().code()
    }

    /// Detail text recorded with [`Configuration::last_error_code`].
    #[must_use]
    pub fn last_error_details(&self) -> String {
        self.session.borrow().details().to_owned()
    }

    /// Description of [`Configuration::last_error_code`].
    #[must_use]
    pub fn last_error_description(&self) -> &'static str {
        self.last_error_code().description()
    }

    /// Whether the parse or the latest accessor call succeeded.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.last_error_code() == ErrorCode::Success
    }

    /// Find a section by exact name. The global section is named `""`.
    #[must_use]
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.store.find_section(name)
    }

    /// Sections in file order, global section first.
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.store.sections()
    }

    /// Underlying section store.
    #[must_use]
    pub const fn store(&self) -> &Store {
        &self.store
    }

    /// Release every section and property.
    ///
    /// Consumes the handle, so it cannot be queried afterwards.
    pub fn free(self) {
        let Self { mut store, session } = self;
        store.clear();
        drop(session);
    }

    pub(crate) fn session_mut(&self) -> RefMut<'_, Session> {
        self.session.borrow_mut()
    }

    #[cfg(test)]
    pub(crate) fn session(&self) -> std::cell::Ref<'_, Session> {
        self.session.borrow()
    }
}
