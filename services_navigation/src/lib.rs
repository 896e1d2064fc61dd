//! # Navigation Service
//!
//! Current-path state for a file-manager view, kept in sync with an external
//! router.
//!
//! ## Philosophy
//!
//! - **The router is the boundary**: view switching happens behind the
//!   [`Router`] trait; this crate only decides which route to ask for
//! - **One source of truth**: `current_path` always equals the path form of
//!   the route most recently pushed to the router
//! - **Paths are strings, not authority**: validation rejects relative
//!   components, nothing more
//!
//! ## Example
//!
//! ```
//! use services_navigation::{Navigator, Router};
//!
//! struct NullRouter;
//! impl Router for NullRouter {
//!     fn push(&mut self, _route: &str) {}
//! }
//!
//! let mut nav = Navigator::new(NullRouter);
//! nav.navigate_to("/docs/notes").unwrap();
//! assert_eq!(nav.segments(), vec!["docs", "notes"]);
//!
//! nav.navigate_to_parent();
//! assert_eq!(nav.current_path(), "/docs");
//! ```

pub mod path;

pub use path::PathError;

/// Route prefix for non-root file views
const FILES_ROUTE_PREFIX: &str = "/files";

/// Routing collaborator
///
/// Receives a route string and is expected to update the displayed view.
pub trait Router {
    /// Asks the router to display the given route
    fn push(&mut self, route: &str);
}

/// Navigation state for a file-manager view
///
/// Starts at the root. Invariant: `current_path` is always the path that was
/// last translated into a router push.
#[derive(Debug)]
pub struct Navigator<R> {
    current_path: String,
    router: R,
}

impl<R: Router> Navigator<R> {
    /// Creates a navigator at the root path
    pub fn new(router: R) -> Self {
        Self {
            current_path: String::from("/"),
            router,
        }
    }

    /// Returns the current display path
    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    /// Returns the breadcrumb segments of the current path
    ///
    /// Empty at the root.
    pub fn segments(&self) -> Vec<&str> {
        self.current_path
            .split('/')
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// Navigates to a display path
    ///
    /// Validates the path, records it as current, and pushes the matching
    /// route: `/` for the root, `/files<path>` otherwise.
    pub fn navigate_to(&mut self, path: &str) -> Result<(), PathError> {
        path::split_segments(path)?;
        self.set_path(path);
        Ok(())
    }

    /// Navigates to the parent of the current path
    ///
    /// At the root this stays at the root (and still re-pushes the route,
    /// mirroring an explicit user action).
    pub fn navigate_to_parent(&mut self) {
        let parent = path::parent_of(&self.current_path);
        self.set_path(&parent);
    }

    /// Returns the absolute path covering breadcrumb segments `0..=index`
    pub fn path_up_to(&self, index: usize) -> String {
        path::join_up_to(&self.segments(), index)
    }

    /// Returns the routing collaborator
    pub fn router(&self) -> &R {
        &self.router
    }

    /// Records the path and pushes the matching route
    fn set_path(&mut self, path: &str) {
        self.current_path = path.to_string();
        if path == "/" {
            self.router.push("/");
        } else {
            let route = format!("{}{}", FILES_ROUTE_PREFIX, path);
            self.router.push(&route);
        }
    }
}
