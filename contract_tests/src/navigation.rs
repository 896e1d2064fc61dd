//! Navigation contracts
//!
//! The route format handed to the router is part of the UI contract: `/` for
//! the root, `/files<path>` for everything else.
