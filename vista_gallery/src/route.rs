// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Named routes and the navigation seam.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

/// The site's pages.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    /// The entry screen, at `/`.
    Landing,
    /// The gallery, at `/gallery`.
    Gallery,
}

impl Route {
    /// The route's path.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Landing => "/",
            Self::Gallery => "/gallery",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for Route {
    type Err = ParseRouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "/" => Ok(Self::Landing),
            "/gallery" | "/gallery/" => Ok(Self::Gallery),
            _ => Err(ParseRouteError { path: s.into() }),
        }
    }
}

/// A path that names no route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseRouteError {
    path: String,
}

impl ParseRouteError {
    /// The rejected path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl fmt::Display for ParseRouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no route for path `{}`", self.path)
    }
}

impl core::error::Error for ParseRouteError {}

/// The host's navigation capability.
pub trait Router {
    /// Transitions to `route`. No parameters travel with it.
    fn push(&mut self, route: Route);
}

/// Records pushes in order.
impl Router for Vec<Route> {
    fn push(&mut self, route: Route) {
        Vec::push(self, route);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_parse() {
        assert_eq!("/".parse(), Ok(Route::Landing));
        assert_eq!("/gallery/".parse(), Ok(Route::Gallery));
        let err = "/about".parse::<Route>().unwrap_err();
        assert_eq!(err.path(), "/about");
    }

    #[test]
    fn vec_router_records() {
        let mut log = Vec::new();
        Router::push(&mut log, Route::Gallery);
        assert_eq!(log, [Route::Gallery]);
    }
}
