//! Application routes.

use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    SignIn,
    Register,
}

impl Route {
    pub const ALL: [Route; 3] = [Route::Home, Route::SignIn, Route::Register];

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::SignIn => "/login",
            Route::Register => "/register",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for Route {
    type Err = AppError;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        Route::ALL
            .into_iter()
            .find(|route| route.path() == path)
            .ok_or_else(|| AppError::NotFound(path.to_string()))
    }
}
