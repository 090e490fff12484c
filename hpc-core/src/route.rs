//! Backend routes consumed by the frontends.

use std::fmt;

/// One of the fixed calculation endpoints. All are `POST` with a JSON body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// Annual heat load profile of a building.
    Calculate,
    /// A single COP value for one source/flow temperature pair.
    Cop,
    /// Heat generator sizing.
    HeatGen,
    /// Hourly COP over a year.
    CopYearly,
    /// Hourly electricity demand of the heat pump over a year.
    Strombedarf,
}

impl Route {
    pub const ALL: [Route; 5] = [
        Route::Calculate,
        Route::Cop,
        Route::HeatGen,
        Route::CopYearly,
        Route::Strombedarf,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Calculate => "/calculate",
            Route::Cop => "/calculate_cop",
            Route::HeatGen => "/calculate_heatgen",
            Route::CopYearly => "/calculate_cop_yearly",
            Route::Strombedarf => "/calculate_strombedarf",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Join a base URL and a route path without doubling or dropping the slash.
///
/// An empty base yields the bare path, which the browser resolves against
/// the page's own origin.
pub fn join_url(base: &str, route: Route) -> String {
    format!("{}{}", base.trim_end_matches('/'), route.path())
}
