use std::fmt;

/// Pages the front end can be sent to by the booking flow or the session guard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Login,
    BsmLogin,
    Tickets,
    Voyage(String),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Login => "/login".to_string(),
            Route::BsmLogin => "/bsm/login".to_string(),
            Route::Tickets => "/client/tickets".to_string(),
            Route::Voyage(id) => format!("/client/voyages/{}", id),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
