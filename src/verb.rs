use std::fmt;

/// The fixed set of CRUD verbs a controller may handle.
///
/// Registration iterates verbs in the order of [`Verb::ALL`] regardless of
/// how a controller declares its capabilities, so the emitted route order is
/// deterministic for a given routes file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Verb {
    /// All supported verbs, in registration order.
    pub const ALL: [Verb; 5] = [Verb::Get, Verb::Post, Verb::Put, Verb::Patch, Verb::Delete];

    /// Lowercase method name, as it appears in route targets
    /// (`"UserController:get"`).
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Verb::Get => "get",
            Verb::Post => "post",
            Verb::Put => "put",
            Verb::Patch => "patch",
            Verb::Delete => "delete",
        }
    }

    /// Uppercase form used as the route-name suffix (`"UserGET"`).
    #[must_use]
    pub fn name_suffix(&self) -> &'static str {
        match self {
            Verb::Get => "GET",
            Verb::Post => "POST",
            Verb::Put => "PUT",
            Verb::Patch => "PATCH",
            Verb::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
