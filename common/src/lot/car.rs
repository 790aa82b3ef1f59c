use std::fmt;

/// A parked car. Registrations are unique while parked, colors are not.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Car {
    pub registration: String,
    pub color: String,
}

impl Car {
    pub fn new(registration: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            registration: registration.into(),
            color: color.into(),
        }
    }
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.registration, self.color)
    }
}
