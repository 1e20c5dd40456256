use eframe::egui::Color32;
use std::f64::consts::PI;
use thiserror::Error;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Body {
    Sun,
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

impl Body {
    pub const ALL: [Body; 9] = [
        Body::Sun,
        Body::Mercury,
        Body::Venus,
        Body::Earth,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Body::Sun => "Sun",
            Body::Mercury => "Mercury",
            Body::Venus => "Venus",
            Body::Earth => "Earth",
            Body::Mars => "Mars",
            Body::Jupiter => "Jupiter",
            Body::Saturn => "Saturn",
            Body::Uranus => "Uranus",
            Body::Neptune => "Neptune",
        }
    }

    pub fn visual_radius(&self) -> f64 {
        match self {
            Body::Sun => 20.0,
            Body::Mercury => 2.0,
            Body::Venus => 3.0,
            Body::Earth => 4.0,
            Body::Mars => 3.5,
            Body::Jupiter => 10.0,
            Body::Saturn => 8.0,
            Body::Uranus => 6.0,
            Body::Neptune => 5.0,
        }
    }

    pub fn orbit_radius(&self) -> f64 {
        match self {
            Body::Sun => 0.0,
            Body::Mercury => 50.0,
            Body::Venus => 60.0,
            Body::Earth => 70.0,
            Body::Mars => 80.0,
            Body::Jupiter => 100.0,
            Body::Saturn => 120.0,
            Body::Uranus => 140.0,
            Body::Neptune => 160.0,
        }
    }

    // Staggered so the planets don't start in a straight line.
    pub fn initial_phase(&self) -> f64 {
        match self {
            Body::Sun => 0.0,
            Body::Mercury => 0.0,
            Body::Venus => PI / 4.0,
            Body::Earth => PI / 2.0,
            Body::Mars => 3.0 * PI / 4.0,
            Body::Jupiter => PI,
            Body::Saturn => 5.0 * PI / 4.0,
            Body::Uranus => 3.0 * PI / 2.0,
            Body::Neptune => 7.0 * PI / 4.0,
        }
    }

    pub fn default_speed(&self) -> f64 {
        match self {
            Body::Sun => 0.0,
            Body::Mercury => 2.0,
            Body::Venus => 1.5,
            Body::Earth => 1.0,
            Body::Mars => 0.8,
            Body::Jupiter => 0.7,
            Body::Saturn => 0.6,
            Body::Uranus => 0.5,
            Body::Neptune => 0.4,
        }
    }

    pub fn filename(&self) -> &'static str {
        match self {
            Body::Sun => "assets/textures/sun.jpg",
            Body::Mercury => "assets/textures/mercury.jpg",
            Body::Venus => "assets/textures/venus.jpg",
            Body::Earth => "assets/textures/earth.jpg",
            Body::Mars => "assets/textures/mars.jpg",
            Body::Jupiter => "assets/textures/jupiter.jpg",
            Body::Saturn => "assets/textures/saturn.jpg",
            Body::Uranus => "assets/textures/uranus.jpg",
            Body::Neptune => "assets/textures/neptune.jpg",
        }
    }

    // Fallback sphere color when the texture is missing.
    pub fn base_color(&self) -> Color32 {
        match self {
            Body::Sun => Color32::from_rgb(253, 184, 19),
            Body::Mercury => Color32::from_rgb(151, 151, 159),
            Body::Venus => Color32::from_rgb(205, 165, 100),
            Body::Earth => Color32::from_rgb(70, 110, 180),
            Body::Mars => Color32::from_rgb(193, 92, 60),
            Body::Jupiter => Color32::from_rgb(200, 160, 120),
            Body::Saturn => Color32::from_rgb(210, 190, 140),
            Body::Uranus => Color32::from_rgb(150, 200, 210),
            Body::Neptune => Color32::from_rgb(70, 100, 200),
        }
    }

    /// Inner and outer radius of a flat planetary ring, if the body has one.
    pub fn ring_params(&self) -> Option<(f64, f64)> {
        match self {
            Body::Saturn => Some((9.0, 12.0)),
            Body::Jupiter => Some((14.0, 14.2)),
            _ => None,
        }
    }

    pub fn is_lit(&self) -> bool {
        !matches!(self, Body::Sun)
    }
}

/// Static description of one body: the registry's unit of iteration.
///
/// `orbit_radius` and `visual_radius` never change after construction; the
/// live revolution speed lives in the `ParameterStore`, keyed by `name`.
#[derive(Clone, Debug)]
pub struct OrbitalBody {
    pub body: Body,
    pub name: String,
    pub visual_radius: f64,
    pub orbit_radius: f64,
    pub initial_phase: f64,
    pub default_speed: f64,
}

impl OrbitalBody {
    pub fn describe(body: Body) -> Self {
        Self {
            body,
            name: body.label().to_string(),
            visual_radius: body.visual_radius(),
            orbit_radius: body.orbit_radius(),
            initial_phase: body.initial_phase(),
            default_speed: body.default_speed(),
        }
    }
}

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("duplicate body name: {0}")]
    DuplicateName(String),
    #[error("{name}: visual radius must be positive, got {value}")]
    BadVisualRadius { name: String, value: f64 },
    #[error("{name}: orbit radius must be non-negative, got {value}")]
    BadOrbitRadius { name: String, value: f64 },
    #[error("{name}: initial phase must be finite, got {value}")]
    BadPhase { name: String, value: f64 },
}

/// Immutable, ordered list of body descriptors, validated at construction.
pub struct Registry {
    bodies: Vec<OrbitalBody>,
}

impl Registry {
    pub fn new(bodies: Vec<OrbitalBody>) -> Result<Self, RegistryError> {
        for (i, b) in bodies.iter().enumerate() {
            if !(b.visual_radius > 0.0) {
                return Err(RegistryError::BadVisualRadius {
                    name: b.name.clone(),
                    value: b.visual_radius,
                });
            }
            if !(b.orbit_radius >= 0.0) {
                return Err(RegistryError::BadOrbitRadius {
                    name: b.name.clone(),
                    value: b.orbit_radius,
                });
            }
            if !b.initial_phase.is_finite() {
                return Err(RegistryError::BadPhase {
                    name: b.name.clone(),
                    value: b.initial_phase,
                });
            }
            if bodies[..i].iter().any(|other| other.name == b.name) {
                return Err(RegistryError::DuplicateName(b.name.clone()));
            }
        }
        Ok(Self { bodies })
    }

    /// The fixed sun-plus-eight-planets table.
    pub fn solar_system() -> Result<Self, RegistryError> {
        Self::new(Body::ALL.iter().map(|&b| OrbitalBody::describe(b)).collect())
    }

    pub fn iter(&self) -> impl Iterator<Item = &OrbitalBody> {
        self.bodies.iter()
    }

    pub fn get(&self, name: &str) -> Option<&OrbitalBody> {
        self.bodies.iter().find(|b| b.name == name)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}
