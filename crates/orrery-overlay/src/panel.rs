//! The info panel: static reference sheets for each planet and the per-frame
//! update derived from the camera and the nearest-planet scan.

use glam::Vec3;
use orrery_scene::{NearestPlanet, PlanetId};

/// Ratios of a planet's vital statistics to Earth's, preformatted.
#[derive(Clone, Copy, Debug)]
pub struct EarthComparison {
    pub size: &'static str,
    pub gravity: &'static str,
    pub day: &'static str,
    pub year: &'static str,
}

/// How long it takes to get there, by three reference vehicles.
#[derive(Clone, Copy, Debug)]
pub struct TravelTimes {
    pub light: &'static str,
    pub shuttle: &'static str,
    pub spacecraft: &'static str,
}

/// The reference sheet shown when a planet is the nearest object.
///
/// All values are display strings, fixed at compile time. The Sun carries no
/// sheet; the panel simply keeps its previous contents while the Sun-free
/// nearest scan picks another body.
#[derive(Clone, Copy, Debug)]
pub struct PlanetSheet {
    pub mass: &'static str,
    pub diameter: &'static str,
    pub gravity: &'static str,
    pub orbital_period: &'static str,
    pub rotation_period: &'static str,
    pub avg_temp: &'static str,
    pub sun_distance: &'static str,
    pub moons: u32,
    pub earth_comparison: EarthComparison,
    pub travel_times: TravelTimes,
}

impl PlanetSheet {
    /// Look up the sheet for a body. `None` for the Sun.
    pub fn for_planet(id: PlanetId) -> Option<&'static PlanetSheet> {
        match id {
            PlanetId::Sun => None,
            PlanetId::Mercury => Some(&MERCURY),
            PlanetId::Venus => Some(&VENUS),
            PlanetId::Earth => Some(&EARTH),
            PlanetId::Mars => Some(&MARS),
            PlanetId::Jupiter => Some(&JUPITER),
            PlanetId::Saturn => Some(&SATURN),
            PlanetId::Uranus => Some(&URANUS),
            PlanetId::Neptune => Some(&NEPTUNE),
        }
    }
}

static MERCURY: PlanetSheet = PlanetSheet {
    mass: "3.285 × 10^23 kg",
    diameter: "4,879 km",
    gravity: "3.7 m/s²",
    orbital_period: "88 Earth days",
    rotation_period: "59 Earth days",
    avg_temp: "167°C",
    sun_distance: "57.9 million km",
    moons: 0,
    earth_comparison: EarthComparison {
        size: "0.383",
        gravity: "0.378",
        day: "58.646",
        year: "0.24",
    },
    travel_times: TravelTimes {
        light: "3.2 minutes",
        shuttle: "115 days",
        spacecraft: "85 days",
    },
};

static VENUS: PlanetSheet = PlanetSheet {
    mass: "4.867 × 10^24 kg",
    diameter: "12,104 km",
    gravity: "8.87 m/s²",
    orbital_period: "225 Earth days",
    rotation_period: "243 Earth days",
    avg_temp: "464°C",
    sun_distance: "108.2 million km",
    moons: 0,
    earth_comparison: EarthComparison {
        size: "0.949",
        gravity: "0.904",
        day: "243",
        year: "0.615",
    },
    travel_times: TravelTimes {
        light: "6 minutes",
        shuttle: "215 days",
        spacecraft: "160 days",
    },
};

static EARTH: PlanetSheet = PlanetSheet {
    mass: "5.972 × 10^24 kg",
    diameter: "12,742 km",
    gravity: "9.81 m/s²",
    orbital_period: "365.25 days",
    rotation_period: "24 hours",
    avg_temp: "15°C",
    sun_distance: "149.6 million km",
    moons: 1,
    earth_comparison: EarthComparison {
        size: "1",
        gravity: "1",
        day: "1",
        year: "1",
    },
    travel_times: TravelTimes {
        light: "8.3 minutes",
        shuttle: "0",
        spacecraft: "0",
    },
};

static MARS: PlanetSheet = PlanetSheet {
    mass: "6.39 × 10^23 kg",
    diameter: "6,779 km",
    gravity: "3.71 m/s²",
    orbital_period: "687 Earth days",
    rotation_period: "24.6 hours",
    avg_temp: "-63°C",
    sun_distance: "227.9 million km",
    moons: 2,
    earth_comparison: EarthComparison {
        size: "0.532",
        gravity: "0.378",
        day: "1.025",
        year: "1.88",
    },
    travel_times: TravelTimes {
        light: "12.7 minutes",
        shuttle: "300 days",
        spacecraft: "225 days",
    },
};

static JUPITER: PlanetSheet = PlanetSheet {
    mass: "1.898 × 10^27 kg",
    diameter: "139,820 km",
    gravity: "24.79 m/s²",
    orbital_period: "11.9 Earth years",
    rotation_period: "9.9 hours",
    avg_temp: "-110°C",
    sun_distance: "778.5 million km",
    moons: 79,
    earth_comparison: EarthComparison {
        size: "11.209",
        gravity: "2.528",
        day: "0.413",
        year: "11.862",
    },
    travel_times: TravelTimes {
        light: "43.2 minutes",
        shuttle: "2.7 years",
        spacecraft: "2.1 years",
    },
};

static SATURN: PlanetSheet = PlanetSheet {
    mass: "5.683 × 10^26 kg",
    diameter: "116,460 km",
    gravity: "10.44 m/s²",
    orbital_period: "29.5 Earth years",
    rotation_period: "10.7 hours",
    avg_temp: "-140°C",
    sun_distance: "1.434 billion km",
    moons: 82,
    earth_comparison: EarthComparison {
        size: "9.449",
        gravity: "1.065",
        day: "0.446",
        year: "29.457",
    },
    travel_times: TravelTimes {
        light: "79.7 minutes",
        shuttle: "4.5 years",
        spacecraft: "3.5 years",
    },
};

static URANUS: PlanetSheet = PlanetSheet {
    mass: "8.681 × 10^25 kg",
    diameter: "50,724 km",
    gravity: "8.69 m/s²",
    orbital_period: "84 Earth years",
    rotation_period: "17.2 hours",
    avg_temp: "-195°C",
    sun_distance: "2.871 billion km",
    moons: 27,
    earth_comparison: EarthComparison {
        size: "4.007",
        gravity: "0.886",
        day: "0.717",
        year: "84",
    },
    travel_times: TravelTimes {
        light: "159.6 minutes",
        shuttle: "8.4 years",
        spacecraft: "6.8 years",
    },
};

static NEPTUNE: PlanetSheet = PlanetSheet {
    mass: "1.024 × 10^26 kg",
    diameter: "49,244 km",
    gravity: "11.15 m/s²",
    orbital_period: "165 Earth years",
    rotation_period: "16.1 hours",
    avg_temp: "-200°C",
    sun_distance: "4.495 billion km",
    moons: 14,
    earth_comparison: EarthComparison {
        size: "3.883",
        gravity: "1.137",
        day: "0.671",
        year: "164.79",
    },
    travel_times: TravelTimes {
        light: "4.1 hours",
        shuttle: "12 years",
        spacecraft: "9.5 years",
    },
};

/// One frame's worth of info-panel content.
#[derive(Clone, Debug)]
pub struct PanelUpdate {
    pub camera_position: String,
    pub earth_distance: String,
    pub nearest_name: &'static str,
    pub sheet: Option<&'static PlanetSheet>,
}

impl PanelUpdate {
    pub fn new(camera_position: Vec3, nearest: &NearestPlanet) -> Self {
        Self {
            camera_position: format!(
                "{:.0}, {:.0}, {:.0}",
                camera_position.x, camera_position.y, camera_position.z
            ),
            earth_distance: format!("{:.2} million km", nearest.earth_distance_mkm()),
            nearest_name: nearest.id.label(),
            sheet: PlanetSheet::for_planet(nearest.id),
        }
    }

    /// Flatten into `(field key, display value)` pairs for a key-value
    /// display surface.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("camera_position", self.camera_position.clone()),
            ("earth_distance", self.earth_distance.clone()),
            ("nearest_object", self.nearest_name.to_string()),
        ];
        if let Some(sheet) = self.sheet {
            fields.extend([
                ("mass", sheet.mass.to_string()),
                ("diameter", sheet.diameter.to_string()),
                ("gravity", sheet.gravity.to_string()),
                ("orbital_period", sheet.orbital_period.to_string()),
                ("rotation_period", sheet.rotation_period.to_string()),
                ("temperature", sheet.avg_temp.to_string()),
                ("sun_distance", sheet.sun_distance.to_string()),
                ("moons", sheet.moons.to_string()),
                ("size_ratio", format!("{}x Earth", sheet.earth_comparison.size)),
                (
                    "gravity_ratio",
                    format!("{}x Earth", sheet.earth_comparison.gravity),
                ),
                ("day_ratio", format!("{}x Earth", sheet.earth_comparison.day)),
                ("year_ratio", format!("{}x Earth", sheet.earth_comparison.year)),
                ("travel_light", sheet.travel_times.light.to_string()),
                ("travel_shuttle", sheet.travel_times.shuttle.to_string()),
                (
                    "travel_spacecraft",
                    sheet.travel_times.spacecraft.to_string(),
                ),
            ]);
        }
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_planet_has_a_sheet() {
        for id in PlanetId::ALL {
            if id.is_sun() {
                assert!(PlanetSheet::for_planet(id).is_none());
            } else {
                assert!(
                    PlanetSheet::for_planet(id).is_some(),
                    "{} has no reference sheet",
                    id.label()
                );
            }
        }
    }

    #[test]
    fn test_earth_sheet_is_the_unit_reference() {
        let earth = PlanetSheet::for_planet(PlanetId::Earth).unwrap();
        assert_eq!(earth.earth_comparison.size, "1");
        assert_eq!(earth.earth_comparison.gravity, "1");
        assert_eq!(earth.moons, 1);
    }

    #[test]
    fn test_update_formats_camera_and_distance() {
        let nearest = NearestPlanet {
            id: PlanetId::Mars,
            distance: 120.0,
            earth_distance: 75.0,
        };
        let update = PanelUpdate::new(Vec3::new(300.4, 150.0, -299.6), &nearest);
        assert_eq!(update.camera_position, "300, 150, -300");
        assert_eq!(update.earth_distance, "1.50 million km");
        assert_eq!(update.nearest_name, "Mars");
    }

    #[test]
    fn test_fields_include_full_sheet() {
        let nearest = NearestPlanet {
            id: PlanetId::Saturn,
            distance: 50.0,
            earth_distance: 500.0,
        };
        let update = PanelUpdate::new(Vec3::ZERO, &nearest);
        let fields = update.fields();
        assert_eq!(fields.len(), 18);
        let moons = fields.iter().find(|(k, _)| *k == "moons").unwrap();
        assert_eq!(moons.1, "82");
        let ratio = fields.iter().find(|(k, _)| *k == "size_ratio").unwrap();
        assert_eq!(ratio.1, "9.449x Earth");
    }
}
