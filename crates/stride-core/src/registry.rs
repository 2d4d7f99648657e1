//! Achievement registry
//!
//! Read-only, in-memory collection of achievement definitions, pre-sorted
//! into display order. The builtin catalog is the running-app content set;
//! an external content-management process may supply its own collection via
//! [`AchievementRegistry::from_achievements`].

use crate::types::{sort_achievements, Achievement, BadgeColor, Category};

/// Read-only collection of achievement definitions
///
/// Construction sorts the definitions once by `(sort_order, id)`; every
/// accessor afterwards observes that stable order.
#[derive(Debug, Clone, PartialEq)]
pub struct AchievementRegistry {
    achievements: Vec<Achievement>,
}

impl AchievementRegistry {
    /// Build a registry from an arbitrary definition set.
    ///
    /// Duplicate ids are a data-integrity error on the producer's side;
    /// they are logged and kept as-is rather than silently dropped.
    pub fn from_achievements(mut achievements: Vec<Achievement>) -> Self {
        sort_achievements(&mut achievements);
        for pair in achievements.windows(2) {
            if pair[0].id == pair[1].id {
                tracing::warn!("Duplicate achievement id in registry: {}", pair[0].id);
            }
        }
        tracing::debug!("Achievement registry loaded ({} definitions)", achievements.len());
        Self { achievements }
    }

    /// The builtin Stride catalog
    pub fn builtin() -> Self {
        Self::from_achievements(builtin_achievements())
    }

    /// Look up a definition by id
    pub fn get(&self, id: &str) -> Option<&Achievement> {
        self.achievements.iter().find(|a| a.id == id)
    }

    /// All definitions in display order
    pub fn all(&self) -> &[Achievement] {
        &self.achievements
    }

    /// Definitions in the given category, preserving display order
    pub fn by_category(&self, key: &str) -> Vec<&Achievement> {
        self.achievements
            .iter()
            .filter(|a| a.category == key)
            .collect()
    }

    /// Number of definitions
    pub fn len(&self) -> usize {
        self.achievements.len()
    }

    /// Whether the registry holds no definitions
    pub fn is_empty(&self) -> bool {
        self.achievements.is_empty()
    }
}

// Builtin definitions go through the typed vocabularies so the catalog
// cannot ship an out-of-vocabulary key.
#[allow(clippy::too_many_arguments)]
fn achievement(
    id: &str,
    name: &str,
    description: &str,
    how_to_earn: &str,
    icon: &str,
    badge_color: BadgeColor,
    category: Category,
    trigger_type: &str,
    trigger_value: Option<f64>,
    sort_order: i32,
) -> Achievement {
    Achievement {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        how_to_earn: how_to_earn.to_string(),
        icon: icon.to_string(),
        badge_color: badge_color.key().to_string(),
        category: category.key().to_string(),
        trigger_type: trigger_type.to_string(),
        trigger_value,
        sort_order,
    }
}

fn builtin_achievements() -> Vec<Achievement> {
    vec![
        achievement(
            "first-run",
            "Primer Trote",
            "Completaste tu primera carrera",
            "Completa una carrera de cualquier distancia",
            "footprints",
            BadgeColor::Primary,
            Category::Milestone,
            "total_runs",
            Some(1.0),
            1,
        ),
        achievement(
            "streak-7",
            "Semana en Llamas",
            "Corriste 7 días seguidos",
            "Corre al menos una vez al día durante 7 días",
            "flame",
            BadgeColor::Orange,
            Category::Streak,
            "streak_days",
            Some(7.0),
            10,
        ),
        achievement(
            "streak-30",
            "Mes Imparable",
            "Corriste 30 días seguidos",
            "Corre al menos una vez al día durante 30 días",
            "calendar-flame",
            BadgeColor::Gold,
            Category::Streak,
            "streak_days",
            Some(30.0),
            11,
        ),
        achievement(
            "distance-100",
            "Club de los 100K",
            "Acumulaste 100 km totales",
            "Suma 100 km de distancia total",
            "route",
            BadgeColor::Yellow,
            Category::Distance,
            "total_distance_km",
            Some(100.0),
            20,
        ),
        achievement(
            "distance-500",
            "Medio Millar",
            "Acumulaste 500 km totales",
            "Suma 500 km de distancia total",
            "route-flag",
            BadgeColor::Gold,
            Category::Distance,
            "total_distance_km",
            Some(500.0),
            21,
        ),
        achievement(
            "long-run-15",
            "Fondista",
            "Completaste un trote largo de 15 km",
            "Corre 15 km en una sola sesión",
            "mountain",
            BadgeColor::Primary,
            Category::LongRun,
            "single_run_distance_km",
            Some(15.0),
            30,
        ),
        achievement(
            "long-run-21",
            "Media Maratón",
            "Completaste 21.1 km en una sola carrera",
            "Corre 21.1 km en una sola sesión",
            "medal",
            BadgeColor::Gold,
            Category::LongRun,
            "single_run_distance_km",
            Some(21.1),
            31,
        ),
        achievement(
            "interval-10",
            "Ritmo Quebrado",
            "Completaste 10 sesiones de intervalos",
            "Completa 10 entrenamientos de intervalos",
            "timer",
            BadgeColor::Yellow,
            Category::Interval,
            "interval_sessions",
            Some(10.0),
            40,
        ),
        achievement(
            "zone-master",
            "Dueño de la Zona",
            "Pasaste 300 minutos en zona de intensidad objetivo",
            "Acumula 300 minutos dentro de tu zona objetivo",
            "heart-pulse",
            BadgeColor::Primary,
            Category::IntensityZone,
            "zone_minutes",
            Some(300.0),
            50,
        ),
        achievement(
            "redline",
            "Al Límite",
            "Completaste 5 sesiones de alta intensidad",
            "Completa 5 entrenamientos de alta intensidad",
            "zap",
            BadgeColor::Red,
            Category::HighIntensity,
            "high_intensity_sessions",
            Some(5.0),
            60,
        ),
        achievement(
            "milestone-50-runs",
            "Cincuenta Salidas",
            "Completaste 50 carreras",
            "Completa 50 carreras de cualquier distancia",
            "trophy",
            BadgeColor::Orange,
            Category::Milestone,
            "total_runs",
            Some(50.0),
            2,
        ),
        achievement(
            "dawn-patrol",
            "Patrulla del Amanecer",
            "Corriste antes de las 6 a.m.",
            "Empieza una carrera antes de las 6 de la mañana",
            "sunrise",
            BadgeColor::Primary,
            Category::Special,
            "manual",
            None,
            70,
        ),
    ]
}
