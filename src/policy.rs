use serde::Serialize;
use ts_rs::TS;
use utoipa::ToSchema;

/// Feature
///
/// One feature area of the dashboard. Every permission in the system is
/// expressed in terms of these identifiers: the Gatekeeper's allowed-path
/// sets, the sidebar menu, and the per-handler API checks are all derived
/// from the same role→feature table below, so the three can never drift
/// apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    Posts,
    Juegos,
    Miembros,
    Autoridades,
    Eventos,
    Impresiones,
    Preguntas,
}

impl Feature {
    /// The navigation entry rendered in the sidebar for this feature.
    pub const fn view(self) -> NavView {
        match self {
            Feature::Posts => NavView::new("posts", "article"),
            Feature::Juegos => NavView::new("juegos", "sports_esports"),
            Feature::Miembros => NavView::new("miembros", "groups"),
            Feature::Autoridades => NavView::new("autoridades", "badge"),
            Feature::Eventos => NavView::new("eventos", "event"),
            Feature::Impresiones => NavView::new("impresiones", "print"),
            Feature::Preguntas => NavView::new("preguntas", "quiz"),
        }
    }

    /// The top-level page path guarded by the Gatekeeper for this feature.
    ///
    /// Preguntas has no page of its own: the quiz-question screens are
    /// reached from inside the games screen, so only the API is gated.
    pub const fn gated_path(self) -> Option<&'static str> {
        match self {
            Feature::Posts => Some("/posts"),
            Feature::Juegos => Some("/juegos"),
            Feature::Miembros => Some("/miembros"),
            Feature::Autoridades => Some("/autoridades"),
            Feature::Eventos => Some("/eventos"),
            Feature::Impresiones => Some("/impresiones"),
            Feature::Preguntas => None,
        }
    }
}

/// NavView
///
/// A named, iconified link to one feature area of the dashboard. Static
/// build-time data; never created or mutated at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS, ToSchema)]
#[ts(export)]
pub struct NavView {
    pub name: &'static str,
    pub icon: &'static str,
}

impl NavView {
    const fn new(name: &'static str, icon: &'static str) -> Self {
        Self { name, icon }
    }
}

/// Role
///
/// The closed set of dashboard roles. A role determines which page paths are
/// reachable, which sidebar entries are rendered, and which API resources may
/// be touched, all through [`Role::features`].
///
/// Unrecognized labels never construct a `Role`: [`Role::from_label`] returns
/// `None` and every caller treats that as a denial. There is deliberately no
/// fallback role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Desarrollador,
    Comunicacion,
    Impresiones,
}

/// All roles, in display order. Primarily useful for tests and tooling.
pub const ALL_ROLES: [Role; 4] = [
    Role::Admin,
    Role::Desarrollador,
    Role::Comunicacion,
    Role::Impresiones,
];

impl Role {
    /// The role→feature table. This is the single source of truth for every
    /// permission decision in the service; paths and menus are derived views
    /// of it, never declared separately.
    pub const fn features(self) -> &'static [Feature] {
        match self {
            Role::Admin => &[
                Feature::Posts,
                Feature::Juegos,
                Feature::Miembros,
                Feature::Autoridades,
                Feature::Eventos,
                Feature::Impresiones,
                Feature::Preguntas,
            ],
            Role::Desarrollador => &[Feature::Juegos, Feature::Preguntas],
            Role::Comunicacion => &[Feature::Posts, Feature::Eventos],
            Role::Impresiones => &[Feature::Impresiones],
        }
    }

    /// The exact label stored in the database and in the `role` cookie.
    pub const fn label(self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Desarrollador => "Desarrollador",
            Role::Comunicacion => "Comunicación",
            Role::Impresiones => "Impresiones",
        }
    }

    /// Resolves a label to a role. Labels must match exactly (including the
    /// accent in "Comunicación"); anything else is `None`.
    pub fn from_label(label: &str) -> Option<Role> {
        ALL_ROLES.into_iter().find(|r| r.label() == label)
    }

    /// Whether this role is granted a feature.
    pub fn allows(self, feature: Feature) -> bool {
        self.features().contains(&feature)
    }

    /// The ordered set of page paths this role may navigate to: home, plus
    /// the page of every granted feature that has one.
    pub fn allowed_paths(self) -> Vec<&'static str> {
        let mut paths = vec!["/"];
        paths.extend(self.features().iter().filter_map(|f| f.gated_path()));
        paths
    }

    /// Whether a page path is reachable for this role.
    pub fn permits_path(self, path: &str) -> bool {
        self.allowed_paths().iter().any(|allowed| *allowed == path)
    }

    /// The ordered sidebar menu for this role, derived from the feature table.
    pub fn views(self) -> Vec<NavView> {
        self.features().iter().map(|f| f.view()).collect()
    }
}
