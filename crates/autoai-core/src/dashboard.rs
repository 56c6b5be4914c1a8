use autoai_contracts::fleet::Vehicle;
use tracing::debug;

/// Fleet-wide overview or a single vehicle's detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardMode {
    #[default]
    Fleet,
    Single,
}

impl DashboardMode {
    pub fn label(self) -> &'static str {
        match self {
            DashboardMode::Fleet => "Fleet View",
            DashboardMode::Single => "Single Vehicle",
        }
    }
}

/// State of the live dashboard page. A fresh mount starts in fleet mode on
/// the first vehicle.
#[derive(Debug, Clone)]
pub struct DashboardView {
    mode: DashboardMode,
    vehicles: Vec<Vehicle>,
    selected: usize,
}

impl DashboardView {
    pub fn new(vehicles: Vec<Vehicle>) -> Self {
        Self {
            mode: DashboardMode::Fleet,
            vehicles,
            selected: 0,
        }
    }

    pub fn mode(&self) -> DashboardMode {
        self.mode
    }

    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            DashboardMode::Fleet => DashboardMode::Single,
            DashboardMode::Single => DashboardMode::Fleet,
        };
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// `None` only for an empty fleet.
    pub fn selected_vehicle(&self) -> Option<&Vehicle> {
        self.vehicles.get(self.selected)
    }

    pub fn next_vehicle(&mut self) {
        if self.vehicles.is_empty() {
            return;
        }
        self.selected = (self.selected + 1) % self.vehicles.len();
        debug!(vehicle = %self.vehicles[self.selected].id, "vehicle selected");
    }
}
