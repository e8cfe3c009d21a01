/// Full-screen panels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Welcome,
    Pricing,
    MechanicPricing,
    CustomerDashboard,
}

impl View {
    pub const ALL: [View; 4] = [
        View::Welcome,
        View::Pricing,
        View::MechanicPricing,
        View::CustomerDashboard,
    ];

    pub fn title(self) -> &'static str {
        match self {
            View::Welcome => "Welcome",
            View::Pricing => "Choose your plan",
            View::MechanicPricing => "Mechanic partner plans",
            View::CustomerDashboard => "Dashboard",
        }
    }
}

/// Visibility of the screen set; at most one screen is shown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScreenSet {
    visible: Option<View>,
}

impl ScreenSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hide_all(&mut self) {
        self.visible = None;
    }

    /// Hide every screen, then reveal `view`
    pub fn show(&mut self, view: View) {
        self.hide_all();
        self.visible = Some(view);
    }

    pub fn visible(&self) -> Option<View> {
        self.visible
    }

    pub fn is_visible(&self, view: View) -> bool {
        self.visible == Some(view)
    }
}
