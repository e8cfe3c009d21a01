use crate::core::Button;

use super::catalog::{Service, SERVICES};
use super::emergency::{EmergencyModal, EmergencyService, Selection, VehicleType};
use super::notice::{Notice, NoticeQueue};
use super::screen::{ScreenSet, View};

/// Screen navigation, emergency modal and confirmation notices
///
/// Independent of the decorative scene; every operation here works whether
/// or not a scene is running.
#[derive(Debug, Default)]
pub struct ViewController {
    screens: ScreenSet,
    emergency: EmergencyModal,
    notices: NoticeQueue,
    service_grid: Vec<&'static Service>,
}

impl ViewController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visible_view(&self) -> Option<View> {
        self.screens.visible()
    }

    pub fn is_visible(&self, view: View) -> bool {
        self.screens.is_visible(view)
    }

    pub fn emergency(&self) -> &EmergencyModal {
        &self.emergency
    }

    pub fn selection(&self) -> Selection {
        self.emergency.selection()
    }

    pub fn notices(&self) -> &NoticeQueue {
        &self.notices
    }

    /// Cards currently laid out on the dashboard
    pub fn service_grid(&self) -> &[&'static Service] {
        &self.service_grid
    }

    pub fn show_welcome(&mut self) {
        self.screens.show(View::Welcome);
    }

    pub fn show_pricing(&mut self) {
        self.screens.show(View::Pricing);
    }

    pub fn show_mechanic_pricing(&mut self) {
        self.screens.show(View::MechanicPricing);
    }

    pub fn show_customer_dashboard(&mut self) {
        self.screens.show(View::CustomerDashboard);
        self.service_grid.clear();
        self.service_grid.extend(SERVICES.iter());
    }

    pub fn select_plan(&mut self, plan: &str) {
        self.notices.push(Notice::new(format!(
            "Selected {plan} plan! Redirecting to registration..."
        )));
        self.show_customer_dashboard();
    }

    pub fn join_mechanic(&mut self) {
        self.notices.push(Notice::new(
            "Welcome to MY MECHANIC! Registration process started...",
        ));
        self.show_customer_dashboard();
    }

    pub fn logout(&mut self) {
        self.show_welcome();
    }

    pub fn open_emergency(&mut self) {
        self.emergency.open();
    }

    pub fn close_emergency(&mut self) {
        self.emergency.close();
    }

    pub fn select_vehicle(&mut self, vehicle: VehicleType) {
        self.emergency.select_vehicle(vehicle);
    }

    pub fn select_service(&mut self, service: EmergencyService) {
        self.emergency.select_service(service);
    }

    /// Submit the emergency form; returns whether the request went out
    pub fn request_emergency_service(&mut self) -> bool {
        match self.emergency.submit() {
            Ok(request) => {
                log::info!(
                    "Emergency request: vehicle={} service={}",
                    request.vehicle,
                    request.service
                );
                self.notices.push(
                    Notice::new("Emergency service requested!")
                        .with_line(format!("Vehicle: {}", request.vehicle))
                        .with_line(format!("Service: {}", request.service))
                        .with_line("A mechanic will contact you within 15 minutes!"),
                );
                true
            }
            Err(e) => {
                self.notices.push(Notice::new(e.to_string()));
                false
            }
        }
    }

    pub fn book_service(&mut self, name: &str) {
        self.notices.push(
            Notice::new(format!("Service \"{name}\" booked successfully!"))
                .with_line("You will receive a confirmation call within 5 minutes."),
        );
    }

    /// Dismiss the notice on screen, if any
    pub fn acknowledge_notice(&mut self) -> Option<Notice> {
        self.notices.acknowledge()
    }

    /// Global keyboard shortcuts
    ///
    /// A pending notice swallows keys; Enter or Escape dismisses it.
    pub fn handle_key(&mut self, button: Button) {
        if !self.notices.is_empty() {
            if matches!(button, Button::Enter | Button::Escape) {
                self.notices.acknowledge();
            }
            return;
        }

        match button {
            Button::Escape => self.close_emergency(),
            Button::KeyH => self.show_welcome(),
            Button::KeyE if self.is_visible(View::CustomerDashboard) => self.open_emergency(),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashboard_lists_full_catalog_once() {
        let mut views = ViewController::new();
        views.show_customer_dashboard();
        views.show_customer_dashboard();
        assert_eq!(views.service_grid().len(), 6);
    }

    #[test]
    fn select_plan_notifies_then_shows_dashboard() {
        let mut views = ViewController::new();
        views.show_pricing();
        views.select_plan("Premium");

        assert!(views.is_visible(View::CustomerDashboard));
        assert_eq!(
            views.notices().current().map(Notice::text),
            Some("Selected Premium plan! Redirecting to registration...".to_string())
        );
    }

    #[test]
    fn book_service_message() {
        let mut views = ViewController::new();
        views.book_service("Tire Repair");
        let notice = views.acknowledge_notice().expect("notice");
        assert_eq!(
            notice.lines,
            [
                "Service \"Tire Repair\" booked successfully!",
                "You will receive a confirmation call within 5 minutes."
            ]
        );
    }

    #[test]
    fn pending_notice_swallows_shortcuts() {
        let mut views = ViewController::new();
        views.show_customer_dashboard();
        views.book_service("AC Service");

        views.handle_key(Button::KeyE);
        assert!(!views.emergency().is_open());

        views.handle_key(Button::Enter);
        assert!(views.notices().is_empty());

        views.handle_key(Button::KeyE);
        assert!(views.emergency().is_open());
    }

    #[test]
    fn emergency_shortcut_needs_dashboard() {
        let mut views = ViewController::new();
        views.show_welcome();
        views.handle_key(Button::KeyE);
        assert!(!views.emergency().is_open());
    }
}
