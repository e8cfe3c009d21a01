use my_mechanic::core::Button;
use my_mechanic::views::{EmergencyService, Selection, VehicleType, View, ViewController, SERVICES};

fn on_dashboard() -> ViewController {
    let mut views = ViewController::new();
    views.show_welcome();
    views.show_customer_dashboard();
    views
}

#[cfg(test)]
mod emergency_tests {
    use super::*;

    #[test]
    fn test_submit_without_service_is_rejected() {
        let mut views = on_dashboard();
        views.open_emergency();
        views.select_vehicle(VehicleType::Car);

        assert!(!views.request_emergency_service());

        let notice = views.notices().current().expect("validation notice");
        assert_eq!(notice.text(), "Please select both vehicle and service type!");
        assert!(views.emergency().is_open());
        assert_eq!(
            views.selection(),
            Selection {
                vehicle: Some(VehicleType::Car),
                service: None,
            }
        );
    }

    #[test]
    fn test_complete_request_confirms_and_resets() {
        let mut views = on_dashboard();
        views.open_emergency();
        views.select_vehicle(VehicleType::Car);
        views.select_service(EmergencyService::Battery);

        assert!(views.request_emergency_service());

        let notice = views.acknowledge_notice().expect("confirmation notice");
        assert_eq!(
            notice.lines,
            [
                "Emergency service requested!",
                "Vehicle: car",
                "Service: battery",
                "A mechanic will contact you within 15 minutes!"
            ]
        );
        assert!(!views.emergency().is_open());
        assert_eq!(views.selection(), Selection::default());
    }

    #[test]
    fn test_cancel_discards_selection() {
        let mut views = on_dashboard();
        views.open_emergency();
        views.select_vehicle(VehicleType::Bike);
        views.select_service(EmergencyService::Tire);
        views.close_emergency();

        views.open_emergency();
        assert!(views.selection().is_empty());
    }
}

#[cfg(test)]
mod navigation_tests {
    use super::*;

    #[test]
    fn test_exactly_one_screen_after_each_transition() {
        let mut views = ViewController::new();
        let transitions: [fn(&mut ViewController); 5] = [
            ViewController::show_welcome,
            ViewController::show_pricing,
            ViewController::show_mechanic_pricing,
            ViewController::show_customer_dashboard,
            ViewController::logout,
        ];

        for transition in transitions {
            transition(&mut views);
            let shown = View::ALL.iter().filter(|&&v| views.is_visible(v)).count();
            assert_eq!(shown, 1);
        }
        assert_eq!(views.visible_view(), Some(View::Welcome));
    }

    #[test]
    fn test_join_mechanic_lands_on_dashboard() {
        let mut views = ViewController::new();
        views.show_mechanic_pricing();
        views.join_mechanic();

        assert!(views.is_visible(View::CustomerDashboard));
        assert_eq!(views.service_grid().len(), SERVICES.len());
        assert_eq!(
            views.notices().current().map(|n| n.text()),
            Some("Welcome to MY MECHANIC! Registration process started...".to_string())
        );
    }

    #[test]
    fn test_notices_queue_in_order() {
        let mut views = on_dashboard();
        views.book_service("Battery Service");
        views.book_service("Full Service");

        assert_eq!(views.notices().len(), 2);
        assert_eq!(
            views.acknowledge_notice().map(|n| n.lines[0].clone()),
            Some("Service \"Battery Service\" booked successfully!".to_string())
        );
        assert_eq!(
            views.acknowledge_notice().map(|n| n.lines[0].clone()),
            Some("Service \"Full Service\" booked successfully!".to_string())
        );
    }
}

#[cfg(test)]
mod shortcut_tests {
    use super::*;

    #[test]
    fn test_escape_closes_emergency_modal() {
        let mut views = on_dashboard();
        views.open_emergency();
        views.select_vehicle(VehicleType::Car);

        views.handle_key(Button::Escape);
        assert!(!views.emergency().is_open());
        assert!(views.selection().is_empty());
    }

    #[test]
    fn test_h_returns_home_from_anywhere() {
        let mut views = ViewController::new();
        views.show_pricing();
        views.handle_key(Button::KeyH);
        assert_eq!(views.visible_view(), Some(View::Welcome));
    }

    #[test]
    fn test_e_opens_emergency_only_on_dashboard() {
        let mut views = ViewController::new();
        for show in [ViewController::show_welcome, ViewController::show_pricing, ViewController::show_mechanic_pricing] {
            show(&mut views);
            views.handle_key(Button::KeyE);
            assert!(!views.emergency().is_open());
        }

        views.show_customer_dashboard();
        views.handle_key(Button::KeyE);
        assert!(views.emergency().is_open());
    }

    #[test]
    fn test_escape_dismisses_notice_before_modal() {
        let mut views = on_dashboard();
        views.open_emergency();
        views.request_emergency_service();

        views.handle_key(Button::Escape);
        assert!(views.notices().is_empty());
        assert!(views.emergency().is_open());

        views.handle_key(Button::Escape);
        assert!(!views.emergency().is_open());
    }

    #[test]
    fn test_unbound_buttons_do_nothing() {
        let mut views = on_dashboard();
        views.handle_key(Button::Enter);
        assert_eq!(views.visible_view(), Some(View::CustomerDashboard));
        assert!(!views.emergency().is_open());
    }
}
