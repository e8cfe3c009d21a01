//! egui rendition of the screens, the emergency modal and pending notices

use egui::{Color32, RichText};

use super::catalog::{Plan, Service, CUSTOMER_PLANS, MECHANIC_PLANS};
use super::controller::ViewController;
use super::emergency::{EmergencyService, VehicleType};
use super::screen::View;

const ACCENT: Color32 = Color32::from_rgb(0x63, 0x66, 0xf1);
const PRICE: Color32 = Color32::from_rgb(0x4a, 0xde, 0x80);
const MUTED: Color32 = Color32::from_rgb(0x9c, 0xa3, 0xaf);
const GLASS: Color32 = Color32::from_rgba_premultiplied(18, 18, 32, 190);
const CARD_WIDTH: f32 = 220.0;

/// Lay out one frame of UI; interaction goes straight into `views`
pub fn draw(ctx: &egui::Context, views: &mut ViewController) {
    egui::CentralPanel::default()
        .frame(egui::Frame::NONE.inner_margin(24.0))
        .show(ctx, |ui| match views.visible_view() {
            Some(View::Welcome) => welcome(ui, views),
            Some(View::Pricing) => pricing(ui, views),
            Some(View::MechanicPricing) => mechanic_pricing(ui, views),
            Some(View::CustomerDashboard) => dashboard(ui, views),
            None => {}
        });

    if views.emergency().is_open() {
        emergency_modal(ctx, views);
    }

    if let Some(notice) = views.notices().current().cloned() {
        egui::Modal::new(egui::Id::new("notice")).show(ctx, |ui| {
            ui.set_max_width(360.0);
            for line in &notice.lines {
                ui.label(line);
            }
            ui.add_space(8.0);
            if ui.button("OK").clicked() {
                views.acknowledge_notice();
            }
        });
    }
}

fn glass_card<R>(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> R {
    egui::Frame::NONE
        .fill(GLASS)
        .corner_radius(16.0)
        .inner_margin(16.0)
        .show(ui, |ui| {
            ui.set_width(CARD_WIDTH);
            add_contents(ui)
        })
        .inner
}

fn themed_button(ui: &mut egui::Ui, text: &str, rgb: [u8; 3]) -> egui::Response {
    let [r, g, b] = rgb;
    ui.add_sized(
        [CARD_WIDTH, 32.0],
        egui::Button::new(RichText::new(text).strong().color(Color32::WHITE))
            .fill(Color32::from_rgb(r, g, b)),
    )
}

fn welcome(ui: &mut egui::Ui, views: &mut ViewController) {
    ui.vertical_centered(|ui| {
        ui.add_space(80.0);
        ui.label(RichText::new("MY MECHANIC").size(48.0).strong().color(ACCENT));
        ui.label(RichText::new("Roadside help and doorstep servicing").size(18.0).color(MUTED));
        ui.add_space(32.0);
        if ui.button(RichText::new("I need a mechanic").size(18.0)).clicked() {
            views.show_pricing();
        }
        ui.add_space(8.0);
        if ui.button(RichText::new("I'm a mechanic").size(18.0)).clicked() {
            views.show_mechanic_pricing();
        }
    });
}

fn plan_cards(ui: &mut egui::Ui, plans: &[Plan], action: &str) -> Option<&'static str> {
    let mut chosen = None;
    ui.horizontal_wrapped(|ui| {
        for plan in plans {
            glass_card(ui, |ui| {
                ui.label(RichText::new(plan.name).size(22.0).strong());
                ui.label(RichText::new(plan.price).color(PRICE).strong());
                for perk in plan.perks {
                    ui.label(RichText::new(format!("• {perk}")).color(MUTED));
                }
                ui.add_space(8.0);
                if themed_button(ui, action, [0x63, 0x66, 0xf1]).clicked() {
                    chosen = Some(plan.name);
                }
            });
        }
    });
    chosen
}

fn pricing(ui: &mut egui::Ui, views: &mut ViewController) {
    ui.heading(View::Pricing.title());
    ui.add_space(16.0);
    if let Some(plan) = plan_cards(ui, &CUSTOMER_PLANS, "Choose plan") {
        views.select_plan(plan);
    }
    ui.add_space(16.0);
    if ui.button("← Back").clicked() {
        views.show_welcome();
    }
}

fn mechanic_pricing(ui: &mut egui::Ui, views: &mut ViewController) {
    ui.heading(View::MechanicPricing.title());
    ui.add_space(16.0);
    if plan_cards(ui, &MECHANIC_PLANS, "Join now").is_some() {
        views.join_mechanic();
    }
    ui.add_space(16.0);
    if ui.button("← Back").clicked() {
        views.show_welcome();
    }
}

fn service_card(ui: &mut egui::Ui, service: &Service) -> bool {
    glass_card(ui, |ui| {
        ui.label(RichText::new(service.icon).size(36.0));
        ui.label(RichText::new(service.name).size(20.0).strong().color(Color32::WHITE));
        ui.horizontal(|ui| {
            ui.label(RichText::new(service.price).color(PRICE).strong());
            ui.label(RichText::new(format!("⏱️ {}", service.duration)).color(MUTED));
        });
        ui.add_space(8.0);
        themed_button(ui, "Book Now", service.theme.from).clicked()
    })
}

fn dashboard(ui: &mut egui::Ui, views: &mut ViewController) {
    ui.horizontal(|ui| {
        ui.heading(View::CustomerDashboard.title());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Logout").clicked() {
                views.logout();
            }
            if ui
                .add(egui::Button::new(RichText::new("🚨 Emergency").strong()).fill(Color32::from_rgb(0xef, 0x44, 0x44)))
                .clicked()
            {
                views.open_emergency();
            }
        });
    });
    ui.add_space(16.0);

    let mut booked = None;
    egui::ScrollArea::vertical().show(ui, |ui| {
        egui::Grid::new("service_grid")
            .num_columns(3)
            .spacing([16.0, 16.0])
            .show(ui, |ui| {
                for (i, service) in views.service_grid().iter().enumerate() {
                    if service_card(ui, service) {
                        booked = Some(service.name);
                    }
                    if i % 3 == 2 {
                        ui.end_row();
                    }
                }
            });
    });

    if let Some(name) = booked {
        views.book_service(name);
    }
}

fn emergency_modal(ctx: &egui::Context, views: &mut ViewController) {
    egui::Modal::new(egui::Id::new("emergency")).show(ctx, |ui| {
        ui.set_width(320.0);
        ui.label(RichText::new("🚨 Emergency Service").size(22.0).strong());
        ui.add_space(8.0);

        let selection = views.selection();

        ui.label("Vehicle type");
        ui.horizontal(|ui| {
            for vehicle in VehicleType::ALL {
                if ui.selectable_label(selection.vehicle == Some(vehicle), vehicle.label()).clicked() {
                    views.select_vehicle(vehicle);
                }
            }
        });

        ui.label("Service needed");
        ui.horizontal(|ui| {
            for service in EmergencyService::ALL {
                if ui.selectable_label(selection.service == Some(service), service.label()).clicked() {
                    views.select_service(service);
                }
            }
        });

        ui.add_space(12.0);
        ui.horizontal(|ui| {
            if ui.button("Request Help").clicked() {
                views.request_emergency_service();
            }
            if ui.button("Cancel").clicked() {
                views.close_emergency();
            }
        });
    });
}
