pub mod catalog;
pub mod controller;
pub mod emergency;
pub mod notice;
pub mod screen;
pub mod ui;

pub use catalog::{catalog_json, find_service, Plan, Service, Theme, CUSTOMER_PLANS, MECHANIC_PLANS, SERVICES};
pub use controller::ViewController;
pub use emergency::{EmergencyError, EmergencyModal, EmergencyRequest, EmergencyService, Selection, VehicleType};
pub use notice::{Notice, NoticeQueue};
pub use screen::{ScreenSet, View};
