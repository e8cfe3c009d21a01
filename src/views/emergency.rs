use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VehicleType {
    Car,
    Bike,
}

impl VehicleType {
    pub const ALL: [VehicleType; 2] = [VehicleType::Car, VehicleType::Bike];

    pub fn label(self) -> &'static str {
        match self {
            VehicleType::Car => "🚗 Car",
            VehicleType::Bike => "🏍️ Bike",
        }
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            VehicleType::Car => "car",
            VehicleType::Bike => "bike",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmergencyService {
    Battery,
    Tire,
    Engine,
}

impl EmergencyService {
    pub const ALL: [EmergencyService; 3] = [
        EmergencyService::Battery,
        EmergencyService::Tire,
        EmergencyService::Engine,
    ];

    pub fn label(self) -> &'static str {
        match self {
            EmergencyService::Battery => "🔋 Battery",
            EmergencyService::Tire => "🛞 Tire",
            EmergencyService::Engine => "⚙️ Engine",
        }
    }
}

impl fmt::Display for EmergencyService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EmergencyService::Battery => "battery",
            EmergencyService::Tire => "tire",
            EmergencyService::Engine => "engine",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EmergencyError {
    #[error("Please select both vehicle and service type!")]
    IncompleteSelection,
}

/// Completed emergency request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmergencyRequest {
    pub vehicle: VehicleType,
    pub service: EmergencyService,
}

/// Choices made inside the emergency modal; one per group
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    pub vehicle: Option<VehicleType>,
    pub service: Option<EmergencyService>,
}

impl Selection {
    pub fn is_empty(&self) -> bool {
        self.vehicle.is_none() && self.service.is_none()
    }

    pub fn request(&self) -> Result<EmergencyRequest, EmergencyError> {
        match (self.vehicle, self.service) {
            (Some(vehicle), Some(service)) => Ok(EmergencyRequest { vehicle, service }),
            _ => Err(EmergencyError::IncompleteSelection),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct EmergencyModal {
    open: bool,
    selection: Selection,
}

impl EmergencyModal {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Hide the modal; the selection never outlives it
    pub fn close(&mut self) {
        self.open = false;
        self.selection = Selection::default();
    }

    pub fn select_vehicle(&mut self, vehicle: VehicleType) {
        self.selection.vehicle = Some(vehicle);
    }

    pub fn select_service(&mut self, service: EmergencyService) {
        self.selection.service = Some(service);
    }

    /// Submit the current selection, closing the modal on success
    pub fn submit(&mut self) -> Result<EmergencyRequest, EmergencyError> {
        let request = self.selection.request()?;
        self.close();
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_wire_names() {
        assert_eq!(VehicleType::Bike.to_string(), "bike");
        assert_eq!(EmergencyService::Tire.to_string(), "tire");
    }

    #[test]
    fn reselecting_replaces_previous_choice() {
        let mut modal = EmergencyModal::default();
        modal.open();
        modal.select_vehicle(VehicleType::Car);
        modal.select_vehicle(VehicleType::Bike);
        assert_eq!(modal.selection().vehicle, Some(VehicleType::Bike));
    }

    #[test]
    fn incomplete_submit_keeps_modal_and_selection() {
        let mut modal = EmergencyModal::default();
        modal.open();
        modal.select_service(EmergencyService::Engine);

        assert_eq!(modal.submit(), Err(EmergencyError::IncompleteSelection));
        assert!(modal.is_open());
        assert_eq!(modal.selection().service, Some(EmergencyService::Engine));
    }

    #[test]
    fn successful_submit_closes_and_resets() {
        let mut modal = EmergencyModal::default();
        modal.open();
        modal.select_vehicle(VehicleType::Car);
        modal.select_service(EmergencyService::Battery);

        let request = modal.submit().expect("complete selection");
        assert_eq!(request.vehicle, VehicleType::Car);
        assert_eq!(request.service, EmergencyService::Battery);
        assert!(!modal.is_open());
        assert!(modal.selection().is_empty());
    }
}
