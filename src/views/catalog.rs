use serde::Serialize;

/// Two-stop gradient used to theme a service card's button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Theme {
    pub from: [u8; 3],
    pub to: [u8; 3],
}

const BLUE: [u8; 3] = [0x3b, 0x82, 0xf6];
const CYAN: [u8; 3] = [0x06, 0xb6, 0xd4];
const GREEN: [u8; 3] = [0x22, 0xc5, 0x5e];
const EMERALD: [u8; 3] = [0x10, 0xb9, 0x81];
const PURPLE: [u8; 3] = [0xa8, 0x55, 0xf7];
const VIOLET: [u8; 3] = [0x8b, 0x5c, 0xf6];
const PINK: [u8; 3] = [0xec, 0x48, 0x99];
const ROSE: [u8; 3] = [0xf4, 0x3f, 0x5e];
const RED: [u8; 3] = [0xef, 0x44, 0x44];

/// One bookable service card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Service {
    pub icon: &'static str,
    pub name: &'static str,
    pub price: &'static str,
    pub duration: &'static str,
    pub theme: Theme,
}

pub const SERVICES: [Service; 6] = [
    Service {
        icon: "🔋",
        name: "Battery Service",
        price: "₹299",
        duration: "15 mins",
        theme: Theme { from: BLUE, to: CYAN },
    },
    Service {
        icon: "🛞",
        name: "Tire Repair",
        price: "₹399",
        duration: "30 mins",
        theme: Theme { from: GREEN, to: EMERALD },
    },
    Service {
        icon: "⚙️",
        name: "Engine Check",
        price: "₹699",
        duration: "45 mins",
        theme: Theme { from: PURPLE, to: VIOLET },
    },
    Service {
        icon: "❄️",
        name: "AC Service",
        price: "₹899",
        duration: "60 mins",
        theme: Theme { from: CYAN, to: BLUE },
    },
    Service {
        icon: "🚗",
        name: "Full Service",
        price: "₹1299",
        duration: "2 hours",
        theme: Theme { from: PINK, to: ROSE },
    },
    Service {
        icon: "🚨",
        name: "Emergency Tow",
        price: "₹15/km",
        duration: "Immediate",
        theme: Theme { from: RED, to: PINK },
    },
];

pub fn find_service(name: &str) -> Option<&'static Service> {
    SERVICES.iter().find(|s| s.name == name)
}

/// Presentation-only subscription tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Plan {
    pub name: &'static str,
    pub price: &'static str,
    pub perks: &'static [&'static str],
}

pub const CUSTOMER_PLANS: [Plan; 3] = [
    Plan {
        name: "Basic",
        price: "Free",
        perks: &["Pay per service", "Standard response time"],
    },
    Plan {
        name: "Premium",
        price: "₹499/mo",
        perks: &["Priority emergency response", "10% off every service"],
    },
    Plan {
        name: "Family",
        price: "₹899/mo",
        perks: &["Up to 4 vehicles", "Free monthly inspection"],
    },
];

pub const MECHANIC_PLANS: [Plan; 2] = [
    Plan {
        name: "Starter",
        price: "Free",
        perks: &["Nearby job alerts", "15% platform fee"],
    },
    Plan {
        name: "Pro",
        price: "₹999/mo",
        perks: &["Priority job matching", "5% platform fee"],
    },
];

/// Catalog as pretty JSON, for `--print-catalog`
pub fn catalog_json() -> serde_json::Result<String> {
    serde_json::to_string_pretty(&SERVICES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_six_services_in_order() {
        let names: Vec<_> = SERVICES.iter().map(|s| s.name).collect();
        assert_eq!(
            names,
            [
                "Battery Service",
                "Tire Repair",
                "Engine Check",
                "AC Service",
                "Full Service",
                "Emergency Tow"
            ]
        );
    }

    #[test]
    fn lookup_by_name() {
        let tow = find_service("Emergency Tow").expect("tow listed");
        assert_eq!(tow.price, "₹15/km");
        assert_eq!(tow.duration, "Immediate");
        assert!(find_service("Oil Change").is_none());
    }

    #[test]
    fn json_lists_every_service() {
        let json = catalog_json().expect("serializable");
        let parsed: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        let entries = parsed.as_array().expect("array");
        assert_eq!(entries.len(), 6);
        assert_eq!(entries[0]["name"], "Battery Service");
        assert_eq!(entries[0]["price"], "₹299");
        assert_eq!(entries[5]["theme"]["from"], serde_json::json!([0xef, 0x44, 0x44]));
    }
}
