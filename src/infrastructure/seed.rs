// Seed data - Initial fleet state loaded on startup
use crate::domain::cargo::ArrivedCargo;
use crate::domain::dispatch::{
    BusAvailability, BusResource, DispatchBoard, DispatchStatus, Driver, FleetDispatch, RestStatus,
    RouteColumn, Trip,
};
use crate::domain::fleet_map::{BusUnit, Position, UnitStatus};
use crate::domain::intercom::{ActiveTrip, ManifestEntry, Message, MessageSender, TripStatus};
use crate::domain::maintenance::MaintenanceAlert;
use crate::domain::news::{NewsPost, PostStatus};
use crate::domain::schedule::{DutyStatus, FleetUnit};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use std::collections::HashMap;

pub fn maintenance_alerts() -> Vec<MaintenanceAlert> {
    [
        ("1", "PB-008", 30_500, 30_000, "Oil Change & Filter", 178),
        ("2", "PB-012", 29_800, 30_000, "Oil Change & Filter", 142),
        ("3", "PB-031", 29_100, 30_000, "Oil Change & Filter", 165),
        ("4", "PB-015", 44_200, 45_000, "Brake Inspection", 189),
        ("5", "PB-023", 60_800, 60_000, "Major Service & Inspection", 156),
        ("6", "PB-042", 18_500, 30_000, "Oil Change & Filter", 134),
        ("7", "PB-056", 25_200, 30_000, "Oil Change & Filter", 198),
        ("8", "PB-001", 89_700, 90_000, "Tire Rotation & Alignment", 172),
    ]
    .into_iter()
    .map(|(id, bus, mileage, threshold, service, daily)| {
        MaintenanceAlert::new(id, bus, mileage, threshold, service).with_auto_daily(daily)
    })
    .collect()
}

pub fn dispatches() -> Vec<FleetDispatch> {
    [
        ("1", "PB-001", "Juan Cruz", "Manila to Baguio", DispatchStatus::InTransit),
        ("2", "PB-015", "Maria Santos", "Quezon City to Tuguegarao", DispatchStatus::Departed),
        ("3", "PB-023", "Pedro Reyes", "Tarlac to Vigan", DispatchStatus::Preparing),
        ("4", "PB-042", "Ana Garcia", "Pangasinan to Laoag", DispatchStatus::Departed),
        ("5", "PB-056", "Carlos Mendoza", "Nueva Ecija to Isabela", DispatchStatus::InTransit),
    ]
    .into_iter()
    .map(|(id, bus, driver, destination, status)| FleetDispatch {
        id: id.to_string(),
        bus_number: bus.to_string(),
        driver_name: driver.to_string(),
        destination: destination.to_string(),
        status,
    })
    .collect()
}

pub fn dispatch_board() -> DispatchBoard {
    let drivers: Vec<Driver> = [
        ("d1", "Juan Cruz", RestStatus::Available),
        ("d2", "Maria Santos", RestStatus::Available),
        ("d3", "Pedro Reyes", RestStatus::OnBreak),
        ("d4", "Ana Garcia", RestStatus::Available),
        ("d5", "Carlos Mendoza", RestStatus::OnDuty),
        ("d6", "Rosa Villanueva", RestStatus::Available),
        ("d7", "Miguel Torres", RestStatus::Available),
        ("d8", "Sofia Ramos", RestStatus::OnBreak),
        ("d9", "Diego Fernandez", RestStatus::Available),
        ("d10", "Carmen Lopez", RestStatus::Available),
    ]
    .into_iter()
    .map(|(id, name, rest_status)| Driver {
        id: id.to_string(),
        name: name.to_string(),
        rest_status,
    })
    .collect();

    let buses: Vec<BusResource> = [
        ("b1", "PB-001", 45, BusAvailability::Available),
        ("b2", "PB-008", 45, BusAvailability::InUse),
        ("b3", "PB-012", 52, BusAvailability::Available),
        ("b4", "PB-015", 45, BusAvailability::Available),
        ("b5", "PB-023", 52, BusAvailability::Available),
        ("b6", "PB-031", 45, BusAvailability::InUse),
        ("b7", "PB-042", 45, BusAvailability::Available),
        ("b8", "PB-056", 52, BusAvailability::Available),
    ]
    .into_iter()
    .map(|(id, bus_number, capacity, status)| BusResource {
        id: id.to_string(),
        bus_number: bus_number.to_string(),
        capacity,
        status,
    })
    .collect();

    let route = |id: &str, name: &str, trips: Vec<Trip>| RouteColumn {
        id: id.to_string(),
        route: name.to_string(),
        trips,
    };
    let routes = vec![
        route(
            "r1",
            "Cubao to Baguio",
            vec![
                Trip {
                    id: "t1".to_string(),
                    driver_id: Some("d5".to_string()),
                    bus_id: Some("b2".to_string()),
                    departure_time: "06:00".to_string(),
                },
                Trip::unassigned("t2"),
            ],
        ),
        route("r2", "Manila to Tuguegarao", vec![Trip::unassigned("t3")]),
        route("r3", "Tarlac to Vigan", vec![Trip::unassigned("t4")]),
        route("r4", "Quezon City to Laoag", vec![Trip::unassigned("t5")]),
    ];

    DispatchBoard {
        drivers,
        buses,
        routes,
    }
}

pub fn fleet_units() -> Vec<FleetUnit> {
    [
        ("1", "PB-001", "Juan Cruz", "Manila to Baguio", "06:00 AM", DutyStatus::Active, "NLEX Dau Exit"),
        ("2", "PB-015", "Maria Santos", "Quezon City to Tuguegarao", "07:30 AM", DutyStatus::Active, "Sta. Maria, Bulacan"),
        ("3", "PB-023", "Pedro Reyes", "Tarlac to Vigan", "08:00 AM", DutyStatus::Active, "Tarlac Terminal"),
        ("4", "PB-042", "Ana Garcia", "Pangasinan to Laoag", "09:00 AM", DutyStatus::Active, "Pozorrubio"),
        ("5", "PB-056", "Carlos Mendoza", "Nueva Ecija to Isabela", "10:15 AM", DutyStatus::Active, "Cabanatuan Terminal"),
        ("6", "PB-012", "Rosa Villanueva", "Manila to Dagupan", "11:00 AM", DutyStatus::OnBreak, "Rest Stop - San Fernando"),
        ("7", "PB-034", "Miguel Torres", "Off Duty", "-", DutyStatus::OnLeave, "Garage"),
    ]
    .into_iter()
    .map(|(id, bus, driver, destination, departure, status, location)| FleetUnit {
        id: id.to_string(),
        bus_number: bus.to_string(),
        driver: driver.to_string(),
        destination: destination.to_string(),
        departure_time: departure.to_string(),
        status,
        current_location: Some(location.to_string()),
    })
    .collect()
}

pub fn arrived_cargo() -> Vec<ArrivedCargo> {
    [
        ("1", "BTI-2026-00142", "PB-001", "Manila Terminal", "8:45 AM", 3),
        ("2", "BTI-2026-00156", "PB-023", "Tarlac Hub", "9:12 AM", 5),
        ("3", "BTI-2026-00163", "PB-042", "Pangasinan Station", "10:05 AM", 2),
    ]
    .into_iter()
    .map(|(id, tracking, bus, origin, arrived_at, packages)| ArrivedCargo {
        id: id.to_string(),
        tracking_number: tracking.to_string(),
        bus_number: bus.to_string(),
        origin: origin.to_string(),
        arrived_at: arrived_at.to_string(),
        packages,
    })
    .collect()
}

pub fn active_trips() -> Vec<ActiveTrip> {
    let manifest = |entries: &[(&str, &str, &str)]| {
        entries
            .iter()
            .map(|(waybill_id, description, destination)| ManifestEntry {
                waybill_id: waybill_id.to_string(),
                description: description.to_string(),
                destination: destination.to_string(),
            })
            .collect::<Vec<_>>()
    };

    vec![
        ActiveTrip {
            id: "1".to_string(),
            bus_number: "PB-001".to_string(),
            conductor_name: "Juan Cruz".to_string(),
            route: "Manila to Baguio".to_string(),
            status: TripStatus::InTransit,
            last_active: "2 mins ago".to_string(),
            current_location: "NLEX Dau Exit".to_string(),
            eta: "45 mins to next terminal".to_string(),
            cargo: manifest(&[
                ("WB-2024-001", "Electronics (2 boxes)", "Baguio"),
                ("WB-2024-015", "Documents", "Baguio"),
            ]),
        },
        ActiveTrip {
            id: "2".to_string(),
            bus_number: "PB-015".to_string(),
            conductor_name: "Maria Santos".to_string(),
            route: "Quezon City to Tuguegarao".to_string(),
            status: TripStatus::Departed,
            last_active: "5 mins ago".to_string(),
            current_location: "Sta. Maria, Bulacan".to_string(),
            eta: "2 hrs to next terminal".to_string(),
            cargo: manifest(&[("WB-2024-032", "Medical Supplies", "Tuguegarao")]),
        },
        ActiveTrip {
            id: "3".to_string(),
            bus_number: "PB-042".to_string(),
            conductor_name: "Ana Garcia".to_string(),
            route: "Pangasinan to Laoag".to_string(),
            status: TripStatus::InTransit,
            last_active: "1 min ago".to_string(),
            current_location: "Pozorrubio".to_string(),
            eta: "1 hr 15 mins to next terminal".to_string(),
            cargo: manifest(&[
                ("WB-2024-048", "Clothing (5 bags)", "Laoag"),
                ("WB-2024-049", "Food Items", "Laoag"),
                ("WB-2024-050", "Books", "Vigan"),
            ]),
        },
        ActiveTrip {
            id: "4".to_string(),
            bus_number: "PB-023".to_string(),
            conductor_name: "Pedro Reyes".to_string(),
            route: "Tarlac to Vigan".to_string(),
            status: TripStatus::Departed,
            last_active: "12 mins ago".to_string(),
            current_location: "Tarlac Terminal".to_string(),
            eta: "30 mins to departure".to_string(),
            cargo: Vec::new(),
        },
    ]
}

fn seed_time(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 2, 24, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

pub fn message_threads() -> HashMap<String, Vec<Message>> {
    let thread = |entries: &[(&str, &str, MessageSender, u32, u32)]| {
        entries
            .iter()
            .map(|(id, text, sender, hour, minute)| Message {
                id: id.to_string(),
                text: text.to_string(),
                sender: *sender,
                sent_at: seed_time(*hour, *minute),
                image_url: None,
            })
            .collect::<Vec<_>>()
    };

    let mut threads = HashMap::new();
    threads.insert(
        "1".to_string(),
        thread(&[
            ("m1", "Good afternoon, Juan. We need an ETA update.", MessageSender::Admin, 14, 15),
            ("m2", "Roger that! Currently at NLEX Dau. Will arrive in 45 minutes.", MessageSender::Conductor, 14, 16),
            ("m3", "Thanks for the update. Any issues with the cargo?", MessageSender::Admin, 14, 17),
            ("m4", "All secure. Electronics are properly stored.", MessageSender::Conductor, 14, 18),
        ]),
    );
    threads.insert(
        "2".to_string(),
        thread(&[
            ("m1", "Maria, please confirm your current location.", MessageSender::Admin, 13, 45),
            ("m2", "At Sta. Maria, Bulacan. On schedule.", MessageSender::Conductor, 13, 47),
        ]),
    );
    threads
}

pub fn news_posts() -> Vec<NewsPost> {
    [
        ("1", "New Fare Matrix Implementation", "Operations", (2026, 2, 20), PostStatus::Published, "Admin", true),
        ("2", "Driver Safety Seminar Schedule", "HR", (2026, 2, 25), PostStatus::Draft, "HR Manager", false),
        ("3", "Maintenance Downtime Alert", "Maintenance", (2026, 2, 22), PostStatus::Published, "Fleet Mgr", true),
    ]
    .into_iter()
    .filter_map(|(id, title, category, (y, m, d), status, author, has_image)| {
        Some(NewsPost {
            id: id.to_string(),
            title: title.to_string(),
            body: String::new(),
            category: category.to_string(),
            date: NaiveDate::from_ymd_opt(y, m, d)?,
            status,
            author: author.to_string(),
            has_image,
        })
    })
    .collect()
}

pub fn bus_units() -> Vec<BusUnit> {
    [
        ("1", "PB-888", "Juan Dela Cruz", 85, "Near San Miguel Exit", (75.0, 15.0), UnitStatus::OnTime, "Manila - Baguio via NLEX", "2 mins ago"),
        ("2", "PB-042", "Maria Santos", 78, "Plaridel Tollgate", (60.0, 30.0), UnitStatus::OnTime, "Manila - Tuguegarao via NLEX", "1 min ago"),
        ("3", "PB-156", "Carlos Reyes", 45, "Bocaue Traffic Area", (35.0, 55.0), UnitStatus::Delayed, "Manila - Tarlac via NLEX", "Just now"),
        ("4", "PB-231", "Rosa Garcia", 92, "Guiguinto Rest Stop", (48.0, 42.0), UnitStatus::OnTime, "Manila - Baguio via NLEX", "3 mins ago"),
        ("5", "PB-015", "Pedro Martinez", 0, "Balintawak Terminal", (20.0, 85.0), UnitStatus::Offline, "Manila - Laoag via NLEX", "15 mins ago"),
        ("6", "PB-377", "Ana Hernandez", 82, "San Rafael Northbound", (68.0, 22.0), UnitStatus::OnTime, "Manila - Baguio via NLEX", "2 mins ago"),
    ]
    .into_iter()
    .map(|(id, bus, driver, speed, location, (x, y), status, route, last_update)| BusUnit {
        id: id.to_string(),
        bus_number: bus.to_string(),
        driver: driver.to_string(),
        speed,
        location: location.to_string(),
        position: Position { x, y },
        status,
        route: route.to_string(),
        last_update: last_update.to_string(),
    })
    .collect()
}
