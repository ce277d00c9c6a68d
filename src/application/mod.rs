// Application layer - Use cases over the fleet repository
pub mod cargo_service;
pub mod dashboard_service;
pub mod dispatch_service;
pub mod error;
pub mod fleet_repository;
pub mod ids;
pub mod intercom_service;
pub mod live_map_service;
pub mod maintenance_service;
pub mod news_service;
pub mod report_service;
pub mod session_service;
pub mod waybill_service;
