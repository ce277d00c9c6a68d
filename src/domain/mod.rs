// Domain layer - Fleet records and the rules that act on them
pub mod cargo;
pub mod dashboard;
pub mod dispatch;
pub mod fleet_map;
pub mod intercom;
pub mod maintenance;
pub mod news;
pub mod reports;
pub mod schedule;
pub mod session;
pub mod waybill;
