mod route_record;
mod stop_record;

pub use route_record::RouteRecord;
pub use stop_record::StopRecord;
