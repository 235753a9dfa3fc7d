/// How many records `GET /locations` returns.
pub const RECENT_LOCATIONS_LIMIT: usize = 10;
