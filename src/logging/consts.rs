use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;

pub const DEFAULT_CLIENT_IP: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);

/// Field whose value decides which Quickwit index an event goes to.
pub const TASK_MARKER_FIELD: &str = "task";
pub const QUICKWIT_CHANNEL_CAPACITY: usize = 1024;
pub const QUICKWIT_BATCH_SIZE: usize = 100;
pub const QUICKWIT_FLUSH_INTERVAL: Duration = Duration::from_secs(5);
