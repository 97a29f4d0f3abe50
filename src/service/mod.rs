pub mod host_info;
pub mod record_gen;
pub mod report;
