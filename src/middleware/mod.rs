pub mod peer;

pub use peer::{ClientMeta, PeerAddrs};
