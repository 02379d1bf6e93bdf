//! Maps service adapters

pub mod link_follower;

pub use link_follower::HttpLinkFollower;
