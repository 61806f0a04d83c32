//! Amida Core Types and Algorithms
//!
//! This crate provides the foundational types and the resolution algorithm
//! for Amida (ghost-leg) lotteries. It includes:
//!
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Ladder**: Vertical lines, rungs and their batch identity ([`ladder`] module)
//! - **Layout**: Evenly spaced vertical line generation ([`layout::generate`])
//! - **Placement**: Mapping a click to the gap it falls in ([`placement::locate`])
//! - **Resolve**: Tracing every start label through the rungs ([`resolve::resolve`])
//! - **Session**: The consistent holder of lines, rungs and result ([`session::Lottery`])
//! - **Script**: Semantic model of a replayable command script ([`script`] module)

pub mod color;
pub mod error;
pub mod geometry;
pub mod ladder;
pub mod layout;
pub mod placement;
pub mod resolve;
pub mod script;
pub mod session;

pub use error::LadderError;
