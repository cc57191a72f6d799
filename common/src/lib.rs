//! Artificer Common Library
//!
//! CLIとWeb(WASM)で共有されるロジックと教材データ

pub mod assembly;
pub mod catalog;
pub mod error;
pub mod matching;
pub mod parts;
pub mod timer;

pub use assembly::{AssemblyState, AssemblyStep, Cable, LessonNode, RobotPart};
pub use catalog::{Catalog, ConnectionColor, EnergyType};
pub use error::{Error, Result};
pub use matching::{reduce, MatchAction, MatchError, MatchPhase, MatchState, TimerEffect};
pub use parts::{all_parts, filter_parts, NodeCategory, NodePart, PartFilter, Port};
pub use timer::{CancelHandle, ClearTicket, TimerSlot, ERROR_CLEAR_DELAY_MS};
