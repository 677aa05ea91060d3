pub mod browse;
pub mod config;
pub mod detail;
pub mod error;
pub mod evolution;
pub mod model;
pub mod pokemon;
pub mod roster;
pub mod session;
pub mod styles;
pub mod upstream;

pub use browse::*;
pub use config::*;
pub use detail::DetailComposer;
pub use error::PokedexError;
pub use model::*;
pub use roster::RosterAggregator;
pub use session::{DetailSession, RequestToken, Selection};
pub use styles::StyleTables;
pub use upstream::{HttpUpstream, Upstream};
