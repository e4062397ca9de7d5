pub mod board {
    pub use tribes_core::board::*;
}
pub mod classify {
    pub use tribes_core::classify::*;
}
pub mod clustering {
    pub use tribes_core::clustering::*;
}
pub mod config {
    pub use tribes_core::config::*;
}
pub mod hashing {
    pub use tribes_core::hashing::*;
}
pub mod rules {
    pub use tribes_core::rules::*;
}
pub mod snapshot {
    pub use tribes_core::snapshot::*;
}
pub mod persistence {
    pub use tribes_io::session_store::*;
}
pub mod data {
    pub use tribes_data::*;
}
