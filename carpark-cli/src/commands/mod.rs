//! CLI command implementations.

mod cancel;
mod check_in;
mod check_out;
mod init;
mod list;
mod models;
mod reserve;
mod slots;
mod status;

pub use cancel::CancelCommand;
pub use check_in::CheckInCommand;
pub use check_out::CheckOutCommand;
pub use init::InitCommand;
pub use list::ListCommand;
pub use models::ModelsCommand;
pub use reserve::ReserveCommand;
pub use slots::SlotsCommand;
pub use status::StatusCommand;
