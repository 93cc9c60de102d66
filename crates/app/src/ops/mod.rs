pub mod daemon;
pub mod init;
pub mod login;
pub mod logout;
pub mod setup;
pub mod snips;
pub mod version;

pub use daemon::Daemon;
pub use init::Init;
pub use login::Login;
pub use logout::Logout;
pub use setup::Setup;
pub use snips::Snips;
pub use version::Version;
